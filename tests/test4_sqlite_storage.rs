mod common;

use common::{CARD_9, init_logging, player, round_with};
use rusty_scorecard::model::{Round, Theme};
use rusty_scorecard::storage::{SqliteStorage, Storage, StorageKey};
use rusty_scorecard::{Phase, Session};

#[test]
fn test4_put_get_remove() {
    let mut storage = SqliteStorage::open_in_memory().unwrap();
    assert_eq!(storage.get(StorageKey::Settings).unwrap(), None);

    storage.put(StorageKey::Settings, r#"{"theme":"dark"}"#).unwrap();
    storage.put(StorageKey::Settings, r#"{"theme":"light"}"#).unwrap();
    assert_eq!(
        storage.get(StorageKey::Settings).unwrap().as_deref(),
        Some(r#"{"theme":"light"}"#)
    );

    storage.remove(StorageKey::Settings).unwrap();
    assert_eq!(storage.get(StorageKey::Settings).unwrap(), None);
    // removing a missing key is fine
    storage.remove(StorageKey::Settings).unwrap();
}

#[test]
fn test4_clear_drops_every_key() {
    let mut storage = SqliteStorage::open_in_memory().unwrap();
    for key in StorageKey::ALL {
        storage.put(key, "[]").unwrap();
    }
    storage.clear().unwrap();
    for key in StorageKey::ALL {
        assert_eq!(storage.get(key).unwrap(), None, "{key}");
    }
}

#[test]
fn test4_session_survives_reopening_the_file() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scorecard.db");

    let (round, history_len) = {
        let mut session = Session::load(SqliteStorage::open(&path).unwrap());
        session.start_new_round().unwrap();
        session.add_player().unwrap();
        session.rename_player(0, "Ann").unwrap();
        for hole in 0..18 {
            session.set_stroke(0, hole, "4").unwrap();
        }
        session.finalize_round().unwrap();
        session.start_new_round_keeping_settings().unwrap();
        session.set_stroke(0, 0, "6").unwrap();
        session.set_theme(Theme::Dark).unwrap();
        (session.current_round().cloned(), session.history().len())
    };

    let session = Session::load(SqliteStorage::open(&path).unwrap());
    assert_eq!(session.phase(), Phase::RoundInProgress);
    assert_eq!(session.current_round().cloned(), round);
    assert_eq!(session.history().len(), history_len);
    assert_eq!(session.history()[0].round.players[0].name, "Ann");
    assert_eq!(session.settings().theme, Theme::Dark);
}

#[test]
fn test4_round_json_round_trips() {
    let mut round = round_with(vec![player("Ann", &CARD_9), player("Bob", &CARD_9)]);
    round.players[1].strokes[4] = None;
    round.course.name = "Muni".to_string();
    round.course.rating = 69.3;

    let json = serde_json::to_string(&round).unwrap();
    assert!(json.contains(r#""holes":9"#), "{json}");
    assert!(json.contains(r#""startedAt":"#), "{json}");
    assert_eq!(serde_json::from_str::<Round>(&json).unwrap(), round);

    let bad = json.replace(r#""holes":9"#, r#""holes":12"#);
    assert!(serde_json::from_str::<Round>(&bad).is_err());
}

#[test]
fn test4_unreadable_path_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("nested").join("scorecard.db");
    assert!(SqliteStorage::open(&path).is_err());
}
