mod common;

use common::{CARD_18, init_logging, player, round_with, tee_time};
use rusty_scorecard::model::{HoleCount, Round, RoundResult, Theme};
use rusty_scorecard::score::build_round_result;
use rusty_scorecard::storage::{MemoryStorage, StorageKey};
use rusty_scorecard::{Msg, Phase, Rejection, ScorecardError, Session};

fn fresh_session() -> Session<MemoryStorage> {
    init_logging();
    Session::load(MemoryStorage::new())
}

/// Starts a round with `players` players and fills every hole with CARD_18.
fn played_round(players: usize) -> Session<MemoryStorage> {
    let mut session = fresh_session();
    session.start_new_round().unwrap();
    for _ in 0..players {
        session.add_player().unwrap();
    }
    for p in 0..players {
        for (hole, strokes) in CARD_18.iter().enumerate() {
            session.set_stroke(p, hole, &strokes.to_string()).unwrap();
        }
    }
    session
}

#[test]
fn test3_phases_follow_the_round() {
    let mut session = fresh_session();
    assert_eq!(session.phase(), Phase::NoRound);

    session.start_new_round().unwrap();
    assert_eq!(session.phase(), Phase::RoundInProgress);

    session.add_player().unwrap();
    for hole in 0..18 {
        session.set_stroke(0, hole, "4").unwrap();
    }
    assert!(session.is_round_complete());
    session.finalize_round().unwrap();
    assert_eq!(session.phase(), Phase::RoundComplete);

    session.start_new_round().unwrap();
    assert_eq!(session.phase(), Phase::RoundInProgress);
    assert!(session.last_result().is_none());
    assert_eq!(session.history().len(), 1);
}

#[test]
fn test3_edits_need_a_round() {
    let mut session = fresh_session();
    assert_eq!(session.add_player(), Err(ScorecardError::NoRound));
    assert_eq!(
        session.start_new_round_keeping_settings(),
        Err(ScorecardError::NoRound)
    );
    assert!(matches!(session.finalize_round(), Err(ScorecardError::NoRound)));
    assert_eq!(session.storage().raw(StorageKey::CurrentRound), None);
}

#[test]
fn test3_incomplete_round_cannot_be_finalized() {
    let mut session = played_round(2);
    session.set_stroke(1, 10, "").unwrap();

    assert!(matches!(
        session.finalize_round(),
        Err(ScorecardError::RoundIncomplete)
    ));
    assert_eq!(session.phase(), Phase::RoundInProgress);
    assert!(session.history().is_empty());
}

#[test]
fn test3_finalize_appends_to_history_and_persists() {
    let mut session = played_round(2);
    let result = session.finalize_round().unwrap().clone();

    assert_eq!(result.round.players.len(), 2);
    assert_eq!(result.winners.len(), 2);
    assert_eq!(result.winner_names(), vec!["Player", "Player 2"]);
    assert_eq!(session.history(), &[result.clone()]);

    let stored: Vec<RoundResult> =
        serde_json::from_str(session.storage().raw(StorageKey::History).unwrap()).unwrap();
    assert_eq!(stored, vec![result]);
}

#[test]
fn test3_finished_round_is_read_only() {
    let mut session = played_round(1);
    let gross = session.finalize_round().unwrap().totals.values().next().map(|t| t.gross);
    let stored = session.storage().raw(StorageKey::CurrentRound).map(String::from);

    assert_eq!(session.set_stroke(0, 0, "9"), Err(ScorecardError::RoundFinished));
    assert_eq!(session.set_par(0, 1), Err(ScorecardError::RoundFinished));
    assert_eq!(session.add_player(), Err(ScorecardError::RoundFinished));
    assert_eq!(session.rename_player(0, "Ann"), Err(ScorecardError::RoundFinished));
    assert_eq!(session.set_course_name("Muni"), Err(ScorecardError::RoundFinished));

    assert_eq!(session.phase(), Phase::RoundComplete);
    let round = session.current_round().unwrap();
    assert_eq!(session.last_result().map(|r| &r.round), Some(round));
    assert_eq!(gross, Some(CARD_18.iter().sum()));
    assert_eq!(
        session.storage().raw(StorageKey::CurrentRound).map(String::from),
        stored
    );

    // settings are not part of the round
    session.set_theme(Theme::Dark).unwrap();
    session.start_new_round_keeping_settings().unwrap();
    session.set_stroke(0, 0, "9").unwrap();
}

#[test]
fn test3_finalizing_twice_records_two_results() {
    let mut session = played_round(1);
    let first = session.finalize_round().unwrap().id.clone();
    let second = session.finalize_round().unwrap().id.clone();
    assert_ne!(first, second);
    assert_eq!(session.history().len(), 2);
}

#[test]
fn test3_every_change_is_mirrored_to_storage() {
    let mut session = fresh_session();
    session.start_new_round().unwrap();
    session.add_player().unwrap();
    session.rename_player(0, "Ann").unwrap();
    session.set_stroke(0, 0, "5").unwrap();

    let stored: Round =
        serde_json::from_str(session.storage().raw(StorageKey::CurrentRound).unwrap()).unwrap();
    assert_eq!(Some(&stored), session.current_round());
    assert_eq!(stored.players[0].name, "Ann");
    assert_eq!(stored.players[0].strokes[0], Some(5));
}

#[test]
fn test3_rejected_change_writes_nothing() {
    let mut session = fresh_session();
    session.start_new_round().unwrap();
    session.add_player().unwrap();
    let before = session.storage().raw(StorageKey::CurrentRound).map(String::from);
    let state = session.state().clone();

    assert_eq!(
        session.set_stroke(0, 0, "20"),
        Err(ScorecardError::Rejected(Rejection::StrokeOutOfRange(20)))
    );
    assert!(session.set_hole_count(HoleCount::Nine, false).is_err());
    assert!(session.remove_player(3).is_err());

    assert_eq!(session.state(), &state);
    assert_eq!(
        session.storage().raw(StorageKey::CurrentRound).map(String::from),
        before
    );
}

#[test]
fn test3_failed_writes_keep_the_session_going() {
    let mut session = fresh_session();
    session.start_new_round().unwrap();
    let before = session.storage().raw(StorageKey::CurrentRound).map(String::from);

    session.storage_mut().set_fail_writes(true);
    session.add_player().unwrap();
    session.add_player().unwrap();
    assert_eq!(session.current_round().unwrap().players.len(), 2);
    assert_eq!(
        session.storage().raw(StorageKey::CurrentRound).map(String::from),
        before
    );

    session.storage_mut().set_fail_writes(false);
    session.add_player().unwrap();
    let stored: Round =
        serde_json::from_str(session.storage().raw(StorageKey::CurrentRound).unwrap()).unwrap();
    assert_eq!(stored.players.len(), 3);
}

#[test]
fn test3_reset_requires_confirmation() {
    let mut session = played_round(1);
    session.finalize_round().unwrap();
    session.set_theme(Theme::Dark).unwrap();

    assert!(matches!(
        session.reset_all(false),
        Err(ScorecardError::ConfirmationRequired(_))
    ));
    assert_eq!(session.history().len(), 1);

    session.reset_all(true).unwrap();
    assert_eq!(session.phase(), Phase::NoRound);
    assert!(session.history().is_empty());
    assert_eq!(session.settings().theme, Theme::Light);
    for key in StorageKey::ALL {
        assert_eq!(session.storage().raw(key), None, "{key}");
    }
}

#[test]
fn test3_reload_resumes_the_round() {
    let mut session = fresh_session();
    session.start_new_round().unwrap();
    session.add_player().unwrap();
    session.set_stroke(0, 4, "6").unwrap();
    session.set_course_name("Muni").unwrap();
    session.set_theme(Theme::Dark).unwrap();
    let round = session.current_round().cloned();

    let reloaded = Session::load(session.into_storage());
    assert_eq!(reloaded.phase(), Phase::RoundInProgress);
    assert_eq!(reloaded.current_round().cloned(), round);
    assert_eq!(reloaded.settings().theme, Theme::Dark);
}

#[test]
fn test3_keep_settings_through_the_session() {
    let mut session = played_round(2);
    session.rename_player(1, "Bob").unwrap();
    session.set_course_slope("125").unwrap();
    session.finalize_round().unwrap();

    session.start_new_round_keeping_settings().unwrap();
    assert_eq!(session.phase(), Phase::RoundInProgress);
    let round = session.current_round().unwrap();
    assert_eq!(round.course.slope, 125);
    assert_eq!(round.players[1].name, "Bob");
    assert_eq!(round.players[1].holes_played(), 0);
}

#[test]
fn test3_corrupt_records_fall_back_to_defaults() {
    init_logging();
    let storage = MemoryStorage::new()
        .with_entry(StorageKey::CurrentRound, "{not json")
        .with_entry(StorageKey::History, "{\"rounds\": 3}")
        .with_entry(StorageKey::Settings, "[]");
    let session = Session::load(storage);

    assert_eq!(session.phase(), Phase::NoRound);
    assert!(session.history().is_empty());
    assert_eq!(session.settings().theme, Theme::Light);
}

#[test]
fn test3_stored_round_is_repaired_on_load() {
    init_logging();
    let mut round = round_with(vec![player("Ann", &CARD_18)]);
    round.players[0].strokes[2] = Some(20);
    round.players[0].strokes.truncate(12);
    round.course.slope = 400;
    let storage = MemoryStorage::new()
        .with_entry(StorageKey::CurrentRound, serde_json::to_string(&round).unwrap());

    let session = Session::load(storage);
    let loaded = session.current_round().unwrap();
    assert_eq!(loaded.players[0].strokes.len(), 18);
    assert_eq!(loaded.players[0].strokes[2], None);
    assert_eq!(loaded.players[0].strokes[0], Some(CARD_18[0]));
    assert_eq!(loaded.course.slope, 113);
}

#[test]
fn test3_bad_history_entries_are_dropped() {
    init_logging();
    let good = build_round_result(&round_with(vec![player("Ann", &CARD_18)]), tee_time());
    let mut inconsistent = good.clone();
    inconsistent.round.course.pars = vec![4; 5];

    let history = serde_json::json!([
        good,
        { "id": "x", "finishedAt": "yesterday" },
        inconsistent
    ]);
    let storage = MemoryStorage::new().with_entry(StorageKey::History, history.to_string());
    let session = Session::load(storage);

    assert_eq!(session.history(), &[good]);
}

#[test]
fn test3_update_is_pure_on_error() {
    let mut session = fresh_session();
    session.dispatch_at(Msg::StartNewRound, tee_time()).unwrap();
    assert_eq!(session.current_round().unwrap().started_at, tee_time());

    let state = session.state().clone();
    let err = session
        .dispatch_at(
            Msg::RenamePlayer {
                index: 0,
                name: "Ann".to_string(),
            },
            tee_time(),
        )
        .unwrap_err();
    assert!(!err.is_rejection());
    assert_eq!(session.state(), &state);
}
