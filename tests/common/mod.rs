#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use rusty_scorecard::model::{HoleCount, Player, Round};
use tracing_subscriber::{EnvFilter, fmt};

/// Test logging from `TEST_LOG`, then `RUST_LOG`, else quiet. Idempotent.
pub fn init_logging() {
    let filter = std::env::var("TEST_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .map(EnvFilter::new)
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .without_time()
        .try_init()
        .ok();
}

pub fn tee_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 5, 2, 8, 30, 0)
        .single()
        .expect("valid fixed timestamp")
}

pub fn player(name: &str, strokes: &[i32]) -> Player {
    Player {
        id: format!("id-{}", name.to_lowercase().replace(' ', "-")),
        name: name.to_string(),
        strokes: strokes.iter().copied().map(Some).collect(),
    }
}

/// A round on the default course whose hole count follows the stroke lists.
pub fn round_with(players: Vec<Player>) -> Round {
    let mut round = Round::new(tee_time());
    let nine = players.first().is_some_and(|p| p.strokes.len() == 9);
    if nine {
        round.holes = HoleCount::Nine;
        round.course.pars.truncate(9);
    }
    round.players = players;
    round
}

pub const CARD_18: [i32; 18] = [4, 4, 3, 4, 5, 4, 3, 4, 4, 5, 3, 4, 4, 5, 3, 4, 4, 3];
pub const CARD_9: [i32; 9] = [4, 5, 3, 4, 6, 4, 3, 5, 4];
pub const PARS_9: [i32; 9] = [4, 4, 3, 4, 5, 4, 3, 4, 4];
