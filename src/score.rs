//! Scorecard arithmetic. Everything here treats an unset hole as zero strokes, so
//! end-of-round numbers are only meaningful once `Round::is_complete` holds.

use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

use crate::model::{Course, Player, PlayerTotals, Round, RoundResult, generate_id};

/// Stands in for a missing 18th-hole score so that player sorts last on that key.
pub const MISSING_HOLE_18: i32 = 999;

const HANDICAP_SLOPE_BASE: f64 = 113.0;
const HANDICAP_ESTIMATE_FACTOR: f64 = 0.96;

pub fn sum<'a, I>(values: I) -> i32
where
    I: IntoIterator<Item = &'a Option<i32>>,
{
    values.into_iter().map(|v| v.unwrap_or(0)).sum()
}

#[must_use]
pub fn front9_total(player: &Player) -> i32 {
    sum(player.strokes.iter().take(9))
}

/// Zero for a nine-hole card.
#[must_use]
pub fn back9_total(player: &Player) -> i32 {
    if player.strokes.len() > 9 {
        sum(player.strokes.iter().skip(9).take(9))
    } else {
        0
    }
}

/// Gross score over every recorded hole.
#[must_use]
pub fn total(player: &Player) -> i32 {
    sum(&player.strokes)
}

/// Gross minus the par of every hole the player has a slot for, played or not.
///
/// Mid-round this reads as if unplayed holes were holed in zero, so only trust it
/// on a complete round.
#[must_use]
pub fn vs_par(player: &Player, course: &Course) -> i32 {
    let par: i32 = course.pars.iter().take(player.strokes.len()).sum();
    total(player) - par
}

/// Rounds half up to one decimal place.
#[must_use]
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0 + 0.5).floor() / 10.0
}

#[must_use]
pub fn handicap_differential(gross: i32, rating: f64, slope: i32) -> f64 {
    round_to_tenth((f64::from(gross) - rating) * HANDICAP_SLOPE_BASE / f64::from(slope))
}

/// Rough single-round estimate; not an official handicap index.
#[must_use]
pub fn estimated_handicap(differential: f64) -> f64 {
    round_to_tenth(HANDICAP_ESTIMATE_FACTOR * differential)
}

/// Keys compared in order when ranking a card: lower is better on each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TiebreakKey {
    pub gross: i32,
    pub back9: i32,
    pub last6: i32,
    pub last3: i32,
    pub hole18: i32,
}

impl TiebreakKey {
    #[must_use]
    pub fn for_player(player: &Player) -> Self {
        let len = player.strokes.len();
        Self {
            gross: total(player),
            back9: back9_total(player),
            last6: sum(&player.strokes[len.saturating_sub(6)..]),
            last3: sum(&player.strokes[len.saturating_sub(3)..]),
            hole18: player
                .strokes
                .get(17)
                .copied()
                .flatten()
                .unwrap_or(MISSING_HOLE_18),
        }
    }
}

/// Players ranked by (gross, back 9, last 6, last 3, hole 18). The winners are every
/// player level with the leader on all five keys, so a gross tie is settled by the
/// later keys and only a full tie leaves more than one winner.
#[must_use]
pub fn calculate_winners<'a>(players: &'a [Player], _course: &Course) -> Vec<&'a Player> {
    let mut ranked: Vec<(TiebreakKey, &Player)> = players
        .iter()
        .map(|p| (TiebreakKey::for_player(p), p))
        .collect();
    ranked.sort_by_key(|(key, _)| *key);

    let Some(best) = ranked.first().map(|(key, _)| *key) else {
        return Vec::new();
    };
    ranked
        .into_iter()
        .take_while(|(key, _)| *key == best)
        .map(|(_, p)| p)
        .collect()
}

#[must_use]
pub fn player_totals(player: &Player, course: &Course) -> PlayerTotals {
    let gross = total(player);
    let differential = handicap_differential(gross, course.rating, course.slope);
    PlayerTotals {
        gross,
        vs_par: vs_par(player, course),
        front9: front9_total(player),
        back9: back9_total(player),
        handicap_differential: differential,
        estimated_handicap_differential: estimated_handicap(differential),
    }
}

/// Snapshot of `round` with totals and winners. Does not check completeness.
#[must_use]
pub fn build_round_result(round: &Round, finished_at: DateTime<Utc>) -> RoundResult {
    let totals: BTreeMap<String, PlayerTotals> = round
        .players
        .iter()
        .map(|p| (p.id.clone(), player_totals(p, &round.course)))
        .collect();
    let winners = calculate_winners(&round.players, &round.course)
        .into_iter()
        .map(|p| p.id.clone())
        .collect();
    RoundResult {
        id: generate_id(),
        round: round.clone(),
        finished_at,
        totals,
        winners,
    }
}
