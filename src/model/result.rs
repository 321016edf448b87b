use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::Round;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlayerTotals {
    pub gross: i32,
    pub vs_par: i32,
    pub front9: i32,
    pub back9: i32,
    pub handicap_differential: f64,
    /// Single-round estimate only, not an official handicap index.
    pub estimated_handicap_differential: f64,
}

/// A finished round. Built once when the round is finalized and never edited afterwards.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoundResult {
    pub id: String,
    pub round: Round,
    pub finished_at: DateTime<Utc>,
    pub totals: BTreeMap<String, PlayerTotals>,
    /// Player ids of the leaders; more than one only when every tiebreak key is level.
    pub winners: Vec<String>,
}

impl RoundResult {
    #[must_use]
    pub fn winner_names(&self) -> Vec<&str> {
        self.winners
            .iter()
            .filter_map(|id| self.round.players.iter().find(|p| &p.id == id))
            .map(|p| p.name.as_str())
            .collect()
    }

    #[must_use]
    pub fn is_winner(&self, player_id: &str) -> bool {
        self.winners.iter().any(|id| id == player_id)
    }
}
