use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use super::course::{par_in_range, rating_in_range, slope_in_range};
use super::{
    Course, DEFAULT_PLAYER_NAME, MAX_PLAYERS, MAX_STROKE, MIN_STROKE, ParPreset, Player,
    STANDARD_18_PARS,
};
use crate::error::{Rejection, ScorecardError};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(try_from = "u8", into = "u8")]
pub enum HoleCount {
    Nine,
    Eighteen,
}

impl HoleCount {
    #[must_use]
    pub fn count(self) -> usize {
        match self {
            HoleCount::Nine => 9,
            HoleCount::Eighteen => 18,
        }
    }
}

impl TryFrom<u8> for HoleCount {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            9 => Ok(HoleCount::Nine),
            18 => Ok(HoleCount::Eighteen),
            other => Err(format!("a round has 9 or 18 holes, not {other}")),
        }
    }
}

impl From<HoleCount> for u8 {
    fn from(value: HoleCount) -> Self {
        match value {
            HoleCount::Nine => 9,
            HoleCount::Eighteen => 18,
        }
    }
}

impl fmt::Display for HoleCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.count())
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Round {
    pub holes: HoleCount,
    pub players: Vec<Player>,
    pub course: Course,
    pub started_at: DateTime<Utc>,
}

impl Round {
    /// 18 holes, empty roster, default course.
    #[must_use]
    pub fn new(started_at: DateTime<Utc>) -> Self {
        Self {
            holes: HoleCount::Eighteen,
            players: Vec::new(),
            course: Course::default(),
            started_at,
        }
    }

    /// Same hole count, a copy of the course and the roster names; new ids and no strokes.
    #[must_use]
    pub fn keep_settings(&self, started_at: DateTime<Utc>) -> Self {
        let holes = self.holes.count();
        Self {
            holes: self.holes,
            players: self.players.iter().map(|p| p.fresh_copy(holes)).collect(),
            course: self.course.clone(),
            started_at,
        }
    }

    /// True once every player has a stroke on every hole of the round.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        let holes = self.holes.count();
        self.players
            .iter()
            .all(|p| p.strokes.len() >= holes && p.strokes[..holes].iter().all(Option::is_some))
    }

    #[must_use]
    pub fn par_total(&self) -> i32 {
        self.course.par_total(self.holes.count())
    }

    /// Appends a default-named player and returns its index.
    ///
    /// # Errors
    ///
    /// `Rejection::RosterFull` once six players are on the card.
    pub fn add_player(&mut self) -> Result<usize, ScorecardError> {
        if self.players.len() >= MAX_PLAYERS {
            return Err(Rejection::RosterFull.into());
        }
        let existing = self
            .players
            .iter()
            .filter(|p| p.name.starts_with(DEFAULT_PLAYER_NAME))
            .count();
        let name = if existing > 0 {
            self.unique_name(DEFAULT_PLAYER_NAME, existing + 1, None)
        } else {
            DEFAULT_PLAYER_NAME.to_string()
        };
        debug!(name = %name, "adding player");
        self.players.push(Player::new(name, self.holes.count()));
        Ok(self.players.len() - 1)
    }

    /// # Errors
    ///
    /// `ScorecardError::OutOfRange` for an index past the roster.
    pub fn remove_player(&mut self, index: usize) -> Result<Player, ScorecardError> {
        self.check_player(index)?;
        Ok(self.players.remove(index))
    }

    /// Trims `name`; a name another player already uses gets a counter suffix.
    ///
    /// # Errors
    ///
    /// `Rejection::EmptyName` when nothing is left after trimming, `OutOfRange` for a bad index.
    pub fn rename_player(&mut self, index: usize, name: &str) -> Result<&str, ScorecardError> {
        self.check_player(index)?;
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(Rejection::EmptyName.into());
        }
        let collisions = self
            .players
            .iter()
            .enumerate()
            .filter(|(i, p)| *i != index && p.name == trimmed)
            .count();
        let name = if collisions > 0 {
            self.unique_name(trimmed, collisions + 1, Some(index))
        } else {
            trimmed.to_string()
        };
        self.players[index].name = name;
        Ok(&self.players[index].name)
    }

    /// Going from 18 to 9 drops holes 10-18 for every player and the course, so the caller
    /// must pass `confirmed`. Going from 9 to 18 pads strokes with unset holes and, when the
    /// course has fewer than 18 pars, replaces them with the standard 18 (custom front-nine
    /// pars are not kept).
    ///
    /// # Errors
    ///
    /// `ScorecardError::ConfirmationRequired` for an unconfirmed 18 to 9 switch.
    pub fn set_hole_count(
        &mut self,
        holes: HoleCount,
        confirmed: bool,
    ) -> Result<(), ScorecardError> {
        if self.holes == HoleCount::Eighteen && holes == HoleCount::Nine && !confirmed {
            return Err(ScorecardError::ConfirmationRequired(
                "switching to 9 holes removes data for holes 10-18",
            ));
        }
        let count = holes.count();
        self.holes = holes;
        for player in &mut self.players {
            player.resize_strokes(count);
        }
        match holes {
            HoleCount::Nine => self.course.pars.truncate(count),
            HoleCount::Eighteen if self.course.pars.len() < count => {
                self.course.pars = STANDARD_18_PARS.to_vec();
            }
            HoleCount::Eighteen => {}
        }
        Ok(())
    }

    /// Moves one hole's par up or down by one, returning the new par.
    ///
    /// # Errors
    ///
    /// `Rejection::ParStep` for any `delta` other than +1 or -1, `Rejection::ParOutOfRange`
    /// if the result leaves 3..=5.
    pub fn set_par(&mut self, hole: usize, delta: i32) -> Result<i32, ScorecardError> {
        self.check_hole(hole)?;
        if !matches!(delta, -1 | 1) {
            return Err(Rejection::ParStep(delta).into());
        }
        let par = self.course.pars[hole] + delta;
        if !par_in_range(par) {
            return Err(Rejection::ParOutOfRange(par).into());
        }
        self.course.pars[hole] = par;
        Ok(par)
    }

    /// Overwrites every par with the preset's layout. A preset only applies to a round with
    /// the same number of holes (`standard9` on an 18-hole round is refused rather than
    /// leaving nine holes without a par); switch the hole count first.
    ///
    /// # Errors
    ///
    /// `Rejection::PresetMismatch` if the preset does not cover exactly this round's holes.
    pub fn apply_par_preset(&mut self, preset: ParPreset) -> Result<(), ScorecardError> {
        if preset.pars().len() != self.holes.count() {
            return Err(Rejection::PresetMismatch {
                preset,
                holes: self.holes.count(),
            }
            .into());
        }
        self.course.apply_preset(preset);
        Ok(())
    }

    /// Empty input clears the hole; anything else must be a whole number of strokes in 1..=15.
    ///
    /// # Errors
    ///
    /// `Rejection::StrokeNotANumber` / `Rejection::StrokeOutOfRange` for bad input,
    /// `OutOfRange` for a bad player or hole index. The stored value is untouched on error.
    pub fn set_stroke(
        &mut self,
        player: usize,
        hole: usize,
        raw: &str,
    ) -> Result<Option<i32>, ScorecardError> {
        self.check_player(player)?;
        self.check_hole(hole)?;
        let value = parse_stroke(raw)?;
        self.players[player].strokes[hole] = value;
        Ok(value)
    }

    pub fn set_course_name(&mut self, name: &str) {
        self.course.name = name.to_string();
    }

    /// # Errors
    ///
    /// `Rejection::RatingOutOfRange`.
    pub fn set_course_rating(&mut self, raw: &str) -> Result<(), ScorecardError> {
        Ok(self.course.set_rating(raw)?)
    }

    /// # Errors
    ///
    /// `Rejection::SlopeOutOfRange`.
    pub fn set_course_slope(&mut self, raw: &str) -> Result<(), ScorecardError> {
        Ok(self.course.set_slope(raw)?)
    }

    /// Brings data read back from storage in line with the round's invariants. Returns
    /// the number of fields that had to be repaired.
    pub(crate) fn repair(&mut self) -> usize {
        let holes = self.holes.count();
        let mut repairs = 0;

        if self.course.pars.len() != holes || !self.course.pars.iter().all(|p| par_in_range(*p)) {
            self.course.pars = STANDARD_18_PARS[..holes].to_vec();
            repairs += 1;
        }
        if !rating_in_range(self.course.rating) {
            self.course.rating = super::DEFAULT_RATING;
            repairs += 1;
        }
        if !slope_in_range(self.course.slope) {
            self.course.slope = super::DEFAULT_SLOPE;
            repairs += 1;
        }
        if self.players.len() > MAX_PLAYERS {
            self.players.truncate(MAX_PLAYERS);
            repairs += 1;
        }
        for player in &mut self.players {
            if player.strokes.len() != holes {
                player.resize_strokes(holes);
                repairs += 1;
            }
            for stroke in &mut player.strokes {
                if stroke.is_some_and(|s| !stroke_in_range(i64::from(s))) {
                    *stroke = None;
                    repairs += 1;
                }
            }
        }
        repairs
    }

    fn check_player(&self, index: usize) -> Result<(), ScorecardError> {
        if index < self.players.len() {
            Ok(())
        } else {
            Err(ScorecardError::OutOfRange {
                what: "player",
                index,
                len: self.players.len(),
            })
        }
    }

    fn check_hole(&self, hole: usize) -> Result<(), ScorecardError> {
        let len = self.holes.count().min(self.course.pars.len());
        if hole < len {
            Ok(())
        } else {
            Err(ScorecardError::OutOfRange {
                what: "hole",
                index: hole,
                len,
            })
        }
    }

    fn name_taken(&self, name: &str, skip: Option<usize>) -> bool {
        self.players
            .iter()
            .enumerate()
            .any(|(i, p)| Some(i) != skip && p.name == name)
    }

    /// `"{base} {n}"` starting at `start`, bumped until no other player has it.
    fn unique_name(&self, base: &str, start: usize, skip: Option<usize>) -> String {
        let mut n = start;
        loop {
            let candidate = format!("{base} {n}");
            if !self.name_taken(&candidate, skip) {
                return candidate;
            }
            n += 1;
        }
    }
}

pub(crate) fn stroke_in_range(value: i64) -> bool {
    (MIN_STROKE..=MAX_STROKE).contains(&value)
}

fn parse_stroke(raw: &str) -> Result<Option<i32>, Rejection> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let value: i64 = trimmed
        .parse()
        .map_err(|_| Rejection::StrokeNotANumber(trimmed.to_string()))?;
    if !stroke_in_range(value) {
        return Err(Rejection::StrokeOutOfRange(value));
    }
    i32::try_from(value)
        .map(Some)
        .map_err(|_| Rejection::StrokeOutOfRange(value))
}
