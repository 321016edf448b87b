use chrono::{DateTime, Utc};

use crate::error::ScorecardError;
use crate::model::{HoleCount, ParPreset, Round, RoundResult, Settings, Theme};
use crate::storage::Storage;

pub mod persist;
mod update;

pub use update::{Effect, Msg, Phase, SessionState, update};

/// The single owner of round, history and settings state. Every successful change is
/// mirrored to `storage` before the call returns.
///
/// Once a round is finalized its edits fail with `ScorecardError::RoundFinished` until a
/// new round is started.
pub struct Session<S: Storage> {
    state: SessionState,
    storage: S,
}

impl<S: Storage> Session<S> {
    /// Restores whatever `storage` holds; a saved round resumes as in progress.
    pub fn load(storage: S) -> Self {
        let state = persist::load(&storage);
        Self { state, storage }
    }

    /// Runs `msg` through `update`, then its effects.
    ///
    /// # Errors
    ///
    /// Whatever `update` refuses; the state is unchanged in that case.
    pub fn dispatch(&mut self, msg: Msg) -> Result<(), ScorecardError> {
        self.dispatch_at(msg, Utc::now())
    }

    /// `dispatch` with an explicit clock reading.
    ///
    /// # Errors
    ///
    /// Whatever `update` refuses; the state is unchanged in that case.
    pub fn dispatch_at(&mut self, msg: Msg, now: DateTime<Utc>) -> Result<(), ScorecardError> {
        let effects = update(&mut self.state, msg, now)?;
        for effect in effects {
            self.run_effect(effect);
        }
        Ok(())
    }

    fn run_effect(&mut self, effect: Effect) {
        match effect {
            Effect::Persist => persist::save(&mut self.storage, &self.state),
            Effect::ClearStorage => persist::clear(&mut self.storage),
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn current_round(&self) -> Option<&Round> {
        self.state.current_round.as_ref()
    }

    #[must_use]
    pub fn history(&self) -> &[RoundResult] {
        &self.state.history
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.state.settings
    }

    #[must_use]
    pub fn last_result(&self) -> Option<&RoundResult> {
        self.state.last_result.as_ref()
    }

    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    #[must_use]
    pub fn into_storage(self) -> S {
        self.storage
    }

    #[must_use]
    pub fn is_round_complete(&self) -> bool {
        self.current_round().is_some_and(Round::is_complete)
    }

    /// # Errors
    ///
    /// Never fails today; kept fallible like every other intent.
    pub fn start_new_round(&mut self) -> Result<(), ScorecardError> {
        self.dispatch(Msg::StartNewRound)
    }

    /// # Errors
    ///
    /// `ScorecardError::NoRound` if there is no round to copy.
    pub fn start_new_round_keeping_settings(&mut self) -> Result<(), ScorecardError> {
        self.dispatch(Msg::StartNewRoundKeepingSettings)
    }

    /// # Errors
    ///
    /// `Rejection::RosterFull` or `NoRound`.
    pub fn add_player(&mut self) -> Result<(), ScorecardError> {
        self.dispatch(Msg::AddPlayer)
    }

    /// # Errors
    ///
    /// `OutOfRange` or `NoRound`.
    pub fn remove_player(&mut self, index: usize) -> Result<(), ScorecardError> {
        self.dispatch(Msg::RemovePlayer(index))
    }

    /// # Errors
    ///
    /// `Rejection::EmptyName`, `OutOfRange` or `NoRound`.
    pub fn rename_player(&mut self, index: usize, name: &str) -> Result<(), ScorecardError> {
        self.dispatch(Msg::RenamePlayer {
            index,
            name: name.to_string(),
        })
    }

    /// # Errors
    ///
    /// `ConfirmationRequired` for an unconfirmed 18 to 9 switch, or `NoRound`.
    pub fn set_hole_count(
        &mut self,
        holes: HoleCount,
        confirmed: bool,
    ) -> Result<(), ScorecardError> {
        self.dispatch(Msg::SetHoleCount { holes, confirmed })
    }

    /// # Errors
    ///
    /// `Rejection::ParStep`, `Rejection::ParOutOfRange`, `OutOfRange` or `NoRound`.
    pub fn set_par(&mut self, hole: usize, delta: i32) -> Result<(), ScorecardError> {
        self.dispatch(Msg::SetPar { hole, delta })
    }

    /// # Errors
    ///
    /// `Rejection::PresetMismatch` or `NoRound`.
    pub fn apply_par_preset(&mut self, preset: ParPreset) -> Result<(), ScorecardError> {
        self.dispatch(Msg::ApplyParPreset(preset))
    }

    /// # Errors
    ///
    /// Stroke rejections, `OutOfRange` or `NoRound`.
    pub fn set_stroke(
        &mut self,
        player: usize,
        hole: usize,
        raw: &str,
    ) -> Result<(), ScorecardError> {
        self.dispatch(Msg::SetStroke {
            player,
            hole,
            raw: raw.to_string(),
        })
    }

    /// # Errors
    ///
    /// `NoRound`.
    pub fn set_course_name(&mut self, name: &str) -> Result<(), ScorecardError> {
        self.dispatch(Msg::SetCourseName(name.to_string()))
    }

    /// # Errors
    ///
    /// `Rejection::RatingOutOfRange` or `NoRound`.
    pub fn set_course_rating(&mut self, raw: &str) -> Result<(), ScorecardError> {
        self.dispatch(Msg::SetCourseRating(raw.to_string()))
    }

    /// # Errors
    ///
    /// `Rejection::SlopeOutOfRange` or `NoRound`.
    pub fn set_course_slope(&mut self, raw: &str) -> Result<(), ScorecardError> {
        self.dispatch(Msg::SetCourseSlope(raw.to_string()))
    }

    /// Appends the finished round to history and returns it.
    ///
    /// # Errors
    ///
    /// `ScorecardError::RoundIncomplete` while any stroke is unset, or `NoRound`.
    pub fn finalize_round(&mut self) -> Result<&RoundResult, ScorecardError> {
        self.dispatch(Msg::FinalizeRound)?;
        self.state.last_result.as_ref().ok_or(ScorecardError::NoRound)
    }

    /// # Errors
    ///
    /// Never fails today; kept fallible like every other intent.
    pub fn set_theme(&mut self, theme: Theme) -> Result<(), ScorecardError> {
        self.dispatch(Msg::SetTheme(theme))
    }

    /// # Errors
    ///
    /// `ConfirmationRequired` unless `confirmed`.
    pub fn reset_all(&mut self, confirmed: bool) -> Result<(), ScorecardError> {
        self.dispatch(Msg::ResetAll { confirmed })
    }
}
