use chrono::{DateTime, Utc};
use tracing::info;

use crate::error::ScorecardError;
use crate::model::{HoleCount, ParPreset, Round, RoundResult, Settings, Theme};
use crate::score::build_round_result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NoRound,
    RoundInProgress,
    /// Finalized; the result is ready to show and the round is kept until a new one starts.
    RoundComplete,
}

/// Everything a session owns. Only `update` changes it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub current_round: Option<Round>,
    pub history: Vec<RoundResult>,
    pub settings: Settings,
    pub last_result: Option<RoundResult>,
}

impl SessionState {
    #[must_use]
    pub fn phase(&self) -> Phase {
        match (&self.current_round, &self.last_result) {
            (None, _) => Phase::NoRound,
            (Some(_), Some(_)) => Phase::RoundComplete,
            (Some(_), None) => Phase::RoundInProgress,
        }
    }

    /// The current round, as long as it has not been finalized. A finished round is
    /// read-only so `last_result` keeps describing it.
    fn round_mut(&mut self) -> Result<&mut Round, ScorecardError> {
        if self.last_result.is_some() {
            return Err(ScorecardError::RoundFinished);
        }
        self.current_round.as_mut().ok_or(ScorecardError::NoRound)
    }
}

/// A user intent.
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    StartNewRound,
    StartNewRoundKeepingSettings,
    AddPlayer,
    RemovePlayer(usize),
    RenamePlayer { index: usize, name: String },
    SetHoleCount { holes: HoleCount, confirmed: bool },
    SetPar { hole: usize, delta: i32 },
    ApplyParPreset(ParPreset),
    SetStroke { player: usize, hole: usize, raw: String },
    SetCourseName(String),
    SetCourseRating(String),
    SetCourseSlope(String),
    FinalizeRound,
    SetTheme(Theme),
    ResetAll { confirmed: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Persist,
    ClearStorage,
}

/// Applies `msg` to `state`. An `Err` means nothing changed and no effect should run.
///
/// # Errors
///
/// Validation rejections, bad indices, missing confirmations, finalizing an incomplete
/// round, or editing when no round exists or the round is already finished.
pub fn update(
    state: &mut SessionState,
    msg: Msg,
    now: DateTime<Utc>,
) -> Result<Vec<Effect>, ScorecardError> {
    match msg {
        Msg::StartNewRound => {
            state.current_round = Some(Round::new(now));
            state.last_result = None;
            info!("started new round");
        }
        Msg::StartNewRoundKeepingSettings => {
            let next = state
                .current_round
                .as_ref()
                .ok_or(ScorecardError::NoRound)?
                .keep_settings(now);
            state.current_round = Some(next);
            state.last_result = None;
            info!("started new round with previous course and roster");
        }
        Msg::AddPlayer => {
            state.round_mut()?.add_player()?;
        }
        Msg::RemovePlayer(index) => {
            state.round_mut()?.remove_player(index)?;
        }
        Msg::RenamePlayer { index, name } => {
            state.round_mut()?.rename_player(index, &name)?;
        }
        Msg::SetHoleCount { holes, confirmed } => {
            state.round_mut()?.set_hole_count(holes, confirmed)?;
        }
        Msg::SetPar { hole, delta } => {
            state.round_mut()?.set_par(hole, delta)?;
        }
        Msg::ApplyParPreset(preset) => {
            state.round_mut()?.apply_par_preset(preset)?;
        }
        Msg::SetStroke { player, hole, raw } => {
            state.round_mut()?.set_stroke(player, hole, &raw)?;
        }
        Msg::SetCourseName(name) => {
            state.round_mut()?.set_course_name(&name);
        }
        Msg::SetCourseRating(raw) => {
            state.round_mut()?.set_course_rating(&raw)?;
        }
        Msg::SetCourseSlope(raw) => {
            state.round_mut()?.set_course_slope(&raw)?;
        }
        Msg::FinalizeRound => {
            let round = state.current_round.as_ref().ok_or(ScorecardError::NoRound)?;
            if !round.is_complete() {
                return Err(ScorecardError::RoundIncomplete);
            }
            let result = build_round_result(round, now);
            info!(result_id = %result.id, winners = result.winners.len(), "round finalized");
            state.history.push(result.clone());
            state.last_result = Some(result);
        }
        Msg::SetTheme(theme) => {
            state.settings.theme = theme;
        }
        Msg::ResetAll { confirmed } => {
            if !confirmed {
                return Err(ScorecardError::ConfirmationRequired(
                    "this erases every saved round and setting",
                ));
            }
            *state = SessionState::default();
            info!("session reset");
            return Ok(vec![Effect::ClearStorage]);
        }
    }
    Ok(vec![Effect::Persist])
}
