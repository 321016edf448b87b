//! Plain-text screens. Renderers only read state and scoring output.

mod history;
mod scorecard;
mod summary;

pub use history::render_history;
pub use scorecard::{render_player_card, render_scorecard, render_setup};
pub use summary::render_summary;

use crate::model::Settings;

#[must_use]
pub fn render_settings(settings: &Settings) -> String {
    format!("Theme: {}", settings.theme)
}

/// `+3`, `-2`, `E`.
#[must_use]
pub(crate) fn signed(value: i32) -> String {
    crate::model::format_diff(value)
}
