mod course;
mod player;
mod result;
mod round;
mod score;
mod settings;

pub use course::{Course, ParPreset};
pub use player::Player;
pub use result::{PlayerTotals, RoundResult};
pub use round::{HoleCount, Round};
pub use score::{HoleScore, format_diff};
pub use settings::{Settings, Theme};

pub const STANDARD_18_PARS: [i32; 18] = [4, 4, 3, 4, 5, 4, 3, 4, 4, 4, 5, 4, 3, 4, 4, 5, 3, 4];
pub const STANDARD_9_PARS: [i32; 9] = [4, 4, 3, 4, 5, 4, 3, 4, 4];

pub const MAX_PLAYERS: usize = 6;
pub const DEFAULT_PLAYER_NAME: &str = "Player";

pub const MIN_STROKE: i64 = 1;
pub const MAX_STROKE: i64 = 15;
pub const MIN_PAR: i32 = 3;
pub const MAX_PAR: i32 = 5;
pub const MIN_RATING: f64 = 67.0;
pub const MAX_RATING: f64 = 77.0;
pub const MIN_SLOPE: i32 = 55;
pub const MAX_SLOPE: i32 = 155;

pub const DEFAULT_RATING: f64 = 72.0;
pub const DEFAULT_SLOPE: i32 = 113;

/// Fresh opaque id for players and round results.
#[must_use]
pub fn generate_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}
