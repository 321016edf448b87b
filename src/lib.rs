pub mod config;
pub mod error;
pub mod model;
pub mod repl;
pub mod score;
pub mod session;
pub mod storage;
pub mod telemetry;
pub mod view;

pub use error::{Rejection, ScorecardError};
pub use session::{Msg, Phase, Session};
