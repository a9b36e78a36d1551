//! Game state and turn management
//!
//! [`Session`] is one round against one target word. [`Game`] owns the
//! dictionary and starts new sessions.

mod engine;
mod result;
mod session;

pub use engine::{Game, GameConfig, GameError};
pub use result::{GameResult, Outcome};
pub use session::{Key, KeyOutcome, MAX_ATTEMPTS, Rejection, Session, Status};
