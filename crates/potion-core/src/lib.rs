//! Core engine for the potion-formula guessing game.
//!
//! A level hides a formula of distinct colors. The player submits full guesses
//! and receives per-slot feedback; slots guessed correctly lock in place until
//! every slot is locked or the level runs out of attempts.
//!
//! The crate is presentation-agnostic: renderers drive a [`Session`] through
//! synchronous calls and draw whatever it reports.

mod color;
mod config;
mod error;
mod evaluator;
mod generator;
mod progress;
mod rack;
mod rng;
mod session;

pub use color::{Color, ParseColorError, PALETTE};
pub use config::{GameConfig, LevelDescriptor, CLASSIC_LEVELS};
pub use error::{
    ConfigurationError, GameError, GameResult, InvalidGuessError, InvalidOperationError,
};
pub use evaluator::{evaluate, Evaluation, Feedback, LockedPositions, SlotFeedback};
pub use generator::{Generator, Level};
pub use progress::{progress_percent, Progress};
pub use rack::offer_rack;
pub use rng::{shuffle, shuffled, SeededRng};
pub use session::{AttemptOutcome, AttemptStatus, LevelView, Session, SessionState};
