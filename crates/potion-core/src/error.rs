use crate::Color;
use thiserror::Error;

pub type GameResult<T> = Result<T, GameError>;

/// The level table or palette cannot produce a playable level.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("formula length {formula_length} exceeds palette size {palette_size}")]
    FormulaTooLong {
        formula_length: usize,
        palette_size: usize,
    },
    #[error("level {level_id} has an empty formula")]
    EmptyFormula { level_id: u32 },
    #[error("level {level_id} allows no attempts")]
    NoAttempts { level_id: u32 },
    #[error("level table is empty")]
    NoLevels,
    #[error("expected level id {expected}, found {found}")]
    LevelOutOfSequence { expected: u32, found: u32 },
    #[error("palette lists {0} more than once")]
    DuplicatePaletteColor(Color),
}

/// A guess that cannot be evaluated against the current formula.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidGuessError {
    #[error("guess has {actual} slots, formula has {expected}")]
    LengthMismatch { expected: usize, actual: usize },
    #[error("slot {slot}: unrecognized color token `{token}`")]
    UnrecognizedToken { slot: usize, token: String },
    #[error("slot {slot}: {color} is not in the palette")]
    UnknownColor { slot: usize, color: Color },
    #[error("slot {slot} is locked to {locked}, guess has {guessed}")]
    LockedSlotChanged {
        slot: usize,
        locked: Color,
        guessed: Color,
    },
}

/// A call that is not allowed in the session's current state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidOperationError {
    #[error("checking in progress")]
    CheckingInProgress,
    #[error("no attempt is being checked")]
    NoAttemptInFlight,
    #[error("level is already complete")]
    LevelAlreadyComplete,
    #[error("level is not complete yet")]
    LevelNotComplete,
    #[error("{0} is not on the rack")]
    PotionUnavailable(Color),
    #[error("every slot is already filled")]
    DraftFull,
    #[error("draft still has empty slots")]
    DraftIncomplete,
    #[error("nothing to take back")]
    DraftEmpty,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),
    #[error("invalid guess: {0}")]
    InvalidGuess(#[from] InvalidGuessError),
    #[error("invalid operation: {0}")]
    InvalidOperation(#[from] InvalidOperationError),
}
