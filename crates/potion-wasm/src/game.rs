//! Browser-facing game state.
//!
//! Wraps a [`Session`] with the string-typed API JavaScript talks in and keeps
//! the attempt history the page redraws its racks from.

use potion_core::{
    AttemptOutcome, AttemptStatus, Color, GameConfig, GameResult, InvalidGuessError, LevelView,
    Session, SessionState, SlotFeedback,
};
use serde::{Deserialize, Serialize};

/// One finished attempt, newest last
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttemptRecord {
    pub attempt_index: u32,
    pub guess: Vec<Color>,
    pub feedback: Vec<SlotFeedback>,
}

/// Snapshot handed to the page on every redraw
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SerializableState {
    pub level_id: u32,
    pub formula_length: usize,
    pub max_attempts: u32,
    pub attempts_remaining: u32,
    pub attempt_index: u32,
    pub score: u32,
    pub progress: f64,
    pub completed_levels: Vec<u32>,
    pub screen: SessionState,
    pub potion_pool: Vec<Color>,
    pub rack: Vec<Color>,
    pub draft: Vec<Option<Color>>,
    pub locked: Vec<Option<Color>>,
    /// Colors already rejected at each slot, in palette order
    pub splashes: Vec<Vec<Color>>,
    pub history: Vec<AttemptRecord>,
    pub message: Option<String>,
}

/// The game state
pub struct GameState {
    session: Session,
    /// Attempts of the current level
    history: Vec<AttemptRecord>,
    /// Guess waiting in `resolve_attempt`
    pending: Option<Vec<Color>>,
    message: Option<String>,
}

impl GameState {
    pub fn new(config: GameConfig) -> GameResult<Self> {
        Ok(Self::from_session(Session::new(config)?))
    }

    pub fn with_seed(config: GameConfig, seed: u64) -> GameResult<Self> {
        Ok(Self::from_session(Session::with_seed(config, seed)?))
    }

    fn from_session(session: Session) -> Self {
        Self {
            session,
            history: Vec::new(),
            pending: None,
            message: None,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Parse one color token from the page.
    pub fn parse_color(token: &str, slot: usize) -> GameResult<Color> {
        token.parse::<Color>().map_err(|_| {
            InvalidGuessError::UnrecognizedToken {
                slot,
                token: token.to_string(),
            }
            .into()
        })
    }

    pub fn parse_guess(tokens: &[String]) -> GameResult<Vec<Color>> {
        tokens
            .iter()
            .enumerate()
            .map(|(slot, token)| Self::parse_color(token, slot))
            .collect()
    }

    pub fn generate_level(&mut self, level_id: u32) -> GameResult<LevelView> {
        let view = self.session.generate_level(level_id)?;
        self.history.clear();
        self.message = None;
        Ok(view)
    }

    pub fn begin_attempt(&mut self, tokens: &[String]) -> GameResult<()> {
        let guess = Self::parse_guess(tokens)?;
        self.session.begin_attempt(&guess)?;
        self.pending = Some(guess);
        Ok(())
    }

    /// Seal the slot-by-slot draft as the pending attempt.
    pub fn begin_draft_attempt(&mut self) -> GameResult<()> {
        let guess: Vec<Color> = self.session.draft().iter().flatten().copied().collect();
        self.session.begin_draft_attempt()?;
        self.pending = Some(guess);
        Ok(())
    }

    pub fn resolve_attempt(&mut self) -> GameResult<AttemptOutcome> {
        let outcome = self.session.resolve_attempt()?;
        let guess = self.pending.take().unwrap_or_default();

        match outcome.status {
            AttemptStatus::Continue => {
                self.history.push(AttemptRecord {
                    attempt_index: outcome.attempt_index,
                    guess,
                    feedback: outcome.feedback.clone(),
                });
                self.message = None;
            }
            AttemptStatus::LevelComplete => {
                self.history.push(AttemptRecord {
                    attempt_index: outcome.attempt_index,
                    guess,
                    feedback: outcome.feedback.clone(),
                });
                self.message = Some(format!("Level {} complete!", outcome.level_id));
            }
            AttemptStatus::GameOverRetry => {
                self.history.clear();
                self.message = Some("You're out of attempts! Try again.".to_string());
            }
        }
        Ok(outcome)
    }

    pub fn submit_guess(&mut self, tokens: &[String]) -> GameResult<AttemptOutcome> {
        self.begin_attempt(tokens)?;
        self.resolve_attempt()
    }

    pub fn select_potion(&mut self, token: &str) -> GameResult<usize> {
        let color = Self::parse_color(token, 0)?;
        self.session.select_potion(color)
    }

    pub fn take_back(&mut self) -> GameResult<Color> {
        self.session.take_back()
    }

    pub fn advance_level(&mut self) -> GameResult<u32> {
        let next = self.session.advance_level()?;
        self.history.clear();
        self.message = None;
        Ok(next)
    }

    pub fn progress(&self) -> f64 {
        self.session.progress()
    }

    pub fn score(&self) -> u32 {
        self.session.score()
    }

    pub fn history(&self) -> &[AttemptRecord] {
        &self.history
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Convert to serializable format
    pub fn to_serializable(&self) -> SerializableState {
        let session = &self.session;
        let view = session.level_view();
        SerializableState {
            level_id: view.level_id,
            formula_length: view.formula_length,
            max_attempts: view.max_attempts,
            attempts_remaining: session.attempts_remaining(),
            attempt_index: session.attempt_index(),
            score: session.score(),
            progress: session.progress(),
            completed_levels: session.completed_levels().iter().copied().collect(),
            screen: session.state(),
            potion_pool: view.potion_pool,
            rack: session.rack().to_vec(),
            draft: session.draft().to_vec(),
            locked: session.locked_positions().to_vec(),
            splashes: session
                .splash_positions()
                .iter()
                .map(|set| set.iter().copied().collect())
                .collect(),
            history: self.history.clone(),
            message: self.message.clone(),
        }
    }
}
