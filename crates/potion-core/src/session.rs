//! Level and session state machine.
//!
//! A [`Session`] owns everything that changes during play. Guesses go through
//! two steps so a presentation layer can animate between them:
//! [`Session::begin_attempt`] validates and parks the guess, then
//! [`Session::resolve_attempt`] scores it and applies the transition.
//! [`Session::submit_guess`] does both at once.

use crate::evaluator::{check_guess, evaluate, LockedPositions, SlotFeedback};
use crate::rack::offer_rack;
use crate::{
    Color, ConfigurationError, GameConfig, GameResult, Generator, InvalidGuessError,
    InvalidOperationError, Level, Progress,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Where the session is in the guess/feedback cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    /// Waiting for the player to assemble or submit a guess
    Playing,
    /// A guess was accepted and is waiting to be resolved
    AttemptInFlight,
    /// Every slot is locked; waiting for `advance_level`
    LevelComplete,
}

/// What a resolved attempt did to the level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AttemptStatus {
    /// Attempts remain; a fresh attempt has started with locks carried over
    Continue,
    /// The formula is solved
    LevelComplete,
    /// Out of attempts; the level was regenerated from scratch
    GameOverRetry,
}

/// Everything a presentation layer needs to show an attempt's result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttemptOutcome {
    pub level_id: u32,
    /// 1-based index of the attempt that was scored
    pub attempt_index: u32,
    pub feedback: Vec<SlotFeedback>,
    /// Locks right after scoring (before any level restart)
    pub locked_positions: LockedPositions,
    pub attempts_remaining: u32,
    pub status: AttemptStatus,
}

impl AttemptOutcome {
    pub fn level_complete(&self) -> bool {
        self.status == AttemptStatus::LevelComplete
    }
}

/// Public face of a generated level; the formula stays hidden
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelView {
    pub level_id: u32,
    pub formula_length: usize,
    pub max_attempts: u32,
    /// Pool colors in palette order
    pub potion_pool: Vec<Color>,
}

/// A single player's game
#[derive(Debug, Clone)]
pub struct Session {
    config: GameConfig,
    generator: Generator,
    level: Level,
    state: SessionState,
    score: u32,
    attempts_remaining: u32,
    completed_levels: BTreeSet<u32>,
    /// Attempts started in the current level
    attempt_index: u32,
    locked: LockedPositions,
    /// Colors already shown as wrong at each slot
    splashes: Vec<BTreeSet<Color>>,
    draft: Vec<Option<Color>>,
    rack: Vec<Color>,
    pending: Option<Vec<Color>>,
}

impl Session {
    /// Start a session at level 1 with an entropy-seeded generator.
    pub fn new(config: GameConfig) -> GameResult<Self> {
        Self::with_generator(config, Generator::new())
    }

    /// Start a session whose formulas are reproducible for `seed`.
    pub fn with_seed(config: GameConfig, seed: u64) -> GameResult<Self> {
        Self::with_generator(config, Generator::with_seed(seed))
    }

    fn with_generator(config: GameConfig, mut generator: Generator) -> GameResult<Self> {
        config.validate()?;
        let descriptor = *config.level(1).ok_or(ConfigurationError::NoLevels)?;
        let level = generator.generate(descriptor, &config)?;
        let score = config.starting_score;

        let mut session = Self {
            config,
            generator,
            level: level.clone(),
            state: SessionState::Playing,
            score,
            attempts_remaining: 0,
            completed_levels: BTreeSet::new(),
            attempt_index: 0,
            locked: Vec::new(),
            splashes: Vec::new(),
            draft: Vec::new(),
            rack: Vec::new(),
            pending: None,
        };
        session.install_level(level);
        Ok(session)
    }

    /// Replace the current level with a freshly generated one.
    ///
    /// Unknown ids fall back to the first configured level.
    pub fn generate_level(&mut self, level_id: u32) -> GameResult<LevelView> {
        if self.state == SessionState::AttemptInFlight {
            return Err(InvalidOperationError::CheckingInProgress.into());
        }
        let descriptor = *self
            .config
            .level(level_id)
            .ok_or(ConfigurationError::NoLevels)?;
        if descriptor.level_id != level_id {
            tracing::warn!(
                requested = level_id,
                using = descriptor.level_id,
                "unknown level id"
            );
        }
        let level = self.generator.generate(descriptor, &self.config)?;
        self.install_level(level);
        Ok(self.level_view())
    }

    fn install_level(&mut self, level: Level) {
        let length = level.formula_length();
        self.attempts_remaining = level.max_attempts();
        self.locked = vec![None; length];
        self.splashes = vec![BTreeSet::new(); length];
        self.attempt_index = 0;
        self.pending = None;
        self.state = SessionState::Playing;
        self.level = level;
        self.start_attempt();
    }

    fn start_attempt(&mut self) {
        self.attempt_index += 1;
        self.draft = self.locked.clone();
        self.rack = offer_rack(
            self.level.formula(),
            &self.locked,
            self.level.potion_pool(),
            self.generator.rng_mut(),
        );
    }

    fn ensure_playing(&self) -> Result<(), InvalidOperationError> {
        match self.state {
            SessionState::Playing => Ok(()),
            SessionState::AttemptInFlight => Err(InvalidOperationError::CheckingInProgress),
            SessionState::LevelComplete => Err(InvalidOperationError::LevelAlreadyComplete),
        }
    }

    /// Accept a full guess for scoring. Locked slots must repeat their color.
    pub fn begin_attempt(&mut self, guess: &[Color]) -> GameResult<()> {
        self.ensure_playing()?;
        check_guess(self.level.formula(), &self.locked, guess)?;
        if let Some((slot, color)) = guess
            .iter()
            .enumerate()
            .find(|(_, c)| !self.config.palette.contains(c))
        {
            return Err(InvalidGuessError::UnknownColor {
                slot,
                color: *color,
            }
            .into());
        }

        self.pending = Some(guess.to_vec());
        self.state = SessionState::AttemptInFlight;
        Ok(())
    }

    /// Score the guess accepted by `begin_attempt` and move the level on.
    pub fn resolve_attempt(&mut self) -> GameResult<AttemptOutcome> {
        let guess = match (self.state, self.pending.take()) {
            (SessionState::AttemptInFlight, Some(guess)) => guess,
            _ => return Err(InvalidOperationError::NoAttemptInFlight.into()),
        };

        let evaluation = match evaluate(self.level.formula(), &self.locked, &guess) {
            Ok(evaluation) => evaluation,
            Err(err) => {
                self.state = SessionState::Playing;
                return Err(err.into());
            }
        };

        self.locked = evaluation.locked.clone();
        for result in evaluation.feedback.iter().filter(|f| !f.feedback.is_correct()) {
            self.splashes[result.slot].insert(result.color);
        }
        self.attempts_remaining = self.attempts_remaining.saturating_sub(1);

        let level_id = self.level.level_id();
        let attempt_index = self.attempt_index;
        let attempts_remaining = self.attempts_remaining;

        let status = if evaluation.is_solved() {
            self.state = SessionState::LevelComplete;
            self.completed_levels.insert(level_id);
            self.score += self.config.completion_bonus;
            tracing::info!(level = level_id, attempt = attempt_index, score = self.score, "level completed");
            AttemptStatus::LevelComplete
        } else if self.attempts_remaining > 0 {
            self.state = SessionState::Playing;
            self.start_attempt();
            AttemptStatus::Continue
        } else {
            tracing::info!(level = level_id, "out of attempts, restarting level");
            let descriptor = *self.level.descriptor();
            let level = match self.generator.generate(descriptor, &self.config) {
                Ok(level) => level,
                Err(err) => {
                    self.state = SessionState::Playing;
                    return Err(err.into());
                }
            };
            self.install_level(level);
            AttemptStatus::GameOverRetry
        };

        Ok(AttemptOutcome {
            level_id,
            attempt_index,
            feedback: evaluation.feedback,
            locked_positions: evaluation.locked,
            attempts_remaining,
            status,
        })
    }

    /// Validate, score and apply a guess in one step.
    pub fn submit_guess(&mut self, guess: &[Color]) -> GameResult<AttemptOutcome> {
        self.begin_attempt(guess)?;
        self.resolve_attempt()
    }

    /// Move a rack potion into the first empty slot of the draft.
    pub fn select_potion(&mut self, color: Color) -> GameResult<usize> {
        self.ensure_playing()?;
        let slot = self
            .draft
            .iter()
            .position(Option::is_none)
            .ok_or(InvalidOperationError::DraftFull)?;
        let rack_index = self
            .rack
            .iter()
            .position(|c| *c == color)
            .ok_or(InvalidOperationError::PotionUnavailable(color))?;

        self.rack.remove(rack_index);
        self.draft[slot] = Some(color);
        Ok(slot)
    }

    /// Return the most recently placed potion to the rack.
    pub fn take_back(&mut self) -> GameResult<Color> {
        self.ensure_playing()?;
        // Placement fills the lowest empty slot, so the last one placed is
        // the highest filled slot that is not locked
        let slot = (0..self.draft.len())
            .rev()
            .find(|&i| self.draft[i].is_some() && self.locked[i].is_none())
            .ok_or(InvalidOperationError::DraftEmpty)?;
        let color = self.draft[slot]
            .take()
            .ok_or(InvalidOperationError::DraftEmpty)?;
        self.rack.push(color);
        Ok(color)
    }

    pub fn draft_is_full(&self) -> bool {
        self.draft.iter().all(Option::is_some)
    }

    /// Submit the assembled draft as the next attempt.
    pub fn begin_draft_attempt(&mut self) -> GameResult<()> {
        self.ensure_playing()?;
        let guess: Option<Vec<Color>> = self.draft.iter().copied().collect();
        let guess = guess.ok_or(InvalidOperationError::DraftIncomplete)?;
        self.begin_attempt(&guess)
    }

    /// Move from a completed level to the next one, wrapping after the last.
    pub fn advance_level(&mut self) -> GameResult<u32> {
        match self.state {
            SessionState::LevelComplete => {}
            SessionState::AttemptInFlight => {
                return Err(InvalidOperationError::CheckingInProgress.into())
            }
            SessionState::Playing => return Err(InvalidOperationError::LevelNotComplete.into()),
        }
        let next = self.config.next_level_id(self.level.level_id());
        self.generate_level(next)?;
        Ok(next)
    }

    pub fn level_view(&self) -> LevelView {
        let pool = self.level.potion_pool();
        let potion_pool = self
            .config
            .palette
            .iter()
            .copied()
            .filter(|c| pool.contains(c))
            .collect();
        LevelView {
            level_id: self.level.level_id(),
            formula_length: self.level.formula_length(),
            max_attempts: self.level.max_attempts(),
            potion_pool,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn current_level(&self) -> u32 {
        self.level.level_id()
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_checking(&self) -> bool {
        self.state == SessionState::AttemptInFlight
    }

    pub fn is_level_complete(&self) -> bool {
        self.state == SessionState::LevelComplete
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn attempts_remaining(&self) -> u32 {
        self.attempts_remaining
    }

    pub fn attempt_index(&self) -> u32 {
        self.attempt_index
    }

    pub fn formula_length(&self) -> usize {
        self.level.formula_length()
    }

    pub fn completed_levels(&self) -> &BTreeSet<u32> {
        &self.completed_levels
    }

    /// Completed share of all levels, in percent.
    pub fn progress(&self) -> f64 {
        self.progress_snapshot().percent
    }

    pub fn progress_snapshot(&self) -> Progress {
        Progress::new(self.completed_levels.len(), self.config.max_levels())
    }

    pub fn locked_positions(&self) -> &[Option<Color>] {
        &self.locked
    }

    pub fn splash_positions(&self) -> &[BTreeSet<Color>] {
        &self.splashes
    }

    pub fn draft(&self) -> &[Option<Color>] {
        &self.draft
    }

    pub fn rack(&self) -> &[Color] {
        &self.rack
    }

    /// The hidden formula. For diagnostics and tests; never show it to the player.
    pub fn reveal_formula(&self) -> &[Color] {
        self.level.formula()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Feedback, GameError, LevelDescriptor, PALETTE};

    fn session() -> Session {
        Session::with_seed(GameConfig::default(), 42).unwrap()
    }

    fn single_level(formula_length: usize, max_attempts: u32) -> GameConfig {
        GameConfig {
            levels: vec![LevelDescriptor::new(1, formula_length, max_attempts)],
            ..GameConfig::default()
        }
    }

    /// A color that appears nowhere in the formula
    fn absent(session: &Session) -> Color {
        *PALETTE
            .iter()
            .find(|c| !session.reveal_formula().contains(c))
            .unwrap()
    }

    /// Keep locked slots, fill every other slot with an absent color
    fn miss(session: &Session) -> Vec<Color> {
        let filler = absent(session);
        session
            .locked_positions()
            .iter()
            .map(|lock| lock.unwrap_or(filler))
            .collect()
    }

    #[test]
    fn test_new_session() {
        let session = session();
        assert_eq!(session.current_level(), 1);
        assert_eq!(session.state(), SessionState::Playing);
        assert_eq!(session.score(), 100);
        assert_eq!(session.attempts_remaining(), 12);
        assert_eq!(session.attempt_index(), 1);
        assert_eq!(session.formula_length(), 3);
        assert_eq!(session.locked_positions(), &[None, None, None]);
        assert_eq!(session.progress(), 0.0);

        let view = session.level_view();
        assert_eq!(view.formula_length, 3);
        assert_eq!(view.potion_pool.len(), 7);
    }

    #[test]
    fn test_exact_guess_completes_level() {
        let mut session = session();
        let formula = session.reveal_formula().to_vec();
        let outcome = session.submit_guess(&formula).unwrap();

        assert!(outcome.level_complete());
        assert_eq!(outcome.feedback.len(), 3);
        assert!(outcome.feedback.iter().all(|f| f.feedback == Feedback::Correct));
        assert_eq!(outcome.attempts_remaining, 11);
        assert_eq!(session.state(), SessionState::LevelComplete);
        assert_eq!(session.score(), 150);
        assert!(session.completed_levels().contains(&1));
        assert!((session.progress() - 100.0 / 15.0).abs() < 1e-9);
    }

    #[test]
    fn test_rotated_guess_is_all_misplaced() {
        let mut session = session();
        let f = session.reveal_formula().to_vec();
        let outcome = session.submit_guess(&[f[1], f[2], f[0]]).unwrap();

        assert_eq!(outcome.status, AttemptStatus::Continue);
        assert!(outcome
            .feedback
            .iter()
            .all(|r| r.feedback == Feedback::WrongPosition));
        assert_eq!(session.attempts_remaining(), 11);
        assert_eq!(session.attempt_index(), 2);
    }

    #[test]
    fn test_swapped_pair_with_one_correct() {
        let mut session = session();
        let f = session.reveal_formula().to_vec();
        let outcome = session.submit_guess(&[f[1], f[0], f[2]]).unwrap();

        let kinds: Vec<Feedback> = outcome.feedback.iter().map(|r| r.feedback).collect();
        assert_eq!(
            kinds,
            vec![Feedback::WrongPosition, Feedback::WrongPosition, Feedback::Correct]
        );
        assert_eq!(session.locked_positions(), &[None, None, Some(f[2])]);
    }

    #[test]
    fn test_absent_color_everywhere() {
        let mut session = session();
        let guess = miss(&session);
        let outcome = session.submit_guess(&guess).unwrap();

        assert!(outcome
            .feedback
            .iter()
            .all(|r| r.feedback == Feedback::WrongColor));
        for splashes in session.splash_positions() {
            assert!(splashes.contains(&guess[0]));
        }
    }

    #[test]
    fn test_locks_persist_and_are_not_rescored() {
        let mut session = session();
        let f = session.reveal_formula().to_vec();
        let filler = absent(&session);

        session.submit_guess(&[f[0], filler, filler]).unwrap();
        assert_eq!(session.locked_positions()[0], Some(f[0]));
        assert_eq!(session.draft()[0], Some(f[0]));

        let outcome = session.submit_guess(&[f[0], f[1], filler]).unwrap();
        assert_eq!(outcome.feedback.len(), 2);
        assert!(outcome.feedback.iter().all(|r| r.slot != 0));
        assert_eq!(session.locked_positions()[0], Some(f[0]));
        assert_eq!(session.locked_positions()[1], Some(f[1]));

        let err = session.submit_guess(&[filler, f[1], f[2]]).unwrap_err();
        assert_eq!(
            err,
            GameError::InvalidGuess(InvalidGuessError::LockedSlotChanged {
                slot: 0,
                locked: f[0],
                guessed: filler,
            })
        );
        // Rejected guesses cost nothing
        assert_eq!(session.attempts_remaining(), 10);
    }

    #[test]
    fn test_running_out_restarts_level() {
        let mut session = Session::with_seed(single_level(3, 1), 7).unwrap();
        let guess = miss(&session);
        let outcome = session.submit_guess(&guess).unwrap();

        assert_eq!(outcome.status, AttemptStatus::GameOverRetry);
        assert_eq!(outcome.attempts_remaining, 0);
        assert_eq!(session.state(), SessionState::Playing);
        assert_eq!(session.current_level(), 1);
        assert_eq!(session.attempts_remaining(), 1);
        assert_eq!(session.attempt_index(), 1);
        assert_eq!(session.locked_positions(), &[None, None, None]);
        assert!(session.splash_positions().iter().all(BTreeSet::is_empty));
        assert_eq!(session.score(), 100);
        assert!(session.completed_levels().is_empty());

        // The view tracks the regenerated level's pool
        let pool = session.level_view().potion_pool;
        assert!(session.reveal_formula().iter().all(|c| pool.contains(c)));
    }

    #[test]
    fn test_restart_keeps_score_and_completed_levels() {
        let config = GameConfig {
            levels: vec![
                LevelDescriptor::new(1, 3, 4),
                LevelDescriptor::new(2, 3, 1),
            ],
            ..GameConfig::default()
        };
        let mut session = Session::with_seed(config, 3).unwrap();
        let formula = session.reveal_formula().to_vec();
        session.submit_guess(&formula).unwrap();
        assert_eq!(session.advance_level().unwrap(), 2);

        let guess = miss(&session);
        let outcome = session.submit_guess(&guess).unwrap();
        assert_eq!(outcome.status, AttemptStatus::GameOverRetry);
        assert_eq!(session.current_level(), 2);
        assert_eq!(session.score(), 150);
        assert_eq!(session.completed_levels().len(), 1);
    }

    #[test]
    fn test_one_check_at_a_time() {
        let mut session = session();
        let guess = miss(&session);
        session.begin_attempt(&guess).unwrap();
        assert!(session.is_checking());

        let err = session.submit_guess(&guess).unwrap_err();
        assert_eq!(
            err,
            GameError::InvalidOperation(InvalidOperationError::CheckingInProgress)
        );
        assert_eq!(
            session.select_potion(guess[0]).unwrap_err(),
            GameError::InvalidOperation(InvalidOperationError::CheckingInProgress)
        );
        assert_eq!(session.attempts_remaining(), 12);

        let outcome = session.resolve_attempt().unwrap();
        assert_eq!(outcome.attempt_index, 1);
        assert!(!session.is_checking());
        assert_eq!(
            session.resolve_attempt().unwrap_err(),
            GameError::InvalidOperation(InvalidOperationError::NoAttemptInFlight)
        );
    }

    #[test]
    fn test_rejects_malformed_guesses() {
        let config = GameConfig {
            levels: vec![LevelDescriptor::new(1, 3, 5)],
            palette: vec![Color::Red, Color::Yellow, Color::Purple, Color::Orange, Color::Pink],
            ..GameConfig::default()
        };
        let mut session = Session::with_seed(config, 1).unwrap();
        let f = session.reveal_formula().to_vec();

        assert_eq!(
            session.submit_guess(&f[..2]).unwrap_err(),
            GameError::InvalidGuess(InvalidGuessError::LengthMismatch {
                expected: 3,
                actual: 2,
            })
        );
        assert_eq!(
            session.submit_guess(&[f[0], Color::Brown, f[2]]).unwrap_err(),
            GameError::InvalidGuess(InvalidGuessError::UnknownColor {
                slot: 1,
                color: Color::Brown,
            })
        );
        assert_eq!(session.state(), SessionState::Playing);
        assert_eq!(session.attempts_remaining(), 5);
    }

    #[test]
    fn test_advance_requires_completion() {
        let mut session = session();
        assert_eq!(
            session.advance_level().unwrap_err(),
            GameError::InvalidOperation(InvalidOperationError::LevelNotComplete)
        );

        let formula = session.reveal_formula().to_vec();
        session.submit_guess(&formula).unwrap();
        assert_eq!(
            session.submit_guess(&formula).unwrap_err(),
            GameError::InvalidOperation(InvalidOperationError::LevelAlreadyComplete)
        );
        assert_eq!(session.advance_level().unwrap(), 2);
        assert_eq!(session.formula_length(), 4);
        assert_eq!(session.attempts_remaining(), 12);
    }

    #[test]
    fn test_last_level_wraps_to_first() {
        let mut session = session();
        let view = session.generate_level(15).unwrap();
        assert_eq!(view.formula_length, 10);
        assert_eq!(view.potion_pool.len(), 10);

        let formula = session.reveal_formula().to_vec();
        session.submit_guess(&formula).unwrap();
        assert_eq!(session.advance_level().unwrap(), 1);
        assert_eq!(session.current_level(), 1);
        assert_eq!(session.formula_length(), 3);
    }

    #[test]
    fn test_progress_never_drops_over_a_full_loop() {
        let mut session = session();
        let mut last_progress = session.progress();
        let mut last_score = session.score();

        for _ in 0..20 {
            let formula = session.reveal_formula().to_vec();
            session.submit_guess(&formula).unwrap();
            assert!(session.progress() >= last_progress);
            assert_eq!(session.score(), last_score + 50);
            last_progress = session.progress();
            last_score = session.score();

            session.advance_level().unwrap();
            assert!(session.progress() >= last_progress);
        }

        assert_eq!(session.completed_levels().len(), 15);
        assert_eq!(session.progress(), 100.0);
        assert_eq!(session.current_level(), 6);
    }

    #[test]
    fn test_unknown_level_id_falls_back() {
        let mut session = session();
        let view = session.generate_level(42).unwrap();
        assert_eq!(view.level_id, 1);
    }

    #[test]
    fn test_draft_flow() {
        let mut session = session();
        let formula = session.reveal_formula().to_vec();
        assert_eq!(session.rack().len(), 3);

        assert_eq!(
            session.begin_draft_attempt().unwrap_err(),
            GameError::InvalidOperation(InvalidOperationError::DraftIncomplete)
        );
        assert_eq!(
            session.take_back().unwrap_err(),
            GameError::InvalidOperation(InvalidOperationError::DraftEmpty)
        );

        assert_eq!(session.select_potion(formula[0]).unwrap(), 0);
        assert!(!session.rack().contains(&formula[0]));
        assert_eq!(
            session.select_potion(formula[0]).unwrap_err(),
            GameError::InvalidOperation(InvalidOperationError::PotionUnavailable(formula[0]))
        );

        assert_eq!(session.select_potion(formula[2]).unwrap(), 1);
        assert_eq!(session.take_back().unwrap(), formula[2]);
        assert!(session.rack().contains(&formula[2]));

        session.select_potion(formula[1]).unwrap();
        session.select_potion(formula[2]).unwrap();
        assert!(session.draft_is_full());
        assert!(session.rack().is_empty());
        assert_eq!(
            session.select_potion(formula[0]).unwrap_err(),
            GameError::InvalidOperation(InvalidOperationError::DraftFull)
        );

        session.begin_draft_attempt().unwrap();
        let outcome = session.resolve_attempt().unwrap();
        assert!(outcome.level_complete());
    }

    #[test]
    fn test_next_rack_skips_locked_colors() {
        let mut session = session();
        let f = session.reveal_formula().to_vec();
        let filler = absent(&session);
        session.submit_guess(&[f[0], filler, filler]).unwrap();

        let rack = session.rack();
        assert!(!rack.contains(&f[0]));
        assert!(rack.contains(&f[1]));
        assert!(rack.contains(&f[2]));
        assert_eq!(rack.len(), 3);
        assert_eq!(session.draft(), &[Some(f[0]), None, None]);

        // Locked slots are pre-filled, so the first pick lands in slot 1
        assert_eq!(session.select_potion(f[1]).unwrap(), 1);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = GameConfig {
            levels: vec![LevelDescriptor::new(1, 11, 5)],
            ..GameConfig::default()
        };
        assert_eq!(
            Session::new(config).unwrap_err(),
            GameError::Configuration(ConfigurationError::FormulaTooLong {
                formula_length: 11,
                palette_size: 10,
            })
        );
    }

    #[test]
    fn test_failed_restart_leaves_session_playable() {
        let mut session = Session::with_seed(single_level(3, 1), 7).unwrap();
        let guess = miss(&session);
        session.begin_attempt(&guess).unwrap();

        // Regenerating a 3-slot level from a 2-color palette fails
        session.config.palette.truncate(2);
        assert_eq!(
            session.resolve_attempt().unwrap_err(),
            GameError::Configuration(ConfigurationError::FormulaTooLong {
                formula_length: 3,
                palette_size: 2,
            })
        );
        assert_eq!(session.state(), SessionState::Playing);
        assert!(!session.is_checking());
        assert_eq!(
            session.resolve_attempt().unwrap_err(),
            GameError::InvalidOperation(InvalidOperationError::NoAttemptInFlight)
        );
    }

    #[test]
    fn test_session_can_move_between_threads() {
        fn assert_send<T: Send + Sync>() {}
        assert_send::<Session>();
    }
}
