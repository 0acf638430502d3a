use crate::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent};
use potion_core::{AttemptStatus, Color, Feedback, GameResult, Session};
use std::time::Duration;

/// Ticks a full rack waits before it is scored
pub const CHECK_DELAY_TICKS: u32 = 10;

/// Ticks a status message stays on screen
const MESSAGE_TICKS: u32 = 30;

/// Result of handling a key press
pub enum AppAction {
    Continue,
    Quit,
}

/// A scored attempt as drawn on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttemptRow {
    pub attempt_index: u32,
    pub guess: Vec<Color>,
    /// `None` for slots that were already locked
    pub feedback: Vec<Option<Feedback>>,
}

/// The main application state
pub struct App {
    /// Current game
    pub session: Session,
    /// Color theme
    pub theme: Theme,
    /// Selected rack position
    pub cursor: usize,
    /// Scored attempts of the current level, oldest first
    pub history: Vec<AttemptRow>,
    /// Message to display
    pub message: Option<String>,
    message_timer: u32,
    /// Ticks until the pending attempt is scored
    check_timer: u32,
    /// Guess currently being checked
    pending: Option<Vec<Color>>,
}

impl App {
    pub fn new(session: Session, theme: Theme) -> Self {
        Self {
            session,
            theme,
            cursor: 0,
            history: Vec::new(),
            message: None,
            message_timer: 0,
            check_timer: 0,
            pending: None,
        }
    }

    pub fn get_tick_rate(&self) -> Duration {
        Duration::from_millis(100)
    }

    fn set_message(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
        self.message_timer = MESSAGE_TICKS;
    }

    fn report<T>(&mut self, result: GameResult<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::debug!(%err, "action rejected");
                self.set_message(err.to_string());
                None
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return AppAction::Quit,
            _ if self.session.is_checking() => {}
            _ if self.session.is_level_complete() => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Char('n')) {
                    self.next_level();
                }
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            KeyCode::Right | KeyCode::Char('l') => {
                let last = self.session.rack().len().saturating_sub(1);
                self.cursor = (self.cursor + 1).min(last);
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.select_at(self.cursor),
            KeyCode::Char(c @ '1'..='9') => self.select_at(c as usize - '1' as usize),
            KeyCode::Backspace | KeyCode::Char('u') => {
                let result = self.session.take_back();
                self.report(result);
            }
            _ => {}
        }
        AppAction::Continue
    }

    fn select_at(&mut self, index: usize) {
        let Some(&color) = self.session.rack().get(index) else {
            return;
        };
        let result = self.session.select_potion(color);
        if self.report(result).is_none() {
            return;
        }
        self.cursor = self.cursor.min(self.session.rack().len().saturating_sub(1));

        if self.session.draft_is_full() {
            let guess: Vec<Color> = self.session.draft().iter().flatten().copied().collect();
            let result = self.session.begin_draft_attempt();
            if self.report(result).is_some() {
                self.pending = Some(guess);
                self.check_timer = CHECK_DELAY_TICKS;
            }
        }
    }

    fn next_level(&mut self) {
        let result = self.session.advance_level();
        if let Some(level) = self.report(result) {
            self.history.clear();
            self.cursor = 0;
            self.set_message(format!("Level {}", level));
        }
    }

    /// Score the pending attempt now instead of waiting for the delay.
    pub fn resolve_pending(&mut self) {
        self.check_timer = 0;
        let result = self.session.resolve_attempt();
        let Some(outcome) = self.report(result) else {
            return;
        };
        let guess = self.pending.take().unwrap_or_default();

        let mut feedback = vec![None; guess.len()];
        for result in &outcome.feedback {
            if let Some(slot) = feedback.get_mut(result.slot) {
                *slot = Some(result.feedback);
            }
        }
        let row = AttemptRow {
            attempt_index: outcome.attempt_index,
            guess,
            feedback,
        };

        match outcome.status {
            AttemptStatus::Continue => self.history.push(row),
            AttemptStatus::LevelComplete => {
                self.history.push(row);
                self.set_message(format!(
                    "Formula brewed! +{} coins",
                    self.session.config().completion_bonus
                ));
            }
            AttemptStatus::GameOverRetry => {
                self.history.clear();
                self.set_message("You're out of attempts! Try again.");
            }
        }
        self.cursor = 0;
    }

    /// Update timers (called every tick)
    pub fn tick(&mut self) {
        if self.message_timer > 0 {
            self.message_timer -= 1;
            if self.message_timer == 0 {
                self.message = None;
            }
        }

        if self.check_timer > 0 {
            self.check_timer -= 1;
            if self.check_timer == 0 {
                self.resolve_pending();
            }
        }
    }
}
