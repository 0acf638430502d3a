//! WebAssembly bindings for the potion game.
//!
//! The page owns rendering and animation timing; it calls into [`PotionGame`]
//! with color names and reads back plain JS objects.

use potion_core::{GameConfig, GameError};
use wasm_bindgen::prelude::*;

mod game;


pub use game::{AttemptRecord, GameState, SerializableState};

// Initialize panic hook for better error messages
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn to_js(err: GameError) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

fn to_value<T: serde::Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn from_guess(guess: JsValue) -> Result<Vec<String>, JsValue> {
    serde_wasm_bindgen::from_value(guess).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn log(message: &str) {
    web_sys::console::log_1(&JsValue::from_str(message));
}

/// The main WASM game controller
#[wasm_bindgen]
pub struct PotionGame {
    state: GameState,
}

#[wasm_bindgen]
impl PotionGame {
    /// Start at level 1 with the classic level table
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<PotionGame, JsValue> {
        let state = GameState::new(GameConfig::default()).map_err(to_js)?;
        log("Initializing potion game...");
        Ok(PotionGame { state })
    }

    /// Reproducible game for a given seed
    pub fn with_seed(seed: u64) -> Result<PotionGame, JsValue> {
        let state = GameState::with_seed(GameConfig::default(), seed).map_err(to_js)?;
        Ok(PotionGame { state })
    }

    /// Start with a JSON config; missing fields take the classic defaults
    pub fn with_config_json(json: &str) -> Result<PotionGame, JsValue> {
        let config: GameConfig =
            serde_json::from_str(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let state = GameState::new(config).map_err(to_js)?;
        Ok(PotionGame { state })
    }

    /// Generate a level; returns `{ level_id, formula_length, max_attempts, potion_pool }`
    pub fn generate_level(&mut self, level_id: u32) -> Result<JsValue, JsValue> {
        let view = self.state.generate_level(level_id).map_err(to_js)?;
        log(&format!("Generating level {}", view.level_id));
        to_value(&view)
    }

    /// Score a full guess (array of color names) immediately
    pub fn submit_guess(&mut self, guess: JsValue) -> Result<JsValue, JsValue> {
        let tokens = from_guess(guess)?;
        let outcome = self.state.submit_guess(&tokens).map_err(to_js)?;
        to_value(&outcome)
    }

    /// Accept a guess and hold it until `resolve_attempt`, so the page can animate
    pub fn begin_attempt(&mut self, guess: JsValue) -> Result<(), JsValue> {
        let tokens = from_guess(guess)?;
        self.state.begin_attempt(&tokens).map_err(to_js)
    }

    /// Accept the slot-by-slot draft as the pending attempt
    pub fn begin_draft_attempt(&mut self) -> Result<(), JsValue> {
        self.state.begin_draft_attempt().map_err(to_js)
    }

    pub fn resolve_attempt(&mut self) -> Result<JsValue, JsValue> {
        let outcome = self.state.resolve_attempt().map_err(to_js)?;
        if outcome.level_complete() {
            log(&format!("Level {} completed!", outcome.level_id));
        }
        to_value(&outcome)
    }

    /// Put a rack potion into the first empty slot; returns the slot index
    pub fn select_potion(&mut self, color: &str) -> Result<usize, JsValue> {
        self.state.select_potion(color).map_err(to_js)
    }

    /// Undo the last selection; returns the color put back on the rack
    pub fn take_back(&mut self) -> Result<String, JsValue> {
        self.state
            .take_back()
            .map(|color| color.to_string())
            .map_err(to_js)
    }

    pub fn is_draft_full(&self) -> bool {
        self.state.session().draft_is_full()
    }

    /// Next level id (wraps to 1 after the last level)
    pub fn advance_level(&mut self) -> Result<u32, JsValue> {
        let next = self.state.advance_level().map_err(to_js)?;
        log(&format!("Generating level {}", next));
        Ok(next)
    }

    pub fn get_progress(&self) -> f64 {
        self.state.progress()
    }

    pub fn get_score(&self) -> u32 {
        self.state.score()
    }

    pub fn current_level(&self) -> u32 {
        self.state.session().current_level()
    }

    pub fn attempts_remaining(&self) -> u32 {
        self.state.session().attempts_remaining()
    }

    pub fn is_checking(&self) -> bool {
        self.state.session().is_checking()
    }

    /// Full board snapshot as a JS object
    pub fn get_state(&self) -> Result<JsValue, JsValue> {
        to_value(&self.state.to_serializable())
    }

    /// Full board snapshot as JSON
    pub fn get_state_json(&self) -> String {
        serde_json::to_string(&self.state.to_serializable()).unwrap_or_default()
    }
}
