use crate::{Color, ConfigurationError, PALETTE};
use serde::{Deserialize, Serialize};

/// One row of the level table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelDescriptor {
    /// 1-based level number
    pub level_id: u32,
    /// Number of slots in the hidden formula
    pub formula_length: usize,
    /// Guesses allowed before the level restarts
    pub max_attempts: u32,
}

impl LevelDescriptor {
    pub const fn new(level_id: u32, formula_length: usize, max_attempts: u32) -> Self {
        Self {
            level_id,
            formula_length,
            max_attempts,
        }
    }
}

/// The fifteen classic levels: difficulty never drops, budget never grows.
pub const CLASSIC_LEVELS: [LevelDescriptor; 15] = [
    LevelDescriptor::new(1, 3, 12),
    LevelDescriptor::new(2, 4, 12),
    LevelDescriptor::new(3, 5, 10),
    LevelDescriptor::new(4, 5, 10),
    LevelDescriptor::new(5, 6, 10),
    LevelDescriptor::new(6, 6, 8),
    LevelDescriptor::new(7, 7, 8),
    LevelDescriptor::new(8, 7, 8),
    LevelDescriptor::new(9, 8, 7),
    LevelDescriptor::new(10, 8, 7),
    LevelDescriptor::new(11, 8, 6),
    LevelDescriptor::new(12, 9, 6),
    LevelDescriptor::new(13, 9, 6),
    LevelDescriptor::new(14, 10, 5),
    LevelDescriptor::new(15, 10, 5),
];

/// Game rules and level table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Levels in play order; ids must run 1..=len
    pub levels: Vec<LevelDescriptor>,
    /// Colors formulas and decoys are drawn from
    pub palette: Vec<Color>,
    /// Score awarded when a level is completed
    pub completion_bonus: u32,
    /// Upper bound on decoy colors added to a level's pool
    pub decoy_cap: usize,
    /// Score a fresh session starts with
    pub starting_score: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            levels: CLASSIC_LEVELS.to_vec(),
            palette: PALETTE.to_vec(),
            completion_bonus: 50,
            decoy_cap: 4,
            starting_score: 100,
        }
    }
}

impl GameConfig {
    /// Number of levels before play wraps back to the first.
    pub fn max_levels(&self) -> usize {
        self.levels.len()
    }

    /// Look up a level, falling back to the first one for unknown ids.
    pub fn level(&self, level_id: u32) -> Option<&LevelDescriptor> {
        self.levels
            .iter()
            .find(|level| level.level_id == level_id)
            .or_else(|| self.levels.first())
    }

    /// The level played after `level_id`, wrapping after the last one.
    pub fn next_level_id(&self, level_id: u32) -> u32 {
        if (level_id as usize) < self.max_levels() {
            level_id + 1
        } else {
            1
        }
    }

    /// Check the table against the palette.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.levels.is_empty() {
            return Err(ConfigurationError::NoLevels);
        }

        for (i, color) in self.palette.iter().enumerate() {
            if self.palette[..i].contains(color) {
                return Err(ConfigurationError::DuplicatePaletteColor(*color));
            }
        }

        for (index, level) in self.levels.iter().enumerate() {
            let expected = index as u32 + 1;
            if level.level_id != expected {
                return Err(ConfigurationError::LevelOutOfSequence {
                    expected,
                    found: level.level_id,
                });
            }
            if level.formula_length == 0 {
                return Err(ConfigurationError::EmptyFormula {
                    level_id: level.level_id,
                });
            }
            if level.formula_length > self.palette.len() {
                return Err(ConfigurationError::FormulaTooLong {
                    formula_length: level.formula_length,
                    palette_size: self.palette.len(),
                });
            }
            if level.max_attempts == 0 {
                return Err(ConfigurationError::NoAttempts {
                    level_id: level.level_id,
                });
            }
        }

        Ok(())
    }
}
