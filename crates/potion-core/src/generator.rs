use crate::rng::{shuffled, SeededRng};
use crate::{Color, ConfigurationError, GameConfig, LevelDescriptor};
use serde::{Deserialize, Serialize};

/// A generated level: hidden formula plus the potions the player may use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Level {
    descriptor: LevelDescriptor,
    formula: Vec<Color>,
    potion_pool: Vec<Color>,
}

impl Level {
    pub fn descriptor(&self) -> &LevelDescriptor {
        &self.descriptor
    }

    pub fn level_id(&self) -> u32 {
        self.descriptor.level_id
    }

    pub fn formula(&self) -> &[Color] {
        &self.formula
    }

    pub fn formula_length(&self) -> usize {
        self.formula.len()
    }

    pub fn potion_pool(&self) -> &[Color] {
        &self.potion_pool
    }

    pub fn max_attempts(&self) -> u32 {
        self.descriptor.max_attempts
    }
}

/// Formula and decoy generator
#[derive(Debug, Clone, Default)]
pub struct Generator {
    rng: SeededRng,
}

impl Generator {
    /// Create a generator seeded from entropy
    pub fn new() -> Self {
        Self {
            rng: SeededRng::from_entropy(),
        }
    }

    /// Create a generator with a specific seed for reproducibility
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: SeededRng::with_seed(seed),
        }
    }

    pub(crate) fn rng_mut(&mut self) -> &mut SeededRng {
        &mut self.rng
    }

    /// Draw a formula of `formula_length` distinct colors from `palette`.
    pub fn formula(
        &mut self,
        formula_length: usize,
        palette: &[Color],
    ) -> Result<Vec<Color>, ConfigurationError> {
        if formula_length > palette.len() {
            return Err(ConfigurationError::FormulaTooLong {
                formula_length,
                palette_size: palette.len(),
            });
        }
        let mut colors = shuffled(palette, &mut self.rng);
        colors.truncate(formula_length);
        Ok(colors)
    }

    /// Formula colors followed by up to `decoy_cap` colors the formula lacks.
    pub fn potion_pool(
        &mut self,
        formula: &[Color],
        palette: &[Color],
        decoy_cap: usize,
    ) -> Vec<Color> {
        let extra = decoy_cap.min(palette.len().saturating_sub(formula.len()));
        let candidates: Vec<Color> = palette
            .iter()
            .copied()
            .filter(|c| !formula.contains(c))
            .collect();
        let decoys = shuffled(&candidates, &mut self.rng);

        let mut pool = Vec::with_capacity(formula.len() + extra);
        for color in formula.iter().chain(decoys.iter().take(extra)) {
            if !pool.contains(color) {
                pool.push(*color);
            }
        }
        pool
    }

    /// Generate a full level from its descriptor.
    pub fn generate(
        &mut self,
        descriptor: LevelDescriptor,
        config: &GameConfig,
    ) -> Result<Level, ConfigurationError> {
        tracing::debug!(level = descriptor.level_id, "generating level");

        let formula = self.formula(descriptor.formula_length, &config.palette)?;
        let potion_pool = self.potion_pool(&formula, &config.palette, config.decoy_cap);

        tracing::trace!(level = descriptor.level_id, ?formula, "formula drawn");
        tracing::debug!(
            level = descriptor.level_id,
            formula_length = formula.len(),
            pool = potion_pool.len(),
            max_attempts = descriptor.max_attempts,
            "level setup complete"
        );

        Ok(Level {
            descriptor,
            formula,
            potion_pool,
        })
    }
}
