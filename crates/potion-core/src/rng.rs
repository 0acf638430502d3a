/// Small seedable PRNG, usable on wasm without pulling in `rand`.
#[derive(Debug, Clone)]
pub struct SeededRng {
    state: u64,
}

impl Default for SeededRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl SeededRng {
    /// Seed from the platform entropy source.
    pub fn from_entropy() -> Self {
        // getrandom uses crypto.getRandomValues in the browser
        let mut seed_bytes = [0u8; 8];
        getrandom::getrandom(&mut seed_bytes).unwrap_or_else(|_| {
            // Fallback: use a static counter if getrandom fails
            static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);
            let counter = COUNTER.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
            seed_bytes = counter.to_le_bytes();
        });
        Self::with_seed(u64::from_le_bytes(seed_bytes))
    }

    /// Deterministic stream for a given seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            state: seed.wrapping_add(1),
        }
    }

    fn next_u32(&mut self) -> u32 {
        // PCG-XSH-RR step
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        let xorshifted = (((self.state >> 18) ^ self.state) >> 27) as u32;
        let rot = (self.state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    /// Uniform index in `0..bound`.
    ///
    /// Draws above the largest multiple of `bound` are rejected so small
    /// bounds are not skewed toward low values.
    pub fn below(&mut self, bound: usize) -> usize {
        assert!(bound > 0, "bound must be positive");
        let bound = bound as u64;
        let span = u32::MAX as u64 + 1;
        let limit = span - span % bound;
        loop {
            let draw = self.next_u32() as u64;
            if draw < limit {
                return (draw % bound) as usize;
            }
        }
    }
}

/// Shuffle a slice in place using Fisher-Yates
pub fn shuffle<T>(slice: &mut [T], rng: &mut SeededRng) {
    for i in (1..slice.len()).rev() {
        let j = rng.below(i + 1);
        slice.swap(i, j);
    }
}

/// Shuffled copy of `items`; the input is left untouched.
pub fn shuffled<T: Clone>(items: &[T], rng: &mut SeededRng) -> Vec<T> {
    let mut out = items.to_vec();
    shuffle(&mut out, rng);
    out
}
