use rand::{Rng, SeedableRng};

/// Injectable source of uniform floats in `[0, 1)`.
///
/// The stochastic stages (RGB chaos, VHS corruption) draw all of their randomness from here so a
/// render is reproducible given the same seed.
pub trait RandomSource {
    /// Next uniform sample in `[0, 1)`.
    fn next_unit(&mut self) -> f32;

    /// Uniform index in `0..len`; `len` must be non-zero.
    fn next_index(&mut self, len: usize) -> usize {
        let i = (self.next_unit() * len as f32).floor() as usize;
        i.min(len.saturating_sub(1))
    }
}

/// Seedable generator backed by [`rand::rngs::StdRng`].
#[derive(Clone, Debug)]
pub struct SeededRandom {
    rng: rand::rngs::StdRng,
}

impl SeededRandom {
    /// Deterministic generator for `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: rand::rngs::StdRng::seed_from_u64(seed),
        }
    }

    /// Generator seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self {
            rng: rand::rngs::StdRng::from_os_rng(),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_unit(&mut self) -> f32 {
        self.rng.random::<f32>()
    }
}

/// Replays a fixed list of samples, cycling when exhausted.
#[derive(Clone, Debug)]
pub struct FloatSequence {
    values: Vec<f32>,
    pos: usize,
}

impl FloatSequence {
    /// Cycle through `values`; an empty list always yields `0.0`. Values are clamped into `[0, 1)`.
    pub fn new(values: impl Into<Vec<f32>>) -> Self {
        Self {
            values: values.into(),
            pos: 0,
        }
    }

    /// Number of samples handed out so far.
    pub fn draws(&self) -> usize {
        self.pos
    }
}

impl RandomSource for FloatSequence {
    fn next_unit(&mut self) -> f32 {
        if self.values.is_empty() {
            self.pos += 1;
            return 0.0;
        }
        let v = self.values[self.pos % self.values.len()];
        self.pos += 1;
        v.clamp(0.0, 1.0 - f32::EPSILON)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/random.rs"]
mod tests;
