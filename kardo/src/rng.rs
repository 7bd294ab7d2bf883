use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// The engine's single source of randomness. Every shuffle, the starting
/// seat, and the random color after an ambiguous flip draw from here, so a
/// seeded engine replays identically.
#[derive(Debug, Clone)]
pub struct EngineRng(StdRng);

impl EngineRng {
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self(StdRng::from_entropy())
    }

    pub fn index(&mut self, upper: usize) -> usize {
        self.0.gen_range(0..upper)
    }

    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.0);
    }

    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.0)
    }
}
