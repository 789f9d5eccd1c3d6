use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Upper (exclusive) bound of a UV jitter draw.
pub const JITTER_RANGE: f32 = 16.0;

/// Source of per-voxel UV offsets in `[0, JITTER_RANGE)`.
pub trait JitterSource {
    fn draw(&mut self) -> f32;
}

/// Always zero.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoJitter;

impl JitterSource for NoJitter {
    fn draw(&mut self) -> f32 {
        0.0
    }
}

#[derive(Clone, Debug)]
pub struct RngJitter<R> {
    rng: R,
}

impl<R: Rng> RngJitter<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngJitter<ChaCha8Rng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(ChaCha8Rng::from_entropy())
    }
}

impl<R: Rng> JitterSource for RngJitter<R> {
    fn draw(&mut self) -> f32 {
        self.rng.gen_range(0.0..JITTER_RANGE)
    }
}
