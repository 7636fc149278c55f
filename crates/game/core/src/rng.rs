//! Random number sources for damage rolls and reward multipliers.
//!
//! The core never reaches for a global RNG. Every random draw goes through a
//! [`SimRng`] passed in by the host, so a simulation seeded the same way
//! replays the same way.

/// Source of uniformly distributed random numbers.
pub trait SimRng {
    /// Generate the next raw 32-bit value.
    fn next_u32(&mut self) -> u32;

    /// Generate a value in range [min, max] inclusive.
    ///
    /// Returns `min` when the range is empty or a single value.
    fn range(&mut self, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        let span = u64::from(max - min) + 1;
        min + (u64::from(self.next_u32()) % span) as u32
    }
}

impl<R: SimRng + ?Sized> SimRng for &mut R {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// PCG-XSH-RR: 32-bit output from 64-bit state. Same seed, same sequence.
///
/// # References
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PcgRng {
    state: u64,
}

impl PcgRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    /// Creates a generator whose sequence is fully determined by `seed`.
    pub fn seeded(seed: u64) -> Self {
        let mut rng = Self {
            state: seed.wrapping_add(Self::INCREMENT),
        };
        rng.step();
        rng
    }

    /// Advance the LCG state by one step.
    #[inline]
    fn step(&mut self) -> u64 {
        let old = self.state;
        self.state = old
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT);
        old
    }

    /// XSH-RR output permutation.
    #[inline]
    fn output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl Default for PcgRng {
    fn default() -> Self {
        Self::seeded(0)
    }
}

impl SimRng for PcgRng {
    fn next_u32(&mut self) -> u32 {
        let state = self.step();
        Self::output(state)
    }
}

/// Replays a fixed list of raw values, cycling when exhausted.
///
/// Useful for scripted encounters and for pinning exact rolls in tests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SequenceRng {
    values: Vec<u32>,
    cursor: usize,
}

impl SequenceRng {
    pub fn new(values: impl Into<Vec<u32>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }
}

impl SimRng for SequenceRng {
    fn next_u32(&mut self) -> u32 {
        if self.values.is_empty() {
            return 0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor = (self.cursor + 1) % self.values.len();
        value
    }
}
