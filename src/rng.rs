//! Seeded xorshift random number generator and its derived samplers.
//!
//! This is deliberately not a library RNG: mutation output must be
//! bit-for-bit reproducible from the seed alone, across versions and
//! platforms, so the generator is part of the engine's contract. The
//! statistical quality only needs to be good enough for test-input
//! diversity, nothing cryptographic.

/// XOR'd into the caller-supplied seed so that a literal seed of 0 does not
/// pin the xorshift state at zero forever.
const SEED_WHITEN: u64 = 0x12640367f4b7ea35;

/// A basic random number generator based on xorshift64 with 64-bits of state
#[derive(Debug, Clone)]
pub struct Rng {
    /// Current generator state
    seed: u64,

    /// When set, `rand_exp` degrades to a plain uniform draw. Used for
    /// flat-distribution testing modes.
    exp_disabled: bool,
}

impl Rng {
    /// Create a new generator from `seed`
    pub fn new(seed: u64) -> Self {
        Rng {
            seed: seed ^ SEED_WHITEN,
            exp_disabled: false,
        }
    }

    /// Create a generator whose `rand_exp` is forced uniform
    pub fn new_flat(seed: u64) -> Self {
        Rng {
            exp_disabled: true,
            ..Rng::new(seed)
        }
    }

    /// Generate a random number
    ///
    /// Returns the current state, then scrambles it for the next call.
    #[inline]
    pub fn next(&mut self) -> u64 {
        let val = self.seed;
        self.seed ^= self.seed << 13;
        self.seed ^= self.seed >> 17;
        self.seed ^= self.seed << 43;
        val
    }

    /// Generates a random number with uniform distribution in the range of
    /// [min, max]
    ///
    /// Panics if `min > max`; that is always a caller bug, never an input
    /// condition.
    #[inline]
    pub fn rand(&mut self, min: u64, max: u64) -> u64 {
        // Make sure the range is sane
        assert!(min <= max, "Bad range specified for rand()");

        // If there is no range, just return `min`
        if min == max {
            return min;
        }

        // If the range is unbounded, just return a random number. The
        // modulo below would wrap `max - min + 1` to zero here.
        if min == 0 && max == u64::MAX {
            return self.next();
        }

        // Pick a random number in the range. The modulo bias on
        // non-power-of-two ranges is accepted; fixing it would change every
        // seeded output stream.
        min + (self.next() % (max - min + 1))
    }

    /// Generates a random number in [min, max] skewed toward `min`, with a
    /// worst case deviation from uniform of 0.5x. Meaning this will return
    /// uniform at least half the time.
    #[inline]
    pub fn rand_exp(&mut self, min: u64, max: u64) -> u64 {
        if self.exp_disabled {
            return self.rand(min, max);
        }

        if self.rand(0, 1) == 0 {
            // Half the time, provide uniform
            self.rand(min, max)
        } else {
            // Nested draw, exponentially favoring small magnitudes
            let x = self.rand(min, max);
            self.rand(min, x)
        }
    }

    /// `rand` over `usize` bounds, for offset and length math
    #[inline]
    pub(crate) fn rand_usize(&mut self, min: usize, max: usize) -> usize {
        self.rand(min as u64, max as u64) as usize
    }

    /// `rand_exp` over `usize` bounds, for offset and length math
    #[inline]
    pub(crate) fn rand_exp_usize(&mut self, min: usize, max: usize) -> usize {
        self.rand_exp(min as u64, max as u64) as usize
    }
}
