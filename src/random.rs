//! Seeded xorshift generator.
//!
//! The generator state is four `i32` words. Seeding folds the seed's UTF-16
//! code units into the words with a Java `String.hashCode()` style step,
//! spread across the four words by index. Drawing is a 32-bit xorshift.
//!
//! Output must stay bit-identical to existing identicons, so every step uses
//! explicit wrapping `i32` arithmetic and arithmetic (sign-propagating) right
//! shifts.

/// Divisor applied to the final word. Kept at 2^31 for compatibility; the
/// sign bit of the final word is always clear, so results stay in `[0, 1)`.
const DIVISOR: f64 = 2_147_483_648.0;

/// Deterministic pseudo-random source for one generation session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeededRandom {
    state: [i32; 4],
    draws: u64,
}

impl SeededRandom {
    /// Create a generator seeded from `seed`.
    pub fn new(seed: &str) -> Self {
        let mut rng = Self::default();
        rng.seed(seed);
        rng
    }

    /// Reset the state and fold `seed` into it.
    pub fn seed(&mut self, seed: &str) {
        self.state = [0; 4];
        self.draws = 0;

        for (i, unit) in seed.encode_utf16().enumerate() {
            let word = &mut self.state[i % 4];
            *word = word.wrapping_mul(31).wrapping_add(i32::from(unit));
        }
    }

    /// Draw the next value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        let [x, y, z, w] = self.state;

        let t = x ^ (x << 11);
        let next = w ^ (w >> 19) ^ t ^ (t >> 8);

        self.state = [y, z, w, next];
        self.draws += 1;

        f64::from(next as u32) / DIVISOR
    }

    /// Current state words `[x, y, z, w]`.
    pub fn state(&self) -> [i32; 4] {
        self.state
    }

    /// Number of values drawn since the last seed.
    pub fn draws(&self) -> u64 {
        self.draws
    }
}
