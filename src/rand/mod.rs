//! Random sources for password generation.
//!
//! Generation code only sees [`RandomSource`], so callers decide where the
//! randomness comes from: cycle-counter entropy (default), `/dev/urandom`,
//! or a seeded generator in tests.

mod hw;
mod urand;

pub use urand::Urandom;

use zeroize::Zeroize;

/// Provider of uniformly distributed indices.
pub trait RandomSource {
    /// Returns an integer in `[0, bound)`. A `bound` of 0 or 1 yields 0.
    ///
    /// Callers index with the result, so implementations must stay inside
    /// the range; [`uniform_below`] does.
    fn below(&mut self, bound: usize) -> usize;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn below(&mut self, bound: usize) -> usize {
        (**self).below(bound)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn below(&mut self, bound: usize) -> usize {
        (**self).below(bound)
    }
}

/// Reduce 64-bit words to `[0, bound)` without modulo bias.
///
/// Words below `2^64 mod bound` are rejected so every residue is backed by
/// the same number of accepted words.
pub fn uniform_below(bound: usize, mut next: impl FnMut() -> u64) -> usize {
    if bound <= 1 {
        return 0;
    }
    let bound = bound as u64;
    let threshold = bound.wrapping_neg() % bound;
    loop {
        let word = next();
        if word >= threshold {
            return (word % bound) as usize;
        }
    }
}

// =============================================================================
// Source selection
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Source {
    #[default]
    Hardware,
    Urandom,
}

impl Source {
    pub fn name(self) -> &'static str {
        match self {
            Source::Hardware => hw::SOURCE_NAME,
            Source::Urandom => "/dev/urandom",
        }
    }

    /// Open the source. Falls back to hardware entropy when `/dev/urandom`
    /// cannot be opened.
    pub fn open(self) -> Box<dyn RandomSource> {
        match self {
            Source::Hardware => Box::new(HwRand::new()),
            Source::Urandom => match Urandom::open() {
                Ok(u) => Box::new(u),
                Err(e) => {
                    log::warn!("/dev/urandom unavailable ({e}), using {}", hw::SOURCE_NAME);
                    Box::new(HwRand::new())
                }
            },
        }
    }
}

// =============================================================================
// Hardware-seeded RNG
// =============================================================================

const MULTIPLIERS: [u64; 8] = [
    0x9e37_79b9_7f4a_7c15,
    0xbf58_476d_1ce4_e5b9,
    0x94d0_49bb_1331_11eb,
    0xd6e8_feb8_6659_fd93,
    0xff51_afd7_ed55_8ccd,
    0xc4ce_b9fe_1a85_ec53,
    0x2545_f491_4f6c_dd1d,
    0x5851_f42d_4c95_7f2d,
];

/// Cycle-counter entropy folded into a rotating multiply state, finalized
/// with SplitMix64.
pub struct HwRand {
    state: u64,
}

impl HwRand {
    pub fn new() -> Self {
        HwRand {
            state: hw::entropy(),
        }
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        let ent = hw::entropy();

        // Mix entropy into multiplier selection
        let mixed = self.state ^ ent;
        let idx = ((mixed ^ (mixed >> 32)) % MULTIPLIERS.len() as u64) as usize;

        self.state = self.state.rotate_left(17).wrapping_mul(MULTIPLIERS[idx]) ^ ent;
        splitmix_finalize(self.state)
    }
}

impl Default for HwRand {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for HwRand {
    fn below(&mut self, bound: usize) -> usize {
        uniform_below(bound, || self.next_u64())
    }
}

impl Drop for HwRand {
    fn drop(&mut self) {
        self.state.zeroize();
    }
}

#[inline(always)]
fn splitmix_finalize(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

/// Seeded SplitMix64 for reproducible tests.
#[cfg(test)]
pub struct SplitMix64(u64);

#[cfg(test)]
impl SplitMix64 {
    pub fn new(seed: u64) -> Self {
        SplitMix64(seed)
    }

    pub fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9e37_79b9_7f4a_7c15);
        splitmix_finalize(self.0)
    }
}

#[cfg(test)]
impl RandomSource for SplitMix64 {
    fn below(&mut self, bound: usize) -> usize {
        uniform_below(bound, || self.next_u64())
    }
}
