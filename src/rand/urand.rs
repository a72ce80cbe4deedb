//! `/dev/urandom` entropy source.

use std::fs::File;
use std::io::{self, Read};

use zeroize::Zeroize;

use super::{HwRand, RandomSource, uniform_below};

const DEVICE: &str = "/dev/urandom";

/// Unbuffered reader over `/dev/urandom`: each word is read straight into a
/// stack buffer that is wiped after use, so no random bytes linger in the
/// source. A failed read switches to hardware entropy for the rest of its life.
pub struct Urandom {
    file: File,
    fallback: Option<HwRand>,
}

impl Urandom {
    pub fn open() -> io::Result<Self> {
        Ok(Self {
            file: File::open(DEVICE)?,
            fallback: None,
        })
    }

    fn next_u64(&mut self) -> u64 {
        if let Some(ref mut hw) = self.fallback {
            return hw.next_u64();
        }

        let mut buf = [0u8; 8];
        match self.file.read_exact(&mut buf) {
            Ok(()) => {
                let word = u64::from_le_bytes(buf);
                buf.zeroize();
                word
            }
            Err(e) => {
                buf.zeroize();
                log::warn!("{DEVICE} read failed ({e}), switching to hardware entropy");
                self.fallback.insert(HwRand::new()).next_u64()
            }
        }
    }
}

impl RandomSource for Urandom {
    fn below(&mut self, bound: usize) -> usize {
        uniform_below(bound, || self.next_u64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_in_range_values() {
        let Ok(mut rng) = Urandom::open() else {
            return; // no device in this environment
        };
        for _ in 0..1_000 {
            assert!(rng.below(87) < 87);
        }
    }

    #[test]
    fn holds_no_read_buffer() {
        // fd + fallback state; a buffered reader would at least double this
        assert!(std::mem::size_of::<Urandom>() <= 2 * std::mem::size_of::<Option<HwRand>>());
    }
}
