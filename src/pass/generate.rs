//! Password generation.

use std::fmt;

use zeroize::Zeroize;

use super::charset::Selection;
use super::strength::{Strength, classify};
use crate::rand::RandomSource;

/// One generation action: target length plus enabled classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationRequest {
    pub length: usize,
    pub selection: Selection,
}

impl GenerationRequest {
    pub fn new(length: usize, selection: Selection) -> Self {
        Self { length, selection }
    }
}

/// Generated password. Wiped from memory on drop.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Recomputed from the current contents on every call.
    pub fn strength(&self) -> Strength {
        classify(&self.0)
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Password(<{} chars>)", self.0.len())
    }
}

impl Drop for Password {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

/// Draw `request.length` characters independently and uniformly from the
/// selected alphabet.
///
/// With no class selected the alphabet is empty and the result is an empty
/// password whatever the requested length; the source is not consulted.
pub fn generate<R: RandomSource + ?Sized>(request: &GenerationRequest, rng: &mut R) -> Password {
    let alphabet = request.selection.alphabet();

    if alphabet.is_empty() {
        log::debug!("empty alphabet, skipping {} draws", request.length);
        return Password::default();
    }

    let bytes: Vec<u8> = (0..request.length)
        .map(|_| {
            let idx = rng.below(alphabet.len());
            debug_assert!(
                idx < alphabet.len(),
                "random source returned {idx} for bound {}",
                alphabet.len()
            );
            alphabet[idx]
        })
        .collect();

    log::debug!(
        "generated {} chars from {}-char alphabet",
        bytes.len(),
        alphabet.len()
    );

    // Safety: every reference set is ASCII
    Password(unsafe { String::from_utf8_unchecked(bytes) })
}
