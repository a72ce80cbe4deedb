//! Uniformity statistics for generator output.

use super::charset::Selection;
use crate::rand::RandomSource;

/// Pearson's χ² statistic of `counts` against a uniform expectation.
pub fn chi_square(counts: &[usize]) -> f64 {
    let total: usize = counts.iter().sum();
    if counts.is_empty() || total == 0 {
        return 0.0;
    }
    let expected = total as f64 / counts.len() as f64;
    counts
        .iter()
        .map(|&observed| {
            let diff = observed as f64 - expected;
            diff * diff / expected
        })
        .sum()
}

/// 0.999 quantile of χ²(df), Wilson–Hilferty approximation.
pub fn critical_value_999(df: usize) -> f64 {
    const Z_999: f64 = 3.090_232;
    let df = df as f64;
    let k = 2.0 / (9.0 * df);
    df * (1.0 - k + Z_999 * k.sqrt()).powi(3)
}

/// Per-character tallies from one large generation.
#[derive(Debug)]
pub struct DistributionReport {
    pub alphabet: Vec<u8>,
    pub counts: Vec<usize>,
}

impl DistributionReport {
    pub fn sample<R: RandomSource + ?Sized>(rng: &mut R, selection: Selection, draws: usize) -> Self {
        let alphabet = selection.alphabet();
        let mut index = [usize::MAX; 128];
        for (i, &b) in alphabet.iter().enumerate() {
            index[b as usize] = i;
        }

        let mut counts = vec![0usize; alphabet.len()];
        if !alphabet.is_empty() {
            for _ in 0..draws {
                let b = alphabet[rng.below(alphabet.len())];
                counts[index[b as usize]] += 1;
            }
        }

        Self { alphabet, counts }
    }

    pub fn draws(&self) -> usize {
        self.counts.iter().sum()
    }

    pub fn degrees_of_freedom(&self) -> usize {
        self.counts.len().saturating_sub(1)
    }

    pub fn chi_square(&self) -> f64 {
        chi_square(&self.counts)
    }

    pub fn critical_value(&self) -> f64 {
        match self.degrees_of_freedom() {
            0 => 0.0,
            df => critical_value_999(df),
        }
    }

    /// True when uniformity is not rejected at p = 0.001. An audit that drew
    /// nothing never passes.
    pub fn passes(&self) -> bool {
        if self.draws() == 0 {
            return false;
        }
        self.degrees_of_freedom() == 0 || self.chi_square() <= self.critical_value()
    }
}
