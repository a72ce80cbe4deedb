//! Public API tests: `generate` and `classify` as a caller sees them, with a
//! caller-supplied random source.

use passgen::rand::{HwRand, uniform_below};
use passgen::{
    CharacterClass, GenerationRequest, RandomSource, Selection, Strength, classify, generate,
};

/// xorshift64*, enough to show a foreign source plugs in.
struct XorShift(u64);

impl RandomSource for XorShift {
    fn below(&mut self, bound: usize) -> usize {
        uniform_below(bound, || {
            self.0 ^= self.0 >> 12;
            self.0 ^= self.0 << 25;
            self.0 ^= self.0 >> 27;
            self.0.wrapping_mul(0x2545_f491_4f6c_dd1d)
        })
    }
}

/// Always picks the last alphabet index.
struct Last;

impl RandomSource for Last {
    fn below(&mut self, bound: usize) -> usize {
        bound.saturating_sub(1)
    }
}

#[test]
fn caller_source_drives_generation() {
    let mut rng = XorShift(0x1234_5678);
    let request = GenerationRequest::new(30, Selection::ALL);
    let pass = generate(&request, &mut rng);
    assert_eq!(pass.len(), 30);
    assert_eq!(pass.strength(), Strength::High);
}

#[test]
fn last_index_of_each_class() {
    let cases = [
        (CharacterClass::Lowercase, "zzz"),
        (CharacterClass::Uppercase, "ZZZ"),
        (CharacterClass::Numbers, "999"),
        (CharacterClass::Symbols, "???"),
    ];
    for (class, expected) in cases {
        let pass = generate(&GenerationRequest::new(3, Selection::only(class)), &mut Last);
        assert_eq!(pass.as_str(), expected);
    }
}

#[test]
fn symbols_come_last_in_the_alphabet() {
    let selection = Selection {
        uppercase: true,
        lowercase: true,
        numbers: true,
        symbols: true,
    };
    let pass = generate(&GenerationRequest::new(1, selection), &mut Last);
    assert_eq!(pass.as_str(), "?");

    let no_symbols = Selection {
        symbols: false,
        ..selection
    };
    let pass = generate(&GenerationRequest::new(1, no_symbols), &mut Last);
    assert_eq!(pass.as_str(), "9");
}

#[test]
fn empty_selection_is_not_an_error() {
    let pass = generate(&GenerationRequest::new(5, Selection::NONE), &mut HwRand::new());
    assert_eq!(pass.as_str(), "");
    assert_eq!(pass.strength(), Strength::Low);
}

#[test]
fn hardware_source_respects_alphabet() {
    let mut rng = HwRand::new();
    let selection = Selection::only(CharacterClass::Symbols);
    let alphabet = selection.alphabet();
    for length in 0..=30 {
        let pass = generate(&GenerationRequest::new(length, selection), &mut rng);
        assert_eq!(pass.len(), length);
        assert!(pass.as_str().bytes().all(|b| alphabet.contains(&b)));
    }
}

#[test]
fn classify_thresholds() {
    let expected = [
        (0, Strength::Low),
        (7, Strength::Low),
        (8, Strength::Medium),
        (11, Strength::Medium),
        (12, Strength::High),
    ];
    for (len, strength) in expected {
        assert_eq!(classify(&"a".repeat(len)), strength, "length {len}");
    }
}
