//! Length-based strength rating.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Strength {
    Low,
    Medium,
    High,
}

impl Strength {
    pub fn as_str(self) -> &'static str {
        match self {
            Strength::Low => "Low",
            Strength::Medium => "Medium",
            Strength::High => "High",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Strength::Low => "!",
            Strength::Medium => "✓",
            Strength::High => "★",
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rate a password by character count alone: under 8 is Low, under 12 is
/// Medium, anything longer is High. Character variety is ignored.
pub fn classify(password: &str) -> Strength {
    match password.chars().count() {
        0..=7 => Strength::Low,
        8..=11 => Strength::Medium,
        _ => Strength::High,
    }
}
