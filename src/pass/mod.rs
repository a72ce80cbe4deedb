//! Password generation and strength rating.

pub mod charset;
mod generate;
pub mod stats;
mod strength;

pub use charset::{CharacterClass, Selection};
pub use generate::{GenerationRequest, Password, generate};
pub use strength::{Strength, classify};

/// Upper bound of the length slider.
pub const MAX_LENGTH: usize = 30;
