//! Character-class password generator.
//!
//! The core is two functions: [`generate`] draws a password from the enabled
//! character classes using an injectable [`RandomSource`], and [`classify`]
//! rates a password by length alone. Everything else is presentation: a
//! flag-driven CLI, an interactive terminal screen, and clipboard copy.

pub mod cli;
pub mod clipboard;
pub mod error;
pub mod exits;
pub mod pass;
pub mod rand;
pub mod settings;
pub mod terminal;
pub mod tui;

pub use error::{Error, Result};
pub use pass::{CharacterClass, GenerationRequest, Password, Selection, Strength, classify, generate};
pub use rand::RandomSource;
