//! Flag-driven, non-interactive mode.

mod context;
mod flags;
mod parse;
pub mod prompts;
pub mod quiet;

pub use context::Context;
pub use flags::CliFlags;
pub use parse::{MAX_AUDIT_DRAWS, MAX_PASSWORDS, parse, parse_length};

use crate::error::Result;

/// Run CLI mode with the raw process arguments.
pub fn run(args: &[String]) -> Result<()> {
    Context::new(args)?.run()
}
