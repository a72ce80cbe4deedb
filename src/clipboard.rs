//! System clipboard access.

use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::Zeroize;

use crate::error::{Error, Result};

/// Lazily opened clipboard. Some backends only serve the contents while the
/// owning context is alive, so keep this around for the session.
#[derive(Default)]
pub struct Clipboard {
    ctx: Option<ClipboardContext>,
}

impl Clipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy `text` verbatim.
    pub fn copy(&mut self, text: &str) -> Result<()> {
        let ctx = match self.ctx.take() {
            Some(ctx) => ctx,
            None => ClipboardContext::new().map_err(|e| Error::Clipboard(e.to_string()))?,
        };
        let ctx = self.ctx.insert(ctx);

        ctx.set_contents(text.to_owned())
            .map_err(|e| Error::Clipboard(e.to_string()))?;

        // Read back to make the backend commit, then wipe our copy
        if let Ok(mut retrieved) = ctx.get_contents() {
            retrieved.zeroize();
        }
        log::debug!("copied {} chars to clipboard", text.len());
        Ok(())
    }
}
