//! Persisted generator defaults.

mod file;

use std::path::Path;

use crate::error::Result;
use crate::pass::{GenerationRequest, Selection};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub length: usize,
    pub selection: Selection,
}

impl Settings {
    pub fn load_from_file() -> Result<Self> {
        Self::load_from(&file::default_path())
    }

    pub fn save_to_file(&self) -> Result<()> {
        self.save_to(&file::default_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let mut settings = Settings::default();
        file::load(&mut settings, path)?;
        Ok(settings)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        file::save(self, path)
    }

    /// Load saved settings, falling back to defaults with a warning.
    pub fn load_or_default() -> Self {
        Self::load_from_file().unwrap_or_else(|e| {
            log::warn!("failed to load settings: {e}");
            Settings::default()
        })
    }

    pub fn request(&self) -> GenerationRequest {
        GenerationRequest::new(self.length, self.selection)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            length: 10,
            selection: Selection {
                uppercase: true,
                lowercase: true,
                numbers: true,
                symbols: false,
            },
        }
    }
}
