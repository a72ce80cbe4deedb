//! Settings file persistence.
//!
//! One line: `length,uppercase,lowercase,numbers,symbols`.

use std::env;
use std::fs::OpenOptions;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use super::Settings;
use crate::error::Result;
use crate::pass::MAX_LENGTH;

const FIELDS: usize = 5;

pub fn save(settings: &Settings, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;

    let s = &settings.selection;
    let data = format!(
        "{},{},{},{},{}\n",
        settings.length, s.uppercase, s.lowercase, s.numbers, s.symbols
    );

    file.write_all(data.as_bytes())?;
    log::debug!("settings saved to {}", path.display());
    Ok(())
}

pub fn load(settings: &mut Settings, path: &Path) -> Result<()> {
    if !path.exists() {
        return save(settings, path);
    }

    let file = OpenOptions::new().read(true).open(path)?;
    let mut reader = BufReader::new(file);
    let mut line = String::new();
    reader.read_line(&mut line)?;

    let parts: Vec<&str> = line.trim().split(',').collect();
    if parts.len() != FIELDS {
        log::warn!(
            "settings file {} has {} fields, rewriting defaults",
            path.display(),
            parts.len()
        );
        return save(settings, path);
    }

    settings.length = parts[0]
        .parse::<usize>()
        .ok()
        .filter(|&len| len <= MAX_LENGTH)
        .unwrap_or(settings.length);

    let s = &mut settings.selection;
    s.uppercase = parts[1].parse().unwrap_or(s.uppercase);
    s.lowercase = parts[2].parse().unwrap_or(s.lowercase);
    s.numbers = parts[3].parse().unwrap_or(s.numbers);
    s.symbols = parts[4].parse().unwrap_or(s.symbols);

    log::debug!("settings loaded from {}", path.display());
    Ok(())
}

#[inline]
pub fn default_path() -> PathBuf {
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    PathBuf::from(home).join(".config/passgen/settings")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::Selection;

    #[test]
    fn missing_file_is_created_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/settings");

        let loaded = Settings::load_from(&path).unwrap();
        assert_eq!(loaded, Settings::default());
        assert!(path.exists());
    }

    #[test]
    fn round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings");
        let settings = Settings {
            length: 24,
            selection: Selection {
                uppercase: false,
                lowercase: true,
                numbers: false,
                symbols: true,
            },
        };

        settings.save_to(&path).unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "24,false,true,false,true\n"
        );
        assert_eq!(Settings::load_from(&path).unwrap(), settings);
    }

    #[test]
    fn malformed_fields_keep_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings");
        std::fs::write(&path, "99,yes,false,true,maybe\n").unwrap();

        let loaded = Settings::load_from(&path).unwrap();
        let defaults = Settings::default();
        assert_eq!(loaded.length, defaults.length);
        assert_eq!(loaded.selection.uppercase, defaults.selection.uppercase);
        assert!(!loaded.selection.lowercase);
        assert!(loaded.selection.numbers);
        assert_eq!(loaded.selection.symbols, defaults.selection.symbols);
    }

    #[test]
    fn wrong_field_count_rewrites_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings");
        std::fs::write(&path, "12,true\n").unwrap();

        let loaded = Settings::load_from(&path).unwrap();
        assert_eq!(loaded, Settings::default());
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "10,true,true,true,false\n"
        );
    }
}
