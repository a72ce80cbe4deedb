//! Screen state and the actions that change it.

use crate::error::Result;
use crate::pass::{CharacterClass, GenerationRequest, MAX_LENGTH, Password, Selection, generate};
use crate::rand::RandomSource;
use crate::settings::Settings;

/// Checkbox order on screen; keys 1-4 follow it.
pub const SCREEN_ORDER: [CharacterClass; 4] = [
    CharacterClass::Uppercase,
    CharacterClass::Lowercase,
    CharacterClass::Numbers,
    CharacterClass::Symbols,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Shorter,
    Longer,
    Toggle(CharacterClass),
    Generate,
    Copy,
    Save,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    NoClasses,
    Copied,
    NothingToCopy,
    Saved,
    Failed(String),
}

pub struct App {
    pub length: usize,
    pub selection: Selection,
    pub password: Password,
    pub status: Option<Status>,
}

impl App {
    pub fn new(settings: Settings) -> Self {
        Self {
            length: settings.length.min(MAX_LENGTH),
            selection: settings.selection,
            password: Password::default(),
            status: None,
        }
    }

    pub fn settings(&self) -> Settings {
        Settings {
            length: self.length,
            selection: self.selection,
        }
    }

    pub fn request(&self) -> GenerationRequest {
        GenerationRequest::new(self.length, self.selection)
    }

    /// Apply one action. `copy` receives the password text; `Save` and
    /// `Quit` belong to the caller and are ignored here.
    pub fn apply<R, F>(&mut self, action: Action, rng: &mut R, copy: F)
    where
        R: RandomSource + ?Sized,
        F: FnOnce(&str) -> Result<()>,
    {
        self.status = None;
        match action {
            Action::Shorter => self.length = self.length.saturating_sub(1),
            Action::Longer => self.length = (self.length + 1).min(MAX_LENGTH),
            Action::Toggle(class) => self.selection.toggle(class),
            Action::Generate => {
                self.password = generate(&self.request(), rng);
                if self.selection.is_empty() {
                    self.status = Some(Status::NoClasses);
                }
            }
            Action::Copy => {
                self.status = Some(if self.password.is_empty() {
                    Status::NothingToCopy
                } else {
                    match copy(self.password.as_str()) {
                        Ok(()) => Status::Copied,
                        Err(e) => Status::Failed(e.to_string()),
                    }
                });
            }
            Action::Save | Action::Quit => {}
        }
    }
}
