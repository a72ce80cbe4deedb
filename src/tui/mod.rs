//! Interactive single-screen generator.

mod app;
mod input;
mod text;

pub use app::{Action, App, Status};
pub use input::action_for;
pub use text::*;

use crossterm::event::{self, Event, KeyEventKind};

use crate::clipboard::Clipboard;
use crate::error::Result;
use crate::rand::Source;
use crate::settings::Settings;
use crate::terminal::{RawModeGuard, clear, reset_terminal};

/// Run the screen until the user quits.
pub fn run(settings: Settings, source: Source) -> Result<()> {
    let mut app = App::new(settings);
    let mut rng = source.open();
    let mut clipboard = Clipboard::new();
    log::debug!("interactive mode, entropy source: {}", source.name());

    let mut guard = RawModeGuard::new()?;

    loop {
        draw(&app);

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match action_for(key) {
            Some(Action::Quit) => break,
            Some(Action::Save) => {
                app.status = Some(match app.settings().save_to_file() {
                    Ok(()) => Status::Saved,
                    Err(e) => Status::Failed(e.to_string()),
                });
            }
            Some(action) => app.apply(action, &mut rng, |text| clipboard.copy(text)),
            None => {}
        }
    }

    guard.release();
    clear();
    reset_terminal();
    Ok(())
}
