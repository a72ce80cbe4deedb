//! CLI context - bundles saved settings and parsed flags.

use std::io::{self, Write};

use zeroize::Zeroize;

use super::{CliFlags, MAX_AUDIT_DRAWS, MAX_PASSWORDS, prompts, quiet};
use crate::clipboard::Clipboard;
use crate::error::Result;
use crate::pass::stats::DistributionReport;
use crate::pass::{CharacterClass, Password, Selection, generate};
use crate::rand::Source;
use crate::settings::Settings;
use crate::tui::print_help;

pub struct Context {
    pub settings: Settings,
    pub flags: CliFlags,
}

impl Context {
    pub fn new(args: &[String]) -> Result<Self> {
        let flags = super::parse(args)?;
        let settings = Settings::load_or_default();
        Ok(Self::with_settings(settings, flags))
    }

    pub fn with_settings(settings: Settings, flags: CliFlags) -> Self {
        let mut ctx = Self { settings, flags };
        ctx.apply_flags();
        ctx
    }

    pub fn run(&mut self) -> Result<()> {
        if self.handle_info_flags() {
            return Ok(());
        }
        quiet::set(self.flags.quiet);

        if self.flags.save {
            self.settings.save_to_file()?;
            prompts::settings_saved();
        }

        if let Some(draws) = self.flags.audit {
            self.audit(draws);
            return Ok(());
        }

        if self.flags.interactive {
            return crate::tui::run(self.settings, self.source());
        }

        self.generate_output()
    }

    fn handle_info_flags(&self) -> bool {
        if self.flags.help {
            print_help();
            return true;
        }
        if self.flags.version {
            println!("passgen {}", env!("CARGO_PKG_VERSION"));
            return true;
        }
        false
    }

    /// Explicit flags override the saved length and selection.
    fn apply_flags(&mut self) {
        if let Some(len) = self.flags.length {
            self.settings.length = len;
        }
        if self.flags.has_class_flags() {
            self.settings.selection = self.flags.classes;
        }
    }

    pub fn source(&self) -> Source {
        if self.flags.urandom {
            Source::Urandom
        } else {
            Source::Hardware
        }
    }

    /// Generate the requested passwords.
    pub fn passwords(&self) -> Vec<Password> {
        let request = self.settings.request();
        let mut rng = self.source().open();
        (0..self.flags.number.unwrap_or(1).min(MAX_PASSWORDS))
            .map(|_| generate(&request, &mut rng))
            .collect()
    }

    fn generate_output(&mut self) -> Result<()> {
        if self.settings.selection.is_empty() {
            prompts::no_classes_selected();
        }

        let passwords = self.passwords();

        if self.flags.clipboard {
            if passwords.iter().all(Password::is_empty) {
                prompts::nothing_to_copy();
                return Ok(());
            }
            let mut joined = passwords
                .iter()
                .map(Password::as_str)
                .collect::<Vec<_>>()
                .join("\n");
            let copied = Clipboard::new().copy(&joined);
            joined.zeroize();
            copied?;
            prompts::clipboard_copied();
            return Ok(());
        }

        let stdout = io::stdout();
        let mut out = stdout.lock();
        for pass in &passwords {
            if self.flags.strength {
                writeln!(out, "{}\t{}", pass.as_str(), pass.strength())?;
            } else {
                writeln!(out, "{}", pass.as_str())?;
            }
        }
        out.flush()?;
        Ok(())
    }

    fn audit(&self, draws: usize) {
        let selection = if self.flags.has_class_flags() {
            self.flags.classes
        } else {
            Selection::only(CharacterClass::Lowercase)
        };
        let mut rng = self.source().open();
        let report = DistributionReport::sample(&mut rng, selection, draws.min(MAX_AUDIT_DRAWS));
        log::info!(
            "audit: {} draws, chi2 {:.2} vs {:.2}",
            report.draws(),
            report.chi_square(),
            report.critical_value()
        );
        prompts::audit_report(&report, self.source().name());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::parse;

    fn context(list: &[&str]) -> Context {
        let args: Vec<String> = std::iter::once("passgen")
            .chain(list.iter().copied())
            .map(String::from)
            .collect();
        Context::with_settings(Settings::default(), parse(&args).unwrap())
    }

    #[test]
    fn saved_settings_apply_without_flags() {
        let ctx = context(&[]);
        assert_eq!(ctx.settings, Settings::default());
        let passwords = ctx.passwords();
        assert_eq!(passwords.len(), 1);
        assert_eq!(passwords[0].len(), Settings::default().length);
    }

    #[test]
    fn flags_override_settings() {
        let ctx = context(&["-l", "20", "-N", "-n", "4"]);
        let passwords = ctx.passwords();
        assert_eq!(passwords.len(), 4);
        for pass in &passwords {
            assert_eq!(pass.len(), 20);
            assert!(pass.as_str().chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn zero_length_yields_empty_passwords() {
        let ctx = context(&["-l", "0"]);
        assert!(ctx.passwords().iter().all(Password::is_empty));
    }

    #[test]
    fn oversized_count_is_clamped() {
        let flags = CliFlags {
            number: Some(usize::MAX),
            length: Some(0),
            ..CliFlags::default()
        };
        let ctx = Context::with_settings(Settings::default(), flags);
        assert_eq!(ctx.passwords().len(), MAX_PASSWORDS);
    }

    #[test]
    fn urandom_flag_selects_source() {
        assert_eq!(context(&["-u"]).source(), Source::Urandom);
        assert_eq!(context(&[]).source(), Source::Hardware);
    }
}
