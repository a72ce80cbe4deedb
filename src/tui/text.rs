use super::app::{App, SCREEN_ORDER, Status};
use crate::pass::{MAX_LENGTH, Strength};
use crate::terminal::{
    BOLD, BOX_WIDTH, DIM, GREEN, MINT, RED, RESET, REVERSE, box_bottom, box_line, box_line_center,
    box_line_split, box_opt, box_top, clear, flush, line, print_error, print_rule, slider,
};

pub fn print_help() {
    box_top("passgen");
    box_line_center("Character-class password generator");
    box_line("");
    box_line("USAGE:");
    box_line("  passgen                 interactive screen");
    box_line("  passgen [OPTIONS]       one-shot output");
    box_line("");
    box_line(" Password:");
    box_opt("  -l, --length <N>", "Characters per password, 0 to 30");
    box_opt("  -U, --upper", "Include uppercase letters");
    box_opt("  -L, --lower", "Include lowercase letters");
    box_opt("  -N, --numbers", "Include numbers");
    box_opt("  -S, --symbols", "Include symbols");
    box_opt("  -n, --number <N>", "How many to generate, up to 10000 (default: 1)");
    box_line("");
    box_line(" Output:");
    box_opt("  -t, --strength", "Print the strength label after each password");
    box_opt("  -b, --board", "Copy to clipboard instead of printing");
    box_opt("  -q, --quiet", "Suppress warnings and confirmations");
    box_opt("  -i, --interactive", "Open the screen with these options");
    box_line("");
    box_line(" Settings:");
    box_opt("      --save", "Keep length and classes as defaults");
    box_line("");
    box_line(" Entropy:");
    box_opt("  -u, --urandom", "Use /dev/urandom instead of hardware");
    box_opt("      --audit <N>", "Chi-square check over N draws");
    box_line("");
    box_line(" Info:");
    box_opt("  -h, --help", "Display this help message");
    box_opt("  -v, --version", "Display version");
    box_line("");
    box_line("Without class flags the saved classes apply.");
    box_line("Strength: under 8 Low, under 12 Medium,");
    box_line("otherwise High.");
    box_bottom();
}

fn strength_color(strength: Strength) -> &'static str {
    match strength {
        Strength::Low => RED,
        Strength::Medium => "\x1b[38;5;11m",
        Strength::High => GREEN,
    }
}

fn checkbox(checked: bool) -> String {
    if checked {
        format!("[{GREEN}x{RESET}]")
    } else {
        "[ ]".to_string()
    }
}

/// Redraw the whole screen.
pub fn draw(app: &App) {
    clear();
    line("");
    box_top("Password Generator");
    line(&format!("│{}│", " ".repeat(BOX_WIDTH - 2)));
    if app.password.is_empty() {
        box_line_center(&format!("{DIM}press Enter to generate{RESET}"));
    } else {
        box_line_center(&format!("{BOLD}{}{RESET}", app.password.as_str()));
    }
    box_line_split("", &format!("{DIM}c) copy{RESET}"));
    print_rule();

    box_line_split(
        "Character Length",
        &format!("{MINT}{BOLD}{:>2}{RESET}", app.length),
    );
    box_line(&slider(app.length, MAX_LENGTH, BOX_WIDTH - 4));
    box_line(&format!("{DIM}←/→ adjust{RESET}"));
    box_line("");

    for (i, class) in SCREEN_ORDER.iter().enumerate() {
        box_line(&format!(
            "{} {}) {}",
            checkbox(app.selection.contains(*class)),
            i + 1,
            class.label()
        ));
    }
    print_rule();

    let strength = app.password.strength();
    box_line_split(
        &format!("{DIM}STRENGTH{RESET}"),
        &format!("{}{} {}{RESET}", strength_color(strength), strength, strength.icon()),
    );
    print_rule();
    box_line_center(&format!("{REVERSE} GENERATE (Enter) {RESET}"));
    box_bottom();
    line(&format!("{DIM} s) save defaults  q) quit{RESET}"));

    match &app.status {
        Some(Status::NoClasses) => print_error("No character class selected."),
        Some(Status::NothingToCopy) => print_error("Nothing to copy yet."),
        Some(Status::Failed(msg)) => print_error(msg),
        Some(Status::Copied) => line(&format!("{GREEN}*** -COPIED TO CLIPBOARD- ***{RESET}")),
        Some(Status::Saved) => line(&format!("{GREEN}Defaults saved.{RESET}")),
        None => line(""),
    }
    flush();
}
