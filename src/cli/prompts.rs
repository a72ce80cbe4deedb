//! Centralized warning and status messages for CLI output.

use super::quiet;
use crate::pass::stats::DistributionReport;
use crate::terminal::{box_bottom, box_line_split, box_top, print_rule};

// ANSI color codes
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const RESET: &str = "\x1b[0m";

/// Warning to stderr (yellow), suppressed in quiet mode
pub fn warn(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Error to stderr (red), always shown
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

pub fn no_classes_selected() {
    warn("Warning: no character class selected, password is empty.");
    warn("Enable one with -U, -L, -N or -S.");
}

pub fn nothing_to_copy() {
    warn("Nothing to copy: generated password is empty.");
}

pub fn clipboard_copied() {
    if !quiet::enabled() {
        println!("*** -COPIED TO CLIPBOARD- ***");
    }
}

pub fn settings_saved() {
    if !quiet::enabled() {
        eprintln!("Settings saved.");
    }
}

pub fn audit_report(report: &DistributionReport, source: &str) {
    let chi2 = report.chi_square();
    let critical = report.critical_value();
    let verdict = if report.passes() {
        format!("{GREEN}PASS{RESET}")
    } else {
        format!("{RED}FAIL{RESET}")
    };

    box_top("Uniformity audit");
    box_line_split("Source", source);
    box_line_split("Alphabet", &format!("{} chars", report.alphabet.len()));
    box_line_split("Draws", &report.draws().to_string());
    if let (Some(min), Some(max)) = (report.counts.iter().min(), report.counts.iter().max()) {
        box_line_split("Min/max per char", &format!("{min}/{max}"));
    }
    print_rule();
    box_line_split("Chi-square", &format!("{chi2:.2}"));
    box_line_split(
        &format!("Critical (df {}, p 0.001)", report.degrees_of_freedom()),
        &format!("{critical:.2}"),
    );
    box_line_split("Result", &verdict);
    box_bottom();
}
