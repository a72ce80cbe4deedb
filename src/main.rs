use std::env;
use std::process;

use passgen::rand::Source;
use passgen::settings::Settings;
use passgen::{cli, exits, terminal, tui};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    exits::install_handlers();
    exits::disable_core_dumps();

    let args: Vec<String> = env::args().collect();

    let result = match args.len() {
        1 if terminal::is_tty() => tui::run(Settings::load_or_default(), Source::Hardware),
        _ => cli::run(&args),
    };

    if let Err(e) = result {
        terminal::reset_terminal();
        cli::prompts::error(&e.to_string());
        process::exit(1);
    }
}
