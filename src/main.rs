mod app;
mod event;
mod ui;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::str::FromStr;

use app::App;
use gapedit_config::Config;
use gapedit_logger::LogLevel;

const USAGE: &str = "Usage: gapedit [FILE]";

fn main() -> Result<()> {
    let file = match parse_args(std::env::args().skip(1))? {
        Invocation::Edit(file) => file,
        Invocation::Help => {
            println!("{}", USAGE);
            return Ok(());
        }
    };

    // Fall back to defaults on a broken config
    let (config, config_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };
    init_logger(&config);
    if let Some(e) = config_error {
        eprintln!("Config error, using defaults: {:#}", e);
        gapedit_logger::warn(format!("Config error, using defaults: {:#}", e));
    }

    let mut app = App::new(&config);
    if let Some(path) = &file {
        app.open(path)?;
    }

    // Initialize terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        gapedit_logger::error(format!("Fatal: {:#}", err));
    }
    gapedit_logger::info("Editor stopped");
    result
}

#[derive(Debug, PartialEq)]
enum Invocation {
    Help,
    /// Edit a file, or an unnamed buffer
    Edit(Option<PathBuf>),
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Invocation> {
    let file = args.next();
    if args.next().is_some() {
        anyhow::bail!("Too many arguments\n{}", USAGE);
    }
    match file.as_deref() {
        Some("-h") | Some("--help") => Ok(Invocation::Help),
        Some(path) => Ok(Invocation::Edit(Some(PathBuf::from(path)))),
        None => Ok(Invocation::Edit(None)),
    }
}

fn init_logger(config: &Config) {
    let min_level = LogLevel::from_str(&config.logging.min_level).unwrap_or(LogLevel::Info);
    gapedit_logger::init(config.log_file_path().ok(), min_level);
    gapedit_logger::info("Editor started");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> impl Iterator<Item = String> {
        list.iter().map(|s| s.to_string()).collect::<Vec<_>>().into_iter()
    }

    #[test]
    fn test_parse_args() {
        assert_eq!(parse_args(args(&[])).unwrap(), Invocation::Edit(None));
        assert_eq!(
            parse_args(args(&["notes.txt"])).unwrap(),
            Invocation::Edit(Some(PathBuf::from("notes.txt")))
        );
        assert_eq!(parse_args(args(&["--help"])).unwrap(), Invocation::Help);
        assert!(parse_args(args(&["a", "b"])).is_err());
    }
}
