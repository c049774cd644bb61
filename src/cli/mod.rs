use std::io;
use std::path::PathBuf;

use clap::Parser;

use crate::config::{EditorConfig, CONFIG_FILENAME};
use crate::editor::EditorSession;
use crate::error::Result;
use crate::output::Printer;

/// roomed - Room and door map editor
#[derive(Parser, Debug)]
#[command(name = "roomed")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Map file to edit (created on save if it does not exist)
    pub map_file: Option<PathBuf>,
}

/// Load `roomed.yaml` from the working directory, falling back to defaults.
pub fn load_config(printer: &Printer) -> EditorConfig {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    match EditorConfig::discover(&cwd) {
        Ok(Some(config)) => {
            printer.info("Using", CONFIG_FILENAME);
            config
        }
        Ok(None) => EditorConfig::default(),
        Err(e) => {
            printer.warning("Ignoring", &format!("{}: {}", CONFIG_FILENAME, e));
            EditorConfig::default()
        }
    }
}

pub fn run(cli: Cli, printer: Printer) -> Result<()> {
    let config = load_config(&printer);
    let mut session = EditorSession::open(cli.map_file.as_deref(), config, printer);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout().lock();
    session.run(&mut input, &mut output)
}
