//! Command-line interface implementation for clean-folder.
//! Flags only seed the interactive fields; all work happens in the shell.

use clap::Parser;
use std::path::PathBuf;

use crate::constants::DEFAULT_PROJECT_NAME;

/// Command-line arguments structure for clean-folder.
#[derive(Parser, Debug)]
#[command(author, version, about = "Create a media project folder structure", long_about = None)]
pub struct Args {
    /// Initial base folder (defaults to the home directory)
    #[arg(short, long, value_name = "DIR")]
    pub base_dir: Option<PathBuf>,

    /// Initial project name
    #[arg(short, long, value_name = "NAME", default_value = DEFAULT_PROJECT_NAME)]
    pub name: String,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Base folder to start with: the flag, else home, else the current directory.
    pub fn initial_base_dir(&self) -> PathBuf {
        self.base_dir
            .clone()
            .or_else(dirs::home_dir)
            .or_else(|| std::env::current_dir().ok())
            .unwrap_or_default()
    }
}

/// Parses command line arguments and returns the Args structure.
pub fn get_args() -> Args {
    Args::parse()
}
