//! Runtime settings
//!
//! Resolved once at startup from command-line flags and the environment.

use std::path::PathBuf;

use clap::Parser;

use crate::consts::{DATA_FILE_ENV, DEFAULT_DATA_FILE};

/// Command-line flags
#[derive(Debug, Parser)]
#[command(name = "student-tracker", version, about = "Terminal student performance tracker")]
pub struct Cli {
    /// JSON file the roster is loaded from and saved to
    #[arg(long, env = DATA_FILE_ENV, default_value = DEFAULT_DATA_FILE)]
    pub data_file: PathBuf,

    /// Start with an empty roster instead of loading the data file
    #[arg(long)]
    pub no_load: bool,

    /// Skip the "Press Enter to continue" prompt after each action
    #[arg(long)]
    pub no_pause: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Roster file
    pub data_file: PathBuf,
    /// Load `data_file` before showing the menu
    pub load_on_start: bool,
    /// Wait for Enter after each action
    pub pause: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            load_on_start: true,
            pause: true,
        }
    }
}

impl From<Cli> for Settings {
    fn from(cli: Cli) -> Self {
        Self {
            data_file: cli.data_file,
            load_on_start: !cli.no_load,
            pause: !cli.no_pause,
        }
    }
}

impl Settings {
    /// Parse the process arguments
    pub fn from_args() -> Self {
        Cli::parse().into()
    }
}
