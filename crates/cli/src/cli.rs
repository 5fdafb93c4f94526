use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::commands::{atm_command, guess_command, init_command};
use crate::config::{AtmOverrides, GuessOverrides, load_settings};

#[derive(Parser, Debug)]
#[command(name = "drills")]
#[command(version, about = "Console drills: a number guessing game and a simulated ATM", long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging (written to stderr)")]
pub struct Drills {
    /// Settings file to use instead of searching for .drills.json
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play the number guessing game
    #[command(visible_alias = "g")]
    Guess {
        #[command(flatten)]
        overrides: GuessOverrides,
    },
    /// Start a simulated ATM session
    #[command(visible_alias = "a")]
    Atm {
        #[command(flatten)]
        overrides: AtmOverrides,
    },
    /// Write a settings file with the default values
    Init {
        /// Directory to write the settings file into
        #[arg(long)]
        cwd: Option<PathBuf>,

        /// Force overwrite existing settings
        #[arg(short, long)]
        force: bool,
    },
}

impl Drills {
    /// Execute the selected command
    pub fn execute(self) -> Result<()> {
        match self.command {
            Commands::Guess { overrides } => {
                let settings = load_settings(self.config.as_deref())?;
                guess_command(overrides.apply(settings.guess))
            }
            Commands::Atm { overrides } => {
                let settings = load_settings(self.config.as_deref())?;
                atm_command(overrides.apply(settings.atm))
            }
            Commands::Init { cwd, force } => init_command(cwd.as_deref(), force),
        }
    }
}
