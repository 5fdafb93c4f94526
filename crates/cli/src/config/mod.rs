use anyhow::{Context, Result};
use clap::Args;
use drills_core::{AtmConfig, Config, GuessConfig};
use std::{env, path::Path};
use tracing::debug;

/// Command line values that take precedence over the settings file
#[derive(Args, Debug, Default, Clone)]
pub struct GuessOverrides {
    /// Smallest number that can be drawn
    #[arg(long, allow_negative_numbers = true)]
    pub min: Option<i32>,

    /// Largest number that can be drawn
    #[arg(long, allow_negative_numbers = true)]
    pub max: Option<i32>,

    /// Guesses allowed per round
    #[arg(short, long)]
    pub attempts: Option<u32>,

    /// Seed for reproducible targets
    #[arg(long)]
    pub seed: Option<u64>,
}

impl GuessOverrides {
    pub fn apply(self, mut settings: GuessConfig) -> GuessConfig {
        if let Some(min) = self.min {
            settings.min = min;
        }
        if let Some(max) = self.max {
            settings.max = max;
        }
        if let Some(attempts) = self.attempts {
            settings.attempt_limit = attempts;
        }
        if self.seed.is_some() {
            settings.seed = self.seed;
        }
        settings
    }
}

#[derive(Args, Debug, Default, Clone)]
pub struct AtmOverrides {
    /// Balance the account opens with
    #[arg(long, allow_negative_numbers = true)]
    pub initial_balance: Option<f64>,

    /// Symbol printed before amounts
    #[arg(long)]
    pub currency_symbol: Option<String>,

    /// Currency code shown in amount prompts
    #[arg(long)]
    pub currency_code: Option<String>,
}

impl AtmOverrides {
    pub fn apply(self, mut settings: AtmConfig) -> AtmConfig {
        if let Some(balance) = self.initial_balance {
            settings.initial_balance = balance;
        }
        if let Some(symbol) = self.currency_symbol {
            settings.currency_symbol = symbol;
        }
        if let Some(code) = self.currency_code {
            settings.currency_code = code;
        }
        settings
    }
}

/// Load settings from `explicit` or the nearest settings file above the
/// current directory.
pub fn load_settings(explicit: Option<&Path>) -> Result<Config> {
    let cwd = env::current_dir().context("Failed to get current directory")?;
    debug!("Resolving settings from {}", cwd.display());

    let settings = Config::resolve(explicit, &cwd).with_context(|| match explicit {
        Some(path) => format!("Failed to load settings from {}", path.display()),
        None => "Failed to load settings".to_string(),
    })?;
    Ok(settings)
}
