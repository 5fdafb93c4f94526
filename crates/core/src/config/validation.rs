//! Settings validation run before a game or session starts

use crate::{
    config::{AtmConfig, Config, GuessConfig},
    error::{Error, Result},
};

/// Trait for validating settings
pub trait ConfigValidator {
    /// Validate the entire configuration
    fn validate(&self, config: &Config) -> Result<()> {
        self.validate_guess(&config.guess)?;
        self.validate_atm(&config.atm)
    }

    fn validate_guess(&self, guess: &GuessConfig) -> Result<()>;

    fn validate_atm(&self, atm: &AtmConfig) -> Result<()>;
}

/// Rules every front end relies on
pub struct DefaultValidator;

impl ConfigValidator for DefaultValidator {
    fn validate_guess(&self, guess: &GuessConfig) -> Result<()> {
        guess.range()?;
        if guess.attempt_limit == 0 {
            return Err(Error::ZeroAttemptLimit);
        }
        Ok(())
    }

    fn validate_atm(&self, atm: &AtmConfig) -> Result<()> {
        if !atm.initial_balance.is_finite() {
            return Err(Error::ConfigError(format!(
                "initial_balance must be a finite number, got {}",
                atm.initial_balance
            )));
        }
        if atm.initial_balance < 0.0 {
            return Err(Error::NegativeInitialBalance(atm.initial_balance));
        }
        if atm.currency_code.trim().is_empty() {
            return Err(Error::ConfigError("currency_code cannot be empty".to_string()));
        }
        Ok(())
    }
}
