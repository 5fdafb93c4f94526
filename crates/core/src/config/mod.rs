//! Settings for the guessing game and the ATM session

pub mod settings;
pub mod validation;

pub use settings::{AtmConfig, CONFIG_FILE_NAMES, Config, GuessConfig};
pub use validation::{ConfigValidator, DefaultValidator};
