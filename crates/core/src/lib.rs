//! drills-core - Domain logic for two console drills
//!
//! This crate provides:
//! - A number guessing game with bounded attempts and a cumulative score
//! - A bank account with validated deposits and withdrawals for an ATM session
//! - Settings loading and validation shared by the command line front end
pub mod atm;
pub mod config;
pub mod error;
pub mod guess;

// Re-export commonly used types
pub use error::{Error, Result};

pub use atm::{BankAccount, MenuChoice, TransactionError, parse_amount, render_menu};
pub use config::{AtmConfig, Config, GuessConfig};
pub use guess::{Feedback, GuessRange, GuessingGame, Round, RoundOutcome};
