//! Simulated ATM: one in-memory account and the menu driving it

pub mod account;
pub mod amount;
pub mod menu;

pub use account::{BankAccount, TransactionError};
pub use amount::parse_amount;
pub use menu::{MenuChoice, render_menu};
