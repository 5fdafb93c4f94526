use crate::error::{Error, Result};
use tracing::debug;

/// Rejected account operations. The display text is what the user sees.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TransactionError {
    #[error("Invalid amount. Please enter a positive number.")]
    InvalidAmount { input: String },

    #[error("Invalid deposit amount. Please enter a positive value.")]
    InvalidDeposit { amount: f64 },

    #[error("Invalid withdraw amount or insufficient balance.")]
    InvalidWithdrawal { amount: f64 },

    #[error("Invalid withdraw amount or insufficient balance.")]
    InsufficientFunds { amount: f64, balance: f64 },
}

/// Single account holding a non-negative balance
#[derive(Debug, Clone, PartialEq)]
pub struct BankAccount {
    balance: f64,
}

impl BankAccount {
    pub fn new(initial_balance: f64) -> Result<Self> {
        if !initial_balance.is_finite() {
            return Err(Error::NonFiniteInitialBalance(initial_balance));
        }
        if initial_balance < 0.0 {
            return Err(Error::NegativeInitialBalance(initial_balance));
        }
        Ok(Self {
            balance: initial_balance,
        })
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    /// Add a positive amount, returning the new balance. A deposit that
    /// would push the balance past the largest finite value is rejected.
    pub fn deposit(&mut self, amount: f64) -> std::result::Result<f64, TransactionError> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(TransactionError::InvalidDeposit { amount });
        }

        let new_balance = self.balance + amount;
        if !new_balance.is_finite() {
            return Err(TransactionError::InvalidDeposit { amount });
        }

        self.balance = new_balance;
        debug!("Deposited {}, balance now {}", amount, self.balance);
        Ok(self.balance)
    }

    /// Take out `amount` when `0 < amount <= balance`, returning the new balance
    pub fn withdraw(&mut self, amount: f64) -> std::result::Result<f64, TransactionError> {
        if amount.is_nan() || amount <= 0.0 {
            return Err(TransactionError::InvalidWithdrawal { amount });
        }
        if amount > self.balance {
            return Err(TransactionError::InsufficientFunds {
                amount,
                balance: self.balance,
            });
        }

        self.balance -= amount;
        debug!("Withdrew {}, balance now {}", amount, self.balance);
        Ok(self.balance)
    }
}
