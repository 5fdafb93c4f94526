use super::TransactionError;

/// Parse a typed amount. Non-numeric, negative and non-finite input is
/// rejected; zero passes through so the account can report it.
pub fn parse_amount(input: &str) -> Result<f64, TransactionError> {
    let trimmed = input.trim();
    match trimmed.parse::<f64>() {
        Ok(amount) if amount.is_finite() && amount >= 0.0 => Ok(amount),
        _ => Err(TransactionError::InvalidAmount {
            input: trimmed.to_string(),
        }),
    }
}
