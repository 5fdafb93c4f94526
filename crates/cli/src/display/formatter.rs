use drills_core::Feedback;

/// Money with the currency symbol and two decimals, e.g. `₹10500.00`
pub fn format_amount(amount: f64, symbol: &str) -> String {
    format!("{symbol}{amount:.2}")
}

pub fn feedback_message(feedback: &Feedback) -> String {
    match feedback {
        Feedback::TooLow => "Too low! Try again.".to_string(),
        Feedback::TooHigh => "Too high! Try again.".to_string(),
        Feedback::Correct { attempts } => {
            format!("Congratulations! You guessed it right in {attempts} attempts.")
        }
    }
}

pub fn lost_message(target: i32) -> String {
    format!("Sorry, you've run out of attempts. The number was: {target}")
}
