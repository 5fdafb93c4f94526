pub mod formatter;

pub use formatter::{feedback_message, format_amount, lost_message};
