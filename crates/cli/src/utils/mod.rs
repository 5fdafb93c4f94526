pub mod prompt;

pub use prompt::prompt;
