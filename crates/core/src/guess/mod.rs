//! Number guessing: bounded ranges, single rounds and the scored game

pub mod game;
pub mod range;
pub mod round;

pub use game::GuessingGame;
pub use range::GuessRange;
pub use round::{Feedback, Round, RoundOutcome};
