use crate::error::{Error, Result};
use std::cmp::Ordering;
use tracing::debug;

/// Response to a single guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    TooLow,
    TooHigh,
    Correct { attempts: u32 },
}

/// How a finished round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    Won { attempts: u32 },
    Lost { target: i32 },
}

/// One play-through: a hidden target and a bounded number of attempts.
///
/// The attempt counter never exceeds the limit; once the target is found or
/// the limit is reached every further guess is rejected.
#[derive(Debug, Clone)]
pub struct Round {
    target: i32,
    attempts: u32,
    limit: u32,
    solved: bool,
}

impl Round {
    pub fn new(target: i32, limit: u32) -> Self {
        Self {
            target,
            attempts: 0,
            limit,
            solved: false,
        }
    }

    pub fn target(&self) -> i32 {
        self.target
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn remaining(&self) -> u32 {
        self.limit.saturating_sub(self.attempts)
    }

    pub fn is_solved(&self) -> bool {
        self.solved
    }

    pub fn is_over(&self) -> bool {
        self.solved || self.attempts >= self.limit
    }

    pub fn submit(&mut self, guess: i32) -> Result<Feedback> {
        if self.is_over() {
            return Err(Error::RoundOver {
                attempts: self.attempts,
            });
        }

        self.attempts += 1;
        let feedback = match guess.cmp(&self.target) {
            Ordering::Less => Feedback::TooLow,
            Ordering::Greater => Feedback::TooHigh,
            Ordering::Equal => {
                self.solved = true;
                Feedback::Correct {
                    attempts: self.attempts,
                }
            }
        };

        debug!(
            "Guess {} scored {:?} ({}/{} attempts)",
            guess, feedback, self.attempts, self.limit
        );
        Ok(feedback)
    }

    /// `None` while the round is still being played
    pub fn outcome(&self) -> Option<RoundOutcome> {
        if self.solved {
            Some(RoundOutcome::Won {
                attempts: self.attempts,
            })
        } else if self.attempts >= self.limit {
            Some(RoundOutcome::Lost {
                target: self.target,
            })
        } else {
            None
        }
    }
}
