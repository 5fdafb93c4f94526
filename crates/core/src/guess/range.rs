use crate::error::{Error, Result};
use rand::Rng;
use std::fmt;

/// Inclusive range targets are drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessRange {
    min: i32,
    max: i32,
}

impl GuessRange {
    pub fn new(min: i32, max: i32) -> Result<Self> {
        if min > max {
            return Err(Error::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> i32 {
        self.min
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    pub fn contains(&self, value: i32) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Draw a uniformly distributed value from the range
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> i32 {
        rng.gen_range(self.min..=self.max)
    }
}

impl fmt::Display for GuessRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}
