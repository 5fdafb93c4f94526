use crate::{
    config::GuessConfig,
    error::{Error, Result},
    guess::{GuessRange, Round, RoundOutcome},
};
use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::{debug, info};

/// Replayable guessing game keeping a cumulative score.
///
/// The score only ever grows: it goes up by one for each round finished
/// with a correct guess.
pub struct GuessingGame<R = StdRng> {
    range: GuessRange,
    attempt_limit: u32,
    rng: R,
    score: u32,
    rounds_played: u32,
}

impl GuessingGame<StdRng> {
    /// Build a game from settings, seeding from `settings.seed` when set
    pub fn from_config(settings: &GuessConfig) -> Result<Self> {
        let rng = match settings.seed {
            Some(seed) => {
                debug!("Seeding target generator with {}", seed);
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_entropy(),
        };
        Self::with_rng(settings, rng)
    }
}

impl<R: Rng> GuessingGame<R> {
    pub fn with_rng(settings: &GuessConfig, rng: R) -> Result<Self> {
        let range = settings.range()?;
        if settings.attempt_limit == 0 {
            return Err(Error::ZeroAttemptLimit);
        }

        Ok(Self {
            range,
            attempt_limit: settings.attempt_limit,
            rng,
            score: 0,
            rounds_played: 0,
        })
    }

    pub fn range(&self) -> GuessRange {
        self.range
    }

    pub fn attempt_limit(&self) -> u32 {
        self.attempt_limit
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// Start a round with a freshly drawn target
    pub fn start_round(&mut self) -> Round {
        let target = self.range.sample(&mut self.rng);
        debug!("New round in {} with limit {}", self.range, self.attempt_limit);
        Round::new(target, self.attempt_limit)
    }

    /// Score a finished round. Consumes the round so it counts once.
    pub fn finish_round(&mut self, round: Round) -> Result<RoundOutcome> {
        let outcome = round.outcome().ok_or(Error::RoundInProgress)?;

        self.rounds_played += 1;
        if let RoundOutcome::Won { .. } = outcome {
            self.score += 1;
        }

        info!(
            "Round {} finished: {:?}, score {}",
            self.rounds_played, outcome, self.score
        );
        Ok(outcome)
    }
}
