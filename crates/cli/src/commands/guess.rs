use anyhow::{Context, Result};
use drills_core::{
    GuessConfig, GuessingGame, RoundOutcome,
    config::{ConfigValidator, DefaultValidator},
};
use rand::Rng;
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

use crate::display::{feedback_message, lost_message};
use crate::utils::prompt;

pub fn guess_command(settings: GuessConfig) -> Result<()> {
    DefaultValidator
        .validate_guess(&settings)
        .context("Invalid guessing game settings")?;
    let mut game = GuessingGame::from_config(&settings)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let score = play(&mut game, &mut stdin.lock(), &mut stdout.lock())?;

    info!("Session ended with score {}", score);
    Ok(())
}

/// Run rounds until the player declines a replay or input runs out.
/// Returns the final score.
pub fn play<G, R, W>(game: &mut GuessingGame<G>, input: &mut R, output: &mut W) -> Result<u32>
where
    G: Rng,
    R: BufRead,
    W: Write,
{
    writeln!(output, "Welcome to the Number Guessing Game!")?;
    let range = game.range();

    'session: loop {
        let mut round = game.start_round();
        writeln!(
            output,
            "I have generated a number between {} and {}. Guess what it is!",
            range.min(),
            range.max()
        )?;

        while !round.is_over() {
            let Some(line) = prompt(input, output, "Enter your guess: ")? else {
                debug!("Input closed mid-round after {} attempts", round.attempts());
                writeln!(output)?;
                break 'session;
            };

            let guess: i32 = match line.parse() {
                Ok(guess) => guess,
                Err(_) => {
                    writeln!(output, "Please enter a whole number.")?;
                    continue;
                }
            };

            let feedback = round.submit(guess)?;
            writeln!(output, "{}", feedback_message(&feedback))?;
        }

        if let RoundOutcome::Lost { target } = game.finish_round(round)? {
            writeln!(output, "{}", lost_message(target))?;
        }

        let Some(answer) = prompt(input, output, "Do you want to play again? (yes/no): ")? else {
            writeln!(output)?;
            break;
        };
        if !answer.eq_ignore_ascii_case("yes") {
            break;
        }
    }

    writeln!(output, "Game Over! Your total score is: {}", game.score())
        .context("Failed to write final score")?;
    Ok(game.score())
}
