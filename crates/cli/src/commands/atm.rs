use anyhow::{Context, Result};
use drills_core::{
    AtmConfig, BankAccount, MenuChoice, parse_amount, render_menu,
    config::{ConfigValidator, DefaultValidator},
};
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

use crate::display::format_amount;
use crate::utils::prompt;

pub fn atm_command(settings: AtmConfig) -> Result<()> {
    DefaultValidator
        .validate_atm(&settings)
        .context("Invalid ATM settings")?;
    let mut account = BankAccount::new(settings.initial_balance)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(&mut account, &settings, &mut stdin.lock(), &mut stdout.lock())?;

    info!("Session closed with balance {}", account.balance());
    Ok(())
}

/// Present the menu until the user exits or input runs out.
pub fn run_session<R: BufRead, W: Write>(
    account: &mut BankAccount,
    settings: &AtmConfig,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    writeln!(output, "Welcome to the ATM!")?;

    loop {
        writeln!(output)?;
        writeln!(output, "{}", render_menu())?;
        let Some(line) = prompt(input, output, "Choose an option: ")? else {
            debug!("Input closed at the menu");
            writeln!(output)?;
            break;
        };

        match line.parse::<MenuChoice>() {
            Ok(MenuChoice::Withdraw) => withdraw(account, settings, input, output)?,
            Ok(MenuChoice::Deposit) => deposit(account, settings, input, output)?,
            Ok(MenuChoice::CheckBalance) => writeln!(
                output,
                "Your balance is: {}",
                format_amount(account.balance(), &settings.currency_symbol)
            )?,
            Ok(MenuChoice::Exit) => {
                writeln!(output, "Thank you for using the ATM. Goodbye!")?;
                break;
            }
            Err(e) => {
                debug!("{}", e);
                writeln!(output, "Invalid option. Please try again.")?;
            }
        }
    }

    Ok(())
}

fn withdraw<R: BufRead, W: Write>(
    account: &mut BankAccount,
    settings: &AtmConfig,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    let message = format!("Enter amount to withdraw ({}): ", settings.currency_code);
    let Some(line) = prompt(input, output, &message)? else {
        return Ok(());
    };

    match parse_amount(&line).and_then(|amount| account.withdraw(amount).map(|_| amount)) {
        Ok(amount) => {
            writeln!(
                output,
                "Withdrawn: {}",
                format_amount(amount, &settings.currency_symbol)
            )?;
            writeln!(output, "Please collect your cash.")?;
        }
        Err(e) => {
            debug!("Withdrawal rejected: {:?}", e);
            writeln!(output, "{e}")?;
        }
    }
    Ok(())
}

fn deposit<R: BufRead, W: Write>(
    account: &mut BankAccount,
    settings: &AtmConfig,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    let message = format!("Enter amount to deposit ({}): ", settings.currency_code);
    let Some(line) = prompt(input, output, &message)? else {
        return Ok(());
    };

    match parse_amount(&line).and_then(|amount| account.deposit(amount).map(|_| amount)) {
        Ok(amount) => writeln!(
            output,
            "Deposited: {}",
            format_amount(amount, &settings.currency_symbol)
        )?,
        Err(e) => {
            debug!("Deposit rejected: {:?}", e);
            writeln!(output, "{e}")?;
        }
    }
    Ok(())
}
