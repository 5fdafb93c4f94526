use crate::error::Error;
use std::str::FromStr;

/// Entries of the ATM main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Withdraw,
    Deposit,
    CheckBalance,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 4] = [
        MenuChoice::Withdraw,
        MenuChoice::Deposit,
        MenuChoice::CheckBalance,
        MenuChoice::Exit,
    ];

    pub fn number(&self) -> u8 {
        match self {
            MenuChoice::Withdraw => 1,
            MenuChoice::Deposit => 2,
            MenuChoice::CheckBalance => 3,
            MenuChoice::Exit => 4,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::Withdraw => "Withdraw",
            MenuChoice::Deposit => "Deposit",
            MenuChoice::CheckBalance => "Check Balance",
            MenuChoice::Exit => "Exit",
        }
    }
}

impl FromStr for MenuChoice {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let number: u8 = s
            .trim()
            .parse()
            .map_err(|_| Error::InvalidMenuChoice(s.to_string()))?;

        Self::ALL
            .into_iter()
            .find(|choice| choice.number() == number)
            .ok_or_else(|| Error::InvalidMenuChoice(s.to_string()))
    }
}

/// Menu text without the trailing prompt
pub fn render_menu() -> String {
    let mut lines = vec!["ATM Machine".to_string()];
    lines.extend(
        MenuChoice::ALL
            .iter()
            .map(|choice| format!("{}. {}", choice.number(), choice.label())),
    );
    lines.join("\n")
}
