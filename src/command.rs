use lazy_static::lazy_static;
use regex::Regex;

use crate::{account::Amount, error::Error};

lazy_static! {
    static ref WITHDRAW_REGEX: Regex =
        Regex::new(r"withdraw ([0-9]+)").expect("Failed to compile withdraw command regex");
    static ref DEPOSIT_REGEX: Regex =
        Regex::new(r"deposit ([0-9]+)").expect("Failed to compile deposit command regex");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Withdraw { amount: Amount },
    Deposit { amount: Amount },
}

fn captured_amount(regex: &Regex, text: &str) -> Option<Result<Amount, Error>> {
    let digits = regex.captures(text)?.get(1)?.as_str();
    Some(
        digits
            .parse::<Amount>()
            .map_err(|_| Error::InvalidAmount(digits.to_string())),
    )
}

/// Interprets one recognized utterance.
///
/// The withdraw template is tried before the deposit one and the first
/// template that matches anywhere in the text decides the command, even when
/// its amount turns out not to fit an [`Amount`]. Only the first match of that
/// template is considered.
pub fn interpret(text: &str) -> Result<Command, Error> {
    if let Some(amount) = captured_amount(&WITHDRAW_REGEX, text) {
        return Ok(Command::Withdraw { amount: amount? });
    }
    if let Some(amount) = captured_amount(&DEPOSIT_REGEX, text) {
        return Ok(Command::Deposit { amount: amount? });
    }
    Err(Error::UnrecognizedCommand(text.to_string()))
}
