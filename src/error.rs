use thiserror::Error;

use crate::account::Amount;

#[derive(Error, Debug, PartialEq)]
pub enum Error {
    #[error("failed to parse input, reason: `{0}`")]
    ParsingFailure(String),
    #[error("command `{0}` not recognized")]
    UnrecognizedCommand(String),
    #[error("`{0}` is not a valid amount")]
    InvalidAmount(String),
    #[error("withdrawal of {requested:?} failed because of insufficient balance: {balance:?}")]
    InsufficientFunds { balance: Amount, requested: Amount },
    #[error("applying {amount:?} to balance {balance:?} would overflow")]
    BalanceOverflow { balance: Amount, amount: Amount },
}
