use serde::Serialize;

use crate::error::Error;

pub type Amount = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    Checking,
    /// A debt account: a negative balance is money owed, zero means paid off.
    Credit,
}

/// Outcome of the most recent operation attempted on an account,
/// rejected attempts included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LastOperation {
    None,
    WithdrawalSuccessful,
    DepositSuccessful,
    DepositFailureAlreadyPaidOff,
    DepositFailureGreaterAmount,
    DepositSuccessfulPaidOff,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AccountSnapshot {
    pub kind: AccountKind,
    pub balance: Amount,
    pub last_operation: LastOperation,
}

/// A single account. The balance has no public setter: `withdraw` and
/// `deposit` are the only write paths.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    kind: AccountKind,
    balance: Amount,
    last_operation: LastOperation,
}

impl Account {
    pub fn new(kind: AccountKind) -> Self {
        Self {
            kind,
            balance: 0,
            last_operation: LastOperation::None,
        }
    }

    pub fn kind(&self) -> AccountKind {
        self.kind
    }

    pub fn balance(&self) -> Amount {
        self.balance
    }

    pub fn last_operation(&self) -> LastOperation {
        self.last_operation
    }

    pub fn snapshot(&self) -> AccountSnapshot {
        AccountSnapshot {
            kind: self.kind,
            balance: self.balance,
            last_operation: self.last_operation,
        }
    }

    fn checked(&self, result: Option<Amount>, amount: Amount) -> Result<Amount, Error> {
        result.ok_or(Error::BalanceOverflow {
            balance: self.balance,
            amount,
        })
    }

    fn non_negative(amount: Amount) -> Result<Amount, Error> {
        if amount < 0 {
            return Err(Error::InvalidAmount(amount.to_string()));
        }
        Ok(amount)
    }

    /// Withdraws `amount` without any balance check, for both kinds.
    /// Callers are expected to verify `balance() >= amount` first.
    pub fn withdraw(&mut self, amount: Amount) -> Result<Amount, Error> {
        let amount = Self::non_negative(amount)?;
        let balance = self.checked(self.balance.checked_sub(amount), amount)?;
        self.balance = balance;
        self.last_operation = LastOperation::WithdrawalSuccessful;
        Ok(amount)
    }

    /// Returns the amount actually applied, 0 when a credit deposit is rejected.
    pub fn deposit(&mut self, amount: Amount) -> Result<Amount, Error> {
        let amount = Self::non_negative(amount)?;
        let new_balance = self.checked(self.balance.checked_add(amount), amount)?;
        match self.kind {
            AccountKind::Checking => {
                self.balance = new_balance;
                self.last_operation = LastOperation::DepositSuccessful;
                Ok(amount)
            }
            AccountKind::Credit => {
                // Paid off is checked first: a zero balance never reports
                // the greater-amount failure.
                if self.balance == 0 {
                    self.last_operation = LastOperation::DepositFailureAlreadyPaidOff;
                    return Ok(0);
                }
                if new_balance > 0 {
                    self.last_operation = LastOperation::DepositFailureGreaterAmount;
                    return Ok(0);
                }
                self.last_operation = if new_balance == 0 {
                    LastOperation::DepositSuccessfulPaidOff
                } else {
                    LastOperation::DepositSuccessful
                };
                self.balance = new_balance;
                Ok(amount)
            }
        }
    }
}
