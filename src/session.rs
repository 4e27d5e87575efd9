use tracing::{debug, info};

use crate::{
    account::{Account, AccountKind, AccountSnapshot, Amount, LastOperation},
    command::{interpret, Command},
    error::Error,
    parser::Event,
    speech::RecognitionResult,
};

pub type Listener = Box<dyn FnMut(&AccountSnapshot)>;

/// Where an amount came from. Button presses and voice commands word their
/// messages differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Input {
    Typed,
    Voice,
}

/// State behind the banking screen: the session's only account, the status
/// line shown to the user, and the subscribers redrawn after each operation.
pub struct Session {
    account: Account,
    status: String,
    listeners: Vec<Listener>,
}

impl Session {
    pub fn new(kind: AccountKind) -> Self {
        Self {
            account: Account::new(kind),
            status: "None".to_string(),
            listeners: Vec::new(),
        }
    }

    pub fn account(&self) -> &Account {
        &self.account
    }

    /// The most recent user-facing message.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Registers a listener called with a snapshot after every deposit or
    /// withdrawal reaching the account, rejected credit deposits included.
    pub fn subscribe(&mut self, listener: impl FnMut(&AccountSnapshot) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    fn notify(&mut self) {
        let snapshot = self.account.snapshot();
        for listener in self.listeners.iter_mut() {
            listener(&snapshot);
        }
    }

    /// Deposit button: blank or non-numeric text deposits 0.
    pub fn deposit_typed(&mut self, text: &str) -> Result<&str, Error> {
        let outcome =
            parse_typed_amount(text).and_then(|amount| self.deposit(amount, Input::Typed));
        self.report(outcome, Input::Typed)
    }

    /// Withdraw button: only withdraws when the balance covers the amount.
    pub fn withdraw_typed(&mut self, text: &str) -> Result<&str, Error> {
        let outcome =
            parse_typed_amount(text).and_then(|amount| self.withdraw(amount, Input::Typed));
        self.report(outcome, Input::Typed)
    }

    pub fn handle_voice(&mut self, text: &str) -> Result<&str, Error> {
        let outcome = interpret(text).and_then(|command| match command {
            Command::Withdraw { amount } => self.withdraw(amount, Input::Voice),
            Command::Deposit { amount } => self.deposit(amount, Input::Voice),
        });
        self.report(outcome, Input::Voice)
    }

    /// Completion of a speech recognition request. Nothing happens when the
    /// user cancelled; a recognition without text is an empty command.
    pub fn on_recognition(&mut self, result: &RecognitionResult) -> Result<Option<&str>, Error> {
        match result {
            RecognitionResult::Cancelled => {
                debug!("speech recognition cancelled");
                Ok(None)
            }
            RecognitionResult::Recognized(_) => {
                let text = result.best().unwrap_or_default();
                self.handle_voice(text).map(Some)
            }
        }
    }

    /// Apply a screen event, returning the message shown for it, if any.
    pub fn apply(&mut self, event: &Event) -> Result<Option<String>, Error> {
        match event {
            Event::Deposit(text) => self.deposit_typed(text).map(|m| Some(m.to_string())),
            Event::Withdraw(text) => self.withdraw_typed(text).map(|m| Some(m.to_string())),
            Event::Recognition(result) => self
                .on_recognition(result)
                .map(|m| m.map(str::to_string)),
            Event::Balance => Ok(Some(format!("Balance: ${}", self.account.balance()))),
        }
    }

    /// Serialize the account state to CSV.
    pub fn serialize(&self, output: impl std::io::Write) -> Result<(), Box<dyn std::error::Error>> {
        let mut writer = csv::Writer::from_writer(output);
        writer.serialize(self.account.snapshot())?;
        writer.flush()?;
        Ok(())
    }

    fn withdraw(&mut self, amount: Amount, input: Input) -> Result<String, Error> {
        let balance = self.account.balance();
        if balance < amount {
            return Err(Error::InsufficientFunds {
                balance,
                requested: amount,
            });
        }
        let withdrawn = self.account.withdraw(amount)?;
        debug!(withdrawn, balance = self.account.balance(), "withdrawal applied");
        self.notify();
        Ok(match input {
            Input::Typed => "Withdrawal Successful".to_string(),
            Input::Voice => format!("Withdrawal of ${} successful", withdrawn),
        })
    }

    fn deposit(&mut self, amount: Amount, input: Input) -> Result<String, Error> {
        let deposited = self.account.deposit(amount)?;
        let outcome = self.account.last_operation();
        debug!(deposited, balance = self.account.balance(), ?outcome, "deposit attempted");
        self.notify();
        Ok(match (outcome, input) {
            (LastOperation::DepositFailureAlreadyPaidOff, _) => {
                "Deposit failed: account already paid off".to_string()
            }
            (LastOperation::DepositFailureGreaterAmount, _) => {
                "Deposit failed: amount exceeds amount owed".to_string()
            }
            (LastOperation::DepositSuccessfulPaidOff, _) => {
                format!("Deposit of ${} successful, account paid off", deposited)
            }
            (_, Input::Typed) => "Deposit Successful".to_string(),
            (_, Input::Voice) => format!("Deposit of ${} successful", deposited),
        })
    }

    fn report(&mut self, outcome: Result<String, Error>, input: Input) -> Result<&str, Error> {
        match outcome {
            Ok(message) => {
                self.status = message;
                Ok(self.status.as_str())
            }
            Err(error) => {
                info!(%error, "operation not performed");
                self.status = failure_message(&error, input).to_string();
                Err(error)
            }
        }
    }
}

fn failure_message(error: &Error, input: Input) -> &'static str {
    match (error, input) {
        (Error::InsufficientFunds { .. }, Input::Typed) => "Withdrawal Failed: Not Enough Balance",
        (Error::InsufficientFunds { .. }, Input::Voice) => "Withdrawal failed: Not enough balance",
        (Error::BalanceOverflow { .. }, _) => "Operation failed: balance limit reached",
        (_, Input::Typed) => "Amount not recognized",
        (_, Input::Voice) => "Command not recognized",
    }
}

/// Typed amounts follow the text field: anything that is not a number,
/// surrounding spaces included, counts as 0, but negative numbers are refused.
fn parse_typed_amount(text: &str) -> Result<Amount, Error> {
    match text.parse::<Amount>() {
        Ok(amount) if amount < 0 => Err(Error::InvalidAmount(text.to_string())),
        Ok(amount) => Ok(amount),
        Err(_) => Ok(0),
    }
}
