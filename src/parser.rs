use serde::Deserialize;

use crate::{error::Error, speech::RecognitionResult};

#[derive(Debug, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
enum ParsedEventKind {
    Deposit,
    Withdraw,
    Voice,
    VoiceCancelled,
    Balance,
}

#[derive(Deserialize, Debug, PartialEq)]
struct ParsedEvent {
    event: ParsedEventKind,
    #[serde(default)]
    input: Option<String>,
}

/// Something the user did on the banking screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Deposit button pressed with the text currently in the deposit field.
    Deposit(String),
    /// Withdraw button pressed with the text currently in the withdraw field.
    Withdraw(String),
    Recognition(RecognitionResult),
    /// Balance read out without touching the account.
    Balance,
}

pub fn parse<R>(rdr: csv::Reader<R>) -> impl Iterator<Item = Result<Event, Error>>
where
    R: std::io::Read,
{
    rdr.into_deserialize::<ParsedEvent>().map(|event| {
        let event = event.map_err(|e| Error::ParsingFailure(e.to_string()))?;
        let input = event.input.unwrap_or_default();

        Ok(match event.event {
            ParsedEventKind::Deposit => Event::Deposit(input),
            ParsedEventKind::Withdraw => Event::Withdraw(input),
            ParsedEventKind::Voice => Event::Recognition(RecognitionResult::Recognized(vec![input])),
            ParsedEventKind::VoiceCancelled => Event::Recognition(RecognitionResult::Cancelled),
            ParsedEventKind::Balance => Event::Balance,
        })
    })
}

/// Reader configured for event scripts: trimmed fields, optional input column.
pub fn reader<R: std::io::Read>(input: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(input)
}

#[cfg(test)]
mod tests {
    mod parsing {
        use crate::error::Error;
        use crate::parser::{parse, reader, Event};
        use crate::speech::RecognitionResult;

        macro_rules! parse {
            ($data:literal) => {{
                let input = format!("event, input\n{}", $data);
                parse(reader(input.as_bytes())).collect::<Vec<Result<Event, _>>>()
            }};
        }

        #[test]
        fn parse_deposit() {
            assert_eq!(
                parse!("deposit, 100"),
                vec![Ok(Event::Deposit("100".to_string()))]
            );
            assert_eq!(parse!("deposit,"), vec![Ok(Event::Deposit(String::new()))]);
        }

        #[test]
        fn parse_withdraw() {
            assert_eq!(
                parse!("withdraw, 40"),
                vec![Ok(Event::Withdraw("40".to_string()))]
            );
        }

        #[test]
        fn parse_voice() {
            assert_eq!(
                parse!("voice, withdraw 50 please"),
                vec![Ok(Event::Recognition(RecognitionResult::Recognized(vec![
                    "withdraw 50 please".to_string()
                ])))]
            );
            assert_eq!(
                parse!("voice,"),
                vec![Ok(Event::Recognition(RecognitionResult::Recognized(vec![
                    String::new()
                ])))]
            );
        }

        #[test]
        fn parse_voice_cancelled() {
            assert_eq!(
                parse!("voice_cancelled,"),
                vec![Ok(Event::Recognition(RecognitionResult::Cancelled))]
            );
        }

        #[test]
        fn parse_balance_without_input_column() {
            assert_eq!(parse!("balance"), vec![Ok(Event::Balance)]);
        }

        #[test]
        fn parse_unknown_event() {
            assert!(matches!(
                parse!("transfer, 10")[..],
                [Err(Error::ParsingFailure(_))]
            ));
        }
    }
}
