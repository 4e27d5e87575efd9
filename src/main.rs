use clap::{ArgEnum, Parser};
use senseflow::{account::AccountKind, logging, parser, session::Session};
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, ArgEnum)]
enum AccountArg {
    Checking,
    Credit,
}

impl From<AccountArg> for AccountKind {
    fn from(arg: AccountArg) -> Self {
        match arg {
            AccountArg::Checking => AccountKind::Checking,
            AccountArg::Credit => AccountKind::Credit,
        }
    }
}

/// Replay banking screen events against a single account.
#[derive(Parser)]
#[clap(version, about)]
struct Cli {
    /// CSV script with `event, input` rows
    input: String,
    #[clap(long, arg_enum, default_value = "checking")]
    account: AccountArg,
    /// Log filter used when RUST_LOG is unset
    #[clap(long)]
    log_level: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logging::init(cli.log_level.as_deref());

    let mut session = Session::new(cli.account.into());
    session.subscribe(|snapshot| {
        debug!(balance = snapshot.balance, last_operation = ?snapshot.last_operation, "account updated")
    });

    let rdr = parser::reader(std::fs::File::open(&cli.input)?);

    for event in parser::parse(rdr) {
        let event = match event {
            Ok(event) => event,
            Err(error) => {
                warn!(%error, "skipping event");
                continue;
            }
        };
        match session.apply(&event) {
            Ok(Some(message)) => eprintln!("{}", message),
            Ok(None) => {}
            Err(_) => eprintln!("{}", session.status()),
        }
    }

    session.serialize(std::io::stdout())
}
