//! `subscription-cli`: offline card checks and quick lookups against the API.
//!
//! `check` never touches the network. `charge` and `customer` read their
//! settings from `BHOJPUR_*` environment variables (or `.env`).

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::warn;
use tracing_subscriber::{fmt, EnvFilter};

use subscription_client::config::{ClientConfig, ConfigError};
use subscription_client::domain::{classify_network, validate_checksum};
use subscription_client::{Client, Error};

/// Failures of the online commands.
#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Client(#[from] Error),

    #[error("failed to render JSON: {0}")]
    Output(#[from] serde_json::Error),
}

/// `subscription-cli` arguments.
#[derive(Debug, Parser)]
#[command(
    name = "subscription-cli",
    about = "Check card numbers and look up charges and customers",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Validate card numbers with the Luhn checksum and name their network.
    Check {
        /// Card numbers; spaces and dashes are ignored.
        #[arg(required = true, value_name = "number")]
        numbers: Vec<String>,
    },
    /// Print a charge as JSON.
    Charge {
        #[arg(value_name = "id")]
        id: String,
    },
    /// Print a customer as JSON.
    Customer {
        #[arg(value_name = "id")]
        id: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let config = ClientConfig::load();
    let debug = config.as_ref().map_or(false, |c| c.debug);

    if let Err(e) = fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(fallback_directives(debug))),
        )
        .with_writer(std::io::stderr)
        .try_init()
    {
        eprintln!("tracing init failed: {e}");
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Check { numbers } => check(&numbers),
        Command::Charge { id } => lookup(config, |client| async move {
            print_json(&client.charges().retrieve(&id).await?)
        })
        .await,
        Command::Customer { id } => lookup(config, |client| async move {
            print_json(&client.customers().retrieve(&id).await?)
        })
        .await,
    }
}

fn check(numbers: &[String]) -> ExitCode {
    let mut all_valid = true;

    for number in numbers {
        let digits: String = number
            .chars()
            .filter(|c| !matches!(c, ' ' | '-'))
            .collect();

        match validate_checksum(&digits) {
            Ok(valid) => {
                all_valid &= valid;
                println!(
                    "{}\t{}\t{}",
                    number,
                    if valid { "valid" } else { "invalid" },
                    classify_network(&digits)
                );
            }
            Err(e) => {
                all_valid = false;
                println!("{}\terror\t{}", number, e);
            }
        }
    }

    if all_valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Log filter used when `RUST_LOG` is unset; `BHOJPUR_DEBUG` turns on the
/// client's diagnostic events.
fn fallback_directives(debug: bool) -> &'static str {
    if debug {
        "info,subscription_client=debug"
    } else {
        "info"
    }
}

async fn lookup<F, Fut>(config: Result<ClientConfig, ConfigError>, call: F) -> ExitCode
where
    F: FnOnce(Client) -> Fut,
    Fut: std::future::Future<Output = Result<(), CliError>>,
{
    let result = match config.map_err(Error::from).and_then(Client::new) {
        Ok(client) => call(client).await,
        Err(e) => Err(e.into()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match api_error(&e) {
                Some(api) => warn!(
                    status = api.status,
                    request_id = ?api.request_id,
                    "{}",
                    api.message
                ),
                None => warn!(error = %e, "lookup failed"),
            }
            ExitCode::FAILURE
        }
    }
}

fn api_error(e: &CliError) -> Option<&subscription_client::domain::ApiError> {
    match e {
        CliError::Client(e) => e.as_api_error(),
        CliError::Output(_) => None,
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
