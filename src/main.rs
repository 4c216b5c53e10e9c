use hackmatch::config::{LoggingSettings, Settings};
use hackmatch::{MatchClient, MatchClientError, Profile};
use std::io::Read;
use std::process::ExitCode;
use thiserror::Error;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use validator::Validate;

const USAGE: &str = "usage: hackmatch <profile.json | -> | hackmatch --health";

/// Failures of a single CLI invocation
#[derive(Debug, Error)]
enum CliError {
    #[error("Failed to read profile from {path}: {source}")]
    ReadProfile {
        path: String,
        source: std::io::Error,
    },

    #[error("Invalid profile JSON: {0}")]
    ParseProfile(#[source] serde_json::Error),

    #[error("Invalid profile: {0}")]
    InvalidProfile(#[from] validator::ValidationErrors),

    #[error("Failed to encode matches: {0}")]
    EncodeMatches(#[source] serde_json::Error),

    #[error(transparent)]
    Client(#[from] MatchClientError),
}

enum Command {
    Health,
    Match { source: String },
}

fn parse_args() -> Option<Command> {
    let mut args = std::env::args().skip(1);
    let first = args.next()?;
    if args.next().is_some() {
        return None;
    }

    match first.as_str() {
        "--health" => Some(Command::Health),
        "-h" | "--help" => None,
        _ => Some(Command::Match { source: first }),
    }
}

fn init_logging(logging: &LoggingSettings) {
    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true);

    match logging.format.as_str() {
        "json" => subscriber.json().init(),
        "compact" => subscriber.compact().init(),
        _ => subscriber.pretty().init(),
    }
}

fn read_profile(source: &str) -> Result<Profile, CliError> {
    let raw = if source == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| CliError::ReadProfile { path: "stdin".to_string(), source: e })?;
        buf
    } else {
        std::fs::read_to_string(source)
            .map_err(|e| CliError::ReadProfile { path: source.to_string(), source: e })?
    };

    let profile: Profile = serde_json::from_str(&raw).map_err(CliError::ParseProfile)?;
    profile.validate()?;

    Ok(profile)
}

async fn run(command: Command, client: MatchClient) -> Result<(), CliError> {
    match command {
        Command::Health => {
            let status = client.health().await?;
            info!("Backend status: {}", status.message);
            println!("{}", status.message);
        }
        Command::Match { source } => {
            let profile = read_profile(&source)?;
            info!("Fetching matches for {} ({})", profile.name, profile.hackathon);

            let matches = client.fetch_matches(&profile).await?;

            info!("Received {} matches", matches.len());

            let output = serde_json::to_string_pretty(&matches).map_err(CliError::EncodeMatches)?;
            println!("{}", output);
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = Settings::load();

    // Initialize logging before reporting configuration problems
    let logging = settings
        .as_ref()
        .map(|s| s.logging.clone())
        .unwrap_or_default();
    init_logging(&logging);

    let settings = match settings {
        Ok(settings) => settings,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let Some(command) = parse_args() else {
        eprintln!("{}", USAGE);
        return ExitCode::FAILURE;
    };

    let client = MatchClient::from_settings(&settings);

    match run(command, client).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
