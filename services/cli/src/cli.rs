use crate::batch::{run_batch, BatchArgs};
use crate::session::{run_check, CheckArgs};
use clap::{Parser, Subcommand};
use vax_phase::config::AppConfig;
use vax_phase::error::AppError;
use vax_phase::telemetry;

#[derive(Parser, Debug)]
#[command(
    name = "Vaccination Phase Checker",
    about = "Determine which vaccination rollout phase a person belongs to",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Answer the eligibility questions interactively (default command)
    Check(CheckArgs),
    /// Classify every row of a CSV file of pre-filled answers
    Batch(BatchArgs),
}

impl Cli {
    fn into_command(self) -> Command {
        self.command
            .unwrap_or_else(|| Command::Check(CheckArgs::default()))
    }
}

pub(crate) fn run() -> Result<(), AppError> {
    let command = Cli::parse().into_command();

    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    match command {
        Command::Check(args) => run_check(args, &config),
        Command::Batch(args) => run_batch(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::OutputFormat;
    use std::num::NonZeroU32;
    use std::path::PathBuf;

    fn parse(args: &[&str]) -> Command {
        Cli::try_parse_from(args)
            .expect("arguments parse")
            .into_command()
    }

    #[test]
    fn check_is_the_default_command() {
        match parse(&["vax-phase-cli"]) {
            Command::Check(args) => {
                assert!(!args.json);
                assert_eq!(args.max_attempts, None);
            }
            other => panic!("expected check, got {other:?}"),
        }
    }

    #[test]
    fn check_accepts_json_and_attempt_limit() {
        match parse(&["vax-phase-cli", "check", "--json", "--max-attempts", "4"]) {
            Command::Check(args) => {
                assert!(args.json);
                assert_eq!(args.max_attempts, NonZeroU32::new(4));
            }
            other => panic!("expected check, got {other:?}"),
        }
    }

    #[test]
    fn zero_attempt_limit_is_rejected() {
        assert!(Cli::try_parse_from(["vax-phase-cli", "check", "--max-attempts", "0"]).is_err());
    }

    #[test]
    fn batch_parses_input_and_format() {
        match parse(&["vax-phase-cli", "batch", "--input", "people.csv", "--format", "json"]) {
            Command::Batch(args) => {
                assert_eq!(args.input, PathBuf::from("people.csv"));
                assert_eq!(args.format, OutputFormat::Json);
            }
            other => panic!("expected batch, got {other:?}"),
        }

        match parse(&["vax-phase-cli", "batch", "--input", "people.csv"]) {
            Command::Batch(args) => assert_eq!(args.format, OutputFormat::Text),
            other => panic!("expected batch, got {other:?}"),
        }
    }
}
