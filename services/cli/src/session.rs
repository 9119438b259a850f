use clap::Args;
use std::io::{self, BufRead, Write};
use std::num::NonZeroU32;
use tracing::info;
use vax_phase::config::AppConfig;
use vax_phase::eligibility::{EligibilityEngine, Phase, PromptAdapter};
use vax_phase::error::AppError;

#[derive(Args, Debug, Default)]
pub(crate) struct CheckArgs {
    /// Print the full assessment as JSON instead of the result sentence
    #[arg(long)]
    pub(crate) json: bool,
    /// Give up after this many invalid answers to one question
    #[arg(long)]
    pub(crate) max_attempts: Option<NonZeroU32>,
}

pub(crate) fn run_check(args: CheckArgs, config: &AppConfig) -> Result<(), AppError> {
    let stdin = io::stdin();
    check_session(args, config, stdin.lock(), io::stdout().lock())?;
    Ok(())
}

/// Flag beats `APP_PROMPT_MAX_ATTEMPTS`.
fn attempt_limit(args: &CheckArgs, config: &AppConfig) -> Option<NonZeroU32> {
    args.max_attempts.or(config.prompt.max_attempts)
}

fn check_session<R: BufRead, W: Write>(
    args: CheckArgs,
    config: &AppConfig,
    input: R,
    output: W,
) -> Result<Phase, AppError> {
    let engine = EligibilityEngine::default();
    let mut adapter =
        PromptAdapter::new(input, output).with_max_attempts(attempt_limit(&args, config));

    adapter.banner()?;
    let assessment = engine.assess(&mut adapter)?;
    info!(
        ?config.environment,
        phase = %assessment.phase,
        "eligibility session complete"
    );

    if args.json {
        let mut output = adapter.into_output();
        serde_json::to_writer_pretty(&mut output, &assessment)?;
        writeln!(output)?;
        output.flush()?;
    } else {
        adapter.announce(assessment.phase)?;
    }

    Ok(assessment.phase)
}
