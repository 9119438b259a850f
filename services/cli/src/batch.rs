use clap::{Args, ValueEnum};
use std::io::{self, Write};
use std::path::PathBuf;
use vax_phase::eligibility::{BatchRecord, BatchResult, EligibilityEngine, Phase};
use vax_phase::error::AppError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// CSV file with columns id, occupation, age, vaccine_recommended_for_minor,
    /// has_medical_condition_or_disability, identifies_indigenous
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub(crate) format: OutputFormat,
}

pub(crate) fn run_batch(args: BatchArgs) -> Result<(), AppError> {
    let BatchArgs { input, format } = args;

    let records = BatchRecord::from_path(&input)?;
    let results = EligibilityEngine::default().classify_batch(&records);

    write_results(&results, format, io::stdout().lock())?;

    let undetermined = results
        .iter()
        .filter(|result| result.phase == Phase::Undetermined)
        .count();
    tracing::info!(
        rows = results.len(),
        undetermined,
        input = %input.display(),
        "batch classified"
    );

    Ok(())
}

fn write_results<W: Write>(
    results: &[BatchResult],
    format: OutputFormat,
    mut output: W,
) -> Result<(), AppError> {
    match format {
        OutputFormat::Json => {
            for result in results {
                serde_json::to_writer(&mut output, result)?;
                writeln!(output)?;
            }
        }
        OutputFormat::Text => {
            let width = results
                .iter()
                .map(|result| result.id.len())
                .max()
                .unwrap_or(0);

            for result in results {
                writeln!(output, "{:<width$}  {}", result.id, result.phase)?;
            }
        }
    }

    output.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn results() -> Vec<BatchResult> {
        [("a", Phase::Phase1a), ("carol", Phase::Phase2b)]
            .into_iter()
            .map(|(id, phase)| BatchResult {
                id: id.to_string(),
                phase,
                summary: phase.summary(),
            })
            .collect()
    }

    fn render(format: OutputFormat) -> String {
        let mut output = Vec::new();
        write_results(&results(), format, &mut output).expect("writes to memory");
        String::from_utf8(output).expect("utf8 output")
    }

    #[test]
    fn text_output_aligns_ids() {
        assert_eq!(render(OutputFormat::Text), "a      Phase 1a\ncarol  Phase 2b\n");
    }

    #[test]
    fn json_output_is_one_object_per_row() {
        let output = render(OutputFormat::Json);
        let rows: Vec<Value> = output
            .lines()
            .map(|line| serde_json::from_str(line).expect("each line is json"))
            .collect();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["id"], "a");
        assert_eq!(rows[1]["phase"], "phase2b");
        assert_eq!(
            rows[1]["summary"],
            "Vaccines will be made available to you in Phase 2b"
        );
    }

    #[test]
    fn empty_batch_prints_nothing() {
        let mut output = Vec::new();
        write_results(&[], OutputFormat::Text, &mut output).expect("writes to memory");
        assert!(output.is_empty());
    }
}
