//! Vaccination rollout eligibility: the decision policy and the sources that feed it.
//!
//! The engine asks questions lazily through an [`AnswerSource`], stopping as soon as a
//! phase is settled. Terminal sessions go through [`PromptAdapter`]; pre-filled
//! [`Answers`] and CSV batches go through [`EligibilityEngine::classify_answers`].

pub mod batch;
pub mod domain;
mod policy;
pub mod prompt;
mod rules;
mod source;

#[cfg(test)]
mod tests;

pub use batch::{BatchImportError, BatchRecord, BatchResult};
pub use domain::{Answers, Assessment, OccupationCategory, Phase, Question};
pub use prompt::{parse_age, parse_yes_no, InvalidAge, PromptAdapter, PromptError, ResponseError};
pub use rules::{PolicyThresholds, ADULT_AGE, ELDERLY_AGE, MATURE_AGE, SENIOR_AGE};
pub use source::{AnswerSource, MissingAnswer};

use source::RecordingSource;
use tracing::{info, warn};

/// Stateless evaluator applying the rollout policy to one person at a time.
#[derive(Debug, Clone, Default)]
pub struct EligibilityEngine {
    thresholds: PolicyThresholds,
}

impl EligibilityEngine {
    pub fn new(thresholds: PolicyThresholds) -> Self {
        Self { thresholds }
    }

    /// Runs the full decision policy, asking only the questions needed to settle the phase.
    pub fn classify<S: AnswerSource>(&self, source: &mut S) -> Result<Phase, S::Error> {
        policy::decide_phase(&self.thresholds, source)
    }

    /// Like [`classify`](Self::classify) but also returns the answers and question trail.
    pub fn assess<S: AnswerSource>(&self, source: &mut S) -> Result<Assessment, S::Error> {
        let mut recorder = RecordingSource::new(source);
        let phase = policy::decide_phase(&self.thresholds, &mut recorder)?;
        let (answers, questions_asked) = recorder.into_parts();

        info!(%phase, questions = questions_asked.len(), "eligibility assessed");

        Ok(Assessment {
            phase,
            answers,
            questions_asked,
        })
    }

    /// Classifies a pre-filled answer set. A required answer that is missing yields
    /// [`Phase::Undetermined`].
    pub fn classify_answers(&self, answers: &Answers) -> Phase {
        let mut source = *answers;
        match self.classify(&mut source) {
            Ok(phase) => phase,
            Err(MissingAnswer(question)) => {
                warn!(?question, "answer set is incomplete");
                Phase::Undetermined
            }
        }
    }

    pub fn classify_batch(&self, records: &[BatchRecord]) -> Vec<BatchResult> {
        records
            .iter()
            .map(|record| {
                let phase = self.classify_answers(&record.answers);
                BatchResult {
                    id: record.id.clone(),
                    phase,
                    summary: phase.summary(),
                }
            })
            .collect()
    }

    /// Decides between Phase 1b, 2a and 2b from indigenous self-identification and age.
    pub fn indigenous_rule<S: AnswerSource>(
        &self,
        age: u32,
        source: &mut S,
    ) -> Result<Phase, S::Error> {
        policy::indigenous_rule(&self.thresholds, age, source)
    }

    /// Places other critical or high-risk workers in Phase 2a, falling back to age and
    /// then the indigenous rule.
    pub fn other_category_rule<S: AnswerSource>(
        &self,
        age: u32,
        source: &mut S,
    ) -> Result<Phase, S::Error> {
        policy::other_category_rule(&self.thresholds, age, source)
    }
}
