use super::domain::{Answers, OccupationCategory, Question};

/// Supplies validated answers to the engine on demand.
///
/// Implementations guarantee that a returned value is well typed: invalid text is
/// handled before it reaches the engine. The error type covers failures of the
/// source itself (closed input, a missing recorded answer).
pub trait AnswerSource {
    type Error;

    fn ask_yes_no(&mut self, question: Question) -> Result<bool, Self::Error>;

    fn ask_age(&mut self, question: Question) -> Result<u32, Self::Error>;
}

impl<S: AnswerSource + ?Sized> AnswerSource for &mut S {
    type Error = S::Error;

    fn ask_yes_no(&mut self, question: Question) -> Result<bool, Self::Error> {
        (**self).ask_yes_no(question)
    }

    fn ask_age(&mut self, question: Question) -> Result<u32, Self::Error> {
        (**self).ask_age(question)
    }
}

/// Raised when the engine needs an answer that a pre-filled [`Answers`] does not hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("no answer recorded for {0:?}")]
pub struct MissingAnswer(pub Question);

impl AnswerSource for Answers {
    type Error = MissingAnswer;

    fn ask_yes_no(&mut self, question: Question) -> Result<bool, Self::Error> {
        let answer = match question {
            Question::FrontlineWorker => self.occupation.map(|occupation| {
                occupation == OccupationCategory::QuarantineBorderOrFrontlineHealthcareOrAgedCare
            }),
            Question::HealthcareOrCriticalWorker => self
                .occupation
                .map(|occupation| occupation == OccupationCategory::HealthcareOrCriticalHighRisk),
            Question::OtherCriticalWorker => self
                .occupation
                .map(|occupation| occupation == OccupationCategory::OtherCriticalHighRisk),
            Question::VaccineRecommendedForMinor => self.vaccine_recommended_for_minor,
            Question::MedicalConditionOrDisability => self.has_medical_condition_or_disability,
            Question::IdentifiesIndigenous => self.identifies_indigenous,
            Question::Age => None,
        };

        answer.ok_or(MissingAnswer(question))
    }

    fn ask_age(&mut self, question: Question) -> Result<u32, Self::Error> {
        self.age.ok_or(MissingAnswer(question))
    }
}

/// Wraps a source and keeps every answer handed to the engine.
pub(crate) struct RecordingSource<S> {
    inner: S,
    answers: Answers,
    asked: Vec<Question>,
}

impl<S: AnswerSource> RecordingSource<S> {
    pub(crate) fn new(inner: S) -> Self {
        Self {
            inner,
            answers: Answers::default(),
            asked: Vec::new(),
        }
    }

    pub(crate) fn into_parts(self) -> (Answers, Vec<Question>) {
        (self.answers, self.asked)
    }
}

impl<S: AnswerSource> AnswerSource for RecordingSource<S> {
    type Error = S::Error;

    fn ask_yes_no(&mut self, question: Question) -> Result<bool, Self::Error> {
        let answer = self.inner.ask_yes_no(question)?;
        self.asked.push(question);

        match question {
            Question::FrontlineWorker if answer => {
                self.answers.occupation =
                    Some(OccupationCategory::QuarantineBorderOrFrontlineHealthcareOrAgedCare);
            }
            Question::HealthcareOrCriticalWorker if answer => {
                self.answers.occupation = Some(OccupationCategory::HealthcareOrCriticalHighRisk);
            }
            // Last occupation question; a "no" here rules out every listed group.
            Question::OtherCriticalWorker => {
                self.answers.occupation = Some(if answer {
                    OccupationCategory::OtherCriticalHighRisk
                } else {
                    OccupationCategory::NotListed
                });
            }
            Question::VaccineRecommendedForMinor => {
                self.answers.vaccine_recommended_for_minor = Some(answer);
            }
            Question::MedicalConditionOrDisability => {
                self.answers.has_medical_condition_or_disability = Some(answer);
            }
            Question::IdentifiesIndigenous => {
                self.answers.identifies_indigenous = Some(answer);
            }
            _ => {}
        }

        Ok(answer)
    }

    fn ask_age(&mut self, question: Question) -> Result<u32, Self::Error> {
        let age = self.inner.ask_age(question)?;
        self.asked.push(question);
        self.answers.age = Some(age);
        Ok(age)
    }
}
