use std::io::{BufRead, Write};
use std::num::NonZeroU32;

use tracing::debug;

use super::domain::{Phase, Question};
use super::source::AnswerSource;

const BANNER: &str = "*** Vaccination phase rollout ***";

/// Text that could not be turned into a typed answer. Displayed verbatim to the person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ResponseError {
    #[error("Your phase can not be determined - Please ensure you enter either 'yes' or 'no'")]
    InvalidResponse,
    #[error(transparent)]
    InvalidAge(#[from] InvalidAge),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidAge {
    #[error(
        "It appears you've entered invalid character(s) - \
         Please ensure you enter a valid age (non-negative numerical characters only)"
    )]
    NotNumeric,
    #[error("Invalid input. Please enter a valid age (non-negative numerical characters only)")]
    Negative,
}

/// Failures of the terminal session itself.
#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    #[error("terminal i/o failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("input closed before {0:?} was answered")]
    InputClosed(Question),
    #[error("no valid answer to {question:?} after {attempts} attempt(s)")]
    AttemptsExhausted { question: Question, attempts: u32 },
}

/// Accepts `y`, `n`, `yes` and `no` in any case, ignoring surrounding whitespace.
pub fn parse_yes_no(raw: &str) -> Result<bool, ResponseError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Ok(true),
        "n" | "no" => Ok(false),
        _ => Err(ResponseError::InvalidResponse),
    }
}

/// Accepts any whole number of years. Ages past `u32::MAX` saturate, which every
/// policy band treats the same as any other elderly age.
pub fn parse_age(raw: &str) -> Result<u32, InvalidAge> {
    let trimmed = raw.trim();
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(InvalidAge::NotNumeric);
    }
    if negative && digits.bytes().any(|byte| byte != b'0') {
        return Err(InvalidAge::Negative);
    }

    // Only overflow can fail once every byte is a digit.
    Ok(digits.parse::<u32>().unwrap_or(u32::MAX))
}

/// Line-oriented question loop over any reader/writer pair.
pub struct PromptAdapter<R, W> {
    input: R,
    output: W,
    max_attempts: Option<NonZeroU32>,
}

impl<R: BufRead, W: Write> PromptAdapter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            max_attempts: None,
        }
    }

    pub fn with_max_attempts(mut self, max_attempts: Option<NonZeroU32>) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn banner(&mut self) -> Result<(), PromptError> {
        writeln!(self.output, "{BANNER}")?;
        Ok(())
    }

    pub fn announce(&mut self, phase: Phase) -> Result<(), PromptError> {
        writeln!(self.output, "\n{}\n", phase.summary())?;
        self.output.flush()?;
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn ask<T>(
        &mut self,
        question: Question,
        parse: impl Fn(&str) -> Result<T, ResponseError>,
    ) -> Result<T, PromptError> {
        let mut attempts = 0u32;

        loop {
            write!(self.output, "\n{}", question.prompt())?;
            self.output.flush()?;

            // Undecodable bytes become replacement characters and fail validation.
            let mut buf = Vec::new();
            if self.input.read_until(b'\n', &mut buf)? == 0 {
                return Err(PromptError::InputClosed(question));
            }
            attempts += 1;
            let line = String::from_utf8_lossy(&buf);

            match parse(&*line) {
                Ok(value) => return Ok(value),
                Err(err) => {
                    debug!(?question, attempts, "rejected answer");
                    writeln!(self.output, "\n{err}\n")?;

                    if let Some(limit) = self.max_attempts {
                        if attempts >= limit.get() {
                            return Err(PromptError::AttemptsExhausted { question, attempts });
                        }
                    }
                }
            }
        }
    }
}

impl<R: BufRead, W: Write> AnswerSource for PromptAdapter<R, W> {
    type Error = PromptError;

    fn ask_yes_no(&mut self, question: Question) -> Result<bool, Self::Error> {
        self.ask(question, parse_yes_no)
    }

    fn ask_age(&mut self, question: Question) -> Result<u32, Self::Error> {
        self.ask(question, |raw| parse_age(raw).map_err(ResponseError::from))
    }
}
