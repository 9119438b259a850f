use std::collections::VecDeque;

use crate::eligibility::{AnswerSource, EligibilityEngine, Question};

/// Canned reply handed out in order by [`ScriptedSource`].
#[derive(Debug, Clone, Copy)]
pub(super) enum Reply {
    YesNo(bool),
    Age(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum ScriptError {
    Exhausted(Question),
    WrongKind(Question),
}

/// Answers questions from a fixed script and remembers what was asked.
#[derive(Debug, Default)]
pub(super) struct ScriptedSource {
    replies: VecDeque<Reply>,
    pub(super) asked: Vec<Question>,
}

impl ScriptedSource {
    pub(super) fn new(replies: impl IntoIterator<Item = Reply>) -> Self {
        Self {
            replies: replies.into_iter().collect(),
            asked: Vec::new(),
        }
    }

    pub(super) fn remaining(&self) -> usize {
        self.replies.len()
    }
}

impl AnswerSource for ScriptedSource {
    type Error = ScriptError;

    fn ask_yes_no(&mut self, question: Question) -> Result<bool, Self::Error> {
        self.asked.push(question);
        match self.replies.pop_front() {
            Some(Reply::YesNo(answer)) => Ok(answer),
            Some(Reply::Age(_)) => Err(ScriptError::WrongKind(question)),
            None => Err(ScriptError::Exhausted(question)),
        }
    }

    fn ask_age(&mut self, question: Question) -> Result<u32, Self::Error> {
        self.asked.push(question);
        match self.replies.pop_front() {
            Some(Reply::Age(age)) => Ok(age),
            Some(Reply::YesNo(_)) => Err(ScriptError::WrongKind(question)),
            None => Err(ScriptError::Exhausted(question)),
        }
    }
}

pub(super) fn engine() -> EligibilityEngine {
    EligibilityEngine::default()
}

pub(super) fn yes() -> Reply {
    Reply::YesNo(true)
}

pub(super) fn no() -> Reply {
    Reply::YesNo(false)
}

/// Declines both occupation questions, then gives `age`.
pub(super) fn general_public(age: u32) -> Vec<Reply> {
    vec![no(), no(), Reply::Age(age)]
}
