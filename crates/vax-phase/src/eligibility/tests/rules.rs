use super::common::*;
use crate::eligibility::{Phase, Question};

fn indigenous(age: u32, identifies: bool) -> Phase {
    let mut source = ScriptedSource::new(vec![Reply::YesNo(identifies)]);
    let phase = engine()
        .indigenous_rule(age, &mut source)
        .expect("single question");
    assert_eq!(source.asked, vec![Question::IdentifiesIndigenous]);
    phase
}

fn other_category(age: u32, replies: Vec<Reply>) -> (Phase, Vec<Question>) {
    let mut source = ScriptedSource::new(replies);
    let phase = engine()
        .other_category_rule(age, &mut source)
        .expect("script covers the rule");
    (phase, source.asked)
}

#[test]
fn indigenous_under_55_is_phase_2a() {
    assert_eq!(indigenous(50, true), Phase::Phase2a);
    assert_eq!(indigenous(18, true), Phase::Phase2a);
    assert_eq!(indigenous(54, true), Phase::Phase2a);
}

#[test]
fn indigenous_from_55_is_phase_1b() {
    assert_eq!(indigenous(60, true), Phase::Phase1b);
    assert_eq!(indigenous(55, true), Phase::Phase1b);
}

#[test]
fn indigenous_minor_is_undetermined() {
    assert_eq!(indigenous(12, true), Phase::Undetermined);
}

#[test]
fn non_indigenous_splits_at_50() {
    assert_eq!(indigenous(55, false), Phase::Phase2a);
    assert_eq!(indigenous(50, false), Phase::Phase2a);
    assert_eq!(indigenous(49, false), Phase::Phase2b);
    assert_eq!(indigenous(45, false), Phase::Phase2b);
}

#[test]
fn other_critical_worker_is_phase_2a() {
    let (phase, asked) = other_category(60, vec![yes()]);

    assert_eq!(phase, Phase::Phase2a);
    assert_eq!(asked, vec![Question::OtherCriticalWorker]);
}

#[test]
fn other_category_short_circuits_from_50() {
    let (phase, asked) = other_category(55, vec![no()]);

    assert_eq!(phase, Phase::Phase2a);
    assert_eq!(asked, vec![Question::OtherCriticalWorker]);

    let (phase, _) = other_category(50, vec![no()]);
    assert_eq!(phase, Phase::Phase2a);
}

#[test]
fn other_category_delegates_below_50() {
    let (phase, asked) = other_category(45, vec![no(), yes()]);

    assert_eq!(phase, Phase::Phase2a);
    assert_eq!(
        asked,
        vec![Question::OtherCriticalWorker, Question::IdentifiesIndigenous]
    );

    let (phase, _) = other_category(45, vec![no(), no()]);
    assert_eq!(phase, Phase::Phase2b);
}
