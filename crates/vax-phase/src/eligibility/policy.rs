use super::domain::{Phase, Question};
use super::rules::{AgeBand, PolicyThresholds};
use super::source::AnswerSource;
use tracing::{debug, warn};

pub(crate) fn decide_phase<S: AnswerSource>(
    thresholds: &PolicyThresholds,
    source: &mut S,
) -> Result<Phase, S::Error> {
    if source.ask_yes_no(Question::FrontlineWorker)? {
        debug!("frontline, border or aged care worker");
        return Ok(Phase::Phase1a);
    }

    if source.ask_yes_no(Question::HealthcareOrCriticalWorker)? {
        debug!("healthcare or critical high-risk worker");
        return Ok(Phase::Phase1b);
    }

    let age = source.ask_age(Question::Age)?;
    match thresholds.age_band(age) {
        AgeBand::Minor => {
            debug!(age, "minor age band");
            if source.ask_yes_no(Question::VaccineRecommendedForMinor)? {
                Ok(Phase::Phase3)
            } else {
                Ok(Phase::NotRecommended)
            }
        }
        AgeBand::Adult => {
            if source.ask_yes_no(Question::MedicalConditionOrDisability)? {
                debug!(age, "underlying medical condition or disability");
                Ok(Phase::Phase1b)
            } else if thresholds.is_senior(age) {
                indigenous_rule(thresholds, age, source)
            } else {
                other_category_rule(thresholds, age, source)
            }
        }
        AgeBand::Elderly => {
            debug!(age, "elderly age band");
            Ok(Phase::Phase1b)
        }
    }
}

pub(crate) fn indigenous_rule<S: AnswerSource>(
    thresholds: &PolicyThresholds,
    age: u32,
    source: &mut S,
) -> Result<Phase, S::Error> {
    let identifies = source.ask_yes_no(Question::IdentifiesIndigenous)?;
    debug!(age, identifies, "applying indigenous rule");

    if identifies {
        if thresholds.is_adult_below_senior(age) {
            Ok(Phase::Phase2a)
        } else if thresholds.is_senior(age) {
            Ok(Phase::Phase1b)
        } else {
            warn!(age, "indigenous rule reached with a minor age");
            Ok(Phase::Undetermined)
        }
    } else if thresholds.is_mature(age) {
        Ok(Phase::Phase2a)
    } else {
        Ok(Phase::Phase2b)
    }
}

pub(crate) fn other_category_rule<S: AnswerSource>(
    thresholds: &PolicyThresholds,
    age: u32,
    source: &mut S,
) -> Result<Phase, S::Error> {
    if source.ask_yes_no(Question::OtherCriticalWorker)? {
        debug!(age, "other critical or high-risk worker");
        return Ok(Phase::Phase2a);
    }

    if thresholds.is_mature(age) {
        Ok(Phase::Phase2a)
    } else {
        indigenous_rule(thresholds, age, source)
    }
}
