use std::fmt;

use serde::{Deserialize, Serialize};

/// Occupation groups that drive the earliest rollout phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OccupationCategory {
    /// Quarantine and border workers, prioritised frontline healthcare workers, aged
    /// care/disability care staff and residents.
    QuarantineBorderOrFrontlineHealthcareOrAgedCare,
    /// Health care workers and critical or high risk workers (defence, police, fire,
    /// emergency services, meat processing).
    HealthcareOrCriticalHighRisk,
    OtherCriticalHighRisk,
    NotListed,
}

impl OccupationCategory {
    /// Parses the short labels accepted by batch imports.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "frontline" | "quarantine_border_or_frontline_healthcare_or_aged_care" => {
                Some(Self::QuarantineBorderOrFrontlineHealthcareOrAgedCare)
            }
            "healthcare" | "healthcare_or_critical_high_risk" => {
                Some(Self::HealthcareOrCriticalHighRisk)
            }
            "other_critical" | "other_critical_high_risk" => Some(Self::OtherCriticalHighRisk),
            "none" | "not_listed" => Some(Self::NotListed),
            _ => None,
        }
    }
}

/// Rollout tier assigned to a person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Phase1a,
    Phase1b,
    Phase2a,
    Phase2b,
    Phase3,
    NotRecommended,
    Undetermined,
}

impl Phase {
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Phase1a => "Phase 1a",
            Phase::Phase1b => "Phase 1b",
            Phase::Phase2a => "Phase 2a",
            Phase::Phase2b => "Phase 2b",
            Phase::Phase3 => "Phase 3",
            Phase::NotRecommended => "not recommended",
            Phase::Undetermined => "undetermined",
        }
    }

    /// Sentence shown to the person once the session ends.
    pub fn summary(&self) -> String {
        match self {
            Phase::NotRecommended => "Vaccination is not recommended for you".to_string(),
            Phase::Undetermined => "Your phase can not be determined".to_string(),
            phase => format!("Vaccines will be made available to you in {}", phase.label()),
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Every question the engine may put to the person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Question {
    FrontlineWorker,
    HealthcareOrCriticalWorker,
    Age,
    VaccineRecommendedForMinor,
    MedicalConditionOrDisability,
    IdentifiesIndigenous,
    OtherCriticalWorker,
}

impl Question {
    pub fn prompt(&self) -> &'static str {
        match self {
            Question::FrontlineWorker => {
                "Are you a:\n\
                 Quarantine and border worker, prioritised frontline healthcare worker, \
                 or an aged care/disability care staff member or resident? (Y/N) : "
            }
            Question::HealthcareOrCriticalWorker => {
                "Are you a:\n\
                 Health care worker, or a critical or high risk worker \
                 (including defence, police, fire, emergency services and meat processing)? (Y/N) : "
            }
            Question::Age => "Please enter your age (in years) : ",
            Question::VaccineRecommendedForMinor => {
                "Has it been recommended you obtain a vaccine? (Y/N) : "
            }
            Question::MedicalConditionOrDisability => {
                "Do you have an underlying medical condition or a disability? (Y/N) : "
            }
            Question::IdentifiesIndigenous => {
                "Do you identify as an Aboriginal and/or Torres Strait Islander person? (Y/N) : "
            }
            Question::OtherCriticalWorker => {
                "Are you another critical or high-risk worker? (Y/N) : "
            }
        }
    }
}

/// Facts collected about one person. Fields stay `None` until the engine needs them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answers {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occupation: Option<OccupationCategory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifies_indigenous: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_medical_condition_or_disability: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vaccine_recommended_for_minor: Option<bool>,
}

impl Answers {
    pub fn with_occupation(mut self, occupation: OccupationCategory) -> Self {
        self.occupation = Some(occupation);
        self
    }

    pub fn with_age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    pub fn with_indigenous(mut self, identifies: bool) -> Self {
        self.identifies_indigenous = Some(identifies);
        self
    }

    pub fn with_medical_condition(mut self, has_condition: bool) -> Self {
        self.has_medical_condition_or_disability = Some(has_condition);
        self
    }

    pub fn with_minor_recommendation(mut self, recommended: bool) -> Self {
        self.vaccine_recommended_for_minor = Some(recommended);
        self
    }
}

/// Result of a completed session with the trail that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assessment {
    pub phase: Phase,
    pub answers: Answers,
    pub questions_asked: Vec<Question>,
}
