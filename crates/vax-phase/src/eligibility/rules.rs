pub const ADULT_AGE: u32 = 18;
pub const MATURE_AGE: u32 = 50;
pub const SENIOR_AGE: u32 = 55;
pub const ELDERLY_AGE: u32 = 70;

/// Age cut-offs of the rollout policy. Every band is half-open: `[lo, hi)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolicyThresholds {
    /// Below this age a person is treated as a minor.
    pub adult_age: u32,
    /// From this age non-indigenous adults without other priority reach Phase 2a.
    pub mature_age: u32,
    /// From this age indigenous adults reach Phase 1b.
    pub senior_age: u32,
    /// From this age everyone reaches Phase 1b.
    pub elderly_age: u32,
}

impl Default for PolicyThresholds {
    fn default() -> Self {
        Self {
            adult_age: ADULT_AGE,
            mature_age: MATURE_AGE,
            senior_age: SENIOR_AGE,
            elderly_age: ELDERLY_AGE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AgeBand {
    Minor,
    Adult,
    Elderly,
}

impl PolicyThresholds {
    pub(crate) fn age_band(&self, age: u32) -> AgeBand {
        if age < self.adult_age {
            AgeBand::Minor
        } else if age < self.elderly_age {
            AgeBand::Adult
        } else {
            AgeBand::Elderly
        }
    }

    pub(crate) fn is_mature(&self, age: u32) -> bool {
        age >= self.mature_age
    }

    pub(crate) fn is_senior(&self, age: u32) -> bool {
        age >= self.senior_age
    }

    pub(crate) fn is_adult_below_senior(&self, age: u32) -> bool {
        (self.adult_age..self.senior_age).contains(&age)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_thresholds_are_ordered() {
        let thresholds = PolicyThresholds::default();
        assert!(thresholds.adult_age < thresholds.mature_age);
        assert!(thresholds.mature_age < thresholds.senior_age);
        assert!(thresholds.senior_age < thresholds.elderly_age);
    }

    #[test]
    fn bands_are_half_open() {
        let thresholds = PolicyThresholds::default();
        assert_eq!(thresholds.age_band(0), AgeBand::Minor);
        assert_eq!(thresholds.age_band(17), AgeBand::Minor);
        assert_eq!(thresholds.age_band(18), AgeBand::Adult);
        assert_eq!(thresholds.age_band(69), AgeBand::Adult);
        assert_eq!(thresholds.age_band(70), AgeBand::Elderly);
        assert_eq!(thresholds.age_band(u32::MAX), AgeBand::Elderly);
    }

    #[test]
    fn senior_and_mature_boundaries() {
        let thresholds = PolicyThresholds::default();
        assert!(!thresholds.is_mature(49));
        assert!(thresholds.is_mature(50));
        assert!(!thresholds.is_senior(54));
        assert!(thresholds.is_senior(55));
        assert!(thresholds.is_adult_below_senior(18));
        assert!(thresholds.is_adult_below_senior(54));
        assert!(!thresholds.is_adult_below_senior(55));
        assert!(!thresholds.is_adult_below_senior(17));
    }
}
