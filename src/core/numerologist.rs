use crate::models::{BirthDate, CompatibilityReport, LifePathNumber, LifePathReading};
use crate::core::{
    compatibility::{compatibility_score_or, DEFAULT_COMPATIBILITY},
    life_path::{calculate_life_path, LifePathComponents},
    meanings::meaning_for,
};

/// Turns birth dates into readings and compatibility reports
///
/// Holds the score used when a pair of numbers has no table entry.
#[derive(Debug, Clone, Copy)]
pub struct Numerologist {
    fallback_score: u8,
}

impl Numerologist {
    pub fn new(fallback_score: u8) -> Self {
        Self {
            fallback_score: fallback_score.min(100),
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(DEFAULT_COMPATIBILITY)
    }

    pub fn fallback_score(&self) -> u8 {
        self.fallback_score
    }

    pub fn life_path(&self, date: &BirthDate) -> LifePathNumber {
        calculate_life_path(date)
    }

    /// Life path number of a birth date with its meaning, if one is defined
    pub fn reading(&self, date: &BirthDate) -> LifePathReading {
        let components = LifePathComponents::of(date);
        tracing::debug!(
            "Reduced {}: day={}, month={}, year={}, total={}",
            date,
            components.day,
            components.month,
            components.year,
            components.total()
        );
        let number = components.life_path();

        LifePathReading {
            birth_date: *date,
            number,
            is_master: number.is_master(),
            meaning: meaning_for(number),
        }
    }

    /// Compatibility of two birth dates
    pub fn compatibility(&self, first: &BirthDate, second: &BirthDate) -> CompatibilityReport {
        let first = self.reading(first);
        let second = self.reading(second);
        let score = compatibility_score_or(first.number, second.number, self.fallback_score);

        CompatibilityReport {
            first,
            second,
            score,
            tier: score.tier(),
        }
    }
}

impl Default for Numerologist {
    fn default() -> Self {
        Self::with_defaults()
    }
}
