use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Date format emitted by HTML date inputs
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Errors that can occur when turning user input into a birth date
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    #[error("Birth date is empty")]
    Empty,

    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    Invalid(String),

    #[error("Year {0} is out of range, must be 1 or later")]
    OutOfRange(i32),
}

/// A calendar birth date
///
/// Only the calendar fields matter, there is no time-of-day or timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct BirthDate(NaiveDate);

impl BirthDate {
    /// Parse a `YYYY-MM-DD` string, rejecting empty and non-existent dates
    pub fn parse(input: &str) -> Result<Self, DateError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(DateError::Empty);
        }

        if !is_iso_date_shape(trimmed) {
            return Err(DateError::Invalid(trimmed.to_string()));
        }

        let date = NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
            .map_err(|_| DateError::Invalid(trimmed.to_string()))?;

        Self::try_from(date)
    }

    /// Build a date from its calendar components
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or_else(|| DateError::Invalid(format!("{:04}-{:02}-{:02}", year, month, day)))?;

        Self::try_from(date)
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Year is guaranteed to be positive
    pub fn year(&self) -> u32 {
        self.0.year().unsigned_abs()
    }

    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }
}

/// Exactly `DDDD-DD-DD`; chrono alone accepts short years, signs and
/// single-digit fields
fn is_iso_date_shape(input: &str) -> bool {
    let bytes = input.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

impl TryFrom<NaiveDate> for BirthDate {
    type Error = DateError;

    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        if date.year() < 1 {
            return Err(DateError::OutOfRange(date.year()));
        }
        Ok(Self(date))
    }
}

impl fmt::Display for BirthDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

/// Error for integers outside the life path number set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{0} is not a life path number (expected 1-9, 11, 22 or 33)")]
pub struct InvalidLifePathNumber(pub u8);

/// Master numbers are never reduced further
pub const MASTER_NUMBERS: [u8; 3] = [11, 22, 33];

/// A reduced numerology value: 1..=9 or one of the master numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct LifePathNumber(u8);

impl LifePathNumber {
    pub fn value(self) -> u8 {
        self.0
    }

    pub fn is_master(self) -> bool {
        MASTER_NUMBERS.contains(&self.0)
    }
}

impl TryFrom<u8> for LifePathNumber {
    type Error = InvalidLifePathNumber;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1..=9 | 11 | 22 | 33 => Ok(Self(value)),
            other => Err(InvalidLifePathNumber(other)),
        }
    }
}

impl From<LifePathNumber> for u8 {
    fn from(number: LifePathNumber) -> Self {
        number.0
    }
}

impl fmt::Display for LifePathNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Static interpretation of a life path number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NumberMeaning {
    pub title: &'static str,
    pub description: &'static str,
    pub traits: &'static str,
}

/// Compatibility percentage (0-100)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct CompatibilityScore(u8);

impl CompatibilityScore {
    pub fn new(percent: u8) -> Self {
        Self(percent.min(100))
    }

    pub fn percent(self) -> u8 {
        self.0
    }

    pub fn tier(self) -> CompatibilityTier {
        CompatibilityTier::from_score(self)
    }
}

impl fmt::Display for CompatibilityScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Verbal band for a compatibility score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompatibilityTier {
    Ideal,
    Excellent,
    Good,
    Moderate,
}

impl CompatibilityTier {
    pub fn from_score(score: CompatibilityScore) -> Self {
        match score.percent() {
            90.. => CompatibilityTier::Ideal,
            80..=89 => CompatibilityTier::Excellent,
            70..=79 => CompatibilityTier::Good,
            _ => CompatibilityTier::Moderate,
        }
    }

    /// Display label shown next to the percentage
    pub fn label(self) -> &'static str {
        match self {
            CompatibilityTier::Ideal => "Идеальная совместимость",
            CompatibilityTier::Excellent => "Отличная совместимость",
            CompatibilityTier::Good => "Хорошая совместимость",
            CompatibilityTier::Moderate => "Умеренная совместимость",
        }
    }
}

/// Life path number of a single birth date with its interpretation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LifePathReading {
    #[serde(rename = "birthDate")]
    pub birth_date: BirthDate,
    #[serde(rename = "lifePathNumber")]
    pub number: LifePathNumber,
    #[serde(rename = "isMaster")]
    pub is_master: bool,
    pub meaning: Option<&'static NumberMeaning>,
}

/// Compatibility of two birth dates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompatibilityReport {
    pub first: LifePathReading,
    pub second: LifePathReading,
    pub score: CompatibilityScore,
    pub tier: CompatibilityTier,
}
