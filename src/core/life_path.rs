use crate::models::{BirthDate, LifePathNumber, MASTER_NUMBERS};

/// Sum of the decimal digits of `n` (1990 -> 19)
#[inline]
pub fn digit_sum(mut n: u32) -> u32 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

#[inline]
fn is_master(n: u32) -> bool {
    MASTER_NUMBERS.iter().any(|&m| u32::from(m) == n)
}

/// Repeatedly digit-sum `n` until it is a single digit or a master number
///
/// The master check runs on every pass, so 38 -> 11 stops at 11.
#[inline]
pub fn reduce(mut n: u32) -> u32 {
    while n > 9 && !is_master(n) {
        n = digit_sum(n);
    }
    n
}

/// Reduced day, month and year of a birth date, before the final sum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LifePathComponents {
    pub day: u32,
    pub month: u32,
    pub year: u32,
}

impl LifePathComponents {
    pub fn of(date: &BirthDate) -> Self {
        Self {
            day: reduce(date.day()),
            month: reduce(date.month()),
            year: reduce(date.year()),
        }
    }

    pub fn total(&self) -> u32 {
        self.day + self.month + self.year
    }

    /// Reduce the sum of the components to the final life path number
    pub fn life_path(&self) -> LifePathNumber {
        // reduce() stops at 0..=9 or a master number, and each component is at
        // least 1, so the result always fits the life path set
        let reduced = reduce(self.total()) as u8;
        LifePathNumber::try_from(reduced).unwrap_or_else(|e| unreachable!("{}", e))
    }
}

/// Calculate the life path number of a birth date
///
/// Day, month and year are reduced independently, then their sum is
/// reduced once more.
pub fn calculate_life_path(date: &BirthDate) -> LifePathNumber {
    LifePathComponents::of(date).life_path()
}
