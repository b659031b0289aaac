use crate::models::{CompatibilityScore, LifePathNumber};

/// Score returned for pairs that have no table entry
pub const DEFAULT_COMPATIBILITY: u8 = 75;

/// Unordered pair of numbers, stored low-first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PairKey {
    pub low: u8,
    pub high: u8,
}

impl PairKey {
    pub const fn new(a: u8, b: u8) -> Self {
        if a <= b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }
}

const fn entry(low: u8, high: u8, percent: u8) -> (PairKey, u8) {
    (PairKey { low, high }, percent)
}

/// Hand-authored compatibility percentages for every unordered pair of 1..=9
pub const COMPATIBILITY_TABLE: [(PairKey, u8); 45] = [
    entry(1, 1, 85), entry(1, 2, 70), entry(1, 3, 90), entry(1, 4, 60), entry(1, 5, 95),
    entry(1, 6, 75), entry(1, 7, 65), entry(1, 8, 80), entry(1, 9, 88),
    entry(2, 2, 90), entry(2, 3, 85), entry(2, 4, 88), entry(2, 5, 70), entry(2, 6, 95),
    entry(2, 7, 82), entry(2, 8, 75), entry(2, 9, 92),
    entry(3, 3, 88), entry(3, 4, 65), entry(3, 5, 92), entry(3, 6, 85), entry(3, 7, 78),
    entry(3, 8, 70), entry(3, 9, 90),
    entry(4, 4, 85), entry(4, 5, 60), entry(4, 6, 90), entry(4, 7, 75), entry(4, 8, 95),
    entry(4, 9, 72),
    entry(5, 5, 80), entry(5, 6, 68), entry(5, 7, 85), entry(5, 8, 78), entry(5, 9, 88),
    entry(6, 6, 92), entry(6, 7, 80), entry(6, 8, 85), entry(6, 9, 95),
    entry(7, 7, 88), entry(7, 8, 72), entry(7, 9, 85),
    entry(8, 8, 90), entry(8, 9, 78),
    entry(9, 9, 92),
];

/// Look up the table value for a pair of raw numbers, in either order
#[inline]
pub fn lookup(a: u8, b: u8) -> Option<u8> {
    let key = PairKey::new(a, b);
    COMPATIBILITY_TABLE
        .iter()
        .find(|(k, _)| *k == key)
        .map(|&(_, percent)| percent)
}

/// Compatibility of two life path numbers, falling back to `fallback` on a miss
pub fn compatibility_score_or(a: LifePathNumber, b: LifePathNumber, fallback: u8) -> CompatibilityScore {
    let percent = lookup(a.value(), b.value()).unwrap_or(fallback);
    CompatibilityScore::new(percent)
}

/// Compatibility of two life path numbers
///
/// Master numbers are never table keys and always score the default 75.
pub fn compatibility_score(a: LifePathNumber, b: LifePathNumber) -> CompatibilityScore {
    compatibility_score_or(a, b, DEFAULT_COMPATIBILITY)
}
