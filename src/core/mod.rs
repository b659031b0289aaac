// Core algorithm exports
pub mod compatibility;
pub mod life_path;
pub mod meanings;
pub mod numerologist;

pub use compatibility::{compatibility_score, compatibility_score_or, lookup, PairKey, COMPATIBILITY_TABLE, DEFAULT_COMPATIBILITY};
pub use life_path::{calculate_life_path, digit_sum, reduce, LifePathComponents};
pub use meanings::{all_meanings, meaning_for, MEANINGS};
pub use numerologist::Numerologist;
