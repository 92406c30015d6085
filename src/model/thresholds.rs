//! Fixed scoring policy. These are not runtime-configurable.

pub const TRANSPARENCY_MAX: u8 = 2;
pub const SPECIFICITY_MAX: u8 = 2;
pub const COMPLETENESS_MAX: u8 = 3;
pub const CONSISTENCY_MAX: u8 = 2;
pub const TOTAL_MAX: u8 = TRANSPARENCY_MAX + SPECIFICITY_MAX + COMPLETENESS_MAX + CONSISTENCY_MAX;

/// `fuzzy_count` at or above this scores Specificity 0.
pub const HEAVY_HEDGING_MIN: usize = 5;

/// Completeness at or below this raises `NarrowCoverage`.
pub const NARROW_COVERAGE_MAX: u8 = 1;

/// Highest total still banded as high risk.
pub const HIGH_RISK_TOTAL_MAX: u8 = 3;
/// Highest total still banded as moderate risk.
pub const MODERATE_RISK_TOTAL_MAX: u8 = 6;

/// Score given to a unit whose consistency judge failed.
pub const FALLBACK_CONSISTENCY: u8 = 0;

pub fn specificity_for(fuzzy_count: usize) -> u8 {
    if fuzzy_count == 0 {
        SPECIFICITY_MAX
    } else if fuzzy_count < HEAVY_HEDGING_MIN {
        1
    } else {
        0
    }
}
