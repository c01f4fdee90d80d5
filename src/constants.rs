// Empirical constants extracted from the sample moon base domain.
// Prefer building a HeatRules (src/rules.rs) over reading these directly;
// the rules value carries the same defaults but stays overridable.

/// Heat a radiator deposits at each propagation level (distance 0, 1, 2 hops).
pub const RADIATOR_HEAT_BY_LEVEL: [u32; 3] = [5, 3, 1];

/// A chamber whose accumulated heat reaches this value overheats and
/// invalidates the whole placement.
pub const OVERHEAT_LIMIT: u32 = 11;

/// Pineapples grow only when chamber heat is strictly above this bound.
pub const GROWTH_BAND_MIN: u32 = 3;

/// Pineapples grow only when chamber heat is strictly below this bound.
pub const GROWTH_BAND_MAX: u32 = 7;

/// Default output file for winning placements, one base per line.
pub const RESULT_FILE: &str = "result.txt";
