// src/rules.rs - Configurable heat/growth thresholds for a moon base run

use crate::constants::{
    GROWTH_BAND_MAX, GROWTH_BAND_MIN, OVERHEAT_LIMIT, RADIATOR_HEAT_BY_LEVEL,
};
use serde::{Deserialize, Serialize};

/// The tunable thresholds that drive propagation and growth.
///
/// The defaults are the empirical values from the sample domain
/// (5/3/1 heat falloff, overheat at 11, growth strictly between 3 and 7).
/// Different input domains can override any of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeatRules {
    /// Heat deposited at propagation level 0, 1, 2 (distance in hops).
    pub level_output: [u32; 3],
    /// Accumulated heat at or above this value overheats the chamber and
    /// invalidates the placement being evaluated.
    pub overheat_limit: u32,
    /// Exclusive lower bound of the growth band.
    pub growth_band_min: u32,
    /// Exclusive upper bound of the growth band.
    pub growth_band_max: u32,
}

impl Default for HeatRules {
    fn default() -> Self {
        Self {
            level_output: RADIATOR_HEAT_BY_LEVEL,
            overheat_limit: OVERHEAT_LIMIT,
            growth_band_min: GROWTH_BAND_MIN,
            growth_band_max: GROWTH_BAND_MAX,
        }
    }
}

impl HeatRules {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_overheat_limit(mut self, limit: u32) -> Self {
        self.overheat_limit = limit;
        self
    }

    pub fn with_growth_band(mut self, min_exclusive: u32, max_exclusive: u32) -> Self {
        self.growth_band_min = min_exclusive;
        self.growth_band_max = max_exclusive;
        self
    }

    pub fn with_level_output(mut self, level_output: [u32; 3]) -> Self {
        self.level_output = level_output;
        self
    }

    /// Whether a final heat value lets the chamber's pineapples count.
    pub fn in_growth_band(&self, heat: u32) -> bool {
        heat > self.growth_band_min && heat < self.growth_band_max
    }

    /// Whether an accumulated heat value trips the overheat condition.
    pub fn overheats(&self, heat: u32) -> bool {
        heat >= self.overheat_limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_band_is_exclusive_on_both_ends() {
        let rules = HeatRules::default();
        assert!(!rules.in_growth_band(3));
        assert!(rules.in_growth_band(4));
        assert!(rules.in_growth_band(5));
        assert!(rules.in_growth_band(6));
        assert!(!rules.in_growth_band(7));
        assert!(!rules.in_growth_band(0));
    }

    #[test]
    fn default_overheat_triggers_at_limit() {
        let rules = HeatRules::default();
        assert!(!rules.overheats(10));
        assert!(rules.overheats(11));
        assert!(rules.overheats(12));
    }

    #[test]
    fn builders_override_defaults() {
        let rules = HeatRules::new()
            .with_overheat_limit(20)
            .with_growth_band(5, 15)
            .with_level_output([7, 4, 2]);
        assert_eq!(rules.overheat_limit, 20);
        assert!(rules.in_growth_band(6));
        assert!(!rules.in_growth_band(5));
        assert_eq!(rules.level_output, [7, 4, 2]);
    }
}
