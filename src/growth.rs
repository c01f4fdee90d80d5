// src/growth.rs - Pineapple growth aggregation over a finished heat map

use crate::base::Base;
use crate::heat::HeatMap;
use crate::rules::HeatRules;

/// Total pineapples grown under a heat map.
///
/// A chamber contributes its pineapple count exactly when its accumulated
/// heat sits strictly inside the growth band; chambers the propagation never
/// touched are absent from the map and contribute nothing. Pure function:
/// no inputs are mutated, same inputs always give the same total. Overheated
/// maps never reach this point — the propagation engine rejects them first.
pub fn growth(heat: &HeatMap, base: &Base, rules: &HeatRules) -> u64 {
    let mut total: u64 = 0;
    for (id, &h) in heat {
        if rules.in_growth_band(h) {
            total += base.pineapples(id) as u64;
        }
    }
    total
}
