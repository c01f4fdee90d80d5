// src/search.rs - Exhaustive radiator placement search with prefix memoization

use crate::base::Base;
use crate::chamber::ChamberId;
use crate::growth::growth;
use crate::heat::{HeatCache, HeatMap};
use crate::rules::HeatRules;
use serde::{Deserialize, Serialize};

/// A winning placement for one base: the chambers that receive radiators
/// (lexicographic order) and the pineapple growth they produce. An empty
/// chamber list means no placement produced any growth at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub chambers: Vec<ChamberId>,
    pub growth: u64,
}

/// Exhaustive search over radiator placements for a single base.
///
/// Enumerates every subset of the required size in lexicographic identifier
/// order and keeps the subset with the strictly greatest growth; ties keep
/// the first subset found, so results are reproducible. Heat maps for shared
/// subset prefixes are memoized, and a prefix that overheats prunes its whole
/// subtree (extra radiators only ever add heat).
pub struct PlacementSearch<'a> {
    base: &'a Base,
    rules: HeatRules,
    cache: HeatCache,
    /// Print enumeration statistics while searching.
    pub debug: bool,
    candidates_evaluated: u64,
}

impl<'a> PlacementSearch<'a> {
    pub fn new(base: &'a Base) -> Self {
        Self::with_rules(base, HeatRules::default())
    }

    pub fn with_rules(base: &'a Base, rules: HeatRules) -> Self {
        Self {
            base,
            rules,
            cache: HeatCache::new(),
            debug: false,
            candidates_evaluated: 0,
        }
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Number of full-size candidates whose growth was actually aggregated
    /// (overheat-pruned subtrees are not counted).
    pub fn candidates_evaluated(&self) -> u64 {
        self.candidates_evaluated
    }

    /// Find the best attainable placement for the base.
    ///
    /// The candidate size starts at min(radiator budget, chamber count). If
    /// no subset of that size produces positive growth, smaller sizes are
    /// tried in turn, down to the empty placement — a budget too large for
    /// the graph is a normal input, not an error.
    pub fn best_placement(&mut self) -> Placement {
        let ids = self.base.sorted_chamber_ids();
        let full_size = (self.base.radiators as usize).min(ids.len());

        // Warm the cache with every single-chamber map first. Growth is not
        // monotonic in radiator count, so a single's growth bounds nothing
        // about larger subsets and must never prune the enumeration below;
        // the pass only pre-populates the prefix cache and, in debug runs,
        // shows which chambers are beneficial on their own.
        let solo_beneficial = self.warm_singles(&ids);
        if self.debug {
            println!(
                "placement search: {} chambers, budget {}, {} beneficial alone",
                ids.len(),
                self.base.radiators,
                solo_beneficial
            );
        }

        let mut best = Placement::default();
        let mut size = full_size;
        while size > 0 {
            let empty = HeatMap::new();
            let mut chosen: Vec<ChamberId> = Vec::with_capacity(size);
            self.search_subsets(&ids, 0, size, &mut chosen, &empty, &mut best);
            if best.growth > 0 {
                break;
            }
            // Nothing of this size grows anything; try a smaller placement.
            size -= 1;
        }

        if self.debug {
            println!(
                "placement search: {} candidates evaluated, cache {} entries ({} hits / {} misses)",
                self.candidates_evaluated,
                self.cache.len(),
                self.cache.hits(),
                self.cache.misses()
            );
        }
        best
    }

    fn warm_singles(&mut self, ids: &[ChamberId]) -> usize {
        let empty = HeatMap::new();
        let mut beneficial = 0;
        for id in ids {
            let prefix = [id.clone()];
            if let Some(map) = self.cache.extend(&empty, &prefix, self.base, &self.rules) {
                if growth(&map, self.base, &self.rules) > 0 {
                    beneficial += 1;
                }
            }
        }
        beneficial
    }

    fn search_subsets(
        &mut self,
        ids: &[ChamberId],
        start: usize,
        size: usize,
        chosen: &mut Vec<ChamberId>,
        heat: &HeatMap,
        best: &mut Placement,
    ) {
        if chosen.len() == size {
            self.candidates_evaluated += 1;
            let total = growth(heat, self.base, &self.rules);
            if total > best.growth {
                *best = Placement {
                    chambers: chosen.clone(),
                    growth: total,
                };
            }
            return;
        }

        let remaining = size - chosen.len();
        // Stop once too few identifiers are left to complete the subset.
        let last_start = ids.len() - remaining;
        for i in start..=last_start {
            chosen.push(ids[i].clone());
            match self.cache.extend(heat, chosen, self.base, &self.rules) {
                Some(extended) => {
                    self.search_subsets(ids, i + 1, size, chosen, &extended, best);
                }
                // Prefix overheats: every extension would too.
                None => {}
            }
            chosen.pop();
        }
    }
}
