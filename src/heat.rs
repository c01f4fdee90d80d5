// src/heat.rs - Heat propagation engine with prefix-keyed memoization
//
// A radiator heats its own chamber and everything within two hops, with
// output falling off by level (5 / 3 / 1 by default). Propagation walks the
// adjacency graph one level at a time and never steps back through the link
// it just came in on; a chamber reachable along two different paths
// accumulates heat from both, which is the intended behavior for short
// cycles.

use crate::base::Base;
use crate::chamber::ChamberId;
use crate::rules::HeatRules;
use std::collections::HashMap;
use std::fmt;

/// Accumulated heat per chamber for one candidate evaluation.
///
/// Never persisted; each candidate placement gets a fresh map (or a memoized
/// clone of a prefix's map) so no heat leaks between evaluations.
pub type HeatMap = HashMap<ChamberId, u32>;

/// Hard-rejection signal: some chamber's accumulated heat reached the
/// overheat limit while a radiator's contribution was being applied. The
/// placement under evaluation is inadmissible, not merely worthless.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overheat {
    pub chamber: ChamberId,
    pub heat: u32,
}

impl fmt::Display for Overheat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "chamber {} overheated at heat {}",
            self.chamber, self.heat
        )
    }
}

/// Add one radiator's contribution at `origin` into `heat`.
///
/// Traversal is an explicit frontier per level — exactly as many levels as
/// `rules.level_output` has entries (three: distance 0, 1, 2) — rather than
/// open recursion, so the depth limit is a loop bound. Each frontier entry
/// remembers the chamber it was entered from, and expansion skips that link;
/// all other present links are followed, including ones that revisit a
/// chamber along a different path. Neighbor identifiers the base does not
/// contain are skipped silently (boundary chambers are an expected shape).
///
/// Returns `Err(Overheat)` the moment any chamber's accumulated heat reaches
/// `rules.overheat_limit`. On error the map has already absorbed part of the
/// contribution; callers discard it (the candidate is dead either way).
pub fn propagate(
    origin: &str,
    base: &Base,
    rules: &HeatRules,
    heat: &mut HeatMap,
) -> Result<(), Overheat> {
    if base.chamber(origin).is_none() {
        return Ok(());
    }

    // (chamber, predecessor it was entered from)
    let mut frontier: Vec<(ChamberId, Option<ChamberId>)> = vec![(origin.to_string(), None)];

    for (level, &output) in rules.level_output.iter().enumerate() {
        let mut next_frontier: Vec<(ChamberId, Option<ChamberId>)> = Vec::new();

        for (id, came_from) in frontier {
            let entry = heat.entry(id.clone()).or_insert(0);
            *entry += output;
            if rules.overheats(*entry) {
                return Err(Overheat {
                    chamber: id,
                    heat: *entry,
                });
            }

            // Expansion beyond the last level would be discarded anyway.
            if level + 1 == rules.level_output.len() {
                continue;
            }

            let chamber = match base.chamber(&id) {
                Some(chamber) => chamber,
                None => continue,
            };
            for neighbor in chamber.neighbors() {
                if Some(neighbor) == came_from.as_ref() {
                    continue;
                }
                if base.chamber(neighbor).is_none() {
                    continue;
                }
                next_frontier.push((neighbor.clone(), Some(id.clone())));
            }
        }

        frontier = next_frontier;
        if frontier.is_empty() {
            break;
        }
    }

    Ok(())
}

/// Memoized heat maps keyed by the sorted sequence of radiators applied so
/// far. The search enumerates subsets in ascending identifier order, so a
/// chosen prefix is already a valid sorted key. `None` marks a prefix that
/// overheated: heat only ever accumulates, so no extension of an overheating
/// prefix can become admissible, and the whole subtree is pruned.
#[derive(Debug, Default)]
pub struct HeatCache {
    maps: HashMap<Vec<ChamberId>, Option<HeatMap>>,
    hits: u64,
    misses: u64,
}

impl HeatCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Heat map for `prefix` (whose last element is the radiator being
    /// added), computed from `parent` — the map for the prefix without that
    /// element — or returned from cache. `None` means the prefix overheats.
    pub fn extend(
        &mut self,
        parent: &HeatMap,
        prefix: &[ChamberId],
        base: &Base,
        rules: &HeatRules,
    ) -> Option<HeatMap> {
        if let Some(cached) = self.maps.get(prefix) {
            self.hits += 1;
            return cached.clone();
        }
        self.misses += 1;

        let added = match prefix.last() {
            Some(id) => id,
            // Empty prefix: nothing applied yet.
            None => return Some(parent.clone()),
        };
        let mut map = parent.clone();
        let result = match propagate(added, base, rules, &mut map) {
            Ok(()) => Some(map),
            Err(_) => None,
        };
        self.maps.insert(prefix.to_vec(), result.clone());
        result
    }

    pub fn len(&self) -> usize {
        self.maps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.maps.is_empty()
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }
}
