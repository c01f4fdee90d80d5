// src/base.rs - A moon base: radiator budget plus its chamber graph

use crate::chamber::{Chamber, ChamberId, Direction};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One complete moon base. Bases are independent units: each carries its own
/// radiator budget and chamber graph, and nothing is shared between bases.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Base {
    /// How many radiators this base is allowed to place.
    pub radiators: u32,
    /// Chambers keyed by identifier. Identifiers are unique per base.
    pub chambers: HashMap<ChamberId, Chamber>,
}

impl Base {
    pub fn new(radiators: u32) -> Self {
        Self {
            radiators,
            chambers: HashMap::new(),
        }
    }

    pub fn add_chamber(&mut self, id: impl Into<ChamberId>, chamber: Chamber) {
        self.chambers.insert(id.into(), chamber);
    }

    pub fn chamber(&self, id: &str) -> Option<&Chamber> {
        self.chambers.get(id)
    }

    pub fn chamber_count(&self) -> usize {
        self.chambers.len()
    }

    /// Pineapple count for a chamber, 0 for unknown identifiers.
    pub fn pineapples(&self, id: &str) -> u32 {
        self.chambers.get(id).map(|c| c.pineapples).unwrap_or(0)
    }

    /// Total pineapples across the base, heat aside.
    pub fn total_pineapples(&self) -> u64 {
        self.chambers.values().map(|c| c.pineapples as u64).sum()
    }

    /// Chamber identifiers in lexicographic order.
    ///
    /// This is the canonical enumeration order for the placement search and
    /// for reporting, so results are reproducible run to run.
    pub fn sorted_chamber_ids(&self) -> Vec<ChamberId> {
        let mut ids: Vec<ChamberId> = self.chambers.keys().cloned().collect();
        ids.sort();
        ids
    }

    /// Convenience for building test/demo graphs: link `from` to `to` in the
    /// given direction and `to` back to `from` in the opposite one.
    pub fn link(&mut self, from: &str, direction: Direction, to: &str) {
        let opposite = match direction {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        };
        if let Some(chamber) = self.chambers.get_mut(from) {
            chamber.set_neighbor(direction, Some(to.to_string()));
        }
        if let Some(chamber) = self.chambers.get_mut(to) {
            chamber.set_neighbor(opposite, Some(from.to_string()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_chamber_base() -> Base {
        let mut base = Base::new(1);
        base.add_chamber("1", Chamber::new(5));
        base.add_chamber("2", Chamber::new(8));
        base.link("1", Direction::East, "2");
        base
    }

    #[test]
    fn link_writes_both_directions() {
        let base = two_chamber_base();
        assert_eq!(
            base.chamber("1").unwrap().neighbor(Direction::East),
            Some(&"2".to_string())
        );
        assert_eq!(
            base.chamber("2").unwrap().neighbor(Direction::West),
            Some(&"1".to_string())
        );
    }

    #[test]
    fn sorted_ids_are_lexicographic() {
        let mut base = Base::new(0);
        for id in ["10", "2", "1", "21"] {
            base.add_chamber(id, Chamber::new(0));
        }
        // String order, not numeric order.
        assert_eq!(base.sorted_chamber_ids(), vec!["1", "10", "2", "21"]);
    }

    #[test]
    fn pineapple_totals() {
        let base = two_chamber_base();
        assert_eq!(base.pineapples("1"), 5);
        assert_eq!(base.pineapples("missing"), 0);
        assert_eq!(base.total_pineapples(), 13);
    }
}
