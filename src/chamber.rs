// src/chamber.rs - Chamber model: pineapple yield plus directional adjacency

use serde::{Deserialize, Serialize};

/// Identifier a chamber is keyed by inside its base.
///
/// Kept as a string so alphanumeric maps work too; ordering everywhere in the
/// crate is the lexicographic ordering of these strings.
pub type ChamberId = String;

/// The four directional links a chamber can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::North => "North",
            Direction::South => "South",
            Direction::East => "East",
            Direction::West => "West",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "North" => Some(Direction::North),
            "South" => Some(Direction::South),
            "East" => Some(Direction::East),
            "West" => Some(Direction::West),
            _ => None,
        }
    }
}

/// A single chamber: how many pineapples it can grow and which chambers it
/// opens onto.
///
/// Neighbor links are identifier lookups, not ownership — the graph may
/// contain cycles, and a link may point at an identifier the base does not
/// contain (propagation just skips it). Heat is deliberately NOT stored here:
/// every candidate evaluation builds its own heat map, so no stale state can
/// leak between evaluations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chamber {
    pub pineapples: u32,
    pub north: Option<ChamberId>,
    pub south: Option<ChamberId>,
    pub east: Option<ChamberId>,
    pub west: Option<ChamberId>,
}

impl Chamber {
    pub fn new(pineapples: u32) -> Self {
        Self {
            pineapples,
            ..Self::default()
        }
    }

    pub fn with_neighbor(mut self, direction: Direction, id: impl Into<ChamberId>) -> Self {
        self.set_neighbor(direction, Some(id.into()));
        self
    }

    pub fn neighbor(&self, direction: Direction) -> Option<&ChamberId> {
        match direction {
            Direction::North => self.north.as_ref(),
            Direction::South => self.south.as_ref(),
            Direction::East => self.east.as_ref(),
            Direction::West => self.west.as_ref(),
        }
    }

    pub fn set_neighbor(&mut self, direction: Direction, id: Option<ChamberId>) {
        match direction {
            Direction::North => self.north = id,
            Direction::South => self.south = id,
            Direction::East => self.east = id,
            Direction::West => self.west = id,
        }
    }

    /// Iterate the neighbor identifiers that are present, in N/S/E/W order.
    pub fn neighbors(&self) -> impl Iterator<Item = &ChamberId> {
        Direction::ALL
            .iter()
            .filter_map(move |direction| self.neighbor(*direction))
    }

    /// Number of present neighbor links (0 through 4).
    pub fn neighbor_count(&self) -> usize {
        self.neighbors().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbors_iterates_only_present_links() {
        let chamber = Chamber::new(12)
            .with_neighbor(Direction::North, "2")
            .with_neighbor(Direction::West, "7");

        let ids: Vec<&ChamberId> = chamber.neighbors().collect();
        assert_eq!(ids, vec!["2", "7"]);
        assert_eq!(chamber.neighbor_count(), 2);
    }

    #[test]
    fn direction_round_trips_through_strings() {
        for direction in Direction::ALL {
            assert_eq!(Direction::from_str(direction.as_str()), Some(direction));
        }
        assert_eq!(Direction::from_str("Up"), None);
    }

    #[test]
    fn isolated_chamber_has_no_neighbors() {
        let chamber = Chamber::new(3);
        assert_eq!(chamber.neighbor_count(), 0);
    }
}
