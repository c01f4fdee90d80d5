// src/solver.rs - Parse, search each base, write the results

use crate::base::Base;
use crate::constants::RESULT_FILE;
use crate::parser::parse_bases_file;
use crate::report::write_results;
use crate::rules::HeatRules;
use crate::search::{Placement, PlacementSearch};
use std::path::Path;

/// Best placement for one base under the given rules.
pub fn solve_base(base: &Base, rules: HeatRules) -> Placement {
    PlacementSearch::with_rules(base, rules).best_placement()
}

/// Best placement for every base, in input order. Bases are independent, so
/// each search starts with a fresh cache.
pub fn solve_bases(bases: &[Base], rules: HeatRules) -> Vec<Placement> {
    bases.iter().map(|base| solve_base(base, rules)).collect()
}

/// End-to-end run: read a moon base description file, search every base,
/// write one result line per base to `output`.
pub fn solve_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    rules: HeatRules,
) -> Result<Vec<Placement>, String> {
    let bases = parse_bases_file(input)?;
    let placements = solve_bases(&bases, rules);
    write_results(output.as_ref(), &placements)
        .map_err(|e| format!("Failed to write {}: {}", output.as_ref().display(), e))?;
    Ok(placements)
}

/// Like [`solve_file`], writing to the conventional `result.txt`.
pub fn solve_file_to_result<P: AsRef<Path>>(
    input: P,
    rules: HeatRules,
) -> Result<Vec<Placement>, String> {
    solve_file(input, RESULT_FILE, rules)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chamber::{Chamber, Direction};

    #[test]
    fn bases_are_solved_independently() {
        let mut first = Base::new(1);
        first.add_chamber("1", Chamber::new(8));

        let mut second = Base::new(1);
        second.add_chamber("1", Chamber::new(0));
        second.add_chamber("2", Chamber::new(3));
        second.link("1", Direction::North, "2");

        let placements = solve_bases(&[first, second], HeatRules::default());
        assert_eq!(placements.len(), 2);
        assert_eq!(placements[0].growth, 8);
        assert_eq!(placements[1].growth, 3);
        assert_eq!(placements[1].chambers, vec!["2".to_string()]);
    }
}
