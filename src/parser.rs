// src/parser.rs - Reads the textual moon base description into Base values
//
// Line-oriented format, one or more bases per file:
//
//   Pineapple Moon Base
//   Radiators: 2
//   Chamber 1
//   40 Pineapples
//   North 2
//   Chamber 2
//   South 1
//
// Unrecognized lines are ignored. A `Pineapple Moon Base` header flushes the
// base being built and starts the next one.

use crate::base::Base;
use crate::chamber::{Chamber, ChamberId, Direction};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

const BASE_HEADER: &str = "Pineapple Moon Base";
const RADIATORS_PREFIX: &str = "Radiators";
const CHAMBER_PREFIX: &str = "Chamber ";
const PINEAPPLE_SUFFIXES: [&str; 2] = ["Pineapples", "Pineapple"];

static DIRECTION_KEYWORDS: Lazy<HashMap<&'static str, Direction>> = Lazy::new(|| {
    let mut m = HashMap::new();
    for direction in Direction::ALL {
        m.insert(direction.as_str(), direction);
    }
    m
});

/// Parse a whole input file. See [`parse_bases`].
pub fn parse_bases_file<P: AsRef<Path>>(path: P) -> Result<Vec<Base>, String> {
    let text = fs::read_to_string(path.as_ref())
        .map_err(|e| format!("Failed to read {}: {}", path.as_ref().display(), e))?;
    parse_bases(&text)
}

/// Parse the textual description of one or more moon bases.
///
/// Bases are independent units; each gets its own radiator budget and chamber
/// graph. Malformed numbers are reported as errors; unknown lines and
/// neighbor/pineapple lines outside any chamber are skipped.
pub fn parse_bases(text: &str) -> Result<Vec<Base>, String> {
    let mut bases: Vec<Base> = Vec::new();
    let mut current: Option<Base> = None;
    let mut current_chamber: Option<ChamberId> = None;

    for (line_no, raw) in text.lines().enumerate() {
        let line = raw.trim();

        if line == BASE_HEADER {
            if let Some(base) = current.take() {
                bases.push(base);
            }
            current = Some(Base::new(0));
            current_chamber = None;
            continue;
        }

        if line.starts_with(RADIATORS_PREFIX) {
            let count = trailing_number(line)
                .ok_or_else(|| format!("line {}: bad radiator count: {:?}", line_no + 1, line))?;
            current.get_or_insert_with(|| Base::new(0)).radiators = count;
            continue;
        }

        if let Some(rest) = line.strip_prefix(CHAMBER_PREFIX) {
            let id = rest.trim().to_string();
            if id.is_empty() {
                return Err(format!("line {}: chamber with no identifier", line_no + 1));
            }
            current
                .get_or_insert_with(|| Base::new(0))
                .add_chamber(id.clone(), Chamber::new(0));
            current_chamber = Some(id);
            continue;
        }

        if PINEAPPLE_SUFFIXES.iter().any(|s| line.ends_with(s)) {
            let count = leading_number(line)
                .ok_or_else(|| format!("line {}: bad pineapple count: {:?}", line_no + 1, line))?;
            if let (Some(base), Some(id)) = (current.as_mut(), current_chamber.as_ref()) {
                if let Some(chamber) = base.chambers.get_mut(id) {
                    chamber.pineapples = count;
                }
            }
            continue;
        }

        if let Some(direction) = line
            .split_whitespace()
            .next()
            .and_then(|word| DIRECTION_KEYWORDS.get(word))
        {
            let target = line.split_whitespace().nth(1).map(str::to_string);
            if let (Some(base), Some(id), Some(target)) =
                (current.as_mut(), current_chamber.as_ref(), target)
            {
                if let Some(chamber) = base.chambers.get_mut(id) {
                    chamber.set_neighbor(*direction, Some(target));
                }
            }
            continue;
        }
    }

    if let Some(base) = current.take() {
        bases.push(base);
    }
    Ok(bases)
}

/// First run of digits after the keyword, e.g. "Radiators: 4" → 4.
fn trailing_number(line: &str) -> Option<u32> {
    let digits: String = line.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}

/// Leading integer of a line, e.g. "40 Pineapples" → 40.
fn leading_number(line: &str) -> Option<u32> {
    line.split_whitespace().next()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Pineapple Moon Base
Radiators: 1
Chamber 1
40 Pineapples
East 2
Chamber 2
1 Pineapple
West 1
North 3
Chamber 3
South 2
";

    #[test]
    fn parses_a_single_base() {
        let bases = parse_bases(SAMPLE).unwrap();
        assert_eq!(bases.len(), 1);

        let base = &bases[0];
        assert_eq!(base.radiators, 1);
        assert_eq!(base.chamber_count(), 3);
        assert_eq!(base.pineapples("1"), 40);
        assert_eq!(base.pineapples("2"), 1);
        assert_eq!(base.pineapples("3"), 0);

        let c1 = base.chamber("1").unwrap();
        assert_eq!(c1.neighbor(Direction::East), Some(&"2".to_string()));
        let c2 = base.chamber("2").unwrap();
        assert_eq!(c2.neighbor(Direction::West), Some(&"1".to_string()));
        assert_eq!(c2.neighbor(Direction::North), Some(&"3".to_string()));
    }

    #[test]
    fn header_splits_multiple_bases() {
        let text = format!("{SAMPLE}\n{SAMPLE}");
        let bases = parse_bases(&text).unwrap();
        assert_eq!(bases.len(), 2);
        assert_eq!(bases[0].chamber_count(), 3);
        assert_eq!(bases[1].chamber_count(), 3);
    }

    #[test]
    fn singular_pineapple_line_parses() {
        let bases = parse_bases(SAMPLE).unwrap();
        assert_eq!(bases[0].pineapples("2"), 1);
    }

    #[test]
    fn unknown_lines_are_ignored() {
        let text = "Pineapple Moon Base\nRadiators: 2\n# a comment\n\nChamber 7\n";
        let bases = parse_bases(text).unwrap();
        assert_eq!(bases.len(), 1);
        assert_eq!(bases[0].radiators, 2);
        assert_eq!(bases[0].chamber_count(), 1);
    }

    #[test]
    fn bad_radiator_count_is_an_error() {
        let text = "Pineapple Moon Base\nRadiators: none\n";
        let err = parse_bases(text).unwrap_err();
        assert!(err.contains("line 2"), "unexpected error: {err}");
    }

    #[test]
    fn empty_input_yields_no_bases() {
        assert_eq!(parse_bases("").unwrap().len(), 0);
    }
}
