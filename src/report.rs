// src/report.rs - Collects winning placements and writes them out
//
// One line per base in result.txt, chamber identifiers joined by ", " in
// lexicographic order. The JSON export carries the growth totals as well.

use crate::search::Placement;
use colored::Colorize;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// The textual form of one base's winning placement.
pub fn result_line(placement: &Placement) -> String {
    placement.chambers.join(", ")
}

/// Write one result line per base, overwriting any previous file.
pub fn write_results<P: AsRef<Path>>(
    path: P,
    placements: &[Placement],
) -> Result<(), std::io::Error> {
    let mut file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)?;

    for placement in placements {
        writeln!(file, "{}", result_line(placement))?;
    }
    Ok(())
}

/// Export the full outcome (chambers and growth per base) as pretty JSON.
pub fn write_results_json<P: AsRef<Path>>(
    path: P,
    placements: &[Placement],
) -> Result<(), String> {
    let json = serde_json::to_string_pretty(placements)
        .map_err(|e| format!("Failed to serialize placements: {}", e))?;
    std::fs::write(path.as_ref(), json)
        .map_err(|e| format!("Failed to write {}: {}", path.as_ref().display(), e))
}

/// Print a per-base summary to the console.
pub fn print_summary(placements: &[Placement]) {
    println!("{}", "Radiator placements".bold());
    for (index, placement) in placements.iter().enumerate() {
        let growth_text = placement.growth.to_string();
        let growth = if placement.growth > 0 {
            growth_text.as_str().green()
        } else {
            growth_text.as_str().red()
        };
        let chambers = if placement.chambers.is_empty() {
            "(none)".dimmed().to_string()
        } else {
            result_line(placement)
        };
        println!(
            "  base {:>3}: {} pineapples  [{}]",
            index + 1,
            growth,
            chambers
        );
    }
}
