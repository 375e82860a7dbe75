use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fatar_core::merge::{merge_archives, MergeReport};
use fatar_core::select::ExclusionRules;

use crate::collect_archive_paths;

/// Merge the given archives (and/or every `*.a` under `dir`) into `output`.
///
/// Explicit inputs come first in candidate order, then the directory scan in
/// sorted order. Exclusion patterns are matched case-insensitively against
/// base names.
pub fn merge_command(
    inputs: &[String],
    dir: Option<&str>,
    output: &str,
    excludes: &[String],
    no_default_excludes: bool,
    json: bool,
) -> Result<()> {
    let mut candidates: Vec<PathBuf> = inputs.iter().map(PathBuf::from).collect();
    if let Some(dir) = dir {
        candidates.extend(collect_archive_paths(Path::new(dir))?);
    }

    let mut rules =
        if no_default_excludes { ExclusionRules::none() } else { ExclusionRules::default() };
    for pattern in excludes {
        rules = rules.with_pattern(pattern);
    }

    let report = merge_archives(&candidates, &rules, Path::new(output))
        .context("Merge failed; no output was written")?;

    if json {
        let serialized = serde_json::to_string_pretty(&report)
            .context("Failed to serialize merge report to JSON")?;
        println!("{}", serialized);
    } else {
        print_report(&report);
    }

    Ok(())
}

fn print_report(report: &MergeReport) {
    if report.archives_selected == 0 {
        println!("No archives selected after exclusion filtering; wrote an empty archive.");
    }
    println!("Merged {} archives:", report.archives_selected);
    println!("  Candidates: {} (excluded {})", report.candidates, report.archives_excluded);
    println!(
        "  Members: scanned {}, retained {}, duplicates discarded {}",
        report.members_scanned, report.members_retained, report.duplicates_discarded
    );
    println!("  Output: {} ({} bytes)", report.output_path.display(), report.output_bytes);
}
