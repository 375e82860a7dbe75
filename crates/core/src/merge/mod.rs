//! The merge pipeline: select archives, parse members, deduplicate by
//! content, assemble one output archive.
//!
//! Processing is sequential and deterministic: archives in selection order,
//! members in within-archive parse order, first occurrence of a content
//! fingerprint wins. The output bytes are fully assembled in memory and
//! written in one step only after every selected archive parsed cleanly, so
//! a corrupt input never leaves a partial output file behind.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use crate::assemble::assemble;
use crate::dedup::DedupSet;
use crate::format::{self, FormatError};
use crate::select::{select_archives, ExclusionRules};

/// A merge failure, always carrying the offending path.
///
/// Parsing and I/O errors are never retried; binary corruption and
/// misconfiguration are not transient.
#[derive(Debug, Error)]
pub enum MergeError {
    #[error("{}: {source}", path.display())]
    Format {
        path: PathBuf,
        #[source]
        source: FormatError,
    },
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Counters describing what a completed merge did.
///
/// An empty selection is a success, not an error, but callers can tell it
/// apart from success-with-content via `archives_selected`.
#[derive(Debug, Clone, Serialize)]
pub struct MergeReport {
    pub candidates: usize,
    pub archives_excluded: usize,
    pub archives_selected: usize,
    pub members_scanned: usize,
    pub members_retained: usize,
    pub duplicates_discarded: usize,
    pub output_path: PathBuf,
    pub output_bytes: u64,
}

/// Merge `candidates` (after exclusion filtering) into one archive at
/// `output`.
///
/// Either every selected archive parses cleanly and the merge completes, or
/// the run fails without writing anything.
pub fn merge_archives(
    candidates: &[PathBuf],
    rules: &ExclusionRules,
    output: &Path,
) -> Result<MergeReport, MergeError> {
    let selected = select_archives(candidates, rules);
    let archives_selected = selected.len();

    let mut set = DedupSet::new();
    let mut members_scanned = 0usize;
    for path in &selected {
        let bytes = fs::read(path)
            .map_err(|source| MergeError::Io { path: path.clone(), source })?;
        let members = format::parse(&bytes)
            .map_err(|source| MergeError::Format { path: path.clone(), source })?;
        for member in members {
            let member = member
                .map_err(|source| MergeError::Format { path: path.clone(), source })?;
            members_scanned += 1;
            set.insert(member);
        }
    }

    let duplicates_discarded = set.discarded();
    let members_retained = set.len();
    let archive = assemble(set.into_members());
    fs::write(output, &archive)
        .map_err(|source| MergeError::Io { path: output.to_path_buf(), source })?;

    Ok(MergeReport {
        candidates: candidates.len(),
        archives_excluded: candidates.len() - archives_selected,
        archives_selected,
        members_scanned,
        members_retained,
        duplicates_discarded,
        output_path: output.to_path_buf(),
        output_bytes: archive.len() as u64,
    })
}
