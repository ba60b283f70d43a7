//! File locator
//!
//! Recursive glob search below a provider's data directory, selecting the
//! largest matching file as the representative candidate.

use crate::error::Result;
use glob::Pattern;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A matching file found during one directory scan
#[derive(Debug, Clone)]
pub struct CandidateFile {
    pub path: PathBuf,
    pub size_bytes: u64,
}

/// Find the largest file below `root` whose name matches any of `patterns`.
///
/// A missing root directory is an expected condition and yields `Ok(None)`,
/// as does a scan with no matches. Ties on size go to the file encountered
/// first during the walk.
pub fn locate(root: &Path, patterns: &[&str]) -> Result<Option<CandidateFile>> {
    if !root.exists() {
        return Ok(None);
    }

    let compiled: Vec<Pattern> = patterns
        .iter()
        .map(|p| Pattern::new(p))
        .collect::<std::result::Result<_, _>>()?;

    let mut best: Option<CandidateFile> = None;

    for entry in WalkDir::new(root).into_iter().filter_map(|e| e.ok()) {
        if !entry.file_type().is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy();
        if !compiled.iter().any(|pattern| pattern.matches(&name)) {
            continue;
        }

        let size_bytes = match entry.metadata() {
            Ok(metadata) => metadata.len(),
            Err(_) => continue,
        };

        let is_larger = best
            .as_ref()
            .map(|current| size_bytes > current.size_bytes)
            .unwrap_or(true);
        if is_larger {
            best = Some(CandidateFile {
                path: entry.into_path(),
                size_bytes,
            });
        }
    }

    Ok(best)
}
