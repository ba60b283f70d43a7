//! Content sampler
//!
//! Produces a size-bounded copy of a source file. JSONL files are cut to a
//! line budget, JSON arrays to an element budget; anything that cannot be
//! read or parsed degrades to a verbatim copy rather than failing, and
//! every other extension is copied byte-for-byte.

use crate::error::Result;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// How the destination file was produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleMode {
    /// Row-limiting logic was applied
    Filtered,
    /// Byte-for-byte copy, either by extension or as a parse-failure fallback
    Verbatim,
}

/// The bounded copy written for one provider
#[derive(Debug, Clone)]
pub struct SampledArtifact {
    pub destination_path: PathBuf,
    pub mode: SampleMode,
}

impl SampledArtifact {
    pub fn was_truncated(&self) -> bool {
        self.mode == SampleMode::Filtered
    }
}

/// Write a bounded copy of `source` as `destination_name` inside
/// `destination_dir`, creating the directory if needed.
///
/// An unreadable or unparseable source is a recovered condition and still
/// returns `Ok` with [`SampleMode::Verbatim`]; only a destination that
/// cannot be created or written is an error.
pub fn sample(
    source: &Path,
    destination_dir: &Path,
    destination_name: &str,
    row_limit: usize,
) -> Result<SampledArtifact> {
    fs::create_dir_all(destination_dir)?;
    let destination = destination_dir.join(destination_name);

    let extension = source
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    let mode = match extension.as_deref() {
        Some("jsonl") => sample_jsonl(source, &destination, row_limit)?,
        Some("json") => sample_json(source, &destination, row_limit)?,
        _ => copy_verbatim(source, &destination)?,
    };

    Ok(SampledArtifact {
        destination_path: destination,
        mode,
    })
}

/// Copy at most `row_limit` lines, byte-for-byte including terminators.
fn sample_jsonl(source: &Path, destination: &Path, row_limit: usize) -> Result<SampleMode> {
    let bytes = match fs::read(source) {
        Ok(bytes) => bytes,
        Err(_) => return copy_verbatim(source, destination),
    };

    let mut retained = Vec::new();
    for line in bytes.split_inclusive(|&byte| byte == b'\n').take(row_limit) {
        retained.extend_from_slice(line);
    }

    fs::write(destination, retained)?;
    Ok(SampleMode::Filtered)
}

/// Parse the document; truncate a top-level array to `row_limit` elements,
/// pass any other top-level value through whole. Malformed input falls back
/// to a verbatim copy.
fn sample_json(source: &Path, destination: &Path, row_limit: usize) -> Result<SampleMode> {
    let content = match fs::read_to_string(source) {
        Ok(content) => content,
        Err(_) => return copy_verbatim(source, destination),
    };

    let mut document: Value = match serde_json::from_str(&content) {
        Ok(document) => document,
        Err(_) => return copy_verbatim(source, destination),
    };

    if let Value::Array(ref mut elements) = document {
        elements.truncate(row_limit);
    }

    fs::write(destination, serde_json::to_string_pretty(&document)?)?;
    Ok(SampleMode::Filtered)
}

fn copy_verbatim(source: &Path, destination: &Path) -> Result<SampleMode> {
    fs::copy(source, destination)?;
    Ok(SampleMode::Verbatim)
}
