//! Generate command - the per-provider sampling loop
//!
//! Walks the provider registry, locates the largest matching data file for
//! each provider and writes a row-bounded example copy of it. Failures are
//! recorded per provider and never abort the loop.

use anyhow::Result;
use colored::Colorize;
use exemplar_core::{locator, provider, sampler};
use std::path::Path;
use tracing::debug;

/// Rows retained per example file
const ROW_LIMIT: usize = 20;

/// Run the generation loop. Returns `Ok(true)` only when every provider
/// yielded an example file; the caller maps `Ok(false)` to exit code 1.
pub async fn run(prefix: &str, output: &Path) -> Result<bool> {
    println!("Generating example files...");
    println!("Output directory: {}", output.display());
    println!("Prefix: {prefix}");
    println!();

    let providers = provider::all();
    let mut success_count = 0;

    for descriptor in providers {
        println!("{}", format!("[{}]", descriptor.display_name).cyan().bold());

        let root = descriptor.resolved_default_directory();
        println!("  Scanning: {}", root.display());

        if sample_provider(descriptor, &root, prefix, output) {
            success_count += 1;
        }
        println!();
    }

    print_summary(success_count, providers.len(), prefix, output);
    Ok(success_count == providers.len())
}

fn sample_provider(
    descriptor: &provider::ProviderDescriptor,
    root: &Path,
    prefix: &str,
    output: &Path,
) -> bool {
    let candidate = match locator::locate(root, descriptor.patterns) {
        Ok(Some(candidate)) => candidate,
        Ok(None) => {
            if root.exists() {
                println!(
                    "  {} No matching files found (patterns: {})",
                    "✗".red(),
                    descriptor.patterns.join(", ")
                );
            } else {
                println!("  {} Directory not found", "✗".red());
            }
            return false;
        }
        Err(e) => {
            println!("  {} Scan failed: {e}", "✗".red());
            return false;
        }
    };

    debug!(
        "selected {} ({} bytes) for {}",
        candidate.path.display(),
        candidate.size_bytes,
        descriptor.id
    );
    println!("  Found: {}", candidate.path.display());

    let destination_name = descriptor.example_file_name(prefix);
    match sampler::sample(&candidate.path, output, &destination_name, ROW_LIMIT) {
        Ok(artifact) if artifact.was_truncated() => {
            println!(
                "  {} Wrote {} (top {} rows)",
                "✓".green(),
                destination_name,
                ROW_LIMIT
            );
            true
        }
        Ok(_) => {
            println!(
                "  {} Wrote {} (copied without filtering)",
                "✓".green(),
                destination_name
            );
            true
        }
        Err(e) => {
            println!("  {} Failed to write {}: {e}", "✗".red(), destination_name);
            false
        }
    }
}

fn print_summary(success_count: usize, total_count: usize, prefix: &str, output: &Path) {
    println!("{}", "=".repeat(60));
    println!("Summary: {success_count}/{total_count} example files generated");
    println!();

    let generated = match list_generated(output, prefix) {
        Ok(generated) if !generated.is_empty() => generated,
        _ => return,
    };

    println!("{}", "Generated examples:".green());
    for (name, size_bytes) in generated {
        println!("  - {} ({:.1} KB)", name, size_bytes as f64 / 1024.0);
    }
}

/// Enumerate `{prefix}_*` files in the output directory, sorted by name.
fn list_generated(output: &Path, prefix: &str) -> std::io::Result<Vec<(String, u64)>> {
    let mut generated = Vec::new();

    for entry in std::fs::read_dir(output)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with(&format!("{prefix}_")) {
            generated.push((name, entry.metadata()?.len()));
        }
    }

    generated.sort();
    Ok(generated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_list_generated_filters_by_prefix_and_sorts() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("local_codex.jsonl"), "abc").unwrap();
        std::fs::write(temp.path().join("local_claude.jsonl"), "abcdef").unwrap();
        std::fs::write(temp.path().join("other_gemini.json"), "x").unwrap();
        std::fs::create_dir(temp.path().join("local_dir")).unwrap();

        let generated = list_generated(temp.path(), "local").unwrap();
        assert_eq!(
            generated,
            vec![
                ("local_claude.jsonl".to_string(), 6),
                ("local_codex.jsonl".to_string(), 3),
            ]
        );
    }
}
