//! Provider registry
//!
//! Static descriptors for the AI coding tools whose data directories are
//! scanned for example material. The table is fixed at compile time; there
//! is no dynamic registration.

use serde::Serialize;
use std::path::PathBuf;

/// Descriptor for one known provider
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ProviderDescriptor {
    /// Short identifier, unique within the registry
    pub id: &'static str,
    /// Human-readable label
    pub display_name: &'static str,
    /// Default data directory, may start with a `~/` home placeholder
    pub default_directory: &'static str,
    /// Glob patterns matched against file names anywhere below the directory
    pub patterns: &'static [&'static str],
    /// Base name of the generated example file, before prefixing
    pub example_base_name: &'static str,
}

/// All known providers, in the order they are processed and reported.
static PROVIDERS: &[ProviderDescriptor] = &[
    ProviderDescriptor {
        id: "claude-code",
        display_name: "Claude Code",
        default_directory: "~/.claude/projects",
        patterns: &["*.jsonl", "*claude-code*.json*"],
        example_base_name: "claude.jsonl",
    },
    ProviderDescriptor {
        id: "gemini",
        display_name: "Gemini CLI",
        default_directory: "~/.gemini/tmp",
        patterns: &["session-*.json"],
        example_base_name: "gemini.json",
    },
    ProviderDescriptor {
        id: "codex",
        display_name: "Codex",
        default_directory: "~/.codex/sessions",
        patterns: &["*.jsonl"],
        example_base_name: "codex.jsonl",
    },
    ProviderDescriptor {
        id: "cursor",
        display_name: "Cursor Agent",
        default_directory: "~/.cursor/chats",
        patterns: &["store.db", "*cursor*.db"],
        example_base_name: "cursor.db",
    },
];

/// All known providers, in stable registration order
pub fn all() -> &'static [ProviderDescriptor] {
    PROVIDERS
}

impl ProviderDescriptor {
    /// Resolve the default directory, expanding a leading `~/` to the
    /// user's home directory. A path without the placeholder is returned
    /// unchanged; if the home directory cannot be determined the literal
    /// path is kept and will simply fail the existence check later.
    pub fn resolved_default_directory(&self) -> PathBuf {
        match self.default_directory.strip_prefix("~/") {
            Some(rest) => dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("~"))
                .join(rest),
            None => PathBuf::from(self.default_directory),
        }
    }

    /// Destination file name with the given prefix spliced in front of the
    /// stem: `claude.jsonl` with prefix `local` becomes `local_claude.jsonl`.
    pub fn example_file_name(&self, prefix: &str) -> String {
        match self.example_base_name.rsplit_once('.') {
            Some((stem, ext)) => format!("{prefix}_{stem}.{ext}"),
            None => format!("{prefix}_{}", self.example_base_name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_order_is_stable() {
        let ids: Vec<&str> = all().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["claude-code", "gemini", "codex", "cursor"]);
    }

    #[test]
    fn test_registry_entries_are_well_formed() {
        for provider in all() {
            assert!(!provider.patterns.is_empty(), "{} has no patterns", provider.id);
            assert!(!provider.example_base_name.is_empty());
        }

        let mut ids: Vec<&str> = all().iter().map(|p| p.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), all().len(), "provider ids must be unique");
    }

    #[test]
    fn test_example_file_name_splices_prefix_before_extension() {
        let claude = &all()[0];
        assert_eq!(claude.example_file_name("local"), "local_claude.jsonl");

        let descriptor = ProviderDescriptor {
            id: "bare",
            display_name: "Bare",
            default_directory: "/tmp",
            patterns: &["*"],
            example_base_name: "noext",
        };
        assert_eq!(descriptor.example_file_name("local"), "local_noext");
    }

    #[test]
    fn test_resolved_default_directory_expands_home() {
        let claude = &all()[0];
        let resolved = claude.resolved_default_directory();
        assert!(!resolved.to_string_lossy().starts_with("~/"));
        assert!(resolved.ends_with(".claude/projects"));
    }
}
