//! Tag discovery over a firmware source tree.
//!
//! Walks the configured scan roots, reads every C/C++ source file and
//! collects the log tags referenced by the usual ESP-IDF idioms. This is
//! a best-effort heuristic extractor, not a parser: malformed or partial
//! sources never abort a scan, and unreadable files are skipped.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;
use walkdir::WalkDir;

/// Extensions considered firmware source (matched case-insensitively).
const SOURCE_EXTENSIONS: [&str; 7] = ["c", "cc", "cpp", "cxx", "h", "hh", "hpp"];

/// One tag-extraction idiom: a regex with a single capture group for the
/// tag text.
pub struct TagPattern {
    pub name: &'static str,
    regex: Regex,
}

impl TagPattern {
    fn new(name: &'static str, pattern: &str) -> Self {
        Self {
            name,
            regex: Regex::new(pattern).expect("invalid tag pattern"),
        }
    }

    /// All non-empty captures of this idiom in `text`, trimmed.
    pub fn captures<'t>(&'t self, text: &'t str) -> impl Iterator<Item = &'t str> + 't {
        self.regex
            .captures_iter(text)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str().trim())
            .filter(|tag| !tag.is_empty())
    }
}

/// The fixed idiom set, in evaluation order. New idioms are added by
/// appending a pattern here; the traversal below never changes.
static TAG_PATTERNS: Lazy<Vec<TagPattern>> = Lazy::new(|| {
    vec![
        TagPattern::new(
            "static-const-tag",
            r#"static\s+const\s+char\s*\*\s*TAG\s*=\s*"([^"]+)""#,
        ),
        TagPattern::new("define-tag", r##"#define\s+TAG\s+"([^"]+)""##),
        TagPattern::new(
            "esp-log-call",
            r#"ESP_(?:EARLY_|DRAM_)?LOG[EWIDV]\s*\(\s*"([^"]+)""#,
        ),
    ]
});

/// Extract every tag from one file's text. Idioms are independent, not
/// mutually exclusive; a single file may contribute through several.
pub fn extract_tags(text: &str) -> BTreeSet<String> {
    let mut tags = BTreeSet::new();
    for pattern in TAG_PATTERNS.iter() {
        for tag in pattern.captures(text) {
            tags.insert(tag.to_string());
        }
    }
    tags
}

fn is_source_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            SOURCE_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// Discover all log tags under the given scan roots.
///
/// Roots that do not exist or are not directories contribute nothing; a
/// partial project layout is not an error. The result is deduplicated
/// and lexicographically sorted so numbered selection menus stay stable
/// between runs.
pub fn discover_tags(roots: &[PathBuf]) -> Vec<String> {
    let mut tags: BTreeSet<String> = BTreeSet::new();

    for root in roots {
        if !root.is_dir() {
            debug!("Skipping scan root {}: not a directory", root.display());
            continue;
        }

        for entry in WalkDir::new(root).follow_links(false) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    debug!("Error walking {}: {}", root.display(), e);
                    continue;
                }
            };

            if !entry.file_type().is_file() || !is_source_file(entry.path()) {
                continue;
            }

            let bytes = match fs::read(entry.path()) {
                Ok(bytes) => bytes,
                Err(e) => {
                    debug!("Cannot read {}: {}", entry.path().display(), e);
                    continue;
                }
            };

            // Vendor sources occasionally carry stray non-UTF-8 bytes;
            // replace them rather than abort the scan.
            let text = String::from_utf8_lossy(&bytes);
            tags.extend(extract_tags(&text));
        }
    }

    tags.into_iter().collect()
}
