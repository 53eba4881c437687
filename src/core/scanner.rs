//! Source scanner: finds the translation keys application code uses.
//!
//! Files under the configured include paths are matched against calls of the
//! configured translation methods (`__('...')`, `trans('...')`, ...). Only
//! literal first arguments are recognized.

use std::{
    collections::BTreeSet,
    fs,
    path::{Path, PathBuf},
    sync::LazyLock,
};

use anyhow::{Context, Result, bail};
use glob::{Pattern, glob};
use rayon::prelude::*;
use regex::Regex;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::config::Config;

use super::data::{SINGLE_GROUP, TranslationSet, TranslationType};

/// `group.key`, `namespace::group.key`, `group.nested.key`.
static GROUP_KEY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9:_-]+(\.[^)\s]+)+$").unwrap());

/// Produces the set of keys the application expects to be translated.
pub trait Scanner {
    fn find_translations(&self) -> Result<TranslationSet>;
}

/// A fixed snapshot is its own scan result.
impl Scanner for TranslationSet {
    fn find_translations(&self) -> Result<TranslationSet> {
        Ok(self.clone())
    }
}

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal paths.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Scans source files on disk.
pub struct SourceScanner {
    base_dir: PathBuf,
    includes: Vec<String>,
    ignores: Vec<String>,
    extensions: Vec<String>,
    call_regex: Regex,
}

impl SourceScanner {
    pub fn new(base_dir: impl Into<PathBuf>, config: &Config) -> Result<Self> {
        Ok(Self {
            base_dir: base_dir.into(),
            includes: config.includes.clone(),
            ignores: config.ignores.clone(),
            extensions: config.extensions.clone(),
            call_regex: build_call_regex(&config.translation_methods)?,
        })
    }

    /// All scannable files, sorted.
    pub fn collect_files(&self) -> BTreeSet<PathBuf> {
        let mut files = BTreeSet::new();

        let mut literal_ignore_paths: Vec<PathBuf> = Vec::new();
        let mut glob_patterns: Vec<Pattern> = Vec::new();
        for p in &self.ignores {
            if is_glob_pattern(p) {
                match Pattern::new(p) {
                    Ok(pattern) => glob_patterns.push(pattern),
                    Err(e) => warn!("Invalid ignore pattern '{}': {}", p, e),
                }
            } else {
                literal_ignore_paths.push(self.base_dir.join(p));
            }
        }

        for dir in self.dirs_to_scan() {
            for entry in WalkDir::new(dir) {
                let entry = match entry {
                    Ok(e) => e,
                    Err(e) => {
                        warn!("Cannot access path: {}", e);
                        continue;
                    }
                };
                let path = entry.path();

                if literal_ignore_paths
                    .iter()
                    .any(|ignore_path| path.starts_with(ignore_path))
                {
                    continue;
                }

                let path_str = path.to_string_lossy();
                if glob_patterns.iter().any(|p| p.matches(&path_str)) {
                    continue;
                }

                if path.is_file() && self.is_scannable_file(path) {
                    files.insert(path.to_path_buf());
                }
            }
        }

        files
    }

    fn dirs_to_scan(&self) -> Vec<PathBuf> {
        if self.includes.is_empty() {
            return vec![self.base_dir.clone()];
        }

        let mut paths = Vec::new();
        for inc in &self.includes {
            if is_glob_pattern(inc) {
                let full_pattern = self.base_dir.join(inc);
                match glob(&full_pattern.to_string_lossy()) {
                    Ok(entries) => paths.extend(entries.flatten().filter(|p| p.is_dir())),
                    Err(e) => warn!("Invalid glob pattern '{}': {}", inc, e),
                }
            } else {
                let path = self.base_dir.join(inc);
                if path.exists() {
                    paths.push(path);
                } else {
                    debug!("Include path does not exist: {}", path.display());
                }
            }
        }
        paths
    }

    fn is_scannable_file(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|allowed| allowed == ext))
    }

    /// Keys used in one file's content.
    pub fn scan_content(&self, content: &str) -> TranslationSet {
        let mut found = TranslationSet::new();

        for caps in self.call_regex.captures_iter(content) {
            // Preceded by an identifier character or `->`: a different function.
            if caps.get(1).is_some_and(|m| !m.as_str().is_empty()) {
                continue;
            }

            let literal = match (caps.get(2), caps.get(3)) {
                (Some(m), _) => m.as_str().replace("\\'", "'"),
                (None, Some(m)) => m.as_str().replace("\\\"", "\""),
                (None, None) => continue,
            };
            if literal.is_empty() {
                continue;
            }

            match split_group_key(&literal) {
                Some((group, key)) => {
                    // Classified like the store reads it back.
                    found.insert(TranslationType::for_group(group), group, key, "");
                }
                None => {
                    found.insert(
                        TranslationType::Single,
                        SINGLE_GROUP,
                        literal.as_str(),
                        literal.as_str(),
                    );
                }
            }
        }

        found
    }
}

impl Scanner for SourceScanner {
    fn find_translations(&self) -> Result<TranslationSet> {
        let files: Vec<PathBuf> = self.collect_files().into_iter().collect();
        debug!(files = files.len(), "scanning source files");

        let results: Vec<Result<TranslationSet>> = files
            .par_iter()
            .map(|path| {
                fs::read_to_string(path)
                    .with_context(|| format!("Failed to read file: {}", path.display()))
                    .map(|content| self.scan_content(&content))
            })
            .collect();

        let mut found = TranslationSet::new();
        for result in results {
            found.extend(result?);
        }
        Ok(found)
    }
}

/// Build the call matcher for the configured translation methods.
///
/// Capture 1 is the character before the method name (must be empty for a
/// real call), captures 2 and 3 are single- and double-quoted literals.
fn build_call_regex(methods: &[String]) -> Result<Regex> {
    if methods.is_empty() {
        bail!("At least one translation method must be configured");
    }
    let alternatives = methods
        .iter()
        .map(|m| regex::escape(m))
        .collect::<Vec<_>>()
        .join("|");
    let pattern = format!(
        r#"([\w>]?)(?:{})\(\s*(?:'((?:[^'\\]|\\.)*)'|"((?:[^"\\]|\\.)*)")\s*[),]"#,
        alternatives
    );
    Regex::new(&pattern).context("Failed to build translation call pattern")
}

/// Split `group.key` at the first dot, if the literal looks like a group key.
fn split_group_key(literal: &str) -> Option<(&str, &str)> {
    if !GROUP_KEY_REGEX.is_match(literal) {
        return None;
    }
    literal.split_once('.')
}
