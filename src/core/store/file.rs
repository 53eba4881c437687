//! JSON files under a language directory.
//!
//! ```text
//! lang/
//! ├── en.json                      single keys
//! ├── en/messages.json             group "messages", nested objects
//! ├── en/single_sign_on.json       group "single_sign_on", flat keys
//! └── vendor/package/
//!     ├── en.json                  group "package::single"
//!     └── en/messages.json         group "package::messages"
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use indexmap::IndexMap;
use tracing::{debug, warn};

use super::{
    TranslationStore,
    json::{JsonWriter, KeyAction, read_flat, read_nested},
};
use crate::core::data::{SINGLE_GROUP, TranslationSet, TranslationType};

const VENDOR_DIR: &str = "vendor";
const NAMESPACE_SEPARATOR: &str = "::";

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory holding the files of `namespace`, or the root.
    fn base_dir(&self, namespace: Option<&str>) -> PathBuf {
        match namespace {
            Some(ns) => self.root.join(VENDOR_DIR).join(ns),
            None => self.root.clone(),
        }
    }

    fn single_file(&self, language: &str, namespace: Option<&str>) -> PathBuf {
        self.base_dir(namespace).join(format!("{}.json", language))
    }

    fn group_file(&self, language: &str, namespace: Option<&str>, group: &str) -> PathBuf {
        self.base_dir(namespace)
            .join(language)
            .join(format!("{}.json", group))
    }

    /// Load single and group files found under `base`.
    fn load_into(
        &self,
        set: &mut TranslationSet,
        base: &Path,
        language: &str,
        namespace: Option<&str>,
    ) -> Result<()> {
        let single_path = base.join(format!("{}.json", language));
        if single_path.is_file() {
            let group = qualify(namespace, SINGLE_GROUP);
            for (key, value) in read_flat(&single_path)? {
                set.insert(TranslationType::Single, group.as_str(), key, value);
            }
        }

        let group_dir = base.join(language);
        for path in sorted_entries(&group_dir)? {
            if !path.is_file() || path.extension().is_none_or(|ext| ext != "json") {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let group = qualify(namespace, stem);
            for (key, value) in read_nested(&path)? {
                set.insert(TranslationType::for_group(&group), group.as_str(), key, value);
            }
        }

        Ok(())
    }
}

impl TranslationStore for FileStore {
    fn all_languages(&self) -> Result<IndexMap<String, String>> {
        let mut codes: Vec<String> = Vec::new();
        for path in sorted_entries(&self.root)? {
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            let code = if path.is_dir() {
                if name == VENDOR_DIR {
                    continue;
                }
                name
            } else if let Some(stem) = name.strip_suffix(".json") {
                stem
            } else {
                continue;
            };
            if !codes.iter().any(|c| c == code) {
                codes.push(code.to_string());
            }
        }
        codes.sort();

        Ok(codes.into_iter().map(|code| (code.clone(), code)).collect())
    }

    fn all_translations_for(&self, language: &str) -> Result<TranslationSet> {
        let mut set = TranslationSet::new();
        self.load_into(&mut set, &self.root, language, None)?;

        let vendor_dir = self.root.join(VENDOR_DIR);
        for ns_dir in sorted_entries(&vendor_dir)? {
            if !ns_dir.is_dir() {
                continue;
            }
            let Some(namespace) = ns_dir.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            self.load_into(&mut set, &ns_dir, language, Some(namespace))?;
        }

        debug!(language, keys = set.len(), root = %self.root.display(), "loaded translations");
        Ok(set)
    }

    fn add_group_translation(
        &mut self,
        language: &str,
        group: &str,
        key: &str,
        value: &str,
    ) -> Result<KeyAction> {
        let (namespace, group) = split_namespace(group);
        let path = self.group_file(language, namespace, group);
        let mut writer = JsonWriter::open_or_create(&path)?;
        let action = writer.set_nested(key, value);
        if action == KeyAction::Skipped {
            warn!(
                language,
                group,
                key,
                file = %path.display(),
                "key conflicts with an existing value, not written"
            );
            return Ok(action);
        }
        writer
            .save()
            .with_context(|| format!("Failed to save {}.{} for '{}'", group, key, language))?;
        Ok(action)
    }

    fn add_single_translation(
        &mut self,
        language: &str,
        group: &str,
        key: &str,
        value: &str,
    ) -> Result<KeyAction> {
        // Groups merely containing "single" keep their own file so they read
        // back under the same name.
        let (namespace, name) = split_namespace(group);
        let path = if name == SINGLE_GROUP {
            self.single_file(language, namespace)
        } else {
            self.group_file(language, namespace, name)
        };
        let mut writer = JsonWriter::open_or_create(&path)?;
        let action = writer.set_value(key, value);
        writer
            .save()
            .with_context(|| format!("Failed to save '{}' for '{}'", key, language))?;
        Ok(action)
    }
}

/// `package::messages` → (Some("package"), "messages").
fn split_namespace(group: &str) -> (Option<&str>, &str) {
    match group.split_once(NAMESPACE_SEPARATOR) {
        Some((ns, rest)) if !ns.is_empty() => (Some(ns), rest),
        _ => (None, group),
    }
}

fn qualify(namespace: Option<&str>, group: &str) -> String {
    match namespace {
        Some(ns) => format!("{}{}{}", ns, NAMESPACE_SEPARATOR, group),
        None => group.to_string(),
    }
}

/// Directory entries sorted by name. A missing directory has none.
fn sorted_entries(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }
    let mut paths = fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory: {}", dir.display()))?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("Failed to read directory: {}", dir.display()))?;
    paths.sort();
    Ok(paths)
}
