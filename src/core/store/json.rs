use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use indexmap::IndexMap;
use serde_json::{Map, Value};

/// Action taken on a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Added,
    Updated,
    /// Left untouched: the path runs through an existing value of another shape.
    Skipped,
}

impl KeyAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            KeyAction::Added => "added",
            KeyAction::Updated => "updated",
            KeyAction::Skipped => "skipped",
        }
    }
}

fn read_object(path: &Path) -> Result<Map<String, Value>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read JSON file: {}", path.display()))?;
    let value: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse JSON file: {}", path.display()))?;
    match value {
        Value::Object(map) => Ok(map),
        _ => bail!("Root of JSON file must be an object: {}", path.display()),
    }
}

/// Read a flat `key → value` file. Keys are taken verbatim, dots included.
pub fn read_flat(path: &Path) -> Result<IndexMap<String, String>> {
    let map = read_object(path)?;
    Ok(map
        .into_iter()
        .filter_map(|(key, value)| leaf_value(&value).map(|v| (key, v)))
        .collect())
}

/// Read a nested file, flattening objects into dot-separated keys.
pub fn read_nested(path: &Path) -> Result<IndexMap<String, String>> {
    let map = read_object(path)?;
    let mut result = IndexMap::new();
    flatten_json(&Value::Object(map), String::new(), &mut result);
    Ok(result)
}

/// String leaves are translations; `null` is an untranslated stub.
fn leaf_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Null => Some(String::new()),
        _ => None,
    }
}

fn flatten_json(value: &Value, prefix: String, result: &mut IndexMap<String, String>) {
    match value {
        Value::Object(map) => {
            for (key, val) in map {
                let new_prefix = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                flatten_json(val, new_prefix, result);
            }
        }
        Value::Array(arr) => {
            // Arrays are addressed by index (e.g., rules.0, rules.1)
            for (index, val) in arr.iter().enumerate() {
                let new_prefix = if prefix.is_empty() {
                    index.to_string()
                } else {
                    format!("{}.{}", prefix, index)
                };
                flatten_json(val, new_prefix, result);
            }
        }
        other => {
            if !prefix.is_empty()
                && let Some(v) = leaf_value(other)
            {
                result.insert(prefix, v);
            }
        }
    }
}

/// JSON writer for locale files
pub struct JsonWriter {
    file_path: PathBuf,
    data: Map<String, Value>,
}

impl JsonWriter {
    /// Open an existing JSON file or create a new empty one
    pub fn open_or_create(path: &Path) -> Result<Self> {
        let data = if path.exists() {
            read_object(path)?
        } else {
            Map::new()
        };

        Ok(Self {
            file_path: path.to_path_buf(),
            data,
        })
    }

    /// Set a top-level key verbatim. Dots in the key are literal.
    pub fn set_value(&mut self, key: &str, value: &str) -> KeyAction {
        let action = if self.data.contains_key(key) {
            KeyAction::Updated
        } else {
            KeyAction::Added
        };
        self.data
            .insert(key.to_string(), Value::String(value.to_string()));
        action
    }

    /// Set a value at a nested path
    ///
    /// Key format: "nav.home" or "auth.errors.throttle"
    /// Creates intermediate objects if they don't exist. A translated string
    /// on the way, or an object at the leaf, is never replaced.
    pub fn set_nested(&mut self, key: &str, value: &str) -> KeyAction {
        let parts: Vec<&str> = key.split('.').collect();
        insert_nested(
            &mut self.data,
            &parts,
            Value::String(value.to_string()),
        )
    }

    /// Save the JSON file with pretty formatting
    ///
    /// Uses 2-space indentation and adds a trailing newline.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let content =
            serde_json::to_string_pretty(&self.data).context("Failed to serialize JSON")?;

        fs::write(&self.file_path, format!("{}\n", content))
            .with_context(|| format!("Failed to write file: {}", self.file_path.display()))?;

        Ok(())
    }
}

/// Insert a value at a nested path, creating intermediate objects as needed
fn insert_nested(root: &mut Map<String, Value>, path: &[&str], value: Value) -> KeyAction {
    let Some((first, rest)) = path.split_first() else {
        return KeyAction::Skipped;
    };

    if rest.is_empty() {
        let action = match root.get(*first) {
            None => KeyAction::Added,
            Some(Value::Object(_)) => return KeyAction::Skipped,
            Some(_) => KeyAction::Updated,
        };
        root.insert(first.to_string(), value);
        return action;
    }

    let next_level = root
        .entry(first.to_string())
        .or_insert_with(|| Value::Object(Map::new()));

    // Only an untranslated stub may give way to an object.
    if is_empty_leaf(next_level) {
        *next_level = Value::Object(Map::new());
    }

    match next_level {
        Value::Object(inner_map) => insert_nested(inner_map, rest, value),
        _ => KeyAction::Skipped,
    }
}

fn is_empty_leaf(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}
