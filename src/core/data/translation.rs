use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Group name used for single (ungrouped) translations.
///
/// Namespaced single translations use `"{namespace}::single"`.
pub const SINGLE_GROUP: &str = "single";

/// Kind of a translation key.
///
/// 1. **Single**: ad-hoc strings discovered inline in code
///    - Code: `__('Some text')`
///    - Stored flat, the key doubles as default text
///
/// 2. **Group**: keys inside a named group file
///    - Code: `trans('messages.welcome')`
///    - Group may carry a `namespace::` prefix
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum TranslationType {
    Single,
    Group,
}

impl TranslationType {
    /// Pick the write path for a group name.
    ///
    /// Any group whose name contains `"single"` is a single translation,
    /// including namespaced ones like `"package::single"`.
    pub fn for_group(group: &str) -> Self {
        if group.contains(SINGLE_GROUP) {
            TranslationType::Single
        } else {
            TranslationType::Group
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TranslationType::Single => "single",
            TranslationType::Group => "group",
        }
    }
}

impl fmt::Display for TranslationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub type KeyMap<V> = IndexMap<String, V>;
pub type GroupMap<V> = IndexMap<String, KeyMap<V>>;
pub type TypeMap<V> = IndexMap<TranslationType, GroupMap<V>>;

/// Full address of a translation: `(type, group, key)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct KeyPath {
    #[serde(rename = "type")]
    pub kind: TranslationType,
    pub group: String,
    pub key: String,
}

impl KeyPath {
    pub fn new(kind: TranslationType, group: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            kind,
            group: group.into(),
            key: key.into(),
        }
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TranslationType::Group => write!(f, "{}.{}", self.group, self.key),
            TranslationType::Single => write!(f, "{}", self.key),
        }
    }
}

/// A borrowed leaf of a [`TranslationSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry<'a> {
    pub kind: TranslationType,
    pub group: &'a str,
    pub key: &'a str,
    pub value: &'a str,
}

impl Entry<'_> {
    pub fn path(&self) -> KeyPath {
        KeyPath::new(self.kind, self.group, self.key)
    }
}

/// Translations for one language (or the keys found by a scan).
///
/// Three fixed levels: type → group → key → value. Insertion order is
/// preserved so output stays stable between runs.
///
/// Serializes as the nested map, e.g.
/// `{"group": {"messages": {"welcome": "Hello :name"}}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TranslationSet {
    types: TypeMap<String>,
}

impl TranslationSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, returning the previous one if the key existed.
    pub fn insert(
        &mut self,
        kind: TranslationType,
        group: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Option<String> {
        self.types
            .entry(kind)
            .or_default()
            .entry(group.into())
            .or_default()
            .insert(key.into(), value.into())
    }

    pub fn get(&self, kind: TranslationType, group: &str, key: &str) -> Option<&str> {
        self.types
            .get(&kind)
            .and_then(|groups| groups.get(group))
            .and_then(|keys| keys.get(key))
            .map(String::as_str)
    }

    pub fn contains(&self, kind: TranslationType, group: &str, key: &str) -> bool {
        self.get(kind, group, key).is_some()
    }

    pub fn types(&self) -> impl Iterator<Item = (&TranslationType, &GroupMap<String>)> {
        self.types.iter()
    }

    /// Iterate every leaf in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = Entry<'_>> {
        self.types.iter().flat_map(|(kind, groups)| {
            groups.iter().flat_map(move |(group, keys)| {
                keys.iter().map(move |(key, value)| Entry {
                    kind: *kind,
                    group,
                    key,
                    value,
                })
            })
        })
    }

    /// Merge another set into this one. Values from `other` win.
    pub fn extend(&mut self, other: TranslationSet) {
        for (kind, groups) in other.types {
            for (group, keys) in groups {
                for (key, value) in keys {
                    self.insert(kind, group.clone(), key, value);
                }
            }
        }
    }

    /// Number of leaves (keys), not groups.
    pub fn len(&self) -> usize {
        self.types
            .values()
            .flat_map(|groups| groups.values())
            .map(|keys| keys.len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
