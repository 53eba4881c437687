use indexmap::IndexMap;
use serde::Serialize;

use super::translation::{TranslationType, TypeMap};

/// Values of one key keyed by language code, e.g. `{"en": "Hello", "fr": null}`.
pub type LanguageValues = IndexMap<String, Option<String>>;

/// Source-language values paired with one target language.
///
/// Shape: type → group → key → { language → value }. A `None` target means
/// the key is absent from the target language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MergedView {
    #[serde(skip)]
    source_language: String,
    #[serde(skip)]
    language: String,
    translations: TypeMap<LanguageValues>,
}

/// A borrowed leaf of a [`MergedView`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergedEntry<'a> {
    pub kind: TranslationType,
    pub group: &'a str,
    pub key: &'a str,
    pub source: Option<&'a str>,
    pub target: Option<&'a str>,
}

impl MergedView {
    pub fn new(source_language: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            source_language: source_language.into(),
            language: language.into(),
            translations: TypeMap::default(),
        }
    }

    pub fn source_language(&self) -> &str {
        &self.source_language
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// Insert a key with its source and target values.
    ///
    /// When the target language is the source language both labels collapse
    /// into a single entry holding the target value.
    pub fn insert(
        &mut self,
        kind: TranslationType,
        group: impl Into<String>,
        key: impl Into<String>,
        source: Option<String>,
        target: Option<String>,
    ) {
        let mut values = LanguageValues::new();
        values.insert(self.source_language.clone(), source);
        values.insert(self.language.clone(), target);
        self.translations
            .entry(kind)
            .or_default()
            .entry(group.into())
            .or_default()
            .insert(key.into(), values);
    }

    /// Iterate every key in source-language order.
    pub fn entries(&self) -> impl Iterator<Item = MergedEntry<'_>> {
        let source_language = self.source_language.as_str();
        let language = self.language.as_str();
        self.translations.iter().flat_map(move |(kind, groups)| {
            groups.iter().flat_map(move |(group, keys)| {
                keys.iter().map(move |(key, values)| MergedEntry {
                    kind: *kind,
                    group,
                    key,
                    source: values.get(source_language).and_then(|v| v.as_deref()),
                    target: values.get(language).and_then(|v| v.as_deref()),
                })
            })
        })
    }

    pub fn get(&self, kind: TranslationType, group: &str, key: &str) -> Option<&LanguageValues> {
        self.translations
            .get(&kind)
            .and_then(|groups| groups.get(group))
            .and_then(|keys| keys.get(key))
    }

    /// Number of groups holding at least one key.
    pub fn group_count(&self) -> usize {
        self.translations
            .values()
            .flat_map(|groups| groups.values())
            .filter(|keys| !keys.is_empty())
            .count()
    }

    pub fn len(&self) -> usize {
        self.translations
            .values()
            .flat_map(|groups| groups.values())
            .map(|keys| keys.len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
