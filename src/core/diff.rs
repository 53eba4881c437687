//! Missing-translation differ.
//!
//! Compares the keys found in source code against the keys stored for one
//! language. The walk is fixed at three levels (type → group → key) and keyed
//! by name, never by position.

use super::data::{TranslationSet, TranslationType};

/// Keys present in `expected` but absent from `actual`.
///
/// Only key presence is checked: a stored empty value suppresses the key.
/// The result keeps `expected`'s shape, iteration order and values.
pub fn diff(expected: &TranslationSet, actual: &TranslationSet) -> TranslationSet {
    diff_by(expected, |kind, group, key| actual.contains(kind, group, key))
}

/// Like [`diff`], but a key stored with an empty value also counts as missing.
pub fn diff_untranslated(expected: &TranslationSet, actual: &TranslationSet) -> TranslationSet {
    diff_by(expected, |kind, group, key| {
        !is_untranslated(actual.get(kind, group, key))
    })
}

/// Absent and empty values are both "not translated yet".
pub fn is_untranslated(value: Option<&str>) -> bool {
    value.is_none_or(str::is_empty)
}

fn diff_by<F>(expected: &TranslationSet, is_present: F) -> TranslationSet
where
    F: Fn(TranslationType, &str, &str) -> bool,
{
    let mut missing = TranslationSet::new();
    for (kind, groups) in expected.types() {
        for (group, keys) in groups {
            for (key, value) in keys {
                if !is_present(*kind, group, key) {
                    missing.insert(*kind, group.as_str(), key.as_str(), value.as_str());
                }
            }
        }
    }
    missing
}
