//! Pairs source-language values with one target language, and narrows the
//! result for display.

use super::data::{MergedView, TranslationSet};

/// Merged view over every key of `source`.
///
/// Keys only the target language has are not part of the view.
pub fn merge(
    source_language: &str,
    source: &TranslationSet,
    language: &str,
    target: &TranslationSet,
) -> MergedView {
    let mut view = MergedView::new(source_language, language);
    for entry in source.iter() {
        view.insert(
            entry.kind,
            entry.group,
            entry.key,
            Some(entry.value.to_string()),
            target
                .get(entry.kind, entry.group, entry.key)
                .map(str::to_string),
        );
    }
    view
}

/// Keys whose group, key, target value or source value contains `filter`,
/// ignoring case. Groups without a match are dropped.
pub fn filter(view: &MergedView, filter: &str) -> MergedView {
    let needle = filter.to_lowercase();
    let matches = |text: Option<&str>| text.is_some_and(|t| t.to_lowercase().contains(&needle));

    let mut filtered = MergedView::new(view.source_language(), view.language());
    for entry in view.entries() {
        if matches(Some(entry.group))
            || matches(Some(entry.key))
            || matches(entry.target)
            || matches(entry.source)
        {
            filtered.insert(
                entry.kind,
                entry.group,
                entry.key,
                entry.source.map(str::to_string),
                entry.target.map(str::to_string),
            );
        }
    }
    filtered
}
