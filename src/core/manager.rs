//! Gap-fill orchestration.
//!
//! [`TranslationManager`] composes a store, a scanner and a translate provider:
//!
//! 1. `find_missing_translations`: keys the code uses that a language lacks
//! 2. `save_missing_translations`: persist those keys as empty stubs
//! 3. `translate_language`: machine-translate every empty value
//!
//! Every write goes through the store one key at a time and is followed by a
//! [`TranslationAdded`] notification. Nothing is cached between calls.

use anyhow::{Result, bail};
use indexmap::IndexMap;
use serde::Serialize;
use tracing::{debug, info, warn};

use super::{
    data::{KeyPath, MergedView, SINGLE_GROUP, TranslationSet, TranslationType},
    diff::{diff, diff_untranslated, is_untranslated},
    events::{Observers, TranslationAdded},
    merge,
    placeholder::{PlaceholderMismatch, PlaceholderStyles},
    provider::TranslateProvider,
    scanner::Scanner,
    store::{KeyAction, TranslationStore},
    translator::SegmentedTranslator,
};

/// Keys stubbed for one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SavedMissing {
    pub language: String,
    pub keys: Vec<KeyPath>,
}

/// A key the provider could not translate. It stays empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranslateFailure {
    pub path: KeyPath,
    pub error: String,
}

/// A translated key whose placeholder count changed. The text was saved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranslateMismatch {
    pub path: KeyPath,
    pub text: String,
    #[serde(flatten)]
    pub mismatch: PlaceholderMismatch,
}

/// Outcome of translating one language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateSummary {
    pub language: String,
    /// The language is the source language; nothing was done.
    pub skipped: bool,
    pub translated: Vec<KeyPath>,
    pub failures: Vec<TranslateFailure>,
    pub mismatches: Vec<TranslateMismatch>,
}

/// A translation entered by hand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewTranslation {
    pub namespace: Option<String>,
    /// Group translations name their group; single translations leave it out.
    pub group: Option<String>,
    pub key: String,
    pub value: Option<String>,
}

impl NewTranslation {
    /// Group name the translation is stored under.
    pub fn qualified_group(&self) -> String {
        match (non_empty(&self.namespace), non_empty(&self.group)) {
            (Some(ns), Some(group)) => format!("{}::{}", ns, group),
            (None, Some(group)) => group.to_string(),
            (_, None) => SINGLE_GROUP.to_string(),
        }
    }

    pub fn kind(&self) -> TranslationType {
        if non_empty(&self.group).is_some() {
            TranslationType::Group
        } else {
            TranslationType::Single
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

pub struct TranslationManager<S, C> {
    store: S,
    scanner: C,
    source_language: String,
    styles: PlaceholderStyles,
    observers: Observers,
}

impl<S: TranslationStore, C: Scanner> TranslationManager<S, C> {
    pub fn new(store: S, scanner: C, source_language: impl Into<String>) -> Self {
        Self {
            store,
            scanner,
            source_language: source_language.into(),
            styles: PlaceholderStyles::default(),
            observers: Observers::default(),
        }
    }

    pub fn with_placeholder_styles(mut self, styles: PlaceholderStyles) -> Self {
        self.styles = styles;
        self
    }

    pub fn source_language(&self) -> &str {
        &self.source_language
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Run `observer` after every successful write made through the manager.
    pub fn on_translation_added(
        &mut self,
        observer: impl Fn(&TranslationAdded) + Send + Sync + 'static,
    ) {
        self.observers.register(observer);
    }

    /// Languages to iterate: just `language` when given (not validated),
    /// otherwise every language the store knows.
    pub fn languages(&self, language: Option<&str>) -> Result<IndexMap<String, String>> {
        match language {
            Some(language) => Ok(IndexMap::from([(
                language.to_string(),
                language.to_string(),
            )])),
            None => self.store.all_languages(),
        }
    }

    pub fn all_translations_for(&self, language: &str) -> Result<TranslationSet> {
        self.store.all_translations_for(language)
    }

    /// Scanned keys, typed the way the store reads them back.
    fn expected_translations(&self) -> Result<TranslationSet> {
        let mut expected = TranslationSet::new();
        for entry in self.scanner.find_translations()?.iter() {
            expected.insert(
                TranslationType::for_group(entry.group),
                entry.group,
                entry.key,
                entry.value,
            );
        }
        Ok(expected)
    }

    /// Keys found in code that `language` has no entry for.
    pub fn find_missing_translations(&self, language: &str) -> Result<TranslationSet> {
        let expected = self.expected_translations()?;
        let actual = self.store.all_translations_for(language)?;
        Ok(diff(&expected, &actual))
    }

    /// Like [`find_missing_translations`](Self::find_missing_translations),
    /// but keys stored with an empty value count as missing too.
    pub fn find_untranslated(&self, language: &str) -> Result<TranslationSet> {
        let expected = self.expected_translations()?;
        let actual = self.store.all_translations_for(language)?;
        Ok(diff_untranslated(&expected, &actual))
    }

    /// Persist every missing key as an empty value, for `language` or for
    /// every configured language.
    pub fn save_missing_translations(&mut self, language: Option<&str>) -> Result<Vec<SavedMissing>> {
        let mut saved = Vec::new();
        for language in self.languages(language)?.into_keys() {
            let missing = self.find_missing_translations(&language)?;
            let mut keys = Vec::new();
            for entry in missing.iter() {
                let action = self.persist(
                    TranslationType::for_group(entry.group),
                    &language,
                    entry.group,
                    entry.key,
                    "",
                )?;
                if action != KeyAction::Skipped {
                    keys.push(entry.path());
                }
            }
            if !keys.is_empty() {
                info!(language = language.as_str(), keys = keys.len(), "saved missing translations");
            }
            saved.push(SavedMissing { language, keys });
        }
        Ok(saved)
    }

    /// Source-language translations paired with `language`'s values.
    pub fn source_language_translations_with(&self, language: &str) -> Result<MergedView> {
        let source = self.store.all_translations_for(&self.source_language)?;
        let target = self.store.all_translations_for(language)?;
        Ok(merge::merge(&self.source_language, &source, language, &target))
    }

    /// Merged view for `language`, narrowed by `filter` when given.
    pub fn filter_translations_for(&self, language: &str, filter: Option<&str>) -> Result<MergedView> {
        let view = self.source_language_translations_with(language)?;
        Ok(match filter.filter(|f| !f.is_empty()) {
            Some(filter) => merge::filter(&view, filter),
            None => view,
        })
    }

    /// Machine-translate every key of `language` whose value is empty or absent.
    ///
    /// The seed text is the source-language value, or the key itself when
    /// that is empty too. A provider failure leaves the key empty and moves on.
    pub fn translate_language<P>(&mut self, language: &str, provider: &P) -> Result<TranslateSummary>
    where
        P: TranslateProvider + ?Sized,
    {
        let mut summary = TranslateSummary {
            language: language.to_string(),
            ..Default::default()
        };
        if language == self.source_language {
            debug!(language, "skipping source language");
            summary.skipped = true;
            return Ok(summary);
        }

        let view = self.source_language_translations_with(language)?;
        let styles = self.styles.clone();
        let source_language = self.source_language.clone();
        let translator = SegmentedTranslator::new(provider, &styles);

        for entry in view.entries() {
            if !is_untranslated(entry.target) {
                continue;
            }
            let seed = entry.source.filter(|s| !s.is_empty()).unwrap_or(entry.key);
            let path = KeyPath::new(entry.kind, entry.group, entry.key);

            let translated = match translator.translate(language, &source_language, seed) {
                Ok(translated) => translated,
                Err(e) => {
                    warn!(language, key = %path, error = %e, "translation failed");
                    summary.failures.push(TranslateFailure {
                        path,
                        error: e.to_string(),
                    });
                    continue;
                }
            };

            let action = self.persist(
                TranslationType::for_group(entry.group),
                language,
                entry.group,
                entry.key,
                &translated.text,
            )?;
            if action == KeyAction::Skipped {
                summary.failures.push(TranslateFailure {
                    path,
                    error: "conflicts with an existing value".to_string(),
                });
                continue;
            }
            if let Some(mismatch) = translated.mismatch {
                summary.mismatches.push(TranslateMismatch {
                    path: path.clone(),
                    text: translated.text,
                    mismatch,
                });
            }
            summary.translated.push(path);
        }

        Ok(summary)
    }

    /// Save missing keys and translate them, language by language.
    ///
    /// `on_done` runs after each language, e.g. to print a notice.
    pub fn auto_translate<P, F>(
        &mut self,
        language: Option<&str>,
        provider: &P,
        mut on_done: F,
    ) -> Result<Vec<TranslateSummary>>
    where
        P: TranslateProvider + ?Sized,
        F: FnMut(&TranslateSummary),
    {
        let mut summaries = Vec::new();
        for language in self.languages(language)?.into_keys() {
            self.save_missing_translations(Some(&language))?;
            let summary = self.translate_language(&language, provider)?;
            on_done(&summary);
            summaries.push(summary);
        }
        Ok(summaries)
    }

    /// Store a hand-entered translation for `language`.
    pub fn add(&mut self, language: &str, translation: &NewTranslation) -> Result<KeyAction> {
        if translation.key.trim().is_empty() {
            bail!("Translation key cannot be empty");
        }
        let group = translation.qualified_group();
        let value = translation.value.as_deref().unwrap_or("");
        let action = self.persist(translation.kind(), language, &group, &translation.key, value)?;
        if action == KeyAction::Skipped {
            bail!(
                "'{}' in '{}' conflicts with an existing value for '{}'",
                translation.key,
                group,
                language
            );
        }
        Ok(action)
    }

    /// The single write path: store, then notify. Skipped writes notify nobody.
    fn persist(
        &mut self,
        kind: TranslationType,
        language: &str,
        group: &str,
        key: &str,
        value: &str,
    ) -> Result<KeyAction> {
        let action = match kind {
            TranslationType::Single => {
                self.store.add_single_translation(language, group, key, value)?
            }
            TranslationType::Group => {
                self.store.add_group_translation(language, group, key, value)?
            }
        };
        debug!(language, group, key, action = action.as_str(), "persisted translation");
        if action == KeyAction::Skipped {
            return Ok(action);
        }

        self.observers.notify(&TranslationAdded {
            language: language.to_string(),
            group: group.to_string(),
            key: key.to_string(),
            value: value.to_string(),
        });
        Ok(action)
    }
}
