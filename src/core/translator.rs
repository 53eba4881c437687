//! Segmented translation with placeholder protection.
//!
//! Pluralization variants (`apple|apples`) are translated one segment at a
//! time so the external service cannot merge or reorder them.

use tracing::warn;

use super::{
    placeholder::{PlaceholderMismatch, PlaceholderStyle, PlaceholderStyles, protect, restore, verify},
    provider::{ProviderError, TranslateProvider},
};

/// Separator between pluralization variants.
pub const PLURAL_SEPARATOR: char = '|';

/// Output of one translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translated {
    pub text: String,
    /// Set when the placeholder count changed during translation.
    /// The text is still usable, but should be reviewed.
    pub mismatch: Option<PlaceholderMismatch>,
}

pub struct SegmentedTranslator<'a, P: ?Sized> {
    provider: &'a P,
    styles: &'a PlaceholderStyles,
}

impl<'a, P: TranslateProvider + ?Sized> SegmentedTranslator<'a, P> {
    pub fn new(provider: &'a P, styles: &'a PlaceholderStyles) -> Self {
        Self { provider, styles }
    }

    /// Translate `text` from `source_language` into `language`.
    ///
    /// The output always has as many `|`-separated segments as the input.
    pub fn translate(
        &self,
        language: &str,
        source_language: &str,
        text: &str,
    ) -> Result<Translated, ProviderError> {
        let style = self.styles.for_language(language);

        let segments = text
            .split(PLURAL_SEPARATOR)
            .map(|segment| self.translate_segment(language, source_language, segment, style))
            .collect::<Result<Vec<_>, _>>()?;
        let translated = segments.join("|");

        let mismatch = verify(text, &translated);
        if let Some(mismatch) = &mismatch {
            warn!(
                source_language,
                language,
                original = text,
                translated = translated.as_str(),
                expected = ?mismatch.expected,
                actual = ?mismatch.actual,
                "placeholder count mismatch in translated text"
            );
        }

        Ok(Translated {
            text: translated,
            mismatch,
        })
    }

    fn translate_segment(
        &self,
        language: &str,
        source_language: &str,
        segment: &str,
        style: PlaceholderStyle,
    ) -> Result<String, ProviderError> {
        if segment.trim().is_empty() {
            return Ok(segment.to_string());
        }

        let protected = protect(segment, style);
        let translated = self
            .provider
            .translate(source_language, language, &protected.masked)?;
        let restored = restore(&translated, &protected.placeholders);

        // A separator invented by the service would add a variant.
        Ok(restored.replace(PLURAL_SEPARATOR, ""))
    }
}
