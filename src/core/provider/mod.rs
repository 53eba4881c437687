//! External machine-translation providers.
//!
//! The core only needs one capability: turn a piece of text from one language
//! into another. Calls are blocking and best-effort; there is no retry.

mod google;

pub use google::{DEFAULT_ENDPOINT, GoogleTranslate};

/// Errors from an external translation call.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("API error ({status}): {body}")]
    Api { status: u16, body: String },

    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),
}

/// An opaque natural-language translation service.
pub trait TranslateProvider {
    /// Translate `text` from `source_language` into `target_language`.
    fn translate(
        &self,
        source_language: &str,
        target_language: &str,
        text: &str,
    ) -> Result<String, ProviderError>;
}

impl<P: TranslateProvider + ?Sized> TranslateProvider for &P {
    fn translate(
        &self,
        source_language: &str,
        target_language: &str,
        text: &str,
    ) -> Result<String, ProviderError> {
        (**self).translate(source_language, target_language, text)
    }
}
