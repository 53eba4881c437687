//! Translation storage.
//!
//! The orchestrator only ever reads whole languages and writes one key at a
//! time; it never touches the storage format directly.
//!
//! ## Module Structure
//!
//! - `file`: JSON files under a language directory
//! - `json`: Reading and writing locale JSON files

mod file;
mod json;

use anyhow::Result;
use indexmap::IndexMap;

use super::data::TranslationSet;

pub use file::FileStore;
pub use json::{JsonWriter, KeyAction};

/// Storage backend for translations and the registry of languages.
pub trait TranslationStore {
    /// Configured languages, code → display name, in a stable order.
    fn all_languages(&self) -> Result<IndexMap<String, String>>;

    /// Everything stored for `language`. Unknown languages yield an empty set.
    fn all_translations_for(&self, language: &str) -> Result<TranslationSet>;

    /// Write a key of a (possibly namespaced) group.
    fn add_group_translation(
        &mut self,
        language: &str,
        group: &str,
        key: &str,
        value: &str,
    ) -> Result<KeyAction>;

    /// Write a single (ungrouped) key. `group` is `"single"` or
    /// `"{namespace}::single"`.
    fn add_single_translation(
        &mut self,
        language: &str,
        group: &str,
        key: &str,
        value: &str,
    ) -> Result<KeyAction>;
}
