//! Translation gap-filling engine.
//!
//! ## Module Structure
//!
//! - `data`: Translation sets and merged views
//! - `diff`: Keys the code uses that a language lacks
//! - `merge`: Source-language values paired with a target language
//! - `placeholder`: Keeps `:name` placeholders intact through translation
//! - `translator`: Segment-by-segment machine translation
//! - `provider`: External translation services
//! - `scanner`: Finds translation keys in source code
//! - `store`: Reads and writes stored translations
//! - `events`: Notifications for written translations
//! - `manager`: Orchestrates find → save → translate

pub mod data;
pub mod diff;
pub mod events;
pub mod manager;
pub mod merge;
pub mod placeholder;
pub mod provider;
pub mod scanner;
pub mod store;
pub mod translator;

pub use manager::{
    NewTranslation, SavedMissing, TranslateFailure, TranslateMismatch, TranslateSummary,
    TranslationManager,
};
