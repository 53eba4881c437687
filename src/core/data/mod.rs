//! Core data types shared by the differ, merger and orchestrator.
//!
//! ## Module Structure
//!
//! - `translation`: Translation sets keyed by type → group → key
//! - `merged`: Merged views pairing source-language and target-language values

pub mod merged;
pub mod translation;

pub use merged::{LanguageValues, MergedEntry, MergedView};
pub use translation::{
    Entry, GroupMap, KeyMap, KeyPath, SINGLE_GROUP, TranslationSet, TranslationType, TypeMap,
};
