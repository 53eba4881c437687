use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// ============================================================
// Tool Parameters
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetConfigParams {
    /// Absolute path of the project root
    pub project_root_path: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetLanguagesParams {
    /// Absolute path of the project root
    pub project_root_path: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FindMissingParams {
    /// Absolute path of the project root
    pub project_root_path: String,
    /// Language to check (default: every language)
    pub language: Option<String>,
    /// Also report keys that exist with an empty value
    pub include_empty: Option<bool>,
    /// Max items to return (default 50, max 100)
    pub limit: Option<u32>,
    /// Items to skip
    pub offset: Option<u32>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListTranslationsParams {
    /// Absolute path of the project root
    pub project_root_path: String,
    /// Language to show next to the source language
    pub language: String,
    /// Case-insensitive text matched against group, key and both values
    pub filter: Option<String>,
    /// Max items to return (default 50, max 100)
    pub limit: Option<u32>,
    /// Items to skip
    pub offset: Option<u32>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaveMissingParams {
    /// Absolute path of the project root
    pub project_root_path: String,
    /// Language to sync (default: every language)
    pub language: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddTranslationParams {
    /// Absolute path of the project root
    pub project_root_path: String,
    pub language: String,
    pub key: String,
    /// Group (file) name; omit for a single translation
    pub group: Option<String>,
    /// Package namespace of the group
    pub namespace: Option<String>,
    /// Translated value (default: empty)
    pub value: Option<String>,
}

// ============================================================
// Config Types (get_config)
// ============================================================

/// Configuration DTO for MCP
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDto {
    /// True if config was loaded from a file, false if using defaults
    pub from_file: bool,
    pub config: ConfigValues,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigValues {
    pub source_language: String,
    pub lang_path: String,
    pub source_root: String,
    pub includes: Vec<String>,
    pub ignores: Vec<String>,
    pub extensions: Vec<String>,
    pub translation_methods: Vec<String>,
    pub placeholder_styles: BTreeMap<String, String>,
    pub translator_endpoint: String,
}

impl From<crate::config::Config> for ConfigValues {
    fn from(c: crate::config::Config) -> Self {
        let placeholder_styles = c
            .placeholder_styles
            .iter()
            .map(|(language, style)| (language.clone(), style.as_str().to_string()))
            .collect();
        Self {
            source_language: c.source_language,
            lang_path: c.lang_path,
            source_root: c.source_root,
            includes: c.includes,
            ignores: c.ignores,
            extensions: c.extensions,
            translation_methods: c.translation_methods,
            placeholder_styles,
            translator_endpoint: c.translator.endpoint,
        }
    }
}

// ============================================================
// Languages Types (get_languages)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LanguagesResult {
    pub lang_path: String,
    pub source_language: String,
    pub languages: Vec<LanguageInfo>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LanguageInfo {
    pub language: String,
    pub name: String,
    pub key_count: usize,
}

// ============================================================
// Missing Types (find_missing)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MissingResult {
    pub total_count: usize,
    /// Missing count per language, including languages with none
    pub languages: Vec<LanguageCount>,
    pub items: Vec<MissingItem>,
    pub pagination: Pagination,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LanguageCount {
    pub language: String,
    pub count: usize,
}

/// A key used in code that a language lacks
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MissingItem {
    pub language: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub group: String,
    pub key: String,
    /// Default text found in code, empty for group keys
    pub value: String,
}

// ============================================================
// List Types (list_translations)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListTranslationsResult {
    pub source_language: String,
    pub language: String,
    pub total_count: usize,
    pub items: Vec<TranslationItem>,
    pub pagination: Pagination,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TranslationItem {
    #[serde(rename = "type")]
    pub kind: String,
    pub group: String,
    pub key: String,
    pub source: Option<String>,
    /// Null when the language has no entry for the key
    pub target: Option<String>,
}

// ============================================================
// Save Types (save_missing)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaveMissingResult {
    pub total_count: usize,
    pub languages: Vec<SavedLanguage>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SavedLanguage {
    pub language: String,
    /// Keys written as empty values, `group.key` or the single key
    pub keys: Vec<String>,
}

// ============================================================
// Add Types (add_translation)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddTranslationResult {
    pub language: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub group: String,
    pub key: String,
    pub value: String,
    /// "added" or "updated"
    pub action: String,
}

// ============================================================
// Common Types
// ============================================================

/// Pagination information
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub offset: usize,
    pub limit: usize,
    pub has_more: bool,
}
