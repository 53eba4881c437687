use indexmap::IndexMap;

use crate::core::{
    SavedMissing, TranslateSummary,
    data::{KeyPath, MergedView, TranslationSet},
    store::KeyAction,
};

#[derive(Debug)]
pub enum CommandSummary {
    Missing(MissingSummary),
    Sync(SyncSummary),
    Translate(TranslateRunSummary),
    List(ListSummary),
    Add(AddSummary),
    Languages(LanguagesSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct MissingSummary {
    /// Missing keys per language, in iteration order.
    pub languages: Vec<(String, TranslationSet)>,
    pub include_empty: bool,
}

#[derive(Debug)]
pub struct SyncSummary {
    pub languages: Vec<SavedMissing>,
    pub is_apply: bool,
}

#[derive(Debug)]
pub struct TranslateRunSummary {
    pub languages: Vec<TranslateSummary>,
}

#[derive(Debug)]
pub struct ListSummary {
    pub view: MergedView,
    pub filter: Option<String>,
}

#[derive(Debug)]
pub struct AddSummary {
    pub language: String,
    pub path: KeyPath,
    pub action: KeyAction,
}

#[derive(Debug)]
pub struct LanguagesSummary {
    pub source_language: String,
    pub languages: IndexMap<String, String>,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running langfill commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    /// Missing keys for `missing`, failed keys for `translate`.
    pub finding_count: usize,
    /// If true, exit code 1 should be returned when finding_count > 0.
    /// If false, always exit 0 (used for dry-run commands that report work to do).
    pub exit_on_findings: bool,
}

impl CommandResult {
    /// A result that never fails the process.
    pub fn info(summary: CommandSummary) -> Self {
        Self {
            summary,
            finding_count: 0,
            exit_on_findings: false,
        }
    }
}
