use anyhow::Result;
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt,
    handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};

use crate::config::load_config;
use crate::core::NewTranslation;
use crate::core::store::TranslationStore;

use super::helpers::{internal_error, json_result, open_project, paginate};
use super::types::{
    AddTranslationParams, AddTranslationResult, ConfigDto, ConfigValues, FindMissingParams,
    GetConfigParams, GetLanguagesParams, LanguageCount, LanguageInfo, LanguagesResult,
    ListTranslationsParams, ListTranslationsResult, MissingItem, MissingResult, SaveMissingParams,
    SaveMissingResult, SavedLanguage, TranslationItem,
};

#[derive(Clone)]
pub struct LangfillMcpServer {
    tool_router: ToolRouter<Self>,
}

impl Default for LangfillMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl LangfillMcpServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    /// Get the current langfill configuration
    #[tool(description = "Get the current langfill configuration.")]
    pub async fn get_config(
        &self,
        params: Parameters<GetConfigParams>,
    ) -> Result<CallToolResult, McpError> {
        let path = std::path::Path::new(&params.0.project_root_path);

        let result = load_config(path)
            .map_err(|e| internal_error("Failed to load config", e))?;

        json_result(&ConfigDto {
            from_file: result.from_file,
            config: ConfigValues::from(result.config),
        })
    }

    /// Get configured languages and their key counts
    #[tool(description = "Get configured languages, the source language and key counts.")]
    pub async fn get_languages(
        &self,
        params: Parameters<GetLanguagesParams>,
    ) -> Result<CallToolResult, McpError> {
        let project = open_project(&params.0.project_root_path)?;
        let manager = project
            .manager()
            .map_err(|e| internal_error("Failed to initialize", e))?;

        let registry = manager
            .languages(None)
            .map_err(|e| internal_error("Failed to read languages", e))?;

        let mut languages = Vec::new();
        for (language, name) in registry {
            let key_count = manager
                .store()
                .all_translations_for(&language)
                .map_err(|e| internal_error("Failed to read translations", e))?
                .len();
            languages.push(LanguageInfo {
                language,
                name,
                key_count,
            });
        }

        json_result(&LanguagesResult {
            lang_path: project.lang_dir().to_string_lossy().to_string(),
            source_language: manager.source_language().to_string(),
            languages,
        })
    }

    /// Find keys used in code but missing from language files
    #[tool(
        description = "Find translation keys used in source code but missing from language files. Returns paginated list."
    )]
    pub async fn find_missing(
        &self,
        params: Parameters<FindMissingParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let include_empty = params.include_empty.unwrap_or(false);
        let project = open_project(&params.project_root_path)?;
        let manager = project
            .manager()
            .map_err(|e| internal_error("Failed to initialize", e))?;

        let languages = manager
            .languages(params.language.as_deref())
            .map_err(|e| internal_error("Failed to read languages", e))?;

        let mut counts = Vec::new();
        let mut all_items = Vec::new();
        for language in languages.into_keys() {
            let missing = if include_empty {
                manager.find_untranslated(&language)
            } else {
                manager.find_missing_translations(&language)
            }
            .map_err(|e| internal_error("Scan failed", e))?;

            counts.push(LanguageCount {
                language: language.clone(),
                count: missing.len(),
            });
            all_items.extend(missing.iter().map(|entry| MissingItem {
                language: language.clone(),
                kind: entry.kind.to_string(),
                group: entry.group.to_string(),
                key: entry.key.to_string(),
                value: entry.value.to_string(),
            }));
        }

        let total_count = all_items.len();
        let (items, pagination) = paginate(all_items, params.offset, params.limit);

        json_result(&MissingResult {
            total_count,
            languages: counts,
            items,
            pagination,
        })
    }

    /// List source-language values next to a language's values
    #[tool(
        description = "List source-language translations next to the given language's values, optionally filtered by text. Returns paginated list."
    )]
    pub async fn list_translations(
        &self,
        params: Parameters<ListTranslationsParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let project = open_project(&params.project_root_path)?;
        let manager = project
            .manager()
            .map_err(|e| internal_error("Failed to initialize", e))?;

        let view = manager
            .filter_translations_for(&params.language, params.filter.as_deref())
            .map_err(|e| internal_error("Failed to read translations", e))?;

        let all_items: Vec<TranslationItem> = view
            .entries()
            .map(|entry| TranslationItem {
                kind: entry.kind.to_string(),
                group: entry.group.to_string(),
                key: entry.key.to_string(),
                source: entry.source.map(str::to_string),
                target: entry.target.map(str::to_string),
            })
            .collect();

        let total_count = all_items.len();
        let (items, pagination) = paginate(all_items, params.offset, params.limit);

        json_result(&ListTranslationsResult {
            source_language: view.source_language().to_string(),
            language: view.language().to_string(),
            total_count,
            items,
            pagination,
        })
    }

    /// Write missing keys as empty values
    #[tool(
        description = "Add every key used in code but missing from a language as an empty value. Applies to all languages when none is given."
    )]
    pub async fn save_missing(
        &self,
        params: Parameters<SaveMissingParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let project = open_project(&params.project_root_path)?;
        let mut manager = project
            .manager()
            .map_err(|e| internal_error("Failed to initialize", e))?;

        let saved = manager
            .save_missing_translations(params.language.as_deref())
            .map_err(|e| internal_error("Failed to save missing translations", e))?;

        let languages: Vec<SavedLanguage> = saved
            .into_iter()
            .map(|s| SavedLanguage {
                language: s.language,
                keys: s.keys.iter().map(|path| path.to_string()).collect(),
            })
            .collect();

        json_result(&SaveMissingResult {
            total_count: languages.iter().map(|l| l.keys.len()).sum(),
            languages,
        })
    }

    /// Add or update one translation
    #[tool(
        description = "Add or update one translation. Give a group for group translations; omit it for single translations."
    )]
    pub async fn add_translation(
        &self,
        params: Parameters<AddTranslationParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        if params.key.trim().is_empty() {
            return Err(McpError::invalid_params("key cannot be empty", None));
        }

        let project = open_project(&params.project_root_path)?;
        let mut manager = project
            .manager()
            .map_err(|e| internal_error("Failed to initialize", e))?;

        let translation = NewTranslation {
            namespace: params.namespace,
            group: params.group,
            key: params.key,
            value: params.value,
        };
        let action = manager
            .add(&params.language, &translation)
            .map_err(|e| internal_error("Failed to add translation", e))?;

        json_result(&AddTranslationResult {
            language: params.language,
            kind: translation.kind().to_string(),
            group: translation.qualified_group(),
            key: translation.key,
            value: translation.value.unwrap_or_default(),
            action: action.as_str().to_string(),
        })
    }
}

#[tool_handler]
impl ServerHandler for LangfillMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Langfill MCP helps AI agents fill missing translations in projects with JSON language files.\n\n\
                 Available tools:\n\
                 1. get_config - Get project configuration\n\
                 2. get_languages - Get configured languages and their key counts\n\
                 3. find_missing - Get keys used in code but missing from a language (paginated)\n\
                 4. save_missing - Add missing keys as empty values\n\
                 5. list_translations - Get source values next to a language's values (paginated)\n\
                 6. add_translation - Write one translated value\n\n\
                 Recommended Workflow:\n\
                 1. Use find_missing to see what each language lacks\n\
                 2. Run save_missing so every key exists in every language\n\
                 3. Use list_translations and translate values whose target is empty or null\n\
                 4. Write each result with add_translation, keeping :placeholders and | variants intact"
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

/// Entry point for MCP server
pub fn run_server() -> Result<()> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let service = LangfillMcpServer::new();
            let server = service.serve(rmcp::transport::stdio()).await?;
            server.waiting().await?;
            Ok(())
        })
}
