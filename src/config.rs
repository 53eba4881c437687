use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::core::{placeholder::PlaceholderStyles, provider::DEFAULT_ENDPOINT};

pub const CONFIG_FILE_NAME: &str = ".langfillrc.json";

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_source_language")]
    pub source_language: String,
    #[serde(default = "default_lang_path")]
    pub lang_path: String,
    #[serde(default = "default_source_root")]
    pub source_root: String,
    #[serde(default = "default_includes")]
    pub includes: Vec<String>,
    #[serde(default)]
    pub ignores: Vec<String>,
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    #[serde(default = "default_translation_methods")]
    pub translation_methods: Vec<String>,
    #[serde(default)]
    pub placeholder_styles: PlaceholderStyles,
    #[serde(default)]
    pub translator: TranslatorConfig,
}

/// Settings for the external machine-translation service.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslatorConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
        }
    }
}

fn default_source_language() -> String {
    "en".to_string()
}

fn default_lang_path() -> String {
    "./lang".to_string()
}

fn default_source_root() -> String {
    "./".to_string()
}

fn default_includes() -> Vec<String> {
    ["app", "resources", "routes"].map(String::from).to_vec()
}

fn default_extensions() -> Vec<String> {
    ["php", "js", "ts", "jsx", "tsx", "vue"]
        .map(String::from)
        .to_vec()
}

fn default_translation_methods() -> Vec<String> {
    [
        "trans",
        "trans_choice",
        "__",
        "@lang",
        "Lang::get",
        "Lang::choice",
    ]
    .map(String::from)
    .to_vec()
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_language: default_source_language(),
            lang_path: default_lang_path(),
            source_root: default_source_root(),
            includes: default_includes(),
            ignores: Vec::new(),
            extensions: default_extensions(),
            translation_methods: default_translation_methods(),
            placeholder_styles: PlaceholderStyles::default(),
            translator: TranslatorConfig::default(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Rejects invalid glob patterns in `ignores` or `includes`, an empty
    /// source language and an empty method list.
    pub fn validate(&self) -> Result<()> {
        if self.source_language.trim().is_empty() {
            bail!("'sourceLanguage' cannot be empty");
        }

        if self.translation_methods.is_empty() {
            bail!("'translationMethods' must list at least one method");
        }

        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        // Patterns without wildcards are literal directory paths.
        for pattern in &self.includes {
            if pattern.contains('*') || pattern.contains('?') {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in 'includes': \"{}\"", pattern)
                })?;
            }
        }

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
