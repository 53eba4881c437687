//! A project directory wired into a [`TranslationManager`].
//!
//! Relative `langPath` and `sourceRoot` values are resolved against the
//! project root.

use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::debug;

use crate::{
    config::{Config, load_config},
    core::{TranslationManager, provider::GoogleTranslate, scanner::SourceScanner, store::FileStore},
};

/// Values given on the command line win over the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub source_language: Option<String>,
    pub source_root: Option<PathBuf>,
    pub lang_path: Option<PathBuf>,
}

pub type ProjectManager = TranslationManager<FileStore, SourceScanner>;

pub struct Project {
    root: PathBuf,
    config: Config,
    from_file: bool,
}

impl Project {
    pub fn load(root: &Path, overrides: &Overrides) -> Result<Self> {
        let loaded = load_config(root)?;
        let mut config = loaded.config;

        if let Some(language) = &overrides.source_language {
            config.source_language = language.clone();
        }
        if let Some(source_root) = &overrides.source_root {
            config.source_root = source_root.to_string_lossy().into_owned();
        }
        if let Some(lang_path) = &overrides.lang_path {
            config.lang_path = lang_path.to_string_lossy().into_owned();
        }
        config.validate()?;

        debug!(
            root = %root.display(),
            from_file = loaded.from_file,
            source_language = config.source_language.as_str(),
            "loaded project"
        );

        Ok(Self {
            root: root.to_path_buf(),
            config,
            from_file: loaded.from_file,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// True when a config file was found, false when defaults are used.
    pub fn from_file(&self) -> bool {
        self.from_file
    }

    pub fn lang_dir(&self) -> PathBuf {
        self.root.join(&self.config.lang_path)
    }

    pub fn source_dir(&self) -> PathBuf {
        self.root.join(&self.config.source_root)
    }

    pub fn manager(&self) -> Result<ProjectManager> {
        let store = FileStore::new(self.lang_dir());
        let scanner = SourceScanner::new(self.source_dir(), &self.config)?;
        Ok(
            TranslationManager::new(store, scanner, self.config.source_language.as_str())
                .with_placeholder_styles(self.config.placeholder_styles.clone()),
        )
    }

    pub fn provider(&self) -> GoogleTranslate {
        GoogleTranslate::new(self.config.translator.endpoint.as_str())
    }
}
