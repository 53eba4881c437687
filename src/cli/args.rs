//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `missing`: Report keys used in code that a language lacks
//! - `sync`: Stub missing keys as empty values
//! - `translate`: Stub missing keys, then machine-translate empty values
//! - `list`: Show source and target values side by side
//! - `add`: Add or update a single translation
//! - `languages`: List configured languages
//! - `init`: Initialize langfill configuration file
//! - `serve`: Start MCP server for AI integration

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::project::Overrides;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Missing(cmd)) => cmd.common.verbose,
            Some(Command::Sync(cmd)) => cmd.common.verbose,
            Some(Command::Translate(cmd)) => cmd.common.verbose,
            Some(Command::List(cmd)) => cmd.common.verbose,
            Some(Command::Add(cmd)) => cmd.common.verbose,
            Some(Command::Languages(cmd)) => cmd.common.verbose,
            Some(Command::Init) | Some(Command::Serve) | None => false,
        }
    }
}

/// Common arguments shared by all project commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Project root directory
    #[arg(long, default_value = ".")]
    pub path: PathBuf,

    /// Source language (overrides config file)
    #[arg(long)]
    pub source_language: Option<String>,

    /// Source code root directory (overrides config file)
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Language files directory (overrides config file)
    #[arg(long)]
    pub lang_path: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl CommonArgs {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            source_language: self.source_language.clone(),
            source_root: self.source_root.clone(),
            lang_path: self.lang_path.clone(),
        }
    }
}

#[derive(Debug, Args)]
pub struct MissingCommand {
    /// Language to check (default: every language)
    pub language: Option<String>,

    /// Also report keys that exist with an empty value
    #[arg(long)]
    pub include_empty: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct SyncCommand {
    /// Language to sync (default: every language)
    pub language: Option<String>,

    /// Actually write keys (default is dry-run)
    #[arg(long)]
    pub apply: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct TranslateCommand {
    /// Language to translate (default: every language)
    pub language: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct ListCommand {
    /// Language to show next to the source language
    pub language: String,

    /// Only show keys whose group, key or values contain this text
    #[arg(long)]
    pub filter: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct AddCommand {
    /// Language to write to
    pub language: String,

    /// Translation key
    #[arg(long)]
    pub key: String,

    /// Group (file) name; omit for a single translation
    #[arg(long)]
    pub group: Option<String>,

    /// Package namespace of the group
    #[arg(long)]
    pub namespace: Option<String>,

    /// Translated value (default: empty)
    #[arg(long)]
    pub value: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct LanguagesCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Report translation keys used in code but missing from a language
    Missing(MissingCommand),
    /// Add missing keys to language files as empty values
    Sync(SyncCommand),
    /// Fill empty values through machine translation
    Translate(TranslateCommand),
    /// Show source-language values next to a language's values
    List(ListCommand),
    /// Add or update a translation
    Add(AddCommand),
    /// List configured languages
    Languages(LanguagesCommand),
    /// Initialize a new .langfillrc.json configuration file
    Init,
    /// Start MCP server for AI coding agents
    Serve,
}
