//! Langfill - missing translation finder and machine-translation gap filler
//!
//! Langfill scans application code for translation keys, reports the keys a
//! language is missing, stubs them into the language files and fills empty
//! values through a machine-translation service without breaking `:name`
//! placeholders or `one|many` pluralization variants.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Differ, placeholder codec, translator and orchestrator
//! - `mcp`: Model Context Protocol server implementation
//! - `project`: Wires a project directory into a translation manager

pub mod cli;
pub mod config;
pub mod core;
pub mod mcp;
pub mod project;
