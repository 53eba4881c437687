//! Model Context Protocol (MCP) server implementation.
//!
//! Exposes langfill to AI assistants over stdio. Machine translation is not
//! offered as a tool; agents translate themselves and write results with
//! `add_translation`.
//!
//! ## Module Structure
//!
//! - `helpers`: Project loading, pagination and result encoding
//! - `server`: Main MCP server implementation
//! - `types`: MCP-specific type definitions

mod helpers;
mod server;
pub mod types;

pub use server::{LangfillMcpServer, run_server};
