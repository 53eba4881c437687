use std::path::Path;

use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content},
};
use serde::Serialize;

use super::types::Pagination;
use crate::project::{Overrides, Project};

pub const DEFAULT_LIMIT: usize = 50;
pub const MAX_LIMIT: usize = 100;

pub fn open_project(project_root_path: &str) -> Result<Project, McpError> {
    Project::load(Path::new(project_root_path), &Overrides::default())
        .map_err(|e| McpError::internal_error(format!("Failed to load config: {:#}", e), None))
}

pub fn internal_error(context: &str, e: anyhow::Error) -> McpError {
    McpError::internal_error(format!("{}: {:#}", context, e), None)
}

pub fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json_str = serde_json::to_string_pretty(value).map_err(|e| {
        McpError::internal_error(format!("JSON serialization failed: {}", e), None)
    })?;

    Ok(CallToolResult::success(vec![Content::text(json_str)]))
}

/// Slice `items` by `offset`/`limit`.
pub fn paginate<T>(
    items: Vec<T>,
    offset: Option<u32>,
    limit: Option<u32>,
) -> (Vec<T>, Pagination) {
    let limit = limit.map(|v| v as usize).unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT);
    let offset = offset.map(|v| v as usize).unwrap_or(0);
    let total_count = items.len();

    let page: Vec<T> = items.into_iter().skip(offset).take(limit).collect();
    let has_more = offset + page.len() < total_count;

    (
        page,
        Pagination {
            offset,
            limit,
            has_more,
        },
    )
}
