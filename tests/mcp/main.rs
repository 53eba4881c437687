use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde_json::Value;
use tempfile::TempDir;

mod tools;

/// Test fixture for MCP integration tests
///
/// Manages a temporary project with source files under app/ and language
/// files under lang/.
pub struct McpTestFixture {
    _temp_dir: TempDir,
    project_root: PathBuf,
}

impl McpTestFixture {
    /// Create an empty test project
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_root = temp_dir.path().canonicalize()?;

        fs::create_dir_all(project_root.join(".git"))?;
        fs::create_dir_all(project_root.join("lang"))?;

        Ok(Self {
            _temp_dir: temp_dir,
            project_root,
        })
    }

    /// Write a file relative to the project root
    pub fn write_file(&self, relative_path: &str, content: &str) -> Result<()> {
        let path = self.project_root.join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, content)
            .with_context(|| format!("Failed to write file: {}", path.display()))?;
        Ok(())
    }

    /// Write a JSON file under lang/
    pub fn write_lang_file(&self, relative_path: &str, content: &Value) -> Result<()> {
        let json_str = serde_json::to_string_pretty(content)?;
        self.write_file(&format!("lang/{}", relative_path), &format!("{}\n", json_str))
    }

    /// Read a JSON file under lang/
    pub fn read_lang_file(&self, relative_path: &str) -> Result<Value> {
        let path = self.project_root.join("lang").join(relative_path);
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read language file: {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse JSON from: {}", path.display()))
    }

    /// Write a .langfillrc.json config file
    pub fn write_config(&self, content: &Value) -> Result<()> {
        let json_str = serde_json::to_string_pretty(content)?;
        self.write_file(".langfillrc.json", &format!("{}\n", json_str))
    }

    /// Get the project root path as a string (for MCP parameters)
    pub fn root(&self) -> String {
        self.project_root.to_string_lossy().to_string()
    }

    /// Get the project root path as a Path reference
    pub fn root_path(&self) -> &Path {
        &self.project_root
    }
}

// ============================================================================
// Fixture Generators
// ============================================================================

/// Code uses `messages.welcome`, `messages.bye` and `Log in`; English has all
/// of them, French only `messages.welcome`.
pub fn fixture_with_gaps() -> Result<McpTestFixture> {
    let fixture = McpTestFixture::new()?;
    fixture.write_file(
        "app/Http/Controllers/HomeController.php",
        "<?php\n__('messages.welcome'); __('messages.bye'); __('Log in');\n",
    )?;
    fixture.write_lang_file(
        "en/messages.json",
        &serde_json::json!({"welcome": "Hello :name", "bye": "Goodbye"}),
    )?;
    fixture.write_lang_file("en.json", &serde_json::json!({"Log in": "Log in"}))?;
    fixture.write_lang_file(
        "fr/messages.json",
        &serde_json::json!({"welcome": "Bonjour :name"}),
    )?;
    Ok(fixture)
}

/// Extract JSON result from CallToolResult
pub fn extract_tool_result_json(result: &rmcp::model::CallToolResult) -> Value {
    // Check for errors using is_error field
    if let Some(true) = result.is_error {
        panic!("Tool call returned an error: {:?}", result);
    }

    assert!(
        !result.content.is_empty(),
        "Tool result should have content"
    );

    let content_item = &result.content[0];
    let text_content = content_item
        .as_text()
        .expect("Tool result content should be text");

    serde_json::from_str(&text_content.text).expect("Tool result should be valid JSON")
}
