use anyhow::{Context, Result};
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::CliTest;

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["init"])?;

    assert_eq!(output.code, 0);
    assert_eq!(output.stdout, "✓ Created .langfillrc.json\n");

    let content = test.read_file(".langfillrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["sourceLanguage"], "en");
    assert_eq!(parsed["langPath"], "./lang");
    assert_eq!(parsed["placeholderStyles"]["new"], "letters");
    assert!(content.contains("\n  \"includes\""), "2-space indentation");

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".langfillrc.json", "{}")?;

    let output = test.run(&["init"])?;

    assert_eq!(output.code, 2);
    assert_eq!(output.stderr, "Error: .langfillrc.json already exists\n");
    assert_eq!(test.read_file(".langfillrc.json")?, "{}");

    Ok(())
}
