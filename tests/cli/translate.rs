use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::CliTest;

#[test]
fn test_translate_skips_source_language() -> Result<()> {
    let test = CliTest::laravel()?;

    let output = test.run(&["translate", "en"])?;

    assert_eq!(output.code, 0);
    assert_eq!(output.stdout, "Skipped en (source language)\n");

    Ok(())
}

#[test]
fn test_translate_provider_failure_keeps_stubs() -> Result<()> {
    let test = CliTest::laravel()?;
    // Nothing listens on the discard port.
    test.write_file(
        ".langfillrc.json",
        r#"{ "translator": { "endpoint": "http://127.0.0.1:9/translate" } }"#,
    )?;

    let output = test.run(&["translate", "fr"])?;

    assert_eq!(output.code, 1);
    assert!(output.stdout.contains("Translated 0 key(s) for fr"));
    assert!(output.stdout.contains("error: failed to translate fr \"messages.welcome\""));
    assert!(output.stdout.contains("0 key(s) translated, 2 failed"));
    assert!(output.stderr.contains("translation failed"));
    assert_eq!(
        test.read_json("lang/fr/messages.json")?,
        json!({"welcome": ""})
    );

    Ok(())
}
