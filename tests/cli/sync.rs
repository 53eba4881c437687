use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::CliTest;

#[test]
fn test_sync_dry_run_writes_nothing() -> Result<()> {
    let test = CliTest::laravel()?;

    let output = test.run(&["sync", "fr"])?;

    assert_eq!(output.code, 0);
    assert_eq!(
        output.stdout,
        "fr:\n  + messages.welcome\n  + Log in  (single)\n\
         Would add 2 empty key(s) in 1 language(s).\n\
         Run with --apply to write these keys.\n"
    );
    assert!(!test.root().join("lang/fr/messages.json").exists());
    assert!(!test.root().join("lang/fr.json").exists());

    Ok(())
}

#[test]
fn test_sync_apply_stubs_missing_keys() -> Result<()> {
    let test = CliTest::laravel()?;

    let output = test.run(&["sync", "fr", "--apply"])?;

    assert_eq!(output.code, 0);
    assert_eq!(
        output.stdout,
        "Added 2 empty key(s) in 1 language(s).\n  - fr: 2 key(s)\n"
    );
    assert_eq!(
        test.read_json("lang/fr/messages.json")?,
        json!({"welcome": ""})
    );
    assert_eq!(test.read_file("lang/fr.json")?, "{\n  \"Log in\": \"\"\n}\n");

    Ok(())
}

#[test]
fn test_sync_apply_is_idempotent() -> Result<()> {
    let test = CliTest::laravel()?;
    test.write_file("lang/fr/messages.json", r#"{"welcome": "Bonjour :name"}"#)?;

    test.run(&["sync", "--apply"])?;
    let first = test.read_file("lang/fr/messages.json")?;
    let output = test.run(&["sync", "--apply"])?;

    assert_eq!(output.stdout, "✓ Every language has every key\n");
    assert_eq!(test.read_file("lang/fr/messages.json")?, first);
    assert_eq!(
        test.read_json("lang/fr/messages.json")?,
        json!({"welcome": "Bonjour :name"})
    );

    Ok(())
}
