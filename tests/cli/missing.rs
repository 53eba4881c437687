use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::CliTest;

#[test]
fn test_missing_reports_keys_per_language() -> Result<()> {
    let test = CliTest::laravel()?;

    let output = test.run(&["missing"])?;

    assert_eq!(output.code, 1);
    assert_eq!(
        output.stdout,
        "fr: 2 missing key(s)\n  messages.welcome\n  Log in  (single)\n\
         ✘ 2 missing key(s) in 1 language(s).\n\
         Run langfill sync --apply to add them as empty values.\n"
    );

    Ok(())
}

#[test]
fn test_missing_single_language_without_gaps() -> Result<()> {
    let test = CliTest::laravel()?;

    let output = test.run(&["missing", "en"])?;

    assert_eq!(output.code, 0);
    assert_eq!(output.stdout, "✓ No missing translations\n");

    Ok(())
}

#[test]
fn test_missing_ignores_empty_values_unless_asked() -> Result<()> {
    let test = CliTest::laravel()?;
    test.write_file("lang/fr/messages.json", r#"{"welcome": ""}"#)?;
    test.write_file("lang/fr.json", r#"{"Log in": "Connexion"}"#)?;

    let output = test.run(&["missing", "fr"])?;
    assert_eq!(output.code, 0);

    let output = test.run(&["missing", "fr", "--include-empty"])?;
    assert_eq!(output.code, 1);
    assert!(output.stdout.contains("fr: 1 missing key(s)\n  messages.welcome\n"));

    Ok(())
}

#[test]
fn test_missing_invalid_language_file_is_an_error() -> Result<()> {
    let test = CliTest::laravel()?;
    test.write_file("lang/fr/messages.json", "{ broken")?;

    let output = test.run(&["missing", "fr"])?;

    assert_eq!(output.code, 2);
    assert!(output.stderr.contains("Failed to parse JSON file"));

    Ok(())
}

#[test]
fn test_missing_uses_configured_paths() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".langfillrc.json",
        r#"{ "langPath": "resources/lang", "includes": ["src"] }"#,
    )?;
    test.write_file("src/page.js", "trans('auth.failed')")?;
    test.write_file("resources/lang/de/auth.json", "{}")?;

    let output = test.run(&["missing"])?;

    assert_eq!(output.code, 1);
    assert!(output.stdout.starts_with("de: 1 missing key(s)\n  auth.failed\n"));

    Ok(())
}
