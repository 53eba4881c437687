use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::CliTest;

#[test]
fn test_languages_lists_registry() -> Result<()> {
    let test = CliTest::laravel()?;
    test.write_file("lang/vendor/billing/de.json", "{}")?;

    let output = test.run(&["languages"])?;

    assert_eq!(output.code, 0);
    assert_eq!(output.stdout, "en  (source)\nfr\n");

    Ok(())
}

#[test]
fn test_languages_source_override() -> Result<()> {
    let test = CliTest::laravel()?;

    let output = test.run(&["languages", "--source-language", "fr"])?;

    assert_eq!(output.stdout, "en\nfr  (source)\n");

    Ok(())
}
