use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::CliTest;

#[test]
fn test_list_pairs_source_and_target() -> Result<()> {
    let test = CliTest::laravel()?;
    test.write_file("lang/fr/messages.json", r#"{"welcome": "Bonjour :name"}"#)?;

    let output = test.run(&["list", "fr"])?;

    assert_eq!(output.code, 0);
    assert_eq!(
        output.stdout,
        "GROUP     KEY      EN           FR\n\
         single    Log in   Log in       -\n\
         messages  welcome  Hello :name  Bonjour :name\n\
         2 key(s) in 2 group(s).\n"
    );

    Ok(())
}

#[test]
fn test_list_filter() -> Result<()> {
    let test = CliTest::laravel()?;

    let output = test.run(&["list", "fr", "--filter", "HELLO"])?;
    assert!(output.stdout.contains("messages  welcome  Hello :name  -\n"));
    assert!(output.stdout.contains("1 key(s) in 1 group(s)."));

    let output = test.run(&["list", "fr", "--filter", "nothing"])?;
    assert_eq!(output.stdout, "No translations match \"nothing\"\n");

    Ok(())
}
