use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::CliTest;

#[test]
fn test_add_group_translation() -> Result<()> {
    let test = CliTest::laravel()?;

    let output = test.run(&[
        "add", "fr", "--group", "messages", "--key", "nav.home", "--value", "Accueil",
    ])?;

    assert_eq!(output.code, 0);
    assert_eq!(output.stdout, "✓ Added \"messages.nav.home\" for fr\n");
    assert_eq!(
        test.read_json("lang/fr/messages.json")?,
        json!({"nav": {"home": "Accueil"}})
    );

    Ok(())
}

#[test]
fn test_add_namespaced_group() -> Result<()> {
    let test = CliTest::laravel()?;

    test.run(&[
        "add",
        "fr",
        "--namespace",
        "billing",
        "--group",
        "invoices",
        "--key",
        "title",
        "--value",
        "Factures",
    ])?;

    assert_eq!(
        test.read_json("lang/vendor/billing/fr/invoices.json")?,
        json!({"title": "Factures"})
    );

    Ok(())
}

#[test]
fn test_add_single_translation_updates() -> Result<()> {
    let test = CliTest::laravel()?;
    test.write_file("lang/fr.json", r#"{"Log in": ""}"#)?;

    let output = test.run(&["add", "fr", "--key", "Log in", "--value", "Connexion"])?;

    assert_eq!(output.stdout, "✓ Updated \"Log in\" for fr\n");
    assert_eq!(test.read_json("lang/fr.json")?, json!({"Log in": "Connexion"}));

    Ok(())
}
