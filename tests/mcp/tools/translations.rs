use langfill::mcp::{LangfillMcpServer, types::*};
use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;

use crate::{extract_tool_result_json, fixture_with_gaps};

fn list_params(root: String, filter: Option<&str>) -> ListTranslationsParams {
    ListTranslationsParams {
        project_root_path: root,
        language: "fr".to_string(),
        filter: filter.map(str::to_string),
        limit: None,
        offset: None,
    }
}

fn add_params(root: String, group: Option<&str>, key: &str, value: &str) -> AddTranslationParams {
    AddTranslationParams {
        project_root_path: root,
        language: "fr".to_string(),
        key: key.to_string(),
        group: group.map(str::to_string),
        namespace: None,
        value: Some(value.to_string()),
    }
}

#[tokio::test]
async fn test_list_translations_pairs_source_and_target() {
    let fixture = fixture_with_gaps().unwrap();
    let server = LangfillMcpServer::new();

    let result = server
        .list_translations(Parameters(list_params(fixture.root(), None)))
        .await
        .unwrap();
    let json = extract_tool_result_json(&result);

    assert_eq!(json["sourceLanguage"], "en");
    assert_eq!(json["language"], "fr");
    assert_eq!(json["totalCount"], 3);

    let items = json["items"].as_array().unwrap();
    let welcome = items.iter().find(|i| i["key"] == "welcome").unwrap();
    assert_eq!(welcome["source"], "Hello :name");
    assert_eq!(welcome["target"], "Bonjour :name");

    let bye = items.iter().find(|i| i["key"] == "bye").unwrap();
    assert_eq!(bye["source"], "Goodbye");
    assert!(bye["target"].is_null());
}

#[tokio::test]
async fn test_list_translations_filter() {
    let fixture = fixture_with_gaps().unwrap();
    let server = LangfillMcpServer::new();

    let result = server
        .list_translations(Parameters(list_params(fixture.root(), Some("BONJOUR"))))
        .await
        .unwrap();
    let json = extract_tool_result_json(&result);

    assert_eq!(json["totalCount"], 1);
    assert_eq!(json["items"][0]["group"], "messages");
    assert_eq!(json["items"][0]["key"], "welcome");
}

#[tokio::test]
async fn test_add_translation_group() {
    let fixture = fixture_with_gaps().unwrap();
    let server = LangfillMcpServer::new();

    let result = server
        .add_translation(Parameters(add_params(
            fixture.root(),
            Some("messages"),
            "bye",
            "Au revoir",
        )))
        .await
        .unwrap();
    let json = extract_tool_result_json(&result);

    assert_eq!(
        json,
        json!({
            "language": "fr",
            "type": "group",
            "group": "messages",
            "key": "bye",
            "value": "Au revoir",
            "action": "added"
        })
    );
    assert_eq!(
        fixture.read_lang_file("fr/messages.json").unwrap(),
        json!({"welcome": "Bonjour :name", "bye": "Au revoir"})
    );
}

#[tokio::test]
async fn test_add_translation_updates_single() {
    let fixture = fixture_with_gaps().unwrap();
    fixture
        .write_lang_file("fr.json", &json!({"Log in": ""}))
        .unwrap();
    let server = LangfillMcpServer::new();

    let result = server
        .add_translation(Parameters(add_params(
            fixture.root(),
            None,
            "Log in",
            "Connexion",
        )))
        .await
        .unwrap();
    let json = extract_tool_result_json(&result);

    assert_eq!(json["type"], "single");
    assert_eq!(json["group"], "single");
    assert_eq!(json["action"], "updated");
    assert_eq!(
        fixture.read_lang_file("fr.json").unwrap(),
        json!({"Log in": "Connexion"})
    );
}

#[tokio::test]
async fn test_add_translation_rejects_empty_key() {
    let fixture = fixture_with_gaps().unwrap();
    let server = LangfillMcpServer::new();

    let result = server
        .add_translation(Parameters(add_params(fixture.root(), None, "  ", "x")))
        .await;

    assert!(result.is_err());
    assert!(!fixture.root_path().join("lang/fr.json").exists());
}
