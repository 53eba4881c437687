use langfill::mcp::{LangfillMcpServer, types::*};
use rmcp::handler::server::wrapper::Parameters;
use serde_json::{Value, json};

use crate::{extract_tool_result_json, fixture_with_gaps};

fn missing_params(root: String) -> FindMissingParams {
    FindMissingParams {
        project_root_path: root,
        language: None,
        include_empty: None,
        limit: None,
        offset: None,
    }
}

fn item_paths(json: &Value) -> Vec<String> {
    let mut paths: Vec<String> = json["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| {
            format!(
                "{}:{}:{}.{}",
                item["language"].as_str().unwrap(),
                item["type"].as_str().unwrap(),
                item["group"].as_str().unwrap(),
                item["key"].as_str().unwrap()
            )
        })
        .collect();
    paths.sort();
    paths
}

#[tokio::test]
async fn test_find_missing_all_languages() {
    let fixture = fixture_with_gaps().unwrap();
    let server = LangfillMcpServer::new();

    let result = server
        .find_missing(Parameters(missing_params(fixture.root())))
        .await
        .unwrap();
    let json = extract_tool_result_json(&result);

    assert_eq!(json["totalCount"], 2);
    assert_eq!(
        json["languages"],
        json!([
            {"language": "en", "count": 0},
            {"language": "fr", "count": 2}
        ])
    );
    assert_eq!(
        item_paths(&json),
        vec!["fr:group:messages.bye", "fr:single:single.Log in"]
    );
    assert_eq!(json["pagination"]["hasMore"], false);
}

#[tokio::test]
async fn test_find_missing_single_value_is_the_key() {
    let fixture = fixture_with_gaps().unwrap();
    let server = LangfillMcpServer::new();

    let mut params = missing_params(fixture.root());
    params.language = Some("fr".to_string());
    let result = server.find_missing(Parameters(params)).await.unwrap();
    let json = extract_tool_result_json(&result);

    let single = json["items"]
        .as_array()
        .unwrap()
        .iter()
        .find(|item| item["type"] == "single")
        .unwrap();
    assert_eq!(single["value"], "Log in");
}

#[tokio::test]
async fn test_find_missing_include_empty() {
    let fixture = fixture_with_gaps().unwrap();
    fixture
        .write_lang_file(
            "fr/messages.json",
            &json!({"welcome": "", "bye": "Au revoir"}),
        )
        .unwrap();
    fixture
        .write_lang_file("fr.json", &json!({"Log in": "Connexion"}))
        .unwrap();
    let server = LangfillMcpServer::new();

    let mut params = missing_params(fixture.root());
    params.language = Some("fr".to_string());
    let result = server.find_missing(Parameters(params)).await.unwrap();
    let json = extract_tool_result_json(&result);
    assert_eq!(json["totalCount"], 0);

    let mut params = missing_params(fixture.root());
    params.language = Some("fr".to_string());
    params.include_empty = Some(true);
    let result = server.find_missing(Parameters(params)).await.unwrap();
    let json = extract_tool_result_json(&result);
    assert_eq!(json["totalCount"], 1);
    assert_eq!(item_paths(&json), vec!["fr:group:messages.welcome"]);
}

#[tokio::test]
async fn test_find_missing_pagination() {
    let fixture = fixture_with_gaps().unwrap();
    let server = LangfillMcpServer::new();

    let mut params = missing_params(fixture.root());
    params.limit = Some(1);
    let result = server.find_missing(Parameters(params)).await.unwrap();
    let json = extract_tool_result_json(&result);

    assert_eq!(json["totalCount"], 2);
    assert_eq!(json["items"].as_array().unwrap().len(), 1);
    assert_eq!(json["pagination"]["limit"], 1);
    assert_eq!(json["pagination"]["hasMore"], true);

    let mut params = missing_params(fixture.root());
    params.limit = Some(1);
    params.offset = Some(1);
    let result = server.find_missing(Parameters(params)).await.unwrap();
    let json = extract_tool_result_json(&result);

    assert_eq!(json["items"].as_array().unwrap().len(), 1);
    assert_eq!(json["pagination"]["hasMore"], false);
}

#[tokio::test]
async fn test_save_missing_writes_empty_values() {
    let fixture = fixture_with_gaps().unwrap();
    let server = LangfillMcpServer::new();

    let result = server
        .save_missing(Parameters(SaveMissingParams {
            project_root_path: fixture.root(),
            language: Some("fr".to_string()),
        }))
        .await
        .unwrap();
    let json = extract_tool_result_json(&result);

    assert_eq!(json["totalCount"], 2);
    assert_eq!(json["languages"][0]["language"], "fr");

    assert_eq!(
        fixture.read_lang_file("fr/messages.json").unwrap(),
        json!({"welcome": "Bonjour :name", "bye": ""})
    );
    assert_eq!(
        fixture.read_lang_file("fr.json").unwrap(),
        json!({"Log in": ""})
    );

    // Second run finds nothing left to add.
    let result = server
        .save_missing(Parameters(SaveMissingParams {
            project_root_path: fixture.root(),
            language: Some("fr".to_string()),
        }))
        .await
        .unwrap();
    let json = extract_tool_result_json(&result);
    assert_eq!(json["totalCount"], 0);
}
