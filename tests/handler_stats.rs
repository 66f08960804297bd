mod common;

use serde_json::json;

#[tokio::test]
async fn test_stats_reports_hits_without_counting() {
    let (state, _repo) = common::create_test_state();
    let server = common::create_test_server(state);

    let code = server
        .post("/shorten")
        .json(&json!({ "url": "https://example.com/stats" }))
        .await
        .json::<serde_json::Value>()["short_code"]
        .as_str()
        .unwrap()
        .to_string();

    server.get(&format!("/{code}")).await;

    let response = server.get(&format!("/stats/{code}")).await;
    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["short_code"], code.as_str());
    assert_eq!(json["original_url"], "https://example.com/stats");
    assert_eq!(json["hits"], 1);
    assert!(json["created_at"].is_string());

    let again = server
        .get(&format!("/stats/{code}"))
        .await
        .json::<serde_json::Value>();
    assert_eq!(again["hits"], 1);
}

#[tokio::test]
async fn test_stats_not_found() {
    let (state, _repo) = common::create_test_state();
    let server = common::create_test_server(state);

    let response = server.get("/stats/unknown").await;

    response.assert_status_not_found();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"], "not found");
}
