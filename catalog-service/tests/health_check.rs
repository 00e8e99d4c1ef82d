mod common;

use common::TestApp;
use reqwest::{Client, StatusCode};
use serde_json::json;

#[tokio::test]
async fn root_reports_liveness() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .get(&format!("{}/", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["message"], "Perfume Shop API is running");
}

#[tokio::test]
async fn diagnostic_endpoint_answers_200_without_a_store() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .get(&format!("{}/test", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["backend"], "✅ Running");
    assert!(body["database"].is_string());
    assert!(body["database_url"].is_string());
    assert!(body["database_name"].is_string());
    assert!(body["connection_status"].is_string());
    assert!(body["collections"].is_array());
}

#[tokio::test]
#[ignore = "requires a running MongoDB instance"]
async fn diagnostic_endpoint_reports_a_working_store() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    // Insert once so the perfume collection exists in the fresh database.
    let created = client
        .post(&format!("{}/api/perfumes", app.address))
        .json(&json!({ "name": "Probe", "brand": "House", "price": 1.0 }))
        .send()
        .await
        .expect("Failed to execute request");
    assert!(created.status().is_success());

    let body: serde_json::Value = client
        .get(&format!("{}/test", app.address))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse JSON");

    assert_eq!(body["connection_status"], "Connected");
    assert_eq!(body["database"], "✅ Connected & Working");

    let collections = body["collections"]
        .as_array()
        .expect("collections should be an array");
    assert!(collections.iter().any(|name| name == "perfume"));

    app.cleanup().await;
}
