//! Integration tests for the model catalog under `/api/v1/models`.

mod common;

use axum::http::{Method, StatusCode};
use brainnet_axum::Variant;

use common::{app, app_without_state, get, json_body, send};

#[tokio::test]
async fn available_lists_the_builtin_catalog() {
    let response = get(&app(Variant::Llm), "/api/v1/models/available").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        ["gpt-3.5-turbo", "gpt-4", "claude-3-sonnet", "text-embedding-ada-002"]
    );
    assert_eq!(body[0]["type"], "chat");
    assert_eq!(body[0]["provider"], "openai");
    assert_eq!(body[0]["is_loaded"], false);
}

#[tokio::test]
async fn load_then_unload_round_trip() {
    let app = app(Variant::Llm);

    let response = send(
        &app,
        Method::POST,
        "/api/v1/models/load",
        Some(r#"{"model_name": "gpt-4"}"#),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["success"], true);
    assert!(body["load_time"].as_f64().unwrap() >= 0.0);

    let loaded = json_body(get(&app, "/api/v1/models/loaded").await).await;
    assert_eq!(loaded.as_array().unwrap().len(), 1);
    assert_eq!(loaded[0]["name"], "gpt-4");

    let info = json_body(get(&app, "/api/v1/models/info/gpt-4").await).await;
    assert_eq!(info["is_loaded"], true);

    let health = json_body(get(&app, "/api/v1/models/health/gpt-4").await).await;
    assert_eq!(health["status"], "loaded");
    assert!(health["last_used"].is_null());
    assert_eq!(health["requests_processed"], 0);

    let stats = json_body(get(&app, "/api/v1/models/stats").await).await;
    assert_eq!(stats["total_models_available"], 4);
    assert_eq!(stats["models_loaded"], 1);
    assert_eq!(stats["memory_usage"], "N/A");
    assert_eq!(stats["total_requests"], 0);
    assert_eq!(stats["average_response_time"], 0.0);

    let response = send(&app, Method::DELETE, "/api/v1/models/unload/gpt-4", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["message"], "Model gpt-4 unloaded successfully");

    let health = json_body(get(&app, "/api/v1/models/health/gpt-4").await).await;
    assert_eq!(health["status"], "not_loaded");
}

#[tokio::test]
async fn loading_unknown_model_is_an_explained_failure() {
    let response = send(
        &app(Variant::Llm),
        Method::POST,
        "/api/v1/models/load",
        Some(r#"{"model_name": "llama-9000", "force_reload": true}"#),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["success"], false);
    assert!(body["message"].as_str().unwrap().contains("llama-9000"));
}

#[tokio::test]
async fn unknown_model_info_is_404() {
    let response = get(&app(Variant::Llm), "/api/v1/models/info/missing").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn preload_and_clear_cache() {
    let app = app(Variant::Llm);

    let response = send(&app, Method::POST, "/api/v1/models/preload", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body.as_array().unwrap().len(), 2);

    let stats = json_body(get(&app, "/api/v1/models/stats").await).await;
    assert_eq!(stats["models_loaded"], 2);

    let response = send(&app, Method::DELETE, "/api/v1/models/cache/clear", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let stats = json_body(get(&app, "/api/v1/models/stats").await).await;
    assert_eq!(stats["models_loaded"], 0);
}

#[tokio::test]
async fn load_request_validation_names_the_field() {
    let app = app(Variant::Llm);
    let cases = [
        (r"{}", "model_name"),
        (r#"{"model_name": ""}"#, "model_name"),
        (r#"{"model_name": "gpt-4", "force_reload": "yes"}"#, "force_reload"),
        (r#"{"model_name": 7}"#, "model_name"),
    ];

    for (payload, field) in cases {
        let response = send(&app, Method::POST, "/api/v1/models/load", Some(payload)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{payload}");

        let body = json_body(response).await;
        assert_eq!(body["type"], "VALIDATION_ERROR", "{payload}");
        assert_eq!(body["metadata"]["field"], field, "{payload}");
    }
}

#[tokio::test]
async fn malformed_json_is_400_without_field() {
    let response = send(
        &app(Variant::Llm),
        Method::POST,
        "/api/v1/models/load",
        Some("{not json"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response).await;
    assert!(body.get("metadata").is_none());
}

#[tokio::test]
async fn body_is_validated_before_services_resolve() {
    let app = app_without_state(Variant::Llm);

    let response = send(&app, Method::POST, "/api/v1/models/load", Some("{}")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = send(
        &app,
        Method::POST,
        "/api/v1/models/load",
        Some(r#"{"model_name": "gpt-4"}"#),
    )
    .await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn null_force_reload_reads_as_false() {
    let app = app(Variant::Llm);
    let body = r#"{"model_name": "claude-3-sonnet", "force_reload": null}"#;

    let first = send(&app, Method::POST, "/api/v1/models/load", Some(body)).await;
    assert_eq!(first.status(), StatusCode::OK);
    assert_eq!(json_body(first).await["success"], true);

    let second = json_body(send(&app, Method::POST, "/api/v1/models/load", Some(body)).await).await;
    assert!(second["message"].as_str().unwrap().contains("already loaded"));
}
