//! Shared helpers for brainnet-axum integration tests.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use brainnet_axum::{AxumContext, CorsConfig, Variant, bootstrap, create_router};
use brainnet_core::{ServiceRegistry, Settings};
use http_body_util::BodyExt;
use tower::ServiceExt;

/// CORS origin allowed by the default settings.
pub const TEST_CORS_ORIGIN: &str = "http://localhost:3000";

/// Router over a fully bootstrapped context.
pub fn app(variant: Variant) -> Router {
    let ctx = bootstrap(Settings::default()).expect("bootstrap with default settings");
    create_router(ctx, variant, &CorsConfig::AllowAll).expect("router builds")
}

/// Router whose registry was never filled.
pub fn app_without_state(variant: Variant) -> Router {
    let ctx = AxumContext::new(ServiceRegistry::new(), Settings::default());
    create_router(ctx, variant, &CorsConfig::AllowAll).expect("router builds")
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<&str>) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();

    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn json_body(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
