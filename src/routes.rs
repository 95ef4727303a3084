//! Router

use axum::{
    Router,
    routing::{get, post},
    middleware as axum_middleware,
};
use tower_http::{
    cors::{CorsLayer, Any},
    trace::TraceLayer,
    compression::CompressionLayer,
    services::ServeDir,
};

use crate::{handlers, middleware, AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    // Simulation routes, served at both `/x` and `/api/x`
    let sim_routes = Router::new()
        .route("/attack", post(handlers::simulation::attack))
        .route("/defense", post(handlers::simulation::defense))
        .route("/status", get(handlers::simulation::status))
        .route("/reset", post(handlers::simulation::reset))
        .route_layer(axum_middleware::from_fn(middleware::headers::no_store));

    // Frontend: `/` -> index.html, anything else -> file in static dir
    let frontend = ServeDir::new(&state.config.static_dir);

    Router::new()
        .route("/health", get(handlers::health::check))
        .merge(sim_routes.clone())
        .nest("/api", sim_routes)
        .fallback_service(frontend)
        .layer(axum_middleware::from_fn(middleware::headers::security_headers))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use serde_json::{json, Value};
    use tokio_test::assert_ok;
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::sim::{FixedDetector, Label, SimulationEngine};

    fn test_state() -> AppState {
        let config = Config {
            static_dir: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("frontend"),
            ..Config::default()
        };
        let engine = SimulationEngine::new(Arc::new(FixedDetector(Label::Family)));
        AppState::with_engine(config, engine)
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let req = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        };

        let res = assert_ok!(app.clone().oneshot(assert_ok!(req)).await);
        let status = res.status();
        let bytes = assert_ok!(to_bytes(res.into_body(), usize::MAX).await);
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    #[tokio::test]
    async fn test_health() {
        let app = create_router(test_state());
        let (status, body) = send(&app, Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
    }

    #[tokio::test]
    async fn test_fake_command_attack() {
        let app = create_router(test_state());
        let (status, body) =
            send(&app, Method::POST, "/attack", Some(json!({ "type": "fake_command" }))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["attack"], "fake_command");
        assert_eq!(body["lockStatus"], "unlocked");
        assert_eq!(body["cameraStatus"], "active");
        assert_eq!(body["outcome"], "succeeded");
        assert_eq!(body["attackRate"], 100);
        assert_eq!(body["defenseRate"], 0);
    }

    #[tokio::test]
    async fn test_api_prefix_shares_state() {
        let state = test_state();
        let app = create_router(state.clone());

        send(&app, Method::POST, "/api/defense", Some(json!({ "type": "model_hardening" }))).await;
        let (status, body) =
            send(&app, Method::POST, "/attack", Some(json!({ "type": "adversarial_image" }))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["outcome"], "blocked");
        assert_eq!(body["defenseRate"], 100);
        assert_eq!(state.engine.status().stats.defense_count, 1);
    }

    #[tokio::test]
    async fn test_adversarial_image_reports_detection() {
        let app = create_router(test_state());
        let (_, body) =
            send(&app, Method::POST, "/api/attack", Some(json!({ "type": "adversarial_image" }))).await;

        assert_eq!(body["cameraStatus"], "spoofed");
        assert_eq!(body["lastDetection"]["actual"], "stranger");
        assert_eq!(body["lastDetection"]["predicted"], "family");
    }

    #[tokio::test]
    async fn test_invalid_attack_type_is_bad_request() {
        let state = test_state();
        let app = create_router(state.clone());
        let (status, body) =
            send(&app, Method::POST, "/attack", Some(json!({ "type": "replay" }))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status"], 400);
        assert_eq!(state.engine.status().stats.attack_count, 0);
    }

    #[tokio::test]
    async fn test_unknown_defense_is_bad_request() {
        let app = create_router(test_state());
        let (status, body) =
            send(&app, Method::POST, "/defense", Some(json!({ "type": "nonexistent" }))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Unknown defense: nonexistent");
    }

    #[tokio::test]
    async fn test_malformed_body_is_bad_request() {
        let app = create_router(test_state());
        let (status, _) = send(&app, Method::POST, "/attack", Some(json!({ "kind": 1 }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let res = assert_ok!(
            app.clone()
                .oneshot(assert_ok!(Request::builder()
                    .method(Method::POST)
                    .uri("/defense")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from("{not json"))))
                .await
        );
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_status_and_reset() {
        let app = create_router(test_state());
        send(&app, Method::POST, "/defense", Some(json!({ "type": "signature_check" }))).await;
        send(&app, Method::POST, "/attack", Some(json!({ "type": "fake_command" }))).await;
        send(&app, Method::POST, "/attack", Some(json!({ "type": "adversarial_image" }))).await;

        let (status, body) = send(&app, Method::GET, "/status", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["doorLock"], "locked");
        assert_eq!(body["camera"]["status"], "spoofed");
        assert_eq!(body["defenses"]["signatureCheck"], true);
        assert_eq!(body["stats"]["attackCount"], 2);
        assert_eq!(body["attackRate"], 50);
        assert_eq!(body["defenseRate"], 50);

        let (status, body) = send(&app, Method::POST, "/api/reset", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);

        let (_, body) = send(&app, Method::GET, "/api/status", None).await;
        assert_eq!(body["stats"]["attackCount"], 0);
        assert_eq!(body["camera"]["status"], "active");
        assert_eq!(body["defenses"]["signatureCheck"], true);
        assert_eq!(body["attackRate"], 0);
    }

    #[tokio::test]
    async fn test_response_headers() {
        let app = create_router(test_state());
        let res = assert_ok!(
            app.oneshot(assert_ok!(Request::builder().uri("/status").body(Body::empty()))).await
        );

        let headers = res.headers();
        assert_eq!(headers[header::X_CONTENT_TYPE_OPTIONS], "nosniff");
        assert_eq!(headers[header::X_FRAME_OPTIONS], "DENY");
        assert_eq!(headers[header::CACHE_CONTROL], "no-store");
    }

    #[tokio::test]
    async fn test_serves_frontend() {
        let app = create_router(test_state());
        let res = assert_ok!(
            app.oneshot(assert_ok!(Request::builder().uri("/").body(Body::empty()))).await
        );

        assert_eq!(res.status(), StatusCode::OK);
        let bytes = assert_ok!(to_bytes(res.into_body(), usize::MAX).await);
        assert!(String::from_utf8_lossy(&bytes).contains("<html"));
    }
}
