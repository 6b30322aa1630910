mod recommendations;
mod signup;

use std::{sync::Arc, time::Duration};

use axum::{
    http::{header, HeaderName, Method, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

use dealscout_analyzer::CompletionClient;
use dealscout_core::AppConfig;
use dealscout_search::SearchClient;

use crate::middleware::{enforce_rate_limit, request_id, RateLimitState};
use crate::users::UserStore;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub search: Arc<SearchClient>,
    pub analyzer: Arc<CompletionClient>,
    pub users: UserStore,
}

/// A client-visible error: the wire body is the single `error` field.
#[derive(Debug, Serialize)]
pub struct ApiError {
    #[serde(skip)]
    status: StatusCode,
    error: String,
}

impl ApiError {
    pub fn invalid_request() -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error: "Invalid request data".to_string(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            error: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status;
        (status, Json(self)).into_response()
    }
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static("x-request-id"),
        ])
}

#[must_use]
pub fn default_rate_limit_state() -> RateLimitState {
    RateLimitState::new(60, Duration::from_secs(60))
}

pub fn build_app(state: AppState, rate_limit: RateLimitState) -> Router {
    let recommendation_routes = Router::new()
        .route(
            "/api/product-recommendations",
            post(recommendations::product_recommendations),
        )
        .layer(axum::middleware::from_fn_with_state(
            rate_limit,
            enforce_rate_limit,
        ));

    Router::new()
        .route("/health", get(health))
        .route("/api/signup", post(signup::signup))
        .merge(recommendation_routes)
        .layer(
            ServiceBuilder::new()
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(HealthData { status: "ok" }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use serde_json::Value;
    use tower::ServiceExt;

    use dealscout_analyzer::CompletionSettings;

    pub(super) fn test_state(search_url: &str, llm_url: &str) -> AppState {
        let config = Arc::new(AppConfig {
            env: dealscout_core::Environment::Test,
            bind_addr: "127.0.0.1:0".parse().unwrap(),
            log_level: "info".to_string(),
            serpapi_key: "test-serp-key".to_string(),
            search_base_url: search_url.to_string(),
            search_currency: "USD".to_string(),
            search_num_results: 5,
            search_max_position: 10,
            search_timeout_secs: 5,
            groq_api_key: "test-groq-key".to_string(),
            llm_base_url: llm_url.to_string(),
            llm_model: "mixtral-8x7b-32768".to_string(),
            llm_max_tokens: 1000,
            llm_temperature: 0.7,
            llm_timeout_secs: 5,
            max_retries: 0,
            retry_backoff_base_ms: 1,
            default_page_size: 5,
            max_page_size: 12,
            password_hash_salt: "test-salt".to_string(),
        });

        let search = SearchClient::with_base_url(
            &config.serpapi_key,
            &config.search_currency,
            config.search_timeout_secs,
            search_url,
        )
        .unwrap()
        .with_retry_policy(0, 1);

        let analyzer = CompletionClient::with_base_url(
            &config.groq_api_key,
            CompletionSettings {
                model: config.llm_model.clone(),
                max_tokens: config.llm_max_tokens,
                temperature: config.llm_temperature,
            },
            config.llm_timeout_secs,
            llm_url,
        )
        .unwrap()
        .with_retry_policy(0, 1);

        AppState {
            config,
            search: Arc::new(search),
            analyzer: Arc::new(analyzer),
            users: UserStore::new(),
        }
    }

    pub(super) fn test_app(state: AppState) -> Router {
        build_app(state, default_rate_limit_state())
    }

    pub(super) async fn body_json(res: axum::response::Response) -> Value {
        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_returns_ok() {
        let app = test_app(test_state("http://127.0.0.1:9", "http://127.0.0.1:9"));

        let res = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(body_json(res).await, serde_json::json!({"status": "ok"}));
    }

    #[tokio::test]
    async fn responses_carry_request_id_header() {
        let app = test_app(test_state("http://127.0.0.1:9", "http://127.0.0.1:9"));

        let res = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .header("x-request-id", "req-123")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(res.headers().get("x-request-id").unwrap(), "req-123");
    }

    #[tokio::test]
    async fn rate_limit_rejects_after_window_fills() {
        let state = test_state("http://127.0.0.1:9", "http://127.0.0.1:9");
        let app = build_app(state, RateLimitState::new(1, Duration::from_secs(60)));

        let request = || {
            Request::builder()
                .method(Method::POST)
                .uri("/api/product-recommendations")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{}"))
                .unwrap()
        };

        let first = app.clone().oneshot(request()).await.unwrap();
        assert_ne!(first.status(), StatusCode::TOO_MANY_REQUESTS);

        let second = app.oneshot(request()).await.unwrap();
        assert_eq!(second.status(), StatusCode::TOO_MANY_REQUESTS);
    }
}
