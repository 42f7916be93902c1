mod agencies;
mod categories;
mod facets;
mod locales;
mod search;

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderName, Method, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Extension, Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use visadir_core::{AgencyStore, Catalog, Locale, MessageCatalog};

use crate::middleware::{
    enforce_rate_limit, request_id, request_span, RateLimitState, RequestId, REQUEST_ID_HEADER,
};

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog<AgencyStore>>,
    pub messages: Arc<MessageCatalog>,
    pub default_locale: Locale,
    pub search_default_limit: usize,
}

impl AppState {
    #[must_use]
    pub fn new(
        store: AgencyStore,
        messages: MessageCatalog,
        default_locale: Locale,
        search_default_limit: usize,
    ) -> Self {
        Self {
            catalog: Arc::new(Catalog::new(store)),
            messages: Arc::new(messages),
            default_locale,
            search_default_limit,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ResponseMeta {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: ErrorBody,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
    agencies: usize,
}

impl ResponseMeta {
    pub(super) fn new(request_id: String) -> Self {
        Self {
            request_id,
            timestamp: Utc::now(),
        }
    }
}

impl<T: Serialize> ApiResponse<T> {
    pub(super) fn new(data: T, request_id: String) -> Self {
        Self {
            data,
            meta: ResponseMeta::new(request_id),
        }
    }
}

impl ApiError {
    pub fn new(
        request_id: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            error: ErrorBody {
                code: code.into(),
                message: message.into(),
            },
            meta: ResponseMeta::new(request_id.into()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.error.code.as_str() {
            "not_found" => StatusCode::NOT_FOUND,
            "bad_request" | "validation_error" => StatusCode::BAD_REQUEST,
            "rate_limited" => StatusCode::TOO_MANY_REQUESTS,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

/// Parse the `{locale}` path segment; unsupported codes are a 404.
pub(super) fn parse_locale(request_id: &str, raw: &str) -> Result<Locale, ApiError> {
    raw.parse::<Locale>().map_err(|e| {
        tracing::debug!(locale = raw, "rejected unsupported locale");
        ApiError::new(request_id, "not_found", e.to_string())
    })
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE, HeaderName::from_static(REQUEST_ID_HEADER)])
}

fn limited_router(rate_limit: RateLimitState) -> Router<AppState> {
    Router::new()
        .route("/api/v1/locales", get(locales::list_locales))
        .route("/api/v1/cities", get(facets::list_cities))
        .route("/api/v1/services", get(facets::list_services))
        .route(
            "/api/v1/service-categories",
            get(facets::list_service_categories),
        )
        .route("/api/v1/agencies", get(agencies::list_agencies))
        .route("/api/v1/agencies/{slug}", get(agencies::get_agency))
        .route(
            "/api/v1/{locale}/categories",
            get(categories::list_categories),
        )
        .route(
            "/api/v1/{locale}/categories/{category}/services",
            get(categories::list_category_services),
        )
        .route(
            "/api/v1/{locale}/categories/{category}/explanation",
            get(categories::get_category_explanation),
        )
        .route(
            "/api/v1/{locale}/sort-options",
            get(search::list_sort_options),
        )
        .route("/api/v1/{locale}/search", post(search::run_search))
        .layer(axum::middleware::from_fn_with_state(
            rate_limit,
            enforce_rate_limit,
        ))
}

pub fn build_app(state: AppState, rate_limit: RateLimitState) -> Router {
    let public_routes = Router::new().route("/api/v1/health", get(health));

    Router::new()
        .merge(public_routes)
        .merge(limited_router(rate_limit))
        .layer(
            ServiceBuilder::new()
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id))
                .layer(TraceLayer::new_for_http().make_span_with(request_span)),
        )
        .with_state(state)
}

async fn health(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> impl IntoResponse {
    Json(ApiResponse::new(
        HealthData {
            status: "ok",
            agencies: state.catalog.agencies().len(),
        },
        req_id.0,
    ))
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::time::Duration;

    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use tower::ServiceExt;
    use visadir_core::{parse_agencies, AgencyStore, Locale, MessageCatalog};

    use super::{build_app, AppState};
    use crate::middleware::RateLimitState;

    const FIXTURE: &str = include_str!("../../../../config/agencies.yaml");

    pub(crate) fn app() -> axum::Router {
        let file = parse_agencies(FIXTURE).expect("fixture parses");
        let state = AppState::new(
            AgencyStore::new(file.agencies),
            MessageCatalog::bundled().expect("bundled messages"),
            Locale::En,
            50,
        );
        build_app(state, RateLimitState::new(1_000, Duration::from_secs(60)))
    }

    pub(crate) async fn send(request: Request<Body>) -> (axum::http::StatusCode, serde_json::Value) {
        let response = app().oneshot(request).await.expect("response");
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body bytes");
        let json = serde_json::from_slice(&body).expect("json parse");
        (status, json)
    }

    pub(crate) async fn get(uri: &str) -> (axum::http::StatusCode, serde_json::Value) {
        send(
            Request::builder()
                .uri(uri)
                .body(Body::empty())
                .expect("request"),
        )
        .await
    }

    pub(crate) async fn post_json(
        uri: &str,
        body: &serde_json::Value,
    ) -> (axum::http::StatusCode, serde_json::Value) {
        send(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .expect("request"),
        )
        .await
    }
}
