//! REST API server implementation using Axum
//!
//! Exposes the two admissions searches of `unisearch-api-service` over HTTP
//! with the JSON shapes of the original course search API.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{HeaderValue, Method, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use unisearch_api_service::{Fault, SearchError, SearchService};
use unisearch_core::{
    CourseMatch, InstitutionMatch, RawCourseSearch, RawUniversitySearch, SearchMode, ServerConfig,
};

/// Shared application state
pub type AppState = Arc<SearchService>;

/// Build the Axum router with all endpoints
pub fn build_router(service: AppState, server_config: &ServerConfig) -> Router {
    let router = Router::new()
        // Search endpoints
        .route(
            "/api/courses/searchUniversity",
            post(search_university_handler),
        )
        .route("/api/courses/searchCourse", post(search_course_handler))
        // Health check
        .route("/health", get(health_handler));

    router
        .layer(cors_layer(&server_config.allowed_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}

/// CORS based on allowed_origins: empty disables, `*` allows all
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    if allowed_origins.is_empty() {
        CorsLayer::new()
    } else if allowed_origins.iter().any(|origin| origin == "*") {
        CorsLayer::permissive()
    } else {
        let mut cors = CorsLayer::new()
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([axum::http::header::CONTENT_TYPE]);

        for origin in allowed_origins {
            match HeaderValue::from_str(origin) {
                Ok(header_value) => cors = cors.allow_origin(header_value),
                Err(e) => tracing::warn!("Ignoring invalid CORS origin '{origin}': {e}"),
            }
        }
        cors
    }
}

/// POST /api/courses/searchUniversity
async fn search_university_handler(
    State(service): State<AppState>,
    request: Result<Json<RawUniversitySearch>, JsonRejection>,
) -> Result<Json<Vec<InstitutionMatch>>, ApiError> {
    let Json(request) = request?;
    tracing::info!(
        "University search request: course={:?}, district={:?}",
        request.course,
        request.district
    );

    let records = service
        .search_university(&request)
        .await
        .map_err(|e| ApiError::search(SearchMode::University, e))?;
    Ok(Json(records))
}

/// POST /api/courses/searchCourse
async fn search_course_handler(
    State(service): State<AppState>,
    request: Result<Json<RawCourseSearch>, JsonRejection>,
) -> Result<Json<Vec<CourseMatch>>, ApiError> {
    let Json(request) = request?;
    tracing::info!(
        "Course search request: university={:?}, scientific_area={:?}",
        request.university,
        request.scientific_area
    );

    let records = service
        .search_course(&request)
        .await
        .map_err(|e| ApiError::search(SearchMode::Course, e))?;
    Ok(Json(records))
}

/// GET /health
async fn health_handler(State(service): State<AppState>) -> impl IntoResponse {
    let graph_store_status = if service.store().check_health().await {
        "reachable"
    } else {
        "unreachable"
    };

    let health_status = json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "graph_store": {"status": graph_store_status}
    });

    (StatusCode::OK, Json(health_status))
}

/// Error handling for API endpoints
#[derive(Debug)]
pub enum ApiError {
    /// Body was not valid JSON for the endpoint
    InvalidRequest(String),
    Search {
        mode: SearchMode,
        source: SearchError,
    },
}

impl ApiError {
    fn search(mode: SearchMode, source: SearchError) -> Self {
        ApiError::Search { mode, source }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            ApiError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Search { mode, source } => {
                let status = match source.fault() {
                    Fault::Client => StatusCode::BAD_REQUEST,
                    // Details were logged by the search service
                    Fault::Server => StatusCode::INTERNAL_SERVER_ERROR,
                };
                (status, source.public_message(mode))
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidRequest(rejection.body_text())
    }
}
