//! HTTP routes (Axum)

use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    http::{Method, Uri},
    routing::get,
};
use countrydex_core::{CountryRecord, QueryService, ValidationResult};
use serde::Deserialize;
use serde_json::{Value, json};
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};

use crate::error::{ApiError, panic_response};

/// Routes listed by the index endpoint
pub const AVAILABLE_ROUTES: [&str; 3] = [
    "/validate-country-code",
    "/list-country-codes",
    "/random-country-code",
];

/// Shared handler state
#[derive(Clone, Copy)]
pub struct AppState {
    pub service: &'static QueryService,
}

impl AppState {
    pub fn new(service: &'static QueryService) -> Self {
        Self { service }
    }

    /// State backed by the process-wide query service
    pub fn global() -> Self {
        Self::new(QueryService::global())
    }
}

/// Decoded query string pairs, in request order.
///
/// Repeated keys are kept; lookups return the first occurrence.
#[derive(Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    /// First value for `key`, if present.
    pub fn first(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/validate-country-code", get(validate_country_code))
        .route("/list-country-codes", get(list_country_codes))
        .route("/random-country-code", get(random_country_code))
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .with_state(state)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

async fn index() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "message": "Country Code Service is running",
        "available_routes": AVAILABLE_ROUTES,
    }))
}

async fn validate_country_code(
    State(state): State<AppState>,
    params: Result<Query<QueryParams>, QueryRejection>,
) -> Result<Json<ValidationResult>, ApiError> {
    let Query(params) = params?;
    let code = params
        .first("code")
        .filter(|code| !code.is_empty())
        .ok_or(ApiError::MissingCode)?;

    Ok(Json(state.service.validate(code)))
}

async fn list_country_codes(
    State(state): State<AppState>,
    params: Result<Query<QueryParams>, QueryRejection>,
) -> Result<Json<Vec<CountryRecord>>, ApiError> {
    let Query(params) = params?;
    Ok(Json(state.service.list(params.first("continent"))))
}

async fn random_country_code(
    State(state): State<AppState>,
) -> Result<Json<CountryRecord>, ApiError> {
    Ok(Json(state.service.random_entry()?))
}

async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}

async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    ApiError::MethodNotAllowed {
        method: method.to_string(),
        path: uri.path().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> QueryParams {
        QueryParams(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_first_value_wins_for_repeated_keys() {
        let params = params(&[("code", "US"), ("continent", "eu"), ("code", "FR")]);
        assert_eq!(params.first("code"), Some("US"));
        assert_eq!(params.first("continent"), Some("eu"));
        assert_eq!(params.first("missing"), None);
    }

    #[test]
    fn test_empty_query() {
        assert_eq!(QueryParams::default().first("code"), None);
    }
}
