//! HTTP API tests
//!
//! Drives the router in-process with `tower::ServiceExt::oneshot`.

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use countrydex_core::{CallingCodeResolver, QueryService, ResolveError};
use countrydex_server::{AppState, create_router};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

fn app() -> Router {
    create_router(AppState::global())
}

/// Router backed by a resolver that knows no calling codes at all
fn empty_catalog_app() -> Router {
    struct NoCodes;

    impl CallingCodeResolver for NoCodes {
        fn calling_code(&self, _region: &str) -> Result<u16, ResolveError> {
            Ok(0)
        }
    }

    let service: &'static QueryService = Box::leak(Box::new(QueryService::with_resolver(NoCodes)));
    create_router(AppState::new(service))
}

/// Router whose resolver panics on every lookup
fn panicking_app() -> Router {
    struct Exploding;

    impl CallingCodeResolver for Exploding {
        fn calling_code(&self, region: &str) -> Result<u16, ResolveError> {
            panic!("calling code metadata corrupt for {region}");
        }
    }

    let service: &'static QueryService =
        Box::leak(Box::new(QueryService::with_resolver(Exploding)));
    create_router(AppState::new(service))
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    request(app, Method::GET, uri).await
}

async fn request(app: Router, method: Method, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap();
    (status, body)
}

#[tokio::test]
async fn test_index() {
    let (status, body) = get(app(), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "status": "ok",
            "message": "Country Code Service is running",
            "available_routes": [
                "/validate-country-code",
                "/list-country-codes",
                "/random-country-code"
            ]
        })
    );
}

#[tokio::test]
async fn test_validate_us() {
    let (status, body) = get(app(), "/validate-country-code?code=US").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "isValid": true,
            "countryName": "United States",
            "alpha2Code": "US",
            "alpha3Code": "USA",
            "phoneCode": "+1",
            "continent": "NA"
        })
    );
}

#[tokio::test]
async fn test_validate_accepts_plus_prefix_and_lowercase() {
    // %2B is an encoded '+'
    let (status, plus) = get(app(), "/validate-country-code?code=%2Bgb").await;
    assert_eq!(status, StatusCode::OK);
    let (_, alpha3) = get(app(), "/validate-country-code?code=gbr").await;
    assert_eq!(plus, alpha3);
    assert_eq!(plus["phoneCode"], "+44");
    assert_eq!(plus["continent"], "EU");
}

#[tokio::test]
async fn test_validate_missing_code_is_bad_request() {
    let expected = json!({ "isValid": false, "error": "No country code provided" });

    let (status, body) = get(app(), "/validate-country-code").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, expected);

    let (status, body) = get(app(), "/validate-country-code?code=").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, expected);
}

#[tokio::test]
async fn test_validate_repeated_code_uses_first_value() {
    let (status, body) = get(app(), "/validate-country-code?code=US&code=FR").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["alpha2Code"], "US");
    assert_eq!(body["phoneCode"], "+1");
}

#[tokio::test]
async fn test_validate_empty_first_code_is_bad_request() {
    let (status, body) = get(app(), "/validate-country-code?code=&code=US").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "isValid": false, "error": "No country code provided" }));
}

#[tokio::test]
async fn test_validate_unknown_code() {
    let (status, body) = get(app(), "/validate-country-code?code=ZZ").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "isValid": false, "error": "Country code not found" }));
}

#[tokio::test]
async fn test_validate_country_without_calling_code() {
    let (status, body) = get(app(), "/validate-country-code?code=AQ").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["isValid"], true);
    assert_eq!(body["phoneCode"], "Unknown");
    assert_eq!(body["continent"], "Unknown");
}

#[tokio::test]
async fn test_list_all() {
    let (status, body) = get(app(), "/list-country-codes").await;
    assert_eq!(status, StatusCode::OK);

    let records = body.as_array().unwrap();
    assert_eq!(records.len(), QueryService::global().catalog_len());
    assert_eq!(
        records[0],
        json!({
            "name": "Andorra",
            "alpha2": "AD",
            "alpha3": "AND",
            "phone_code": "+376",
            "continent": "Unknown"
        })
    );
}

#[tokio::test]
async fn test_list_filtered_by_continent() {
    let (status, body) = get(app(), "/list-country-codes?continent=sa").await;
    assert_eq!(status, StatusCode::OK);

    let codes: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["alpha2"].as_str().unwrap())
        .collect();
    assert_eq!(codes, ["AR", "BR", "CL", "CO", "PE"]);
    assert!(body.as_array().unwrap().iter().all(|r| r["continent"] == "SA"));
}

#[tokio::test]
async fn test_list_repeated_continent_uses_first_value() {
    let (status, body) = get(app(), "/list-country-codes?continent=eu&continent=sa").await;
    assert_eq!(status, StatusCode::OK);

    let records = body.as_array().unwrap();
    assert_eq!(records.len(), 8);
    assert!(records.iter().all(|r| r["continent"] == "EU"));
}

#[tokio::test]
async fn test_list_unknown_continent_is_empty() {
    let (status, body) = get(app(), "/list-country-codes?continent=XX").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_random_country_is_in_list() {
    let (_, list) = get(app(), "/list-country-codes").await;
    let (status, record) = get(app(), "/random-country-code").await;
    assert_eq!(status, StatusCode::OK);
    assert!(list.as_array().unwrap().contains(&record));
}

#[tokio::test]
async fn test_random_on_empty_catalog_is_server_error() {
    let (status, body) = get(empty_catalog_app(), "/random-country-code").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({
            "error": "country catalog is empty",
            "message": "An unexpected error occurred"
        })
    );
}

#[tokio::test]
async fn test_handler_panic_is_json_server_error() {
    let (status, body) = get(panicking_app(), "/validate-country-code?code=US").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({
            "error": "calling code metadata corrupt for US",
            "message": "An unexpected error occurred"
        })
    );
}

#[tokio::test]
async fn test_wrong_method_is_json_method_not_allowed() {
    let (status, body) = request(app(), Method::POST, "/validate-country-code?code=US").await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(
        body,
        json!({
            "error": "Method not allowed",
            "message": "method POST not allowed for /validate-country-code"
        })
    );
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let (status, body) = get(app(), "/does-not-exist").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Not found");
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/")
                .header(header::ORIGIN, "https://example.com")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "*"
    );
}
