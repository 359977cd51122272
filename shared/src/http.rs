//! HTTP helpers for Lambda functions.

use lambda_http::http::header::{ACCESS_CONTROL_ALLOW_ORIGIN, CACHE_CONTROL, CONTENT_TYPE};
use lambda_http::http::response::Builder;
use lambda_http::{Body, Request, RequestExt, Response};
use serde::Serialize;
use tracing::error;

use crate::models::ErrorBody;

const RENDER_FAILURE_BODY: &str = r#"{"error":"failed to render response"}"#;

/// Every response, successful or not, carries the same CORS and caching headers.
fn response_builder(status: u16, cache_max_age: u32) -> Builder {
    Response::builder()
        .status(status)
        .header(CONTENT_TYPE, "application/json")
        .header(ACCESS_CONTROL_ALLOW_ORIGIN, "*")
        .header(CACHE_CONTROL, format!("public, max-age={}", cache_max_age))
}

/// Create a JSON response with the given status code and data.
pub fn json_response<T: Serialize>(
    status: u16,
    data: &T,
    cache_max_age: u32,
) -> Result<Response<Body>, lambda_http::Error> {
    Ok(response_builder(status, cache_max_age).body(Body::from(serde_json::to_string(data)?))?)
}

/// Like [`json_response`], but a body that fails to render becomes a fixed 500.
pub fn respond<T: Serialize>(status: u16, data: &T, cache_max_age: u32) -> Response<Body> {
    json_response(status, data, cache_max_age).unwrap_or_else(|e| {
        error!(error = %e, "Failed to render response");
        response_builder(500, cache_max_age)
            .body(Body::from(RENDER_FAILURE_BODY))
            .expect("Failed to build response")
    })
}

/// Create an error response with the given status code and message.
pub fn error_response(status: u16, message: impl Into<String>, cache_max_age: u32) -> Response<Body> {
    respond(status, &ErrorBody::new(message), cache_max_age)
}

/// First value of a query string parameter, ignoring empty values.
pub fn query_param<'a>(event: &'a Request, name: &str) -> Option<&'a str> {
    event
        .query_string_parameters_ref()
        .and_then(|params| params.first(name))
        .filter(|value| !value.is_empty())
}
