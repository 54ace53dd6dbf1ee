//! HTTP response building module
//!
//! Turns router outcomes into hyper responses. Builder failures fall back to
//! a bare response instead of panicking.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::header::{CONTENT_LENGTH, CONTENT_TYPE};
use hyper::Response;

use crate::routing::{Outcome, TEXT_PLAIN};

const INTERNAL_ERROR_BODY: &str = "500 Internal Server Error\n";

/// Build the response for a router outcome
pub fn build_outcome_response(outcome: &Outcome<'_>) -> Response<Full<Bytes>> {
    Response::builder()
        .status(outcome.status)
        .header(CONTENT_TYPE, outcome.content_type)
        .header(CONTENT_LENGTH, outcome.body.len())
        .body(Full::new(Bytes::copy_from_slice(outcome.body.as_bytes())))
        .unwrap_or_else(|e| {
            log_build_error(outcome.status, &e);
            build_500_response()
        })
}

/// Build 404 Not Found response
pub fn build_404_response() -> Response<Full<Bytes>> {
    build_outcome_response(&Outcome::not_found())
}

/// Build 500 Internal Server Error response
pub fn build_500_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(500)
        .header(CONTENT_TYPE, TEXT_PLAIN)
        .header(CONTENT_LENGTH, INTERNAL_ERROR_BODY.len())
        .body(Full::new(Bytes::from_static(INTERNAL_ERROR_BODY.as_bytes())))
        .unwrap_or_else(|e| {
            log_build_error(500, &e);
            let mut response = Response::new(Full::new(Bytes::new()));
            *response.status_mut() = hyper::StatusCode::INTERNAL_SERVER_ERROR;
            response
        })
}

fn log_build_error(status: u16, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}
