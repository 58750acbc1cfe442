//! Axum integration: make `ProblemDetails` directly usable as a response
//!
//! The JSON encoding is the default response body. Wrap the problem in
//! [`ProblemXml`] when the caller has already picked the XML encoding.

use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::error::EncodeError;
use crate::problem::{APPLICATION_PROBLEM_JSON, APPLICATION_PROBLEM_XML, ProblemDetails};

/// Responds with the XML encoding (`application/problem+xml`).
#[derive(Debug, Clone)]
pub struct ProblemXml(pub ProblemDetails);

impl IntoResponse for ProblemDetails {
    fn into_response(self) -> Response {
        problem_response(self.status(), APPLICATION_PROBLEM_JSON, self.to_json())
    }
}

impl IntoResponse for ProblemXml {
    fn into_response(self) -> Response {
        problem_response(self.0.status(), APPLICATION_PROBLEM_XML, self.0.to_xml())
    }
}

fn problem_response(
    status: i32,
    content_type: &'static str,
    body: Result<String, EncodeError>,
) -> Response {
    let code = u16::try_from(status)
        .ok()
        .and_then(|c| StatusCode::from_u16(c).ok())
        .unwrap_or_else(|| {
            tracing::warn!(status, "problem status is not a valid HTTP status, responding 500");
            StatusCode::INTERNAL_SERVER_ERROR
        });

    match body {
        Ok(body) => (
            code,
            [(header::CONTENT_TYPE, HeaderValue::from_static(content_type))],
            body,
        )
            .into_response(),
        Err(err) => {
            tracing::error!(error = %err, status, "failed to encode problem details");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::collections::BTreeMap;

    use tracing_test::traced_test;

    use super::*;

    fn content_type(resp: &Response) -> &str {
        resp.headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
    }

    #[test]
    fn json_response_sets_status_and_content_type() {
        let resp = ProblemDetails::from_http_status(404).into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(content_type(&resp), APPLICATION_PROBLEM_JSON);
    }

    #[test]
    fn xml_response_sets_status_and_content_type() {
        let resp = ProblemXml(ProblemDetails::from_http_status(422)).into_response();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(content_type(&resp), APPLICATION_PROBLEM_XML);
    }

    #[traced_test]
    #[test]
    fn invalid_status_falls_back_to_500() {
        let resp = ProblemDetails::from_http_status(0).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(content_type(&resp), APPLICATION_PROBLEM_JSON);
        assert!(logs_contain("not a valid HTTP status"));
    }

    #[traced_test]
    #[test]
    fn encoding_failure_is_logged() {
        let errors = BTreeMap::from([("bad key".to_owned(), "required".to_owned())]);
        let problem = ProblemDetails::new("", "", 400, "", "", errors);
        let resp = ProblemXml(problem).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(resp.headers().get(header::CONTENT_TYPE).is_none());
        assert!(logs_contain("failed to encode problem details"));
    }
}
