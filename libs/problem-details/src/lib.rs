//! RFC 7807 Problem Details for HTTP APIs
//!
//! This crate provides a single immutable value type, [`ProblemDetails`], with
//! two constructors and two wire encodings. It has no dependencies on HTTP
//! frameworks unless the `axum` feature is enabled. It includes:
//! - construction with defaulting rules (`ProblemDetails::new`, `ProblemDetails::from_http_status`)
//! - JSON encoding (`application/problem+json`) through `serde`
//! - XML encoding (`application/problem+xml`) in the `urn:ietf:rfc:7807` namespace
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod error;
pub mod problem;
#[cfg(feature = "axum")]
pub mod response;
pub mod status;
mod xml;

// Re-export commonly used types
pub use error::EncodeError;
pub use problem::{
    APPLICATION_PROBLEM_JSON, APPLICATION_PROBLEM_XML, DEFAULT_PROBLEM_TYPE,
    PROBLEM_XML_NAMESPACE, ProblemDetails,
};
#[cfg(feature = "axum")]
pub use response::ProblemXml;
pub use status::reason_phrase;
