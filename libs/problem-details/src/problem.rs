//! RFC 7807 Problem Details for HTTP APIs (pure data model, no HTTP framework dependencies)

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[cfg(feature = "utoipa")]
use utoipa::ToSchema;

use crate::error::EncodeError;
use crate::status::reason_phrase;

/// Problem type used when the caller does not supply one.
pub const DEFAULT_PROBLEM_TYPE: &str = "about:blank";

/// Content type for the JSON encoding.
pub const APPLICATION_PROBLEM_JSON: &str = "application/problem+json";

/// Content type for the XML encoding.
pub const APPLICATION_PROBLEM_XML: &str = "application/problem+xml";

/// Namespace of the `problem` root element in the XML encoding.
pub const PROBLEM_XML_NAMESPACE: &str = "urn:ietf:rfc:7807";

/// RFC 7807 Problem Details document.
///
/// Optional members are never `Option`: an empty string or an empty map means
/// "absent" and is left out of both encodings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ProblemDocument")]
#[cfg_attr(feature = "utoipa", derive(ToSchema))]
#[cfg_attr(
    feature = "utoipa",
    schema(
        title = "ProblemDetails",
        description = "RFC 7807 Problem Details for HTTP APIs"
    )
)]
#[must_use]
pub struct ProblemDetails {
    /// A URI reference that identifies the problem type.
    #[serde(rename = "type")]
    problem_type: String,
    /// A short, human-readable summary of the problem type.
    title: String,
    /// The HTTP status code for this occurrence of the problem.
    status: i32,
    /// A human-readable explanation specific to this occurrence of the problem.
    #[serde(skip_serializing_if = "String::is_empty")]
    detail: String,
    /// A URI reference that identifies the specific occurrence of the problem.
    #[serde(skip_serializing_if = "String::is_empty")]
    instance: String,
    /// Field name to validation message.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    errors: BTreeMap<String, String>,
}

/// Inbound shape; every member is optional, `null` included, and goes through
/// `ProblemDetails::new`.
#[derive(Deserialize)]
struct ProblemDocument {
    #[serde(rename = "type")]
    problem_type: Option<String>,
    title: Option<String>,
    status: Option<i32>,
    detail: Option<String>,
    instance: Option<String>,
    errors: Option<BTreeMap<String, String>>,
}

impl From<ProblemDocument> for ProblemDetails {
    fn from(doc: ProblemDocument) -> Self {
        Self::new(
            doc.problem_type.unwrap_or_default(),
            doc.title.unwrap_or_default(),
            doc.status.unwrap_or_default(),
            doc.detail.unwrap_or_default(),
            doc.instance.unwrap_or_default(),
            doc.errors.unwrap_or_default(),
        )
    }
}

impl ProblemDetails {
    /// Build a problem from explicit fields.
    ///
    /// An empty `problem_type` becomes [`DEFAULT_PROBLEM_TYPE`] and an empty
    /// `title` becomes the reason phrase of `status` (empty for unknown codes).
    /// Nothing else is checked, so any status value is accepted.
    pub fn new(
        problem_type: impl Into<String>,
        title: impl Into<String>,
        status: i32,
        detail: impl Into<String>,
        instance: impl Into<String>,
        errors: BTreeMap<String, String>,
    ) -> Self {
        let mut problem_type = problem_type.into();
        if problem_type.is_empty() {
            DEFAULT_PROBLEM_TYPE.clone_into(&mut problem_type);
        }
        let mut title = title.into();
        if title.is_empty() {
            reason_phrase(status).clone_into(&mut title);
        }
        Self {
            problem_type,
            title,
            status,
            detail: detail.into(),
            instance: instance.into(),
            errors,
        }
    }

    /// Problem carrying only a status; type and title take their defaults.
    pub fn from_http_status(status: i32) -> Self {
        Self::new("", "", status, "", "", BTreeMap::new())
    }

    #[must_use]
    pub fn problem_type(&self) -> &str {
        &self.problem_type
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn status(&self) -> i32 {
        self.status
    }

    #[must_use]
    pub fn detail(&self) -> &str {
        &self.detail
    }

    #[must_use]
    pub fn instance(&self) -> &str {
        &self.instance
    }

    #[must_use]
    pub fn errors(&self) -> &BTreeMap<String, String> {
        &self.errors
    }

    /// Encode as compact JSON (`application/problem+json`).
    ///
    /// # Errors
    /// Returns [`EncodeError::Json`] if the JSON encoder rejects a value.
    pub fn to_json(&self) -> Result<String, EncodeError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Encode as XML (`application/problem+xml`).
    ///
    /// # Errors
    /// Returns [`EncodeError::InvalidElementName`] if an `errors` key cannot be
    /// written as an element name.
    pub fn to_xml(&self) -> Result<String, EncodeError> {
        crate::xml::encode(self)
    }
}

impl From<http::StatusCode> for ProblemDetails {
    fn from(status: http::StatusCode) -> Self {
        Self::from_http_status(i32::from(status.as_u16()))
    }
}
