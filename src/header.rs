//! HTTP header pairs as handed over by an HTTP client.

use serde::{Deserialize, Serialize};

pub const CONTENT_TYPE: &str = "Content-Type";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    pub name: String,
    pub value: String,
}

impl Header {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Header {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Shorthand for a `Content-Type` header.
    pub fn content_type(value: impl Into<String>) -> Self {
        Header::new(CONTENT_TYPE, value)
    }
}

impl From<(&str, &str)> for Header {
    fn from((name, value): (&str, &str)) -> Self {
        Header::new(name, value)
    }
}

impl From<(String, String)> for Header {
    fn from((name, value): (String, String)) -> Self {
        Header { name, value }
    }
}

/// Value of the only header in `headers`, if that header is `Content-Type`.
///
/// Anything else (no headers, several, or a single unrelated one) is `None`.
pub fn single_content_type(headers: &[Header]) -> Option<&str> {
    match headers {
        [only] if only.name.eq_ignore_ascii_case(CONTENT_TYPE) => Some(only.value.as_str()),
        _ => None,
    }
}

/// The media type part of a header value: text before the first `;`, trimmed.
pub fn media_type(value: &str) -> &str {
    value.split(';').next().unwrap_or_default().trim()
}

/// Splits a header value on `;`, dropping trailing empty segments.
pub fn segments(value: &str) -> Vec<&str> {
    let mut parts: Vec<&str> = value.split(';').collect();
    while parts.len() > 1 && parts.last().is_some_and(|p| p.is_empty()) {
        parts.pop();
    }
    parts
}
