//! Error types for content-type resolution and configuration.
//!
//! Two groups, the same way the resolver treats failures:
//!
//! 1. **Configuration errors** are loud. A bad config file or a handler entry
//!    naming an unknown category fails the call that loads or applies it.
//! 2. **Resolution errors** only surface from
//!    [`ContentTypeResolver::resolve`](crate::resolver::ContentTypeResolver::resolve),
//!    when a vendor suffix (`application/vnd.foo+yaml`) does not name a
//!    category. Header-driven resolution degrades to defaults instead.

use crate::category::Category;
use std::error::Error;
use std::fmt;

/// Unified error type for mimekind operations.
#[derive(Debug)]
pub enum ContentError {
    // ==========================================================================
    // CATEGORY ERRORS
    // ==========================================================================
    /// IO error wrapper, e.g. a config file that exists but cannot be read.
    IoError(std::io::Error),

    // ==========================================================================
    // SPECIFIC ERROR VARIANTS
    // ==========================================================================
    /// Configuration file not found at the specified path.
    ConfigNotFound { path: String },

    /// Configuration file exists but contains invalid data.
    ConfigInvalid { field: String, reason: String },

    /// A name (usually a vendor suffix) does not match any [`Category`].
    UnknownCategory { name: String },

    /// A `content.handlers.map` entry maps a MIME string to an unknown category.
    InvalidHandlerMapping { mime: String, name: String },
}

/// Renders the valid category names as `['XML' 'JSON' 'TEXT' 'JS' ]`.
fn valid_names() -> String {
    let mut out = String::from("[");
    for name in Category::names() {
        out.push('\'');
        out.push_str(name);
        out.push_str("' ");
    }
    out.push(']');
    out
}

impl fmt::Display for ContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentError::IoError(err) => write!(f, "IO error: {}", err),

            ContentError::ConfigNotFound { path } => {
                write!(
                    f,
                    "Configuration not found at '{}'. Check the path or omit it to use defaults.",
                    path
                )
            }
            ContentError::ConfigInvalid { field, reason } => {
                write!(f, "Invalid configuration field '{}': {}", field, reason)
            }
            ContentError::UnknownCategory { name } => {
                write!(
                    f,
                    "Unknown content category '{}'. Use one of {}",
                    name,
                    valid_names()
                )
            }
            ContentError::InvalidHandlerMapping { mime, name } => {
                write!(
                    f,
                    "I don't know how to handle '{}' for '{}'. Use one of {}",
                    name,
                    mime,
                    valid_names()
                )
            }
        }
    }
}

impl Error for ContentError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ContentError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ContentError {
    fn from(err: std::io::Error) -> Self {
        ContentError::IoError(err)
    }
}

impl From<serde_json::Error> for ContentError {
    fn from(err: serde_json::Error) -> Self {
        ContentError::ConfigInvalid {
            field: "json".to_string(),
            reason: err.to_string(),
        }
    }
}
