//! Resolution of MIME strings and `Content-Type` headers.
//!
//! A [`ContentTypeResolver`] owns a [`MappingTable`] and a default charset.
//! Build one per component that needs isolated settings, or use [`shared()`]
//! for the process-wide instance.
//!
//! ```
//! use mimekind::{Category, ContentTypeResolver, Header};
//!
//! let resolver = ContentTypeResolver::with_default_charset("UTF-8");
//! let headers = vec![Header::content_type("application/vnd.acme+json; charset=utf-16le")];
//!
//! assert_eq!(resolver.resolve_from_headers(&headers), Category::Json);
//! assert_eq!(resolver.parse_charset(&headers), "UTF-16LE");
//! ```

use crate::category::Category;
use crate::charset;
use crate::config::{ConfigSource, CONTENT_DEFAULT_CHARSET, CONTENT_HANDLERS_MAP};
use crate::error::ContentError;
use crate::header::{self, Header};
use crate::mapping::MappingTable;
use crate::text;
use lazy_static::lazy_static;
use log::{debug, info, warn};
use regex::Regex;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

const CHARSET_PARAM: &str = "charset=";

lazy_static! {
    /// `application/<anything>+<subtype>`; the capture is the ASCII word run
    /// after the last `+`.
    static ref VENDOR_SUFFIX: Regex =
        Regex::new(r"application/.+\+([A-Za-z0-9_]+)").expect("vendor suffix pattern is valid");
    static ref SHARED: ContentTypeResolver = ContentTypeResolver::new();
}

/// The process-wide resolver, created with built-in defaults on first use.
pub fn shared() -> &'static ContentTypeResolver {
    &SHARED
}

#[derive(Debug)]
struct ResolverState {
    mapping: MappingTable,
    default_charset: String,
}

/// Maps MIME strings to [`Category`] values and extracts charsets.
///
/// Reads share one lock acquisition per call; `configure` and `reset` hold
/// the write lock for their whole run.
#[derive(Debug)]
pub struct ContentTypeResolver {
    state: RwLock<ResolverState>,
}

impl Default for ContentTypeResolver {
    fn default() -> Self {
        ContentTypeResolver::new()
    }
}

impl ContentTypeResolver {
    /// Built-in mapping and the platform charset.
    pub fn new() -> Self {
        ContentTypeResolver::with_default_charset(&charset::platform_default())
    }

    /// Built-in mapping and the given default charset, stored as given.
    pub fn with_default_charset(default_charset: &str) -> Self {
        ContentTypeResolver {
            state: RwLock::new(ResolverState {
                mapping: MappingTable::builtin(),
                default_charset: default_charset.to_string(),
            }),
        }
    }

    fn read_state(&self) -> RwLockReadGuard<'_, ResolverState> {
        self.state.read().unwrap_or_else(|e| {
            warn!("Resolver lock was poisoned; continuing with current state");
            PoisonError::into_inner(e)
        })
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, ResolverState> {
        self.state.write().unwrap_or_else(|e| {
            warn!("Resolver lock was poisoned; continuing with current state");
            PoisonError::into_inner(e)
        })
    }

    /// Applies `content.default.charset` and `content.handlers.map`.
    ///
    /// The charset is stored verbatim. Handler entries are applied in order and
    /// the first one naming an unknown category aborts the call; entries
    /// applied before it stay in place.
    pub fn configure(&self, source: &impl ConfigSource) -> Result<(), ContentError> {
        let default_charset = source.get(CONTENT_DEFAULT_CHARSET, &charset::platform_default());
        let raw_map = source.get(CONTENT_HANDLERS_MAP, "");
        let pairs = text::string_to_pairs(&text::unescape_html(&raw_map), "=", "\n");

        let mut state = self.write_state();
        state.default_charset = default_charset;
        for (mime, name) in pairs {
            let category = Category::from_name(&name).map_err(|_| {
                ContentError::InvalidHandlerMapping {
                    mime: mime.clone(),
                    name: name.clone(),
                }
            })?;
            debug!("Mapping {} to {}", mime, category);
            state.mapping.insert(mime, category);
        }
        info!(
            "Configured content types: {} mappings, default charset {}",
            state.mapping.len(),
            state.default_charset
        );
        Ok(())
    }

    /// Restores the built-in mapping. The default charset is left alone.
    pub fn reset(&self) {
        self.write_state().mapping.reset();
        debug!("Content type mapping reset to built-in defaults");
    }

    /// Category for a bare MIME string (no parameters).
    ///
    /// Exact table entries win. Otherwise an `application/...+suffix` type
    /// resolves through the suffix name, bypassing the table, and fails with
    /// [`ContentError::UnknownCategory`] if the suffix is not a category.
    /// Anything else gets the default category.
    pub fn resolve(&self, mime: &str) -> Result<Category, ContentError> {
        let state = self.read_state();
        lookup(&state.mapping, mime)
    }

    /// Category for a response's headers. Never fails.
    ///
    /// Only a list holding exactly one `Content-Type` header is inspected;
    /// anything else, and any suffix that is not a category, yields the
    /// default category.
    pub fn resolve_from_headers(&self, headers: &[Header]) -> Category {
        let state = self.read_state();
        let Some(value) = header::single_content_type(headers) else {
            return state.mapping.fallback();
        };
        lookup(&state.mapping, header::media_type(value)).unwrap_or_else(|e| {
            debug!("Falling back to default content type: {}", e);
            state.mapping.fallback()
        })
    }

    /// Charset declared by a single `Content-Type` header, or the default charset.
    ///
    /// Only a value of the form `type; ...charset=NAME` is considered. Names
    /// the registry does not know are logged and ignored.
    pub fn parse_charset(&self, headers: &[Header]) -> String {
        let state = self.read_state();
        if let Some(value) = header::single_content_type(headers) {
            if let [_, params] = header::segments(value).as_slice() {
                let params = params.trim();
                if let Some(pos) = params.find(CHARSET_PARAM) {
                    let label = &params[pos + CHARSET_PARAM.len()..];
                    match charset::canonical_name(label) {
                        Some(name) => return name.to_string(),
                        None => warn!("Charset unknown or not possible to parse: {}", label),
                    }
                }
            }
        }
        state.default_charset.clone()
    }

    /// Every MIME string currently mapped to `category`, `"default"` included.
    pub fn list_mime_strings(&self, category: Category) -> Vec<String> {
        self.read_state().mapping.mime_strings(category)
    }

    pub fn default_category(&self) -> Category {
        self.read_state().mapping.fallback()
    }

    pub fn default_charset(&self) -> String {
        self.read_state().default_charset.clone()
    }

    /// A copy of the current mapping.
    pub fn mapping(&self) -> MappingTable {
        self.read_state().mapping.clone()
    }
}

fn lookup(mapping: &MappingTable, mime: &str) -> Result<Category, ContentError> {
    if let Some(category) = mapping.get(mime) {
        return Ok(category);
    }
    match VENDOR_SUFFIX.captures(mime) {
        Some(caps) => Category::from_name(&caps[1]),
        None => Ok(mapping.fallback()),
    }
}
