//! # mimekind
//!
//! Resolves HTTP `Content-Type` values into a small set of logical content
//! categories ([`Category::Xml`], [`Category::Json`], [`Category::Text`],
//! [`Category::Js`]) and extracts the declared character set, so a caller can
//! pick a body parser without matching on every MIME string itself.
//!
//! The MIME string to category table starts from built-in defaults and can be
//! extended at runtime through configuration (see [`config`]), e.g. to map
//! vendor types. `application/...+json` style types resolve through their
//! suffix even without a table entry.
//!
//! ## Example
//!
//! ```
//! use mimekind::config::Config;
//! use mimekind::{Category, ContentTypeResolver, Header};
//!
//! # fn main() -> Result<(), mimekind::ContentError> {
//! let resolver = ContentTypeResolver::new();
//! resolver.configure(&Config::builder().handler("text/csv", "text").build())?;
//!
//! assert_eq!(resolver.resolve("text/csv")?, Category::Text);
//! assert_eq!(resolver.resolve("application/problem+json")?, Category::Json);
//!
//! let headers = vec![Header::content_type("application/json; charset=utf-8")];
//! assert_eq!(resolver.resolve_from_headers(&headers), Category::Json);
//! assert_eq!(resolver.parse_charset(&headers), "UTF-8");
//! # Ok(())
//! # }
//! ```

pub mod category;
pub mod charset;
pub mod config;
pub mod error;
pub mod header;
pub mod mapping;
pub mod resolver;
pub mod text;

pub use category::Category;
pub use config::{load_config, load_config_optional, Config, ConfigBuilder, ConfigSource};
pub use error::ContentError;
pub use header::Header;
pub use mapping::MappingTable;
pub use resolver::{shared, ContentTypeResolver};
