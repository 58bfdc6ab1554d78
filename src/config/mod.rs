use crate::error::ContentError;
use log::{debug, info, warn};
use serde::Deserialize;
use serde::Serialize;
use std::collections::HashMap;
use std::env;
use std::fmt;
use std::fs;
use std::io::ErrorKind;

/*
Configuration Loading
=====================

Configuration is loaded in the following order, with later sources overriding
earlier ones:

1. DEFAULTS: nothing is set; every lookup falls back to the caller's default
2. CONFIG FILE: optional JSON object of string values
3. ENVIRONMENT VARIABLES: always take highest precedence

Keys and the environment variables overriding them:
- content.default.charset  <- MIMEKIND_CONTENT_DEFAULT_CHARSET
- content.handlers.map     <- MIMEKIND_CONTENT_HANDLERS_MAP

`content.handlers.map` holds newline separated `mime=CATEGORY` pairs and may
be HTML-escaped, e.g. when copied out of a wiki page:

```json
{
  "content.default.charset": "ISO-8859-1",
  "content.handlers.map": "application/vnd.acme+xml=xml<br/>text/csv=text"
}
```
*/

pub const CONTENT_DEFAULT_CHARSET: &str = "content.default.charset";
pub const CONTENT_HANDLERS_MAP: &str = "content.handlers.map";

pub const ENV_CONTENT_DEFAULT_CHARSET: &str = "MIMEKIND_CONTENT_DEFAULT_CHARSET";
pub const ENV_CONTENT_HANDLERS_MAP: &str = "MIMEKIND_CONTENT_HANDLERS_MAP";

/// String lookups with caller-supplied defaults.
pub trait ConfigSource {
    fn get(&self, key: &str, default: &str) -> String;
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct Config {
    #[serde(
        rename = "content.default.charset",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    content_default_charset: Option<String>,
    #[serde(
        rename = "content.handlers.map",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    content_handlers_map: Option<String>,
}

/// Builder for creating Config instances with a fluent API.
///
/// # Example
/// ```
/// use mimekind::config::{Config, ConfigSource, CONTENT_HANDLERS_MAP};
///
/// let config = Config::builder()
///     .default_charset("ISO-8859-1")
///     .handler("application/vnd.acme", "json")
///     .handler("text/csv", "text")
///     .build();
/// assert_eq!(
///     config.get(CONTENT_HANDLERS_MAP, ""),
///     "application/vnd.acme=json\ntext/csv=text"
/// );
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    default_charset: Option<String>,
    handlers_map: Option<String>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the charset reported when a response does not declare one.
    pub fn default_charset(mut self, charset: &str) -> Self {
        self.default_charset = Some(charset.to_string());
        self
    }

    /// Append a `mime=category` line to the handlers map.
    ///
    /// The category name is checked when the config is applied, not here.
    pub fn handler(mut self, mime: &str, category: &str) -> Self {
        let line = format!("{}={}", mime, category);
        self.handlers_map = Some(match self.handlers_map.take() {
            Some(map) if !map.is_empty() => format!("{}\n{}", map, line),
            _ => line,
        });
        self
    }

    /// Replace the handlers map with a raw (possibly HTML-escaped) value.
    pub fn handlers_map(mut self, raw: &str) -> Self {
        self.handlers_map = Some(raw.to_string());
        self
    }

    pub fn build(self) -> Config {
        Config {
            content_default_charset: self.default_charset,
            content_handlers_map: self.handlers_map,
        }
    }
}

impl Config {
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    pub fn content_default_charset(&self) -> Option<&str> {
        self.content_default_charset.as_deref()
    }

    pub fn content_handlers_map(&self) -> Option<&str> {
        self.content_handlers_map.as_deref()
    }

    /// Value for `key`, if set. Unknown keys are never set.
    pub fn get_opt(&self, key: &str) -> Option<&str> {
        match key {
            CONTENT_DEFAULT_CHARSET => self.content_default_charset(),
            CONTENT_HANDLERS_MAP => self.content_handlers_map(),
            _ => None,
        }
    }

    /// Sets a known key. Unknown keys are rejected.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ContentError> {
        match key {
            CONTENT_DEFAULT_CHARSET => self.content_default_charset = Some(value.to_string()),
            CONTENT_HANDLERS_MAP => self.content_handlers_map = Some(value.to_string()),
            _ => {
                return Err(ContentError::ConfigInvalid {
                    field: key.to_string(),
                    reason: "unknown configuration key".to_string(),
                })
            }
        }
        Ok(())
    }

    /// Merge another config into this one.
    /// Values from `other` will override values in `self` if they are Some.
    pub fn merge(&mut self, other: Config) {
        if other.content_default_charset.is_some() {
            self.content_default_charset = other.content_default_charset;
        }
        if other.content_handlers_map.is_some() {
            self.content_handlers_map = other.content_handlers_map;
        }
    }

    /// Apply environment variable overrides to this config.
    ///
    /// Reads `MIMEKIND_CONTENT_DEFAULT_CHARSET` and
    /// `MIMEKIND_CONTENT_HANDLERS_MAP`; unset or empty variables are ignored.
    pub fn apply_env_overrides(&mut self) {
        fn env_opt(key: &str) -> Option<String> {
            match env::var(key) {
                Ok(val) if !val.is_empty() => Some(val),
                _ => None,
            }
        }

        if let Some(val) = env_opt(ENV_CONTENT_DEFAULT_CHARSET) {
            debug!("{} overrides {}", ENV_CONTENT_DEFAULT_CHARSET, CONTENT_DEFAULT_CHARSET);
            self.content_default_charset = Some(val);
        }
        if let Some(val) = env_opt(ENV_CONTENT_HANDLERS_MAP) {
            debug!("{} overrides {}", ENV_CONTENT_HANDLERS_MAP, CONTENT_HANDLERS_MAP);
            self.content_handlers_map = Some(val);
        }
    }

    /// Load config from a JSON file without applying environment overrides.
    pub fn from_file(path: &str) -> Result<Config, ContentError> {
        let json_str = fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ContentError::ConfigNotFound {
                path: path.to_string(),
            },
            _ => ContentError::from(e),
        })?;
        let config: Config = serde_json::from_str(&json_str)?;
        Ok(config)
    }
}

impl ConfigSource for Config {
    fn get(&self, key: &str, default: &str) -> String {
        self.get_opt(key).unwrap_or(default).to_string()
    }
}

impl ConfigSource for HashMap<String, String> {
    fn get(&self, key: &str, default: &str) -> String {
        HashMap::get(self, key)
            .map(String::as_str)
            .unwrap_or(default)
            .to_string()
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            r#"
        Loading mimekind config variables of:
            {}: {},
            {}:    {},
        "#,
            CONTENT_DEFAULT_CHARSET,
            self.content_default_charset.as_deref().unwrap_or(""),
            CONTENT_HANDLERS_MAP,
            self.content_handlers_map
                .as_deref()
                .unwrap_or("")
                .replace('\n', "\\n")
        )
    }
}

/// Load configuration: defaults, then the config file, then environment variables.
///
/// A config file that was asked for but cannot be loaded is an error.
pub fn load_config(config_path: Option<&str>) -> Result<Config, ContentError> {
    let mut config = Config::default();

    if let Some(path) = config_path {
        let file_config = Config::from_file(path)?;
        info!("Loaded config file: {}", path);
        config.merge(file_config);
    }

    config.apply_env_overrides();

    info!("Final config:{}", config);
    Ok(config)
}

/// Like [`load_config`], but a missing or unreadable config file only logs.
pub fn load_config_optional(config_path: Option<&str>) -> Config {
    let mut config = Config::default();

    if let Some(path) = config_path {
        match Config::from_file(path) {
            Ok(file_config) => {
                info!("Loaded config file: {}", path);
                config.merge(file_config);
            }
            Err(ContentError::ConfigNotFound { .. }) => {
                info!(
                    "Config file '{}' not found. Using defaults and environment variables.",
                    path
                );
            }
            Err(e) => {
                warn!("Failed to parse config file '{}': {}. Using defaults.", path, e);
            }
        }
    }

    config.apply_env_overrides();

    info!("Final config:{}", config);
    config
}
