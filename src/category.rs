use crate::error::ContentError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

/// Logical content categories a response body can be handled as.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    AsRefStr,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
pub enum Category {
    #[strum(serialize = "XML")]
    #[serde(rename = "XML")]
    Xml,
    #[strum(serialize = "JSON")]
    #[serde(rename = "JSON")]
    Json,
    #[strum(serialize = "TEXT")]
    #[serde(rename = "TEXT")]
    Text,
    #[strum(serialize = "JS")]
    #[serde(rename = "JS")]
    Js,
}

impl Category {
    /// Looks up a category by name, ignoring case.
    ///
    /// ```
    /// use mimekind::Category;
    ///
    /// assert_eq!(Category::from_name("json").unwrap(), Category::Json);
    /// assert!(Category::from_name("yaml").is_err());
    /// ```
    pub fn from_name(name: &str) -> Result<Category, ContentError> {
        Category::from_str(&name.to_uppercase()).map_err(|_| ContentError::UnknownCategory {
            name: name.to_string(),
        })
    }

    /// Valid category names in declaration order.
    pub fn names() -> Vec<&'static str> {
        Category::iter().map(|c| c.into()).collect()
    }

    /// MIME strings currently mapped to this category by the shared resolver.
    pub fn to_mime(self) -> Vec<String> {
        crate::resolver::shared().list_mime_strings(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_is_case_insensitive() {
        assert_eq!(Category::from_name("xml").unwrap(), Category::Xml);
        assert_eq!(Category::from_name("Json").unwrap(), Category::Json);
        assert_eq!(Category::from_name("TEXT").unwrap(), Category::Text);
        assert_eq!(Category::from_name("js").unwrap(), Category::Js);
    }

    #[test]
    fn test_from_name_unknown() {
        let err = Category::from_name("bogus").unwrap_err();
        assert!(matches!(err, ContentError::UnknownCategory { ref name } if name == "bogus"));
    }

    #[test]
    fn test_from_name_rejects_padding() {
        assert!(Category::from_name(" json").is_err());
        assert!(Category::from_name("").is_err());
    }

    #[test]
    fn test_names_and_display() {
        assert_eq!(Category::names(), vec!["XML", "JSON", "TEXT", "JS"]);
        assert_eq!(Category::Js.to_string(), "JS");
        assert_eq!(Category::Text.as_ref(), "TEXT");
    }

    #[test]
    fn test_serde_uses_upper_case_names() {
        let json = serde_json::to_string(&Category::Json).unwrap();
        assert_eq!(json, "\"JSON\"");
        let back: Category = serde_json::from_str("\"JS\"").unwrap();
        assert_eq!(back, Category::Js);
    }
}
