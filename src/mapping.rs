//! The MIME string to [`Category`] table.

use crate::category::Category;
use std::collections::HashMap;
use std::iter;

/// Key under which the fallback category is exposed.
pub const DEFAULT_KEY: &str = "default";

const BUILTIN_ENTRIES: [(&str, Category); 4] = [
    ("application/xml", Category::Xml),
    ("application/json", Category::Json),
    ("text/plain", Category::Text),
    ("application/x-javascript", Category::Js),
];

/// Maps MIME strings (matched verbatim, case preserved) to categories.
///
/// The `"default"` entry lives in its own field so the table can never be
/// without a fallback. Writing to `"default"` replaces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingTable {
    fallback: Category,
    entries: HashMap<String, Category>,
}

impl MappingTable {
    /// The built-in table: `default` and `application/xml` to XML,
    /// `application/json` to JSON, `text/plain` to TEXT and
    /// `application/x-javascript` to JS.
    pub fn builtin() -> Self {
        MappingTable {
            fallback: Category::Xml,
            entries: BUILTIN_ENTRIES
                .iter()
                .map(|&(mime, category)| (mime.to_string(), category))
                .collect(),
        }
    }

    pub fn get(&self, key: &str) -> Option<Category> {
        if key == DEFAULT_KEY {
            return Some(self.fallback);
        }
        self.entries.get(key).copied()
    }

    /// Inserts or overwrites a mapping, returning the previous category.
    pub fn insert(&mut self, key: impl Into<String>, category: Category) -> Option<Category> {
        let key = key.into();
        if key == DEFAULT_KEY {
            return Some(std::mem::replace(&mut self.fallback, category));
        }
        self.entries.insert(key, category)
    }

    pub fn fallback(&self) -> Category {
        self.fallback
    }

    /// Drops every custom entry and restores the built-in ones.
    pub fn reset(&mut self) {
        *self = MappingTable::builtin();
    }

    /// All keys mapped to `category`, `"default"` included. Order is unspecified.
    pub fn mime_strings(&self, category: Category) -> Vec<String> {
        self.iter()
            .filter(|&(_, c)| c == category)
            .map(|(key, _)| key.to_string())
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Category)> + '_ {
        iter::once((DEFAULT_KEY, self.fallback))
            .chain(self.entries.iter().map(|(k, &c)| (k.as_str(), c)))
    }

    pub fn len(&self) -> usize {
        self.entries.len() + 1
    }

    /// Always false; the fallback entry is permanent.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Default for MappingTable {
    fn default() -> Self {
        MappingTable::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_entries() {
        let table = MappingTable::builtin();
        assert_eq!(table.len(), 5);
        assert_eq!(table.get("default"), Some(Category::Xml));
        assert_eq!(table.get("application/xml"), Some(Category::Xml));
        assert_eq!(table.get("application/json"), Some(Category::Json));
        assert_eq!(table.get("text/plain"), Some(Category::Text));
        assert_eq!(table.get("application/x-javascript"), Some(Category::Js));
    }

    #[test]
    fn test_keys_are_matched_verbatim() {
        let table = MappingTable::builtin();
        assert_eq!(table.get("Application/JSON"), None);
        assert_eq!(table.get(" application/json"), None);
    }

    #[test]
    fn test_insert_last_write_wins() {
        let mut table = MappingTable::builtin();
        assert_eq!(table.insert("custom/type", Category::Text), None);
        assert_eq!(
            table.insert("custom/type", Category::Js),
            Some(Category::Text)
        );
        assert_eq!(table.get("custom/type"), Some(Category::Js));
        assert_eq!(table.len(), 6);
    }

    #[test]
    fn test_insert_default_replaces_fallback() {
        let mut table = MappingTable::builtin();
        assert_eq!(table.insert("default", Category::Json), Some(Category::Xml));
        assert_eq!(table.fallback(), Category::Json);
        assert_eq!(table.len(), 5);
    }

    #[test]
    fn test_reset_restores_builtin() {
        let mut table = MappingTable::builtin();
        table.insert("custom/type", Category::Text);
        table.insert("default", Category::Js);
        table.reset();
        assert_eq!(table, MappingTable::builtin());
        assert_eq!(table.get("custom/type"), None);
    }

    #[test]
    fn test_mime_strings() {
        let table = MappingTable::builtin();
        let mut xml = table.mime_strings(Category::Xml);
        xml.sort();
        assert_eq!(xml, vec!["application/xml", "default"]);
        assert_eq!(table.mime_strings(Category::Js), vec!["application/x-javascript"]);
    }
}
