//! Text helpers used to decode configuration values.
//!
//! Handler maps usually arrive from wiki or HTML pages, so values are
//! entity-escaped and line breaks may be `<br/>` tags.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    static ref LINE_BREAK: Regex =
        Regex::new(r"(?i)<br\s*/?>").expect("line break pattern is valid");
    static ref ENTITY: Regex =
        Regex::new(r"&(#[xX][0-9a-fA-F]+|#[0-9]+|[a-zA-Z]+);").expect("entity pattern is valid");
}

const OPEN_ESCAPE: &str = "!-";
const CLOSE_ESCAPE: &str = "-!";

/// Decodes HTML line breaks and entities.
///
/// ```
/// use mimekind::text::unescape_html;
///
/// assert_eq!(unescape_html("a=b<br/>c&amp;d=e"), "a=b\nc&d=e");
/// ```
pub fn unescape_html(text: &str) -> String {
    let text = LINE_BREAK.replace_all(text, "\n");
    ENTITY
        .replace_all(&text, |caps: &Captures| match decode_entity(&caps[1]) {
            Some(c) => c.to_string(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

fn decode_entity(entity: &str) -> Option<char> {
    if let Some(hex) = entity
        .strip_prefix("#x")
        .or_else(|| entity.strip_prefix("#X"))
    {
        return u32::from_str_radix(hex, 16).ok().and_then(char::from_u32);
    }
    if let Some(dec) = entity.strip_prefix('#') {
        return dec.parse::<u32>().ok().and_then(char::from_u32);
    }
    match entity {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some(' '),
        _ => None,
    }
}

fn strip_escapes(text: &str) -> &str {
    let text = text.trim();
    let text = text.strip_prefix(OPEN_ESCAPE).unwrap_or(text).trim();
    text.strip_suffix(CLOSE_ESCAPE).unwrap_or(text).trim()
}

/// Parses `key<kv_sep>value` entries separated by `entry_sep`.
///
/// Keys and values are trimmed, blank entries skipped, and an entry without
/// `kv_sep` gets an empty value. Only the first `kv_sep` splits, so values
/// may contain it. Wiki escape markers (`!-` ... `-!`) are removed.
pub fn string_to_pairs(text: &str, kv_sep: &str, entry_sep: &str) -> Vec<(String, String)> {
    strip_escapes(text)
        .split(entry_sep)
        .map(strip_escapes)
        .filter(|entry| !entry.is_empty())
        .map(|entry| match entry.split_once(kv_sep) {
            Some((key, value)) => (key.trim().to_string(), value.trim().to_string()),
            None => (entry.to_string(), String::new()),
        })
        .collect()
}
