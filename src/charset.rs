//! Character-set registry backed by `encoding_rs`.
//!
//! Labels follow the WHATWG Encoding Standard, so aliases resolve to their
//! canonical encoding: `utf8` becomes `UTF-8` and `latin1` becomes
//! `windows-1252`.

use encoding_rs::Encoding;
use log::debug;
use std::env;

/// Locale variables consulted for the platform charset, highest priority first.
const LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_CTYPE", "LANG"];

/// Canonical name of the encoding labelled `label`, if the registry knows it.
///
/// Labels that only map to the WHATWG `replacement` encoding are unknown here.
pub fn canonical_name(label: &str) -> Option<&'static str> {
    Encoding::for_label_no_replacement(label.as_bytes()).map(|encoding| encoding.name())
}

/// The charset of the current locale, or `UTF-8` when none is set or recognised.
pub fn platform_default() -> String {
    for var in LOCALE_VARS {
        let locale = match env::var(var) {
            Ok(value) if !value.trim().is_empty() => value,
            _ => continue,
        };
        // the first non-empty variable wins even without a codeset, like setlocale
        let name = codeset(&locale)
            .and_then(canonical_name)
            .unwrap_or(encoding_rs::UTF_8.name());
        debug!("platform charset {} from {}={}", name, var, locale);
        return name.to_string();
    }
    encoding_rs::UTF_8.name().to_string()
}

/// Codeset part of a POSIX locale name, e.g. `ISO-8859-15` in `de_DE.ISO-8859-15@euro`.
fn codeset(locale: &str) -> Option<&str> {
    let (_, rest) = locale.split_once('.')?;
    let codeset = rest.split('@').next().unwrap_or(rest).trim();
    if codeset.is_empty() {
        None
    } else {
        Some(codeset)
    }
}
