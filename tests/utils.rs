use mimekind::{ContentTypeResolver, Header};
use std::env;

#[allow(dead_code)]
pub const TEST_CHARSET: &str = "ISO-8859-15";

#[allow(dead_code)]
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A resolver with a fixed default charset so results don't depend on the locale.
#[allow(dead_code)]
pub fn test_resolver() -> ContentTypeResolver {
    ContentTypeResolver::with_default_charset(TEST_CHARSET)
}

#[allow(dead_code)]
pub fn content_type(value: &str) -> Vec<Header> {
    vec![Header::content_type(value)]
}

#[allow(dead_code)]
pub fn clear_test_env_vars() {
    env::remove_var("MIMEKIND_CONTENT_DEFAULT_CHARSET");
    env::remove_var("MIMEKIND_CONTENT_HANDLERS_MAP");
}
