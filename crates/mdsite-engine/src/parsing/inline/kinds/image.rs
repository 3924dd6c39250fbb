use std::sync::LazyLock;

use regex::Regex;

/// Image inline type: `![alt](url)`.
pub struct Image;

static PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[(.*?)\]\((.*?)\)").expect("valid image pattern"));

impl Image {
    /// Pattern capturing `(alt, url)`.
    pub fn pattern() -> &'static Regex {
        &PATTERN
    }
}
