use std::sync::LazyLock;

use regex::Regex;

/// Link inline type: `[text](url)`.
///
/// Images are extracted before links, so the pattern does not need to guard
/// against a leading `!`.
pub struct Link;

static PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(.*?)\]\((.*?)\)").expect("valid link pattern"));

impl Link {
    /// Pattern capturing `(text, url)`.
    pub fn pattern() -> &'static Regex {
        &PATTERN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_each_link_lazily() {
        let found: Vec<_> = Link::pattern()
            .captures_iter("[one](a) and [two](b)")
            .map(|c| (c[1].to_string(), c[2].to_string()))
            .collect();
        assert_eq!(
            found,
            vec![
                ("one".to_string(), "a".to_string()),
                ("two".to_string(), "b".to_string())
            ]
        );
    }

    #[test]
    fn empty_url_still_matches() {
        let caps = Link::pattern().captures("[text]()").unwrap();
        assert_eq!(&caps[2], "");
    }
}
