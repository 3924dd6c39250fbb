use std::sync::LazyLock;

use regex::Regex;

/// ATX heading block type with owned marker constant.
pub struct Heading;

static OPENER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#{1,6} ").expect("valid heading pattern"));

impl Heading {
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: u8 = 6;

    /// Whether `line` opens a heading: 1-6 `#` then a space.
    pub fn opens(line: &str) -> bool {
        OPENER.is_match(line)
    }

    /// Heading level from the leading `#` count, clamped into `1..=6`.
    pub fn level(line: &str) -> u8 {
        let hashes = line.chars().take_while(|&c| c == Self::MARKER).count();
        hashes.clamp(1, Self::MAX_LEVEL as usize) as u8
    }

    /// Heading text with the `#` run and surrounding whitespace removed.
    pub fn text(line: &str) -> &str {
        line.trim().trim_start_matches(Self::MARKER).trim()
    }
}
