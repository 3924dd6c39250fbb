use std::sync::LazyLock;

use regex::Regex;

/// Ordered list block type: items prefixed with `<digits>. `.
pub struct OrderedList;

static ORDERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\. ").expect("valid ordered list pattern"));

impl OrderedList {
    /// Whether `line` starts an ordered list item.
    pub fn opens(line: &str) -> bool {
        ORDERED_ITEM.is_match(line)
    }

    /// Item text with its number prefix removed. Unnumbered lines are only trimmed.
    pub fn item_text(line: &str) -> &str {
        let line = line.trim();
        match ORDERED_ITEM.find(line) {
            Some(m) => line[m.end()..].trim(),
            None => line,
        }
    }
}

/// Unordered list block type: items prefixed with `- `.
pub struct UnorderedList;

impl UnorderedList {
    pub const BULLET: &'static str = "- ";

    pub fn opens(block: &str) -> bool {
        block.starts_with(Self::BULLET)
    }

    /// Item text with its bullet removed. Lines without a bullet are only trimmed.
    pub fn item_text(line: &str) -> &str {
        let line = line.trim();
        line.strip_prefix(Self::BULLET).unwrap_or(line).trim()
    }
}
