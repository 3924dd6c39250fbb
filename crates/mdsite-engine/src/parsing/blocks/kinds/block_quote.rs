/// Blockquote block type with owned prefix constant.
pub struct BlockQuote;

impl BlockQuote {
    pub const PREFIX: char = '>';

    pub fn opens(block: &str) -> bool {
        block.starts_with(Self::PREFIX)
    }

    /// Strips every leading `>` and surrounding whitespace from one line.
    ///
    /// Lines without a prefix are only trimmed.
    pub fn strip_line(line: &str) -> &str {
        line.trim().trim_start_matches(Self::PREFIX).trim()
    }

    /// Quote text: each line stripped, then concatenated with no separator.
    pub fn text(block: &str) -> String {
        block.lines().map(Self::strip_line).collect()
    }
}
