/// Paragraph block type (marker struct).
///
/// Paragraphs have no delimiters - they are the default block when no other
/// opener matches.
pub struct Paragraph;

impl Paragraph {
    /// Joins the block's lines with single spaces.
    pub fn text(block: &str) -> String {
        block.replace('\n', " ").trim().to_string()
    }
}
