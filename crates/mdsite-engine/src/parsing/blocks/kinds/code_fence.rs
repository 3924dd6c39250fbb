/// Fenced code block type with owned fence constant.
pub struct CodeFence;

impl CodeFence {
    pub const FENCE: &'static str = "```";

    pub fn opens(block: &str) -> bool {
        block.starts_with(Self::FENCE)
    }

    /// Raw code body: every fence removed, leading whitespace stripped.
    ///
    /// Text after the opening fence (an info string) is kept as part of the body.
    pub fn body(block: &str) -> String {
        block.replace(Self::FENCE, "").trim_start().to_string()
    }
}
