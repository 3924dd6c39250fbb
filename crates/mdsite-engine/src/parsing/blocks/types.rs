use std::fmt;

use super::classify::classify;

/// The kind of a top-level block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    /// One or more `#` headings.
    Heading,
    /// The default when no other opener matches.
    Paragraph,
    /// A ```` ``` ```` fenced code block.
    Code,
    /// A `>` blockquote.
    Quote,
    /// A `1. ` numbered list.
    OrderedList,
    /// A `- ` bulleted list.
    UnorderedList,
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BlockKind::Heading => "heading",
            BlockKind::Paragraph => "paragraph",
            BlockKind::Code => "code",
            BlockKind::Quote => "quote",
            BlockKind::OrderedList => "ordered list",
            BlockKind::UnorderedList => "unordered list",
        };
        f.write_str(name)
    }
}

/// A maximal run of non-blank, individually trimmed lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub raw: String,
}

impl Block {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// Classifies the block. Recomputed on every call.
    pub fn kind(&self) -> BlockKind {
        classify(&self.raw)
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.raw.lines()
    }
}
