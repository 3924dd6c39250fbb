use super::{
    kinds::{BlockQuote, CodeFence, Heading, OrderedList, UnorderedList},
    types::{Block, BlockKind},
};

/// Splits a document into blocks separated by blank lines.
///
/// Each line is trimmed; lines inside a block keep their `\n` separators.
/// A blank document yields no blocks.
pub fn split_into_blocks(document: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in document.lines() {
        let line = line.trim();
        if line.is_empty() {
            if !current.is_empty() {
                blocks.push(Block::new(current.join("\n")));
                current.clear();
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        blocks.push(Block::new(current.join("\n")));
    }

    blocks
}

/// Classifies a block by its opening line only.
///
/// First match wins: heading, code fence, quote, ordered list, unordered
/// list, paragraph. Later lines are never inspected, so a block whose second
/// line lacks the prefix keeps the kind of its first line.
pub fn classify(block: &str) -> BlockKind {
    let first_line = block.lines().next().unwrap_or("");

    if Heading::opens(first_line) {
        BlockKind::Heading
    } else if CodeFence::opens(block) {
        BlockKind::Code
    } else if BlockQuote::opens(block) {
        BlockKind::Quote
    } else if OrderedList::opens(first_line) {
        BlockKind::OrderedList
    } else if UnorderedList::opens(block) {
        BlockKind::UnorderedList
    } else {
        BlockKind::Paragraph
    }
}
