pub mod blocks;
pub mod inline;

use blocks::{Block, BlockKind, split_into_blocks};

/// Splits a document into blocks paired with their kinds.
pub fn parse_blocks(markdown: &str) -> Vec<(BlockKind, Block)> {
    split_into_blocks(markdown)
        .into_iter()
        .map(|block| {
            let kind = block.kind();
            log::debug!("classified block as {kind}: {:?}", block.raw);
            (kind, block)
        })
        .collect()
}
