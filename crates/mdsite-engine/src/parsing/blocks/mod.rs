//! # Block Parsing
//!
//! Two-phase block handling.
//!
//! 1. **Segmentation** (`classify::split_into_blocks`): the document is cut
//!    into [`Block`]s at blank lines, each line trimmed.
//! 2. **Classification** (`classify::classify`): a block's kind is decided by
//!    its opening line alone.
//!
//! ## Modules
//!
//! - **`types`**: `Block` and the closed `BlockKind` enum
//! - **`kinds`**: block types owning their markers (Heading, CodeFence,
//!   BlockQuote, OrderedList, UnorderedList, Paragraph)
//! - **`classify`**: segmentation and classification
//!
//! Classification holds no state: it is a pure function of the block text.

pub mod classify;
pub mod kinds;
pub mod types;

pub use classify::{classify, split_into_blocks};
pub use types::{Block, BlockKind};
