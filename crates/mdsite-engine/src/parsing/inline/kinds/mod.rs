//! # Inline Kinds
//!
//! Inline-specific types that own their syntax. The tokenizer reads these
//! constants and patterns; it never hardcodes `![`, `[` or `**` itself.
//!
//! ## Types
//!
//! - **`Image`**: `![alt](url)`
//! - **`Link`**: `[text](url)`
//! - **`Delimited`**: paired markers `**`, `_`, `` ` `` in pass order

pub mod delimited;
pub mod image;
pub mod link;

pub use delimited::Delimited;
pub use image::Image;
pub use link::Link;
