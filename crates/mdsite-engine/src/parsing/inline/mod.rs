//! # Inline Parsing
//!
//! Turns one run of text (a paragraph, a heading line, a list item) into
//! typed [`TextSpan`]s.
//!
//! ## Modules
//!
//! - **`types`**: `TextSpan` and the closed `SpanKind` enum
//! - **`kinds`**: inline types owning their syntax (Image, Link, Delimited)
//! - **`parser`**: `tokenize()` entry point and the splitting passes
//!
//! ## Pass Order
//!
//! Images are extracted before links so `![alt](url)` is never read as a
//! link. Emphasis passes run last and only touch text still tagged plain.

pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::tokenize;
pub use types::{SpanKind, TextSpan};
