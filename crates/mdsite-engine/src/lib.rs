pub mod compile;
pub mod error;
pub mod html;
pub mod io;
pub mod parsing;
pub mod site;
pub mod title;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use compile::{compile_document, markdown_to_html};
pub use error::{ContainerDefect, HtmlError, LeafDefect, TitleError};
pub use html::{Attributes, Container, Leaf, Node};
pub use parsing::{
    blocks::{Block, BlockKind, classify, split_into_blocks},
    inline::{SpanKind, TextSpan, tokenize},
};
pub use site::{BuildReport, PageError, Site, SiteConfig, SiteError, Template};
pub use title::extract_title;
