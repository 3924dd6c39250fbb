//! Block-to-tree compilation.
//!
//! Every block becomes one node under a root `div`, except heading blocks,
//! which emit one sibling heading per line. The first construction error
//! aborts the whole document.
//!
//! The root itself is not validated until rendering: a blank document
//! compiles to an empty root, and rendering that root fails.

use crate::error::HtmlError;
use crate::html::{Attributes, Container, Leaf, Node};
use crate::parsing::{
    blocks::{
        Block, BlockKind,
        kinds::{BlockQuote, CodeFence, Heading, OrderedList, Paragraph, UnorderedList},
    },
    inline::tokenize,
    parse_blocks,
};

pub const ROOT_TAG: &str = "div";

/// Compiles a markdown document into a root `div` container.
pub fn compile_document(markdown: &str) -> Result<Node, HtmlError> {
    let mut children = Vec::new();
    for (kind, block) in parse_blocks(markdown) {
        compile_block(kind, &block, &mut children)?;
    }
    Ok(Container {
        tag: ROOT_TAG.to_string(),
        children,
        attributes: Attributes::new(),
    }
    .into())
}

/// Compiles and renders a markdown document to an HTML fragment.
pub fn markdown_to_html(markdown: &str) -> Result<String, HtmlError> {
    compile_document(markdown)?.render()
}

fn compile_block(kind: BlockKind, block: &Block, out: &mut Vec<Node>) -> Result<(), HtmlError> {
    match kind {
        BlockKind::Heading => {
            for line in block.lines() {
                out.push(heading(line)?);
            }
        }
        BlockKind::Paragraph => out.push(inline_container("p", &Paragraph::text(&block.raw))?),
        BlockKind::Code => out.push(code(&block.raw)?),
        BlockKind::Quote => {
            out.push(inline_container("blockquote", &BlockQuote::text(&block.raw))?)
        }
        BlockKind::OrderedList => out.push(list("ol", block, OrderedList::item_text)?),
        BlockKind::UnorderedList => out.push(list("ul", block, UnorderedList::item_text)?),
    }
    Ok(())
}

/// Tokenizes `text` and wraps its spans in a `tag` container.
fn inline_container(tag: &str, text: &str) -> Result<Node, HtmlError> {
    let children = tokenize(text)?
        .iter()
        .map(|span| span.to_node())
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Container::new(tag, children)?.into())
}

fn heading(line: &str) -> Result<Node, HtmlError> {
    let tag = format!("h{}", Heading::level(line));
    inline_container(&tag, Heading::text(line))
}

/// Code is never tokenized: `pre > code > raw text`.
fn code(block: &str) -> Result<Node, HtmlError> {
    let body: Node = Leaf::text(CodeFence::body(block)).into();
    let code = Container::new("code", vec![body])?;
    Ok(Container::new("pre", vec![code.into()])?.into())
}

fn list(tag: &str, block: &Block, item_text: fn(&str) -> &str) -> Result<Node, HtmlError> {
    let items = block
        .lines()
        .map(|line| inline_container("li", item_text(line)))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Container::new(tag, items)?.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ContainerDefect;
    use crate::parsing::inline::SpanKind;
    use insta::assert_snapshot;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn html(md: &str) -> String {
        markdown_to_html(md).unwrap()
    }

    #[test]
    fn mixed_document_structure() {
        let root =
            compile_document("# Title\n\nSome **bold** and _italic_ and `code` text.\n\n- one\n- two")
                .unwrap();
        assert_eq!(root.tag(), Some("div"));
        let tags: Vec<_> = root.children().iter().map(|n| n.tag()).collect();
        assert_eq!(tags, vec![Some("h1"), Some("p"), Some("ul")]);

        assert_eq!(root.children()[0].render().unwrap(), "<h1>Title</h1>");
        assert_eq!(
            root.children()[1].render().unwrap(),
            "<p>Some <b>bold</b> and <i>italic</i> and <code>code</code> text.</p>"
        );
        let items = root.children()[2].children();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].render().unwrap(), "<li>one</li>");
        assert_eq!(items[1].render().unwrap(), "<li>two</li>");
    }

    #[test]
    fn paragraphs() {
        let md = "
    This is **bolded** paragraph
    text in a p
    tag here

    This is another paragraph with _italic_ text and `code` here
    ";
        assert_snapshot!(
            html(md),
            @"<div><p>This is <b>bolded</b> paragraph text in a p tag here</p><p>This is another paragraph with <i>italic</i> text and <code>code</code> here</p></div>"
        );
    }

    #[test]
    fn code_block_is_not_tokenized() {
        let md = "
    ```
    This is text that _should_ remain
    the **same** even with inline stuff
    ```
    ";
        assert_eq!(
            html(md),
            "<div><pre><code>This is text that _should_ remain\nthe **same** even with inline stuff\n</code></pre></div>"
        );
    }

    #[test]
    fn multi_line_heading_block_emits_siblings() {
        assert_eq!(
            html("# Heading 1\n## Heading 2\n### Heading 3"),
            "<div><h1>Heading 1</h1><h2>Heading 2</h2><h3>Heading 3</h3></div>"
        );
    }

    #[test]
    fn heading_block_with_two_levels() {
        let root = compile_document("# A\n## B").unwrap();
        let headings: Vec<_> = root
            .children()
            .iter()
            .map(|n| n.render().unwrap())
            .collect();
        assert_eq!(headings, vec!["<h1>A</h1>", "<h2>B</h2>"]);
    }

    #[test]
    fn bare_marker_line_in_heading_block_is_empty_h1() {
        assert_eq!(html("# A\n#"), "<div><h1>A</h1><h1></h1></div>");
    }

    #[test]
    fn blockquote_lines_run_together() {
        assert_eq!(
            html("> This is a quote\n> with **two** lines"),
            "<div><blockquote>This is a quotewith <b>two</b> lines</blockquote></div>"
        );
    }

    #[test]
    fn quote_accepts_unprefixed_continuation() {
        assert_eq!(
            html("> first\nsecond"),
            "<div><blockquote>firstsecond</blockquote></div>"
        );
    }

    #[rstest]
    #[case(
        "1. First item\n2. Second item\n3. Third item",
        "<div><ol><li>First item</li><li>Second item</li><li>Third item</li></ol></div>"
    )]
    #[case(
        "- Apple\n- Banana\n- Cherry",
        "<div><ul><li>Apple</li><li>Banana</li><li>Cherry</li></ul></div>"
    )]
    #[case(
        "1. only the first\nis numbered",
        "<div><ol><li>only the first</li><li>is numbered</li></ol></div>"
    )]
    fn lists(#[case] md: &str, #[case] expected: &str) {
        assert_eq!(html(md), expected);
    }

    #[test]
    fn list_items_are_tokenized() {
        assert_eq!(
            html("- see [docs](https://example.com)\n- `code` item"),
            r#"<div><ul><li>see <a href="https://example.com">docs</a></li><li><code>code</code> item</li></ul></div>"#
        );
    }

    #[test]
    fn image_inside_paragraph() {
        assert_eq!(
            html("![alt](http://x/y.png)"),
            r#"<div><p><img src="http://x/y.png" alt="alt"/></p></div>"#
        );
    }

    #[test]
    fn mixed_blocks() {
        let md = "# Title

Some paragraph text.

- Item 1
- Item 2

> A quote

1. First
2. Second
    ";
        assert_snapshot!(
            html(md),
            @"<div><h1>Title</h1><p>Some paragraph text.</p><ul><li>Item 1</li><li>Item 2</li></ul><blockquote>A quote</blockquote><ol><li>First</li><li>Second</li></ol></div>"
        );
    }

    #[test]
    fn empty_link_url_fails_the_whole_document() {
        let md = "# Fine\n\nA [broken]() link.";
        assert_eq!(
            compile_document(md),
            Err(HtmlError::MissingUrl {
                kind: SpanKind::Link
            })
        );
    }

    #[test]
    fn blank_document_fails_to_render() {
        let root = compile_document("\n\n").unwrap();
        assert!(root.children().is_empty());
        assert_eq!(
            root.render(),
            Err(HtmlError::InvalidContainer {
                tag: "div".to_string(),
                defect: ContainerDefect::EmptyChildren,
            })
        );
    }

    #[test]
    fn whitespace_only_paragraph_content_fails() {
        // `` ` ` `` drops out entirely, leaving the paragraph without children.
        assert!(matches!(
            compile_document("` `"),
            Err(HtmlError::InvalidContainer {
                defect: ContainerDefect::EmptyChildren,
                ..
            })
        ));
    }

    #[test]
    fn render_is_idempotent() {
        let root = compile_document("# T\n\n_x_ and **y**\n\n```\ncode\n```").unwrap();
        let first = root.render().unwrap();
        assert_eq!(first, root.render().unwrap());
    }
}
