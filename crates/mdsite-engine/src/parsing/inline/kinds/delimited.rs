use crate::parsing::inline::SpanKind;

/// Paired-delimiter inline type (bold, italic, code).
pub struct Delimited;

impl Delimited {
    pub const BOLD: &'static str = "**";
    pub const ITALIC: &'static str = "_";
    pub const CODE: &'static str = "`";

    /// Delimiter passes in application order. Later passes only see text
    /// still tagged plain.
    pub const PASSES: [(&'static str, SpanKind); 3] = [
        (Self::BOLD, SpanKind::Bold),
        (Self::ITALIC, SpanKind::Italic),
        (Self::CODE, SpanKind::Code),
    ];
}
