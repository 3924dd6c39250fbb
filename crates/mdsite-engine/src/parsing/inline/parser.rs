use regex::Regex;

use crate::error::HtmlError;

use super::{
    kinds::{Delimited, Image, Link},
    types::{SpanKind, TextSpan},
};

/// Tokenizes a run of inline text into an ordered sequence of [`TextSpan`]s.
///
/// # Precedence
/// 1. Images (`![alt](url)`)
/// 2. Links (`[text](url)`), only inside text left plain by step 1
/// 3. Delimiter passes for `**`, `_` and `` ` ``, in that order, each only
///    re-splitting spans still tagged plain
///
/// There is no nesting: the text of a bold span is never re-scanned.
///
/// # Errors
/// [`HtmlError::MissingUrl`] if a link or image has an empty url.
pub fn tokenize(text: &str) -> Result<Vec<TextSpan>, HtmlError> {
    let spans = vec![TextSpan::plain(text)];
    let spans = split_pattern(spans, Image::pattern(), |alt, url| TextSpan::image(alt, url))?;
    let mut spans = split_pattern(spans, Link::pattern(), |text, url| TextSpan::link(text, url))?;
    for (delimiter, kind) in Delimited::PASSES {
        spans = split_delimiter(spans, delimiter, kind);
    }
    Ok(spans)
}

/// Splits every plain span around the matches of `pattern`.
///
/// Each match becomes a span built from its two capture groups; the text
/// between matches stays plain. Whitespace-only runs between matches are
/// dropped. Spans with no match pass through unchanged.
pub fn split_pattern<F>(
    spans: Vec<TextSpan>,
    pattern: &Regex,
    make: F,
) -> Result<Vec<TextSpan>, HtmlError>
where
    F: Fn(&str, &str) -> Result<TextSpan, HtmlError>,
{
    let mut out = Vec::with_capacity(spans.len());

    // Pushes a literal run unless it is blank
    fn flush_text(out: &mut Vec<TextSpan>, text: &str) {
        if !text.trim().is_empty() {
            out.push(TextSpan::plain(text));
        }
    }

    for span in spans {
        if span.kind != SpanKind::Plain || !pattern.is_match(&span.text) {
            out.push(span);
            continue;
        }

        let mut last = 0;
        for caps in pattern.captures_iter(&span.text) {
            let Some(whole) = caps.get(0) else {
                continue;
            };
            flush_text(&mut out, &span.text[last..whole.start()]);
            let inner = caps.get(1).map_or("", |m| m.as_str());
            let url = caps.get(2).map_or("", |m| m.as_str());
            out.push(make(inner, url)?);
            last = whole.end();
        }
        flush_text(&mut out, &span.text[last..]);
    }

    Ok(out)
}

/// Splits every plain span on `delimiter`, tagging odd-indexed parts with `kind`.
///
/// A span only splits when the delimiter occurs in balanced pairs (an odd
/// number of parts); otherwise it passes through unchanged. Parts that are
/// blank after trimming are dropped, which also drops deliberately empty
/// spans such as `` ` ` ``. Kept parts are not trimmed.
pub fn split_delimiter(spans: Vec<TextSpan>, delimiter: &str, kind: SpanKind) -> Vec<TextSpan> {
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        if span.kind != SpanKind::Plain {
            out.push(span);
            continue;
        }

        let parts: Vec<&str> = span.text.split(delimiter).collect();
        if parts.len() == 1 || parts.len() % 2 == 0 {
            out.push(span);
            continue;
        }

        for (i, part) in parts.into_iter().enumerate() {
            if part.trim().is_empty() {
                continue;
            }
            let part_kind = if i % 2 == 0 { SpanKind::Plain } else { kind };
            out.push(TextSpan {
                kind: part_kind,
                text: part.to_string(),
                url: None,
            });
        }
    }

    out
}
