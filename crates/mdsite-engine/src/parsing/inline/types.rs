use std::fmt;
use std::str::FromStr;

use crate::error::HtmlError;
use crate::html::{Attributes, Leaf, Node};

/// The formatting kind of an inline span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanKind {
    Plain,
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

impl SpanKind {
    pub const ALL: [SpanKind; 6] = [
        SpanKind::Plain,
        SpanKind::Bold,
        SpanKind::Italic,
        SpanKind::Code,
        SpanKind::Link,
        SpanKind::Image,
    ];

    /// Whether spans of this kind carry a url.
    pub fn takes_url(self) -> bool {
        matches!(self, SpanKind::Link | SpanKind::Image)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SpanKind::Plain => "plain",
            SpanKind::Bold => "bold",
            SpanKind::Italic => "italic",
            SpanKind::Code => "code",
            SpanKind::Link => "link",
            SpanKind::Image => "image",
        }
    }
}

impl fmt::Display for SpanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SpanKind {
    type Err = HtmlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SpanKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| HtmlError::UnknownSpanKind(s.to_string()))
    }
}

/// A contiguous run of inline text tagged with one formatting kind.
///
/// `url` is `Some` exactly for [`SpanKind::Link`] and [`SpanKind::Image`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSpan {
    pub kind: SpanKind,
    pub text: String,
    pub url: Option<String>,
}

impl TextSpan {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            kind: SpanKind::Plain,
            text: text.into(),
            url: None,
        }
    }

    /// Creates a span of a kind that takes no url.
    pub fn new(kind: SpanKind, text: impl Into<String>) -> Result<Self, HtmlError> {
        if kind.takes_url() {
            return Err(HtmlError::MissingUrl { kind });
        }
        Ok(Self {
            kind,
            text: text.into(),
            url: None,
        })
    }

    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Result<Self, HtmlError> {
        Self::with_url(SpanKind::Link, text.into(), url.into())
    }

    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Result<Self, HtmlError> {
        Self::with_url(SpanKind::Image, alt.into(), url.into())
    }

    fn with_url(kind: SpanKind, text: String, url: String) -> Result<Self, HtmlError> {
        if url.is_empty() {
            return Err(HtmlError::MissingUrl { kind });
        }
        Ok(Self {
            kind,
            text,
            url: Some(url),
        })
    }

    fn require_url(&self) -> Result<&str, HtmlError> {
        self.url
            .as_deref()
            .filter(|url| !url.is_empty())
            .ok_or(HtmlError::MissingUrl { kind: self.kind })
    }

    /// Converts the span into its HTML leaf.
    ///
    /// Plain text becomes an untagged leaf; links and images carry their url
    /// as `href` / `src`.
    pub fn to_node(&self) -> Result<Node, HtmlError> {
        let leaf = match self.kind {
            SpanKind::Plain => Leaf::text(self.text.as_str()),
            SpanKind::Bold => Leaf::new("b", self.text.as_str(), Attributes::new())?,
            SpanKind::Italic => Leaf::new("i", self.text.as_str(), Attributes::new())?,
            SpanKind::Code => Leaf::new("code", self.text.as_str(), Attributes::new())?,
            SpanKind::Link => {
                let attrs = Attributes::new().with("href", self.require_url()?);
                Leaf::new(Leaf::ANCHOR, self.text.as_str(), attrs)?
            }
            SpanKind::Image => {
                let attrs = Attributes::new()
                    .with("src", self.require_url()?)
                    .with("alt", self.text.as_str());
                Leaf::new(Leaf::IMAGE, "", attrs)?
            }
        };
        Ok(leaf.into())
    }
}
