use crate::parsing::inline::SpanKind;

/// Why a leaf node failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeafDefect {
    /// A tagged leaf (other than `img`/`a`) has an empty value.
    MissingValue,
    /// A required attribute (`src` on `img`, `href` on `a`) is absent or empty.
    MissingAttribute(&'static str),
}

impl std::fmt::Display for LeafDefect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LeafDefect::MissingValue => write!(f, "missing value"),
            LeafDefect::MissingAttribute(name) => write!(f, "missing `{name}` attribute"),
        }
    }
}

/// Why a container node failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerDefect {
    MissingTag,
    EmptyChildren,
}

impl std::fmt::Display for ContainerDefect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContainerDefect::MissingTag => write!(f, "missing tag"),
            ContainerDefect::EmptyChildren => write!(f, "no children"),
        }
    }
}

/// Errors raised while building or rendering an HTML tree.
///
/// All of them abort compilation of the current document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HtmlError {
    #[error("invalid <{tag}> leaf: {defect}")]
    InvalidLeaf { tag: String, defect: LeafDefect },
    #[error("invalid <{tag}> container: {defect}")]
    InvalidContainer {
        tag: String,
        defect: ContainerDefect,
    },
    #[error("{kind} span requires a non-empty url")]
    MissingUrl { kind: SpanKind },
    #[error("unknown span kind: {0}")]
    UnknownSpanKind(String),
}

impl HtmlError {
    pub(crate) fn leaf(tag: &str, defect: LeafDefect) -> Self {
        HtmlError::InvalidLeaf {
            tag: tag.to_string(),
            defect,
        }
    }

    pub(crate) fn container(tag: &str, defect: ContainerDefect) -> Self {
        HtmlError::InvalidContainer {
            tag: tag.to_string(),
            defect,
        }
    }
}

/// Title extraction failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TitleError {
    #[error("no h1 header found in markdown")]
    NoTitle,
}
