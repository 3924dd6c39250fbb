use crate::error::{ContainerDefect, HtmlError, LeafDefect};

use super::Attributes;

/// A node with no children holding a literal value.
///
/// An untagged leaf (tag `None` or empty) renders as its raw value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaf {
    pub tag: Option<String>,
    pub value: String,
    pub attributes: Attributes,
}

impl Leaf {
    pub const IMAGE: &'static str = "img";
    pub const ANCHOR: &'static str = "a";

    /// Creates a tagged leaf, failing if it could never render.
    pub fn new(
        tag: impl Into<String>,
        value: impl Into<String>,
        attributes: Attributes,
    ) -> Result<Self, HtmlError> {
        let leaf = Self {
            tag: Some(tag.into()),
            value: value.into(),
            attributes,
        };
        leaf.validate()?;
        Ok(leaf)
    }

    /// Creates an untagged leaf. Always valid.
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            tag: None,
            value: value.into(),
            attributes: Attributes::new(),
        }
    }

    fn tag_name(&self) -> Option<&str> {
        self.tag.as_deref().filter(|t| !t.is_empty())
    }

    pub fn validate(&self) -> Result<(), HtmlError> {
        let Some(tag) = self.tag_name() else {
            return Ok(());
        };
        let required = match tag {
            Self::IMAGE => Some("src"),
            Self::ANCHOR => Some("href"),
            _ => None,
        };
        match required {
            Some(attr) => {
                if self.attributes.get(attr).is_none_or(str::is_empty) {
                    return Err(HtmlError::leaf(tag, LeafDefect::MissingAttribute(attr)));
                }
            }
            None => {
                if self.value.is_empty() {
                    return Err(HtmlError::leaf(tag, LeafDefect::MissingValue));
                }
            }
        }
        Ok(())
    }

    pub fn render(&self) -> Result<String, HtmlError> {
        self.validate()?;
        let Some(tag) = self.tag_name() else {
            return Ok(self.value.clone());
        };
        let attrs = opening_attributes(&self.attributes);
        if tag == Self::IMAGE {
            return Ok(format!("<{tag}{attrs}/>"));
        }
        Ok(format!("<{tag}{attrs}>{}</{tag}>", self.value))
    }
}

/// A node holding an ordered, non-empty list of children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    pub tag: String,
    pub children: Vec<Node>,
    pub attributes: Attributes,
}

impl Container {
    pub fn new(tag: impl Into<String>, children: Vec<Node>) -> Result<Self, HtmlError> {
        let container = Self {
            tag: tag.into(),
            children,
            attributes: Attributes::new(),
        };
        container.validate()?;
        Ok(container)
    }

    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn validate(&self) -> Result<(), HtmlError> {
        if self.tag.is_empty() {
            return Err(HtmlError::container(&self.tag, ContainerDefect::MissingTag));
        }
        if self.children.is_empty() {
            return Err(HtmlError::container(
                &self.tag,
                ContainerDefect::EmptyChildren,
            ));
        }
        Ok(())
    }

    pub fn render(&self) -> Result<String, HtmlError> {
        self.validate()?;
        let mut out = format!("<{}{}>", self.tag, opening_attributes(&self.attributes));
        for child in &self.children {
            out.push_str(&child.render()?);
        }
        out.push_str(&format!("</{}>", self.tag));
        Ok(out)
    }
}

/// An HTML tree node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Leaf(Leaf),
    Container(Container),
}

impl Node {
    pub fn render(&self) -> Result<String, HtmlError> {
        match self {
            Node::Leaf(leaf) => leaf.render(),
            Node::Container(container) => container.render(),
        }
    }

    pub fn render_attributes(&self) -> String {
        self.attributes().render()
    }

    pub fn attributes(&self) -> &Attributes {
        match self {
            Node::Leaf(leaf) => &leaf.attributes,
            Node::Container(container) => &container.attributes,
        }
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            Node::Leaf(leaf) => leaf.tag_name(),
            Node::Container(container) => Some(container.tag.as_str()),
        }
    }

    /// Children of a container; leaves have none.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Leaf(_) => &[],
            Node::Container(container) => &container.children,
        }
    }
}

impl From<Leaf> for Node {
    fn from(leaf: Leaf) -> Self {
        Node::Leaf(leaf)
    }
}

impl From<Container> for Node {
    fn from(container: Container) -> Self {
        Node::Container(container)
    }
}

/// Attribute string for an opening tag, with its leading space.
fn opening_attributes(attributes: &Attributes) -> String {
    if attributes.is_empty() {
        String::new()
    } else {
        format!(" {}", attributes.render())
    }
}
