//! # HTML Tree
//!
//! A minimal owned HTML tree: [`Leaf`] nodes carry a literal value,
//! [`Container`] nodes carry ordered children. Both render to a string
//! through [`Node::render`], re-checking their invariants on the way.
//!
//! Values and attribute values are emitted verbatim; nothing is escaped.

pub mod attributes;
pub mod node;

pub use attributes::Attributes;
pub use node::{Container, Leaf, Node};
