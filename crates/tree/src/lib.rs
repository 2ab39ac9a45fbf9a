//! Document model for the folio rendering pipeline.
//!
//! This crate defines the in-memory representation of parsed content between
//! parsing and rendering:
//! - [`TreePath`]: hierarchical paths identifying documents and subtrees
//! - [`Node`]: the closed set of parsed content variants
//! - [`Document`], [`DynamicDocument`], [`StaticDocument`],
//!   [`TemplateDocument`]: the source units a tree can hold
//! - [`DocumentTree`]: the recursive grouping rendered as one unit

mod document;
mod node;
mod path;
mod tree;

pub use document::{Document, DynamicDocument, SharedData, StaticDocument, TemplateDocument};
pub use node::{Node, NodeKind};
pub use path::{PathError, TreePath};
pub use tree::{DocumentTree, TreeError};
