//! Document trees that formatted markup can be inserted into.
//!
//! The [`Document`] trait is the contract the insertion functions need from a
//! host document: creating elements, setting and reading markup content,
//! listing child nodes and inserting nodes. [`Tree`] is the built-in
//! arena-backed implementation.

mod parse;
mod serialize;
mod tree;

use std::borrow::Cow;

pub use crate::markup::tree::{NodeId, NodeKind, Tree};
use crate::Result;

/// A document that formatted markup can be materialized in.
///
/// Nodes are referred to by handles of type [`Document::Node`]. All mutation
/// goes through the document.
pub trait Document {
    /// A handle to a node in this document.
    type Node: Clone;

    /// Create a new detached element with the given tag name.
    fn create_element(&mut self, tag: &str) -> Self::Node;

    /// Returns whether the node is an element.
    fn is_element(&self, node: &Self::Node) -> bool;

    /// Replace all children of the element with the nodes parsed from
    /// `markup`.
    ///
    /// # Errors
    ///
    /// If `element` is not an element.
    fn set_inner_html(&mut self, element: &Self::Node, markup: &str) -> Result<()>;

    /// Returns the serialized markup of the element's children.
    fn inner_html(&self, element: &Self::Node) -> String;

    /// Returns the children of the node, in order.
    fn child_nodes(&self, node: &Self::Node) -> Vec<Self::Node>;

    /// Insert `node` into `parent` immediately before `reference`, or as the
    /// last child when `reference` is `None`.
    ///
    /// The node is first removed from its current parent, if any.
    ///
    /// # Errors
    ///
    /// If `reference` is not a child of `parent` or the insertion would make
    /// a node its own ancestor.
    fn insert_before(
        &mut self,
        parent: &Self::Node,
        node: &Self::Node,
        reference: Option<&Self::Node>,
    ) -> Result<()>;
}

/// Escape text for use as markup.
///
/// This gives the same result as setting the text as the text content of an
/// element and reading back its markup: `&`, `<`, `>` and non-breaking spaces
/// are replaced with character references, everything else is unchanged.
///
/// # Examples
///
/// ```
/// assert_eq!(automat::markup::escape_text("<a & b>"), "&lt;a &amp; b&gt;");
/// assert_eq!(automat::markup::escape_text("\"quoted\""), "\"quoted\"");
/// ```
pub fn escape_text(text: &str) -> Cow<'_, str> {
    let escaped = html_escape::encode_text(text);
    if escaped.contains('\u{a0}') {
        Cow::Owned(escaped.replace('\u{a0}', "&nbsp;"))
    } else {
        escaped
    }
}

pub(crate) fn escape_attribute(value: &str) -> Cow<'_, str> {
    let escaped = html_escape::encode_double_quoted_attribute(value);
    if escaped.contains('\u{a0}') {
        Cow::Owned(escaped.replace('\u{a0}', "&nbsp;"))
    } else {
        escaped
    }
}
