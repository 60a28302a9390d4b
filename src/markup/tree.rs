//! Defines the built-in arena-backed document [`Tree`].

use crate::markup::{parse, serialize, Document};
use crate::{Error, Result};

/// A handle to a node in a [`Tree`].
///
/// Handles are only meaningful for the tree that created them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// The data of a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// An element with a lowercase tag name and attributes in source order.
    Element {
        tag: String,
        attrs: Vec<(String, String)>,
    },
    /// A text node, stored unescaped.
    Text(String),
    /// A comment node.
    Comment(String),
}

#[derive(Debug, Clone)]
struct NodeData {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// An arena-backed document.
///
/// Nodes are never freed, a node removed from its parent stays in the arena
/// as a detached node and can be inserted again later.
///
/// # Panics
///
/// Methods taking a [`NodeId`] panic if the handle was created by another
/// tree.
///
/// # Examples
///
/// ```
/// use automat::markup::{Document, Tree};
///
/// let mut tree = Tree::new();
/// let div = tree.create_element("div");
/// tree.set_inner_html(&div, "<p>Hello</p> world")?;
///
/// assert_eq!(tree.children(div).len(), 2);
/// assert_eq!(tree.outer_html(div), "<div><p>Hello</p> world</div>");
/// # Ok::<(), automat::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Tree {
    nodes: Vec<NodeData>,
}

impl Tree {
    /// Construct a new empty tree.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of nodes ever created in this tree.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns whether no node was ever created in this tree.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn push(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(NodeData {
            kind,
            parent: None,
            children: Vec::new(),
        });
        id
    }

    /// Create a new detached element.
    ///
    /// The tag name is converted to lowercase.
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.push(NodeKind::Element {
            tag: tag.to_ascii_lowercase(),
            attrs: Vec::new(),
        })
    }

    /// Create a new detached text node.
    pub fn create_text(&mut self, text: impl Into<String>) -> NodeId {
        self.push(NodeKind::Text(text.into()))
    }

    /// Create a new detached comment node.
    pub fn create_comment(&mut self, data: impl Into<String>) -> NodeId {
        self.push(NodeKind::Comment(data.into()))
    }

    /// Returns the data of the node.
    #[inline]
    pub fn kind(&self, id: NodeId) -> &NodeKind {
        &self.nodes[id.0].kind
    }

    /// Returns the tag name if the node is an element.
    pub fn tag_name(&self, id: NodeId) -> Option<&str> {
        match self.kind(id) {
            NodeKind::Element { tag, .. } => Some(tag),
            _ => None,
        }
    }

    /// Returns the text if the node is a text node.
    pub fn text(&self, id: NodeId) -> Option<&str> {
        match self.kind(id) {
            NodeKind::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the value of the named attribute if the node is an element
    /// that has it.
    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        match self.kind(id) {
            NodeKind::Element { attrs, .. } => attrs
                .iter()
                .find(|(k, _)| k.eq_ignore_ascii_case(name))
                .map(|(_, v)| v.as_str()),
            _ => None,
        }
    }

    /// Set the named attribute on an element, replacing any previous value.
    ///
    /// Does nothing if the node is not an element.
    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: impl Into<String>) {
        if let NodeKind::Element { attrs, .. } = &mut self.nodes[id.0].kind {
            let name = name.to_ascii_lowercase();
            let value = value.into();
            match attrs.iter_mut().find(|(k, _)| *k == name) {
                Some((_, v)) => *v = value,
                None => attrs.push((name, value)),
            }
        }
    }

    /// Returns the parent of the node.
    #[inline]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    /// Returns the children of the node.
    #[inline]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    /// Returns the first child of the node.
    #[inline]
    pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.children(id).first().copied()
    }

    /// Returns the concatenated text of all descendant text nodes.
    pub fn text_content(&self, id: NodeId) -> String {
        let mut buf = String::new();
        let mut stack = vec![id];
        while let Some(id) = stack.pop() {
            match self.kind(id) {
                NodeKind::Text(text) => buf.push_str(text),
                NodeKind::Element { .. } => stack.extend(self.children(id).iter().rev()),
                NodeKind::Comment(_) => {}
            }
        }
        buf
    }

    /// Returns the serialized markup of the node itself.
    pub fn outer_html(&self, id: NodeId) -> String {
        let mut buf = String::new();
        serialize::node(self, id, false, &mut buf);
        buf
    }

    /// Remove the node from its parent.
    ///
    /// Does nothing if the node is already detached.
    pub fn detach(&mut self, id: NodeId) {
        if let Some(parent) = self.nodes[id.0].parent.take() {
            self.nodes[parent.0].children.retain(|&child| child != id);
        }
    }

    /// Append a detached node as the last child of `parent`.
    pub(crate) fn append(&mut self, parent: NodeId, id: NodeId) {
        debug_assert!(self.nodes[id.0].parent.is_none());
        self.nodes[id.0].parent = Some(parent);
        self.nodes[parent.0].children.push(id);
    }

    pub(crate) fn push_element(&mut self, tag: &str, attrs: Vec<(String, String)>) -> NodeId {
        self.push(NodeKind::Element {
            tag: tag.to_owned(),
            attrs,
        })
    }

    /// Returns whether `ancestor` is `id` or one of its ancestors.
    fn is_inclusive_ancestor(&self, ancestor: NodeId, id: NodeId) -> bool {
        let mut next = Some(id);
        while let Some(id) = next {
            if id == ancestor {
                return true;
            }
            next = self.parent(id);
        }
        false
    }
}

impl Document for Tree {
    type Node = NodeId;

    fn create_element(&mut self, tag: &str) -> NodeId {
        Tree::create_element(self, tag)
    }

    fn is_element(&self, node: &NodeId) -> bool {
        matches!(self.kind(*node), NodeKind::Element { .. })
    }

    fn set_inner_html(&mut self, element: &NodeId, markup: &str) -> Result<()> {
        let element = *element;
        if !self.is_element(&element) {
            return Err(Error::invalid_target(
                "cannot set the markup content of a non-element node",
            ));
        }
        for child in std::mem::take(&mut self.nodes[element.0].children) {
            self.nodes[child.0].parent = None;
        }
        parse::fragment(self, element, markup);
        Ok(())
    }

    fn inner_html(&self, element: &NodeId) -> String {
        let mut buf = String::new();
        serialize::children(self, *element, &mut buf);
        buf
    }

    fn child_nodes(&self, node: &NodeId) -> Vec<NodeId> {
        self.children(*node).to_vec()
    }

    fn insert_before(
        &mut self,
        parent: &NodeId,
        node: &NodeId,
        reference: Option<&NodeId>,
    ) -> Result<()> {
        let (parent, node) = (*parent, *node);
        if !self.is_element(&parent) {
            return Err(Error::invalid_target(
                "cannot insert into a non-element node",
            ));
        }
        if self.is_inclusive_ancestor(node, parent) {
            return Err(Error::invalid_target(
                "cannot insert a node into itself or one of its descendants",
            ));
        }
        if let Some(&reference) = reference {
            if self.parent(reference) != Some(parent) {
                return Err(Error::invalid_target(
                    "reference node is not a child of the target element",
                ));
            }
            if reference == node {
                return Ok(());
            }
        }

        self.detach(node);
        let children = &mut self.nodes[parent.0].children;
        let at = match reference {
            Some(reference) => children
                .iter()
                .position(|child| child == reference)
                .unwrap_or(children.len()),
            None => children.len(),
        };
        children.insert(at, node);
        self.nodes[node.0].parent = Some(parent);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tree_insert_before_reorders_existing_child() {
        let mut t = Tree::new();
        let div = t.create_element("div");
        t.set_inner_html(&div, "<a></a><b></b><i></i>").unwrap();
        let (a, i) = (t.children(div)[0], t.children(div)[2]);
        t.insert_before(&div, &i, Some(&a)).unwrap();
        assert_eq!(t.inner_html(&div), "<i></i><a></a><b></b>");
        assert_eq!(t.parent(i), Some(div));
    }

    #[test]
    fn tree_insert_before_self_reference_is_noop() {
        let mut t = Tree::new();
        let div = t.create_element("div");
        t.set_inner_html(&div, "<a></a><b></b>").unwrap();
        let a = t.children(div)[0];
        t.insert_before(&div, &a, Some(&a)).unwrap();
        assert_eq!(t.inner_html(&div), "<a></a><b></b>");
    }

    #[test]
    fn tree_set_inner_html_detaches_old_children() {
        let mut t = Tree::new();
        let div = t.create_element("DIV");
        t.set_inner_html(&div, "<p>old</p>").unwrap();
        let p = t.children(div)[0];
        t.set_inner_html(&div, "new").unwrap();
        assert_eq!(t.parent(p), None);
        assert_eq!(t.outer_html(div), "<div>new</div>");
    }

    #[test]
    fn tree_text_content_skips_comments() {
        let mut t = Tree::new();
        let div = t.create_element("div");
        t.set_inner_html(&div, "a<b>b<!-- c --></b><i>d</i>").unwrap();
        assert_eq!(t.text_content(div), "abd");
    }
}
