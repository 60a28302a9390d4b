//! Serializes nodes of a [`Tree`] back to markup.

use crate::markup::tree::{NodeId, NodeKind, Tree};
use crate::markup::{escape_attribute, escape_text};

/// Elements that never have an end tag.
const VOID: &[&str] = &[
    "area", "base", "basefont", "bgsound", "br", "col", "embed", "frame", "hr", "img", "input",
    "keygen", "link", "meta", "param", "source", "track", "wbr",
];

/// Elements whose text content is emitted as is.
const RAW_TEXT: &[&str] = &[
    "iframe", "noembed", "noframes", "noscript", "plaintext", "script", "style", "xmp",
];

fn is_void(tag: &str) -> bool {
    VOID.contains(&tag)
}

fn is_raw_text(tag: &str) -> bool {
    RAW_TEXT.contains(&tag)
}

/// Serialize the children of `id` into `buf`.
pub fn children(tree: &Tree, id: NodeId, buf: &mut String) {
    let raw = tree.tag_name(id).is_some_and(is_raw_text);
    for &child in tree.children(id) {
        node(tree, child, raw, buf);
    }
}

/// Serialize `id` itself into `buf`.
///
/// Text inside raw text elements like `<script>` is emitted unescaped.
pub fn node(tree: &Tree, id: NodeId, raw: bool, buf: &mut String) {
    match tree.kind(id) {
        NodeKind::Element { tag, attrs } => {
            buf.push('<');
            buf.push_str(tag);
            for (name, value) in attrs {
                buf.push(' ');
                buf.push_str(name);
                buf.push_str("=\"");
                buf.push_str(&escape_attribute(value));
                buf.push('"');
            }
            buf.push('>');
            if is_void(tag) {
                return;
            }
            children(tree, id, buf);
            buf.push_str("</");
            buf.push_str(tag);
            buf.push('>');
        }
        NodeKind::Text(text) if raw => buf.push_str(text),
        NodeKind::Text(text) => buf.push_str(&escape_text(text)),
        NodeKind::Comment(data) => {
            buf.push_str("<!--");
            buf.push_str(data);
            buf.push_str("-->");
        }
    }
}
