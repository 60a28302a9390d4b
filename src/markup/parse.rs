//! Parses markup fragments into a [`Tree`].
//!
//! Parsing follows the HTML fragment parsing algorithm as implemented by
//! `html5ever`, so the resulting nodes are the ones a browser produces when
//! setting the markup content of an element. The parser never fails, invalid
//! markup is recovered from the same way a browser does.

use html5ever::tendril::TendrilSink;
use html5ever::{parse_fragment, LocalName, Namespace, ParseOpts, QualName};
use markup5ever_rcdom::{Handle, NodeData, RcDom};

use crate::markup::tree::{NodeId, Tree};

const HTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";

/// Parse `source` in the context of the element `parent` and append the
/// resulting nodes to it.
pub fn fragment(tree: &mut Tree, parent: NodeId, source: &str) {
    let context = QualName::new(
        None,
        Namespace::from(HTML_NAMESPACE),
        LocalName::from(tree.tag_name(parent).unwrap_or("div")),
    );
    let dom = parse_fragment(RcDom::default(), ParseOpts::default(), context, Vec::new())
        .one(source);

    // The fragment nodes are the children of the synthetic `<html>` root.
    let document = dom.document.children.borrow();
    let Some(root) = document.first() else {
        return;
    };
    let children = root.children.borrow();
    for child in children.iter() {
        convert(tree, parent, child);
    }
    tracing::trace!(nodes = children.len(), "parsed markup fragment");
}

/// Copy the parsed node `handle` and its descendants into `tree` as the last
/// child of `parent`.
fn convert(tree: &mut Tree, parent: NodeId, handle: &Handle) {
    let node = match &handle.data {
        NodeData::Element {
            name,
            attrs,
            template_contents,
            ..
        } => {
            let attrs = attrs
                .borrow()
                .iter()
                .map(|attr| (attribute_name(&attr.name), attr.value.to_string()))
                .collect();
            let node = tree.push_element(&name.local, attrs);
            tree.append(parent, node);

            // The children of a `<template>` live in its content fragment.
            let contents = template_contents.borrow();
            let children = match &*contents {
                Some(contents) => contents.children.borrow(),
                None => handle.children.borrow(),
            };
            for child in children.iter() {
                convert(tree, node, child);
            }
            return;
        }
        NodeData::Text { contents } => tree.create_text(contents.borrow().to_string()),
        NodeData::Comment { contents } => tree.create_comment(contents.to_string()),
        NodeData::Document | NodeData::Doctype { .. } | NodeData::ProcessingInstruction { .. } => {
            return
        }
    };
    tree.append(parent, node);
}

fn attribute_name(name: &QualName) -> String {
    match &name.prefix {
        Some(prefix) => format!("{}:{}", prefix, name.local),
        None => name.local.to_string(),
    }
}
