use automat::markup::{Document, NodeId, Tree};
use automat::{values, ErrorKind, Formatter, Patterns, Template};

fn element_with(tree: &mut Tree, markup: &str) -> NodeId {
    let el = tree.create_element("div");
    tree.set_inner_html(&el, markup).unwrap();
    el
}

#[test]
fn replace_into_new_element() -> automat::Result<()> {
    let mut tree = Tree::new();
    let el = automat::replace_into(&mut tree, "Hello, ${0}!", None, &values!["World"])?;
    assert_eq!(tree.tag_name(el), Some("div"));
    assert_eq!(tree.parent(el), None);
    assert_eq!(tree.inner_html(&el), "Hello, World!");
    Ok(())
}

#[test]
fn replace_into_existing_element() -> automat::Result<()> {
    let mut tree = Tree::new();
    let el = element_with(&mut tree, ":abc:");
    let old = tree.children(el)[0];
    let result = automat::replace_into(&mut tree, "Hello, ${0}!", Some(&el), &values!["World"])?;
    assert_eq!(result, el);
    assert_eq!(tree.inner_html(&el), "Hello, World!");
    assert_eq!(tree.parent(old), None);
    Ok(())
}

#[test]
fn replace_into_parses_markup() -> automat::Result<()> {
    let mut tree = Tree::new();
    let el = automat::replace_into(
        &mut tree,
        "<p class=\"${0}\">%{1}</p><br>",
        None,
        &values!["note", "<i>"],
    )?;
    let children = tree.children(el).to_vec();
    assert_eq!(children.len(), 2);
    assert_eq!(tree.attribute(children[0], "class"), Some("note"));
    assert_eq!(tree.text_content(children[0]), "<i>");
    assert_eq!(tree.tag_name(children[1]), Some("br"));
    Ok(())
}

#[test]
fn replace_into_no_replacements_keeps_placeholders() -> automat::Result<()> {
    let mut tree = Tree::new();
    let el = automat::replace_into(&mut tree, "${0}", None, &[])?;
    assert_eq!(tree.inner_html(&el), "${0}");
    Ok(())
}

#[test]
fn replace_into_err_text_target() {
    let mut tree = Tree::new();
    let text = tree.create_text("x");
    let err = automat::replace_into(&mut tree, "y", Some(&text), &[]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidTarget);
    assert_eq!(tree.text(text), Some("x"));
}

#[test]
fn append_into_end() -> automat::Result<()> {
    let mut tree = Tree::new();
    let el = element_with(&mut tree, ":abc:");
    let nodes = automat::append_into(&mut tree, "X", &el, None, &[])?;
    assert_eq!(nodes.len(), 1);
    // Adjacent text nodes are not merged on insertion.
    assert_eq!(tree.children(el).len(), 2);
    assert_eq!(tree.inner_html(&el), ":abc:X");
    Ok(())
}

#[test]
fn append_into_with_replacements() -> automat::Result<()> {
    let mut tree = Tree::new();
    let el = element_with(&mut tree, ":abc:");
    automat::append_into(&mut tree, "Hello, ${0}!", &el, None, &values!["World"])?;
    assert_eq!(tree.inner_html(&el), ":abc:Hello, World!");
    Ok(())
}

#[test]
fn append_into_before_reference() -> automat::Result<()> {
    let mut tree = Tree::new();
    let el = element_with(&mut tree, "<a></a><b></b><i></i>");
    let b = tree.children(el)[1];
    let nodes = automat::append_into(&mut tree, "<u>${0}</u><s></s>", &el, Some(&b), &values![1])?;
    assert_eq!(tree.inner_html(&el), "<a></a><u>1</u><s></s><b></b><i></i>");
    assert_eq!(nodes, tree.children(el)[1..3]);
    Ok(())
}

#[test]
fn append_into_before_first_child() -> automat::Result<()> {
    let mut tree = Tree::new();
    let el = element_with(&mut tree, ":abc:");
    let first = tree.children(el)[0];
    automat::append_into(&mut tree, "Hello, ${0}!", &el, Some(&first), &values!["World"])?;
    assert_eq!(tree.inner_html(&el), "Hello, World!:abc:");
    Ok(())
}

#[test]
fn append_into_returns_moved_nodes_in_order() -> automat::Result<()> {
    let mut tree = Tree::new();
    let el = tree.create_element("ul");
    let nodes = automat::append_into(&mut tree, "<li>a</li>text<li>b</li>", &el, None, &[])?;
    assert_eq!(nodes.len(), 3);
    assert_eq!(tree.outer_html(nodes[0]), "<li>a</li>");
    assert_eq!(tree.text(nodes[1]), Some("text"));
    assert_eq!(tree.outer_html(nodes[2]), "<li>b</li>");
    for node in nodes {
        assert_eq!(tree.parent(node), Some(el));
    }
    Ok(())
}

#[test]
fn append_into_empty_template() -> automat::Result<()> {
    let mut tree = Tree::new();
    let el = element_with(&mut tree, "x");
    let nodes = automat::append_into(&mut tree, "", &el, None, &[])?;
    assert!(nodes.is_empty());
    assert_eq!(tree.inner_html(&el), "x");
    Ok(())
}

#[test]
fn append_into_err_non_element_target() {
    let mut tree = Tree::new();
    let comment = tree.create_comment("c");
    let err = automat::append_into(&mut tree, "x", &comment, None, &[]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidTarget);
}

#[test]
fn append_into_err_reference_not_a_child() {
    let mut tree = Tree::new();
    let el = element_with(&mut tree, "<a></a>");
    let other = element_with(&mut tree, "<b></b>");
    let b = tree.children(other)[0];
    let err = automat::append_into(&mut tree, "<i></i>", &el, Some(&b), &[]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidTarget);
    assert_eq!(
        err.to_string(),
        "reference node is not a child of the target element"
    );
    assert_eq!(tree.inner_html(&el), "<a></a>");
    assert_eq!(tree.inner_html(&other), "<b></b>");
}

#[test]
fn first_child_of_returns_first() -> automat::Result<()> {
    let mut tree = Tree::new();
    let node = automat::first_child_of(&mut tree, "<a></a><b></b>", &[])?.unwrap();
    assert_eq!(tree.tag_name(node), Some("a"));
    assert_eq!(tree.outer_html(node), "<a></a>");
    Ok(())
}

#[test]
fn first_child_of_text() -> automat::Result<()> {
    let mut tree = Tree::new();
    let node = automat::first_child_of(&mut tree, "%{0}<b></b>", &values!["<x>"])?.unwrap();
    assert_eq!(tree.text(node), Some("<x>"));
    Ok(())
}

#[test]
fn first_child_of_empty() -> automat::Result<()> {
    let mut tree = Tree::new();
    assert_eq!(automat::first_child_of(&mut tree, "", &[])?, None);
    assert_eq!(automat::first_child_of(&mut tree, "${0}", &values![""])?, None);
    Ok(())
}

#[test]
fn formatter_methods_use_custom_patterns() -> automat::Result<()> {
    let patterns = Patterns::builder().replacer(r"\[(\d+)\]").build()?;
    let formatter = Formatter::with_patterns(patterns);
    let mut tree = Tree::new();
    let template = Template::from_comment("/* <em>[0]</em> */")?;
    let node = formatter.first_child_of(&mut tree, template, &values!["hi"])?.unwrap();
    assert_eq!(tree.outer_html(node), "<em>hi</em>");
    Ok(())
}

#[test]
fn first_child_of_implied_end_tag() -> automat::Result<()> {
    let mut tree = Tree::new();
    let node = automat::first_child_of(&mut tree, "<p>a<p>b", &[])?.unwrap();
    assert_eq!(tree.outer_html(node), "<p>a</p>");
    Ok(())
}

#[test]
fn append_into_implied_end_tags_yield_siblings() -> automat::Result<()> {
    let mut tree = Tree::new();
    let ul = tree.create_element("ul");
    let nodes = automat::append_into(&mut tree, "<li>a<li>b", &ul, None, &[])?;
    assert_eq!(nodes.len(), 2);
    assert_eq!(tree.inner_html(&ul), "<li>a</li><li>b</li>");
    Ok(())
}
