//! Materializes formatted templates as nodes in a [`Document`].

use crate::markup::Document;
use crate::{Error, Formatter, Result, Template, Value};

/// The tag name of elements created to hold formatted markup.
pub(crate) const SCRATCH_TAG: &str = "div";

pub(crate) fn replace_into<D>(
    formatter: &Formatter,
    document: &mut D,
    template: Template<'_>,
    target: Option<&D::Node>,
    replacements: &[Value],
) -> Result<D::Node>
where
    D: Document + ?Sized,
{
    let target = match target {
        Some(target) if document.is_element(target) => target.clone(),
        Some(_) => {
            return Err(Error::invalid_target(
                "cannot replace the content of a non-element node",
            ))
        }
        None => document.create_element(SCRATCH_TAG),
    };
    let markup = formatter.format(template, replacements);
    document.set_inner_html(&target, &markup)?;
    Ok(target)
}

pub(crate) fn append_into<D>(
    formatter: &Formatter,
    document: &mut D,
    template: Template<'_>,
    target: &D::Node,
    reference: Option<&D::Node>,
    replacements: &[Value],
) -> Result<Vec<D::Node>>
where
    D: Document + ?Sized,
{
    if !document.is_element(target) {
        return Err(Error::invalid_target("cannot append to a non-element node"));
    }

    let scratch = replace_into(formatter, document, template, None, replacements)?;
    let nodes = document.child_nodes(&scratch);
    // Each insertion moves the node out of the scratch element, which ends up
    // empty.
    for node in &nodes {
        document.insert_before(target, node, reference)?;
    }
    tracing::debug!(nodes = nodes.len(), "moved formatted nodes into target");
    Ok(nodes)
}

pub(crate) fn first_child_of<D>(
    formatter: &Formatter,
    document: &mut D,
    template: Template<'_>,
    replacements: &[Value],
) -> Result<Option<D::Node>>
where
    D: Document + ?Sized,
{
    let scratch = replace_into(formatter, document, template, None, replacements)?;
    Ok(document.child_nodes(&scratch).into_iter().next())
}
