use tracing::debug;
use tracing::debug_span;
use tracing::trace;
use web_sys::Document;
use web_sys::Element;

use crate::description::NodeDescription;
use crate::description::Params;
use crate::error::NodeToolsError;
use crate::reference::resolve_element;
use crate::report::OrReport as _;
use crate::report::Reporter;

/// Creates the element a [NodeDescription] describes and appends it to its parent,
/// or appends text or markup to the parent when the description has no tag.
/// In that case the text wins over the markup when both are given.
///
/// Returns the created element when it was given an `id`.
pub fn append_node(
    document: &Document,
    reporter: &dyn Reporter,
    description: &NodeDescription,
) -> Option<Element> {
    let _span = debug_span!("AppendNode", tag = description.tag.as_deref()).entered();
    try_append_node(document, description)
        .or_report(reporter)
        .flatten()
}

fn try_append_node(
    document: &Document,
    description: &NodeDescription,
) -> Result<Option<Element>, NodeToolsError> {
    let parent = description
        .parent
        .as_ref()
        .ok_or(NodeToolsError::MissingParent)?;
    let parent = resolve_element(document, parent)?;

    let Some(tag) = &description.tag else {
        let Some(addition) = description.text.as_ref().or(description.html.as_ref()) else {
            return Err(NodeToolsError::InvalidDescription);
        };
        parent.set_inner_html(&(parent.inner_html() + addition));
        trace!("Appended markup to the parent");
        return Ok(None);
    };

    let node = document
        .create_element(tag)
        .map_err(NodeToolsError::dom("createElement"))?;
    if let Some(text) = &description.text {
        node.append_child(&document.create_text_node(text))
            .map_err(NodeToolsError::dom("appendChild"))?;
    }
    if let Some(params) = &description.params {
        set_params(document, &node, params)?;
    }
    parent
        .append_child(&node)
        .map_err(NodeToolsError::dom("appendChild"))?;
    if let Some(html) = &description.html {
        node.set_inner_html(html);
    }
    debug!("Appended <{tag}>");

    let Some(id) = description.id() else {
        return Ok(None);
    };
    document
        .get_element_by_id(id)
        .map(Some)
        .ok_or_else(|| NodeToolsError::unresolved(format!("#{id}")))
}

/// Attaches attribute nodes in order. Attributes attached before a failure are kept.
fn set_params(document: &Document, node: &Element, params: &Params) -> Result<(), NodeToolsError> {
    for (name, value) in params.iter() {
        let attribute = document
            .create_attribute(name)
            .map_err(NodeToolsError::dom("createAttribute"))?;
        if let Some(value) = value {
            attribute.set_value(value);
        }
        node.set_attribute_node(&attribute)
            .map_err(NodeToolsError::dom("setAttributeNode"))?;
        trace!(name, value, "Set attribute");
    }
    Ok(())
}
