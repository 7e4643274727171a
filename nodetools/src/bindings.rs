//! The JavaScript API.
//!
//! Functions take plain JS values: descriptions are plain objects, references are
//! strings, elements or node lists. Like the Rust API, they never throw.

use wasm_bindgen::JsCast as _;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::Element;
use web_sys::NodeList;
use web_sys::js_sys::Array;
use web_sys::js_sys::Object;
use web_sys::js_sys::Reflect;

use crate::component::ComponentDescription;
use crate::component::ComponentEntry;
use crate::description::NodeDescription;
use crate::error::NodeToolsError;
use crate::reference::ElementRef;
use crate::remove::Group;
use crate::report::OrReport as _;
use crate::report::TracingReporter;
use crate::select::SelectIndex;
use crate::tools::NodeTools;

#[wasm_bindgen(js_name = appendNode)]
pub fn append_node(description: JsValue) -> Option<Element> {
    let tools = tools()?;
    let description = node_description(&description).or_report(tools.reporter())?;
    tools.append_node(&description)
}

#[wasm_bindgen(js_name = appendComponent)]
pub fn append_component(component: JsValue) {
    let Some(tools) = tools() else { return };
    let Some(component) = component_description(&tools, &component) else {
        return;
    };
    tools.append_component(&component);
}

#[wasm_bindgen(js_name = removeChildren)]
pub fn remove_children(element: JsValue) {
    let Some(tools) = tools() else { return };
    if let Some(reference) = element_ref(&element).or_report(tools.reporter()) {
        tools.remove_children(reference);
    }
}

#[wasm_bindgen(js_name = removeGroupChildren)]
pub fn remove_group_children(elements: JsValue) {
    let Some(tools) = tools() else { return };
    let group = if let Some(collection) = elements.dyn_ref::<NodeList>() {
        Group::Collection(collection.clone())
    } else if let Some(array) = elements.dyn_ref::<Array>() {
        array
            .iter()
            .filter_map(|element| element_ref(&element).or_report(tools.reporter()))
            .collect()
    } else {
        tools.reporter().report(NodeToolsError::unresolved(describe(&elements)));
        return;
    };
    tools.remove_group_children(group);
}

/// Returns the selected values, parsed as integers when `value_type` is `"int"`.
#[wasm_bindgen(js_name = getSelectValue)]
pub fn get_select_value(select: JsValue, value_type: Option<String>) -> Array {
    let Some((tools, reference)) = tools_and_ref(&select) else {
        return Array::new();
    };
    if value_type.as_deref() == Some("int") {
        tools
            .get_select_value_as::<i32>(reference)
            .into_iter()
            .map(|value| value.map(JsValue::from).unwrap_or(JsValue::NULL))
            .collect()
    } else {
        tools
            .get_select_value(reference)
            .into_iter()
            .map(|value| value.map(JsValue::from).unwrap_or(JsValue::NULL))
            .collect()
    }
}

#[wasm_bindgen(js_name = getSelectIndex)]
pub fn get_select_index(select: JsValue) -> Array {
    let Some((tools, reference)) = tools_and_ref(&select) else {
        return Array::new();
    };
    tools
        .get_select_index(reference)
        .into_iter()
        .map(JsValue::from)
        .collect()
}

/// Passing `-1`, nothing, or anything that is not a number clears the selection.
#[wasm_bindgen(js_name = setSelectIndex)]
pub fn set_select_index(select: JsValue, index: JsValue) {
    let Some((tools, reference)) = tools_and_ref(&select) else {
        return;
    };
    tools.set_select_index(reference, select_index(&index));
}

fn tools() -> Option<NodeTools> {
    NodeTools::from_window().or_report(&TracingReporter)
}

fn tools_and_ref(element: &JsValue) -> Option<(NodeTools, ElementRef)> {
    let tools = tools()?;
    let reference = element_ref(element).or_report(tools.reporter())?;
    Some((tools, reference))
}

fn element_ref(value: &JsValue) -> Result<ElementRef, NodeToolsError> {
    if let Some(element) = value.dyn_ref::<Element>() {
        Ok(ElementRef::Element(element.clone()))
    } else if let Some(collection) = value.dyn_ref::<NodeList>() {
        Ok(ElementRef::Collection(collection.clone()))
    } else if let Some(name) = value.as_string() {
        Ok(ElementRef::Name(name))
    } else {
        Err(NodeToolsError::unresolved(describe(value)))
    }
}

fn select_index(index: &JsValue) -> SelectIndex {
    if let Some(index) = index.as_string() {
        SelectIndex::parse(&index)
    } else if let Some(index) = index.as_f64().filter(|index| index.is_finite()) {
        SelectIndex::from(index.trunc() as i32)
    } else {
        SelectIndex::CLEAR
    }
}

/// Reads a description object. A live parent element is kept as-is.
fn node_description(value: &JsValue) -> Result<NodeDescription, NodeToolsError> {
    let mut description: NodeDescription = serde_wasm_bindgen::from_value(value.clone())?;
    let parent = Reflect::get(value, &JsValue::from_str("parent"))
        .map_err(NodeToolsError::dom("Reflect.get"))?;
    if let Ok(live @ (ElementRef::Element(_) | ElementRef::Collection(_))) = element_ref(&parent) {
        description.parent = Some(live);
    }
    Ok(description)
}

/// Reads a component object in property order. Unreadable entries are reported and skipped.
fn component_description(tools: &NodeTools, value: &JsValue) -> Option<ComponentDescription> {
    let Some(object) = value.dyn_ref::<Object>() else {
        tools.reporter().report(NodeToolsError::Deserialize(format!(
            "Not a component: {}",
            describe(value)
        )));
        return None;
    };
    let component = Object::entries(object)
        .iter()
        .filter_map(|entry| {
            let entry: Array = entry.unchecked_into();
            let label = entry.get(0).as_string().unwrap_or_default();
            let value = entry.get(1);
            let entry = if let Some(descriptions) = value.dyn_ref::<Array>() {
                descriptions
                    .iter()
                    .map(|description| node_description(&description))
                    .collect::<Result<Vec<_>, _>>()
                    .map(ComponentEntry::Many)
            } else {
                node_description(&value).map(ComponentEntry::Single)
            };
            Some((label, entry.or_report(tools.reporter())?))
        })
        .collect();
    Some(component)
}

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
