//! Turns loosely typed element references into live DOM nodes.
//!
//! A string reference is classified as follows:
//! - a recognized HTML tag name (see [is_html_tag_name]) is queried as a type selector,
//!   so `"div"` designates `<div>` elements and never the element with id `div`;
//! - a string starting with `#` or `.` is already a selector and is queried as-is;
//! - anything else is taken as an element id: `"menu"` is queried as `"#menu"`.

use std::borrow::Cow;

use tracing::trace;
use wasm_bindgen::JsCast as _;
use web_sys::Document;
use web_sys::Element;
use web_sys::NodeList;

pub use self::tag_name::is_html_tag_name;
use crate::error::NodeToolsError;

mod tag_name;

/// Designates one or more elements: a live element, a live collection or a string token.
#[derive(Clone, Debug, PartialEq)]
pub enum ElementRef {
    Element(Element),
    Collection(NodeList),
    Name(String),
}

/// How a string reference is interpreted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReferenceKind {
    TagName,
    Selector,
    Identifier,
}

/// Whether a reference designates the first match or all the matches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    First,
    All,
}

/// The live node(s) a reference designates.
#[derive(Clone, Debug, PartialEq)]
pub enum Resolved {
    Element(Element),
    Collection(NodeList),
}

pub fn classify(reference: &str) -> ReferenceKind {
    if is_html_tag_name(reference) {
        ReferenceKind::TagName
    } else if reference.starts_with(['#', '.']) {
        ReferenceKind::Selector
    } else {
        ReferenceKind::Identifier
    }
}

/// The CSS selector queried for a string reference.
pub fn selector_for(reference: &str) -> Cow<'_, str> {
    match classify(reference) {
        ReferenceKind::TagName | ReferenceKind::Selector => Cow::Borrowed(reference),
        ReferenceKind::Identifier => Cow::Owned(format!("#{reference}")),
    }
}

/// Resolves a reference.
///
/// Live elements and collections are returned unchanged whatever the mode.
/// Empty collections and queries that match nothing are failures.
pub fn resolve(
    document: &Document,
    reference: &ElementRef,
    mode: Mode,
) -> Result<Resolved, NodeToolsError> {
    let name = match reference {
        ElementRef::Element(element) => return Ok(Resolved::Element(element.clone())),
        ElementRef::Collection(collection) if collection.length() == 0 => {
            return Err(NodeToolsError::unresolved(reference));
        }
        ElementRef::Collection(collection) => return Ok(Resolved::Collection(collection.clone())),
        ElementRef::Name(name) => name,
    };
    let selector = selector_for(name);
    trace!(%name, %selector, ?mode, "Resolve");
    match mode {
        Mode::First => document
            .query_selector(&selector)
            .map_err(NodeToolsError::dom("querySelector"))?
            .map(Resolved::Element)
            .ok_or_else(|| NodeToolsError::unresolved(&selector)),
        Mode::All => {
            let collection = document
                .query_selector_all(&selector)
                .map_err(NodeToolsError::dom("querySelectorAll"))?;
            if collection.length() == 0 {
                return Err(NodeToolsError::unresolved(&selector));
            }
            Ok(Resolved::Collection(collection))
        }
    }
}

/// Resolves a reference to a single element.
///
/// A collection designates its first element.
pub fn resolve_element(
    document: &Document,
    reference: &ElementRef,
) -> Result<Element, NodeToolsError> {
    match resolve(document, reference, Mode::First)? {
        Resolved::Element(element) => Ok(element),
        Resolved::Collection(collection) => elements_of(&collection)
            .next()
            .ok_or_else(|| NodeToolsError::unresolved(reference)),
    }
}

/// Resolves a reference to all the elements it designates, in document order.
pub fn resolve_elements(
    document: &Document,
    reference: &ElementRef,
) -> Result<Vec<Element>, NodeToolsError> {
    let elements: Vec<Element> = match resolve(document, reference, Mode::All)? {
        Resolved::Element(element) => vec![element],
        Resolved::Collection(collection) => elements_of(&collection).collect(),
    };
    if elements.is_empty() {
        return Err(NodeToolsError::unresolved(reference));
    }
    Ok(elements)
}

/// The element members of a collection, skipping text and comment nodes.
pub(crate) fn elements_of(collection: &NodeList) -> impl Iterator<Item = Element> + '_ {
    (0..collection.length())
        .filter_map(move |index| collection.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
}

impl std::fmt::Display for ElementRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Element(element) => write!(f, "<{}>", element.tag_name().to_lowercase()),
            Self::Collection(collection) => write!(f, "NodeList({})", collection.length()),
            Self::Name(name) => std::fmt::Display::fmt(name, f),
        }
    }
}

impl From<Element> for ElementRef {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

impl From<&Element> for ElementRef {
    fn from(element: &Element) -> Self {
        Self::Element(element.clone())
    }
}

impl From<NodeList> for ElementRef {
    fn from(collection: NodeList) -> Self {
        Self::Collection(collection)
    }
}

impl From<String> for ElementRef {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<&str> for ElementRef {
    fn from(name: &str) -> Self {
        Self::Name(name.to_owned())
    }
}
