use std::rc::Rc;
use std::str::FromStr;

use web_sys::Document;
use web_sys::Element;

use crate::builder;
use crate::component;
use crate::component::ComponentDescription;
use crate::description::NodeDescription;
use crate::error::NodeToolsError;
use crate::reference;
use crate::reference::ElementRef;
use crate::reference::Mode;
use crate::reference::Resolved;
use crate::remove;
use crate::remove::Affix;
use crate::remove::Group;
use crate::report::OrReport as _;
use crate::report::Reporter;
use crate::report::TracingReporter;
use crate::select;
use crate::select::SelectIndex;

/// A document and the reporter its failures go to.
#[derive(Clone)]
pub struct NodeTools {
    document: Document,
    reporter: Rc<dyn Reporter>,
}

impl NodeTools {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            reporter: Rc::new(TracingReporter),
        }
    }

    /// Uses the document of the current window.
    pub fn from_window() -> Result<Self, NodeToolsError> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or(NodeToolsError::NoDocument)?;
        Ok(Self::new(document))
    }

    pub fn with_reporter(self, reporter: impl Reporter + 'static) -> Self {
        Self {
            reporter: Rc::new(reporter),
            ..self
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn reporter(&self) -> &dyn Reporter {
        &*self.reporter
    }

    pub fn resolve(&self, reference: impl Into<ElementRef>, mode: Mode) -> Option<Resolved> {
        reference::resolve(&self.document, &reference.into(), mode).or_report(self.reporter())
    }

    pub fn append_node(&self, description: &NodeDescription) -> Option<Element> {
        builder::append_node(&self.document, self.reporter(), description)
    }

    pub fn append_component(&self, component: &ComponentDescription) {
        component::append_component(&self.document, self.reporter(), component)
    }

    pub fn remove_children(&self, reference: impl Into<ElementRef>) {
        remove::remove_children(&self.document, self.reporter(), &reference.into())
    }

    pub fn remove_group_children(&self, group: impl Into<Group>) {
        remove::remove_group_children(&self.document, self.reporter(), &group.into())
    }

    pub fn remove_group_children_with_affix(&self, ids: &[&str], affix: Affix) {
        remove::remove_group_children_with_affix(&self.document, self.reporter(), ids, affix)
    }

    pub fn get_select_value(&self, reference: impl Into<ElementRef>) -> Vec<Option<String>> {
        select::get_select_value(&self.document, self.reporter(), &reference.into())
    }

    pub fn get_select_value_as<T: FromStr>(
        &self,
        reference: impl Into<ElementRef>,
    ) -> Vec<Option<T>> {
        select::get_select_value_as(&self.document, self.reporter(), &reference.into())
    }

    pub fn get_select_index(&self, reference: impl Into<ElementRef>) -> Vec<i32> {
        select::get_select_index(&self.document, self.reporter(), &reference.into())
    }

    pub fn set_select_index(
        &self,
        reference: impl Into<ElementRef>,
        index: impl Into<SelectIndex>,
    ) {
        select::set_select_index(&self.document, self.reporter(), &reference.into(), index)
    }
}

impl std::fmt::Debug for NodeTools {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeTools")
            .field("document", &self.document)
            .finish_non_exhaustive()
    }
}
