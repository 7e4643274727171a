//! Components: labelled groups of node descriptions appended in one call.

use serde::Deserialize;
use serde::Deserializer;
use serde::de::MapAccess;
use serde::de::Visitor;
use tracing::debug_span;
use tracing::trace;
use web_sys::Document;

use crate::builder::append_node;
use crate::description::NodeDescription;
use crate::error::NodeToolsError;
use crate::report::Reporter;

/// Labelled node descriptions, in insertion order. Labels are not used for anything else.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ComponentDescription(Vec<(String, ComponentEntry)>);

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ComponentEntry {
    Many(Vec<NodeDescription>),
    Single(NodeDescription),
}

impl ComponentDescription {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node(mut self, label: impl Into<String>, description: NodeDescription) -> Self {
        self.0
            .push((label.into(), ComponentEntry::Single(description)));
        self
    }

    pub fn nodes(
        mut self,
        label: impl Into<String>,
        descriptions: impl IntoIterator<Item = NodeDescription>,
    ) -> Self {
        self.0.push((
            label.into(),
            ComponentEntry::Many(descriptions.into_iter().collect()),
        ));
        self
    }

    /// Reads a component from its JSON form, keeping the labels in document order.
    pub fn from_json(json: &str) -> Result<Self, NodeToolsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &ComponentEntry)> {
        self.0.iter().map(|(label, entry)| (label.as_str(), entry))
    }

    /// All the node descriptions, flattened in the order they get appended.
    pub fn descriptions(&self) -> impl Iterator<Item = &NodeDescription> {
        self.0.iter().flat_map(|(_, entry)| entry.descriptions())
    }
}

impl ComponentEntry {
    pub fn descriptions(&self) -> &[NodeDescription] {
        match self {
            Self::Many(descriptions) => descriptions,
            Self::Single(description) => std::slice::from_ref(description),
        }
    }
}

impl<L: Into<String>> FromIterator<(L, ComponentEntry)> for ComponentDescription {
    fn from_iter<T: IntoIterator<Item = (L, ComponentEntry)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(label, entry)| (label.into(), entry))
                .collect(),
        )
    }
}

impl<'de> Deserialize<'de> for ComponentDescription {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(ComponentVisitor)
    }
}

struct ComponentVisitor;

impl<'de> Visitor<'de> for ComponentVisitor {
    type Value = ComponentDescription;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a map of labels to node descriptions")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut entries = Vec::with_capacity(map.size_hint().unwrap_or_default());
        while let Some(entry) = map.next_entry::<String, ComponentEntry>()? {
            entries.push(entry);
        }
        Ok(ComponentDescription(entries))
    }
}

/// Appends every node of a component, label after label.
pub fn append_component(
    document: &Document,
    reporter: &dyn Reporter,
    component: &ComponentDescription,
) {
    for (label, entry) in component.entries() {
        let _span = debug_span!("Component", label).entered();
        for description in entry.descriptions() {
            append_node(document, reporter, description);
        }
        trace!(count = entry.descriptions().len(), "Appended");
    }
}
