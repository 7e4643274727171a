//! Imports needed to use the DOM helpers.

pub use crate::builder::append_node;
pub use crate::component::ComponentDescription;
pub use crate::component::ComponentEntry;
pub use crate::component::append_component;
pub use crate::description::NodeDescription;
pub use crate::description::Params;
pub use crate::error::NodeToolsError;
pub use crate::reference::ElementRef;
pub use crate::reference::Mode;
pub use crate::reference::ReferenceKind;
pub use crate::reference::Resolved;
pub use crate::reference::classify;
pub use crate::reference::is_html_tag_name;
pub use crate::reference::resolve;
pub use crate::reference::resolve_element;
pub use crate::reference::resolve_elements;
pub use crate::reference::selector_for;
pub use crate::remove::Affix;
pub use crate::remove::Group;
pub use crate::remove::remove_children;
pub use crate::remove::remove_group_children;
pub use crate::remove::remove_group_children_with_affix;
pub use crate::report::CollectingReporter;
pub use crate::report::Reporter;
pub use crate::report::TracingReporter;
pub use crate::select::SelectIndex;
pub use crate::select::get_select_index;
pub use crate::select::get_select_value;
pub use crate::select::get_select_value_as;
pub use crate::select::set_select_index;
pub use crate::tools::NodeTools;
