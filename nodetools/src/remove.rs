//! Bulk removal of child nodes.

use tracing::trace;
use web_sys::Document;
use web_sys::Element;
use web_sys::NodeList;

use crate::error::NodeToolsError;
use crate::reference::ElementRef;
use crate::reference::elements_of;
use crate::reference::resolve_element;
use crate::report::OrReport as _;
use crate::report::Reporter;

/// Elements whose children get removed together.
#[derive(Clone, Debug, PartialEq)]
pub enum Group {
    Collection(NodeList),
    References(Vec<ElementRef>),
}

/// Where the affix goes in [remove_group_children_with_affix].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Affix<'t> {
    Prefix(&'t str),
    #[default]
    None,
    Suffix(&'t str),
}

/// Removes every child node of the referenced element.
pub fn remove_children(document: &Document, reporter: &dyn Reporter, reference: &ElementRef) {
    resolve_element(document, reference)
        .and_then(|element| clear(&element))
        .or_report(reporter);
}

/// Removes the children of every element of the group, in order.
///
/// Members that don't resolve are reported and skipped.
pub fn remove_group_children(document: &Document, reporter: &dyn Reporter, group: &Group) {
    match group {
        Group::Collection(collection) => {
            for element in elements_of(collection) {
                clear(&element).or_report(reporter);
            }
        }
        Group::References(references) => {
            for reference in references {
                remove_children(document, reporter, reference);
            }
        }
    }
}

/// Like [remove_group_children], but each id is completed with a prefix or a suffix first.
///
/// `["name", "email"]` with `Affix::Suffix("-errors")` clears `#name-errors` and `#email-errors`.
pub fn remove_group_children_with_affix(
    document: &Document,
    reporter: &dyn Reporter,
    ids: &[&str],
    affix: Affix,
) {
    let references = ids
        .iter()
        .map(|id| ElementRef::Name(affix.apply(id)))
        .collect();
    remove_group_children(document, reporter, &Group::References(references));
}

fn clear(element: &Element) -> Result<(), NodeToolsError> {
    let mut count = 0;
    while let Some(child) = element.first_child() {
        element
            .remove_child(&child)
            .map_err(NodeToolsError::dom("removeChild"))?;
        count += 1;
    }
    trace!(count, "Removed children");
    Ok(())
}

impl Affix<'_> {
    pub fn apply(self, id: &str) -> String {
        match self {
            Self::Prefix(prefix) => format!("{prefix}{id}"),
            Self::None => id.to_owned(),
            Self::Suffix(suffix) => format!("{id}{suffix}"),
        }
    }
}

impl From<NodeList> for Group {
    fn from(collection: NodeList) -> Self {
        Self::Collection(collection)
    }
}

impl From<Vec<ElementRef>> for Group {
    fn from(references: Vec<ElementRef>) -> Self {
        Self::References(references)
    }
}

impl<R: Into<ElementRef>> FromIterator<R> for Group {
    fn from_iter<T: IntoIterator<Item = R>>(iter: T) -> Self {
        Self::References(iter.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::Affix;
    use super::Group;
    use crate::reference::ElementRef;

    #[test]
    fn affix() {
        assert_eq!("list-1", Affix::Prefix("list-").apply("1"));
        assert_eq!("name-errors", Affix::Suffix("-errors").apply("name"));
        assert_eq!("name", Affix::None.apply("name"));
        assert_eq!("name", Affix::default().apply("name"));
    }

    #[test]
    fn group_from_names() {
        let group: Group = ["a", "#b", "div"].into_iter().collect();
        assert_eq!(
            Group::References(vec![
                ElementRef::Name("a".into()),
                ElementRef::Name("#b".into()),
                ElementRef::Name("div".into()),
            ]),
            group
        );
    }
}
