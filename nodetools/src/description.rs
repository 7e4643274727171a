//! Plain descriptions of the nodes to append.

use serde::Deserialize;
use serde::Deserializer;
use serde::de::IgnoredAny;
use serde::de::MapAccess;
use serde::de::Visitor;

use crate::reference::ElementRef;

/// Describes one element to create, or some text or markup to append to an existing element.
///
/// ```
/// # use nodetools::prelude::*;
/// let description = NodeDescription::new()
///     .parent("root")
///     .tag("div")
///     .text("hi")
///     .param("id", "x")
///     .flag("hidden");
/// assert_eq!(Some("x"), description.id());
/// ```
///
/// Deserializes from the plain-object form, where the tag is named `e`:
/// `{"parent": "root", "e": "div", "params": {"id": "x", "hidden": null}}`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct NodeDescription {
    #[serde(default, deserialize_with = "deserialize_parent")]
    pub parent: Option<ElementRef>,
    #[serde(default, rename = "e", deserialize_with = "deserialize_scalar")]
    pub tag: Option<String>,
    #[serde(default, deserialize_with = "deserialize_scalar")]
    pub text: Option<String>,
    #[serde(default, deserialize_with = "deserialize_scalar")]
    pub html: Option<String>,
    #[serde(default)]
    pub params: Option<Params>,
}

impl NodeDescription {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parent(mut self, parent: impl Into<ElementRef>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn html(mut self, html: impl Into<String>) -> Self {
        self.html = Some(html.into());
        self
    }

    /// Adds an attribute with a value.
    pub fn param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params
            .get_or_insert_with(Params::default)
            .push(name.into(), Some(value.into()));
        self
    }

    /// Adds an attribute without a value, like `<input disabled>`.
    pub fn flag(mut self, name: impl Into<String>) -> Self {
        self.params
            .get_or_insert_with(Params::default)
            .push(name.into(), None);
        self
    }

    /// The `id` attribute the created element will have, if any.
    pub fn id(&self) -> Option<&str> {
        self.params.as_ref()?.get("id")
    }
}

/// Only string parents can be deserialized, live nodes are attached by the JS bindings.
fn deserialize_parent<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<ElementRef>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Parent {
        Name(String),
        Other(IgnoredAny),
    }

    Ok(match Option::<Parent>::deserialize(deserializer)? {
        Some(Parent::Name(name)) => Some(ElementRef::Name(name)),
        Some(Parent::Other(IgnoredAny)) | None => None,
    })
}

/// Numbers and booleans are accepted as strings.
fn deserialize_scalar<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Ok(Option::<ParamValue>::deserialize(deserializer)?.map(String::from))
}

/// Attributes of an element, in insertion order.
///
/// A `None` value sets the attribute with no value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Params(Vec<(String, Option<String>)>);

impl Params {
    pub fn push(&mut self, name: String, value: Option<String>) {
        self.0.push((name, value));
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.0
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_deref()))
    }

    /// The value of the last attribute with that name.
    ///
    /// Attributes without a value read as the empty string, like the DOM does.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .rev()
            .find(|(n, _)| n == name)
            .map(|(_, value)| value.as_deref().unwrap_or_default())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|(n, _)| n == name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, Option<V>)> for Params {
    fn from_iter<T: IntoIterator<Item = (N, Option<V>)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, value)| (name.into(), value.map(Into::into)))
                .collect(),
        )
    }
}

impl<'de> Deserialize<'de> for Params {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(ParamsVisitor)
    }
}

struct ParamsVisitor;

impl<'de> Visitor<'de> for ParamsVisitor {
    type Value = Params;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a map of attribute names to values")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut params = Vec::with_capacity(map.size_hint().unwrap_or_default());
        while let Some((name, value)) = map.next_entry::<String, Option<ParamValue>>()? {
            params.push((name, value.map(String::from)));
        }
        Ok(Params(params))
    }
}

/// Scalar values are stringified the way the DOM stringifies them.
#[derive(Deserialize)]
#[serde(untagged)]
enum ParamValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
}

impl From<ParamValue> for String {
    fn from(value: ParamValue) -> Self {
        match value {
            ParamValue::Text(text) => text,
            ParamValue::Integer(integer) => integer.to_string(),
            ParamValue::Float(float) => float.to_string(),
            ParamValue::Boolean(boolean) => boolean.to_string(),
        }
    }
}
