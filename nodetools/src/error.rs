//! Failures of the DOM helpers.
//!
//! None of these are ever returned to callers of the public operations: they are
//! handed to a [Reporter](crate::report::Reporter) and the operation returns an
//! empty result instead.

use nameth::NamedEnumValues as _;
use nameth::NamedType as _;
use nameth::nameth;
use wasm_bindgen::JsValue;

#[nameth]
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum NodeToolsError {
    #[error("[{}][{}] No parent was provided", Self::type_name(), self.name())]
    MissingParent,

    #[error("[{}][{}] Cannot resolve '{reference}'", Self::type_name(), self.name())]
    UnresolvedReference { reference: String },

    #[error(
        "[{}][{}] The description has neither a tag, a text nor an html",
        Self::type_name(),
        self.name()
    )]
    InvalidDescription,

    #[error("[{}][{}] '{reference}' is not a <select>", Self::type_name(), self.name())]
    NotASelect { reference: String },

    #[error("[{}][{}] {operation} failed: {error}", Self::type_name(), self.name())]
    Dom {
        operation: &'static str,
        error: String,
    },

    #[error(
        "[{}][{}] '{value}' is not a valid {expected}",
        Self::type_name(),
        self.name()
    )]
    InvalidValue {
        value: String,
        expected: &'static str,
    },

    #[error("[{}][{}] {}", Self::type_name(), self.name(), .0)]
    Deserialize(String),

    #[error("[{}][{}] The window has no document", Self::type_name(), self.name())]
    NoDocument,
}

impl NodeToolsError {
    pub(crate) fn unresolved(reference: impl std::fmt::Display) -> Self {
        Self::UnresolvedReference {
            reference: reference.to_string(),
        }
    }

    /// Wraps an exception thrown by a DOM call.
    pub(crate) fn dom(operation: &'static str) -> impl FnOnce(JsValue) -> Self {
        move |error| Self::Dom {
            operation,
            error: error
                .as_string()
                .unwrap_or_else(|| format!("{error:?}")),
        }
    }
}

impl From<serde_json::Error> for NodeToolsError {
    fn from(error: serde_json::Error) -> Self {
        Self::Deserialize(error.to_string())
    }
}

impl From<serde_wasm_bindgen::Error> for NodeToolsError {
    fn from(error: serde_wasm_bindgen::Error) -> Self {
        Self::Deserialize(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::NodeToolsError;

    #[test]
    fn display() {
        assert_eq!(
            "[NodeToolsError][MissingParent] No parent was provided",
            NodeToolsError::MissingParent.to_string()
        );
        assert_eq!(
            "[NodeToolsError][UnresolvedReference] Cannot resolve '#menu'",
            NodeToolsError::unresolved("#menu").to_string()
        );
        assert_eq!(
            "[NodeToolsError][InvalidValue] 'abc' is not a valid i32",
            NodeToolsError::InvalidValue {
                value: "abc".into(),
                expected: "i32"
            }
            .to_string()
        );
    }

    #[test]
    fn display_deserialize() {
        assert_eq!(
            "[NodeToolsError][Deserialize] Not a component",
            NodeToolsError::Deserialize("Not a component".into()).to_string()
        );
    }

    #[test]
    fn from_json_error() {
        let error = serde_json::from_str::<u32>("[").unwrap_err();
        let NodeToolsError::Deserialize(message) = NodeToolsError::from(error) else {
            panic!("Not a deserialization error");
        };
        assert!(!message.is_empty());
    }
}
