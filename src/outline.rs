//! The outline document model: the schema+value tree the marshaller walks.
//!
//! An [`Outline`] is produced upstream (a schema description language, a
//! config editor, or hand-authored fixtures) and consumed read-only by one
//! [`Marshaller`](crate::Marshaller) invocation. It carries three things:
//! an opaque format `version`, the **leaf-type set** (type names for which
//! "no value" means "omit the field" rather than "error"), and the ordered
//! top-level [`Node`] list.
//!
//! One recursive [`Node`] type serves both sections and fields; which role
//! a node plays follows from its [`TypeTag`] and `is_array` flag, per the
//! rules in [`crate::format`].
//!
//! ## Examples
//!
//! Outlines usually arrive as serde documents:
//!
//! ```rust
//! use dae_outline::Outline;
//!
//! let doc = r#"{
//!   "version": "unknown",
//!   "leaves": ["bool", "string"],
//!   "structure": [
//!     {
//!       "name": "Global",
//!       "mapping": "global",
//!       "type": "config.Global",
//!       "structure": [
//!         { "name": "LanNatDirect", "mapping": "lan_nat_direct",
//!           "type": "bool", "value": true }
//!       ]
//!     }
//!   ]
//! }"#;
//!
//! let outline: Outline = serde_json::from_str(doc).unwrap();
//! assert_eq!(outline.structure.len(), 1);
//! ```

use crate::{Error, Result, Value};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Semantic type tag of an outline node.
///
/// A closed enum over the scalar and composite-expression type names the
/// marshaller knows how to render; every other name is a nested-section
/// type and lands in [`TypeTag::Section`]. The document's type names
/// round-trip through serde (`"uint16"`, `"config_parser.RoutingRule"`,
/// ...).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TypeTag {
    Bool,
    Uint,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Int,
    Int8,
    Int16,
    Int32,
    Int64,
    String,
    Duration,
    FunctionListOrString,
    FunctionOrString,
    KeyableString,
    Function,
    RoutingRule,
    /// Any other type name: a nested section (named or unnamed).
    Section(std::string::String),
}

impl TypeTag {
    /// Returns the type name as it appears in outline documents.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            TypeTag::Bool => "bool",
            TypeTag::Uint => "uint",
            TypeTag::Uint8 => "uint8",
            TypeTag::Uint16 => "uint16",
            TypeTag::Uint32 => "uint32",
            TypeTag::Uint64 => "uint64",
            TypeTag::Int => "int",
            TypeTag::Int8 => "int8",
            TypeTag::Int16 => "int16",
            TypeTag::Int32 => "int32",
            TypeTag::Int64 => "int64",
            TypeTag::String => "string",
            TypeTag::Duration => "time.Duration",
            TypeTag::FunctionListOrString => "config.FunctionListOrString",
            TypeTag::FunctionOrString => "config.FunctionOrString",
            TypeTag::KeyableString => "config.KeyableString",
            TypeTag::Function => "config_parser.Function",
            TypeTag::RoutingRule => "config_parser.RoutingRule",
            TypeTag::Section(name) => name,
        }
    }

    /// Returns `true` for the fixed-width signed and unsigned integer tags.
    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(
            self,
            TypeTag::Uint
                | TypeTag::Uint8
                | TypeTag::Uint16
                | TypeTag::Uint32
                | TypeTag::Uint64
                | TypeTag::Int
                | TypeTag::Int8
                | TypeTag::Int16
                | TypeTag::Int32
                | TypeTag::Int64
        )
    }
}

impl From<String> for TypeTag {
    fn from(name: String) -> Self {
        match name.as_str() {
            "bool" => TypeTag::Bool,
            "uint" => TypeTag::Uint,
            "uint8" => TypeTag::Uint8,
            "uint16" => TypeTag::Uint16,
            "uint32" => TypeTag::Uint32,
            "uint64" => TypeTag::Uint64,
            "int" => TypeTag::Int,
            "int8" => TypeTag::Int8,
            "int16" => TypeTag::Int16,
            "int32" => TypeTag::Int32,
            "int64" => TypeTag::Int64,
            "string" => TypeTag::String,
            "time.Duration" => TypeTag::Duration,
            "config.FunctionListOrString" => TypeTag::FunctionListOrString,
            "config.FunctionOrString" => TypeTag::FunctionOrString,
            "config.KeyableString" => TypeTag::KeyableString,
            "config_parser.Function" => TypeTag::Function,
            "config_parser.RoutingRule" => TypeTag::RoutingRule,
            _ => TypeTag::Section(name),
        }
    }
}

impl From<&str> for TypeTag {
    fn from(name: &str) -> Self {
        TypeTag::from(name.to_string())
    }
}

impl From<TypeTag> for String {
    fn from(tag: TypeTag) -> Self {
        tag.as_str().to_string()
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One section or field of the outline.
///
/// A node is either a value leaf (`value` set, `structure` empty) or a
/// composite (`structure` set); inside an array-of-sections the children's
/// value sequences are parallel arrays sharing one index space.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Stable identifier; only consulted to locate the `Name` child of an
    /// array-of-sections.
    #[serde(default)]
    pub name: String,

    /// The textual key to emit. `"_"` suppresses the key entirely.
    pub mapping: String,

    /// Semantic type of the node.
    #[serde(rename = "type")]
    pub type_tag: TypeTag,

    /// Whether this node represents zero-or-more repetitions.
    #[serde(rename = "isArray", default)]
    pub is_array: bool,

    /// Concrete value for leaves; a sequence when `is_array`, and a
    /// sequence of sequences for array fields inside an array-of-sections.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,

    /// Child nodes for composites.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub structure: Vec<Node>,

    /// Free-text documentation; carried through, never emitted.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub desc: String,
}

impl Default for Node {
    fn default() -> Self {
        Node {
            name: String::new(),
            mapping: String::new(),
            type_tag: TypeTag::String,
            is_array: false,
            value: None,
            structure: Vec::new(),
            desc: String::new(),
        }
    }
}

impl Node {
    /// The identifier used in error messages: `name` when present,
    /// otherwise `mapping`.
    #[must_use]
    pub fn label(&self) -> &str {
        if self.name.is_empty() {
            &self.mapping
        } else {
            &self.name
        }
    }

    /// Returns `true` when the node's value is present and truthy.
    #[must_use]
    pub fn has_truthy_value(&self) -> bool {
        self.value.as_ref().is_some_and(Value::is_truthy)
    }

    /// The node's value as a sequence, or a shape error.
    pub fn list_value(&self) -> Result<&[Value]> {
        self.value
            .as_ref()
            .and_then(Value::as_list)
            .ok_or_else(|| Error::expected_list(self.label()))
    }

    /// The node's value as a string, or a shape error.
    pub fn str_value(&self) -> Result<&str> {
        self.value
            .as_ref()
            .and_then(Value::as_str)
            .ok_or_else(|| Error::expected_string(self.label()))
    }

    /// The node's value as a boolean, or a shape error.
    pub fn bool_value(&self) -> Result<bool> {
        self.value
            .as_ref()
            .and_then(Value::as_bool)
            .ok_or_else(|| Error::expected_bool(self.label()))
    }
}

/// The root input document: format version, leaf-type set, and the ordered
/// top-level section list.
///
/// `version` is carried but never interpreted. `leaves` keeps document
/// order (an [`IndexSet`]) so the outline serializes back deterministically.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Outline {
    /// Opaque format version tag.
    #[serde(default)]
    pub version: String,

    /// Type names allowed to be absent/falsy without being an error.
    pub leaves: IndexSet<TypeTag>,

    /// Ordered top-level sections.
    pub structure: Vec<Node>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_tag_round_trips_through_its_name() {
        for name in [
            "bool",
            "uint16",
            "int64",
            "string",
            "time.Duration",
            "config.FunctionListOrString",
            "config.FunctionOrString",
            "config.KeyableString",
            "config_parser.Function",
            "config_parser.RoutingRule",
            "config.Global",
        ] {
            let tag = TypeTag::from(name);
            assert_eq!(tag.as_str(), name);
        }
        assert_eq!(
            TypeTag::from("config.Group"),
            TypeTag::Section("config.Group".to_string())
        );
    }

    #[test]
    fn integer_tags_cover_all_widths() {
        for name in [
            "uint", "uint8", "uint16", "uint32", "uint64", "int", "int8", "int16", "int32",
            "int64",
        ] {
            assert!(TypeTag::from(name).is_integer(), "{name}");
        }
        assert!(!TypeTag::Bool.is_integer());
        assert!(!TypeTag::from("config.Group").is_integer());
    }

    #[test]
    fn node_defaults_deserialize_from_sparse_documents() {
        let node: Node = serde_json::from_str(
            r#"{ "mapping": "tproxy_port", "type": "uint16" }"#,
        )
        .unwrap();
        assert_eq!(node.type_tag, TypeTag::Uint16);
        assert!(!node.is_array);
        assert!(node.value.is_none());
        assert!(node.structure.is_empty());
    }

    #[test]
    fn label_prefers_name_over_mapping() {
        let node = Node {
            name: "Filter".to_string(),
            mapping: "filter".to_string(),
            ..Node::default()
        };
        assert_eq!(node.label(), "Filter");

        let node = Node {
            mapping: "filter".to_string(),
            ..Node::default()
        };
        assert_eq!(node.label(), "filter");
    }
}
