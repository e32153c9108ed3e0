//! Outline marshalling.
//!
//! This module provides the [`Marshaller`] that walks a schema+value tree
//! and emits dae-style block configuration text by recursive descent.
//!
//! ## Overview
//!
//! Per node the marshaller decides between four output shapes:
//!
//! - **Block**: `key {` ... `}` for sections
//! - **Scalar line**: `key: value` (or a bare value when the key is `_`)
//! - **Joined list**: array elements joined with `", "` or `" && "`
//! - **Fan-out**: an array-of-sections expands into repeated sibling
//!   blocks, one per index of its children's parallel value arrays
//!
//! Routing-rule arrays are "squeezed": each element is already a complete
//! `condition -> outbound` line and is written on its own line, unjoined
//! and unkeyed.
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! use dae_outline::{to_string, Outline};
//!
//! let outline: Outline = serde_json::from_str(r#"{
//!   "version": "unknown",
//!   "leaves": ["bool"],
//!   "structure": [{
//!     "name": "Global", "mapping": "global", "type": "config.Global",
//!     "structure": [
//!       { "name": "LanNatDirect", "mapping": "lan_nat_direct",
//!         "type": "bool", "value": true }
//!     ]
//!   }]
//! }"#).unwrap();
//!
//! let text = to_string(&outline).unwrap();
//! assert_eq!(text, "global {\n    lan_nat_direct: true\n}\n");
//! ```
//!
//! ## Direct Marshaller Usage
//!
//! ```rust
//! use dae_outline::{Marshaller, MarshalOptions, Outline};
//!
//! # let outline: Outline = serde_json::from_str(
//! #     r#"{"version":"","leaves":[],"structure":[]}"#).unwrap();
//! let marshaller = Marshaller::with_options(&outline, MarshalOptions::new().with_indent(2));
//! let text = marshaller.marshal().unwrap();
//! assert_eq!(text, "");
//! ```

use crate::expr::quote;
use crate::{Error, MarshalOptions, Node, Outline, Result, TypeTag, Value};

/// The outline marshaller.
///
/// Holds the append-only output buffer, the indent configuration, and a
/// read-only borrow of the outline. [`Marshaller::marshal`] consumes the
/// instance and returns the finished buffer; on error no buffer escapes.
pub struct Marshaller<'a> {
    out: String,
    options: MarshalOptions,
    outline: &'a Outline,
}

impl<'a> Marshaller<'a> {
    /// Creates a marshaller over `outline` with default options.
    #[must_use]
    pub fn new(outline: &'a Outline) -> Self {
        Self::with_options(outline, MarshalOptions::default())
    }

    /// Creates a marshaller over `outline` with the given options.
    #[must_use]
    pub fn with_options(outline: &'a Outline, options: MarshalOptions) -> Self {
        Marshaller {
            // Typical outlines render to a few KiB
            out: String::with_capacity(1024),
            options,
            outline,
        }
    }

    /// Renders the whole outline and returns the finished text.
    ///
    /// # Errors
    ///
    /// Any contract violation in the outline aborts the call; see
    /// [`Error`] for the failure kinds.
    pub fn marshal(mut self) -> Result<String> {
        let outline = self.outline;
        for section in &outline.structure {
            self.marshal_section(section, 0)?;
        }
        Ok(self.out)
    }

    /// Renders a composite node as `mapping {` body `}` at `depth`.
    fn marshal_section(&mut self, section: &Node, depth: usize) -> Result<()> {
        self.write_line(&format!("{} {{", section.mapping), depth);
        if section.is_array {
            if section.type_tag == TypeTag::KeyableString {
                if let Some(value) = &section.value {
                    let items = value
                        .as_list()
                        .ok_or_else(|| Error::expected_list(section.label()))?;
                    self.marshal_keyable_list(items, depth + 1)?;
                }
            } else {
                self.marshal_section_array(section, depth + 1)?;
            }
        } else {
            for child in &section.structure {
                self.marshal_leaf(child, depth + 1)?;
            }
        }
        self.write_line("}", depth);
        Ok(())
    }

    /// Renders one field at `depth`: a line, a joined list, a squeezed
    /// rule list, a sub-block, or nothing at all.
    fn marshal_leaf(&mut self, item: &Node, depth: usize) -> Result<()> {
        // A leaf-typed field with no (truthy) value means "not set, use
        // the implicit default": omit it.
        if self.outline.leaves.contains(&item.type_tag) && !item.has_truthy_value() {
            return Ok(());
        }
        // The Name child of an array-of-sections is a structural marker,
        // consumed by the fan-out; never rendered itself.
        if item.name == "Name" && item.mapping == "_" {
            return Ok(());
        }

        let text = if item.is_array {
            match &item.type_tag {
                TypeTag::FunctionListOrString => {
                    return Err(Error::unexpected_type(&item.type_tag));
                }
                TypeTag::Uint
                | TypeTag::Uint8
                | TypeTag::Uint16
                | TypeTag::Uint32
                | TypeTag::Uint64
                | TypeTag::Int
                | TypeTag::Int8
                | TypeTag::Int16
                | TypeTag::Int32
                | TypeTag::Int64 => join_integers(item)?,
                TypeTag::Bool => join_bools(item)?,
                TypeTag::RoutingRule => {
                    // Squeeze: every element is already a complete
                    // `condition -> outbound` line.
                    for value in item.list_value()? {
                        let line = value
                            .as_str()
                            .ok_or_else(|| Error::expected_string(item.label()))?;
                        self.write_line(line, depth);
                    }
                    return Ok(());
                }
                TypeTag::FunctionOrString | TypeTag::Function => join_strings(item, " && ")?,
                TypeTag::String | TypeTag::Duration => join_strings(item, ", ")?,
                TypeTag::KeyableString => {
                    self.write_line(&format!("{} {{", item.mapping), depth);
                    self.marshal_keyable_list(item.list_value()?, depth + 1)?;
                    self.write_line("}", depth);
                    return Ok(());
                }
                TypeTag::Section(_) => {
                    // Unnamed nested sections; `Name` lives in structure.
                    return self.marshal_section_array(item, depth);
                }
            }
        } else {
            match &item.type_tag {
                TypeTag::Uint
                | TypeTag::Uint8
                | TypeTag::Uint16
                | TypeTag::Uint32
                | TypeTag::Uint64
                | TypeTag::Int
                | TypeTag::Int8
                | TypeTag::Int16
                | TypeTag::Int32
                | TypeTag::Int64 => scalar_integer(item)?,
                TypeTag::Bool => item.bool_value()?.to_string(),
                // The squeeze flag has no further effect for scalars; a
                // rule renders as one unquoted line like the function
                // types below.
                TypeTag::RoutingRule
                | TypeTag::FunctionListOrString
                | TypeTag::FunctionOrString
                | TypeTag::Function => item.str_value()?.to_string(),
                TypeTag::String | TypeTag::Duration => quote(item.str_value()?),
                TypeTag::KeyableString | TypeTag::Section(_) => {
                    if self.outline.leaves.contains(&item.type_tag) {
                        return Err(Error::unknown_leaf_type(&item.type_tag));
                    }
                    // Composite despite appearing leaf-shaped.
                    return self.marshal_section(item, depth);
                }
            }
        };

        if item.mapping == "_" {
            self.write_line(&text, depth);
        } else {
            self.write_line(&format!("{}: {}", item.mapping, text), depth);
        }
        Ok(())
    }

    /// Expands an array-of-sections into one block per repetition index.
    ///
    /// The repetition count is the length of the first value sequence
    /// found depth-first in `structure`; a section with no value sequence
    /// anywhere emits nothing. Each instance marshals an index-projected
    /// clone keyed by the `Name` child's value at that index.
    fn marshal_section_array(&mut self, section: &Node, depth: usize) -> Result<()> {
        let Some(count) = repetition_count(&section.structure)? else {
            return Ok(());
        };
        for index in 0..count {
            let name = resolve_name(&section.structure, index)?;
            let mut instance = section.clone();
            instance.is_array = false;
            instance.mapping = name;
            instance.structure = project_structure(&section.structure, index)?;
            self.marshal_section(&instance, depth)?;
        }
        Ok(())
    }

    /// Renders a keyable-string list, one line per element.
    fn marshal_keyable_list(&mut self, items: &[Value], depth: usize) -> Result<()> {
        for value in items {
            let s = value
                .as_str()
                .ok_or_else(|| Error::expected_string("KeyableString"))?;
            match split_key(s) {
                Some((key, payload)) if !key.is_empty() => {
                    self.write_line(&format!("{}:{}", key, quote(payload)), depth);
                }
                _ => {
                    self.write_line(&quote(s), depth);
                }
            }
        }
        Ok(())
    }

    fn write_line(&mut self, line: &str, depth: usize) {
        for _ in 0..depth * self.options.indent {
            self.out.push(' ');
        }
        self.out.push_str(line);
        self.out.push('\n');
    }
}

/// Splits a keyable string at the first `:` that does not open a URL
/// scheme separator (`://`). Both halves are trimmed. Returns `None` when
/// no eligible colon exists.
///
/// # Examples
///
/// ```rust
/// use dae_outline::split_key;
///
/// assert_eq!(
///     split_key("mysub:https://test.com/my_sub"),
///     Some(("mysub", "https://test.com/my_sub"))
/// );
/// assert_eq!(split_key("http://test.com"), None);
/// ```
#[must_use]
pub fn split_key(s: &str) -> Option<(&str, &str)> {
    let colon = s.find(':')?;
    if s[colon..].starts_with("://") {
        return None;
    }
    Some((s[..colon].trim(), s[colon + 1..].trim()))
}

/// Number of repetitions described by an array-of-sections' children: the
/// length of the first value sequence found depth-first, or `None` when no
/// child anywhere carries one.
fn repetition_count(structure: &[Node]) -> Result<Option<usize>> {
    for child in structure {
        match &child.value {
            Some(Value::List(items)) => return Ok(Some(items.len())),
            Some(_) => return Err(Error::expected_list(child.label())),
            None => {
                if !child.structure.is_empty() {
                    if let Some(count) = repetition_count(&child.structure)? {
                        return Ok(Some(count));
                    }
                }
            }
        }
    }
    Ok(None)
}

/// Resolves the block key for repetition `index`: the `Name` child's value
/// at that index, which must be a non-empty string. A `Name` sequence
/// shorter than the repetition count is a length mismatch, not a missing
/// name.
fn resolve_name(structure: &[Node], index: usize) -> Result<String> {
    for child in structure {
        if child.name != "Name" {
            continue;
        }
        let Some(Value::List(items)) = &child.value else {
            continue;
        };
        if index >= items.len() {
            return Err(Error::value_too_short(child.label()));
        }
        return match &items[index] {
            Value::String(s) if !s.is_empty() => Ok(s.clone()),
            _ => Err(Error::MissingName),
        };
    }
    Err(Error::MissingName)
}

/// Produces the index-`index` view of an array-of-sections' children:
/// each child either recursively projects its nested structure or has its
/// value sequence replaced by the single element at `index`.
///
/// The originals are never touched; projections are short-lived clones
/// scoped to one repetition instance.
fn project_structure(structure: &[Node], index: usize) -> Result<Vec<Node>> {
    let mut slice = Vec::with_capacity(structure.len());
    for child in structure {
        if child.value.is_none() && !child.structure.is_empty() {
            let mut projected = child.clone();
            projected.structure = project_structure(&child.structure, index)?;
            slice.push(projected);
            continue;
        }
        let items = child
            .value
            .as_ref()
            .and_then(Value::as_list)
            .ok_or_else(|| Error::value_too_short(child.label()))?;
        if index >= items.len() {
            return Err(Error::value_too_short(child.label()));
        }
        let mut projected = child.clone();
        projected.value = Some(items[index].clone());
        slice.push(projected);
    }
    Ok(slice)
}

fn join_integers(item: &Node) -> Result<String> {
    let mut parts = Vec::new();
    for value in item.list_value()? {
        let n = value
            .as_integer()
            .ok_or_else(|| Error::invalid_integer(item.label(), &value_repr(value)))?;
        parts.push(n.to_string());
    }
    Ok(parts.join(", "))
}

fn join_bools(item: &Node) -> Result<String> {
    let mut parts = Vec::new();
    for value in item.list_value()? {
        let b = value
            .as_bool()
            .ok_or_else(|| Error::expected_bool(item.label()))?;
        parts.push(b.to_string());
    }
    Ok(parts.join(", "))
}

fn join_strings(item: &Node, sep: &str) -> Result<String> {
    let mut out = String::new();
    for (i, value) in item.list_value()?.iter().enumerate() {
        let s = value
            .as_str()
            .ok_or_else(|| Error::expected_string(item.label()))?;
        if i > 0 {
            out.push_str(sep);
        }
        out.push_str(s);
    }
    Ok(out)
}

fn scalar_integer(item: &Node) -> Result<String> {
    let n = item
        .value
        .as_ref()
        .and_then(Value::as_integer)
        .ok_or_else(|| {
            let repr = item.value.as_ref().map_or_else(|| "null".to_string(), value_repr);
            Error::invalid_integer(item.label(), &repr)
        })?;
    Ok(n.to_string())
}

fn value_repr(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::List(_) => "[..]".to_string(),
    }
}
