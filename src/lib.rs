//! # dae-outline
//!
//! Render schema-described outline documents into dae-style block
//! configuration text.
//!
//! ## What is an outline?
//!
//! An outline is a schema+value tree: field names, semantic type tags,
//! array-ness, a leaf-type set, and concrete values, typically produced by
//! deserializing a description document maintained as a single source of
//! truth. This crate is the canonical way to turn such a tree into
//! syntactically valid, human-readable config text, for example to
//! generate the annotated example config shipped with a release.
//!
//! The emitted language is the indented `key { ... }` / `key: value`
//! block DSL with `&&`-joined boolean function expressions and
//! `condition -> outbound` routing lines; see [`format`] for the full
//! description.
//!
//! ## Key Features
//!
//! - **Recursive marshalling engine**: blocks, scalar lines, joined
//!   lists, and the parallel-array "array of sections" fan-out
//! - **Expression builder**: quoting/escaping, `key: value` parameters,
//!   function calls, `&&` chains, and routing rules ([`expr`])
//! - **Serde-native input**: outlines deserialize from any serde format
//! - **Fail-fast**: every contract violation aborts the marshal; no
//!   truncated output ever escapes
//!
//! ## Quick Start
//!
//! ```rust
//! use dae_outline::{to_string, Outline};
//!
//! let doc = r#"{
//!   "version": "unknown",
//!   "leaves": ["bool", "string", "uint16"],
//!   "structure": [
//!     {
//!       "name": "Global",
//!       "mapping": "global",
//!       "type": "config.Global",
//!       "structure": [
//!         { "name": "TproxyPort", "mapping": "tproxy_port",
//!           "type": "uint16", "value": 12345 },
//!         { "name": "LanNatDirect", "mapping": "lan_nat_direct",
//!           "type": "bool", "value": true },
//!         { "name": "AllowInsecure", "mapping": "allow_insecure",
//!           "type": "bool" }
//!       ]
//!     }
//!   ]
//! }"#;
//!
//! let outline: Outline = serde_json::from_str(doc).unwrap();
//! let text = to_string(&outline).unwrap();
//!
//! // allow_insecure has no value and bool is a leaf type: omitted.
//! assert_eq!(text, "global {\n    tproxy_port: 12345\n    lan_nat_direct: true\n}\n");
//! ```
//!
//! ## Building expression values
//!
//! Function- and rule-typed leaves hold already-built expression text;
//! [`expr`] supplies the builders:
//!
//! ```rust
//! use dae_outline::expr;
//!
//! let filter = expr::function_call(
//!     "name",
//!     &[expr::param(Some("keyword"), "HK").unwrap()],
//!     false,
//! );
//! assert_eq!(filter, "name(keyword: 'HK')");
//! ```
//!
//! ## Scope
//!
//! The engine consumes an in-memory tree and produces a text buffer.
//! Producing or validating the tree, wrapping the engine in a CLI, file
//! I/O, and parsing the emitted format back are all external concerns.

pub mod error;
pub mod expr;
pub mod format;
pub mod options;
pub mod outline;
pub mod ser;
pub mod value;

pub use error::{Error, Result};
pub use options::MarshalOptions;
pub use outline::{Node, Outline, TypeTag};
pub use ser::{split_key, Marshaller};
pub use value::{Number, Value};

use std::io;

/// Marshals an outline to config text with default options.
///
/// # Examples
///
/// ```rust
/// use dae_outline::{to_string, Outline};
///
/// let outline: Outline = serde_json::from_str(
///     r#"{"version":"","leaves":[],"structure":[]}"#).unwrap();
/// assert_eq!(to_string(&outline).unwrap(), "");
/// ```
///
/// # Errors
///
/// Returns an error if the outline violates the marshalling contract
/// (length mismatches, missing names, invalid value shapes).
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string(outline: &Outline) -> Result<String> {
    to_string_with_options(outline, MarshalOptions::default())
}

/// Marshals an outline to config text with custom options.
///
/// # Examples
///
/// ```rust
/// use dae_outline::{to_string_with_options, MarshalOptions, Outline};
///
/// # let outline: Outline = serde_json::from_str(
/// #     r#"{"version":"","leaves":[],"structure":[]}"#).unwrap();
/// let options = MarshalOptions::new().with_indent(2);
/// let text = to_string_with_options(&outline, options).unwrap();
/// ```
///
/// # Errors
///
/// Returns an error if the outline violates the marshalling contract.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options(outline: &Outline, options: MarshalOptions) -> Result<String> {
    Marshaller::with_options(outline, options).marshal()
}

/// Marshals an outline and writes the text to `writer`.
///
/// The buffer is completed before the first byte is written; a failed
/// marshal writes nothing.
///
/// # Errors
///
/// Returns an error if marshalling fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W>(writer: W, outline: &Outline) -> Result<()>
where
    W: io::Write,
{
    to_writer_with_options(writer, outline, MarshalOptions::default())
}

/// Marshals an outline and writes the text to `writer` with custom
/// options.
///
/// # Errors
///
/// Returns an error if marshalling fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W>(
    mut writer: W,
    outline: &Outline,
    options: MarshalOptions,
) -> Result<()>
where
    W: io::Write,
{
    let text = to_string_with_options(outline, options)?;
    writer
        .write_all(text.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outline(doc: &str) -> Outline {
        serde_json::from_str(doc).expect("fixture outline must parse")
    }

    #[test]
    fn empty_outline_produces_empty_text() {
        let o = outline(r#"{"version":"unknown","leaves":[],"structure":[]}"#);
        assert_eq!(to_string(&o).unwrap(), "");
    }

    #[test]
    fn indent_option_applies_per_depth() {
        let o = outline(
            r#"{
              "version": "",
              "leaves": [],
              "structure": [{
                "name": "Global", "mapping": "global", "type": "config.Global",
                "structure": [
                  { "name": "LogLevel", "mapping": "log_level",
                    "type": "string", "value": "info" }
                ]
              }]
            }"#,
        );
        let text = to_string_with_options(&o, MarshalOptions::new().with_indent(2)).unwrap();
        assert_eq!(text, "global {\n  log_level: 'info'\n}\n");
    }

    #[test]
    fn to_writer_round_trips_through_a_buffer() {
        let o = outline(
            r#"{
              "version": "",
              "leaves": [],
              "structure": [{
                "name": "Global", "mapping": "global", "type": "config.Global",
                "structure": []
              }]
            }"#,
        );
        let mut buf = Vec::new();
        to_writer(&mut buf, &o).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "global {\n}\n");
    }

    #[test]
    fn to_writer_writes_nothing_on_marshal_failure() {
        // Name child shorter than its sibling: the fan-out must fail
        // before any byte reaches the writer.
        let o = outline(
            r#"{
              "version": "",
              "leaves": [],
              "structure": [{
                "name": "Group", "mapping": "group", "isArray": true,
                "type": "config.Group",
                "structure": [
                  { "name": "Filter", "mapping": "filter", "isArray": true,
                    "type": "config_parser.Function",
                    "value": [["f"], ["g"]] },
                  { "name": "Name", "mapping": "_", "type": "string",
                    "value": ["a"] }
                ]
              }]
            }"#,
        );
        let mut buf = Vec::new();
        assert!(to_writer(&mut buf, &o).is_err());
        assert!(buf.is_empty());
    }
}
