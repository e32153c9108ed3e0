//! Expression builder: formatting helpers for DSL fragments.
//!
//! Stateless functions that produce the textual pieces embedded in outline
//! values for the composite-expression types: quoted string literals,
//! `key: value` parameters, `name(args...)` function calls, `&&`-joined
//! boolean chains, and `condition -> outbound` routing lines. The
//! marshaller never calls these; it only consumes their output, already
//! stored as leaf values by whatever produced the outline.
//!
//! The escaping rule and composition grammar here are part of the output
//! format's correctness contract; see [`crate::format`].
//!
//! ## Examples
//!
//! ```rust
//! use dae_outline::expr;
//!
//! let cond = expr::function_call("dport", &[expr::param(None, 53)?], false);
//! let rule = expr::routing_rule(&[cond], "direct");
//! assert_eq!(rule, "dport(53) -> direct");
//! # dae_outline::Result::Ok(())
//! ```

use crate::{Error, Result};
use indexmap::IndexMap;

/// Wraps `s` in single quotes, escaping any literal single quote inside as
/// `\'`. No other characters are altered.
///
/// # Examples
///
/// ```rust
/// use dae_outline::expr::quote;
///
/// assert_eq!(quote("https://test.com"), "'https://test.com'");
/// assert_eq!(quote("a'b"), r"'a\'b'");
/// ```
#[must_use]
pub fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for ch in s.chars() {
        if ch == '\'' {
            out.push('\\');
        }
        out.push(ch);
    }
    out.push('\'');
    out
}

/// Joins a function chain with `" && "`, or falls back to a plain string.
///
/// With `and_functions` given, the functions win even when the fallback is
/// also present; without either, the result is empty.
///
/// # Examples
///
/// ```rust
/// use dae_outline::expr::function_list_or_string;
///
/// let joined = function_list_or_string(Some(&["min_avg10", "fixed(0)"][..]), None);
/// assert_eq!(joined, "min_avg10 && fixed(0)");
///
/// assert_eq!(function_list_or_string::<&str>(None, Some("random")), "random");
/// assert_eq!(function_list_or_string::<&str>(None, None), "");
/// ```
#[must_use]
pub fn function_list_or_string<S: AsRef<str>>(
    and_functions: Option<&[S]>,
    fallback: Option<&str>,
) -> String {
    match and_functions {
        Some(functions) => join(functions, " && "),
        None => fallback.unwrap_or_default().to_string(),
    }
}

/// Returns `func` when given and non-empty, else the fallback or empty.
///
/// # Examples
///
/// ```rust
/// use dae_outline::expr::function_or_string;
///
/// assert_eq!(function_or_string(Some("qtype(aaaa)"), Some("asis")), "qtype(aaaa)");
/// assert_eq!(function_or_string(None, Some("asis")), "asis");
/// assert_eq!(function_or_string(Some(""), None), "");
/// ```
#[must_use]
pub fn function_or_string(func: Option<&str>, fallback: Option<&str>) -> String {
    match func {
        Some(f) if !f.is_empty() => f.to_string(),
        _ => fallback.unwrap_or_default().to_string(),
    }
}

/// Builds a keyable string: `"key: value"`, or the bare value without a
/// key. The value must arrive unquoted; quoting is applied later by the
/// marshaller when the string is split back apart.
///
/// # Errors
///
/// Returns [`Error::PreQuotedValue`] when `value` already starts with a
/// quote character.
///
/// # Examples
///
/// ```rust
/// use dae_outline::expr::keyable_string;
///
/// let s = keyable_string(Some("mysub"), "https://test.com/my_sub")?;
/// assert_eq!(s, "mysub: https://test.com/my_sub");
///
/// assert!(keyable_string(None, "'quoted'").is_err());
/// # dae_outline::Result::Ok(())
/// ```
pub fn keyable_string(key: Option<&str>, value: &str) -> Result<String> {
    if value.starts_with('\'') || value.starts_with('"') {
        return Err(Error::pre_quoted("KeyableString"));
    }
    match key {
        Some(k) if !k.is_empty() => Ok(format!("{}: {}", k, value)),
        _ => Ok(value.to_string()),
    }
}

/// A primitive value accepted by [`param`].
///
/// The closed set mirrors what the format can carry in a function
/// parameter position; anything else is rejected at compile time.
#[derive(Clone, Debug, PartialEq)]
pub enum ParamValue {
    Bool(bool),
    Integer(i64),
    Float(f64),
    Str(String),
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        ParamValue::Integer(value as i64)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Integer(value)
    }
}

impl From<u16> for ParamValue {
    fn from(value: u16) -> Self {
        ParamValue::Integer(value as i64)
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        ParamValue::Integer(value as i64)
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Float(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Str(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Str(value)
    }
}

/// Formats one function parameter: `"key: value"`, or the bare value when
/// the key is absent. String values are quoted via [`quote`]; booleans and
/// numbers stringify as-is.
///
/// # Errors
///
/// Returns [`Error::PreQuotedValue`] when a string value already starts
/// with a quote character.
///
/// # Examples
///
/// ```rust
/// use dae_outline::expr::param;
///
/// assert_eq!(param(Some("keyword"), "HK")?, "keyword: 'HK'");
/// assert_eq!(param(None, 0)?, "0");
/// assert_eq!(param(None, true)?, "true");
/// # dae_outline::Result::Ok(())
/// ```
pub fn param(key: Option<&str>, value: impl Into<ParamValue>) -> Result<String> {
    let rendered = match value.into() {
        ParamValue::Bool(b) => b.to_string(),
        ParamValue::Integer(i) => i.to_string(),
        ParamValue::Float(f) => f.to_string(),
        ParamValue::Str(s) => {
            if s.starts_with('\'') || s.starts_with('"') {
                return Err(Error::pre_quoted("Param"));
            }
            quote(&s)
        }
    };
    match key {
        Some(k) if !k.is_empty() => Ok(format!("{}: {}", k, rendered)),
        _ => Ok(rendered),
    }
}

/// Builds a function call: `name(p1, p2, ...)` from already-formatted
/// parameters. In outbound context a parameterless call is a bare
/// identifier with no parentheses.
///
/// # Examples
///
/// ```rust
/// use dae_outline::expr::function_call;
///
/// assert_eq!(function_call("subtag", &["mysub"], false), "subtag(mysub)");
/// assert_eq!(function_call::<&str>("direct", &[], true), "direct");
/// assert_eq!(function_call::<&str>("noop", &[], false), "noop()");
/// ```
#[must_use]
pub fn function_call<S: AsRef<str>>(name: &str, params: &[S], outbound: bool) -> String {
    if outbound && params.is_empty() {
        return name.to_string();
    }
    format!("{}({})", name, join(params, ", "))
}

/// Builds a routing rule line: `"f1 && f2 -> outbound"`.
///
/// # Examples
///
/// ```rust
/// use dae_outline::expr::routing_rule;
///
/// let rule = routing_rule(&["domain(geosite:cn)"], "direct");
/// assert_eq!(rule, "domain(geosite:cn) -> direct");
/// ```
#[must_use]
pub fn routing_rule<S: AsRef<str>>(and_functions: &[S], outbound: &str) -> String {
    format!("{} -> {}", join(and_functions, " && "), outbound)
}

/// The composite-expression type names this builder understands, with a
/// one-line summary each. Documentation for callers wiring outlines
/// together; never consulted for control flow.
#[must_use]
pub fn expression_types() -> IndexMap<&'static str, &'static str> {
    IndexMap::from([
        (
            "config.FunctionListOrString",
            "function chain joined with ' && ', or a plain string",
        ),
        (
            "config.FunctionOrString",
            "a single function expression, or a plain string",
        ),
        (
            "config.KeyableString",
            "string payload with an optional 'key:' prefix",
        ),
        ("config_parser.Function", "a single function expression"),
        (
            "config_parser.RoutingRule",
            "'conditions -> outbound' routing line",
        ),
    ])
}

fn join<S: AsRef<str>>(parts: &[S], sep: &str) -> String {
    let mut out = String::new();
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            out.push_str(sep);
        }
        out.push_str(part.as_ref());
    }
    out
}
