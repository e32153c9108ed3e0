//! Error types for outline marshalling.
//!
//! Every failure aborts the whole `marshal()` call; there is no partial or
//! best-effort output. The caller owns reporting, typically by pointing at
//! the offending node of the outline document.
//!
//! ## Error Categories
//!
//! - **Length mismatches**: a parallel value array is shorter than the
//!   repetition index it must serve
//! - **Missing keys**: a repeated section without a resolvable `Name`
//! - **Invalid values**: pre-quoted strings, non-integer numerics, wrong
//!   value shapes for a declared type
//! - **Type misuse**: composite-only types in array position, declared
//!   leaves with no rendering rule

use std::fmt;
use thiserror::Error;

/// Represents all possible errors produced while marshalling an outline.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A parallel value array ended before the repetition index it must
    /// serve (array-of-sections children share one index space).
    #[error("{field}: value length too short")]
    ValueTooShort { field: String },

    /// A repeated section instance has no resolvable `Name` value.
    #[error("Name is not given")]
    MissingName,

    /// A keyable-string or parameter value arrived already quoted; quoting
    /// is owned by the builder.
    #[error("do not quote the value of {context}")]
    PreQuotedValue { context: String },

    /// A composite-only type appeared where its array form is invalid.
    #[error("unexpected type: {0}")]
    UnexpectedType(String),

    /// A type declared in the leaf set reached generic handling unmatched.
    #[error("unknown leaf type: {0}")]
    UnknownLeafType(String),

    /// A field required a string value but held something else.
    #[error("{field}: expected a string value")]
    ExpectedString { field: String },

    /// A field required a value sequence but held a scalar or nothing.
    #[error("{field}: expected a value sequence")]
    ExpectedList { field: String },

    /// A field required a boolean value but held something else.
    #[error("{field}: expected a boolean value")]
    ExpectedBool { field: String },

    /// A numeric field held a value that cannot be reinterpreted as an
    /// integer.
    #[error("{field}: cannot interpret {value:?} as an integer")]
    InvalidInteger { field: String, value: String },

    /// Writing the finished buffer to an `io::Write` sink failed.
    #[error("IO error: {0}")]
    Io(String),
}

impl Error {
    /// Creates a length-mismatch error naming the offending field.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dae_outline::Error;
    ///
    /// let err = Error::value_too_short("Filter");
    /// assert!(err.to_string().contains("value length too short"));
    /// ```
    pub fn value_too_short(field: &str) -> Self {
        Error::ValueTooShort {
            field: field.to_string(),
        }
    }

    /// Creates a pre-quoted-value error; `context` names the rejecting
    /// operation (e.g. `KeyableString`).
    pub fn pre_quoted(context: &str) -> Self {
        Error::PreQuotedValue {
            context: context.to_string(),
        }
    }

    /// Creates an invalid-array-usage error for the given type name.
    pub fn unexpected_type<T: fmt::Display>(name: T) -> Self {
        Error::UnexpectedType(name.to_string())
    }

    /// Creates an unknown-leaf-type error for the given type name.
    pub fn unknown_leaf_type<T: fmt::Display>(name: T) -> Self {
        Error::UnknownLeafType(name.to_string())
    }

    /// Creates a wrong-shape error for a field that must hold a string.
    pub fn expected_string(field: &str) -> Self {
        Error::ExpectedString {
            field: field.to_string(),
        }
    }

    /// Creates a wrong-shape error for a field that must hold a sequence.
    pub fn expected_list(field: &str) -> Self {
        Error::ExpectedList {
            field: field.to_string(),
        }
    }

    /// Creates a wrong-shape error for a field that must hold a boolean.
    pub fn expected_bool(field: &str) -> Self {
        Error::ExpectedBool {
            field: field.to_string(),
        }
    }

    /// Creates an integer-reinterpretation error.
    pub fn invalid_integer(field: &str, value: &str) -> Self {
        Error::InvalidInteger {
            field: field.to_string(),
            value: value.to_string(),
        }
    }

    /// Creates an I/O error for writer failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
