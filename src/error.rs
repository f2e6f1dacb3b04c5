//! Error types for INI parsing, conversion and property access.
//!
//! Every fallible operation in this crate returns [`Result`], whose error
//! side is the single [`Error`] enum. The variants fall into three
//! categories that callers usually want to tell apart:
//!
//! - **Syntax errors**: the input text is not a well-formed document
//!   ([`Error::Syntax`], carrying line/column and the offending line)
//! - **Conversion errors**: a stored value cannot be read as the requested
//!   type ([`Error::Conversion`])
//! - **Existence errors**: a property or section that was required to exist
//!   does not ([`Error::NoSuchProperty`], [`Error::NoSuchSection`])
//!
//! ## Examples
//!
//! ```rust
//! use sini::{from_str, Document};
//!
//! let err = from_str("[unterminated\nkey=value\n").unwrap_err();
//! assert!(err.is_syntax());
//!
//! let mut doc = Document::new();
//! let err = doc.section("").property("missing").get::<i32>().unwrap_err();
//! assert!(err.is_missing());
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors produced by this crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// IO error while reading or writing a document
    #[error("IO error: {0}")]
    Io(String),

    /// Malformed input text
    #[error("Syntax error at line {line}, column {col}: expected {expected}\n{context}")]
    Syntax {
        line: usize,
        col: usize,
        expected: String,
        context: String,
    },

    /// Stored text could not be converted to the requested type
    #[error("Cannot convert {value:?} to {target}")]
    Conversion { value: String, target: &'static str },

    /// The property does not exist
    #[error("Property does not exist: {key:?}")]
    NoSuchProperty { key: String },

    /// The section does not exist
    #[error("Section does not exist: [{name}]")]
    NoSuchSection { name: String },

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates a syntax error.
    ///
    /// `context` is the offending source line; a caret marking `col` is
    /// appended below it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sini::Error;
    ///
    /// let err = Error::syntax(3, 6, "']'", "[asdf");
    /// let msg = err.to_string();
    /// assert!(msg.contains("line 3"));
    /// assert!(msg.contains("expected ']'"));
    /// ```
    pub fn syntax(line: usize, col: usize, expected: &str, context: &str) -> Self {
        let caret = format!("{}^", " ".repeat(col.saturating_sub(1)));
        Error::Syntax {
            line,
            col,
            expected: expected.to_string(),
            context: format!("{}\n{}", context, caret),
        }
    }

    /// Creates a conversion error for `value` that could not become `target`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sini::Error;
    ///
    /// let err = Error::conversion("abc", "i32");
    /// assert!(err.is_conversion());
    /// assert!(err.to_string().contains("i32"));
    /// ```
    pub fn conversion(value: &str, target: &'static str) -> Self {
        Error::Conversion {
            value: value.to_string(),
            target,
        }
    }

    pub fn no_such_property(key: &str) -> Self {
        Error::NoSuchProperty {
            key: key.to_string(),
        }
    }

    pub fn no_such_section(name: &str) -> Self {
        Error::NoSuchSection {
            name: name.to_string(),
        }
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for reader/writer failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Returns `true` for malformed input.
    #[must_use]
    pub fn is_syntax(&self) -> bool {
        matches!(self, Error::Syntax { .. })
    }

    /// Returns `true` when a stored value had the wrong shape for the requested type.
    #[must_use]
    pub fn is_conversion(&self) -> bool {
        matches!(self, Error::Conversion { .. })
    }

    /// Returns `true` when a required property or section was absent.
    #[must_use]
    pub fn is_missing(&self) -> bool {
        matches!(
            self,
            Error::NoSuchProperty { .. } | Error::NoSuchSection { .. }
        )
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
