//! # sini
//!
//! A small INI configuration library: parse text into a [`Document`], read
//! and write properties through typed handles, and serialize it back.
//!
//! ## Key Features
//!
//! - **Predictable output**: sections and keys are written in sorted order,
//!   quoting is derived from the value, not copied from the input
//! - **Typed access**: booleans with common synonyms, integers in hex,
//!   binary, octal and decimal, floats, strings
//! - **Existence-aware handles**: "missing" and "wrong type" are different
//!   errors, and writing through a handle creates the key
//! - **Precise errors**: syntax errors carry line, column and the offending line
//!
//! ## Quick Start
//!
//! ```rust
//! use sini::{from_str, to_string};
//!
//! let mut doc = from_str(
//!     "c=\t42\n a = b \n\n[section1]\n  e='  asdf  '\ng  =\"as123df\"\n",
//! ).unwrap();
//!
//! assert_eq!(
//!     to_string(&doc),
//!     "a=b\nc=42\n\n[section1]\ne=\"  asdf  \"\ng=as123df\n\n"
//! );
//!
//! let section = doc.section("");
//! assert_eq!(section.property("c").get::<i32>().unwrap(), 42);
//!
//! let mut flag = section.property("verbose");
//! assert!(flag.get::<bool>().unwrap_err().is_missing());
//! flag.set(true);
//! assert!(flag.get::<bool>().unwrap());
//! ```
//!
//! ## Building Documents
//!
//! ```rust
//! use sini::ini;
//!
//! let doc = ini! {
//!     "" => { "a" => 42, "b" => "asdf" },
//!     "A" => { "c" => 4.5 },
//! };
//!
//! let back = sini::from_str(&doc.serialize()).unwrap();
//! assert_eq!(back.section_or_fail("A").unwrap().get::<f64>("c").unwrap(), 4.5);
//! ```
//!
//! ## Format
//!
//! See the [`format`] module for the accepted grammar and the
//! normalization rules.

pub mod de;
pub mod document;
pub mod error;
pub mod format;
pub mod macros;
pub mod options;
pub mod proxy;
pub mod ser;
pub mod value;

pub use de::Parser;
pub use document::{Document, Section};
pub use error::{Error, Result};
pub use options::{IniOptions, QuotePolicy, QuoteStyle};
pub use proxy::{Property, PropertyRef};
pub use ser::Serializer;
pub use value::{FromIni, ToIni};

use std::io;

/// Parses INI text into a [`Document`].
///
/// # Examples
///
/// ```rust
/// let doc = sini::from_str("[net]\nport = 0x1F90\n").unwrap();
/// assert_eq!(doc.section_or_fail("net").unwrap().get::<u16>("port").unwrap(), 8080);
/// ```
///
/// # Errors
///
/// Returns [`Error::Syntax`] for malformed input. Error messages include
/// line and column information.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str(s: &str) -> Result<Document> {
    Parser::new(s).parse()
}

/// Alias of [`from_str`].
///
/// # Errors
///
/// Returns [`Error::Syntax`] for malformed input.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse(s: &str) -> Result<Document> {
    from_str(s)
}

/// Parses INI text from bytes.
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8 or not valid INI.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice(v: &[u8]) -> Result<Document> {
    let s = std::str::from_utf8(v).map_err(|e| Error::custom(e.to_string()))?;
    from_str(s)
}

/// Reads and parses INI text from an I/O stream.
///
/// # Examples
///
/// ```rust
/// use std::io::Cursor;
///
/// let doc = sini::from_reader(Cursor::new(b"a = 1\n")).unwrap();
/// assert_eq!(doc.default_section().get::<i32>("a").unwrap(), 1);
/// ```
///
/// # Errors
///
/// Returns an error if reading fails or the input is not valid INI.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R>(mut reader: R) -> Result<Document>
where
    R: io::Read,
{
    let mut string = String::new();
    reader
        .read_to_string(&mut string)
        .map_err(|e| Error::io(&e.to_string()))?;
    from_str(&string)
}

/// Serializes a [`Document`] with default options.
#[must_use]
pub fn to_string(doc: &Document) -> String {
    to_string_with_options(doc, IniOptions::default())
}

/// Serializes a [`Document`] with custom options.
///
/// # Examples
///
/// ```rust
/// use sini::{to_string_with_options, Document, IniOptions};
///
/// let mut doc = Document::new();
/// doc.section("").set("a", 1);
/// doc.section("s").set("b", "x  y");
///
/// let text = to_string_with_options(&doc, IniOptions::safe().with_section_spacing(false));
/// assert_eq!(text, "a=1\n[s]\nb=\"x  y\"\n");
/// ```
#[must_use]
pub fn to_string_with_options(doc: &Document, options: IniOptions) -> String {
    Serializer::new(options).render(doc)
}

/// Writes a [`Document`] to an I/O stream with default options.
///
/// # Errors
///
/// Returns an error if writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W>(writer: W, doc: &Document) -> Result<()>
where
    W: io::Write,
{
    to_writer_with_options(writer, doc, IniOptions::default())
}

/// Writes a [`Document`] to an I/O stream with custom options.
///
/// # Errors
///
/// Returns an error if writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W>(mut writer: W, doc: &Document, options: IniOptions) -> Result<()>
where
    W: io::Write,
{
    writer
        .write_all(to_string_with_options(doc, options).as_bytes())
        .map_err(|e| Error::io(&e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let mut doc = Document::new();
        doc.section("").property("a").set(42);
        doc.section("").property("b").set("asdf");
        doc.section("A").property("c").set(4.5);

        let back = from_str(&to_string(&doc)).unwrap();
        assert_eq!(back.default_section().get::<i32>("a").unwrap(), 42);
        assert_eq!(back.default_section().get::<String>("b").unwrap(), "asdf");
        assert_eq!(back.section_or_fail("A").unwrap().get::<f64>("c").unwrap(), 4.5);
        assert_eq!(back, doc);
    }

    #[test]
    fn test_from_slice_rejects_invalid_utf8() {
        assert!(from_slice(&[b'a', b'=', 0xFF]).is_err());
        assert!(from_slice(b"a=1").is_ok());
    }

    #[test]
    fn test_to_writer() {
        let mut doc = Document::new();
        doc.section("s").set("k", "v");

        let mut buffer = Vec::new();
        to_writer(&mut buffer, &doc).unwrap();
        assert_eq!(buffer, b"[s]\nk=v\n\n");
    }

    #[test]
    fn test_display_matches_serialize() {
        let doc: Document = "[x]\ny = 1\n".parse().unwrap();
        assert_eq!(doc.to_string(), doc.serialize());
    }
}
