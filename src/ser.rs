//! INI serialization.
//!
//! The [`Serializer`] renders a [`Document`] deterministically:
//!
//! - sections in name order, the default section first and without a header
//! - properties in key order, one `key=value` per line
//! - a blank line after every section block
//! - quoting re-derived from each value's shape, never from how the value
//!   was written in the source text
//!
//! ## Usage
//!
//! ```rust
//! use sini::{to_string, Document};
//!
//! let mut doc = Document::new();
//! doc.section("").set("c", 42).set("a", "b");
//! doc.section("section1").set("e", "  asdf  ");
//!
//! assert_eq!(
//!     to_string(&doc),
//!     "a=b\nc=42\n\n[section1]\ne=\"  asdf  \"\n\n"
//! );
//! ```

use crate::options::{IniOptions, QuotePolicy};
use crate::{Document, Section};

/// Renders documents to text.
pub struct Serializer {
    output: String,
    options: IniOptions,
}

impl Serializer {
    pub fn new(options: IniOptions) -> Self {
        Serializer {
            output: String::with_capacity(256),
            options,
        }
    }

    pub fn into_inner(self) -> String {
        self.output
    }

    /// Serializes `doc` and returns the text.
    pub fn render(mut self, doc: &Document) -> String {
        self.serialize_document(doc);
        self.into_inner()
    }

    /// Appends `doc` to the output buffer.
    pub fn serialize_document(&mut self, doc: &Document) {
        for (name, section) in doc.sections() {
            if name.is_empty() {
                if section.is_empty() {
                    continue;
                }
            } else {
                self.output.push('[');
                self.output.push_str(name);
                self.output.push_str("]\n");
            }
            self.serialize_section(section);
            if self.options.section_spacing {
                self.output.push('\n');
            }
        }
    }

    fn serialize_section(&mut self, section: &Section) {
        for (key, value) in section.iter() {
            self.output.push_str(key);
            self.output.push('=');
            self.write_value(value);
            self.output.push('\n');
        }
    }

    #[inline]
    fn needs_quotes(&self, s: &str) -> bool {
        if s.is_empty() {
            return false;
        }
        let edge_whitespace =
            s.starts_with(char::is_whitespace) || s.ends_with(char::is_whitespace);
        match self.options.quote_policy {
            QuotePolicy::Minimal => edge_whitespace,
            QuotePolicy::Always => true,
            QuotePolicy::Safe => {
                edge_whitespace
                    || s.starts_with(|ch: char| ch == '\'' || ch == '"')
                    || s.starts_with(';')
                    || s.contains(" ;")
                    || s.contains("  ")
                    || s.chars().any(|ch| ch.is_whitespace() && ch != ' ')
            }
        }
    }

    #[inline]
    fn write_value(&mut self, s: &str) {
        if self.needs_quotes(s) {
            let quote = self.options.quote_style.as_char();
            self.output.push(quote);
            for ch in s.chars() {
                if ch == quote {
                    self.output.push('\\');
                }
                self.output.push(ch);
            }
            self.output.push(quote);
        } else {
            self.output.push_str(s);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::QuoteStyle;

    fn render(doc: &Document, options: IniOptions) -> String {
        Serializer::new(options).render(doc)
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(render(&Document::new(), IniOptions::default()), "");
    }

    #[test]
    fn test_empty_named_section_keeps_spacing() {
        let mut doc = Document::new();
        doc.section("empty");
        assert_eq!(render(&doc, IniOptions::default()), "[empty]\n\n");
    }

    #[test]
    fn test_output_quotes() {
        let mut doc = Document::new();
        doc.section("").set("foo", "  horse  ");
        assert_eq!(doc.serialize(), "foo=\"  horse  \"\n\n");
    }

    #[test]
    fn test_no_escaping_of_separators() {
        let mut doc = Document::new();
        doc.section("").set("expr", "a=b;c").set("empty", "");
        assert_eq!(doc.serialize(), "empty=\nexpr=a=b;c\n\n");
    }

    #[test]
    fn test_embedded_quote_is_escaped_when_quoted() {
        let mut doc = Document::new();
        doc.section("").set("q", " say \"hi\"");
        assert_eq!(doc.serialize(), "q=\" say \\\"hi\\\"\"\n\n");

        doc.section("").set("bare", "say \"hi\"");
        assert!(doc.serialize().contains("bare=say \"hi\"\n"));
    }

    #[test]
    fn test_single_quote_style() {
        let mut doc = Document::new();
        doc.section("").set("v", " it's ");
        let text = render(&doc, IniOptions::new().with_quote_style(QuoteStyle::Single));
        assert_eq!(text, "v=' it\\'s '\n\n");
    }

    #[test]
    fn test_quote_policies() {
        let mut doc = Document::new();
        doc.section("")
            .set("plain", "abc")
            .set("runs", "a  b")
            .set("tab", "a\tb")
            .set("semi", "a ;b")
            .set("quote", "'x");

        let minimal = render(&doc, IniOptions::default());
        assert!(minimal.contains("runs=a  b\n"));

        let safe = render(&doc, IniOptions::safe());
        assert!(safe.contains("plain=abc\n"));
        assert!(safe.contains("runs=\"a  b\"\n"));
        assert!(safe.contains("tab=\"a\tb\"\n"));
        assert!(safe.contains("semi=\"a ;b\"\n"));
        assert!(safe.contains("quote=\"'x\"\n"));

        let always = render(&doc, IniOptions::new().with_quote_policy(QuotePolicy::Always));
        assert!(always.contains("plain=\"abc\"\n"));
    }

    #[test]
    fn test_without_section_spacing() {
        let mut doc = Document::new();
        doc.section("").set("a", 1);
        doc.section("s").set("b", 2);
        let text = render(&doc, IniOptions::new().with_section_spacing(false));
        assert_eq!(text, "a=1\n[s]\nb=2\n");
    }
}
