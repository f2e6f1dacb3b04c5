//! INI parsing.
//!
//! This module provides the [`Parser`], a single-pass recursive-descent
//! parser that turns INI text into a [`Document`].
//!
//! ## Overview
//!
//! - **Line oriented**: each line is blank, a `[section]` header, or a
//!   `key = value` property, optionally followed by a `; comment`
//! - **Ordered value alternatives**: single-quoted, double-quoted, unquoted,
//!   then empty
//! - **Committed errors**: once a `[`, a key, or an opening quote has been
//!   seen, a missing `]`, `=` or closing quote is reported at once instead of
//!   being read as something else
//! - **First error wins**: parsing stops at the first error, which carries
//!   line, column and the offending line
//!
//! ## Usage
//!
//! Most users should call [`crate::from_str`]:
//!
//! ```rust
//! let doc = sini::from_str("name = demo\n[server]\nport = 8080 ; default\n").unwrap();
//! assert_eq!(doc.section_or_fail("server").unwrap().get::<u16>("port").unwrap(), 8080);
//! ```
//!
//! Text can also be merged into an existing document:
//!
//! ```rust
//! use sini::{de::Parser, Document};
//!
//! let mut doc = Document::new();
//! doc.section("").set("a", 1).set("b", 2);
//! Parser::new("b = 3\n").parse_into(&mut doc).unwrap();
//! assert_eq!(doc.serialize(), "a=1\nb=3\n\n");
//! ```

use crate::{Document, Error, Result};
use tracing::{debug, trace};

/// Parses INI text into a [`Document`].
pub struct Parser<'a> {
    input: &'a str,
    position: usize,
    line: usize,
    column: usize,
}

fn is_blank(ch: char) -> bool {
    ch == ' ' || ch == '\t'
}

fn is_line_end(ch: char) -> bool {
    ch == '\n' || ch == '\r'
}

fn is_key_start(ch: char) -> bool {
    ch.is_ascii_alphabetic() || matches!(ch, '.' | '$' | ':')
}

fn is_key_char(ch: char) -> bool {
    is_key_start(ch) || ch.is_ascii_digit() || matches!(ch, '_' | '~' | '-' | ' ')
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        Parser {
            input,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Parses the whole input into a fresh document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Syntax`] describing the first malformed construct.
    pub fn parse(mut self) -> Result<Document> {
        let mut doc = Document::new();
        self.parse_document(&mut doc)?;
        Ok(doc)
    }

    /// Parses the whole input and merges it into `doc`.
    ///
    /// Sections are reused when they already exist and parsed values
    /// overwrite existing ones. On error `doc` is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Syntax`] describing the first malformed construct.
    pub fn parse_into(mut self, doc: &mut Document) -> Result<()> {
        let mut staged = Document::new();
        self.parse_document(&mut staged)?;
        for (name, section) in staged.sections() {
            let target = doc.section(name);
            for (key, value) in section.iter() {
                target.set_value(key, value.to_string());
            }
        }
        Ok(())
    }

    fn parse_document(&mut self, doc: &mut Document) -> Result<()> {
        let mut current = String::new();
        let mut properties = 0usize;

        loop {
            if self.parse_line(doc, &mut current)? {
                properties += 1;
            }
            if self.at_end() {
                break;
            }
            self.consume_newline();
        }

        debug!(
            sections = doc.len(),
            properties,
            lines = self.line,
            "parsed INI document"
        );
        Ok(())
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    fn next_char(&mut self) -> Option<char> {
        if let Some(ch) = self.peek_char() {
            self.position += ch.len_utf8();
            self.column += 1;
            Some(ch)
        } else {
            None
        }
    }

    fn at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    fn at_line_end(&self) -> bool {
        self.peek_char().map_or(true, is_line_end)
    }

    fn skip_whitespace_same_line(&mut self) {
        while let Some(ch) = self.peek_char() {
            if is_blank(ch) {
                self.next_char();
            } else {
                break;
            }
        }
    }

    /// Consumes `\n`, `\r\n` or a lone `\r`.
    fn consume_newline(&mut self) {
        if self.next_char() == Some('\r') && self.peek_char() == Some('\n') {
            self.next_char();
        }
        self.line += 1;
        self.column = 1;
    }

    fn skip_comment(&mut self) {
        while !self.at_line_end() {
            self.next_char();
        }
    }

    /// The full source line containing the cursor.
    fn current_line(&self) -> &'a str {
        let input = self.input;
        let start = input[..self.position]
            .rfind(is_line_end)
            .map_or(0, |i| i + 1);
        let end = input[self.position..]
            .find(is_line_end)
            .map_or(input.len(), |i| self.position + i);
        &input[start..end]
    }

    fn error(&self, expected: &str) -> Error {
        Error::syntax(self.line, self.column, expected, self.current_line())
    }

    /// Parses one line up to (not including) its terminator.
    ///
    /// Returns `true` if the line defined a property.
    fn parse_line(&mut self, doc: &mut Document, current: &mut String) -> Result<bool> {
        self.skip_whitespace_same_line();

        let mut defined_property = false;
        match self.peek_char() {
            None => return Ok(false),
            Some(ch) if is_line_end(ch) => return Ok(false),
            Some(';') => {}
            Some('[') => {
                let name = self.parse_section_header()?;
                trace!(section = %name, line = self.line, "entering section");
                doc.section(&name);
                *current = name;
            }
            Some(ch) if is_key_start(ch) => {
                let (key, value) = self.parse_property()?;
                if doc.section(current.as_str()).set_value(key, value).is_some() {
                    trace!(section = %current, key, line = self.line, "overwriting duplicate key");
                }
                defined_property = true;
            }
            Some(_) => return Err(self.error("property key, section header or comment")),
        }

        self.skip_whitespace_same_line();
        if self.peek_char() == Some(';') {
            self.skip_comment();
        }
        if !self.at_line_end() {
            return Err(self.error("end of line"));
        }
        Ok(defined_property)
    }

    fn parse_section_header(&mut self) -> Result<String> {
        self.next_char(); // consume '['
        let start = self.position;
        while let Some(ch) = self.peek_char() {
            if ch == ']' || is_line_end(ch) {
                break;
            }
            self.next_char();
        }
        if self.peek_char() != Some(']') {
            return Err(self.error("']'"));
        }

        let name = &self.input[start..self.position];
        if name.is_empty() {
            return Err(self.error("section name"));
        }
        self.next_char(); // consume ']'
        Ok(name.to_string())
    }

    fn parse_key(&mut self) -> &'a str {
        let input = self.input;
        let start = self.position;
        while let Some(ch) = self.peek_char() {
            if is_key_char(ch) {
                self.next_char();
            } else {
                break;
            }
        }
        input[start..self.position].trim_end_matches(' ')
    }

    fn parse_property(&mut self) -> Result<(&'a str, String)> {
        let key = self.parse_key();
        self.skip_whitespace_same_line();
        if self.peek_char() != Some('=') {
            return Err(self.error("'='"));
        }
        self.next_char(); // consume '='
        self.skip_whitespace_same_line();

        let value = match self.peek_char() {
            Some(quote @ ('\'' | '"')) => self.parse_quoted_value(quote)?,
            _ => self.parse_raw_value(),
        };
        Ok((key, value))
    }

    /// Reads a quoted value; only an escaped closing quote is unescaped.
    fn parse_quoted_value(&mut self, quote: char) -> Result<String> {
        self.next_char(); // consume opening quote
        let mut value = String::new();

        loop {
            match self.peek_char() {
                None => return Err(self.error(&format!("closing {}", quote))),
                Some(ch) if is_line_end(ch) => {
                    return Err(self.error(&format!("closing {}", quote)))
                }
                Some('\\') => {
                    self.next_char();
                    if self.peek_char() == Some(quote) {
                        self.next_char();
                        value.push(quote);
                    } else {
                        value.push('\\');
                    }
                }
                Some(ch) if ch == quote => {
                    self.next_char();
                    return Ok(value);
                }
                Some(ch) => {
                    self.next_char();
                    value.push(ch);
                }
            }
        }
    }

    /// Reads whitespace-separated chunks up to the end of line or a comment,
    /// rejoined with single spaces. Yields `""` when no chunk is present.
    fn parse_raw_value(&mut self) -> String {
        let mut value = String::new();

        loop {
            self.skip_whitespace_same_line();
            match self.peek_char() {
                None | Some(';') => break,
                Some(ch) if is_line_end(ch) => break,
                Some(_) => {}
            }

            let start = self.position;
            while let Some(ch) = self.peek_char() {
                if is_blank(ch) || is_line_end(ch) {
                    break;
                }
                self.next_char();
            }
            if !value.is_empty() {
                value.push(' ');
            }
            value.push_str(&self.input[start..self.position]);
        }

        value
    }
}
