//! The in-memory document model.
//!
//! A [`Document`] is a set of named [`Section`]s; a section is a set of
//! key/value properties. Both levels are backed by [`BTreeMap`] so that
//! lookups and serialization iterate in key order, independent of the order
//! in which entries were inserted.
//!
//! Every document owns a section named `""` which holds the properties that
//! appear before the first `[section]` header.
//!
//! ## Examples
//!
//! ```rust
//! use sini::Document;
//!
//! let mut doc = Document::new();
//! doc.section("server").set("port", 8080);
//! doc.section("").set("name", "demo");
//!
//! assert_eq!(doc.section_or_fail("server").unwrap().get::<u16>("port").unwrap(), 8080);
//! assert_eq!(doc.serialize(), "name=demo\n\n[server]\nport=8080\n\n");
//! ```

use crate::proxy::{Property, PropertyRef};
use crate::value::{FromIni, ToIni};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::btree_map::{self, BTreeMap};
use std::fmt;
use std::str::FromStr;

/// A named group of properties.
///
/// Properties are stored as strings and iterate in key order. Typed access
/// goes through [`Section::property`], [`Section::property_or_fail`] or the
/// [`Section::get`]/[`Section::set`] shortcuts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Section {
    properties: BTreeMap<String, String>,
}

impl Section {
    /// Creates an empty section.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns an existence-aware handle for `key`.
    ///
    /// The key is not created until a value is written through the handle.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sini::Section;
    ///
    /// let mut section = Section::new();
    /// let mut prop = section.property("answer");
    /// assert!(!prop.exists());
    /// assert!(prop.get::<i32>().unwrap_err().is_missing());
    ///
    /// prop.set(42);
    /// assert_eq!(prop.get::<i32>().unwrap(), 42);
    /// ```
    pub fn property(&mut self, key: &str) -> Property<'_> {
        Property::new(self, key)
    }

    /// Returns a read-only handle for `key`, failing if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSuchProperty`] when `key` is absent.
    pub fn property_or_fail(&self, key: &str) -> Result<PropertyRef<'_>> {
        self.properties
            .get_key_value(key)
            .map(|(key, value)| PropertyRef::new(key, value))
            .ok_or_else(|| Error::no_such_property(key))
    }

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// Returns the previous value, if any.
    pub fn set_value(&mut self, key: &str, value: String) -> Option<String> {
        match self.properties.entry(key.to_string()) {
            btree_map::Entry::Occupied(mut entry) => Some(entry.insert(value)),
            btree_map::Entry::Vacant(entry) => {
                entry.insert(value);
                None
            }
        }
    }

    /// Stores the canonical text of `value` under `key`.
    pub fn set<T: ToIni>(&mut self, key: &str, value: T) -> &mut Self {
        self.set_value(key, value.to_ini());
        self
    }

    /// Reads `key` as `T`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSuchProperty`] if the key is absent, or
    /// [`Error::Conversion`] if its text is not a valid `T`.
    pub fn get<T: FromIni>(&self, key: &str) -> Result<T> {
        self.property_or_fail(key)?.get()
    }

    /// Returns the stored text for `key`.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.properties.contains_key(key)
    }

    /// Removes `key`, returning its stored text.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.properties.remove(key)
    }

    /// Returns the number of properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Iterates over `(key, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Iterates over the keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.properties.keys().map(String::as_str)
    }
}

impl<K: Into<String>, V: ToIni> FromIterator<(K, V)> for Section {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Section {
            properties: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.to_ini()))
                .collect(),
        }
    }
}

/// A parsed or programmatically built INI document.
///
/// Always contains the default section `""`. Other sections are created on
/// first reference through [`Document::section`] and are kept in name order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, Section>", into = "BTreeMap<String, Section>")]
pub struct Document {
    sections: BTreeMap<String, Section>,
}

impl Document {
    /// Creates a document holding only the empty default section.
    #[must_use]
    pub fn new() -> Self {
        let mut sections = BTreeMap::new();
        sections.insert(String::new(), Section::new());
        Document { sections }
    }

    /// Returns the section called `name`, creating it if absent.
    pub fn section(&mut self, name: &str) -> &mut Section {
        self.sections.entry(name.to_string()).or_default()
    }

    /// Returns the section called `name`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSuchSection`] when it does not exist.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sini::Document;
    ///
    /// let doc = Document::new();
    /// assert!(doc.section_or_fail("").is_ok());
    /// assert!(doc.section_or_fail("missing").unwrap_err().is_missing());
    /// ```
    pub fn section_or_fail(&self, name: &str) -> Result<&Section> {
        self.sections
            .get(name)
            .ok_or_else(|| Error::no_such_section(name))
    }

    /// Mutable variant of [`Document::section_or_fail`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSuchSection`] when it does not exist.
    pub fn section_or_fail_mut(&mut self, name: &str) -> Result<&mut Section> {
        self.sections
            .get_mut(name)
            .ok_or_else(|| Error::no_such_section(name))
    }

    /// The section holding properties that precede any header.
    #[must_use]
    pub fn default_section(&self) -> &Section {
        // Present since construction; see `Document::new` and `From<BTreeMap>`.
        static EMPTY: Section = Section {
            properties: BTreeMap::new(),
        };
        self.sections.get("").unwrap_or(&EMPTY)
    }

    pub fn default_section_mut(&mut self) -> &mut Section {
        self.section("")
    }

    #[must_use]
    pub fn contains_section(&self, name: &str) -> bool {
        self.sections.contains_key(name)
    }

    /// Removes the section called `name`.
    ///
    /// The default section cannot be removed; asking for it clears its
    /// properties and returns them instead.
    pub fn remove_section(&mut self, name: &str) -> Option<Section> {
        if name.is_empty() {
            return Some(std::mem::take(self.section("")));
        }
        self.sections.remove(name)
    }

    /// Iterates over `(name, section)` pairs in name order, default section first.
    pub fn sections(&self) -> impl Iterator<Item = (&str, &Section)> {
        self.sections
            .iter()
            .map(|(name, section)| (name.as_str(), section))
    }

    /// Returns the number of sections, including the default one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Returns `true` when the document holds no properties and no named sections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.len() == 1 && self.default_section().is_empty()
    }

    /// Renders the document with default options.
    ///
    /// # Examples
    ///
    /// ```rust
    /// let doc: sini::Document = "c=42\na=b\n".parse().unwrap();
    /// assert_eq!(doc.serialize(), "a=b\nc=42\n\n");
    /// ```
    #[must_use]
    pub fn serialize(&self) -> String {
        crate::ser::Serializer::new(crate::IniOptions::default()).render(self)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl From<BTreeMap<String, Section>> for Document {
    fn from(mut sections: BTreeMap<String, Section>) -> Self {
        sections.entry(String::new()).or_default();
        Document { sections }
    }
}

impl From<Document> for BTreeMap<String, Section> {
    fn from(doc: Document) -> Self {
        doc.sections
    }
}

impl FromStr for Document {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        crate::from_str(s)
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_document_has_default_section() {
        let doc = Document::new();
        assert_eq!(doc.len(), 1);
        assert!(doc.contains_section(""));
        assert!(doc.is_empty());
    }

    #[test]
    fn test_section_creates_on_first_reference() {
        let mut doc = Document::new();
        assert!(doc.section_or_fail("a").is_err());
        doc.section("a");
        assert!(doc.section_or_fail("a").unwrap().is_empty());
        assert!(!doc.is_empty());
    }

    #[test]
    fn test_sections_iterate_in_name_order() {
        let mut doc = Document::new();
        doc.section("zeta");
        doc.section("alpha");
        doc.section("Mid");
        let names: Vec<_> = doc.sections().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["", "Mid", "alpha", "zeta"]);
    }

    #[test]
    fn test_set_value_overwrites_in_place() {
        let mut section = Section::new();
        assert_eq!(section.set_value("b", "1".to_string()), None);
        section.set_value("a", "2".to_string());
        assert_eq!(section.set_value("b", "3".to_string()), Some("1".to_string()));

        let pairs: Vec<_> = section.iter().collect();
        assert_eq!(pairs, vec![("a", "2"), ("b", "3")]);
    }

    #[test]
    fn test_remove_default_section_keeps_it() {
        let mut doc = Document::new();
        doc.section("").set("k", 1);
        let removed = doc.remove_section("").unwrap();
        assert_eq!(removed.raw("k"), Some("1"));
        assert!(doc.contains_section(""));
        assert!(doc.default_section().is_empty());

        doc.section("x");
        assert!(doc.remove_section("x").is_some());
        assert!(doc.remove_section("x").is_none());
    }

    #[test]
    fn test_typed_shortcuts() {
        let mut section = Section::new();
        section.set("n", 7u8).set("f", 0.25).set("s", "text");
        assert_eq!(section.get::<u8>("n").unwrap(), 7);
        assert_eq!(section.get::<f32>("f").unwrap(), 0.25);
        assert_eq!(section.get::<String>("s").unwrap(), "text");
        assert!(section.get::<i32>("s").unwrap_err().is_conversion());
        assert!(section.get::<i32>("nope").unwrap_err().is_missing());
    }

    #[test]
    fn test_section_from_iterator() {
        let section: Section = vec![("b", 2), ("a", 1)].into_iter().collect();
        assert_eq!(section.keys().collect::<Vec<_>>(), vec!["a", "b"]);
    }
}
