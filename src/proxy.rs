//! Existence-aware property handles.
//!
//! Two handle kinds sit between callers and a [`Section`]:
//!
//! - [`Property`], from [`Section::property`]: never fails to construct.
//!   Reads fail with [`Error::NoSuchProperty`] while the key is absent;
//!   writes create the key on demand.
//! - [`PropertyRef`], from [`Section::property_or_fail`]: construction
//!   fails if the key is absent; the handle is read-only.
//!
//! Conversion errors ([`Error::Conversion`]) and existence errors are
//! separate variants, so "wrong type" and "not there" can be told apart.

use crate::document::Section;
use crate::value::{FromIni, ToIni};
use crate::{Error, Result};

/// A read/write handle for one key of a [`Section`].
///
/// The handle does not cache whether the key exists; every read looks it up
/// again.
///
/// # Examples
///
/// ```rust
/// use sini::Document;
///
/// let mut doc = Document::new();
/// let mut port = doc.section("server").property("port");
///
/// assert!(port.get::<u16>().unwrap_err().is_missing());
/// port.set(8080);
/// assert_eq!(port.get::<u16>().unwrap(), 8080);
/// assert_eq!(port.as_str().unwrap(), "8080");
/// ```
#[derive(Debug)]
pub struct Property<'a> {
    section: &'a mut Section,
    key: String,
}

impl<'a> Property<'a> {
    pub(crate) fn new(section: &'a mut Section, key: &str) -> Self {
        Property {
            section,
            key: key.to_string(),
        }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns `true` if the key currently exists in the section.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.section.contains_key(&self.key)
    }

    /// Returns the stored text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSuchProperty`] if the key is absent.
    pub fn as_str(&self) -> Result<&str> {
        self.section
            .raw(&self.key)
            .ok_or_else(|| Error::no_such_property(&self.key))
    }

    /// Reads the value as `T`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSuchProperty`] if the key is absent, or
    /// [`Error::Conversion`] if the text is not a valid `T`.
    pub fn get<T: FromIni>(&self) -> Result<T> {
        T::from_ini(self.as_str()?)
    }

    /// Writes `value`, creating the key if needed.
    pub fn set<T: ToIni>(&mut self, value: T) -> &mut Self {
        self.section.set_value(&self.key, value.to_ini());
        self
    }

    /// Deletes the key, returning the text it held.
    pub fn remove(&mut self) -> Option<String> {
        self.section.remove(&self.key)
    }
}

/// A read-only handle for a key that existed when the handle was created.
///
/// # Examples
///
/// ```rust
/// use sini::Section;
///
/// let mut section = Section::new();
/// section.set("mode", "0755");
///
/// let section = &section;
/// let mode = section.property_or_fail("mode").unwrap();
/// assert_eq!(mode.get::<u32>().unwrap(), 493);
/// assert!(section.property_or_fail("owner").unwrap_err().is_missing());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PropertyRef<'a> {
    key: &'a str,
    value: &'a str,
}

impl<'a> PropertyRef<'a> {
    pub(crate) fn new(key: &'a str, value: &'a str) -> Self {
        PropertyRef { key, value }
    }

    #[must_use]
    pub fn key(&self) -> &'a str {
        self.key
    }

    #[must_use]
    pub fn as_str(&self) -> &'a str {
        self.value
    }

    /// Reads the value as `T`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Conversion`] if the text is not a valid `T`.
    pub fn get<T: FromIni>(&self) -> Result<T> {
        T::from_ini(self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Document;

    #[test]
    fn test_missing_property_handle_does_not_fail() {
        let mut doc = Document::new();
        let prop = doc.section("").property("test");
        assert!(!prop.exists());
        assert!(prop.get::<i32>().unwrap_err().is_missing());
        assert!(prop.as_str().unwrap_err().is_missing());
    }

    #[test]
    fn test_assignment_transitions_to_existing() {
        let mut doc = Document::new();
        let mut prop = doc.section("").property("test");
        prop.set(42);
        assert!(prop.exists());
        assert_eq!(prop.get::<String>().unwrap(), "42");
        assert_eq!(prop.get::<i32>().unwrap(), 42);
        assert_eq!(prop.get::<f64>().unwrap(), 42.0);
    }

    #[test]
    fn test_reassignment() {
        let mut doc = Document::new();
        doc.section("").property("test").set(42);
        assert_eq!(doc.section("").property("test").as_str().unwrap(), "42");

        doc.section("").property("test").set(99);
        assert_eq!(doc.section("").property("test").as_str().unwrap(), "99");
        assert_eq!(doc.section("").len(), 1);
    }

    #[test]
    fn test_existence_is_rechecked_on_read() {
        let mut section = Section::new();
        section.set("k", 1);

        let mut prop = section.property("k");
        assert!(prop.exists());
        assert_eq!(prop.remove(), Some("1".to_string()));
        assert!(prop.get::<i32>().unwrap_err().is_missing());
        prop.set(2);
        assert_eq!(prop.get::<i32>().unwrap(), 2);
    }

    #[test]
    fn test_conversion_and_existence_errors_differ() {
        let mut section = Section::new();
        section.set("word", "abc");

        let err = section.property("word").get::<i32>().unwrap_err();
        assert!(err.is_conversion());
        assert_eq!(section.raw("word"), Some("abc"));

        let err = section.property_or_fail("word").unwrap().get::<bool>().unwrap_err();
        assert!(err.is_conversion());
    }

    #[test]
    fn test_property_or_fail() {
        let mut doc = Document::new();
        let section = doc.section("");
        assert!(matches!(
            section.property_or_fail("test"),
            Err(Error::NoSuchProperty { .. })
        ));

        section.property("test").set(42);
        let prop = section.property_or_fail("test").unwrap();
        assert_eq!(prop.key(), "test");
        assert_eq!(prop.as_str(), "42");
    }

    #[test]
    fn test_property_or_fail_on_shared_section() {
        let mut doc = Document::new();
        doc.section("").set("test", 42);

        let shared: &Document = &doc;
        let section = shared.section_or_fail("").unwrap();
        assert_eq!(section.property_or_fail("test").unwrap().get::<i32>().unwrap(), 42);
        assert!(section.property_or_fail("other").is_err());
    }
}
