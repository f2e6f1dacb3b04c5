//! Configuration options for INI serialization.
//!
//! - [`IniOptions`]: main configuration struct
//! - [`QuoteStyle`]: which quote character wraps quoted values
//! - [`QuotePolicy`]: when a value gets quoted at all
//!
//! The defaults produce the normalized form: values are double-quoted only
//! when they begin or end with whitespace, and every section block is
//! followed by a blank line.
//!
//! ## Examples
//!
//! ```rust
//! use sini::{to_string_with_options, Document, IniOptions, QuoteStyle};
//!
//! let mut doc = Document::new();
//! doc.section("").set("greeting", "  hi  ");
//!
//! let options = IniOptions::new().with_quote_style(QuoteStyle::Single);
//! let text = to_string_with_options(&doc, options);
//! assert_eq!(text, "greeting='  hi  '\n\n");
//! ```

/// Quote character used for quoted values.
///
/// # Examples
///
/// ```rust
/// use sini::QuoteStyle;
///
/// assert_eq!(QuoteStyle::Double.as_char(), '"');
/// assert_eq!(QuoteStyle::Single.as_char(), '\'');
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum QuoteStyle {
    #[default]
    Double,
    Single,
}

impl QuoteStyle {
    #[must_use]
    pub const fn as_char(&self) -> char {
        match self {
            QuoteStyle::Double => '"',
            QuoteStyle::Single => '\'',
        }
    }
}

/// Decides which values are written quoted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum QuotePolicy {
    /// Quote only non-empty values with leading or trailing whitespace.
    #[default]
    Minimal,
    /// Also quote values that would read back differently when bare:
    /// whitespace runs other than a single space, a leading quote character,
    /// or a word starting with `;`.
    Safe,
    /// Quote every non-empty value.
    Always,
}

/// Configuration options for INI serialization.
///
/// # Examples
///
/// ```rust
/// use sini::{IniOptions, QuotePolicy, QuoteStyle};
///
/// let options = IniOptions::new();
/// assert_eq!(options.quote_style, QuoteStyle::Double);
/// assert_eq!(options.quote_policy, QuotePolicy::Minimal);
/// assert!(options.section_spacing);
///
/// let compact = IniOptions::safe().with_section_spacing(false);
/// assert_eq!(compact.quote_policy, QuotePolicy::Safe);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IniOptions {
    pub quote_style: QuoteStyle,
    pub quote_policy: QuotePolicy,
    /// Emit a blank line after each section block.
    pub section_spacing: bool,
}

impl Default for IniOptions {
    fn default() -> Self {
        IniOptions {
            quote_style: QuoteStyle::default(),
            quote_policy: QuotePolicy::default(),
            section_spacing: true,
        }
    }
}

impl IniOptions {
    /// Creates default options (minimal double quoting, blank line between sections).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Options that quote every value the unquoted form would alter.
    ///
    /// Values then read back unchanged, except one ending in a backslash (it would
    /// escape the closing quote). Keys and section names are never quoted,
    /// so they must already be valid: a key as the grammar accepts it and a
    /// section name without `]` or line breaks.
    #[must_use]
    pub fn safe() -> Self {
        IniOptions {
            quote_policy: QuotePolicy::Safe,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_quote_style(mut self, style: QuoteStyle) -> Self {
        self.quote_style = style;
        self
    }

    #[must_use]
    pub fn with_quote_policy(mut self, policy: QuotePolicy) -> Self {
        self.quote_policy = policy;
        self
    }

    /// Sets whether a blank line follows each section block.
    ///
    /// Output without spacing still parses back to the same document.
    #[must_use]
    pub fn with_section_spacing(mut self, spacing: bool) -> Self {
        self.section_spacing = spacing;
        self
    }
}
