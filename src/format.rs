//! INI Format Reference
//!
//! This module documents the dialect of INI read and written by this crate.
//! It contains no code.
//!
//! # Overview
//!
//! A document is a sequence of lines separated by `\n`, `\r\n` or `\r`.
//! Each line is one of:
//!
//! - blank (only spaces and tabs)
//! - a section header: `[name]`
//! - a property: `key = value`
//!
//! and may end with a comment starting at `;`.
//!
//! ```text
//! ; properties before any header belong to the default section ""
//! name = demo
//!
//! [server]
//! host = example.com     ; trailing comment
//! motd = '  padded  '
//! Scientific Notation 1 = 6.02e23
//! ```
//!
//! # Sections
//!
//! `[` then one or more characters other than `]` and line breaks, then `]`.
//! The text between the brackets is the name as written, spaces included;
//! only `[]` is rejected. A header switches
//! the current section; naming a section that was already seen resumes it.
//!
//! # Keys
//!
//! | Position | Allowed characters |
//! |----------|--------------------|
//! | first | ASCII letters, `.`, `$`, `:` |
//! | following | the above, ASCII digits, `_`, `~`, `-`, space |
//!
//! Spaces before the `=` are not part of the key; spaces inside it are.
//! A key that appears twice in a section keeps the later value.
//!
//! # Values
//!
//! Alternatives are tried in order:
//!
//! 1. `'single quoted'`: taken verbatim, `\'` stands for `'`
//! 2. `"double quoted"`: taken verbatim, `\"` stands for `"`
//! 3. unquoted: words separated by whitespace, re-joined with one space
//! 4. nothing: `key =` stores the empty string
//!
//! A quoted value must close on the same line. In an unquoted value, a word
//! that starts with `;` begins a comment; a `;` inside a word does not.
//!
//! Output written with the default [`QuotePolicy::Minimal`] leaves such a
//! value unquoted, so `a ;b` reads back as `a`. Use [`IniOptions::safe`]
//! when values may contain ` ;`.
//!
//! [`QuotePolicy::Minimal`]: crate::QuotePolicy::Minimal
//! [`IniOptions::safe`]: crate::IniOptions::safe
//!
//! # Output normalization
//!
//! Serialized output is canonical rather than a copy of the input:
//!
//! | Input | Output |
//! |-------|--------|
//! | `c=\t42` then ` a = b ` | `a=b` then `c=42` (sorted by key) |
//! | `e='  asdf  '` | `e="  asdf  "` |
//! | `g  ="as123df"` | `g=as123df` |
//!
//! Sections are written in name order, the default section first and
//! without a header, each followed by a blank line. Comments are dropped.
//!
//! # Typed values
//!
//! | Type | Written as | Also read from |
//! |------|------------|----------------|
//! | `bool` | `true`/`false` | `1 t y on yes` / `0 f n off no`, any case |
//! | integers | decimal | `0x1ED`, `0b111101101`, `0755` |
//! | floats | shortest round-trip decimal | scientific notation |
//! | strings | as-is | as-is |
