//! Conversion between typed values and their stored textual form.
//!
//! Every property is stored as a string. This module provides the two
//! traits that bridge that string to Rust types:
//!
//! - [`ToIni`]: produces the canonical text written into a document
//! - [`FromIni`]: interprets stored text as a typed value
//!
//! Neither trait deals with quoting; that belongs to the serializer.
//!
//! ## Accepted input
//!
//! | Type | Accepted text |
//! |------|---------------|
//! | `String` | anything, returned unchanged |
//! | `char` | exactly one character |
//! | `bool` | `0 f n off no false` / `1 t y on yes true`, case-insensitive |
//! | integers | `0x`/`0X` hex, `0b`/`0B` binary, leading `0` octal, decimal, optional sign |
//! | `f32`/`f64` | decimal or scientific notation |
//!
//! ## Examples
//!
//! ```rust
//! use sini::{FromIni, ToIni};
//!
//! assert_eq!(i32::from_ini("0x01ED").unwrap(), 493);
//! assert_eq!(i32::from_ini("0755").unwrap(), 493);
//! assert_eq!(i32::from_ini("0b0000000111101101").unwrap(), 493);
//! assert!(bool::from_ini("Off").map(|b| !b).unwrap());
//! assert_eq!(4.5f64.to_ini(), "4.5");
//! ```

use crate::{Error, Result};

const FALSEY: [&str; 6] = ["0", "f", "n", "off", "no", "false"];
const TRUTHY: [&str; 6] = ["1", "t", "y", "on", "yes", "true"];

/// A type that can be written into a document as text.
pub trait ToIni {
    /// Returns the canonical stored form of `self`.
    fn to_ini(&self) -> String;
}

/// A type that can be read back from stored text.
pub trait FromIni: Sized {
    /// Interprets `s` as `Self`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Conversion`] when `s` is not a valid `Self`.
    fn from_ini(s: &str) -> Result<Self>;
}

impl<T: ToIni + ?Sized> ToIni for &T {
    fn to_ini(&self) -> String {
        (**self).to_ini()
    }
}

impl ToIni for str {
    fn to_ini(&self) -> String {
        self.to_string()
    }
}

impl ToIni for String {
    fn to_ini(&self) -> String {
        self.clone()
    }
}

impl FromIni for String {
    fn from_ini(s: &str) -> Result<Self> {
        Ok(s.to_string())
    }
}

impl ToIni for char {
    fn to_ini(&self) -> String {
        self.to_string()
    }
}

impl FromIni for char {
    fn from_ini(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Ok(ch),
            _ => Err(Error::conversion(s, "char")),
        }
    }
}

impl ToIni for bool {
    fn to_ini(&self) -> String {
        let text = if *self { "true" } else { "false" };
        text.to_string()
    }
}

impl FromIni for bool {
    fn from_ini(s: &str) -> Result<Self> {
        if FALSEY.iter().any(|token| token.eq_ignore_ascii_case(s)) {
            Ok(false)
        } else if TRUTHY.iter().any(|token| token.eq_ignore_ascii_case(s)) {
            Ok(true)
        } else {
            Err(Error::conversion(s, "bool"))
        }
    }
}

/// Splits an integer literal into `(negative, radix, digits)`.
///
/// Returns `None` when no digits follow the sign/prefix or when the digits
/// themselves start with another sign.
fn split_integer(s: &str) -> Option<(bool, u32, &str)> {
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let (radix, digits) = if let Some(hex) = rest
        .strip_prefix("0x")
        .or_else(|| rest.strip_prefix("0X"))
    {
        (16, hex)
    } else if let Some(bin) = rest
        .strip_prefix("0b")
        .or_else(|| rest.strip_prefix("0B"))
    {
        (2, bin)
    } else if rest.len() > 1 && rest.starts_with('0') {
        (8, &rest[1..])
    } else {
        (10, rest)
    };

    if digits.is_empty() || digits.starts_with(|c: char| c == '+' || c == '-') {
        return None;
    }
    Some((negative, radix, digits))
}

macro_rules! impl_integer {
    ($($t:ty),* $(,)?) => {$(
        impl ToIni for $t {
            fn to_ini(&self) -> String {
                self.to_string()
            }
        }

        impl FromIni for $t {
            fn from_ini(s: &str) -> Result<Self> {
                let (negative, radix, digits) =
                    split_integer(s).ok_or_else(|| Error::conversion(s, stringify!($t)))?;
                let parsed = if negative {
                    <$t>::from_str_radix(&format!("-{}", digits), radix)
                } else {
                    <$t>::from_str_radix(digits, radix)
                };
                parsed.map_err(|_| Error::conversion(s, stringify!($t)))
            }
        }
    )*};
}

impl_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_float {
    ($($t:ty),* $(,)?) => {$(
        impl ToIni for $t {
            fn to_ini(&self) -> String {
                self.to_string()
            }
        }

        impl FromIni for $t {
            fn from_ini(s: &str) -> Result<Self> {
                s.parse::<$t>()
                    .map_err(|_| Error::conversion(s, stringify!($t)))
            }
        }
    )*};
}

impl_float!(f32, f64);
