//! `label: value` line parsing.
//!
//! This is the decoder behind `/proc/cpuinfo` and `/proc/meminfo`: the label
//! before the first colon becomes a normalized key, the rest is coerced into
//! a typed value. The value may itself contain colons.

use crate::coerce::coerce;
use crate::key::normalize_key;
use crate::{Error, Result, Value};

/// Keys whose string values are whitespace-separated token lists.
const FLAGS_KEYS: &[&str] = &["bugs", "features", "flags", "vmx_flags"];

/// Parses colon-separated `label: value` lines.
///
/// The parser's name is carried into every [`Error::InvalidLine`] it raises,
/// so the error says which source the bad line came from.
///
/// # Examples
///
/// ```rust
/// use hostinfo::{LineParser, Value};
///
/// let parser = LineParser::new("cpuinfo");
///
/// let (key, value) = parser.parse_line("cache size\t: 12288 KB").unwrap();
/// assert_eq!(key, "cache_size_kb");
/// assert_eq!(value, Value::Integer(12288));
///
/// let (key, value) = parser.parse_line("bogomips\t: 5222.40").unwrap();
/// assert_eq!(key, "bogomips");
/// assert_eq!(value, Value::from("5222.40"));
/// ```
#[derive(Clone, Debug)]
pub struct LineParser {
    name: String,
}

impl LineParser {
    /// Creates a parser that reports errors under `name`.
    pub fn new(name: impl Into<String>) -> Self {
        LineParser { name: name.into() }
    }

    /// Returns the name errors are reported under.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Splits one line into a normalized key and a coerced value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLine`] if the line has no colon or its label
    /// normalizes to an empty key.
    pub fn parse_line(&self, line: &str) -> Result<(String, Value)> {
        let (label, raw) = line.split_once(':').ok_or_else(|| self.error(line))?;

        let key = normalize_key(label);
        if key.is_empty() {
            return Err(self.error(line));
        }

        let coerced = coerce(raw);
        let key = coerced.apply_unit(key);
        Ok((key, coerced.value))
    }

    /// Like [`LineParser::parse_line`], but string values of the flags
    /// family (`bugs`, `features`, `flags`, `vmx_flags`) are split into a
    /// sorted array of tokens.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hostinfo::{value, LineParser};
    ///
    /// let parser = LineParser::new("cpuinfo");
    /// let (key, value) = parser.parse_flags_line("flags: b a c").unwrap();
    /// assert_eq!(key, "flags");
    /// assert_eq!(value, value!(["a", "b", "c"]));
    /// ```
    ///
    /// # Errors
    ///
    /// Same as [`LineParser::parse_line`].
    pub fn parse_flags_line(&self, line: &str) -> Result<(String, Value)> {
        let (key, value) = self.parse_line(line)?;
        if !is_flags_key(&key) {
            return Ok((key, value));
        }
        match value {
            Value::String(s) => Ok((key, Value::from(split_flags(&s)))),
            other => Ok((key, other)),
        }
    }

    /// Builds the error this parser reports for `line`.
    #[must_use]
    pub fn error(&self, line: &str) -> Error {
        Error::invalid_line(&self.name, line)
    }
}

/// Returns `true` for keys that hold whitespace-separated token lists.
#[must_use]
pub fn is_flags_key(key: &str) -> bool {
    FLAGS_KEYS.contains(&key)
}

/// Splits a token list on whitespace and sorts it. Duplicates are kept.
#[must_use]
pub fn split_flags(s: &str) -> Vec<String> {
    let mut tokens: Vec<String> = s.split_whitespace().map(str::to_string).collect();
    tokens.sort();
    tokens
}
