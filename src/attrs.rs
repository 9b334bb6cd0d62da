//! `device: KEY="value" ...` attribute line parsing.
//!
//! This is the output format of `blkid`: a device path, a colon, then a list
//! of `NAME="value"` pairs. Quoted values may contain spaces, so the list
//! can't be split on whitespace. Instead, each value runs up to the next `=`
//! and the last space before that `=` separates it from the next name.

use crate::{Error, Record, Result, Value};
use once_cell::sync::Lazy;
use regex::Regex;

static ATTRIBUTE_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z][A-Z0-9_]*$").expect("attribute name pattern is valid"));

/// The one attribute also exposed as an integer when it is numeric.
const BLOCK_SIZE: &str = "block_size";

/// One parsed attribute line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttributeLine {
    pub device: String,
    pub attributes: Record,
}

/// Parses `device: NAME="value" ...` lines.
///
/// # Examples
///
/// ```rust
/// use hostinfo::{AttributeLineParser, Value};
///
/// let parser = AttributeLineParser::new("blkid");
/// let line = parser
///     .parse_line(r#"/dev/sda1: UUID="ABCD-1234" TYPE="ext4""#)
///     .unwrap()
///     .unwrap();
///
/// assert_eq!(line.device, "/dev/sda1");
/// assert_eq!(line.attributes.get("uuid"), Some(&Value::from("ABCD-1234")));
/// assert_eq!(line.attributes.get("type"), Some(&Value::from("ext4")));
/// ```
#[derive(Clone, Debug)]
pub struct AttributeLineParser {
    name: String,
}

impl AttributeLineParser {
    /// Creates a parser that reports errors under `name`.
    pub fn new(name: impl Into<String>) -> Self {
        AttributeLineParser { name: name.into() }
    }

    /// Parses one line. Blank lines yield `None`.
    ///
    /// Attribute names are lowercased. Values stay strings, except
    /// `block_size`, which becomes an integer when it holds one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLine`] for a missing colon, a malformed
    /// attribute name, a missing `=`, or a value that is not quoted.
    /// Escape errors inside a quoted value are returned as
    /// [`Error::Unquote`].
    pub fn parse_line(&self, line: &str) -> Result<Option<AttributeLine>> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (device, rest) = line.split_once(':').ok_or_else(|| self.error(line))?;
        let mut attributes = Record::new();

        let mut pending = rest.split_once('=');
        let mut name = pending.map_or(rest, |(name, _)| name).trim().to_string();
        loop {
            let Some((_, after_equals)) = pending else {
                if name.is_empty() {
                    break;
                }
                return Err(self.error(line));
            };

            if !ATTRIBUTE_NAME.is_match(&name) {
                return Err(self.error(line));
            }
            let key = name.to_ascii_lowercase();

            // The raw value runs to the next '=', which also swallows the
            // next attribute's name.
            pending = after_equals.split_once('=');
            let raw = match pending {
                Some((value_and_name, _)) => {
                    let space = value_and_name.rfind(' ').ok_or_else(|| self.error(line))?;
                    name = value_and_name[space + 1..].to_string();
                    value_and_name[..space].trim_end()
                }
                None => {
                    name.clear();
                    after_equals
                }
            };

            if raw.len() < 2 || !raw.starts_with('"') {
                return Err(self.error(line));
            }
            let text = unquote(raw)?;

            let value = match text.parse::<i64>() {
                Ok(n) if key == BLOCK_SIZE => Value::Integer(n),
                _ => Value::String(text),
            };
            if attributes.contains_key(&key) {
                return Err(self.error(line));
            }
            attributes.insert(key, value);
        }

        Ok(Some(AttributeLine {
            device: device.to_string(),
            attributes,
        }))
    }

    fn error(&self, line: &str) -> Error {
        Error::invalid_line(&self.name, line)
    }
}

/// Decodes a double-quoted string literal.
///
/// Supports the C escapes `\a \b \f \n \r \t \v \\ \"`, byte escapes `\xHH`
/// and `\ooo`, and code point escapes `\uXXXX` and `\UXXXXXXXX`. An unescaped
/// `"` or a newline inside the quotes is an error, as is a byte sequence that
/// does not decode as UTF-8.
///
/// # Examples
///
/// ```rust
/// use hostinfo::attrs::unquote;
///
/// assert_eq!(unquote(r#""EFI System Partition""#).unwrap(), "EFI System Partition");
/// assert_eq!(unquote(r#""say \"hi\"""#).unwrap(), "say \"hi\"");
/// assert_eq!(unquote(r#""\x41\102é""#).unwrap(), "ABé");
/// assert!(unquote(r#""unterminated"#).is_err());
/// ```
///
/// # Errors
///
/// Returns [`Error::Unquote`] describing the first problem found.
pub fn unquote(quoted: &str) -> Result<String> {
    let inner = quoted
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .ok_or_else(|| Error::unquote(quoted, "missing quotes"))?;

    if !inner.contains(['\\', '"', '\n']) {
        return Ok(inner.to_string());
    }

    let mut out: Vec<u8> = Vec::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        match c {
            '"' => return Err(Error::unquote(quoted, "unescaped quote")),
            '\n' => return Err(Error::unquote(quoted, "newline in string")),
            '\\' => {
                let escape = chars
                    .next()
                    .ok_or_else(|| Error::unquote(quoted, "trailing backslash"))?;
                match escape {
                    'a' => out.push(0x07),
                    'b' => out.push(0x08),
                    'f' => out.push(0x0c),
                    'n' => out.push(b'\n'),
                    'r' => out.push(b'\r'),
                    't' => out.push(b'\t'),
                    'v' => out.push(0x0b),
                    '\\' => out.push(b'\\'),
                    '"' => out.push(b'"'),
                    'x' => {
                        let n = take_digits(&mut chars, 2, 16)
                            .ok_or_else(|| Error::unquote(quoted, "invalid \\x escape"))?;
                        out.push(n as u8);
                    }
                    '0'..='7' => {
                        let rest = take_digits(&mut chars, 2, 8)
                            .ok_or_else(|| Error::unquote(quoted, "invalid octal escape"))?;
                        let n = (escape as u32 - '0' as u32) * 64 + rest;
                        let byte = u8::try_from(n)
                            .map_err(|_| Error::unquote(quoted, "octal escape out of range"))?;
                        out.push(byte);
                    }
                    'u' | 'U' => {
                        let width = if escape == 'u' { 4 } else { 8 };
                        let ch = take_digits(&mut chars, width, 16)
                            .and_then(char::from_u32)
                            .ok_or_else(|| Error::unquote(quoted, "invalid unicode escape"))?;
                        let mut buf = [0u8; 4];
                        out.extend_from_slice(ch.encode_utf8(&mut buf).as_bytes());
                    }
                    _ => return Err(Error::unquote(quoted, "unknown escape")),
                }
            }
            other => {
                let mut buf = [0u8; 4];
                out.extend_from_slice(other.encode_utf8(&mut buf).as_bytes());
            }
        }
    }

    String::from_utf8(out).map_err(|_| Error::unquote(quoted, "invalid UTF-8"))
}

/// Reads exactly `count` digits in `radix` and returns their value.
fn take_digits(chars: &mut std::str::Chars<'_>, count: usize, radix: u32) -> Option<u32> {
    let mut n: u32 = 0;
    for _ in 0..count {
        let digit = chars.next()?.to_digit(radix)?;
        n = n * radix + digit;
    }
    Some(n)
}
