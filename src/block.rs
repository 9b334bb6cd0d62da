//! Indentation-delimited block parsing.
//!
//! Tools like `cryptsetup luksDump` print YAML-ish trees:
//!
//! ```text
//! LUKS header information
//! Version:        2
//! UUID:           242e637a-461b-d087-c66e-384d35525691
//! Label:          (no label)
//!
//! Data segments:
//!   0: crypt
//!         offset: 16777216 [bytes]
//!         length: (whole device)
//!         cipher: aes-xts-plain64
//! ```
//!
//! Mapping bodies are indented by one tab per level. A key with an empty
//! value at the top level introduces a sequence whose items (`0:`, `1:`, ...)
//! carry extra leading whitespace, with each item's own mapping one tab
//! deeper than its header. Lines indented past their mapping continue the
//! previous value.
//!
//! The mapping and sequence readers recurse into each other and share a
//! [`LineCursor`]. Whichever reader meets a line it does not own pushes it
//! back so its caller can look at it.

use crate::key::normalize_key;
use crate::{Error, Record, Result, Value};
use std::str::Lines;

/// One level of mapping indentation.
const INDENT_UNIT: &str = "\t";

/// Item key that receives a sequence item's header value.
const SEQUENCE_ITEM_KEY: &str = "type";

/// A line iterator with room for exactly one pushed-back line.
#[derive(Clone, Debug)]
pub struct LineCursor<'a> {
    lines: Lines<'a>,
    pushed_back: Option<&'a str>,
}

impl<'a> LineCursor<'a> {
    pub fn new(text: &'a str) -> Self {
        LineCursor {
            lines: text.lines(),
            pushed_back: None,
        }
    }

    /// Returns the pushed-back line if there is one, else the next line.
    pub fn next_line(&mut self) -> Option<&'a str> {
        self.pushed_back.take().or_else(|| self.lines.next())
    }

    /// Makes `line` the next line returned.
    ///
    /// Only one line can be pending. Pushing back twice without reading in
    /// between is a logic error and panics in debug builds.
    pub fn push_back(&mut self, line: &'a str) {
        debug_assert!(self.pushed_back.is_none(), "line already pushed back");
        self.pushed_back = Some(line);
    }

    /// Removes and returns the pending pushed-back line.
    pub fn take_pushed_back(&mut self) -> Option<&'a str> {
        self.pushed_back.take()
    }
}

/// Rebuilds a nested [`Record`] from an indentation-delimited dump.
///
/// Inside the tree, keys are normalized with
/// [`normalize_key`](crate::normalize_key). Values ending in ` [bytes]` or
/// ` bits` lose the suffix and their key gains `_bytes` or `_bits`. Decimal
/// integers become [`Value::Integer`], everything else stays a string.
/// Placeholders like `Label: (no label)` and `length: (whole device)` are
/// dropped.
///
/// # Examples
///
/// ```rust
/// use hostinfo::{BlockParser, Value};
///
/// let dump = "Version: 2\nKeyslots:\n  0: luks2\n\tKey: 512 bits\n";
/// let record = BlockParser::new("luksDump", dump).parse().unwrap();
///
/// assert_eq!(record.get("version"), Some(&Value::Integer(2)));
/// let slot = record.get("keyslots").unwrap().as_array().unwrap()[0]
///     .as_object()
///     .unwrap();
/// assert_eq!(slot.get("type"), Some(&Value::from("luks2")));
/// assert_eq!(slot.get("key_bits"), Some(&Value::Integer(512)));
/// ```
#[derive(Clone, Debug)]
pub struct BlockParser<'a> {
    name: String,
    cursor: LineCursor<'a>,
    banners: &'a [&'a str],
}

impl<'a> BlockParser<'a> {
    /// Creates a parser over `text` that reports errors under `name`.
    pub fn new(name: impl Into<String>, text: &'a str) -> Self {
        BlockParser {
            name: name.into(),
            cursor: LineCursor::new(text),
            banners: &[],
        }
    }

    /// Sets colon-less title lines that are skipped instead of rejected.
    #[must_use]
    pub fn with_banners(mut self, banners: &'a [&'a str]) -> Self {
        self.banners = banners;
        self
    }

    /// Parses the whole dump.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLine`] for a line without a colon that is not
    /// a banner, an empty key, a duplicate key, a continuation that does not
    /// follow a string value, a sequence item whose index is out of order,
    /// and a sequence item with an empty body or a body that already has a
    /// `type` key.
    pub fn parse(mut self) -> Result<Record> {
        let record = self.parse_mapping(0)?;
        if let Some(line) = self.cursor.take_pushed_back() {
            return Err(self.error(line));
        }
        Ok(record)
    }

    fn parse_mapping(&mut self, depth: usize) -> Result<Record> {
        let indent = INDENT_UNIT.repeat(depth);
        let mut record = Record::new();
        let mut last_key: Option<String> = None;

        while let Some(raw) = self.cursor.next_line() {
            if raw.trim().is_empty() {
                continue;
            }

            let Some(line) = raw.strip_prefix(indent.as_str()) else {
                self.cursor.push_back(raw);
                break;
            };

            if line.starts_with(char::is_whitespace) {
                match last_key.as_deref().and_then(|key| record.get_mut(key)) {
                    Some(Value::String(previous)) => {
                        previous.push(' ');
                        previous.push_str(line.trim());
                    }
                    _ => return Err(self.error(raw)),
                }
                continue;
            }

            let Some((key, value)) = self.parse_pair(raw, line)? else {
                continue;
            };
            if record.contains_key(&key) {
                return Err(self.error(raw));
            }

            let value = match value {
                Value::String(s) if s.is_empty() && depth == 0 => {
                    Value::Array(self.parse_sequence(depth)?)
                }
                Value::String(s) if is_placeholder(&key, &s) => continue,
                other => other,
            };

            record.insert(key.clone(), value);
            last_key = Some(key);
        }

        Ok(record)
    }

    fn parse_sequence(&mut self, depth: usize) -> Result<Vec<Value>> {
        let indent = INDENT_UNIT.repeat(depth);
        let mut items = Vec::new();

        while let Some(raw) = self.cursor.next_line() {
            if raw.trim().is_empty() {
                continue;
            }

            let line = match raw.strip_prefix(indent.as_str()) {
                Some(rest) if rest.starts_with(char::is_whitespace) => rest,
                _ => {
                    self.cursor.push_back(raw);
                    break;
                }
            };

            let (index, header) = self.parse_pair(raw, line)?.ok_or_else(|| self.error(raw))?;
            if index.parse::<usize>().ok() != Some(items.len()) {
                return Err(self.error(raw));
            }

            let body = self.parse_mapping(depth + 1)?;
            if body.is_empty() || body.contains_key(SEQUENCE_ITEM_KEY) {
                return Err(self.error(raw));
            }

            let item: Record = std::iter::once((SEQUENCE_ITEM_KEY.to_string(), header))
                .chain(body)
                .collect();
            items.push(Value::Object(item));
        }

        Ok(items)
    }

    /// Parses `label: value`. Banner lines yield `None`.
    fn parse_pair(&self, raw: &str, line: &str) -> Result<Option<(String, Value)>> {
        let Some((label, value)) = line.split_once(':') else {
            if self.banners.contains(&line) {
                return Ok(None);
            }
            return Err(self.error(raw));
        };

        let mut key = normalize_key(label);
        if key.is_empty() {
            return Err(self.error(raw));
        }

        let mut value = value.trim();
        if let Some(number) = value.strip_suffix(" [bytes]") {
            key.push_str("_bytes");
            value = number;
        } else if let Some(number) = value.strip_suffix(" bits") {
            key.push_str("_bits");
            value = number;
        }

        let value = match value.parse::<i64>() {
            Ok(n) => Value::Integer(n),
            Err(_) => Value::String(value.to_string()),
        };
        Ok(Some((key, value)))
    }

    fn error(&self, line: &str) -> Error {
        Error::invalid_line(&self.name, line)
    }
}

/// Values that stand for "nothing here".
fn is_placeholder(key: &str, value: &str) -> bool {
    value
        .strip_prefix("(no ")
        .and_then(|rest| rest.strip_suffix(')'))
        .is_some_and(|name| name == key)
        || (key == "length" && value == "(whole device)")
}
