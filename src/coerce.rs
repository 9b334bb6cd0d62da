//! Raw string to typed value coercion.
//!
//! The rules are applied in a fixed order, first match wins:
//!
//! 1. a decimal with an all-zero fraction (`400.000`) loses its fraction
//! 2. integers in decimal, hex (`0x`), octal (`0o` or a leading `0`) and
//!    binary (`0b`) become [`Value::Integer`]
//! 3. `true`/`yes` and `false`/`no`, in any case, become [`Value::Bool`]
//! 4. `<integer> <unit>` for a known unit becomes an integer, and the unit is
//!    reported so the caller can append it to the key
//! 5. anything else stays a string
//!
//! Step 1 must run before step 2: `5222.0` is the integer 5222 while
//! `5222.40` stays the string `"5222.40"`.

use crate::Value;
use once_cell::sync::Lazy;
use regex::Regex;

static FLOATY_INTEGER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]+)\.0+$").expect("floaty integer pattern is valid"));

/// Units recognized after an integer, lowercased.
const UNITS: &[&str] = &["kb"];

/// The outcome of coercing one raw value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Coerced {
    pub value: Value,
    /// Unit to append to the key as `_<unit>`, when the value was dimensioned.
    pub unit: Option<&'static str>,
}

impl Coerced {
    fn plain(value: Value) -> Self {
        Coerced { value, unit: None }
    }

    /// Appends the unit suffix, if any, to `key`.
    #[must_use]
    pub fn apply_unit(&self, key: String) -> String {
        match self.unit {
            Some(unit) => format!("{}_{}", key, unit),
            None => key,
        }
    }
}

/// Coerces a raw value into a [`Value`].
///
/// Surrounding whitespace is ignored.
///
/// # Examples
///
/// ```rust
/// use hostinfo::{coerce, Value};
///
/// assert_eq!(coerce("0x436").value, Value::Integer(0x436));
/// assert_eq!(coerce("400.000").value, Value::Integer(400));
/// assert_eq!(coerce("5222.40").value, Value::from("5222.40"));
/// assert_eq!(coerce("yes").value, Value::Bool(true));
///
/// let cache = coerce("12288 KB");
/// assert_eq!(cache.value, Value::Integer(12288));
/// assert_eq!(cache.unit, Some("kb"));
/// ```
#[must_use]
pub fn coerce(raw: &str) -> Coerced {
    let trimmed = raw.trim();
    let text = match FLOATY_INTEGER.captures(trimmed) {
        Some(caps) => caps.get(1).map_or(trimmed, |m| m.as_str()),
        None => trimmed,
    };

    if let Some(n) = parse_int(text) {
        return Coerced::plain(Value::Integer(n));
    }

    if let Some(b) = parse_bool(text) {
        return Coerced::plain(Value::Bool(b));
    }

    let fields: Vec<&str> = text.split_whitespace().collect();
    if let [number, unit] = fields.as_slice() {
        let unit = unit.to_ascii_lowercase();
        if let Some(&known) = UNITS.iter().find(|&&u| u == unit) {
            if let Ok(n) = number.parse::<i64>() {
                return Coerced {
                    value: Value::Integer(n),
                    unit: Some(known),
                };
            }
        }
    }

    Coerced::plain(Value::String(text.to_string()))
}

fn parse_bool(text: &str) -> Option<bool> {
    match text.to_ascii_lowercase().as_str() {
        "true" | "yes" => Some(true),
        "false" | "no" => Some(false),
        _ => None,
    }
}

/// Parses an integer, detecting the base from its prefix.
///
/// An optional sign is followed by `0x`/`0X` (hex), `0o`/`0O` (octal),
/// `0b`/`0B` (binary), a leading `0` (octal) or plain decimal digits. The
/// result must fit in an `i64`.
///
/// # Examples
///
/// ```rust
/// use hostinfo::coerce::parse_int;
///
/// assert_eq!(parse_int("42"), Some(42));
/// assert_eq!(parse_int("-0x10"), Some(-16));
/// assert_eq!(parse_int("0755"), Some(0o755));
/// assert_eq!(parse_int("08"), None);
/// assert_eq!(parse_int("a02082"), None);
/// ```
#[must_use]
pub fn parse_int(text: &str) -> Option<i64> {
    let (negative, unsigned) = match text.as_bytes().first()? {
        b'-' => (true, &text[1..]),
        b'+' => (false, &text[1..]),
        _ => (false, text),
    };

    let (radix, digits) = match unsigned.as_bytes() {
        [b'0', b'x' | b'X', ..] => (16, &unsigned[2..]),
        [b'0', b'o' | b'O', ..] => (8, &unsigned[2..]),
        [b'0', b'b' | b'B', ..] => (2, &unsigned[2..]),
        [b'0', _, ..] => (8, &unsigned[1..]),
        _ => (10, unsigned),
    };

    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }

    let magnitude = i128::from(u64::from_str_radix(digits, radix).ok()?);
    let n = if negative { -magnitude } else { magnitude };
    i64::try_from(n).ok()
}
