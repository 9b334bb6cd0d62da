//! `/etc/machine-id`

use once_cell::sync::Lazy;
use regex::Regex;

static MACHINE_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9a-f]{32}$").expect("machine id pattern is valid"));

/// Extracts the machine ID: 32 lowercase hex digits on a line of their own.
///
/// Returns `None` for anything else, including uppercase digits.
///
/// # Examples
///
/// ```rust
/// use hostinfo::gather::machine_id::parse_machine_id;
///
/// let id = parse_machine_id("5f3c2e6b9a8d4c7e8f1a2b3c4d5e6f70\n");
/// assert_eq!(id.as_deref(), Some("5f3c2e6b9a8d4c7e8f1a2b3c4d5e6f70"));
/// assert_eq!(parse_machine_id("uninitialized\n"), None);
/// ```
#[must_use]
pub fn parse_machine_id(text: &str) -> Option<String> {
    let text = text.trim();
    MACHINE_ID.is_match(text).then(|| text.to_string())
}
