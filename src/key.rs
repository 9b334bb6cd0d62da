//! Field key normalization.
//!
//! Labels in `/proc` files and tool dumps come in every style: `cpu MHz`,
//! `MemTotal`, `HugePages_Total`, `Active(anon)`, `Digest ID`. They all
//! reduce to snake case keys made of lowercase ASCII letters, digits and
//! single underscores.

/// Converts a human-readable label into a canonical snake case key.
///
/// Any character that is not an ASCII letter or digit separates words. An
/// uppercase letter following a lowercase one also starts a new word, so
/// camel case splits, while runs of capitals (`MHz`, `PBKDF`) and trailing
/// digits (`DirectMap4k`) stay attached to their word.
///
/// Returns an empty string when the label has nothing to normalize.
///
/// # Examples
///
/// ```rust
/// use hostinfo::normalize_key;
///
/// assert_eq!(normalize_key("cpu MHz"), "cpu_mhz");
/// assert_eq!(normalize_key("HugePages_Total"), "huge_pages_total");
/// assert_eq!(normalize_key("Active(anon)"), "active_anon");
/// assert_eq!(normalize_key(" :: "), "");
/// ```
#[must_use]
pub fn normalize_key(label: &str) -> String {
    let mut key = String::with_capacity(label.len());
    let mut pending_break = false;
    let mut previous: Option<char> = None;

    for c in label.chars() {
        if !c.is_ascii_alphanumeric() {
            pending_break = true;
            previous = None;
            continue;
        }

        let camel_hump =
            c.is_ascii_uppercase() && previous.is_some_and(|p| p.is_ascii_lowercase());
        if (pending_break || camel_hump) && !key.is_empty() {
            key.push('_');
        }
        pending_break = false;

        key.push(c.to_ascii_lowercase());
        previous = Some(c);
    }

    key
}
