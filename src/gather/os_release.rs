//! `/etc/os-release`

use crate::{Error, Result};
use indexmap::IndexMap;

/// Parses `KEY=value` assignments from `/etc/os-release`.
///
/// Keys are lowercased. Values may be bare, single-quoted, or double-quoted;
/// inside double quotes a backslash escapes the next character. Blank lines
/// and `#` comments are skipped.
///
/// # Examples
///
/// ```rust
/// use hostinfo::gather::os_release::parse_os_release;
///
/// let os = parse_os_release("NAME=\"Ubuntu\"\nID=ubuntu\nID_LIKE=debian\n").unwrap();
/// assert_eq!(os["name"], "Ubuntu");
/// assert_eq!(os["id_like"], "debian");
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidLine`] for a line without `=`, an empty key, or
/// an unterminated quote.
pub fn parse_os_release(text: &str) -> Result<IndexMap<String, String>> {
    let mut os = IndexMap::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let error = || Error::invalid_line("os-release", line);
        let (key, value) = line.split_once('=').ok_or_else(error)?;
        let key = key.trim();
        if key.is_empty() {
            return Err(error());
        }

        let value = unquote_value(value.trim()).ok_or_else(error)?;
        os.insert(key.to_ascii_lowercase(), value);
    }

    Ok(os)
}

fn unquote_value(value: &str) -> Option<String> {
    if let Some(inner) = value.strip_prefix('\'') {
        return inner.strip_suffix('\'').map(str::to_string);
    }

    let Some(inner) = value.strip_prefix('"') else {
        return Some(value.to_string());
    };
    let inner = inner.strip_suffix('"')?;

    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            out.push(chars.next()?);
        } else {
            out.push(c);
        }
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEBIAN: &str = r#"PRETTY_NAME="Debian GNU/Linux 12 (bookworm)"
NAME="Debian GNU/Linux"
VERSION_ID="12"
VERSION="12 (bookworm)"
VERSION_CODENAME=bookworm
ID=debian
HOME_URL="https://www.debian.org/"
SUPPORT_URL="https://www.debian.org/support"
BUG_REPORT_URL="https://bugs.debian.org/"
"#;

    #[test]
    fn test_debian() {
        let os = parse_os_release(DEBIAN).unwrap();
        assert_eq!(os.len(), 9);
        assert_eq!(os["name"], "Debian GNU/Linux");
        assert_eq!(os["id"], "debian");
        assert_eq!(os["version_id"], "12");
        assert!(!os.contains_key("id_like"));
    }

    #[test]
    fn test_quoting() {
        let os = parse_os_release("# comment\n\nA='single \"x\"'\nB=\"esc \\\"q\\\" \\$HOME\"\n").unwrap();
        assert_eq!(os["a"], "single \"x\"");
        assert_eq!(os["b"], "esc \"q\" $HOME");
    }

    #[test]
    fn test_invalid_lines() {
        assert!(parse_os_release("NAME\n").is_err());
        assert!(parse_os_release("=x\n").is_err());
        assert!(parse_os_release("NAME=\"open\n").is_err());
    }
}
