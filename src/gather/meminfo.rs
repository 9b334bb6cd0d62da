//! `/proc/meminfo`

use crate::{LineParser, Record, Result};

/// Parses the text of `/proc/meminfo`, one field per line.
///
/// # Examples
///
/// ```rust
/// use hostinfo::gather::meminfo::parse_meminfo;
/// use hostinfo::Value;
///
/// let memory = parse_meminfo("MemTotal:       40743392 kB\nHugePages_Total:       5\n").unwrap();
/// assert_eq!(memory.get("mem_total_kb"), Some(&Value::Integer(40743392)));
/// assert_eq!(memory.get("huge_pages_total"), Some(&Value::Integer(5)));
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidLine`](crate::Error::InvalidLine) for a line
/// without a key and for a repeated key.
pub fn parse_meminfo(text: &str) -> Result<Record> {
    let parser = LineParser::new("meminfo");
    let mut memory = Record::new();

    for line in text.lines().filter(|line| !line.trim().is_empty()) {
        let (key, value) = parser.parse_line(line)?;
        if memory.contains_key(&key) {
            return Err(parser.error(line));
        }
        memory.insert(key, value);
    }

    Ok(memory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Value;

    #[test]
    fn test_parenthesized_labels() {
        let memory = parse_meminfo("Active(anon):    2091416 kB\nInactive(anon):        0 kB\n").unwrap();
        assert_eq!(memory.get("active_anon_kb"), Some(&Value::Integer(2_091_416)));
        assert_eq!(memory.get("inactive_anon_kb"), Some(&Value::Integer(0)));
    }

    #[test]
    fn test_duplicate_key() {
        assert!(parse_meminfo("MemFree: 1 kB\nMemFree: 2 kB\n").is_err());
    }

    #[test]
    fn test_unit_is_part_of_the_key() {
        // Same label, different units, different keys.
        let memory = parse_meminfo("Hugetlb: 0 kB\nhugetlb: 0\n").unwrap();
        assert_eq!(memory.len(), 2);
    }
}
