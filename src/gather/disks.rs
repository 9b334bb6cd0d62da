//! Block device attributes from `blkid`, and LUKS headers from
//! `cryptsetup luksDump`.

use crate::{AttributeLineParser, BlockParser, Error, Record, Result};
use indexmap::IndexMap;

/// Colon-less title lines printed by `cryptsetup luksDump`.
const LUKS_BANNERS: &[&str] = &["LUKS header information"];

/// The `type` attribute of a LUKS container.
pub const LUKS_TYPE: &str = "crypto_LUKS";

/// Parses `blkid` output into attributes keyed by device path.
///
/// # Examples
///
/// ```rust
/// use hostinfo::gather::disks::parse_blkid;
/// use hostinfo::Value;
///
/// let devices = parse_blkid(r#"/dev/sda1: UUID="ABCD-1234" BLOCK_SIZE="512" TYPE="vfat""#).unwrap();
/// assert_eq!(devices["/dev/sda1"].get("block_size"), Some(&Value::Integer(512)));
/// ```
///
/// # Errors
///
/// Fails on the first malformed line, see
/// [`AttributeLineParser::parse_line`].
pub fn parse_blkid(text: &str) -> Result<IndexMap<String, Record>> {
    let parser = AttributeLineParser::new("blkid");
    let mut devices = IndexMap::new();

    for line in text.lines() {
        if let Some(parsed) = parser.parse_line(line)? {
            if devices.contains_key(&parsed.device) {
                return Err(Error::invalid_line("blkid", line));
            }
            devices.insert(parsed.device, parsed.attributes);
        }
    }

    Ok(devices)
}

/// Parses the output of `cryptsetup luksDump`.
///
/// # Errors
///
/// See [`BlockParser::parse`].
pub fn parse_luks_dump(text: &str) -> Result<Record> {
    BlockParser::new("luksDump", text)
        .with_banners(LUKS_BANNERS)
        .parse()
}

/// Returns `true` if the attributes describe a LUKS container.
#[must_use]
pub fn is_luks(attributes: &Record) -> bool {
    attributes
        .get("type")
        .and_then(|v| v.as_str())
        .is_some_and(|t| t == LUKS_TYPE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{record, Value};

    #[test]
    fn test_blkid_skips_blank_lines() {
        let text = "/dev/sda1: TYPE=\"ext4\"\n\n/dev/sda2: TYPE=\"crypto_LUKS\"\n";
        let devices = parse_blkid(text).unwrap();
        assert_eq!(devices.len(), 2);
        assert!(!is_luks(&devices["/dev/sda1"]));
        assert!(is_luks(&devices["/dev/sda2"]));
    }

    #[test]
    fn test_blkid_fails_on_bad_line() {
        assert!(parse_blkid("/dev/sda1: TYPE=\"ext4\"\nnonsense\n").is_err());
    }

    #[test]
    fn test_repeated_device_is_invalid() {
        let text = "/dev/sda1: TYPE=\"ext4\"\n/dev/sda1: TYPE=\"xfs\"\n";
        assert_eq!(
            parse_blkid(text).unwrap_err(),
            Error::invalid_line("blkid", "/dev/sda1: TYPE=\"xfs\"")
        );
    }

    #[test]
    fn test_luks_dump_banner() {
        let dump = "LUKS header information\nVersion:\t2\nLabel:\t(no label)\n";
        assert_eq!(parse_luks_dump(dump).unwrap(), record!({ "version": 2 }));
    }

    #[test]
    fn test_is_luks_needs_string_type() {
        assert!(!is_luks(&record!({ "type": 1 })));
        assert!(!is_luks(&Record::new()));
        let mut attrs = Record::new();
        attrs.insert("type".to_string(), Value::from(LUKS_TYPE));
        assert!(is_luks(&attrs));
    }
}
