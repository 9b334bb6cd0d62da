//! `/proc/cpuinfo`

use crate::compact::compact;
use crate::{LineParser, Record, Result};
use serde::{Deserialize, Serialize};

/// Parsed `/proc/cpuinfo`.
///
/// Fields every CPU shares live once in `template`, alongside any lines
/// printed outside a processor block. Each entry of `cpus` keeps only what
/// differs.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CpuInfo {
    pub template: Record,
    pub cpus: Vec<Record>,
}

/// Parses the text of `/proc/cpuinfo`.
///
/// A `processor: N` line opens the block for CPU `N`, which runs to the next
/// blank line. `N` must count up from zero. Lines outside any block go
/// straight to the template.
///
/// # Examples
///
/// ```rust
/// use hostinfo::gather::cpuinfo::parse_cpuinfo;
/// use hostinfo::Value;
///
/// let text = "processor\t: 0\nvendor_id\t: X\ncore id\t: 0\n\n\
///             processor\t: 1\nvendor_id\t: X\ncore id\t: 1\n";
/// let info = parse_cpuinfo(text).unwrap();
///
/// assert_eq!(info.template.get("vendor_id"), Some(&Value::from("X")));
/// assert_eq!(info.cpus[1].get("core_id"), Some(&Value::Integer(1)));
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidLine`](crate::Error::InvalidLine) for a line
/// without a key, a processor number out of sequence, and a key repeated in
/// the template or within one block.
pub fn parse_cpuinfo(text: &str) -> Result<CpuInfo> {
    let parser = LineParser::new("cpuinfo");
    let mut info = CpuInfo::default();
    let mut lines = text.lines();

    while let Some(line) = lines.next() {
        if line.trim().is_empty() {
            continue;
        }

        let (key, value) = parser.parse_line(line)?;
        if key != "processor" {
            if info.template.contains_key(&key) {
                return Err(parser.error(line));
            }
            info.template.insert(key, value);
            continue;
        }

        if value.as_i64() != i64::try_from(info.cpus.len()).ok() {
            return Err(parser.error(line));
        }
        let cpu = parse_processor(&parser, &mut lines)?;
        info.cpus.push(cpu);
    }

    compact(&mut info.template, &mut info.cpus);
    Ok(info)
}

fn parse_processor<'a, I>(parser: &LineParser, lines: &mut I) -> Result<Record>
where
    I: Iterator<Item = &'a str>,
{
    let mut cpu = Record::new();
    for line in lines {
        if line.trim().is_empty() {
            break;
        }

        let (key, value) = parser.parse_flags_line(line)?;
        if cpu.contains_key(&key) {
            return Err(parser.error(line));
        }
        cpu.insert(key, value);
    }
    Ok(cpu)
}
