//! Collecting a [`HostInfo`] from a live or scripted system.
//!
//! Each [`Source`] is read through an [`Invoker`] and handed to its parser.
//! A source that fails is logged and skipped; gathering only fails when
//! every enabled source did.
//!
//! ```rust
//! use hostinfo::{gather, GatherOptions, Source, StaticInvoker};
//!
//! let invoker = StaticInvoker::new()
//!     .with_file("/proc/meminfo", "MemTotal: 1024 kB\n")
//!     .with_file("/etc/machine-id", "5f3c2e6b9a8d4c7e8f1a2b3c4d5e6f70\n");
//! let options = GatherOptions::new().with_sources([Source::MemInfo, Source::MachineId]);
//!
//! let info = gather(&invoker, &options).unwrap();
//! assert_eq!(info.memory.len(), 1);
//! assert!(info.machine_id.is_some());
//! ```

pub mod cpuinfo;
pub mod disks;
pub mod machine_id;
pub mod meminfo;
pub mod os_release;

use crate::{Error, GatherOptions, Invoker, Record, Result, Source, Value};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

/// Everything gathered about one host.
///
/// The fields stay loosely typed records so the result serializes with
/// nothing lost. Use [`from_value`](crate::from_value) to pull typed views
/// out of them. Empty fields are left out of the serialized form.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HostInfo {
    /// Block device attributes keyed by device path.
    #[serde(
        rename = "block_devices",
        default,
        skip_serializing_if = "IndexMap::is_empty"
    )]
    pub disks: IndexMap<String, Record>,

    /// What each CPU does not share with the others.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cpus: Vec<Record>,

    /// What all CPUs share.
    #[serde(default, skip_serializing_if = "Record::is_empty")]
    pub cpu_info: Record,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub machine_id: Option<String>,

    #[serde(default, skip_serializing_if = "Record::is_empty")]
    pub memory: Record,

    #[serde(
        rename = "operating_system",
        default,
        skip_serializing_if = "IndexMap::is_empty"
    )]
    pub os: IndexMap<String, String>,
}

/// Gathers every source enabled in `options`.
///
/// # Errors
///
/// Returns [`Error::NothingGathered`] when no source succeeded, including
/// when no source was enabled.
pub fn gather<I>(invoker: &I, options: &GatherOptions) -> Result<HostInfo>
where
    I: Invoker + ?Sized,
{
    let mut info = HostInfo::default();
    let mut gathered = false;

    for &source in &options.sources {
        match gather_source(invoker, options, source, &mut info) {
            Ok(()) => gathered = true,
            Err(e) => warn!(item = source.as_str(), error = %e, "gather failed"),
        }
    }

    if !gathered {
        return Err(Error::NothingGathered);
    }
    Ok(info)
}

fn gather_source<I>(
    invoker: &I,
    options: &GatherOptions,
    source: Source,
    info: &mut HostInfo,
) -> Result<()>
where
    I: Invoker + ?Sized,
{
    match source {
        Source::DiskAttrs => {
            info.disks = gather_disks(invoker, options)?;
        }
        Source::CpuInfo => {
            let text = read_file(invoker, &options.cpuinfo_path)?;
            let parsed = cpuinfo::parse_cpuinfo(&text)?;
            info.cpu_info = parsed.template;
            info.cpus = parsed.cpus;
        }
        Source::MachineId => {
            let text = read_file(invoker, &options.machine_id_path)?;
            info.machine_id = machine_id::parse_machine_id(&text);
            if info.machine_id.is_none() {
                debug!(path = %options.machine_id_path, "malformed machine id");
            }
        }
        Source::MemInfo => {
            let text = read_file(invoker, &options.meminfo_path)?;
            info.memory = meminfo::parse_meminfo(&text)?;
        }
        Source::OsRelease => {
            let text = read_file(invoker, &options.os_release_path)?;
            info.os = os_release::parse_os_release(&text)?;
        }
    }
    Ok(())
}

fn gather_disks<I>(invoker: &I, options: &GatherOptions) -> Result<IndexMap<String, Record>>
where
    I: Invoker + ?Sized,
{
    let text = invoke(invoker, &options.blkid, &[])?;
    let mut devices = disks::parse_blkid(&text)?;

    for (device, attributes) in devices.iter_mut() {
        trace!(device = %device, attributes = attributes.len(), "got block device");
        if !options.luks_dump || !disks::is_luks(attributes) {
            continue;
        }

        let luks = invoke(invoker, &options.cryptsetup, &["luksDump", device.as_str()])
            .and_then(|dump| disks::parse_luks_dump(&dump));
        match luks {
            Ok(luks) => {
                attributes.insert("luks".to_string(), Value::Object(luks));
            }
            Err(e) => warn!(item = "LUKSInfo", device = %device, error = %e, "gather failed"),
        }
    }

    Ok(devices)
}

fn invoke<I>(invoker: &I, program: &str, args: &[&str]) -> Result<String>
where
    I: Invoker + ?Sized,
{
    debug!(program, ?args, "invoking");
    invoker.invoke(program, args)
}

fn read_file<I>(invoker: &I, path: &str) -> Result<String>
where
    I: Invoker + ?Sized,
{
    debug!(path, "reading");
    invoker.read_file(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StaticInvoker;

    const MACHINE_ID: &str = "5f3c2e6b9a8d4c7e8f1a2b3c4d5e6f70\n";

    #[test]
    fn test_failing_source_is_skipped() {
        let invoker = StaticInvoker::new()
            .with_file("/etc/machine-id", MACHINE_ID)
            .with_file("/proc/meminfo", "MemTotal 1 kB\n");

        let info = gather(&invoker, &GatherOptions::default()).unwrap();
        assert_eq!(info.machine_id.as_deref(), Some(MACHINE_ID.trim()));
        assert!(info.memory.is_empty());
        assert!(info.disks.is_empty());
    }

    #[test]
    fn test_all_sources_failing() {
        let err = gather(&StaticInvoker::new(), &GatherOptions::default()).unwrap_err();
        assert_eq!(err, Error::NothingGathered);

        let none = GatherOptions::new().with_sources([]);
        assert_eq!(
            gather(&StaticInvoker::new(), &none).unwrap_err(),
            Error::NothingGathered
        );
    }

    #[test]
    fn test_malformed_machine_id_still_succeeds() {
        let invoker = StaticInvoker::new().with_file("/etc/machine-id", "not-an-id\n");
        let options = GatherOptions::new().with_sources([Source::MachineId]);
        assert_eq!(gather(&invoker, &options).unwrap(), HostInfo::default());
    }

    #[test]
    fn test_failed_luks_dump_keeps_device() {
        let invoker = StaticInvoker::new()
            .with_output(
                "/sbin/blkid",
                &[],
                "/dev/sda3: UUID=\"x\" TYPE=\"crypto_LUKS\"\n",
            )
            .with_failure("cryptsetup", &["luksDump", "/dev/sda3"], "permission denied");
        let options = GatherOptions::new().with_sources([Source::DiskAttrs]);

        let info = gather(&invoker, &options).unwrap();
        let device = &info.disks["/dev/sda3"];
        assert_eq!(device.len(), 2);
        assert!(!device.contains_key("luks"));
    }

    #[test]
    fn test_luks_dump_can_be_disabled() {
        let invoker = StaticInvoker::new().with_output(
            "/bin/blkid",
            &[],
            "/dev/sda3: TYPE=\"crypto_LUKS\"\n",
        );
        let options = GatherOptions::new()
            .with_sources([Source::DiskAttrs])
            .with_blkid("/bin/blkid")
            .with_luks_dump(false);

        let info = gather(&invoker, &options).unwrap();
        assert_eq!(info.disks["/dev/sda3"].len(), 1);
    }

    #[test]
    fn test_empty_host_info_serializes_empty() {
        let json = serde_json::to_string(&HostInfo::default()).unwrap();
        assert_eq!(json, "{}");
    }
}
