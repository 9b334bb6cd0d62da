//! Configuration options for gathering.
//!
//! This module provides the types that steer [`gather`](crate::gather):
//!
//! - [`GatherOptions`]: which sources to read, and where they live
//! - [`Source`]: one gatherable source
//!
//! ## Examples
//!
//! ```rust
//! use hostinfo::{GatherOptions, Source};
//!
//! // Skip the block device probe and read a captured cpuinfo instead
//! let options = GatherOptions::new()
//!     .without_source(Source::DiskAttrs)
//!     .with_cpuinfo_path("/tmp/cpuinfo.txt");
//!
//! assert_eq!(options.sources.len(), 4);
//! assert_eq!(options.cpuinfo_path, "/tmp/cpuinfo.txt");
//! ```

/// A source of host information.
///
/// # Examples
///
/// ```rust
/// use hostinfo::Source;
///
/// assert_eq!(Source::CpuInfo.as_str(), "CPUInfo");
/// assert_eq!(Source::ALL.len(), 5);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Source {
    /// Block device attributes from `blkid`, plus LUKS headers.
    DiskAttrs,
    /// `/proc/cpuinfo`
    CpuInfo,
    /// `/etc/machine-id`
    MachineId,
    /// `/proc/meminfo`
    MemInfo,
    /// `/etc/os-release`
    OsRelease,
}

impl Source {
    /// Every source, in the order they are gathered.
    pub const ALL: [Source; 5] = [
        Source::DiskAttrs,
        Source::CpuInfo,
        Source::MachineId,
        Source::MemInfo,
        Source::OsRelease,
    ];

    /// Returns the name used when logging this source.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Source::DiskAttrs => "DiskAttrs",
            Source::CpuInfo => "CPUInfo",
            Source::MachineId => "MachineID",
            Source::MemInfo => "MemInfo",
            Source::OsRelease => "OSRelease",
        }
    }
}

/// Configuration options for gathering.
///
/// Paths and program names default to the usual locations on Linux.
///
/// # Examples
///
/// ```rust
/// use hostinfo::{GatherOptions, Source};
///
/// let options = GatherOptions::new()
///     .with_sources([Source::MemInfo, Source::MachineId])
///     .with_luks_dump(false);
///
/// assert_eq!(options.sources, vec![Source::MemInfo, Source::MachineId]);
/// assert!(!options.luks_dump);
/// ```
#[derive(Clone, Debug)]
pub struct GatherOptions {
    pub sources: Vec<Source>,
    pub blkid: String,
    pub cryptsetup: String,
    /// Run `cryptsetup luksDump` for `crypto_LUKS` devices.
    pub luks_dump: bool,
    pub cpuinfo_path: String,
    pub meminfo_path: String,
    pub machine_id_path: String,
    pub os_release_path: String,
}

impl Default for GatherOptions {
    fn default() -> Self {
        GatherOptions {
            sources: Source::ALL.to_vec(),
            blkid: "/sbin/blkid".to_string(),
            cryptsetup: "cryptsetup".to_string(),
            luks_dump: true,
            cpuinfo_path: "/proc/cpuinfo".to_string(),
            meminfo_path: "/proc/meminfo".to_string(),
            machine_id_path: "/etc/machine-id".to_string(),
            os_release_path: "/etc/os-release".to_string(),
        }
    }
}

impl GatherOptions {
    /// Creates default options: every source, standard locations.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hostinfo::GatherOptions;
    ///
    /// let options = GatherOptions::new();
    /// assert_eq!(options.blkid, "/sbin/blkid");
    /// assert!(options.luks_dump);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the set of sources. They are still gathered in the order
    /// given.
    #[must_use]
    pub fn with_sources(mut self, sources: impl IntoIterator<Item = Source>) -> Self {
        self.sources = sources.into_iter().collect();
        self
    }

    /// Removes one source.
    #[must_use]
    pub fn without_source(mut self, source: Source) -> Self {
        self.sources.retain(|s| *s != source);
        self
    }

    /// Sets the `blkid` program.
    #[must_use]
    pub fn with_blkid(mut self, program: impl Into<String>) -> Self {
        self.blkid = program.into();
        self
    }

    /// Sets the `cryptsetup` program.
    #[must_use]
    pub fn with_cryptsetup(mut self, program: impl Into<String>) -> Self {
        self.cryptsetup = program.into();
        self
    }

    /// Enables or disables LUKS header dumps.
    #[must_use]
    pub fn with_luks_dump(mut self, enabled: bool) -> Self {
        self.luks_dump = enabled;
        self
    }

    #[must_use]
    pub fn with_cpuinfo_path(mut self, path: impl Into<String>) -> Self {
        self.cpuinfo_path = path.into();
        self
    }

    #[must_use]
    pub fn with_meminfo_path(mut self, path: impl Into<String>) -> Self {
        self.meminfo_path = path.into();
        self
    }

    #[must_use]
    pub fn with_machine_id_path(mut self, path: impl Into<String>) -> Self {
        self.machine_id_path = path.into();
        self
    }

    #[must_use]
    pub fn with_os_release_path(mut self, path: impl Into<String>) -> Self {
        self.os_release_path = path.into();
        self
    }
}
