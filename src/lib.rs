//! # hostinfo
//!
//! Turns the semi-structured text that Linux tools and pseudo-files print
//! about a machine into typed, serializable records.
//!
//! ## What does it read?
//!
//! - `/proc/cpuinfo`: per-CPU blocks, compacted so shared fields appear once
//! - `/proc/meminfo`: one field per line, sizes as `_kb` integers
//! - `blkid`: quoted attribute lists per block device
//! - `cryptsetup luksDump`: nested, tab-indented LUKS header dumps
//! - `/etc/machine-id` and `/etc/os-release`
//!
//! ## Key Features
//!
//! - **Normalized keys**: `cpu MHz`, `HugePages_Total` and `Active(anon)` all
//!   become snake case
//! - **Typed values**: integers in any common base, booleans, and
//!   dimensioned sizes are recognized; everything else stays a string
//! - **Serde compatible**: records serialize as plain JSON objects and can be
//!   deserialized into your own structs with [`from_value`]
//! - **Testable**: all I/O goes through an [`Invoker`], so captured dumps can
//!   be replayed with [`StaticInvoker`]
//!
//! ## Quick Start
//!
//! ```rust
//! use hostinfo::{LineParser, Value};
//!
//! let parser = LineParser::new("meminfo");
//! let (key, value) = parser.parse_line("MemTotal:       40743392 kB").unwrap();
//!
//! assert_eq!(key, "mem_total_kb");
//! assert_eq!(value, Value::Integer(40743392));
//! ```
//!
//! ### Gathering a whole host
//!
//! ```rust,no_run
//! use hostinfo::{gather, ExecInvoker, GatherOptions};
//!
//! let info = gather(&ExecInvoker, &GatherOptions::default()).unwrap();
//! println!("{}", serde_json::to_string(&info).unwrap());
//! ```
//!
//! ### Parsing a captured dump
//!
//! ```rust
//! use hostinfo::{BlockParser, Value};
//!
//! let dump = "Data segments:\n  0: crypt\n\toffset: 16777216 [bytes]\n\tlength: (whole device)\n";
//! let record = BlockParser::new("luksDump", dump).parse().unwrap();
//!
//! let segment = record.get("data_segments").unwrap().as_array().unwrap()[0]
//!     .as_object()
//!     .unwrap();
//! assert_eq!(segment.get("offset_bytes"), Some(&Value::Integer(1 << 24)));
//! assert!(!segment.contains_key("length"));
//! ```
//!
//! ## Logging
//!
//! Gathering reports progress and skipped sources through [`tracing`]. The
//! parsers themselves never log. Install any subscriber to see the events.
//!
//! ## Format Details
//!
//! See the [`grammar`] module for the accepted input formats.

pub mod attrs;
pub mod block;
pub mod coerce;
pub mod compact;
pub mod de;
pub mod error;
pub mod gather;
pub mod grammar;
pub mod invoker;
pub mod key;
pub mod line;
pub mod macros;
pub mod map;
pub mod options;
pub mod value;

pub use attrs::{AttributeLine, AttributeLineParser};
pub use block::{BlockParser, LineCursor};
pub use coerce::{coerce, Coerced};
pub use compact::compact;
pub use de::from_value;
pub use error::{Error, Result};
pub use gather::cpuinfo::CpuInfo;
pub use gather::{gather, HostInfo};
pub use invoker::{ExecInvoker, Invoker, StaticInvoker};
pub use key::normalize_key;
pub use line::LineParser;
pub use map::Record;
pub use options::{GatherOptions, Source};
pub use value::Value;
