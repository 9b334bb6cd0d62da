//! Input formats
//!
//! This module documents the text formats the parsers accept and the
//! records they produce.
//!
//! # Keys
//!
//! Every label is reduced to snake case by
//! [`normalize_key`](crate::normalize_key): characters other than ASCII
//! letters and digits separate words, a capital after a lowercase letter
//! starts a new word, and the result is lowercased.
//!
//! | Label | Key |
//! |-------|-----|
//! | `cpu MHz` | `cpu_mhz` |
//! | `HugePages_Total` | `huge_pages_total` |
//! | `Active(anon)` | `active_anon` |
//! | `DirectMap2M` | `direct_map2m` |
//! | `Digest ID` | `digest_id` |
//!
//! # Values
//!
//! | Kind | Example | Becomes |
//! |------|---------|---------|
//! | Floaty integer | `400.000` | `400` |
//! | Integer | `154`, `0x436`, `0755`, `0b101` | `Integer` |
//! | Boolean | `yes`, `no`, `true`, `FALSE` | `Bool` |
//! | Dimensioned integer | `12288 KB` | `Integer`, key gains `_kb` |
//! | Anything else | `5222.40`, `GenuineIntel` | `String` |
//!
//! # Label lines
//!
//! `/proc/cpuinfo` and `/proc/meminfo` use one `label: value` pair per line.
//! Only the first colon splits; the value may contain more.
//!
//! ```text
//! ^[^:]+:.*$
//! ```
//!
//! In `/proc/cpuinfo`, each `processor: N` line opens a block that runs to
//! the next blank line. Inside a block, `bugs`, `features`, `flags` and
//! `vmx_flags` hold sorted token arrays.
//!
//! # Attribute lines
//!
//! `blkid` prints a device followed by quoted attributes:
//!
//! ```text
//! ^\S+:(\s+[A-Z][A-Z0-9_]*="(?:[^"\\]|\\.)*")*\s*$
//! ```
//!
//! ```text
//! /dev/nvme0n1p1: UUID="8B92-BD41" BLOCK_SIZE="512" TYPE="vfat" PARTLABEL="EFI System Partition"
//! ```
//!
//! Names are lowercased. Values are unquoted with the usual backslash
//! escapes and stay strings, except `block_size`.
//!
//! # Block dumps
//!
//! `cryptsetup luksDump` nests with tabs:
//!
//! ```text
//! Keyslots:
//!   0: luks2
//! <TAB>Key:        512 bits
//! <TAB>Salt:       e9 44 e4 64 39 38 41 52 8b ca 8a d4 61 5d 2a 37
//! <TAB>            b6 01 c4 76 52 ac e4 5c 7d 77 f3 9b 9f 25 2a de
//! <TAB>Digest ID:  0
//! ```
//!
//! - A top-level key with an empty value introduces a sequence.
//! - Sequence items are `N: header` lines with extra leading whitespace,
//!   numbered from zero. The header is stored under `type`, next to the
//!   fields of the item's body, which sits one tab deeper.
//! - A line indented past its mapping continues the previous string value,
//!   joined with a single space.
//! - Values ending in ` [bytes]` or ` bits` are integers whose key gains
//!   `_bytes` or `_bits`.
//! - `(no <key>)` and `length: (whole device)` are dropped.
//!
//! The salt above becomes
//!
//! ```text
//! "e9 44 e4 64 39 38 41 52 8b ca 8a d4 61 5d 2a 37 b6 01 c4 76 52 ac e4 5c 7d 77 f3 9b 9f 25 2a de"
//! ```
//!
//! # Compaction
//!
//! After parsing `/proc/cpuinfo`, fields every CPU holds with the same value
//! move to the template, unless the template already holds a different
//! value. See [`compact`](crate::compact).
