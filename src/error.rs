//! Error types for parsing and gathering.
//!
//! Every parser in this crate reports grammar violations the same way: an
//! [`Error::InvalidLine`] naming the parser and carrying the offending line,
//! so a caller juggling several sources can tell at a glance which dump was
//! malformed and where.
//!
//! ## Error Categories
//!
//! - **Invalid lines**: missing delimiters, empty keys, duplicate keys,
//!   out-of-sequence indices, stray continuations
//! - **Unquote failures**: bad escapes in quoted attribute values, passed
//!   through exactly as the unquoter reported them
//! - **Invocation failures**: a command could not be run or exited non-zero
//! - **I/O failures**: a pseudo-file could not be read
//!
//! ## Examples
//!
//! ```rust
//! use hostinfo::{Error, LineParser};
//!
//! let parser = LineParser::new("meminfo");
//! let err = parser.parse_line("no delimiter here").unwrap_err();
//! assert!(matches!(err, Error::InvalidLine { .. }));
//! assert_eq!(err.to_string(), "meminfo: \"no delimiter here\": invalid line");
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors raised while parsing or gathering.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A parser met a line that violates its grammar.
    #[error("{parser}: {line:?}: invalid line")]
    InvalidLine { parser: String, line: String },

    /// A quoted value could not be decoded.
    #[error("unquote {input}: {reason}")]
    Unquote { input: String, reason: String },

    /// A command could not be run, or exited unsuccessfully.
    #[error("{command}: {message}")]
    Invoke { command: String, message: String },

    /// I/O error while reading a file
    #[error("IO error: {0}")]
    Io(String),

    /// Every enabled source failed.
    #[error("all gatherers failed")]
    NothingGathered,

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates an invalid line error attributed to the named parser.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hostinfo::Error;
    ///
    /// let err = Error::invalid_line("cpuinfo", "processor");
    /// assert!(err.to_string().starts_with("cpuinfo: "));
    /// ```
    pub fn invalid_line(parser: &str, line: &str) -> Self {
        Error::InvalidLine {
            parser: parser.to_string(),
            line: line.to_string(),
        }
    }

    /// Creates an unquote error for the given quoted input.
    pub fn unquote(input: &str, reason: &str) -> Self {
        Error::Unquote {
            input: input.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Creates an invocation error. `command` is the full command line,
    /// program first.
    pub fn invoke(command: &str, message: &str) -> Self {
        Error::Invoke {
            command: command.to_string(),
            message: message.to_string(),
        }
    }

    /// Creates an I/O error for file reading failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Returns `true` for grammar violations, as opposed to failures to
    /// obtain the text in the first place.
    #[must_use]
    pub const fn is_parse_error(&self) -> bool {
        matches!(self, Error::InvalidLine { .. } | Error::Unquote { .. })
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
