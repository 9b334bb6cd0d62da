//! Running commands and reading pseudo-files.
//!
//! Gathering never touches the system directly; it goes through an
//! [`Invoker`]. [`ExecInvoker`] is the real thing, [`StaticInvoker`] replays
//! captured output so parsers can be exercised against dumps from other
//! machines.

use crate::{Error, Result};
use std::collections::HashMap;
use std::fs;
use std::process::Command;

/// Runs commands and returns their standard output.
pub trait Invoker {
    /// Runs `program` with `args`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Invoke`] when the program cannot be started or does
    /// not exit successfully.
    fn invoke(&self, program: &str, args: &[&str]) -> Result<String>;

    /// Returns the contents of the file at `path`.
    ///
    /// The default runs `cat`, so a scripted invoker only has to know about
    /// commands.
    fn read_file(&self, path: &str) -> Result<String> {
        self.invoke("cat", &[path])
    }
}

impl<I: Invoker + ?Sized> Invoker for &I {
    fn invoke(&self, program: &str, args: &[&str]) -> Result<String> {
        (**self).invoke(program, args)
    }

    fn read_file(&self, path: &str) -> Result<String> {
        (**self).read_file(path)
    }
}

/// Joins a program and its arguments for error messages and lookups.
fn command_line(program: &str, args: &[&str]) -> String {
    std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Runs real processes with [`std::process::Command`].
#[derive(Clone, Copy, Debug, Default)]
pub struct ExecInvoker;

impl Invoker for ExecInvoker {
    fn invoke(&self, program: &str, args: &[&str]) -> Result<String> {
        let output = Command::new(program)
            .args(args)
            .output()
            .map_err(|e| Error::invoke(&command_line(program, args), &e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let message = match stderr.trim() {
                "" => output.status.to_string(),
                reason => format!("{}: {}", output.status, reason),
            };
            return Err(Error::invoke(&command_line(program, args), &message));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    /// Reads the file directly instead of spawning `cat`.
    fn read_file(&self, path: &str) -> Result<String> {
        fs::read_to_string(path).map_err(|e| Error::io(&format!("{}: {}", path, e)))
    }
}

/// Replays scripted command output.
///
/// # Examples
///
/// ```rust
/// use hostinfo::{Invoker, StaticInvoker};
///
/// let invoker = StaticInvoker::new()
///     .with_file("/etc/machine-id", "0123456789abcdef0123456789abcdef\n")
///     .with_failure("/sbin/blkid", &[], "exit status 2");
///
/// assert!(invoker.read_file("/etc/machine-id").unwrap().starts_with("0123"));
/// assert!(invoker.invoke("/sbin/blkid", &[]).is_err());
/// assert!(invoker.read_file("/proc/meminfo").is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct StaticInvoker {
    outputs: HashMap<String, std::result::Result<String, String>>,
}

impl StaticInvoker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Scripts the output of `program args`.
    #[must_use]
    pub fn with_output(mut self, program: &str, args: &[&str], output: impl Into<String>) -> Self {
        self.outputs
            .insert(command_line(program, args), Ok(output.into()));
        self
    }

    /// Scripts the contents of the file at `path`.
    #[must_use]
    pub fn with_file(self, path: &str, contents: impl Into<String>) -> Self {
        self.with_output("cat", &[path], contents)
    }

    /// Scripts `program args` to fail with `message`.
    #[must_use]
    pub fn with_failure(mut self, program: &str, args: &[&str], message: &str) -> Self {
        self.outputs
            .insert(command_line(program, args), Err(message.to_string()));
        self
    }
}

impl Invoker for StaticInvoker {
    fn invoke(&self, program: &str, args: &[&str]) -> Result<String> {
        let command = command_line(program, args);
        match self.outputs.get(&command) {
            Some(Ok(output)) => Ok(output.clone()),
            Some(Err(message)) => Err(Error::invoke(&command, message)),
            None => Err(Error::invoke(&command, "no scripted output")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_line() {
        assert_eq!(command_line("cat", &["/proc/cpuinfo"]), "cat /proc/cpuinfo");
        assert_eq!(command_line("/sbin/blkid", &[]), "/sbin/blkid");
    }

    #[test]
    fn test_static_invoker_matches_arguments() {
        let invoker = StaticInvoker::new().with_output(
            "cryptsetup",
            &["luksDump", "/dev/sda3"],
            "Version: 2\n",
        );

        assert_eq!(
            invoker.invoke("cryptsetup", &["luksDump", "/dev/sda3"]).unwrap(),
            "Version: 2\n"
        );
        assert_eq!(
            invoker.invoke("cryptsetup", &["luksDump", "/dev/sda4"]),
            Err(Error::invoke(
                "cryptsetup luksDump /dev/sda4",
                "no scripted output"
            ))
        );
    }

    #[test]
    fn test_read_file_goes_through_cat() {
        let invoker = StaticInvoker::new().with_output("cat", &["/etc/os-release"], "ID=debian\n");
        assert_eq!(invoker.read_file("/etc/os-release").unwrap(), "ID=debian\n");
    }

    #[test]
    fn test_exec_invoker_missing_file() {
        let err = ExecInvoker
            .read_file("/nonexistent/hostinfo/file")
            .unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_exec_invoker_missing_program() {
        let err = ExecInvoker
            .invoke("/nonexistent/hostinfo/program", &[])
            .unwrap_err();
        assert!(matches!(err, Error::Invoke { .. }));
    }
}
