//! External command execution for probes.

use std::env;
use std::ffi::{OsStr, OsString};
use std::path::PathBuf;
use std::process::{Command, Stdio};

use super::ExecError;

/// System binary directories appended to the search path on non-Windows hosts.
///
/// Diagnostic tools such as `ifconfig` and `arp` often live here and are
/// missing from an unprivileged user's `PATH`.
const SYSTEM_BIN_DIRS: &[&str] = &["/sbin", "/usr/sbin"];

/// Trait for running an external diagnostic command.
///
/// # Design
///
/// - Probes depend on this trait, never on [`std::process`] directly
/// - Enables dependency injection of scripted output in tests
/// - The production implementation is [`SystemRunner`]
pub trait CommandRunner: Send + Sync {
    /// Runs `command` with `args` and returns its standard output.
    ///
    /// `args` is split into words with POSIX shell rules; no shell is spawned.
    ///
    /// # Errors
    ///
    /// Returns [`ExecError`] when:
    /// - `args` has unbalanced quoting (`ExecError::InvalidArguments`)
    /// - The executable cannot be started (`ExecError::Spawn`)
    /// - The command exits with a nonzero status (`ExecError::Status`)
    fn run(&self, command: &str, args: &str) -> Result<String, ExecError>;
}

/// Runs commands as child processes of the current process.
///
/// Every invocation:
/// - resolves the executable against `PATH` (plus `/sbin` and `/usr/sbin`
///   off Windows), falling back to the bare command name
/// - sets `LC_ALL=C` so tool output is not localized
/// - discards standard error
#[derive(Debug, Clone, Default)]
pub struct SystemRunner {
    _private: (),
}

impl SystemRunner {
    /// Creates a new system command runner.
    #[must_use]
    pub const fn new() -> Self {
        Self { _private: () }
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, command: &str, args: &str) -> Result<String, ExecError> {
        let argv = shlex::split(args).ok_or_else(|| ExecError::InvalidArguments {
            command: command.to_string(),
            args: args.to_string(),
        })?;

        let executable = resolve_executable(command);
        tracing::trace!(executable = %executable.display(), ?argv, "Running probe command");

        let output = Command::new(&executable)
            .args(&argv)
            .env("LC_ALL", "C")
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .map_err(|source| ExecError::Spawn {
                command: command.to_string(),
                source,
            })?;

        if !output.status.success() {
            return Err(ExecError::Status {
                command: command.to_string(),
                code: output.status.code(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Resolves `command` to an absolute executable path.
///
/// Returns the bare command name when nothing on the search path matches,
/// leaving the lookup to the operating system.
#[must_use]
pub fn resolve_executable(command: &str) -> PathBuf {
    match search_path() {
        Some(path) => resolve_executable_in(command, &path),
        None => PathBuf::from(command),
    }
}

/// Resolves `command` against an explicit search path.
pub(crate) fn resolve_executable_in(command: &str, path: &OsStr) -> PathBuf {
    let cwd = env::current_dir().unwrap_or_default();
    which::which_in(command, Some(path), cwd).unwrap_or_else(|_| PathBuf::from(command))
}

/// Builds the executable search path: `PATH` plus the system binary directories.
fn search_path() -> Option<OsString> {
    let mut dirs: Vec<PathBuf> = env::var_os("PATH")
        .map(|path| env::split_paths(&path).collect())
        .unwrap_or_default();

    if !cfg!(windows) {
        dirs.extend(SYSTEM_BIN_DIRS.iter().map(PathBuf::from));
    }

    env::join_paths(dirs).ok()
}
