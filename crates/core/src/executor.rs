use async_trait::async_trait;
use std::{
    ffi::OsStr,
    fmt::Display,
    io::ErrorKind,
    path::{Path, PathBuf},
    process::Stdio,
};
use tokio::process::Command;

use crate::{Error, Result, Stage};

/// External deploy invocation: `<program> <args...>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployCommand {
    program: String,
    args: Vec<String>,
}

impl Default for DeployCommand {
    fn default() -> Self {
        Self::new("sfdx", ["force:source:push"])
    }
}

impl DeployCommand {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Split a command line on whitespace. Returns `None` for a blank line.
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        let mut parts = line.split_whitespace();
        let program = parts.next()?;
        Some(Self::new(program, parts))
    }

    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl Display for DeployCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Raw result of a finished process. `exit_code` is `None` when the process was killed by a signal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecOutput {
    pub exit_code: Option<i32>,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

/// Runs a command in a working directory and collects its output.
///
/// Deploys go through this seam so tests can substitute a mock instead of
/// spawning real platform tooling.
#[async_trait]
pub trait CommandExecutor: std::fmt::Debug + Send + Sync {
    /// # Errors
    /// Returns [`Error::Launch`] if the program cannot be spawned, or [`Error::Io`]
    /// if waiting on it fails. A non-zero exit is not an error.
    async fn execute(&self, command: &DeployCommand, cwd: &Path) -> Result<ExecOutput>;
}

/// Locate `program` the way a shell would: bare names are searched on `search_path`
/// (honouring `PATHEXT` on Windows, so `sfdx` finds `sfdx.cmd`), names containing
/// a separator are taken relative to `cwd`.
///
/// # Errors
/// Returns [`Error::Launch`] with a `NotFound` source if nothing executable matches.
pub fn resolve_program(
    program: &str,
    search_path: Option<impl AsRef<OsStr>>,
    cwd: &Path,
) -> Result<PathBuf> {
    which::which_in(program, search_path, cwd).map_err(|err| Error::Launch {
        program: program.to_string(),
        source: std::io::Error::new(ErrorKind::NotFound, err),
    })
}

/// Spawns real processes with `tokio::process`.
///
/// The program is resolved against `PATH` before spawning. The child is killed
/// if the returned future is dropped before it exits.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessExecutor;

#[async_trait]
impl CommandExecutor for ProcessExecutor {
    async fn execute(&self, command: &DeployCommand, cwd: &Path) -> Result<ExecOutput> {
        let program = resolve_program(command.program(), std::env::var_os("PATH"), cwd)?;
        tracing::debug!(
            command = %command,
            program = %program.display(),
            cwd = %cwd.display(),
            "spawning process"
        );
        let child = Command::new(&program)
            .args(command.args())
            .current_dir(cwd)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| Error::Launch {
                program: command.program().to_string(),
                source,
            })?;
        let output = child
            .wait_with_output()
            .await
            .map_err(|source| Error::io(Stage::Deploy, cwd, source))?;
        Ok(ExecOutput {
            exit_code: output.status.code(),
            stdout: output.stdout,
            stderr: output.stderr,
        })
    }
}
