//! Invocation of external quadrature solvers.

use std::{
    io,
    process::{Command, ExitStatus, Stdio},
};

use thiserror::Error;

/// A source of raw solver output.
///
/// Each call to [`run`][Solver::run] executes the underlying quadrature method
/// once and returns everything it wrote to standard output.
pub trait Solver {
    /// The method name, used to label the solver's curve and diagnostics.
    fn name(&self) -> &str;

    /// Runs the solver to completion.
    ///
    /// # Errors
    ///
    /// Returns a [`RunError`] if the solver cannot be started or does not
    /// finish successfully.
    fn run(&self) -> Result<String, RunError>;
}

/// Errors that can occur while running an external solver.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("could not start `{command}`")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("command `{command}` failed ({status})\n{stdout}{stderr}")]
    Failed {
        command: String,
        status: ExitStatus,
        stdout: String,
        stderr: String,
    },
}

/// An external executable run with no arguments and no standard input.
///
/// The command is resolved the way the platform resolves program names: a
/// path containing a separator is taken relative to the working directory,
/// a bare name is looked up on the search path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Executable {
    name: String,
    command: String,
}

impl Executable {
    /// Creates an executable solver labeled `name` that runs `command`.
    #[must_use]
    pub fn new(name: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            command: command.into(),
        }
    }
}

impl Solver for Executable {
    fn name(&self) -> &str {
        &self.name
    }

    /// Spawns the command, waits for it, and captures both output streams.
    ///
    /// The child is always waited on and both pipes are drained before this
    /// returns, including when the command fails.
    fn run(&self) -> Result<String, RunError> {
        log::info!("running {} solver `{}`", self.name, self.command);

        let output = Command::new(&self.command)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| RunError::Spawn {
                command: self.command.clone(),
                source,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();

        if !output.status.success() {
            return Err(RunError::Failed {
                command: self.command.clone(),
                status: output.status,
                stdout,
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        log::debug!(
            "{} solver exited cleanly with {} bytes of output",
            self.name,
            stdout.len()
        );
        Ok(stdout)
    }
}
