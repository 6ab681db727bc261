use std::{fmt, path::PathBuf};

use fip_model::{Env, Flag};

use crate::ExecError;

/// Configuration for a single subprocess invocation.
#[derive(Debug, Clone)]
pub struct CommandSpec {
    /// Step label used in logs and error messages.
    pub(crate) label: String,
    /// Program to execute (e.g. `"docker"`, `"/usr/bin/python3"`).
    pub(crate) program: String,
    /// Command-line arguments.
    pub(crate) args: Vec<String>,
    /// Extra environment entries for the child; the parent environment is
    /// inherited and these are layered on top.
    pub(crate) env: Env,
    /// Working directory. If `None`, the child inherits the parent's.
    pub(crate) cwd: Option<PathBuf>,
    /// Whether non-zero exit codes are treated as failures.
    pub(crate) fail_on_non_zero: Flag,
}

impl CommandSpec {
    /// Create a spec with no arguments, inherited cwd, and fail-on-non-zero
    /// enabled.
    pub fn new(label: impl Into<String>, program: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            program: program.into(),
            args: Vec::new(),
            env: Env::new(),
            cwd: None,
            fail_on_non_zero: Flag::enabled(),
        }
    }

    /// Append one argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Add an environment entry for the child.
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.push(key, value);
        self
    }

    /// Set the working directory.
    pub fn cwd(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    /// Tolerate non-zero exit codes.
    pub fn allow_non_zero(mut self) -> Self {
        self.fail_on_non_zero = Flag::disabled();
        self
    }

    /// Step label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Validate the spec before spawning.
    ///
    /// Rules:
    /// - `program` is not empty or whitespace-only.
    pub fn validate(&self) -> Result<(), ExecError> {
        if self.program.trim().is_empty() {
            return Err(ExecError::InvalidSpec("command program is empty".into()));
        }
        Ok(())
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.args.is_empty() {
            f.write_str(&self.program)
        } else {
            write!(f, "{} {}", self.program, self.args.join(" "))
        }
    }
}
