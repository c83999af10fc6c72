// src/core/shell.rs
//! External command execution behind a trait, so callers can be tested
//! without `git` or `gcloud` on the machine.

use std::process::{Command, Output, Stdio};

use crate::error::{Result, ToolError};

/// A fully constructed external invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
    /// Added on top of the inherited environment.
    pub envs: Vec<(String, String)>,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>) -> Self {
        Self { program: program.into(), args: Vec::new(), envs: Vec::new() }
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.envs.push((key.into(), value.into()));
        self
    }

    /// `program arg1 arg2 ...`, space-joined with no quoting.
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn to_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        for (k, v) in &self.envs {
            cmd.env(k, v);
        }
        cmd
    }
}

pub trait Shell {
    /// Run to completion and return stdout. Non-zero exit is an error.
    fn capture(&mut self, cmd: &CommandSpec) -> Result<String>;

    /// Run with inherited stdio. Non-zero exit is an error.
    fn run(&mut self, cmd: &CommandSpec) -> Result<()>;
}

/// Spawns real processes via `std::process::Command`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemShell;

impl Shell for SystemShell {
    fn capture(&mut self, cmd: &CommandSpec) -> Result<String> {
        logd!(command = %cmd.command_line(), "capturing");

        let output = cmd
            .to_command()
            .stdin(Stdio::null())
            .output()
            .map_err(|source| ToolError::CommandSpawn { program: cmd.program.clone(), source })?;

        check_status(cmd, &output)?;
        String::from_utf8(output.stdout)
            .map_err(|_| ToolError::NonUtf8Output { program: cmd.program.clone() })
    }

    fn run(&mut self, cmd: &CommandSpec) -> Result<()> {
        logf!(command = %cmd.command_line(), "executing");

        let status = cmd
            .to_command()
            .status()
            .map_err(|source| ToolError::CommandSpawn { program: cmd.program.clone(), source })?;

        if status.success() {
            Ok(())
        } else {
            loge!(program = %cmd.program, %status, "command failed");
            Err(ToolError::CommandFailed {
                program: cmd.program.clone(),
                status: status.to_string(),
                stderr: s!(),
            })
        }
    }
}

fn check_status(cmd: &CommandSpec, output: &Output) -> Result<()> {
    if output.status.success() {
        return Ok(());
    }
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
    logd!(program = %cmd.program, status = %output.status, stderr = %stderr.trim(), "command failed");
    Err(ToolError::CommandFailed {
        program: cmd.program.clone(),
        status: output.status.to_string(),
        stderr,
    })
}
