//! Runs an `SfdxCommand` as a child process, streaming its output

use super::sfdx_command::SfdxCommand;
use crate::{
    error::{Error, Result},
    messages::Localizer,
    report::OutputChannel,
};
use std::io::{BufRead, BufReader, Read};
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Default)]
pub struct ExecutionOptions {
    /// Program to run in place of the command's own
    pub program: Option<String>,
    pub cwd: Option<PathBuf>,
    pub env: Vec<(String, String)>,
}

impl ExecutionOptions {
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = Some(program.into());
        self
    }

    pub fn with_cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }

    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecutionResult {
    /// `None` when the process was terminated by a signal
    pub exit_code: Option<i32>,
    pub duration: Duration,
}

impl ExecutionResult {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

pub struct CliCommandExecutor {
    command: SfdxCommand,
    options: ExecutionOptions,
}

impl CliCommandExecutor {
    pub fn new(command: &SfdxCommand, options: ExecutionOptions) -> Self {
        let command = match &options.program {
            Some(program) => SfdxCommand {
                program: program.clone(),
                ..command.clone()
            },
            None => command.clone(),
        };
        Self { command, options }
    }

    /// The command as it will actually be run
    pub fn command(&self) -> &SfdxCommand {
        &self.command
    }

    /// Run to completion, writing start, every output line and the exit status to `channel`.
    ///
    /// A non-zero exit is not an error; only failing to start or wait on the
    /// process is.
    pub fn execute(&self, channel: &dyn OutputChannel, nls: &Localizer) -> Result<ExecutionResult> {
        let command_string = self.command.to_command_string();
        channel.append_line(&nls.localize("channel_starting_message", &[&command_string]));

        let mut cmd = Command::new(&self.command.program);
        cmd.args(self.command.to_args())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        if let Some(ref dir) = self.options.cwd {
            cmd.current_dir(dir);
        }

        for (key, value) in &self.options.env {
            tracing::debug!("Setting env: {}={}", key, value);
            cmd.env(key, value);
        }

        tracing::info!("Running: {}", command_string);
        let started = Instant::now();

        let mut child = match cmd.spawn() {
            Ok(child) => child,
            Err(e) => return Err(self.fail(channel, nls, &command_string, e.to_string())),
        };

        let stdout = child.stdout.take();
        let stderr = child.stderr.take();
        std::thread::scope(|scope| {
            if let Some(stderr) = stderr {
                scope.spawn(move || stream_lines(stderr, channel));
            }
            if let Some(stdout) = stdout {
                stream_lines(stdout, channel);
            }
        });

        let status = match child.wait() {
            Ok(status) => status,
            Err(e) => return Err(self.fail(channel, nls, &command_string, e.to_string())),
        };

        let result = ExecutionResult {
            exit_code: status.code(),
            duration: started.elapsed(),
        };

        let code = result
            .exit_code
            .map(|c| c.to_string())
            .unwrap_or_else(|| "none".to_string());
        channel.append_line(&nls.localize("channel_end_with_exit_code", &[&command_string, &code]));
        tracing::debug!("{} finished with {:?}", command_string, result);

        Ok(result)
    }

    fn fail(&self, channel: &dyn OutputChannel, nls: &Localizer, command_string: &str, reason: String) -> Error {
        channel.append_line(&nls.localize("channel_end_with_error", &[command_string, &reason]));
        Error::ProcessError(format!("Failed to execute {}: {}", command_string, reason))
    }
}

/// Forward every line until EOF. Bytes that are not UTF-8 are replaced, never skipped.
fn stream_lines(source: impl Read, channel: &dyn OutputChannel) {
    let mut reader = BufReader::new(source);
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {
                let line = String::from_utf8_lossy(&buf);
                channel.append_line(line.trim_end_matches(['\r', '\n']));
            }
            Err(e) => {
                tracing::warn!("Stopped reading process output: {}", e);
                break;
            }
        }
    }
}
