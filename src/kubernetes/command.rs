// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! kubectl invocation and result capture

use crate::error::{Result, SaCreatorError};
use async_trait::async_trait;
use std::fmt;
use std::io::ErrorKind;
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::{debug, instrument};

/// A single kubectl invocation: argv plus an optional stdin payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KubectlCommand {
    pub args: Vec<String>,
    pub stdin: Option<String>,
}

impl KubectlCommand {
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
            stdin: None,
        }
    }

    pub fn with_stdin(mut self, input: impl Into<String>) -> Self {
        self.stdin = Some(input.into());
        self
    }

    /// Check whether the argv starts with the given words
    pub fn starts_with(&self, prefix: &[&str]) -> bool {
        self.args.len() >= prefix.len() && self.args.iter().zip(prefix).all(|(a, p)| a == p)
    }
}

impl fmt::Display for KubectlCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "kubectl {}", self.args.join(" "))?;
        if self.stdin.is_some() {
            write!(f, " < stdin")?;
        }
        Ok(())
    }
}

/// Captured result of a finished kubectl process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn new(code: i32, stdout: impl AsRef<str>, stderr: impl AsRef<str>) -> Self {
        Self {
            code,
            stdout: stdout.as_ref().trim().to_string(),
            stderr: stderr.as_ref().trim().to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.code == 0
    }

    /// Whether a failed create hit an existing object.
    ///
    /// `kubectl create namespace` surfaces the API reason
    /// (`Error from server (AlreadyExists): ...`) while the generator
    /// subcommands (`create sa`, `create role`, ...) only print
    /// `... "name" already exists`, so both spellings count.
    pub fn is_already_exists(&self) -> bool {
        if self.is_success() {
            return false;
        }
        let stderr = self.stderr.to_ascii_lowercase();
        stderr.contains("alreadyexists") || stderr.contains("already exists")
    }

    /// Whatever the command said, preferring stdout
    pub fn combined(&self) -> &str {
        if self.stdout.is_empty() {
            &self.stderr
        } else {
            &self.stdout
        }
    }

    /// Turn a non-zero exit into an error
    pub fn into_result(self, command: &KubectlCommand) -> Result<CommandOutput> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(SaCreatorError::CommandFailed {
                command: command.to_string(),
                code: self.code,
                stderr: self.stderr,
            })
        }
    }
}

/// Executes kubectl commands against the target cluster.
///
/// A non-zero exit is not an error at this level: it comes back as a
/// [`CommandOutput`] and the caller decides what it means. Only failing to
/// start or wait for the process is reported as `Err`.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(&self, command: &KubectlCommand) -> Result<CommandOutput>;
}

/// Runs the real kubectl binary, relying on its ambient credentials
#[derive(Debug, Clone)]
pub struct KubectlRunner {
    binary: String,
    context: Option<String>,
}

impl KubectlRunner {
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
            context: None,
        }
    }

    /// Pin every invocation to a kubeconfig context
    pub fn with_context(mut self, context: Option<String>) -> Self {
        self.context = context;
        self
    }

    fn argv<'a>(&'a self, command: &'a KubectlCommand) -> Vec<&'a str> {
        let mut argv = Vec::with_capacity(command.args.len() + 1);
        if let Some(context) = &self.context {
            argv.push("--context");
            argv.push(context.as_str());
        }
        argv.extend(command.args.iter().map(String::as_str));
        argv
    }
}

#[async_trait]
impl CommandRunner for KubectlRunner {
    #[instrument(skip_all, fields(command = %command))]
    async fn run(&self, command: &KubectlCommand) -> Result<CommandOutput> {
        let spawn_err = |source: std::io::Error| SaCreatorError::CommandSpawn {
            command: command.to_string(),
            source,
        };

        let mut child = Command::new(&self.binary)
            .args(self.argv(command))
            .stdin(if command.stdin.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(spawn_err)?;

        if let (Some(input), Some(mut stdin)) = (&command.stdin, child.stdin.take()) {
            match stdin.write_all(input.as_bytes()).await {
                Ok(()) => {}
                // kubectl exited without reading its input; its exit code
                // and stderr below say why
                Err(e) if e.kind() == ErrorKind::BrokenPipe => {
                    debug!("kubectl closed stdin before reading all input");
                }
                Err(e) => return Err(spawn_err(e)),
            }
            // Dropping stdin closes the pipe so kubectl sees EOF
            drop(stdin);
        }

        let output = child.wait_with_output().await.map_err(spawn_err)?;
        let result = CommandOutput::new(
            // Killed by a signal: no exit code
            output.status.code().unwrap_or(-1),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr),
        );

        debug!("kubectl exited with code {}", result.code);
        Ok(result)
    }
}
