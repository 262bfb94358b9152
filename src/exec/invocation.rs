// src/exec/invocation.rs

//! One configured request to run an external command.

use std::fmt;
use std::io::Write as _;
use std::path::PathBuf;
use std::process::Stdio;

use tokio::process::Command;
use tracing::{debug, info, warn};

use crate::errors::{DebshipError, Result};
use crate::exec::filters;
use crate::exec::stream::{self, OutputStream};
use crate::types::StreamTag;

/// How a command line is handed to the operating system.
///
/// Call sites that need pipes or redirection opt into [`CommandSpec::Shell`]
/// explicitly; everything else is split into an argument vector up front so
/// no shell ever re-interprets it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandSpec {
    /// Argument vector, executed directly.
    Argv(Vec<String>),
    /// Raw string, handed to `sh -c`.
    Shell(String),
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandSpec::Argv(argv) => f.write_str(&shell_words::join(argv)),
            CommandSpec::Shell(raw) => f.write_str(raw),
        }
    }
}

/// A single configured command invocation.
///
/// One `Invocation` maps to at most one spawned process (none when
/// `dry_run` is set). All call shapes consume `self`; an invocation is
/// single-use.
#[derive(Debug)]
pub struct Invocation {
    command: CommandSpec,
    env: Vec<(String, String)>,
    current_dir: Option<PathBuf>,
    echo: bool,
    quiet: bool,
    dry_run: bool,
    colorize_errors: bool,
}

impl Invocation {
    /// Build an invocation from a command line, splitting it into an
    /// argument vector with shell-word rules (quoting, whitespace).
    pub fn new(cmd: &str) -> Result<Self> {
        let argv = shell_words::split(cmd)?;
        if argv.is_empty() {
            return Err(DebshipError::ConfigError(
                "empty command line".to_string(),
            ));
        }
        Ok(Self::from_spec(CommandSpec::Argv(argv)))
    }

    /// Build an invocation whose command line is interpreted by `sh -c`.
    pub fn shell(cmd: impl Into<String>) -> Self {
        Self::from_spec(CommandSpec::Shell(cmd.into()))
    }

    fn from_spec(command: CommandSpec) -> Self {
        Self {
            command,
            env: Vec::new(),
            current_dir: None,
            echo: true,
            quiet: false,
            dry_run: false,
            colorize_errors: true,
        }
    }

    /// Echo the effective command line to stderr before spawning
    /// (default: true).
    pub fn echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    /// Suppress all output lines while still draining both pipes
    /// (default: false). The process still runs.
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Only echo what would run; spawn nothing (default: false).
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Wrap stderr lines in ANSI red (default: true).
    pub fn colorize_errors(mut self, colorize_errors: bool) -> Self {
        self.colorize_errors = colorize_errors;
        self
    }

    /// Set one environment variable for the child, on top of the inherited
    /// environment.
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }

    /// Run the child in `dir` instead of the current working directory.
    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.current_dir = Some(dir.into());
        self
    }

    /// Spawn the process and return the multiplexed output stream.
    ///
    /// The echoed command line goes through redaction before it is written
    /// anywhere. With `dry_run` set, no process spawns and the returned
    /// stream is immediately empty.
    pub fn stream(self) -> Result<OutputStream> {
        if self.echo {
            let prefix = if self.dry_run { "Dry run" } else { "Running" };
            let echoed = format!("{prefix}: {}", self.command);
            eprintln!("{}", filters::redact_text(&echoed));
        }

        if self.dry_run {
            debug!(command = %self.command, "dry run, not spawning");
            return Ok(OutputStream::empty());
        }

        let mut cmd = match &self.command {
            CommandSpec::Argv(argv) => {
                let mut c = Command::new(&argv[0]);
                c.args(&argv[1..]);
                c
            }
            CommandSpec::Shell(raw) => {
                let mut c = Command::new("sh");
                c.arg("-c").arg(raw);
                c
            }
        };

        cmd.stdout(Stdio::piped()).stderr(Stdio::piped());
        for (key, value) in &self.env {
            cmd.env(key, value);
        }
        if let Some(dir) = &self.current_dir {
            cmd.current_dir(dir);
        }

        // The shown command is redacted everywhere it can surface: the log
        // line, the spawn error and the reaper below.
        let shown = filters::redact_text(&self.command.to_string()).to_string();
        info!(command = %shown, "starting process");

        let mut child = cmd.spawn().map_err(|source| DebshipError::SpawnError {
            command: shown.clone(),
            source,
        })?;

        let rx = stream::fan_in(child.stdout.take(), child.stderr.take());

        // Reap the child once it exits. The exit status is not part of the
        // engine's contract; it is logged and otherwise ignored.
        let command = shown;
        tokio::spawn(async move {
            match child.wait().await {
                Ok(status) => {
                    debug!(command = %command, code = status.code().unwrap_or(-1), "process exited");
                }
                Err(err) => {
                    warn!(command = %command, error = %err, "failed to wait for process");
                }
            }
        });

        Ok(OutputStream::new(rx, self.quiet, self.colorize_errors))
    }

    /// Run the command, forwarding OUT lines to our own stdout and ERR
    /// lines to our own stderr, in arrival order.
    pub async fn run(self) -> Result<()> {
        let mut stream = self.stream()?;
        while let Some(line) = stream.next().await {
            match line.tag() {
                StreamTag::Out => print!("{line}"),
                StreamTag::Err => eprint!("{line}"),
            }
        }
        let _ = std::io::stdout().flush();
        Ok(())
    }

    /// Run the command and collect its stdout into a single string: OUT
    /// lines, terminators stripped, joined with `\n`. ERR lines still flow
    /// through the filters but are discarded here.
    pub async fn capture_stdout(self) -> Result<String> {
        let mut stream = self.stream()?;
        let mut lines = Vec::new();
        while let Some(line) = stream.next().await {
            if line.tag() == StreamTag::Out {
                lines.push(line.into_text());
            }
        }
        Ok(lines.join("\n"))
    }
}
