// src/exec/stream.rs

//! Fan-in of the two child pipes into one ordered line stream.

use tokio::process::{ChildStderr, ChildStdout};
use tokio::sync::mpsc;

use crate::exec::{filters, reader};
use crate::types::{OutputLine, StreamTag};

/// Spawn one reader task per pipe, all writing to a single unbounded
/// channel, and return the consuming end.
///
/// The channel is the arrival-order sink: each reader preserves the order
/// of its own pipe, and lines from different pipes interleave in whatever
/// order they actually arrive. The channel is unbounded, so a reader never
/// blocks on sink capacity, only on its own pipe read.
///
/// Each reader owns a clone of the sender and drops it when its pipe is
/// exhausted, so `recv()` returns `None` exactly when both pipes have been
/// fully drained and closed. Any lines queued before a reader finished are
/// still delivered first; the close cannot overtake them.
pub(crate) fn fan_in(
    stdout: Option<ChildStdout>,
    stderr: Option<ChildStderr>,
) -> mpsc::UnboundedReceiver<OutputLine> {
    let (tx, rx) = mpsc::unbounded_channel();

    if let Some(stdout) = stdout {
        let tx = tx.clone();
        tokio::spawn(reader::read_lines(stdout, StreamTag::Out, tx));
    }
    if let Some(stderr) = stderr {
        let tx = tx.clone();
        tokio::spawn(reader::read_lines(stderr, StreamTag::Err, tx));
    }
    drop(tx);

    rx
}

/// Lazy, finite sequence of tagged output lines from one spawned process.
///
/// The sequence terminates once both pipe readers have finished; by that
/// point both pipes are fully drained, so a consumer that sees the end of
/// the stream knows the child was never left blocking on unread output.
/// Not restartable.
#[derive(Debug)]
pub struct OutputStream {
    rx: Option<mpsc::UnboundedReceiver<OutputLine>>,
    quiet: bool,
    colorize_errors: bool,
}

impl OutputStream {
    pub(crate) fn new(
        rx: mpsc::UnboundedReceiver<OutputLine>,
        quiet: bool,
        colorize_errors: bool,
    ) -> Self {
        Self {
            rx: Some(rx),
            quiet,
            colorize_errors,
        }
    }

    /// Stream that yields nothing at all (dry-run: no process was spawned).
    pub(crate) fn empty() -> Self {
        Self {
            rx: None,
            quiet: false,
            colorize_errors: false,
        }
    }

    /// Next filtered line, or `None` once both pipes are exhausted.
    ///
    /// With `quiet` set, this drains the process to completion without
    /// yielding anything.
    pub async fn next(&mut self) -> Option<OutputLine> {
        let rx = self.rx.as_mut()?;
        loop {
            let line = rx.recv().await?;
            if self.quiet {
                continue;
            }
            return Some(filters::apply(line, self.colorize_errors));
        }
    }

    /// Drain the whole stream into a vector.
    pub async fn collect(mut self) -> Vec<OutputLine> {
        let mut lines = Vec::new();
        while let Some(line) = self.next().await {
            lines.push(line);
        }
        lines
    }
}
