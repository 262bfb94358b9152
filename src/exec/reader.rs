// src/exec/reader.rs

//! Per-pipe line reader.

use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::types::{OutputLine, StreamTag};

/// Read `pipe` to end-of-stream, forwarding each line to `sink` tagged with
/// `tag`.
///
/// Lines are split on `\n` only; content is preserved exactly, including a
/// missing terminator on the final line. A read error ends this reader
/// early (logged, not propagated); the other pipe and the process itself
/// are unaffected.
///
/// Returning from this function drops both the pipe and this reader's clone
/// of the sender; the shared channel closes once every reader has finished,
/// which is how the consumer learns that all output has been delivered.
pub(crate) async fn read_lines<R>(pipe: R, tag: StreamTag, sink: mpsc::UnboundedSender<OutputLine>)
where
    R: AsyncRead + Unpin,
{
    let mut reader = BufReader::new(pipe);
    let mut buf = Vec::new();

    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf).await {
            Ok(0) => break,
            Ok(_) => {
                // The receiver may already be gone; keep draining anyway so
                // the child never blocks on a full pipe.
                let _ = sink.send(OutputLine::from_bytes(tag, &buf));
            }
            Err(err) => {
                warn!(stream = %tag, error = %err, "error reading pipe; stopping this reader");
                break;
            }
        }
    }

    debug!(stream = %tag, "pipe drained");
}
