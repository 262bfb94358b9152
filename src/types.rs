use std::fmt;

/// Which pipe of a child process a line of output came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StreamTag {
    /// Standard output.
    Out,
    /// Standard error.
    Err,
}

impl StreamTag {
    pub fn is_err(self) -> bool {
        matches!(self, StreamTag::Err)
    }
}

impl fmt::Display for StreamTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StreamTag::Out => f.write_str("stdout"),
            StreamTag::Err => f.write_str("stderr"),
        }
    }
}

/// One line of child output, tagged with the pipe it arrived on.
///
/// `text` holds the line without its terminator; whether the line was
/// actually terminated is recorded separately so the raw bytes can be
/// reconstructed exactly (a final unterminated line stays unterminated).
/// `Display` prints the raw form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLine {
    tag: StreamTag,
    text: String,
    newline: bool,
}

impl OutputLine {
    pub fn new(tag: StreamTag, text: impl Into<String>, newline: bool) -> Self {
        Self {
            tag,
            text: text.into(),
            newline,
        }
    }

    /// Build a line from the raw bytes of one `read_until` chunk.
    ///
    /// Only the trailing `\n` is split off; everything else (including a
    /// `\r` before it) is preserved as-is. Non-UTF-8 bytes are replaced.
    pub(crate) fn from_bytes(tag: StreamTag, bytes: &[u8]) -> Self {
        let (content, newline) = match bytes.split_last() {
            Some((&b'\n', rest)) => (rest, true),
            _ => (bytes, false),
        };
        Self {
            tag,
            text: String::from_utf8_lossy(content).into_owned(),
            newline,
        }
    }

    pub fn tag(&self) -> StreamTag {
        self.tag
    }

    /// Line content without its terminator.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn has_newline(&self) -> bool {
        self.newline
    }

    /// Consume the line, keeping only the terminator-stripped content.
    pub fn into_text(self) -> String {
        self.text
    }

    pub(crate) fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
}

impl fmt::Display for OutputLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)?;
        if self.newline {
            f.write_str("\n")?;
        }
        Ok(())
    }
}
