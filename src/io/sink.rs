use std::io::{self, Write};

/// Receives plain and error-styled text.
///
/// Used for the optional token and AST dumps and for rendering diagnostics.
pub trait OutputSink {
    /// Writes plain text.
    fn write(&mut self, text: &str);

    /// Writes text that should stand out as part of an error.
    fn write_error(&mut self, text: &str);
}

const ERROR_STYLE: &str = "\x1b[1;31m";
const RESET_STYLE: &str = "\x1b[0m";

/// Writes to standard output, styling error text with ANSI escapes.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleSink {
    color: bool,
}

impl ConsoleSink {
    /// Creates a console sink; with `color` off, error text is written plainly.
    #[must_use]
    pub const fn new(color: bool) -> Self {
        Self { color }
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new(true)
    }
}

impl OutputSink for ConsoleSink {
    fn write(&mut self, text: &str) {
        let mut out = io::stdout().lock();
        if let Err(e) = out.write_all(text.as_bytes()).and_then(|()| out.flush()) {
            tracing::warn!("failed to write to stdout: {e}");
        }
    }

    fn write_error(&mut self, text: &str) {
        if self.color {
            self.write(&format!("{ERROR_STYLE}{text}{RESET_STYLE}"));
        } else {
            self.write(text);
        }
    }
}

/// One piece of text written to a [`BufferSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text:  String,
    pub error: bool,
}

/// Collects everything written to it, keeping track of error styling.
#[derive(Debug, Clone, Default)]
pub struct BufferSink {
    segments: Vec<Segment>,
}

impl BufferSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// All text written so far, styling dropped.
    #[must_use]
    pub fn text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }

    /// Only the text written as errors, concatenated.
    #[must_use]
    pub fn error_text(&self) -> String {
        self.segments.iter().filter(|s| s.error).map(|s| s.text.as_str()).collect()
    }

    fn push(&mut self, text: &str, error: bool) {
        if text.is_empty() {
            return;
        }
        match self.segments.last_mut() {
            Some(last) if last.error == error => last.text.push_str(text),
            _ => self.segments.push(Segment { text: text.to_string(),
                                              error }),
        }
    }
}

impl OutputSink for BufferSink {
    fn write(&mut self, text: &str) {
        self.push(text, false);
    }

    fn write_error(&mut self, text: &str) {
        self.push(text, true);
    }
}
