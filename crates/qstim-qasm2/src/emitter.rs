//! Stim text writer with run compaction.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Line terminator written between Stim lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    /// `\n`
    #[default]
    Lf,
    /// `\r\n`
    Crlf,
}

impl LineEnding {
    /// The terminator bytes.
    pub fn as_bytes(self) -> &'static [u8] {
        match self {
            LineEnding::Lf => b"\n",
            LineEnding::Crlf => b"\r\n",
        }
    }
}

impl fmt::Display for LineEnding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineEnding::Lf => write!(f, "lf"),
            LineEnding::Crlf => write!(f, "crlf"),
        }
    }
}

impl FromStr for LineEnding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lf" | "unix" => Ok(LineEnding::Lf),
            "crlf" | "windows" => Ok(LineEnding::Crlf),
            other => Err(format!("Unknown line ending: '{other}'. Available: lf, crlf")),
        }
    }
}

/// Options controlling the shape of the Stim output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslateOptions {
    /// Terminator used for every output line.
    pub line_ending: LineEnding,
}

/// Append-only Stim writer.
///
/// Consecutive gates with the same Stim mnemonic share one output line:
/// `H 0` followed by `H 1` is written as `H 0 1`.
#[derive(Debug)]
pub(crate) struct StimWriter {
    output: Vec<u8>,
    line_ending: LineEnding,
    /// Mnemonic of the current run, if any.
    prev: Option<&'static str>,
    /// Whether a gate line has been started and not yet terminated.
    line_open: bool,
    lines: usize,
}

impl StimWriter {
    /// `capacity` is only a hint; the buffer grows as needed.
    pub(crate) fn new(capacity: usize, options: &TranslateOptions) -> Self {
        Self {
            output: Vec::with_capacity(capacity),
            line_ending: options.line_ending,
            prev: None,
            line_open: false,
            lines: 0,
        }
    }

    /// Write a `#<count>` header line at the current position.
    pub(crate) fn header(&mut self, count: &[u8]) {
        self.close_line();
        self.output.push(b'#');
        self.output.extend_from_slice(count);
        self.newline();
        self.prev = None;
    }

    /// End the current run so the next gate starts a fresh line.
    pub(crate) fn break_run(&mut self) {
        self.prev = None;
    }

    /// Start a gate. Returns `true` if it was fused onto the current line.
    pub(crate) fn begin_gate(&mut self, stim: &'static str) -> bool {
        if self.prev == Some(stim) {
            self.output.push(b' ');
            return true;
        }

        self.close_line();
        self.output.extend_from_slice(stim.as_bytes());
        self.output.push(b' ');
        self.line_open = true;
        self.lines += 1;
        self.prev = Some(stim);
        false
    }

    /// Separator between operands of one statement.
    pub(crate) fn separator(&mut self) {
        self.output.push(b' ');
    }

    /// Direct access for copying operand digits.
    pub(crate) fn buffer(&mut self) -> &mut Vec<u8> {
        &mut self.output
    }

    /// Number of gate lines started so far.
    pub(crate) fn lines(&self) -> usize {
        self.lines
    }

    /// Write the final line terminator and hand back the bytes.
    ///
    /// The terminator is always written: it ends the open gate line, or
    /// stands alone after a header or on empty input.
    pub(crate) fn finish(mut self) -> Vec<u8> {
        self.newline();
        self.output
    }

    fn close_line(&mut self) {
        if self.line_open {
            self.newline();
            self.line_open = false;
        }
    }

    fn newline(&mut self) {
        self.output.extend_from_slice(self.line_ending.as_bytes());
    }
}
