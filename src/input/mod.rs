//! Input accumulation for pasted or piped color schemes
//!
//! Lines are collected until two consecutive blank lines are seen or the
//! input runs out. Several inputs can be fed through the same accumulator;
//! they behave like one continuous stream.

mod prompt;

pub use prompt::{Prompt, PROMPT_MESSAGE};

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Number of consecutive blank lines that ends the input
pub const BLANK_LINE_TERMINATOR: usize = 2;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("Failed to open input {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read input")]
    Read(#[from] io::Error),
}

/// How a call to [`InputAccumulator::read_from`] ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The blank-line terminator fired; nothing further should be read
    Terminated,
    /// The reader hit end of input before the terminator
    Exhausted,
}

/// Where a line source comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    /// Build the source list from CLI arguments. No arguments means stdin,
    /// and `-` stands for stdin anywhere in the list.
    pub fn from_args(args: &[PathBuf]) -> Vec<Self> {
        if args.is_empty() {
            return vec![Self::Stdin];
        }

        args.iter()
            .map(|arg| {
                if arg.as_os_str() == "-" {
                    Self::Stdin
                } else {
                    Self::File(arg.clone())
                }
            })
            .collect()
    }

    pub fn is_stdin(&self) -> bool {
        matches!(self, Self::Stdin)
    }

    /// Open the source for line-by-line reading
    pub fn open(&self) -> Result<Box<dyn BufRead>, InputError> {
        match self {
            Self::Stdin => Ok(Box::new(io::stdin().lock())),
            Self::File(path) => open_file(path),
        }
    }
}

fn open_file(path: &Path) -> Result<Box<dyn BufRead>, InputError> {
    let file = File::open(path).map_err(|source| InputError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Box::new(BufReader::new(file)))
}

/// Collects input lines into a single document buffer
#[derive(Debug, Default)]
pub struct InputAccumulator {
    buffer: String,
    blank_run: usize,
    lines: usize,
}

impl InputAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one line (with its line ending, if any).
    /// Returns true once the blank-line terminator has fired.
    pub fn push_line(&mut self, line: &str) -> bool {
        self.buffer.push_str(line);
        self.lines += 1;

        if line.trim().is_empty() {
            self.blank_run += 1;
        } else {
            self.blank_run = 0;
        }

        self.is_terminated()
    }

    pub fn is_terminated(&self) -> bool {
        self.blank_run >= BLANK_LINE_TERMINATOR
    }

    /// Number of lines accumulated so far
    pub fn line_count(&self) -> usize {
        self.lines
    }

    /// Pull lines from `reader` until the terminator fires or the reader is empty
    pub fn read_from<R: BufRead>(&mut self, mut reader: R) -> Result<Completion, InputError> {
        if self.is_terminated() {
            return Ok(Completion::Terminated);
        }

        let mut line = String::new();
        loop {
            line.clear();
            if reader.read_line(&mut line)? == 0 {
                debug!(lines = self.lines, "input exhausted");
                return Ok(Completion::Exhausted);
            }

            if self.push_line(&line) {
                debug!(lines = self.lines, "blank-line terminator reached");
                return Ok(Completion::Terminated);
            }
        }
    }

    /// Read every source in order, stopping at the terminator.
    /// Sources after the terminator are never opened.
    pub fn read_sources(&mut self, sources: &[InputSource]) -> Result<Completion, InputError> {
        for source in sources {
            debug!(?source, "reading input");
            let reader = source.open()?;
            if self.read_from(reader)? == Completion::Terminated {
                return Ok(Completion::Terminated);
            }
        }
        Ok(Completion::Exhausted)
    }

    /// Consume the accumulator and return the collected text
    pub fn into_document(self) -> String {
        self.buffer
    }
}
