//! Paste prompt shown before reading stdin

use crossterm::style::{Color, Stylize};
use std::io::{self, IsTerminal, Write};

pub const PROMPT_MESSAGE: &str = ":: Paste the yaml and click enter";

/// Writes the paste prompt, styled only when going to a terminal
pub struct Prompt {
    color: Option<Color>,
}

impl Prompt {
    pub fn new() -> Self {
        if io::stdout().is_terminal() {
            Self {
                color: Some(Color::Cyan),
            }
        } else {
            Self::plain()
        }
    }

    /// A prompt that never emits escape codes
    pub fn plain() -> Self {
        Self { color: None }
    }

    pub fn write_to<W: Write>(&self, mut out: W) -> io::Result<()> {
        match self.color {
            Some(color) => writeln!(out, "{}", PROMPT_MESSAGE.with(color))?,
            None => writeln!(out, "{}", PROMPT_MESSAGE)?,
        }
        out.flush()
    }

    /// Print the prompt on stdout
    pub fn show(&self) -> io::Result<()> {
        self.write_to(io::stdout().lock())
    }
}
