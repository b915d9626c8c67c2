//! gogh-css - Convert Gogh terminal color schemes into CSS custom properties
//!
//! A Gogh scheme (YAML with `name`, `color_01`..`color_16`, `background` and
//! `foreground`) is read from stdin or files and printed as a block of
//! `--ts-*` CSS variables.
//!
//! ## Pipeline
//!
//! - **Input**: accumulate lines until two consecutive blank lines or end of input
//! - **Scheme**: parse the text as a YAML mapping
//! - **CSS**: emit a header comment and 18 properties in a fixed order

pub mod config;
pub mod css;
pub mod input;
pub mod scheme;

pub use config::{Config, ConfigError};
pub use css::{render, write_css, EmitError, FIELD_MAPPINGS};
pub use input::{Completion, InputAccumulator, InputError, InputSource, Prompt};
pub use scheme::{GoghDocument, SchemeError};

/// Convert scheme text into the CSS block
pub fn convert(text: &str) -> Result<String, SchemeError> {
    let doc = GoghDocument::parse(text)?;
    render(&doc)
}
