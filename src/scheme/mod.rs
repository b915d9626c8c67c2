//! Gogh color scheme documents
//!
//! A Gogh scheme is a flat YAML mapping such as:
//!
//! ```yaml
//! name: 'Dracula'
//! color_01: '#282A36'
//! # ...
//! color_16: '#FFFFFF'
//! background: '#282A36'
//! foreground: '#F8F8F2'
//! ```
//!
//! The document is kept as a generic mapping; fields are only checked when
//! they are looked up.

use serde_yaml::{Mapping, Value};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum SchemeError {
    #[error("Failed to parse scheme YAML")]
    Parse(#[from] serde_yaml::Error),

    #[error("Scheme document must be a mapping, found {0}")]
    NotAMapping(&'static str),

    #[error("Scheme is missing required field: {0}")]
    MissingField(String),
}

/// A parsed Gogh scheme
#[derive(Debug, Clone, PartialEq)]
pub struct GoghDocument {
    fields: Mapping,
}

impl GoghDocument {
    /// Parse scheme text. Fails on malformed YAML or a non-mapping document.
    pub fn parse(text: &str) -> Result<Self, SchemeError> {
        let value: Value = serde_yaml::from_str(text)?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self, SchemeError> {
        match value {
            Value::Mapping(fields) => {
                debug!(fields = fields.len(), "parsed scheme document");
                Ok(Self { fields })
            }
            Value::Tagged(tagged) => Self::from_value(tagged.value),
            other => Err(SchemeError::NotAMapping(kind_of(&other))),
        }
    }

    /// Look up a field and render it as text.
    /// Strings come back untouched; anything else is printed as YAML.
    pub fn field(&self, key: &str) -> Result<String, SchemeError> {
        let value = self
            .fields
            .get(key)
            .ok_or_else(|| SchemeError::MissingField(key.to_string()))?;
        render_value(value)
    }

    /// The scheme's display name
    pub fn name(&self) -> Result<String, SchemeError> {
        self.field("name")
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }
}

fn render_value(value: &Value) -> Result<String, SchemeError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        other => Ok(serde_yaml::to_string(other)?.trim_end().to_string()),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}
