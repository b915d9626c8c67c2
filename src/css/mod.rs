//! CSS custom-property output for Gogh schemes

use std::io;

use thiserror::Error;
use tracing::debug;

use crate::scheme::{GoghDocument, SchemeError};

/// Scheme field to CSS property, in output order
pub const FIELD_MAPPINGS: [(&str, &str); 18] = [
    ("color_01", "--ts-black"),
    ("color_02", "--ts-red"),
    ("color_03", "--ts-green"),
    ("color_04", "--ts-yellow"),
    ("color_05", "--ts-blue"),
    ("color_06", "--ts-magenta"),
    ("color_07", "--ts-cyan"),
    ("color_08", "--ts-white"),
    ("color_09", "--ts-bright-black"),
    ("color_10", "--ts-bright-red"),
    ("color_11", "--ts-bright-green"),
    ("color_12", "--ts-bright-yellow"),
    ("color_13", "--ts-bright-blue"),
    ("color_14", "--ts-bright-magenta"),
    ("color_15", "--ts-bright-cyan"),
    ("color_16", "--ts-bright-white"),
    ("background", "--ts-background"),
    ("foreground", "--ts-foreground"),
];

#[derive(Error, Debug)]
pub enum EmitError {
    #[error(transparent)]
    Scheme(#[from] SchemeError),

    #[error("Failed to write CSS")]
    Write(#[from] io::Error),
}

/// Render the header comment and all property lines.
/// Any failed lookup aborts before a partial block is produced.
pub fn render(doc: &GoghDocument) -> Result<String, SchemeError> {
    let mut css = String::new();

    css.push_str(&format!("/* Gogh colorscheme: {} */\n", doc.name()?));

    for (field, property) in FIELD_MAPPINGS {
        let value = doc.field(field)?;
        css.push_str(&format!("{}: {};\n", property, value));
    }

    debug!(properties = FIELD_MAPPINGS.len(), "rendered css block");
    Ok(css)
}

/// Render the block and write it out in one go
pub fn write_css<W: io::Write>(doc: &GoghDocument, mut out: W) -> Result<(), EmitError> {
    let css = render(doc)?;
    out.write_all(css.as_bytes())?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_scheme(name: &str) -> String {
        let mut yaml = format!("name: '{}'\nauthor: 'Someone'\nvariant: 'dark'\n", name);
        for i in 1..=16 {
            yaml.push_str(&format!("color_{:02}: '#{:06X}'\n", i, i * 0x10));
        }
        yaml.push_str("background: '#1E1F29'\nforeground: '#F8F8F2'\ncursor: '#BBBBBB'\n");
        yaml
    }

    #[test]
    fn test_render_full_scheme() {
        let doc = GoghDocument::parse(&full_scheme("Test")).unwrap();
        let css = render(&doc).unwrap();
        let lines: Vec<&str> = css.lines().collect();

        assert_eq!(lines.len(), 19);
        assert_eq!(lines[0], "/* Gogh colorscheme: Test */");
        assert_eq!(lines[1], "--ts-black: #000010;");
        assert_eq!(lines[2], "--ts-red: #000020;");
        assert_eq!(lines[16], "--ts-bright-white: #000100;");
        assert_eq!(lines[17], "--ts-background: #1E1F29;");
        assert_eq!(lines[18], "--ts-foreground: #F8F8F2;");
        assert!(css.ends_with(";\n"));
    }

    #[test]
    fn test_render_follows_mapping_order() {
        let doc = GoghDocument::parse(&full_scheme("Order")).unwrap();
        let css = render(&doc).unwrap();

        for (line, (_, property)) in css.lines().skip(1).zip(FIELD_MAPPINGS) {
            assert!(line.starts_with(&format!("{}: ", property)), "{line}");
            assert!(line.ends_with(';'));
        }
    }

    #[test]
    fn test_values_emitted_verbatim() {
        let yaml = full_scheme("Verbatim").replace("color_05: '#000050'", "color_05: 'not-a-color'");
        let doc = GoghDocument::parse(&yaml).unwrap();
        let css = render(&doc).unwrap();
        assert!(css.contains("--ts-blue: not-a-color;\n"));
    }

    #[test]
    fn test_unquoted_hash_passes_through() {
        let yaml = full_scheme("Comment").replace("color_01: '#000010'", "color_01: #000010");
        let doc = GoghDocument::parse(&yaml).unwrap();
        let css = render(&doc).unwrap();
        assert!(css.contains("--ts-black: null;\n"));
        assert_eq!(css.lines().count(), 19);
    }

    #[test]
    fn test_missing_color_fails() {
        let yaml = full_scheme("Broken").replace("color_07: '#000070'\n", "");
        let doc = GoghDocument::parse(&yaml).unwrap();

        match render(&doc) {
            Err(SchemeError::MissingField(key)) => assert_eq!(key, "color_07"),
            other => panic!("Expected missing field, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_name_fails() {
        let yaml = full_scheme("Nameless").replace("name: 'Nameless'\n", "");
        let doc = GoghDocument::parse(&yaml).unwrap();
        assert!(matches!(render(&doc), Err(SchemeError::MissingField(_))));
    }

    #[test]
    fn test_write_css_writes_nothing_on_error() {
        let yaml = full_scheme("Partial").replace("foreground: '#F8F8F2'\n", "");
        let doc = GoghDocument::parse(&yaml).unwrap();
        let mut out = Vec::new();

        let err = write_css(&doc, &mut out).unwrap_err();

        assert!(matches!(err, EmitError::Scheme(SchemeError::MissingField(_))));
        assert!(out.is_empty());
    }

    #[test]
    fn test_write_css() {
        let doc = GoghDocument::parse(&full_scheme("Out")).unwrap();
        let mut out = Vec::new();
        write_css(&doc, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), render(&doc).unwrap());
    }
}
