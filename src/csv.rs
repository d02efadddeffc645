//! Rule CSV parser that produces a sectioned [`Table`].
//!
//! Lines are split on commas outside double-quoted spans; quotes are kept
//! verbatim in the cells so the document can be written back unchanged.
//! A line starting with one of the configured section prefixes opens a new
//! section, and every line (the opener included) is appended to the
//! currently open section.

use crate::config::EditorConfig;
use crate::error::{Result, XteError};
use crate::types::{Row, Section, Table};

/// Parse a rule document using the default section prefixes.
///
/// # Errors
/// Returns [`XteError::MalformedDocument`] if the first line does not open a
/// section.
pub fn parse_rule(text: &str) -> Result<Table> {
    parse_rule_with(text, &EditorConfig::default())
}

/// Parse a rule document, recognizing sections by `config.section_prefixes`.
///
/// # Errors
/// Returns [`XteError::MalformedDocument`] if the first line does not open a
/// section.
pub fn parse_rule_with(text: &str, config: &EditorConfig) -> Result<Table> {
    let normalized = normalize_newlines(text);
    let mut sections: Vec<Section> = Vec::new();

    for (idx, line) in normalized.split('\n').enumerate() {
        if config.starts_section(line) {
            sections.push(Section::default());
        }
        let Some(section) = sections.last_mut() else {
            return Err(XteError::MalformedDocument {
                line: idx + 1,
                content: line.to_string(),
            });
        };
        section.push_row(split_row(line));
    }

    Ok(Table::new(sections))
}

/// Replace `\r\n` and lone `\r` with `\n`.
fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Split one line into cells.
///
/// A comma separates cells only when the rest of the line after it holds an
/// even number of `"` characters, i.e. the comma is not inside a quoted span.
/// Quotes are not unescaped and trailing empty cells are kept, so an empty
/// line yields a single empty cell.
pub fn split_row(line: &str) -> Row {
    let mut quotes_after = line.bytes().filter(|&b| b == b'"').count();
    let mut cells = Vec::new();
    let mut start = 0;

    for (idx, ch) in line.char_indices() {
        match ch {
            '"' => quotes_after -= 1,
            ',' if quotes_after % 2 == 0 => {
                cells.push(line.get(start..idx).unwrap_or_default().to_string());
                start = idx + 1;
            }
            _ => {}
        }
    }
    cells.push(line.get(start..).unwrap_or_default().to_string());
    cells
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing
)]
mod tests {
    use super::*;

    #[test]
    fn test_split_quoted_comma() {
        assert_eq!(split_row(r#"a,"b,c",d"#), vec!["a", r#""b,c""#, "d"]);
    }

    #[test]
    fn test_split_keeps_trailing_empty_cells() {
        assert_eq!(split_row("a,b,,"), vec!["a", "b", "", ""]);
        assert_eq!(split_row(""), vec![""]);
        assert_eq!(split_row(","), vec!["", ""]);
    }

    #[test]
    fn test_split_escaped_quotes_stay_verbatim() {
        assert_eq!(
            split_row(r#"x,"she said ""hi, there""",y"#),
            vec!["x", r#""she said ""hi, there""""#, "y"]
        );
    }

    #[test]
    fn test_split_unbalanced_quote_counts_from_line_end() {
        // One quote total: commas before it see an odd count and don't split,
        // commas after it see zero and do.
        assert_eq!(split_row(r#"a,b"c,d"#), vec![r#"a,b"c"#, "d"]);
    }

    #[test]
    fn test_split_multibyte() {
        assert_eq!(split_row("é,\"ü,ß\",ñ"), vec!["é", "\"ü,ß\"", "ñ"]);
    }

    #[test]
    fn test_section_boundaries() {
        let table = parse_rule("METADATA.NAME,foo\nx,y\nINPUT.A,1\nz,w").unwrap();
        assert_eq!(table.section_count(), 2);
        assert_eq!(table.row_count(0), Some(2));
        assert_eq!(table.row_count(1), Some(2));
        assert_eq!(table.sections()[1].rows()[0], vec!["INPUT.A", "1"]);
    }

    #[test]
    fn test_line_endings_normalized() {
        let unix = parse_rule("METADATA.A,1\nx\nOUTPUT.B,2").unwrap();
        let dos = parse_rule("METADATA.A,1\r\nx\r\nOUTPUT.B,2").unwrap();
        let mac = parse_rule("METADATA.A,1\rx\rOUTPUT.B,2").unwrap();
        let mixed = parse_rule("METADATA.A,1\r\nx\rOUTPUT.B,2").unwrap();
        assert_eq!(unix, dos);
        assert_eq!(unix, mac);
        assert_eq!(unix, mixed);
    }

    #[test]
    fn test_trailing_newline_is_an_empty_row() {
        let table = parse_rule("METADATA.A,1\n").unwrap();
        assert_eq!(table.row_count(0), Some(2));
        assert_eq!(table.sections()[0].rows()[1], vec![""]);
    }

    #[test]
    fn test_first_line_must_open_a_section() {
        let err = parse_rule("x,y\nMETADATA.A,1").unwrap_err();
        assert!(matches!(
            err,
            XteError::MalformedDocument { line: 1, ref content } if content == "x,y"
        ));
    }

    #[test]
    fn test_empty_document_is_malformed() {
        assert!(matches!(
            parse_rule(""),
            Err(XteError::MalformedDocument { line: 1, .. })
        ));
    }

    #[test]
    fn test_custom_prefixes() {
        let config = EditorConfig {
            section_prefixes: vec!["RULE.".to_string()],
            ..EditorConfig::default()
        };
        let table = parse_rule_with("RULE.A\nMETADATA.B\nRULE.C", &config).unwrap();
        assert_eq!(table.section_count(), 2);
        assert_eq!(table.row_count(0), Some(2));
    }
}
