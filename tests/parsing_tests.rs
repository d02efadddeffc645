//! Tests for rule parsing, addressing, and the write-back round trip.

#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]
mod tests {
    use test_case::test_case;
    use xte::types::{Address, Table};
    use xte::{parse_rule, split_row, write_rule, XteError};

    // ================================================================
    // Test helpers
    // ================================================================

    /// Get a rule document from the test/ directory.
    fn load_test_file(name: &str) -> String {
        std::fs::read_to_string(format!("test/{name}")).expect("test file should exist")
    }

    fn sample() -> Table {
        parse_rule(&load_test_file("xa-sample.rule.csv")).unwrap()
    }

    /// Every valid address in the table.
    fn all_addresses(table: &Table) -> Vec<Address> {
        let mut out = Vec::new();
        for (s, section) in table.sections().iter().enumerate() {
            for (r, row) in section.rows().iter().enumerate() {
                for c in 0..row.len() {
                    out.push(Address::new(s, r, c));
                }
            }
        }
        out
    }

    // ================================================================
    // Row splitting
    // ================================================================

    #[test_case("a,\"b,c\",d", &["a", "\"b,c\"", "d"] ; "quoted comma")]
    #[test_case("", &[""] ; "empty line")]
    #[test_case("a,,", &["a", "", ""] ; "trailing empties")]
    #[test_case("\"x\"", &["\"x\""] ; "quotes kept")]
    #[test_case(",\"1,000\"", &["", "\"1,000\""] ; "leading empty")]
    fn test_split_row(line: &str, expected: &[&str]) {
        assert_eq!(split_row(line), expected);
    }

    // ================================================================
    // Grouping
    // ================================================================

    #[test]
    fn test_sample_sections() {
        let table = sample();
        assert_eq!(table.section_count(), 5);
        assert_eq!(table.row_count(0), Some(1));
        assert_eq!(table.row_count(3), Some(3));
        // Trailing CRLF leaves one empty row in the last section.
        assert_eq!(table.row_count(4), Some(4));
        assert_eq!(table.sections()[4].rows()[3], vec![""]);
    }

    #[test]
    fn test_sample_cells_stay_verbatim() {
        let table = sample();
        assert_eq!(
            table.get(Address::new(2, 0, 1)).unwrap(),
            "\"jurisdiction, country\""
        );
        assert_eq!(table.get(Address::new(3, 1, 3)).unwrap(), "\"1,000\"");
        assert_eq!(
            table.get(Address::new(4, 2, 2)).unwrap(),
            "\"said \"\"registered\"\"\""
        );
        assert_eq!(table.get(Address::new(0, 0, 3)).unwrap(), "");
    }

    #[test]
    fn test_sample_titles() {
        let table = sample();
        let titles: Vec<String> = (0..table.section_count())
            .map(|s| table.section_title(s, " Subtable").unwrap())
            .collect();
        assert_eq!(
            titles,
            vec![
                "Metadata Rule_name Subtable",
                "Metadata Version Subtable",
                "Metadata Criteria Subtable",
                "Input Conditions Subtable",
                "Output Assertions Subtable",
            ]
        );
    }

    #[test]
    fn test_rows_partition_the_lines() {
        let text = load_test_file("xa-sample.rule.csv");
        let table = parse_rule(&text).unwrap();
        let lines = text.replace("\r\n", "\n").split('\n').count();
        assert_eq!(table.total_rows(), lines);
    }

    #[test_case("x,y\nMETADATA.A", 1 ; "plain first line")]
    #[test_case("\nMETADATA.A", 1 ; "blank first line")]
    #[test_case("metadata.a,1", 1 ; "lower case label")]
    fn test_malformed(text: &str, line: usize) {
        match parse_rule(text) {
            Err(XteError::MalformedDocument { line: l, .. }) => assert_eq!(l, line),
            other => panic!("expected MalformedDocument, got {other:?}"),
        }
    }

    // ================================================================
    // Addressing
    // ================================================================

    #[test]
    fn test_set_then_get_every_address() {
        let table = sample();
        for addr in all_addresses(&table) {
            let edited = table.set(addr, "X").unwrap();
            assert_eq!(edited.get(addr).unwrap(), "X");
            for other in all_addresses(&table) {
                if other != addr {
                    assert_eq!(edited.get(other).unwrap(), table.get(other).unwrap());
                }
            }
        }
    }

    #[test]
    fn test_out_of_range() {
        let table = sample();
        assert!(matches!(
            table.get(Address::new(99, 0, 0)),
            Err(XteError::AddressOutOfRange { .. })
        ));
        assert!(matches!(
            table.set(Address::new(0, 0, 4), "X"),
            Err(XteError::AddressOutOfRange { .. })
        ));
    }

    // ================================================================
    // Round trip
    // ================================================================

    #[test]
    fn test_round_trip_sample() {
        let table = sample();
        let reparsed = parse_rule(&write_rule(&table)).unwrap();
        assert_eq!(reparsed, table);
    }

    #[test]
    fn test_round_trip_normalized_text_is_exact() {
        let text = load_test_file("xa-sample.rule.csv").replace("\r\n", "\n");
        assert_eq!(write_rule(&parse_rule(&text).unwrap()), text);
    }

    #[test]
    fn test_round_trip_after_edit() {
        let table = sample()
            .set(Address::new(4, 1, 2), "\"0,08\"")
            .unwrap();
        let reparsed = parse_rule(&write_rule(&table)).unwrap();
        assert_eq!(reparsed, table);
    }
}
