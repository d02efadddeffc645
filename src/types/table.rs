use serde::{Deserialize, Serialize};

use super::Address;
use crate::error::{Result, XteError};

/// The atomic editable unit. Values are never coerced; numbers stay text.
pub type Cell = String;

/// One parsed line. Rows in the same section may differ in length.
pub type Row = Vec<Cell>;

/// A contiguous group of rows opened by a recognized label line.
///
/// The first cell of the first row is the section label
/// (e.g. `METADATA.NAME`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Section {
    rows: Vec<Row>,
}

impl Section {
    pub(crate) fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    pub(crate) fn push_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// The label cell (first cell of the first row), if present.
    pub fn label(&self) -> Option<&str> {
        self.rows.first()?.first().map(String::as_str)
    }
}

/// A parsed rule document: sections of rows of cells.
///
/// All reads and writes go through [`Table::get`] and [`Table::set`], so the
/// `(section, row, cell)` addressing scheme is the only way in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Table {
    sections: Vec<Section>,
}

impl Table {
    pub fn new(sections: Vec<Section>) -> Self {
        Self { sections }
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Number of rows in a section, or `None` if the section doesn't exist.
    pub fn row_count(&self, section: usize) -> Option<usize> {
        self.sections.get(section).map(|s| s.rows.len())
    }

    /// Number of cells in a row, or `None` if the row doesn't exist.
    pub fn cell_count(&self, section: usize, row: usize) -> Option<usize> {
        self.sections
            .get(section)?
            .rows
            .get(row)
            .map(Vec::len)
    }

    /// Total number of rows across all sections.
    pub fn total_rows(&self) -> usize {
        self.sections.iter().map(|s| s.rows.len()).sum()
    }

    /// Read the cell at `address`.
    ///
    /// # Errors
    /// Returns [`XteError::AddressOutOfRange`] if any index is past its bound.
    pub fn get(&self, address: Address) -> Result<&str> {
        self.sections
            .get(address.section)
            .and_then(|s| s.rows.get(address.row))
            .and_then(|r| r.get(address.cell))
            .map(String::as_str)
            .ok_or(XteError::AddressOutOfRange { address })
    }

    /// Return a copy of the table with the cell at `address` replaced.
    ///
    /// Only the addressed cell changes; no row, section, or cell is added or
    /// removed.
    ///
    /// # Errors
    /// Returns [`XteError::AddressOutOfRange`] if any index is past its bound.
    pub fn set(&self, address: Address, value: impl Into<String>) -> Result<Table> {
        let mut table = self.clone();
        *table.cell_mut(address)? = value.into();
        Ok(table)
    }

    fn cell_mut(&mut self, address: Address) -> Result<&mut Cell> {
        self.sections
            .get_mut(address.section)
            .and_then(|s| s.rows.get_mut(address.row))
            .and_then(|r| r.get_mut(address.cell))
            .ok_or(XteError::AddressOutOfRange { address })
    }

    /// Display title for a section, derived from its label.
    ///
    /// `METADATA.RULE_NAME` with suffix `" Subtable"` becomes
    /// `"Metadata Rule_name Subtable"`.
    ///
    /// # Errors
    /// Returns [`XteError::AddressOutOfRange`] if the section doesn't exist,
    /// has no rows, or its first row has no cells.
    pub fn section_title(&self, section: usize, suffix: &str) -> Result<String> {
        let label = self.get(Address::new(section, 0, 0))?;
        let words: Vec<String> = label.split('.').map(capitalize).collect();
        Ok(format!("{}{suffix}", words.join(" ")))
    }

    /// Whether the address falls on a section's label row.
    pub fn is_header(&self, address: Address) -> bool {
        address.row == 0 && self.get(address).is_ok()
    }
}

/// Upper-case the first character, lower-case the rest.
fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Row {
        cells.iter().map(|c| (*c).to_string()).collect()
    }

    fn sample() -> Table {
        Table::new(vec![
            Section::new(vec![row(&["METADATA.RULE_NAME", "foo"]), row(&["x", "y", ""])]),
            Section::new(vec![row(&["INPUT.A", "1"]), row(&["z"])]),
        ])
    }

    #[test]
    fn test_get_in_range() {
        let table = sample();
        assert_eq!(table.get(Address::new(0, 0, 1)).unwrap(), "foo");
        assert_eq!(table.get(Address::new(0, 1, 2)).unwrap(), "");
        assert_eq!(table.get(Address::new(1, 1, 0)).unwrap(), "z");
    }

    #[test]
    fn test_get_out_of_range() {
        let table = sample();
        for address in [
            Address::new(99, 0, 0),
            Address::new(0, 2, 0),
            Address::new(1, 1, 1),
        ] {
            assert!(matches!(
                table.get(address),
                Err(XteError::AddressOutOfRange { address: a }) if a == address
            ));
        }
    }

    #[test]
    fn test_set_touches_only_one_cell() {
        let table = sample();
        let addr = Address::new(1, 0, 1);
        let edited = table.set(addr, "42").unwrap();

        assert_eq!(edited.get(addr).unwrap(), "42");
        assert_eq!(table.get(addr).unwrap(), "1");

        let restored = edited.set(addr, "1").unwrap();
        assert_eq!(restored, table);
    }

    #[test]
    fn test_set_out_of_range_leaves_shape() {
        let table = sample();
        assert!(table.set(Address::new(0, 1, 3), "x").is_err());
        assert_eq!(table.cell_count(0, 1), Some(3));
    }

    #[test]
    fn test_section_title() {
        let table = sample();
        assert_eq!(
            table.section_title(0, " Subtable").unwrap(),
            "Metadata Rule_name Subtable"
        );
        assert_eq!(table.section_title(1, " Subtable").unwrap(), "Input A Subtable");
        assert!(table.section_title(2, " Subtable").is_err());
    }

    #[test]
    fn test_section_title_requires_a_label_cell() {
        let table = Table::new(vec![Section::new(vec![])]);
        assert!(table.section_title(0, "").is_err());

        let table = Table::new(vec![Section::new(vec![Vec::new()])]);
        assert!(table.section_title(0, "").is_err());
    }

    #[test]
    fn test_bounds_helpers() {
        let table = sample();
        assert_eq!(table.section_count(), 2);
        assert_eq!(table.row_count(0), Some(2));
        assert_eq!(table.row_count(5), None);
        assert_eq!(table.cell_count(1, 1), Some(1));
        assert_eq!(table.total_rows(), 4);
        assert_eq!(table.sections()[1].label(), Some("INPUT.A"));
        assert!(table.is_header(Address::new(0, 0, 1)));
        assert!(!table.is_header(Address::new(0, 1, 1)));
    }

    #[test]
    fn test_serializes_as_nested_arrays() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert_eq!(
            json,
            r#"[[["METADATA.RULE_NAME","foo"],["x","y",""]],[["INPUT.A","1"],["z"]]]"#
        );
    }
}
