//! Rule CSV export.
//!
//! Unedited documents are returned byte-identical; edited ones are
//! re-serialized from the table.

pub(crate) mod rule_writer;

pub use rule_writer::write_rule;

use crate::types::Table;

/// Produce the text to save for `table`.
///
/// `original` is the text the table was parsed from. If nothing was edited
/// it is returned as-is, keeping its original line endings.
pub fn save_rule(original: &str, table: &Table, dirty: bool) -> String {
    if !dirty {
        return original.to_string();
    }
    write_rule(table)
}
