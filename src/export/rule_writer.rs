//! Writes a [`Table`] back to rule CSV text.
//!
//! Cells keep their quotes verbatim, so joining with `,` and `\n` inverts
//! [`parse_rule`](crate::csv::parse_rule) for any newline-normalized input.

use crate::types::Table;

/// Serialize `table`: cells joined by `,`, rows by `\n`, sections in order.
pub fn write_rule(table: &Table) -> String {
    let mut out = String::new();
    for (idx, row) in table
        .sections()
        .iter()
        .flat_map(|s| s.rows().iter())
        .enumerate()
    {
        if idx > 0 {
            out.push('\n');
        }
        out.push_str(&row.join(","));
    }
    out
}
