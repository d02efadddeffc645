//! Cell editing mutations.
//!
//! Commits the edit box value to the selected cell.

use super::EditorState;
use crate::error::Result;

/// Write `text` into the selected cell, then re-select it.
///
/// Re-selecting reads the value back from the new table, so the edit box
/// always shows what was committed. With nothing selected the state is
/// returned unchanged. An empty `text` clears the cell.
///
/// # Errors
/// Returns [`XteError::AddressOutOfRange`](crate::error::XteError) if the
/// selected address does not fit the table.
pub(crate) fn submit_edit(state: &EditorState, text: &str) -> Result<EditorState> {
    let Some(address) = state.selection.selected else {
        log::debug!("Ignoring submit: no cell selected");
        return Ok(state.clone());
    };

    log::debug!("Updating cell [{address}] with content {text:?}");
    let next = EditorState {
        table: state.table.set(address, text)?,
        selection: state.selection.clone(),
    };
    Ok(next.click(address))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::config::EditorConfig;
    use crate::csv::parse_rule;
    use crate::types::Address;

    fn state() -> EditorState {
        let table = parse_rule("METADATA.NAME,foo\nx,y").unwrap();
        EditorState::new(table, &EditorConfig::default())
    }

    #[test]
    fn test_submit_writes_and_resyncs() {
        let addr = Address::new(0, 1, 0);
        let next = submit_edit(&state().click(addr).input("typed"), "X").unwrap();
        assert_eq!(next.table.get(addr).unwrap(), "X");
        assert_eq!(next.selection.pending_edit_value, "X");
        assert_eq!(next.selection.selected, Some(addr));
    }

    #[test]
    fn test_submit_without_selection_is_noop() {
        let before = state();
        let after = submit_edit(&before, "X").unwrap();
        assert_eq!(after, before);
    }

    #[test]
    fn test_submit_empty_clears_cell() {
        let addr = Address::new(0, 0, 1);
        let next = submit_edit(&state().click(addr), "").unwrap();
        assert_eq!(next.table.get(addr).unwrap(), "");
        assert_eq!(next.table.cell_count(0, 0), Some(2));
    }

    #[test]
    fn test_submit_keeps_hover() {
        let hovered = Address::new(0, 0, 0);
        let addr = Address::new(0, 1, 1);
        let next = submit_edit(&state().hover(hovered).click(addr), "z").unwrap();
        assert_eq!(next.selection.hovered, Some(hovered));
    }
}
