use serde::{Deserialize, Serialize};

use super::Address;

/// Hover, selection, and the value in the edit box.
///
/// Owned by the tracker; the front-end only ever sees snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionState {
    /// Last address the pointer moved over. Not bounds-checked.
    pub hovered: Option<Address>,
    /// Address of the committed click, always valid for the current table.
    pub selected: Option<Address>,
    /// Text in the edit box; the selected value after a click.
    pub pending_edit_value: String,
}

impl SelectionState {
    /// Nothing hovered or selected, edit box showing `placeholder`.
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            hovered: None,
            selected: None,
            pending_edit_value: placeholder.into(),
        }
    }

    pub fn is_selected(&self, address: Address) -> bool {
        self.selected == Some(address)
    }
}
