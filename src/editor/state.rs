//! Hover/selection tracker.
//!
//! [`EditorState`] bundles the table with its [`SelectionState`]. Every
//! transition takes the current state by reference and returns the next one,
//! so a caller can keep or discard either.

use serde::Serialize;

use super::mutation;
use crate::config::EditorConfig;
use crate::error::Result;
use crate::types::{Address, SelectionState, Table};

/// Interaction events forwarded by the front-end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorEvent {
    /// Pointer moved over a cell; `None` clears the hover.
    Hover(Option<Address>),
    /// Cell clicked.
    Click(Address),
    /// Edit box text changed (not committed).
    Input(String),
    /// Edit box submitted.
    Submit(String),
    /// A new table replaced the old one.
    Reset(Table),
}

/// One loaded table plus the selection state that refers to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditorState {
    pub table: Table,
    pub selection: SelectionState,
}

impl EditorState {
    /// Initial state for `table`: nothing hovered or selected.
    pub fn new(table: Table, config: &EditorConfig) -> Self {
        Self {
            table,
            selection: SelectionState::new(config.placeholder.as_str()),
        }
    }

    /// Apply one event and return the resulting state.
    ///
    /// # Errors
    /// Only [`EditorEvent::Submit`] can fail, and only if the selected
    /// address no longer fits the table.
    pub fn apply(&self, event: EditorEvent, config: &EditorConfig) -> Result<Self> {
        match event {
            EditorEvent::Hover(address) => Ok(self.hover(address)),
            EditorEvent::Click(address) => Ok(self.click(address)),
            EditorEvent::Input(text) => Ok(self.input(text)),
            EditorEvent::Submit(text) => mutation::submit_edit(self, &text),
            EditorEvent::Reset(table) => Ok(Self::new(table, config)),
        }
    }

    /// Record the hovered address, or clear it with `None`.
    ///
    /// Bounds are not checked here.
    pub fn hover(&self, address: impl Into<Option<Address>>) -> Self {
        let address = address.into();
        log::trace!("Hovering over {address:?}");
        let mut next = self.clone();
        next.selection.hovered = address;
        next
    }

    /// Select `address` and load its value into the edit box.
    ///
    /// An address outside the table leaves the state unchanged.
    pub fn click(&self, address: Address) -> Self {
        let mut next = self.clone();
        match self.table.get(address) {
            Ok(value) => {
                log::debug!("Clicked on cell [{address}] with value {value:?}");
                next.selection.selected = Some(address);
                next.selection.pending_edit_value = value.to_string();
            }
            Err(e) => log::debug!("Ignoring click: {e}"),
        }
        next
    }

    /// Replace the edit box text without committing it.
    pub fn input(&self, text: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.selection.pending_edit_value = text.into();
        next
    }

    /// Value at the selected address, if any.
    pub fn selected_value(&self) -> Option<&str> {
        self.table.get(self.selection.selected?).ok()
    }

    /// Status line for the selection panel.
    ///
    /// `Selected [ s, r, c ] =>  value` when a cell is selected, with
    /// `config.empty_cell_label` standing in for an empty value, and the
    /// welcome message otherwise.
    pub fn cell_message(&self, config: &EditorConfig) -> String {
        let Some(address) = self.selection.selected else {
            return config.welcome_message.clone();
        };
        let value = match self.selected_value() {
            Some(v) if !v.is_empty() => v,
            _ => config.empty_cell_label.as_str(),
        };
        format!("Selected [ {address} ] =>  {value}")
    }

    /// Status line for the hover indicator.
    pub fn hover_message(&self) -> String {
        let coords = self
            .selection
            .hovered
            .map(|a| a.to_string())
            .unwrap_or_default();
        format!("Hovering over [ {coords} ]")
    }
}
