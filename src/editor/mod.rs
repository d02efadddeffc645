//! Rule editing session and its WebAssembly wrapper.
//!
//! [`Session`] holds the one loaded table and its selection state:
//! - Load replaces both wholesale, or nothing on failure
//! - Hover/click/input/submit go through [`EditorState::apply`]
//! - Save writes the document back (unchanged if nothing was edited)
//!
//! `XteEdit` exposes the same operations to JavaScript.

pub(crate) mod mutation;
mod state;

pub use state::{EditorEvent, EditorState};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

use crate::color;
use crate::config::EditorConfig;
use crate::csv::parse_rule_with;
use crate::export;
use crate::types::{Address, SelectionState, Table};

/// The state holder for one editor instance.
#[derive(Debug, Clone)]
pub struct Session {
    config: EditorConfig,
    state: EditorState,
    /// Text and table as last loaded, for clean saves and dirty checks.
    original: Option<(String, Table)>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl Session {
    /// An empty session: no table loaded.
    pub fn new(config: EditorConfig) -> Self {
        let state = EditorState::new(Table::default(), &config);
        Self {
            config,
            state,
            original: None,
        }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn table(&self) -> &Table {
        &self.state.table
    }

    pub fn selection(&self) -> &SelectionState {
        &self.state.selection
    }

    pub fn is_loaded(&self) -> bool {
        self.original.is_some()
    }

    /// Parse `text` and make it the current table, resetting the selection.
    ///
    /// # Errors
    /// Returns [`XteError::MalformedDocument`](crate::error::XteError) if
    /// the text doesn't start with a section; the session is left as it was.
    pub fn load(&mut self, text: &str) -> crate::error::Result<()> {
        let table = match parse_rule_with(text, &self.config) {
            Ok(table) => table,
            Err(e) => {
                log::warn!("Rejected rule document: {e}");
                return Err(e);
            }
        };
        log::info!(
            "Loaded rule with {} sections and {} rows",
            table.section_count(),
            table.total_rows()
        );
        self.dispatch(EditorEvent::Reset(table.clone()))?;
        self.original = Some((text.to_string(), table));
        Ok(())
    }

    /// Drop the loaded table and return to the empty session.
    ///
    /// # Errors
    /// Propagates errors from [`EditorState::apply`].
    pub fn clear(&mut self) -> crate::error::Result<()> {
        self.dispatch(EditorEvent::Reset(Table::default()))?;
        self.original = None;
        Ok(())
    }

    /// Apply an event; on error the previous state is kept.
    ///
    /// Every transition goes through here.
    ///
    /// # Errors
    /// Propagates errors from [`EditorState::apply`].
    pub fn dispatch(&mut self, event: EditorEvent) -> crate::error::Result<()> {
        self.state = self.state.apply(event, &self.config)?;
        Ok(())
    }

    /// Record the hovered address; `None` clears the hover.
    ///
    /// # Errors
    /// Propagates errors from [`EditorState::apply`].
    pub fn hover(&mut self, address: impl Into<Option<Address>>) -> crate::error::Result<()> {
        self.dispatch(EditorEvent::Hover(address.into()))
    }

    /// Select `address`; out-of-range clicks leave the selection alone.
    ///
    /// # Errors
    /// Propagates errors from [`EditorState::apply`].
    pub fn click(&mut self, address: Address) -> crate::error::Result<()> {
        self.dispatch(EditorEvent::Click(address))
    }

    /// Replace the edit box text without committing it.
    ///
    /// # Errors
    /// Propagates errors from [`EditorState::apply`].
    pub fn input(&mut self, text: &str) -> crate::error::Result<()> {
        self.dispatch(EditorEvent::Input(text.to_string()))
    }

    /// Commit `text` to the selected cell.
    ///
    /// # Errors
    /// Propagates errors from [`EditorState::apply`].
    pub fn submit(&mut self, text: &str) -> crate::error::Result<()> {
        self.dispatch(EditorEvent::Submit(text.to_string()))
    }

    /// Whether the table differs from what was loaded.
    pub fn is_dirty(&self) -> bool {
        self.original
            .as_ref()
            .is_some_and(|(_, table)| *table != self.state.table)
    }

    /// Text to write back, or `None` if nothing is loaded.
    pub fn save(&self) -> Option<String> {
        let (text, _) = self.original.as_ref()?;
        Some(export::save_rule(text, &self.state.table, self.is_dirty()))
    }

    /// Display titles for every section, in order.
    ///
    /// # Errors
    /// Returns [`XteError::AddressOutOfRange`](crate::error::XteError) for a
    /// section without a label cell.
    pub fn section_titles(&self) -> crate::error::Result<Vec<String>> {
        (0..self.state.table.section_count())
            .map(|s| self.state.table.section_title(s, &self.config.title_suffix))
            .collect()
    }

    /// Background color for the cell at `address`.
    ///
    /// # Errors
    /// Propagates [`color::cell_background`] errors.
    pub fn cell_background(&self, address: Address) -> crate::error::Result<String> {
        color::cell_background(&self.config, &self.state.selection, address)
    }

    pub fn cell_message(&self) -> String {
        self.state.cell_message(&self.config)
    }

    pub fn hover_message(&self) -> String {
        self.state.hover_message()
    }
}

// ============================================================================
// WASM32 Implementation
// ============================================================================

/// The editor struct exported to JavaScript.
///
/// Rendering stays in JavaScript: it reads snapshots (`table_json`,
/// `selection_json`, titles, colors) and forwards pointer and form events.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub struct XteEdit {
    session: Session,
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
impl XteEdit {
    /// Create an editor. `config_json` may be empty for defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str) -> Result<XteEdit, JsValue> {
        console_error_panic_hook::set_once();
        let config = if config_json.trim().is_empty() {
            EditorConfig::default()
        } else {
            EditorConfig::from_json(config_json)?
        };
        Ok(XteEdit {
            session: Session::new(config),
        })
    }

    /// Load rule text, replacing the current table.
    #[wasm_bindgen]
    pub fn load(&mut self, text: &str) -> Result<(), JsValue> {
        Ok(self.session.load(text)?)
    }

    /// Drop the current table.
    #[wasm_bindgen]
    pub fn reset(&mut self) -> Result<(), JsValue> {
        Ok(self.session.clear()?)
    }

    #[wasm_bindgen]
    pub fn is_loaded(&self) -> bool {
        self.session.is_loaded()
    }

    /// Pointer moved over `[section, row, cell]`; `[]` clears the hover.
    #[wasm_bindgen]
    pub fn hover(&mut self, address: &[u32]) -> Result<(), JsValue> {
        Ok(self.session.hover(Address::from_slice(address)?)?)
    }

    /// Cell at `[section, row, cell]` clicked.
    #[wasm_bindgen]
    pub fn click(&mut self, address: &[u32]) -> Result<(), JsValue> {
        if let Some(address) = Address::from_slice(address)? {
            self.session.click(address)?;
        }
        Ok(())
    }

    /// Edit box text changed.
    #[wasm_bindgen]
    pub fn input(&mut self, text: &str) -> Result<(), JsValue> {
        Ok(self.session.input(text)?)
    }

    /// Edit box submitted.
    #[wasm_bindgen]
    pub fn submit(&mut self, text: &str) -> Result<(), JsValue> {
        Ok(self.session.submit(text)?)
    }

    /// The table as nested arrays of strings.
    #[wasm_bindgen]
    pub fn table_json(&self) -> Result<String, JsValue> {
        Ok(serde_json::to_string(self.session.table()).map_err(crate::error::XteError::from)?)
    }

    /// The selection state (`hovered`, `selected`, `pendingEditValue`).
    #[wasm_bindgen]
    pub fn selection_json(&self) -> Result<String, JsValue> {
        Ok(serde_json::to_string(self.session.selection())
            .map_err(crate::error::XteError::from)?)
    }

    /// The table as a JS value (nested arrays).
    #[wasm_bindgen]
    pub fn table(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self.session.table())
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
    }

    #[wasm_bindgen]
    pub fn section_titles(&self) -> Result<Vec<String>, JsValue> {
        Ok(self.session.section_titles()?)
    }

    #[wasm_bindgen]
    pub fn cell_background(&self, address: &[u32]) -> Result<String, JsValue> {
        let address = Address::from_slice(address)?
            .ok_or_else(|| JsValue::from_str("no address given"))?;
        Ok(self.session.cell_background(address)?)
    }

    #[wasm_bindgen]
    pub fn cell_message(&self) -> String {
        self.session.cell_message()
    }

    #[wasm_bindgen]
    pub fn hover_message(&self) -> String {
        self.session.hover_message()
    }

    #[wasm_bindgen]
    pub fn pending_edit_value(&self) -> String {
        self.session.selection().pending_edit_value.clone()
    }

    /// Selected address as `[section, row, cell]`, if any.
    #[wasm_bindgen]
    pub fn selected(&self) -> Option<Vec<u32>> {
        self.session.selection().selected.map(to_js_coords)
    }

    #[wasm_bindgen]
    pub fn is_dirty(&self) -> bool {
        self.session.is_dirty()
    }

    /// Text to download.
    #[wasm_bindgen]
    pub fn save(&self) -> Result<String, JsValue> {
        self.session
            .save()
            .ok_or_else(|| JsValue::from_str("no rule loaded"))
    }
}

#[cfg(target_arch = "wasm32")]
#[allow(clippy::cast_possible_truncation)]
fn to_js_coords(address: Address) -> Vec<u32> {
    address.to_array().iter().map(|&i| i as u32).collect()
}
