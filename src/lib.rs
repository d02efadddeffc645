//! xte - Xalgorithms tabular rule editor
//!
//! Loads a sectioned rule CSV document and edits it cell by cell:
//! - Quote-aware row splitting that keeps cells verbatim
//! - Sections opened by `METADATA.`, `INPUT.`, `OUTPUT.` label lines
//! - `(section, row, cell)` addressing for reads and writes
//! - Hover/selection tracking with a re-synced edit value
//!
//! # Usage (Rust)
//!
//! ```
//! use xte::editor::Session;
//! use xte::types::Address;
//!
//! let mut session = Session::default();
//! session.load("METADATA.NAME,foo\nx,y").unwrap();
//! session.click(Address::new(0, 1, 1)).unwrap();
//! session.submit("z").unwrap();
//! assert_eq!(session.save().unwrap(), "METADATA.NAME,foo\nx,z");
//! ```
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { XteEdit } from 'xte';
//! await init();
//! const editor = new XteEdit('');
//! editor.load(text);
//! editor.click([0, 1, 1]);
//! editor.submit('z');
//! ```

pub mod color;
pub mod config;
pub mod csv;
pub mod editor;
pub mod error;
pub mod export;
pub mod types;

use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
pub use editor::XteEdit;

pub use config::EditorConfig;
pub use csv::{parse_rule, parse_rule_with, split_row};
pub use editor::{EditorEvent, EditorState, Session};
pub use error::{Result, XteError};
pub use export::write_rule;
pub use types::*;

/// Parse a rule document and return its table as a JSON string
///
/// # Arguments
/// * `text` - The rule CSV text
///
/// # Returns
/// A JSON array of sections, each an array of rows of cell strings
///
/// # Errors
/// Returns an error if the document does not start with a section label.
#[wasm_bindgen]
pub fn parse_rule_json(text: &str) -> std::result::Result<String, JsValue> {
    let table = csv::parse_rule(text).map_err(|e| JsValue::from_str(&e.to_string()))?;

    serde_json::to_string(&table)
        .map_err(|e| JsValue::from_str(&format!("JSON serialization error: {e}")))
}

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
