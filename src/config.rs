//! Editor configuration.
//!
//! Every constant the parser and the tracker depend on lives here so that a
//! deployment can override them from a JSON file without touching the
//! algorithms.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Section-start prefixes recognized by default.
pub const DEFAULT_SECTION_PREFIXES: [&str; 3] = ["METADATA.", "INPUT.", "OUTPUT."];

/// Base colors cycled across sections.
pub const DEFAULT_PALETTE: [&str; 5] = ["#F8E0E0", "#F8ECE0", "#E6F8E0", "#E0ECF8", "#F2E0F7"];

/// Amount subtracted from a base color to get its selected shade (`#222222`).
pub const DEFAULT_SELECT_SHADE: u32 = 0x0022_2222;

/// Configuration for parsing and the selection tracker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Line prefixes that open a new section. Matched literally at line start.
    pub section_prefixes: Vec<String>,
    /// Appended to every derived section title.
    pub title_suffix: String,
    /// Pending edit value before anything is selected.
    pub placeholder: String,
    /// Status message shown while nothing is selected.
    pub welcome_message: String,
    /// Shown in place of an empty selected value.
    pub empty_cell_label: String,
    /// Section background colors, indexed by section modulo length.
    pub palette: Vec<String>,
    /// Subtracted from a base color to derive the selected variant.
    pub select_shade: u32,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            section_prefixes: DEFAULT_SECTION_PREFIXES
                .iter()
                .map(|p| (*p).to_string())
                .collect(),
            title_suffix: " Subtable".to_string(),
            placeholder: "Select a cell to make changes".to_string(),
            welcome_message: "Welcome to the Xalgorithms Rule Editor".to_string(),
            empty_cell_label: "Empty Cell".to_string(),
            palette: DEFAULT_PALETTE.iter().map(|c| (*c).to_string()).collect(),
            select_shade: DEFAULT_SELECT_SHADE,
        }
    }
}

impl EditorConfig {
    /// Parse a configuration from JSON. Missing fields fall back to defaults.
    ///
    /// # Errors
    /// Returns an error if the JSON is malformed.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Whether `line` opens a new section.
    pub fn starts_section(&self, line: &str) -> bool {
        self.section_prefixes
            .iter()
            .any(|prefix| line.starts_with(prefix.as_str()))
    }
}
