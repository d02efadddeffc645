//! Structured error types for xte.

use crate::types::Address;

/// All errors that can occur while parsing or editing a rule document.
#[derive(Debug, thiserror::Error)]
pub enum XteError {
    /// A row appeared before any section had been opened.
    ///
    /// `line` is 1-based.
    #[error("Malformed document: line {line} ({content:?}) does not belong to any section")]
    MalformedDocument { line: usize, content: String },

    /// An address points past the end of a section, row, or cell list.
    #[error("Address [ {address} ] is out of range")]
    AddressOutOfRange { address: Address },

    /// A raw coordinate list that is neither empty nor a full triple.
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    /// A color string that is not `#` followed by six hex digits.
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// Darkening the color would take it below `#000000`.
    #[error("Color {color} is too dark to derive a selected shade")]
    ColorEncodingUnderflow { color: String },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, XteError>;

#[cfg(target_arch = "wasm32")]
impl From<XteError> for wasm_bindgen::JsValue {
    fn from(e: XteError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offending_input() {
        let err = XteError::MalformedDocument {
            line: 1,
            content: "x,y".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Malformed document: line 1 (\"x,y\") does not belong to any section"
        );

        let err = XteError::AddressOutOfRange {
            address: Address::new(99, 0, 0),
        };
        assert_eq!(err.to_string(), "Address [ 99, 0, 0 ] is out of range");
    }
}
