//! Section palette and selected-cell shading.
//!
//! Each section takes a base color from the palette by index, cycling when
//! there are more sections than colors. A selected cell is drawn with the
//! base color darkened by a fixed amount.

use crate::config::EditorConfig;
use crate::error::{Result, XteError};
use crate::types::{Address, SelectionState};

/// Base color for a section, cycling through `palette`.
///
/// Returns `None` only when the palette is empty.
pub fn section_color(palette: &[String], section: usize) -> Option<&str> {
    if palette.is_empty() {
        return None;
    }
    palette.get(section % palette.len()).map(String::as_str)
}

/// Parse `#RRGGBB` into its 24-bit value.
fn parse_hex_color(color: &str) -> Result<u32> {
    let hex = color
        .strip_prefix('#')
        .filter(|h| h.len() == 6 && h.bytes().all(|b| b.is_ascii_hexdigit()))
        .ok_or_else(|| XteError::InvalidColor(color.to_string()))?;
    u32::from_str_radix(hex, 16).map_err(|_| XteError::InvalidColor(color.to_string()))
}

/// Darken `base` by subtracting `shade` from its packed RGB value.
///
/// The subtraction is done on the whole 24-bit number, not per channel, so
/// a borrow can cross channel boundaries. The result is always six
/// upper-case hex digits.
///
/// # Errors
/// Returns [`XteError::InvalidColor`] if `base` is not `#RRGGBB`, and
/// [`XteError::ColorEncodingUnderflow`] if `shade` is larger than the base
/// value.
pub fn select_color(base: &str, shade: u32) -> Result<String> {
    let value = parse_hex_color(base)?;
    let darker = value
        .checked_sub(shade)
        .ok_or_else(|| XteError::ColorEncodingUnderflow {
            color: base.to_string(),
        })?;
    Ok(format!("#{darker:06X}"))
}

/// Background for the cell at `address`: the section color, or its
/// selected shade when the address is the current selection.
///
/// # Errors
/// Propagates [`select_color`] errors, and returns
/// [`XteError::InvalidColor`] if the palette is empty.
pub fn cell_background(
    config: &EditorConfig,
    selection: &SelectionState,
    address: Address,
) -> Result<String> {
    let base = section_color(&config.palette, address.section)
        .ok_or_else(|| XteError::InvalidColor("empty palette".to_string()))?;
    if selection.is_selected(address) {
        select_color(base, config.select_shade)
    } else {
        Ok(base.to_string())
    }
}
