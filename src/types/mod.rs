//! Data types for the rule editor.

mod address;
mod selection;
mod table;

pub use address::*;
pub use selection::*;
pub use table::*;
