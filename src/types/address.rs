use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, XteError};

/// Coordinate of one editable value: `(section, row, cell)`, all 0-indexed.
///
/// An address is only a claim about shape; whether it points at a real cell
/// is decided by [`Table::get`](crate::types::Table::get) at lookup time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Address {
    pub section: usize,
    pub row: usize,
    pub cell: usize,
}

impl Address {
    pub const fn new(section: usize, row: usize, cell: usize) -> Self {
        Self { section, row, cell }
    }

    /// Build an address from a raw coordinate list, as sent by the front-end.
    ///
    /// An empty slice means "no selection" and yields `None`.
    ///
    /// # Errors
    /// Returns [`XteError::InvalidAddress`] for any length other than 0 or 3.
    pub fn from_slice(coords: &[u32]) -> Result<Option<Self>> {
        match *coords {
            [] => Ok(None),
            [section, row, cell] => Ok(Some(Self::new(
                section as usize,
                row as usize,
                cell as usize,
            ))),
            _ => Err(XteError::InvalidAddress(format!(
                "expected 0 or 3 coordinates, got {}",
                coords.len()
            ))),
        }
    }

    /// The address as a `[section, row, cell]` triple.
    pub const fn to_array(self) -> [usize; 3] {
        [self.section, self.row, self.cell]
    }
}

/// Formats as `s, r, c`, the way the status panel prints coordinates.
impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.section, self.row, self.cell)
    }
}

impl From<(usize, usize, usize)> for Address {
    fn from((section, row, cell): (usize, usize, usize)) -> Self {
        Self::new(section, row, cell)
    }
}

impl std::str::FromStr for Address {
    type Err = XteError;

    /// Parse `s,r,c` (whitespace around the numbers is ignored).
    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        let [section, row, cell] = parts.as_slice() else {
            return Err(XteError::InvalidAddress(s.to_string()));
        };
        let parse = |part: &str| {
            part.parse::<usize>()
                .map_err(|_| XteError::InvalidAddress(s.to_string()))
        };
        Ok(Self::new(parse(*section)?, parse(*row)?, parse(*cell)?))
    }
}
