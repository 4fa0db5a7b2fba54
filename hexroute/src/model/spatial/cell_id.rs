use std::{fmt::Display, str::FromStr};

/// identifies one cell of the hexagonal grid, or the distinguished
/// [`CellId::Unresolved`] value produced when coordinates cannot be quantized.
///
/// the resolved variant holds the raw 64-bit index so that nothing outside of
/// the [`super::SpatialIndex`] implementation depends on the grid library.
/// `Unresolved` hashes and compares as its own value, so route keys with an
/// unresolved endpoint never merge with keys of real cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CellId {
    Cell(u64),
    Unresolved,
}

impl CellId {
    pub fn is_resolved(&self) -> bool {
        matches!(self, CellId::Cell(_))
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            CellId::Cell(idx) => Some(*idx),
            CellId::Unresolved => None,
        }
    }
}

/// resolved cells are written in the conventional lowercase hexadecimal form
/// (e.g. `8860145b41fffff`), unresolved cells as an empty field.
impl Display for CellId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CellId::Cell(idx) => write!(f, "{idx:x}"),
            CellId::Unresolved => Ok(()),
        }
    }
}

impl FromStr for CellId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(CellId::Unresolved);
        }
        u64::from_str_radix(trimmed, 16)
            .map(CellId::Cell)
            .map_err(|e| format!("'{trimmed}' is not a hexadecimal cell index: {e}"))
    }
}
