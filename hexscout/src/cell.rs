//! Opaque hexagonal cell identifiers.
//!
//! Cells come from an external spatial index at a fixed resolution; the
//! engine treats their identifiers as opaque strings and never derives
//! geometry from them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of one hexagonal cell, as produced by the spatial index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CellId(String);

impl CellId {
    /// Creates a cell identifier from its string form.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CellId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for CellId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_input() {
        let cell = CellId::from("8a2a1072b59ffff");
        assert_eq!(cell.to_string(), "8a2a1072b59ffff");
        assert_eq!(cell.as_str(), "8a2a1072b59ffff");
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let cell = CellId::from("abcd1");
        let json = serde_json::to_string(&cell).unwrap();
        assert_eq!(json, "\"abcd1\"");

        let back: CellId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cell);
    }
}
