// 📏 Measurement Kind - Closed set of units for food quantities
// Quantities are only ever compared within a name, never converted between kinds

use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// MEASUREMENT KIND
// ============================================================================

/// Unit attached to every inventory entry.
///
/// Declaration order doubles as the grouping order used by aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MeasurementKind {
    /// Whole items ("2 of eggs")
    #[serde(rename = "of")]
    Single,

    #[serde(rename = "grams")]
    Grams,

    #[serde(rename = "ml")]
    Millilitres,

    #[serde(rename = "slices")]
    Slices,
}

impl MeasurementKind {
    /// Every accepted kind, in declaration order
    pub const ALL: [MeasurementKind; 4] = [
        MeasurementKind::Single,
        MeasurementKind::Grams,
        MeasurementKind::Millilitres,
        MeasurementKind::Slices,
    ];

    /// Tag as written in fridge and recipe files
    pub fn as_str(&self) -> &'static str {
        match self {
            MeasurementKind::Single => "of",
            MeasurementKind::Grams => "grams",
            MeasurementKind::Millilitres => "ml",
            MeasurementKind::Slices => "slices",
        }
    }
}

impl FromStr for MeasurementKind {
    type Err = ParseError;

    /// Exact match against the tags; no case folding, no trimming
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "of" => Ok(MeasurementKind::Single),
            "grams" => Ok(MeasurementKind::Grams),
            "ml" => Ok(MeasurementKind::Millilitres),
            "slices" => Ok(MeasurementKind::Slices),
            other => Err(ParseError::UnknownKind(other.to_string())),
        }
    }
}

impl fmt::Display for MeasurementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// TESTS
// ============================================================================
