//! Load case tags
//!
//! A load case identifies the physical origin of a load. It is the lookup
//! key when a combination's factors are applied.

use serde::{Deserialize, Serialize};

/// Primary load cases
///
/// # Example
/// ```
/// use steel_core::loads::LoadCase;
///
/// let dead = LoadCase::Dead;
/// assert_eq!(dead.code(), "D");
/// assert_eq!(dead.description(), "Dead load");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LoadCase {
    /// D - Dead load (self-weight of structure and permanent attachments)
    Dead,
    /// L - Live load (floor live load, occupancy)
    Live,
    /// Lr - Roof live load (maintenance, workers)
    RoofLive,
    /// S - Snow load
    Snow,
    /// W - Wind load
    Wind,
    /// E - Earthquake load
    Earthquake,
}

impl LoadCase {
    /// All load cases in standard order
    pub const ALL: [LoadCase; 6] = [
        LoadCase::Dead,
        LoadCase::Live,
        LoadCase::RoofLive,
        LoadCase::Snow,
        LoadCase::Wind,
        LoadCase::Earthquake,
    ];

    /// Standard abbreviation code (D, L, Lr, S, W, E)
    pub fn code(&self) -> &'static str {
        match self {
            LoadCase::Dead => "D",
            LoadCase::Live => "L",
            LoadCase::RoofLive => "Lr",
            LoadCase::Snow => "S",
            LoadCase::Wind => "W",
            LoadCase::Earthquake => "E",
        }
    }

    /// Human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            LoadCase::Dead => "Dead load",
            LoadCase::Live => "Live load",
            LoadCase::RoofLive => "Roof live load",
            LoadCase::Snow => "Snow load",
            LoadCase::Wind => "Wind load",
            LoadCase::Earthquake => "Earthquake load",
        }
    }

    /// Parse a standard abbreviation code
    ///
    /// ```
    /// use steel_core::loads::LoadCase;
    /// assert_eq!(LoadCase::from_code("Lr"), Some(LoadCase::RoofLive));
    /// assert_eq!(LoadCase::from_code("X"), None);
    /// ```
    pub fn from_code(code: &str) -> Option<Self> {
        LoadCase::ALL.into_iter().find(|c| c.code() == code)
    }
}

impl std::fmt::Display for LoadCase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
