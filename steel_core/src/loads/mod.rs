//! Loads and load combinations
//!
//! # Overview
//!
//! - [`LoadCase`] - Load origin tags (D, L, Lr, S, W, E)
//! - [`Load`] - A validated point or distributed load
//! - [`Combination`] - Factors applied per load case
//! - [`DesignMethod`] - LRFD vs ASD
//!
//! # Example
//!
//! ```
//! use steel_core::config::ActionsCode;
//! use steel_core::loads::{combinations, DesignMethod, Load, LoadCase};
//!
//! let dead = Load::distributed(LoadCase::Dead, 5.0, 0.0, 8.0).unwrap();
//! let combos = combinations(ActionsCode::Asce7_22, DesignMethod::Lrfd).unwrap();
//!
//! // 1.4D governs for a dead-only beam
//! let governing = combos
//!     .iter()
//!     .map(|c| c.factor(dead.case()) * dead.resultant())
//!     .fold(0.0f64, f64::max);
//! assert!((governing - 56.0).abs() < 1e-9);
//! ```

pub mod load_types;
pub mod combinations;
pub mod discrete;

pub use load_types::LoadCase;
pub use combinations::{
    Combination,
    combinations,
    asce7_asd_combinations,
    asce7_lrfd_combinations,
    ntc_lrfd_combinations,
};
pub use discrete::{Load, LoadDistribution};

use serde::{Deserialize, Serialize};

/// Design methodology selection
///
/// LRFD factors loads up and resistances down; ASD works with service-level
/// combinations and divides nominal strength by a safety factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DesignMethod {
    /// Load and Resistance Factor Design
    Lrfd,
    /// Allowable Strength Design
    Asd,
}

impl DesignMethod {
    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            DesignMethod::Lrfd => "LRFD (Load and Resistance Factor Design)",
            DesignMethod::Asd => "ASD (Allowable Strength Design)",
        }
    }

    /// Short abbreviation
    pub fn code(&self) -> &'static str {
        match self {
            DesignMethod::Lrfd => "LRFD",
            DesignMethod::Asd => "ASD",
        }
    }
}

impl std::fmt::Display for DesignMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
