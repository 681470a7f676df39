//! Load Combinations
//!
//! Hard-coded combination tables, one per supported (actions code, design
//! method) pair. There is no fallback table: asking for a pair that is not
//! listed is a configuration error.
//!
//! | Code            | Method | Table                        |
//! |-----------------|--------|------------------------------|
//! | ASCE 7-22       | LRFD   | [`asce7_lrfd_combinations`]  |
//! | ASCE 7-22       | ASD    | [`asce7_asd_combinations`]   |
//! | NTC-CDMX-2023   | LRFD   | [`ntc_lrfd_combinations`]    |
//!
//! Factors are non-negative. A load case absent from a combination has factor
//! zero and its loads are left out of that combination's analysis.

use std::collections::BTreeMap;

use log::info;
use serde::{Deserialize, Serialize};

use super::load_types::LoadCase;
use super::DesignMethod;
use crate::config::ActionsCode;
use crate::errors::{CalcError, CalcResult};

/// A load combination with factors for each load case
///
/// # Example
/// ```
/// use steel_core::loads::{Combination, LoadCase};
///
/// let combo = Combination::new("LRFD-2", "1.2D + 1.6L")
///     .with_factor(LoadCase::Dead, 1.2)
///     .with_factor(LoadCase::Live, 1.6);
///
/// assert_eq!(combo.factor(LoadCase::Live), 1.6);
/// assert_eq!(combo.factor(LoadCase::Snow), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Combination {
    /// Combination identifier (e.g., "LRFD-1", "NTC-2")
    pub name: String,

    /// Human-readable equation for display (e.g., "1.2D + 1.6L")
    pub equation: String,

    /// Load factors keyed by load case
    pub factors: BTreeMap<LoadCase, f64>,
}

impl Combination {
    /// Create an empty combination
    pub fn new(name: impl Into<String>, equation: impl Into<String>) -> Self {
        Combination {
            name: name.into(),
            equation: equation.into(),
            factors: BTreeMap::new(),
        }
    }

    /// Add a load factor (builder pattern)
    pub fn with_factor(mut self, case: LoadCase, factor: f64) -> Self {
        self.factors.insert(case, factor);
        self
    }

    /// Get the factor for a load case (0.0 if not in combination)
    pub fn factor(&self, case: LoadCase) -> f64 {
        self.factors.get(&case).copied().unwrap_or(0.0)
    }

    /// Whether loads of this case take part in the combination
    pub fn includes(&self, case: LoadCase) -> bool {
        self.factor(case) > 0.0
    }

    /// Check that every factor is finite and non-negative
    pub fn validate(&self) -> CalcResult<()> {
        for (case, factor) in &self.factors {
            if !factor.is_finite() || *factor < 0.0 {
                return Err(CalcError::invalid_input(
                    format!("{}.factor_{}", self.name, case.code()),
                    factor.to_string(),
                    "Combination factors must be finite and non-negative",
                ));
            }
        }
        Ok(())
    }
}

impl std::fmt::Display for Combination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.name, self.equation)
    }
}

/// Combinations for the active code and method.
///
/// # Errors
///
/// [`CalcError::UnsupportedConfiguration`] for pairs without a table.
///
/// # Example
/// ```
/// use steel_core::config::ActionsCode;
/// use steel_core::loads::{combinations, DesignMethod};
///
/// let combos = combinations(ActionsCode::NtcAcciones2023, DesignMethod::Lrfd).unwrap();
/// assert_eq!(combos.len(), 2);
///
/// assert!(combinations(ActionsCode::NtcAcciones2023, DesignMethod::Asd).is_err());
/// ```
pub fn combinations(code: ActionsCode, method: DesignMethod) -> CalcResult<Vec<Combination>> {
    let combos = match (code, method) {
        (ActionsCode::Asce7_22, DesignMethod::Lrfd) => asce7_lrfd_combinations(),
        (ActionsCode::Asce7_22, DesignMethod::Asd) => asce7_asd_combinations(),
        (ActionsCode::NtcAcciones2023, DesignMethod::Lrfd) => ntc_lrfd_combinations(),
        (ActionsCode::NtcAcciones2023, DesignMethod::Asd) => {
            return Err(CalcError::unsupported(
                "load combinations",
                format!("{} / {}", code, method),
            ));
        }
    };
    info!(
        "Using {} {} load combinations ({} total)",
        code,
        method,
        combos.len()
    );
    Ok(combos)
}

/// ASCE 7-22 LRFD combinations (Section 2.3.1), gravity and non-uplift cases
pub fn asce7_lrfd_combinations() -> Vec<Combination> {
    vec![
        // 1. 1.4D
        Combination::new("LRFD-1", "1.4D")
            .with_factor(LoadCase::Dead, 1.4),

        // 2. 1.2D + 1.6L
        Combination::new("LRFD-2", "1.2D + 1.6L")
            .with_factor(LoadCase::Dead, 1.2)
            .with_factor(LoadCase::Live, 1.6),

        // 2a. 1.2D + 1.6L + 0.5Lr
        Combination::new("LRFD-2a", "1.2D + 1.6L + 0.5Lr")
            .with_factor(LoadCase::Dead, 1.2)
            .with_factor(LoadCase::Live, 1.6)
            .with_factor(LoadCase::RoofLive, 0.5),

        // 2b. 1.2D + 1.6L + 0.5S
        Combination::new("LRFD-2b", "1.2D + 1.6L + 0.5S")
            .with_factor(LoadCase::Dead, 1.2)
            .with_factor(LoadCase::Live, 1.6)
            .with_factor(LoadCase::Snow, 0.5),

        // 3a. 1.2D + 1.6Lr + L
        Combination::new("LRFD-3a", "1.2D + 1.6Lr + L")
            .with_factor(LoadCase::Dead, 1.2)
            .with_factor(LoadCase::RoofLive, 1.6)
            .with_factor(LoadCase::Live, 1.0),

        // 3b. 1.2D + 1.6S + L
        Combination::new("LRFD-3b", "1.2D + 1.6S + L")
            .with_factor(LoadCase::Dead, 1.2)
            .with_factor(LoadCase::Snow, 1.6)
            .with_factor(LoadCase::Live, 1.0),

        // 4. 1.2D + 1.0W + L + 0.5Lr
        Combination::new("LRFD-4", "1.2D + 1.0W + L + 0.5Lr")
            .with_factor(LoadCase::Dead, 1.2)
            .with_factor(LoadCase::Wind, 1.0)
            .with_factor(LoadCase::Live, 1.0)
            .with_factor(LoadCase::RoofLive, 0.5),

        // 5. 1.2D + 1.0E + L + 0.2S
        Combination::new("LRFD-5", "1.2D + 1.0E + L + 0.2S")
            .with_factor(LoadCase::Dead, 1.2)
            .with_factor(LoadCase::Earthquake, 1.0)
            .with_factor(LoadCase::Live, 1.0)
            .with_factor(LoadCase::Snow, 0.2),

        // 6. 0.9D + 1.0W
        Combination::new("LRFD-6", "0.9D + 1.0W")
            .with_factor(LoadCase::Dead, 0.9)
            .with_factor(LoadCase::Wind, 1.0),

        // 7. 0.9D + 1.0E
        Combination::new("LRFD-7", "0.9D + 1.0E")
            .with_factor(LoadCase::Dead, 0.9)
            .with_factor(LoadCase::Earthquake, 1.0),
    ]
}

/// ASCE 7-22 ASD combinations (Section 2.4.1), gravity and non-uplift cases
pub fn asce7_asd_combinations() -> Vec<Combination> {
    vec![
        // 1. D
        Combination::new("ASD-1", "D")
            .with_factor(LoadCase::Dead, 1.0),

        // 2. D + L
        Combination::new("ASD-2", "D + L")
            .with_factor(LoadCase::Dead, 1.0)
            .with_factor(LoadCase::Live, 1.0),

        // 3a. D + Lr
        Combination::new("ASD-3a", "D + Lr")
            .with_factor(LoadCase::Dead, 1.0)
            .with_factor(LoadCase::RoofLive, 1.0),

        // 3b. D + S
        Combination::new("ASD-3b", "D + S")
            .with_factor(LoadCase::Dead, 1.0)
            .with_factor(LoadCase::Snow, 1.0),

        // 4a. D + 0.75L + 0.75Lr
        Combination::new("ASD-4a", "D + 0.75L + 0.75Lr")
            .with_factor(LoadCase::Dead, 1.0)
            .with_factor(LoadCase::Live, 0.75)
            .with_factor(LoadCase::RoofLive, 0.75),

        // 4b. D + 0.75L + 0.75S
        Combination::new("ASD-4b", "D + 0.75L + 0.75S")
            .with_factor(LoadCase::Dead, 1.0)
            .with_factor(LoadCase::Live, 0.75)
            .with_factor(LoadCase::Snow, 0.75),

        // 5a. D + 0.6W
        Combination::new("ASD-5a", "D + 0.6W")
            .with_factor(LoadCase::Dead, 1.0)
            .with_factor(LoadCase::Wind, 0.6),

        // 5b. D + 0.7E
        Combination::new("ASD-5b", "D + 0.7E")
            .with_factor(LoadCase::Dead, 1.0)
            .with_factor(LoadCase::Earthquake, 0.7),

        // 7. 0.6D + 0.6W
        Combination::new("ASD-7", "0.6D + 0.6W")
            .with_factor(LoadCase::Dead, 0.6)
            .with_factor(LoadCase::Wind, 0.6),

        // 8. 0.6D + 0.7E
        Combination::new("ASD-8", "0.6D + 0.7E")
            .with_factor(LoadCase::Dead, 0.6)
            .with_factor(LoadCase::Earthquake, 0.7),
    ]
}

/// NTC-CDMX-2023 LRFD combinations (Acciones y Criterios)
pub fn ntc_lrfd_combinations() -> Vec<Combination> {
    vec![
        Combination::new("NTC-1", "1.3D")
            .with_factor(LoadCase::Dead, 1.3),

        Combination::new("NTC-2", "1.3D + 1.5L")
            .with_factor(LoadCase::Dead, 1.3)
            .with_factor(LoadCase::Live, 1.5),
    ]
}
