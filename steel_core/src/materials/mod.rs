//! # Structural Steel Materials
//!
//! Yield strength, tensile strength and elastic modulus for the ASTM grades
//! used in the section checks. Values are produced in the stress unit of the
//! active project so that they pair with the matching section-property regime
//! (MPa with millimeters, ksi with inches).
//!
//! ## Example
//!
//! ```rust
//! use steel_core::materials::SteelMaterial;
//! use steel_core::units::StressUnit;
//!
//! let a992 = SteelMaterial::astm_a992(StressUnit::MegaPascal).unwrap();
//! assert_eq!(a992.fy, 345.0);
//! assert_eq!(a992.e, 200_000.0);
//!
//! let a36 = SteelMaterial::by_grade("A36", StressUnit::Ksi).unwrap();
//! assert_eq!(a36.fy, 36.0);
//! ```

pub mod shapes;

pub use shapes::{builtin_common_shapes, SectionDb, SteelSection, SteelShape};

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::units::StressUnit;

/// Elastic modulus of structural steel (MPa)
pub const E_STEEL_MPA: f64 = 200_000.0;

/// Elastic modulus of structural steel (ksi)
pub const E_STEEL_KSI: f64 = 29_000.0;

/// Structural steel material
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SteelMaterial {
    /// Grade designation (e.g., "ASTM A992")
    pub name: String,
    /// Minimum yield stress
    pub fy: f64,
    /// Minimum tensile strength
    pub fu: f64,
    /// Modulus of elasticity
    pub e: f64,
}

impl SteelMaterial {
    /// Create a material, rejecting non-positive strengths
    pub fn new(name: impl Into<String>, fy: f64, fu: f64, e: f64) -> CalcResult<Self> {
        let name = name.into();
        for (field, value) in [("fy", fy), ("fu", fu), ("e", e)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(CalcError::invalid_input(
                    field,
                    value.to_string(),
                    format!("{} must have positive material properties", name),
                ));
            }
        }
        Ok(SteelMaterial { name, fy, fu, e })
    }

    /// ASTM A992 (Fy = 345 MPa / 50 ksi, Fu = 450 MPa / 65 ksi)
    pub fn astm_a992(stress: StressUnit) -> CalcResult<Self> {
        match stress {
            StressUnit::MegaPascal => SteelMaterial::new("ASTM A992", 345.0, 450.0, E_STEEL_MPA),
            StressUnit::Ksi => SteelMaterial::new("ASTM A992", 50.0, 65.0, E_STEEL_KSI),
            other => Err(unsupported_stress(other)),
        }
    }

    /// ASTM A36 (Fy = 250 MPa / 36 ksi, Fu = 400 MPa / 58 ksi)
    pub fn astm_a36(stress: StressUnit) -> CalcResult<Self> {
        match stress {
            StressUnit::MegaPascal => SteelMaterial::new("ASTM A36", 250.0, 400.0, E_STEEL_MPA),
            StressUnit::Ksi => SteelMaterial::new("ASTM A36", 36.0, 58.0, E_STEEL_KSI),
            other => Err(unsupported_stress(other)),
        }
    }

    /// Resolve a grade name as written in job files ("A992", "ASTM A36", ...)
    pub fn by_grade(grade: &str, stress: StressUnit) -> CalcResult<Self> {
        let normalized = grade.trim().to_uppercase();
        let normalized = normalized.trim_start_matches("ASTM").trim();
        match normalized {
            "A992" => SteelMaterial::astm_a992(stress),
            "A36" => SteelMaterial::astm_a36(stress),
            _ => Err(CalcError::unsupported("steel grade", grade)),
        }
    }
}

impl std::fmt::Display for SteelMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (Fy={}, Fu={})", self.name, self.fy, self.fu)
    }
}

fn unsupported_stress(stress: StressUnit) -> CalcError {
    CalcError::unsupported("stress unit for steel grades", stress.symbol())
}
