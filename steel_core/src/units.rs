//! # Unit Configuration
//!
//! The project reports results in one consistent set of units chosen per
//! category (force, length, moment, stress). The engine does not carry a unit
//! algebra: section properties live in one of two internally consistent
//! regimes (millimeter-based or inch-based) selected by the length unit, and
//! capacity outputs are rescaled to the reporting force and moment units.
//! Only unit sets whose moment unit is the force unit times the length unit
//! are accepted, so demand and capacity always share units.
//!
//! ## Example
//!
//! ```rust
//! use steel_core::units::{UnitSystem, UnitRegime, LengthUnit};
//!
//! let units = UnitSystem::default(); // kN, m, kNm, MPa
//! assert_eq!(units.regime(), UnitRegime::Metric);
//!
//! // N·mm from Fy(MPa) × Zx(mm³) → kN·m
//! assert_eq!(units.moment_capacity_scale(), 1.0e-6);
//! assert_eq!(LengthUnit::Ft.regime(), UnitRegime::Imperial);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Millimeters per inch
pub const MM_PER_IN: f64 = 25.4;

// ============================================================================
// Unit Categories
// ============================================================================

/// Force units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ForceUnit {
    #[serde(rename = "kN")]
    KiloNewton,
    #[serde(rename = "kips")]
    Kips,
    #[serde(rename = "N")]
    Newton,
    #[serde(rename = "lbf")]
    PoundForce,
}

/// Length units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LengthUnit {
    #[serde(rename = "m")]
    M,
    #[serde(rename = "ft")]
    Ft,
    #[serde(rename = "mm")]
    Mm,
    #[serde(rename = "in")]
    In,
}

/// Moment units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MomentUnit {
    #[serde(rename = "kNm")]
    KiloNewtonMeter,
    #[serde(rename = "kip-ft")]
    KipFoot,
    #[serde(rename = "Nm")]
    NewtonMeter,
    #[serde(rename = "lbf-in")]
    PoundInch,
}

/// Stress units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StressUnit {
    #[serde(rename = "MPa")]
    MegaPascal,
    #[serde(rename = "ksi")]
    Ksi,
    #[serde(rename = "Pa")]
    Pascal,
    #[serde(rename = "psi")]
    Psi,
}

impl ForceUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            ForceUnit::KiloNewton => "kN",
            ForceUnit::Kips => "kips",
            ForceUnit::Newton => "N",
            ForceUnit::PoundForce => "lbf",
        }
    }
}

impl MomentUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            MomentUnit::KiloNewtonMeter => "kNm",
            MomentUnit::KipFoot => "kip-ft",
            MomentUnit::NewtonMeter => "Nm",
            MomentUnit::PoundInch => "lbf-in",
        }
    }
}

impl StressUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            StressUnit::MegaPascal => "MPa",
            StressUnit::Ksi => "ksi",
            StressUnit::Pascal => "Pa",
            StressUnit::Psi => "psi",
        }
    }

    /// Whether this stress unit belongs to the SI family
    pub fn is_metric(&self) -> bool {
        matches!(self, StressUnit::MegaPascal | StressUnit::Pascal)
    }

    /// Factor to MPa (metric) or ksi (imperial)
    pub fn base_factor(&self) -> f64 {
        match self {
            StressUnit::MegaPascal | StressUnit::Ksi => 1.0,
            StressUnit::Pascal => 1.0e-6,
            StressUnit::Psi => 1.0e-3,
        }
    }
}

/// The two internally consistent regimes section properties are kept in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitRegime {
    /// Dimensions in mm, stresses in MPa
    Metric,
    /// Dimensions in inches, stresses in ksi
    Imperial,
}

impl LengthUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            LengthUnit::M => "m",
            LengthUnit::Ft => "ft",
            LengthUnit::Mm => "mm",
            LengthUnit::In => "in",
        }
    }

    /// Section-property regime implied by this length unit
    pub fn regime(&self) -> UnitRegime {
        match self {
            LengthUnit::M | LengthUnit::Mm => UnitRegime::Metric,
            LengthUnit::Ft | LengthUnit::In => UnitRegime::Imperial,
        }
    }

    /// Factor converting a section dimension (mm or in) into this length unit
    pub fn section_length_factor(&self) -> f64 {
        match self {
            LengthUnit::M => 1.0e-3,
            LengthUnit::Mm => 1.0,
            LengthUnit::Ft => 1.0 / 12.0,
            LengthUnit::In => 1.0,
        }
    }
}

impl std::fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

// ============================================================================
// Unit System
// ============================================================================

/// Active reporting units for a project
///
/// # JSON Format
/// ```json
/// { "force": "kN", "length": "m", "moment": "kNm", "stress": "MPa" }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitSystem {
    pub force: ForceUnit,
    pub length: LengthUnit,
    pub moment: MomentUnit,
    pub stress: StressUnit,
}

impl Default for UnitSystem {
    fn default() -> Self {
        UnitSystem {
            force: ForceUnit::KiloNewton,
            length: LengthUnit::M,
            moment: MomentUnit::KiloNewtonMeter,
            stress: StressUnit::MegaPascal,
        }
    }
}

impl UnitSystem {
    /// US customary reporting units (kips, ft, kip-ft, ksi)
    pub fn imperial() -> Self {
        UnitSystem {
            force: ForceUnit::Kips,
            length: LengthUnit::Ft,
            moment: MomentUnit::KipFoot,
            stress: StressUnit::Ksi,
        }
    }

    /// Regime selected by the length unit
    pub fn regime(&self) -> UnitRegime {
        self.length.regime()
    }

    /// Factor taking Fy × Z to the reporting moment unit
    ///
    /// Fy × Z is N·mm for MPa with mm and kip·in for ksi with inches; Pa
    /// and psi stresses are brought to those first.
    pub fn moment_capacity_scale(&self) -> f64 {
        let to_moment = match self.moment {
            MomentUnit::KiloNewtonMeter => 1.0e-6,
            MomentUnit::NewtonMeter => 1.0e-3,
            MomentUnit::KipFoot => 1.0 / 12.0,
            MomentUnit::PoundInch => 1.0e3,
        };
        self.stress.base_factor() * to_moment
    }

    /// Factor taking Fy × Aw (N or kips) to the reporting force unit
    pub fn shear_capacity_scale(&self) -> f64 {
        let to_force = match self.force {
            ForceUnit::KiloNewton => 1.0e-3,
            ForceUnit::Newton => 1.0,
            ForceUnit::Kips => 1.0,
            ForceUnit::PoundForce => 1.0e3,
        };
        self.stress.base_factor() * to_force
    }

    /// Stiffness unit label (force per length)
    pub fn stiffness_symbol(&self) -> String {
        format!("{}/{}", self.force.symbol(), self.length.symbol())
    }

    /// Reject unit mixes the engine cannot report consistently
    ///
    /// Demand moments are force × length, so the moment unit must be exactly
    /// that product (kN with m gives kNm, lbf with in gives lbf-in). Stress
    /// drives material constants while length drives section properties, so
    /// both must come from the same family.
    pub fn validate(&self) -> CalcResult<()> {
        let consistent_moment = matches!(
            (self.force, self.length, self.moment),
            (ForceUnit::KiloNewton, LengthUnit::M, MomentUnit::KiloNewtonMeter)
                | (ForceUnit::Newton, LengthUnit::M, MomentUnit::NewtonMeter)
                | (ForceUnit::Kips, LengthUnit::Ft, MomentUnit::KipFoot)
                | (ForceUnit::PoundForce, LengthUnit::In, MomentUnit::PoundInch)
        );
        if !consistent_moment {
            return Err(CalcError::unsupported(
                "unit combination",
                format!(
                    "{} with {} and {} (moment must be force × length)",
                    self.force.symbol(),
                    self.length.symbol(),
                    self.moment.symbol()
                ),
            ));
        }

        let length_metric = self.regime() == UnitRegime::Metric;
        if length_metric != self.stress.is_metric() {
            return Err(CalcError::unsupported(
                "unit combination",
                format!(
                    "{} with {} (length and stress must share a unit system)",
                    self.length.symbol(),
                    self.stress.symbol()
                ),
            ));
        }
        Ok(())
    }
}
