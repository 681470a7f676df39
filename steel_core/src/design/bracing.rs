//! Stability Bracing Requirements
//!
//! Required strength and stiffness of braces for columns and beams per
//! AISC 360-22 Appendix 6. The calculator is stateless and takes its own
//! required forces; it is not fed by the statics solver.
//!
//! | Member        | Topology | Strength       | Stiffness              |
//! |---------------|----------|----------------|------------------------|
//! | Column        | Point    | 0.01·Pr        | f·8·Pr/Lbr             |
//! | Column        | Panel    | 0.005·Pr       | f·2·Pr/Lbr             |
//! | Beam lateral  | Point    | 0.02·Mr·Cd/h0  | f·10·Mr·Cd/(h0·Lbr)    |
//! | Beam lateral  | Panel    | 0.01·Mr·Cd/h0  | f·4·Mr·Cd/(h0·Lbr)     |
//! | Beam torsional| -        | Mbr = 0.024·Mr | not computed           |
//!
//! The analysis factor `f` is 1/φ (φ = 0.75) for LRFD and Ω for ASD
//! (2.0 lateral, 3.0 torsional). Cd is 2.0 for double curvature, else 1.0.
//!
//! ## Example
//! ```rust
//! use steel_core::design::{BracingCalculator, BracingTopology};
//! use steel_core::loads::DesignMethod;
//!
//! let calc = BracingCalculator::new(DesignMethod::Lrfd);
//! let brace = calc.column_lateral(1500.0, 4.0, BracingTopology::Point).unwrap();
//! assert!((brace.strength - 15.0).abs() < 1e-9);
//! assert!((brace.stiffness - 4000.0).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::loads::DesignMethod;

/// Resistance factor for bracing stiffness, LRFD
pub const PHI_BRACE: f64 = 0.75;
/// Safety factor for lateral bracing stiffness, ASD
pub const OMEGA_LATERAL: f64 = 2.0;
/// Safety factor for torsional bracing stiffness, ASD
pub const OMEGA_TORSIONAL: f64 = 3.0;
/// Torsional brace moment coefficient (Mbr = 0.024·Mr)
pub const TORSIONAL_MOMENT_COEFF: f64 = 0.024;

/// Brace arrangement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BracingTopology {
    /// Nodal braces at discrete points
    Point,
    /// Relative (panel) braces between adjacent points
    Panel,
}

/// Beam curvature between brace points
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Curvature {
    #[default]
    Single,
    Double,
}

impl Curvature {
    /// Cd factor: 2.0 for double curvature, 1.0 otherwise
    pub fn cd(&self) -> f64 {
        match self {
            Curvature::Single => 1.0,
            Curvature::Double => 2.0,
        }
    }
}

/// Kind of brace, selects the ASD safety factor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BraceKind {
    Lateral,
    Torsional,
}

/// Stiffness requirement that may be missing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "value")]
pub enum Stiffness {
    Computed(f64),
    /// Requires Cb, E, Iy and brace count, none of which are modelled
    NotComputed,
}

impl std::fmt::Display for Stiffness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stiffness::Computed(v) => write!(f, "{:.3}", v),
            Stiffness::NotComputed => write!(f, "not computed"),
        }
    }
}

/// Required lateral brace strength (force) and stiffness (force/length)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LateralBracing {
    pub strength: f64,
    pub stiffness: f64,
}

/// Required torsional brace moment and stiffness
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TorsionalBracing {
    pub moment_strength: f64,
    pub stiffness: Stiffness,
    /// Factor that will multiply βT once it is computed
    pub analysis_factor: f64,
}

/// Bracing requirement calculator for one design method
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BracingCalculator {
    pub method: DesignMethod,
}

impl BracingCalculator {
    pub fn new(method: DesignMethod) -> Self {
        BracingCalculator { method }
    }

    /// 1/φ for LRFD; Ω (lateral or torsional) for ASD
    pub fn analysis_factor(&self, kind: BraceKind) -> f64 {
        match (self.method, kind) {
            (DesignMethod::Lrfd, _) => 1.0 / PHI_BRACE,
            (DesignMethod::Asd, BraceKind::Lateral) => OMEGA_LATERAL,
            (DesignMethod::Asd, BraceKind::Torsional) => OMEGA_TORSIONAL,
        }
    }

    /// Column bracing for required axial strength `pr` over brace spacing `lbr`
    pub fn column_lateral(&self, pr: f64, lbr: f64, topology: BracingTopology) -> CalcResult<LateralBracing> {
        require_finite("Pr", pr)?;
        require_positive("Lbr", lbr)?;

        let (strength_coeff, stiffness_coeff) = match topology {
            BracingTopology::Point => (0.01, 8.0),
            BracingTopology::Panel => (0.005, 2.0),
        };
        let f = self.analysis_factor(BraceKind::Lateral);

        Ok(LateralBracing {
            strength: strength_coeff * pr,
            stiffness: f * stiffness_coeff * pr / lbr,
        })
    }

    /// Beam lateral bracing for required flexural strength `mr`
    ///
    /// `h0` must be in the same length unit as `lbr`.
    pub fn beam_lateral(
        &self,
        mr: f64,
        h0: f64,
        lbr: f64,
        topology: BracingTopology,
        curvature: Curvature,
    ) -> CalcResult<LateralBracing> {
        require_finite("Mr", mr)?;
        require_positive("h0", h0)?;
        require_positive("Lbr", lbr)?;

        let (strength_coeff, stiffness_coeff) = match topology {
            BracingTopology::Point => (0.02, 10.0),
            BracingTopology::Panel => (0.01, 4.0),
        };
        let cd = curvature.cd();
        let f = self.analysis_factor(BraceKind::Lateral);

        Ok(LateralBracing {
            strength: strength_coeff * mr * cd / h0,
            stiffness: f * stiffness_coeff * mr * cd / (h0 * lbr),
        })
    }

    /// Beam torsional bracing: brace moment only, stiffness not computed
    pub fn beam_torsional(&self, mr: f64, lbr: f64) -> CalcResult<TorsionalBracing> {
        require_finite("Mr", mr)?;
        require_positive("Lbr", lbr)?;

        Ok(TorsionalBracing {
            moment_strength: TORSIONAL_MOMENT_COEFF * mr,
            stiffness: Stiffness::NotComputed,
            analysis_factor: self.analysis_factor(BraceKind::Torsional),
        })
    }
}

fn require_finite(quantity: &str, value: f64) -> CalcResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(CalcError::invalid_input(quantity, value.to_string(), "Value must be finite"))
    }
}

fn require_positive(quantity: &str, value: f64) -> CalcResult<()> {
    require_finite(quantity, value)?;
    if value <= 0.0 {
        return Err(CalcError::degenerate(
            quantity,
            format!("Must be positive, got {}", value),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9 * b.abs().max(1.0)
    }

    #[test]
    fn test_column_point_lrfd() {
        // Pr = 1500 kN, Lbr = 4 m: Vbr = 15 kN, βbr = (1/0.75)(8)(1500)/4 = 4000 kN/m
        let calc = BracingCalculator::new(DesignMethod::Lrfd);
        let brace = calc.column_lateral(1500.0, 4.0, BracingTopology::Point).unwrap();
        assert!(approx_eq(brace.strength, 15.0));
        assert!(approx_eq(brace.stiffness, 4000.0));
    }

    #[test]
    fn test_column_panel_asd() {
        // Vbr = 0.005·Pr; βbr = 2.0 · 2 · Pr / Lbr
        let calc = BracingCalculator::new(DesignMethod::Asd);
        let brace = calc.column_lateral(1000.0, 5.0, BracingTopology::Panel).unwrap();
        assert!(approx_eq(brace.strength, 5.0));
        assert!(approx_eq(brace.stiffness, 800.0));
    }

    #[test]
    fn test_beam_lateral_point() {
        // Mr = 200, h0 = 0.4, Lbr = 4: Vbr = 0.02·200/0.4 = 10; βbr = (4/3)·10·200/1.6
        let calc = BracingCalculator::new(DesignMethod::Lrfd);
        let brace = calc
            .beam_lateral(200.0, 0.4, 4.0, BracingTopology::Point, Curvature::Single)
            .unwrap();
        assert!(approx_eq(brace.strength, 10.0));
        assert!(approx_eq(brace.stiffness, 4.0 / 3.0 * 10.0 * 200.0 / 1.6));
    }

    #[test]
    fn test_double_curvature_doubles_demand() {
        let calc = BracingCalculator::new(DesignMethod::Asd);
        let single = calc
            .beam_lateral(100.0, 0.5, 3.0, BracingTopology::Panel, Curvature::Single)
            .unwrap();
        let double = calc
            .beam_lateral(100.0, 0.5, 3.0, BracingTopology::Panel, Curvature::Double)
            .unwrap();
        assert!(approx_eq(double.strength, 2.0 * single.strength));
        assert!(approx_eq(double.stiffness, 2.0 * single.stiffness));
        assert!(approx_eq(single.stiffness, 2.0 * 4.0 * 100.0 / 1.5));
    }

    #[test]
    fn test_torsional() {
        let lrfd = BracingCalculator::new(DesignMethod::Lrfd).beam_torsional(250.0, 4.0).unwrap();
        assert!(approx_eq(lrfd.moment_strength, 6.0));
        assert_eq!(lrfd.stiffness, Stiffness::NotComputed);
        assert!(approx_eq(lrfd.analysis_factor, 1.0 / 0.75));

        let asd = BracingCalculator::new(DesignMethod::Asd).beam_torsional(250.0, 4.0).unwrap();
        assert_eq!(asd.analysis_factor, 3.0);
    }

    #[test]
    fn test_analysis_factors() {
        let asd = BracingCalculator::new(DesignMethod::Asd);
        assert_eq!(asd.analysis_factor(BraceKind::Lateral), 2.0);
        assert_eq!(asd.analysis_factor(BraceKind::Torsional), 3.0);
    }

    #[test]
    fn test_degenerate_geometry() {
        let calc = BracingCalculator::new(DesignMethod::Lrfd);
        let err = calc.column_lateral(100.0, 0.0, BracingTopology::Point).unwrap_err();
        assert_eq!(err.error_code(), "DEGENERATE_INPUT");
        assert!(calc
            .beam_lateral(100.0, 0.0, 4.0, BracingTopology::Point, Curvature::Single)
            .is_err());
        assert!(calc.beam_torsional(100.0, -1.0).is_err());
    }

    #[test]
    fn test_not_computed_serialization() {
        let json = serde_json::to_string(&Stiffness::NotComputed).unwrap();
        assert_eq!(json, r#"{"status":"NotComputed"}"#);
        assert_eq!(Stiffness::NotComputed.to_string(), "not computed");
    }
}
