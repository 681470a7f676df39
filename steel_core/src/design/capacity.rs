//! Member Capacity Checks
//!
//! Flexural yielding and web shear for rolled W-shapes per AISC 360-22
//! Chapters F and G:
//!
//! - Mn = Fy·Zx (F2-1, compact section, full lateral support)
//! - Vn = 0.6·Fy·Aw·Cv1 with Aw = d·tw and Cv1 = 1.0 (G2-1)
//!
//! Available strength is φ·Rn for LRFD (φb = φv = 0.90) and Rn/Ω for ASD
//! (Ωb = Ωv = 1.67). Capacities come out in the project's force and moment
//! units using the scales from [`crate::units::UnitSystem`].
//!
//! ## Example
//! ```rust
//! use steel_core::config::SteelDesignCode;
//! use steel_core::design::{checker_for, CheckStatus};
//! use steel_core::loads::DesignMethod;
//! use steel_core::materials::{builtin_common_shapes, SteelMaterial, SteelSection};
//! use steel_core::model::{Beam, SupportCondition};
//! use steel_core::units::{StressUnit, UnitRegime, UnitSystem};
//!
//! let db = builtin_common_shapes();
//! let mut beam = Beam::new("B-1", 8.0, SupportCondition::Simple).unwrap();
//! beam.assign_section(SteelSection::new(
//!     db.lookup("W18X35", UnitRegime::Metric).unwrap(),
//!     SteelMaterial::astm_a992(StressUnit::MegaPascal).unwrap(),
//! ));
//!
//! let checker = checker_for(SteelDesignCode::Aisc360_22, DesignMethod::Lrfd).unwrap();
//! let flexure = checker.check_flexure(&beam, &UnitSystem::default(), 200.0).unwrap();
//! assert_eq!(flexure.status, CheckStatus::Ok);
//! ```

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::config::SteelDesignCode;
use crate::errors::{CalcError, CalcResult};
use crate::loads::DesignMethod;
use crate::materials::SteelSection;
use crate::model::Beam;
use crate::units::UnitSystem;

/// Resistance factor for flexure, LRFD (F1)
pub const PHI_B: f64 = 0.90;
/// Resistance factor for shear, LRFD (G1)
pub const PHI_V: f64 = 0.90;
/// Safety factor for flexure, ASD (F1)
pub const OMEGA_B: f64 = 1.67;
/// Safety factor for shear, ASD (G1)
pub const OMEGA_V: f64 = 1.67;

// ============================================================================
// Results
// ============================================================================

/// Pass/fail outcome of a check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckStatus {
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "EXCEEDS")]
    Exceeds,
}

impl CheckStatus {
    /// OK when ratio <= 1.0
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio <= 1.0 {
            CheckStatus::Ok
        } else {
            CheckStatus::Exceeds
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CheckStatus::Ok => "OK",
            CheckStatus::Exceeds => "EXCEEDS",
        }
    }
}

impl std::fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Limit state evaluated by a check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LimitState {
    Flexure,
    Shear,
}

/// Demand against available strength for one limit state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapacityResult {
    pub limit_state: LimitState,
    /// Required strength (Mu or Vu)
    pub required: f64,
    /// Nominal strength Rn
    pub nominal: f64,
    /// Available strength (φRn or Rn/Ω)
    pub available: f64,
    /// required / available
    pub ratio: f64,
    pub status: CheckStatus,
}

impl CapacityResult {
    /// Build a result, rejecting zero or non-finite capacity
    pub fn evaluate(limit_state: LimitState, required: f64, nominal: f64, available: f64) -> CalcResult<Self> {
        if !required.is_finite() || required < 0.0 {
            return Err(CalcError::invalid_input(
                "required strength",
                required.to_string(),
                "Required strength must be finite and non-negative",
            ));
        }
        if !available.is_finite() || available <= 0.0 {
            return Err(CalcError::degenerate(
                format!("{:?} capacity", limit_state),
                format!("Available strength is {}", available),
            ));
        }
        let ratio = required / available;
        Ok(CapacityResult {
            limit_state,
            required,
            nominal,
            available,
            ratio,
            status: CheckStatus::from_ratio(ratio),
        })
    }

    pub fn passes(&self) -> bool {
        self.status == CheckStatus::Ok
    }
}

// ============================================================================
// Checkers
// ============================================================================

/// Common interface of the member strength checkers
pub trait CapacityCheck: Send + Sync {
    /// Code and method this checker implements (e.g., "AISC 360-22 LRFD")
    fn basis(&self) -> &'static str;

    /// Nominal and available flexural strength in project moment units
    fn flexural_strength(&self, section: &SteelSection, units: &UnitSystem) -> (f64, f64);

    /// Nominal and available shear strength in project force units
    fn shear_strength(&self, section: &SteelSection, units: &UnitSystem) -> (f64, f64);

    /// Check required flexural strength `mu` against the beam's section
    fn check_flexure(&self, beam: &Beam, units: &UnitSystem, mu: f64) -> CalcResult<CapacityResult> {
        let section = beam.section()?;
        units.validate()?;
        let (nominal, available) = self.flexural_strength(section, units);
        let result = CapacityResult::evaluate(LimitState::Flexure, mu, nominal, available)?;
        report(beam, self.basis(), &result, units.moment.symbol());
        Ok(result)
    }

    /// Check required shear strength `vu` against the beam's section
    fn check_shear(&self, beam: &Beam, units: &UnitSystem, vu: f64) -> CalcResult<CapacityResult> {
        let section = beam.section()?;
        units.validate()?;
        let (nominal, available) = self.shear_strength(section, units);
        let result = CapacityResult::evaluate(LimitState::Shear, vu, nominal, available)?;
        report(beam, self.basis(), &result, units.force.symbol());
        Ok(result)
    }
}

fn report(beam: &Beam, basis: &str, result: &CapacityResult, unit: &str) {
    if result.passes() {
        debug!(
            "{} {:?} on '{}': {:.3} / {:.3} {} = {:.3}",
            basis, result.limit_state, beam.label(), result.required, result.available, unit, result.ratio
        );
    } else {
        warn!(
            "{} {:?} exceeded on '{}': {:.3} > {:.3} {} (ratio {:.3})",
            basis, result.limit_state, beam.label(), result.required, result.available, unit, result.ratio
        );
    }
}

/// Mn = Fy·Zx in project moment units
fn nominal_flexure(section: &SteelSection, units: &UnitSystem) -> f64 {
    section.yield_stress() * section.zx() * units.moment_capacity_scale()
}

/// Vn = 0.6·Fy·d·tw·Cv1 (Cv1 = 1.0) in project force units
fn nominal_shear(section: &SteelSection, units: &UnitSystem) -> f64 {
    let cv1 = 1.0;
    0.6 * section.yield_stress() * section.d() * section.tw() * cv1 * units.shear_capacity_scale()
}

/// AISC 360-22, load and resistance factor design
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Aisc360Lrfd;

impl CapacityCheck for Aisc360Lrfd {
    fn basis(&self) -> &'static str {
        "AISC 360-22 LRFD"
    }

    fn flexural_strength(&self, section: &SteelSection, units: &UnitSystem) -> (f64, f64) {
        let mn = nominal_flexure(section, units);
        (mn, PHI_B * mn)
    }

    fn shear_strength(&self, section: &SteelSection, units: &UnitSystem) -> (f64, f64) {
        let vn = nominal_shear(section, units);
        (vn, PHI_V * vn)
    }
}

/// AISC 360-22, allowable strength design
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Aisc360Asd;

impl CapacityCheck for Aisc360Asd {
    fn basis(&self) -> &'static str {
        "AISC 360-22 ASD"
    }

    fn flexural_strength(&self, section: &SteelSection, units: &UnitSystem) -> (f64, f64) {
        let mn = nominal_flexure(section, units);
        (mn, mn / OMEGA_B)
    }

    fn shear_strength(&self, section: &SteelSection, units: &UnitSystem) -> (f64, f64) {
        let vn = nominal_shear(section, units);
        (vn, vn / OMEGA_V)
    }
}

/// Checker for a design code and method
///
/// # Errors
///
/// [`CalcError::UnsupportedConfiguration`] for codes without a checker
/// (NTC-Acero-2020).
pub fn checker_for(code: SteelDesignCode, method: DesignMethod) -> CalcResult<Box<dyn CapacityCheck>> {
    match (code, method) {
        (SteelDesignCode::Aisc360_22, DesignMethod::Lrfd) => Ok(Box::new(Aisc360Lrfd)),
        (SteelDesignCode::Aisc360_22, DesignMethod::Asd) => Ok(Box::new(Aisc360Asd)),
        (SteelDesignCode::NtcAcero2020, _) => Err(CalcError::unsupported(
            "steel design code",
            format!("{} / {}", code, method),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loads::{Load, LoadCase};
    use crate::materials::{builtin_common_shapes, SteelMaterial};
    use crate::model::SupportCondition;
    use crate::units::{ForceUnit, LengthUnit, MomentUnit, StressUnit, UnitRegime};

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        ((a - b) / b).abs() < tol
    }

    fn metric_beam() -> Beam {
        let db = builtin_common_shapes();
        let mut beam = Beam::new("B-1", 8.0, SupportCondition::Simple).unwrap();
        beam.add_load(Load::point(LoadCase::Dead, 15.0, 4.0).unwrap()).unwrap();
        beam.assign_section(SteelSection::new(
            db.lookup("W18X35", UnitRegime::Metric).unwrap(),
            SteelMaterial::astm_a992(StressUnit::MegaPascal).unwrap(),
        ));
        beam
    }

    fn imperial_beam() -> Beam {
        let db = builtin_common_shapes();
        let mut beam = Beam::new("B-1", 26.0, SupportCondition::Simple).unwrap();
        beam.assign_section(SteelSection::new(
            db.lookup("W18X35", UnitRegime::Imperial).unwrap(),
            SteelMaterial::astm_a992(StressUnit::Ksi).unwrap(),
        ));
        beam
    }

    #[test]
    fn test_lrfd_flexure_metric() {
        // φMn = 0.9 * 345 MPa * 66.5 in³ * 25.4³ / 1e6 = 338.36 kNm
        let beam = metric_beam();
        let result = Aisc360Lrfd.check_flexure(&beam, &UnitSystem::default(), 100.0).unwrap();
        let expected = 0.9 * 345.0 * 66.5 * 25.4f64.powi(3) / 1.0e6;
        assert!(approx_eq(result.available, expected, 1e-12));
        assert!(approx_eq(result.available, 338.36, 0.001));
        assert_eq!(result.status, CheckStatus::Ok);
    }

    #[test]
    fn test_lrfd_shear_metric() {
        // φVn = 0.9 * 0.6 * 345 * (17.7*25.4) * (0.3*25.4) / 1e3 = 638.2 kN
        let beam = metric_beam();
        let result = Aisc360Lrfd.check_shear(&beam, &UnitSystem::default(), 100.0).unwrap();
        assert!(approx_eq(result.available, 638.2, 0.001));
        assert!(approx_eq(result.nominal, result.available / 0.9, 1e-12));
    }

    #[test]
    fn test_lrfd_imperial_kip_ft() {
        // φMn = 0.9 * 50 * 66.5 / 12 = 249.4 kip-ft; φVn = 0.9*0.6*50*17.7*0.3 = 143.4 kips
        let beam = imperial_beam();
        let units = UnitSystem::imperial();
        let flexure = Aisc360Lrfd.check_flexure(&beam, &units, 100.0).unwrap();
        assert!(approx_eq(flexure.available, 249.375, 1e-12));
        let shear = Aisc360Lrfd.check_shear(&beam, &units, 100.0).unwrap();
        assert!(approx_eq(shear.available, 143.37, 1e-12));
    }

    #[test]
    fn test_newton_meter_reporting() {
        // Same section as above, reported in N·m and N
        let beam = metric_beam();
        let units = UnitSystem {
            force: ForceUnit::Newton,
            moment: MomentUnit::NewtonMeter,
            ..UnitSystem::default()
        };
        let flexure = Aisc360Lrfd.check_flexure(&beam, &units, 200_000.0).unwrap();
        assert!(approx_eq(flexure.available, 338_364.0, 0.001));
        assert!(approx_eq(flexure.ratio, 200.0 / 338.364, 0.001));
        assert_eq!(flexure.status, CheckStatus::Ok);

        let shear = Aisc360Lrfd.check_shear(&beam, &units, 100_000.0).unwrap();
        assert!(approx_eq(shear.available, 638_200.0, 0.001));
    }

    #[test]
    fn test_inconsistent_units_rejected() {
        let beam = metric_beam();
        let units = UnitSystem {
            length: LengthUnit::Mm,
            ..UnitSystem::default()
        };
        assert!(Aisc360Lrfd.check_flexure(&beam, &units, 100.0).unwrap_err().is_configuration());
        assert!(Aisc360Asd.check_shear(&beam, &units, 100.0).unwrap_err().is_configuration());
    }

    #[test]
    fn test_asd_uses_omega() {
        let beam = imperial_beam();
        let units = UnitSystem::imperial();
        let asd = Aisc360Asd.check_flexure(&beam, &units, 10.0).unwrap();
        let lrfd = Aisc360Lrfd.check_flexure(&beam, &units, 10.0).unwrap();
        assert_eq!(asd.nominal, lrfd.nominal);
        assert!(approx_eq(asd.available, asd.nominal / 1.67, 1e-12));
    }

    #[test]
    fn test_status_flips_at_unity() {
        let beam = metric_beam();
        let units = UnitSystem::default();
        let capacity = Aisc360Lrfd.check_flexure(&beam, &units, 0.0).unwrap().available;

        let at_limit = Aisc360Lrfd.check_flexure(&beam, &units, capacity).unwrap();
        assert_eq!(at_limit.ratio, 1.0);
        assert_eq!(at_limit.status, CheckStatus::Ok);

        let over = Aisc360Lrfd.check_flexure(&beam, &units, capacity * 1.0001).unwrap();
        assert_eq!(over.status, CheckStatus::Exceeds);
    }

    #[test]
    fn test_ratio_monotonic_in_demand() {
        let beam = metric_beam();
        let units = UnitSystem::default();
        let ratios: Vec<f64> = [0.0, 50.0, 100.0, 400.0, 800.0]
            .iter()
            .map(|&mu| Aisc360Lrfd.check_flexure(&beam, &units, mu).unwrap().ratio)
            .collect();
        assert!(ratios.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_missing_section_before_numeric_work() {
        let beam = Beam::new("Bare", 5.0, SupportCondition::Simple).unwrap();
        let err = Aisc360Lrfd.check_flexure(&beam, &UnitSystem::default(), 1.0).unwrap_err();
        assert_eq!(err.error_code(), "MISSING_SECTION");
    }

    #[test]
    fn test_zero_capacity_is_degenerate() {
        let err = CapacityResult::evaluate(LimitState::Shear, 10.0, 0.0, 0.0).unwrap_err();
        assert_eq!(err.error_code(), "DEGENERATE_INPUT");
        assert!(CapacityResult::evaluate(LimitState::Flexure, 1.0, f64::NAN, f64::NAN).is_err());
    }

    #[test]
    fn test_factory() {
        assert_eq!(
            checker_for(SteelDesignCode::Aisc360_22, DesignMethod::Lrfd).unwrap().basis(),
            "AISC 360-22 LRFD"
        );
        assert_eq!(
            checker_for(SteelDesignCode::Aisc360_22, DesignMethod::Asd).unwrap().basis(),
            "AISC 360-22 ASD"
        );
        let err = checker_for(SteelDesignCode::NtcAcero2020, DesignMethod::Lrfd).err().unwrap();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_status_serialization() {
        assert_eq!(serde_json::to_string(&CheckStatus::Exceeds).unwrap(), "\"EXCEEDS\"");
    }
}
