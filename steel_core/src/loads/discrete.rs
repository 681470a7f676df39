//! Discrete Loads
//!
//! A [`Load`] is a point force or a constant-intensity line load applied to a
//! beam, tagged with the [`LoadCase`] it belongs to. Loads are validated on
//! construction (including deserialization) and never mutated afterwards:
//! factoring produces a new instance.

use serde::{Deserialize, Serialize};

use super::load_types::LoadCase;
use crate::errors::{CalcError, CalcResult};

// ============================================================================
// Load Distribution
// ============================================================================

/// How a load is placed along the member
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum LoadDistribution {
    /// Concentrated force at a distance from the left end
    Point { position: f64 },

    /// Constant line load between two distances from the left end
    Distributed { start: f64, end: f64 },
}

impl LoadDistribution {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            LoadDistribution::Point { .. } => "Point",
            LoadDistribution::Distributed { .. } => "Distributed",
        }
    }

    /// Extent of the load as `(start, end)`; a point load has zero width
    pub fn extent(&self) -> (f64, f64) {
        match *self {
            LoadDistribution::Point { position } => (position, position),
            LoadDistribution::Distributed { start, end } => (start, end),
        }
    }
}

// ============================================================================
// Load
// ============================================================================

/// A single load on a beam
///
/// `magnitude` is a force for point loads and a force per length for
/// distributed loads. Positive magnitudes act downward.
///
/// # Example
/// ```
/// use steel_core::loads::{Load, LoadCase};
///
/// let w = Load::distributed(LoadCase::Dead, 5.0, 0.0, 8.0).unwrap();
/// assert_eq!(w.resultant(), 40.0);
/// assert_eq!(w.centroid(), 4.0);
///
/// // Inverted spans are rejected up front
/// assert!(Load::distributed(LoadCase::Dead, 5.0, 8.0, 2.0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawLoad")]
pub struct Load {
    case: LoadCase,
    magnitude: f64,
    distribution: LoadDistribution,
}

/// Unvalidated wire form of [`Load`]
#[derive(Deserialize)]
struct RawLoad {
    case: LoadCase,
    magnitude: f64,
    distribution: LoadDistribution,
}

impl TryFrom<RawLoad> for Load {
    type Error = CalcError;

    fn try_from(raw: RawLoad) -> CalcResult<Self> {
        Load::new(raw.case, raw.magnitude, raw.distribution)
    }
}

impl Load {
    /// Create a validated load
    pub fn new(case: LoadCase, magnitude: f64, distribution: LoadDistribution) -> CalcResult<Self> {
        require_finite("magnitude", magnitude)?;
        match distribution {
            LoadDistribution::Point { position } => {
                require_finite("position", position)?;
            }
            LoadDistribution::Distributed { start, end } => {
                require_finite("start", start)?;
                require_finite("end", end)?;
                if end <= start {
                    return Err(CalcError::invalid_input(
                        "end",
                        end.to_string(),
                        format!("Distributed load must end after its start ({})", start),
                    ));
                }
            }
        }
        Ok(Load {
            case,
            magnitude,
            distribution,
        })
    }

    /// Create a point load
    pub fn point(case: LoadCase, magnitude: f64, position: f64) -> CalcResult<Self> {
        Load::new(case, magnitude, LoadDistribution::Point { position })
    }

    /// Create a constant distributed load over `[start, end]`
    pub fn distributed(case: LoadCase, magnitude: f64, start: f64, end: f64) -> CalcResult<Self> {
        Load::new(case, magnitude, LoadDistribution::Distributed { start, end })
    }

    pub fn case(&self) -> LoadCase {
        self.case
    }

    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    pub fn distribution(&self) -> LoadDistribution {
        self.distribution
    }

    /// Total force carried by the load
    pub fn resultant(&self) -> f64 {
        match self.distribution {
            LoadDistribution::Point { .. } => self.magnitude,
            LoadDistribution::Distributed { start, end } => self.magnitude * (end - start),
        }
    }

    /// Position of the resultant
    pub fn centroid(&self) -> f64 {
        let (start, end) = self.distribution.extent();
        (start + end) / 2.0
    }

    /// New load with the magnitude scaled by `factor`
    pub fn factored(&self, factor: f64) -> Load {
        Load {
            case: self.case,
            magnitude: self.magnitude * factor,
            distribution: self.distribution,
        }
    }
}

impl std::fmt::Display for Load {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.distribution {
            LoadDistribution::Point { position } => {
                write!(f, "Point({}, P={}, x={})", self.case, self.magnitude, position)
            }
            LoadDistribution::Distributed { start, end } => {
                write!(f, "Distributed({}, w={}, [{}-{}])", self.case, self.magnitude, start, end)
            }
        }
    }
}

fn require_finite(field: &str, value: f64) -> CalcResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(CalcError::invalid_input(field, value.to_string(), "Value must be finite"))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_load() {
        let load = Load::point(LoadCase::Live, 15.0, 4.0).unwrap();
        assert_eq!(load.magnitude(), 15.0);
        assert_eq!(load.resultant(), 15.0);
        assert_eq!(load.centroid(), 4.0);
        assert!(matches!(
            load.distribution(),
            LoadDistribution::Point { position } if position == 4.0
        ));
    }

    #[test]
    fn test_distributed_resultant_and_centroid() {
        let load = Load::distributed(LoadCase::Dead, 10.0, 2.0, 6.0).unwrap();
        assert_eq!(load.resultant(), 40.0);
        assert_eq!(load.centroid(), 4.0);
    }

    #[test]
    fn test_inverted_and_empty_spans_rejected() {
        assert!(Load::distributed(LoadCase::Dead, 1.0, 3.0, 1.0).is_err());
        assert!(Load::distributed(LoadCase::Dead, 1.0, 2.0, 2.0).is_err());
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(Load::point(LoadCase::Dead, f64::NAN, 1.0).is_err());
        assert!(Load::point(LoadCase::Dead, 1.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_negative_magnitude_allowed() {
        let uplift = Load::distributed(LoadCase::Wind, -3.0, 0.0, 5.0).unwrap();
        assert_eq!(uplift.resultant(), -15.0);
    }

    #[test]
    fn test_factored_is_new_instance() {
        let original = Load::point(LoadCase::Dead, 10.0, 2.0).unwrap();
        let factored = original.factored(1.4);
        assert_eq!(original.magnitude(), 10.0);
        assert!((factored.magnitude() - 14.0).abs() < 1e-12);
        assert_eq!(factored.case(), LoadCase::Dead);
        assert_eq!(factored.distribution(), original.distribution());
    }

    #[test]
    fn test_deserialization_validates() {
        let good = r#"{"case":"Live","magnitude":12.0,"distribution":{"type":"Distributed","start":0.0,"end":8.0}}"#;
        let load: Load = serde_json::from_str(good).unwrap();
        assert_eq!(load.resultant(), 96.0);

        let inverted = r#"{"case":"Live","magnitude":12.0,"distribution":{"type":"Distributed","start":8.0,"end":0.0}}"#;
        assert!(serde_json::from_str::<Load>(inverted).is_err());

        let bad_case = r#"{"case":"Rain","magnitude":1.0,"distribution":{"type":"Point","position":1.0}}"#;
        assert!(serde_json::from_str::<Load>(bad_case).is_err());
    }

    #[test]
    fn test_display() {
        let load = Load::point(LoadCase::Dead, 15.0, 4.0).unwrap();
        assert_eq!(load.to_string(), "Point(D, P=15, x=4)");
    }
}
