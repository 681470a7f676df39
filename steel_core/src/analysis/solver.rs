//! Beam Statics Solver
//!
//! Reactions and sampled shear/moment diagrams for one beam under one load
//! combination. Statically determinate supports only: simply supported and
//! cantilever (fixed at x = 0).
//!
//! ## Sign Convention
//! - Positive load magnitude acts downward
//! - Positive reaction acts upward
//! - Shear starts at the left (or fixed-end) reaction and drops across loads
//! - Cantilever fixed-end moment is negative (hogging) for downward loads
//!
//! ## Example
//! ```rust
//! use steel_core::analysis::BeamSolver;
//! use steel_core::loads::{Combination, Load, LoadCase};
//! use steel_core::model::{Beam, SupportCondition};
//!
//! let mut beam = Beam::new("B-1", 10.0, SupportCondition::Simple).unwrap();
//! beam.add_load(Load::point(LoadCase::Dead, 100.0, 5.0).unwrap()).unwrap();
//!
//! let combo = Combination::new("1.0D", "D").with_factor(LoadCase::Dead, 1.0);
//! let result = BeamSolver::new().analyze(&beam, &combo).unwrap();
//!
//! assert!((result.reactions.left - 50.0).abs() < 1e-9);
//! assert!((result.moment_max_abs - 250.0).abs() < 0.5); // PL/4
//! ```

use log::debug;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::loads::{Combination, Load, LoadDistribution};
use crate::model::{Beam, SupportCondition};

/// Default number of diagram samples along the span
pub const DEFAULT_SAMPLE_POINTS: usize = 1000;

/// Support reactions for one combination
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reactions {
    /// Vertical reaction at x = 0 (the fixed end of a cantilever)
    pub left: f64,
    /// Vertical reaction at x = L (zero for a cantilever)
    pub right: f64,
    /// Reaction moment at the fixed end (zero for a simple span)
    pub fixed_moment: f64,
}

/// Results of one combination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Name of the combination that produced these results
    pub combination: String,

    pub reactions: Reactions,

    /// Largest absolute shear along the span
    pub shear_max_abs: f64,

    /// Largest absolute moment along the span
    pub moment_max_abs: f64,

    /// Sampled (x, V) pairs from 0 to L
    pub shear_diagram: Vec<(f64, f64)>,

    /// Sampled (x, M) pairs from 0 to L
    pub moment_diagram: Vec<(f64, f64)>,
}

/// Statics solver for determinate single-span beams
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BeamSolver {
    /// Number of sample points for diagrams
    pub sample_points: usize,
}

impl Default for BeamSolver {
    fn default() -> Self {
        BeamSolver {
            sample_points: DEFAULT_SAMPLE_POINTS,
        }
    }
}

impl BeamSolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of sample points for diagrams (at least 2)
    pub fn with_sample_points(mut self, points: usize) -> Self {
        self.sample_points = points.max(2);
        self
    }

    /// Analyze `beam` under `combination`
    ///
    /// # Errors
    ///
    /// - [`CalcError::UnsupportedConfiguration`] for support conditions
    ///   without a determinate solution (fixed-fixed)
    /// - [`CalcError::InvalidInput`] for negative or non-finite factors
    pub fn analyze(&self, beam: &Beam, combination: &Combination) -> CalcResult<AnalysisResult> {
        combination.validate()?;

        let loads = factor_loads(beam.loads(), combination);
        let length = beam.length();
        let reactions = reactions(beam.support(), length, &loads)?;

        let n = self.sample_points.max(2);
        let mut shear_diagram = Vec::with_capacity(n);
        let mut moment_diagram = Vec::with_capacity(n);

        for i in 0..n {
            let x = length * i as f64 / (n - 1) as f64;
            let (v, m) = internal_forces(x, &reactions, &loads);
            shear_diagram.push((x, v));
            moment_diagram.push((x, m));
        }

        let shear_max_abs = max_abs(&shear_diagram);
        let moment_max_abs = max_abs(&moment_diagram);

        debug!(
            "{} on '{}': {} loads, R=({:.3}, {:.3}), |V|max={:.3}, |M|max={:.3}",
            combination.name,
            beam.label(),
            loads.len(),
            reactions.left,
            reactions.right,
            shear_max_abs,
            moment_max_abs
        );

        Ok(AnalysisResult {
            combination: combination.name.clone(),
            reactions,
            shear_max_abs,
            moment_max_abs,
            shear_diagram,
            moment_diagram,
        })
    }
}

/// Factored copies of the loads that take part in the combination
///
/// A zero or absent factor drops the load entirely.
pub fn factor_loads(loads: &[Load], combination: &Combination) -> Vec<Load> {
    loads
        .iter()
        .filter(|load| combination.includes(load.case()))
        .map(|load| load.factored(combination.factor(load.case())))
        .collect()
}

/// Support reactions from factored loads
pub fn reactions(support: SupportCondition, length: f64, loads: &[Load]) -> CalcResult<Reactions> {
    match support {
        SupportCondition::Simple => {
            // R1 = P(L-a)/L, R2 = Pa/L with distributed loads at their centroid
            let (left, right) = loads.iter().fold((0.0, 0.0), |(r1, r2), load| {
                let p = load.resultant();
                let a = load.centroid();
                (r1 + p * (length - a) / length, r2 + p * a / length)
            });
            Ok(Reactions {
                left,
                right,
                fixed_moment: 0.0,
            })
        }
        SupportCondition::Cantilever => {
            let (left, fixed_moment) = loads.iter().fold((0.0, 0.0), |(r, m), load| {
                let p = load.resultant();
                (r + p, m - p * load.centroid())
            });
            Ok(Reactions {
                left,
                right: 0.0,
                fixed_moment,
            })
        }
        SupportCondition::FixedFixed => Err(CalcError::unsupported(
            "support condition",
            support.display_name(),
        )),
    }
}

/// Shear and moment at `x` by walking the loads from the left end
fn internal_forces(x: f64, reactions: &Reactions, loads: &[Load]) -> (f64, f64) {
    let mut v = reactions.left;
    let mut m = reactions.fixed_moment + reactions.left * x;

    for load in loads {
        let w = load.magnitude();
        match load.distribution() {
            LoadDistribution::Point { position } => {
                if x >= position {
                    v -= w;
                    m -= w * (x - position);
                }
            }
            LoadDistribution::Distributed { start, end } => {
                if x >= start {
                    v -= w * (x - start);
                    m -= 0.5 * w * (x - start).powi(2);
                }
                // Cancel the part of the block that lies past its end
                if x > end {
                    v += w * (x - end);
                    m += 0.5 * w * (x - end).powi(2);
                }
            }
        }
    }

    (v, m)
}

fn max_abs(diagram: &[(f64, f64)]) -> f64 {
    let (min, max) = diagram
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &(_, y)| (lo.min(y), hi.max(y)));
    if diagram.is_empty() {
        0.0
    } else {
        min.abs().max(max.abs())
    }
}
