//! Force envelope over load combinations
//!
//! Each combination is solved independently (in parallel with rayon) and the
//! envelope keeps the largest absolute shear and moment together with the
//! combination that produced each.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::solver::{AnalysisResult, BeamSolver};
use crate::errors::{CalcError, CalcResult};
use crate::loads::Combination;
use crate::model::Beam;

/// Governing internal forces across all combinations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    /// Required flexural strength (max |M| over combinations)
    pub mu: f64,
    /// Combination governing `mu`
    pub moment_combination: String,

    /// Required shear strength (max |V| over combinations)
    pub vu: f64,
    /// Combination governing `vu`
    pub shear_combination: String,
}

impl Envelope {
    /// Reduce per-combination results; ties keep the earlier combination
    pub fn from_results(results: &[AnalysisResult]) -> CalcResult<Self> {
        let first = results.first().ok_or_else(|| {
            CalcError::invalid_input("combinations", "[]", "At least one combination is required")
        })?;

        let seed = Envelope {
            mu: first.moment_max_abs,
            moment_combination: first.combination.clone(),
            vu: first.shear_max_abs,
            shear_combination: first.combination.clone(),
        };

        Ok(results[1..].iter().fold(seed, |mut env, r| {
            if r.moment_max_abs > env.mu {
                env.mu = r.moment_max_abs;
                env.moment_combination = r.combination.clone();
            }
            if r.shear_max_abs > env.vu {
                env.vu = r.shear_max_abs;
                env.shear_combination = r.combination.clone();
            }
            env
        }))
    }
}

/// Solve every combination, preserving the input order
pub fn analyze_all(
    solver: &BeamSolver,
    beam: &Beam,
    combinations: &[Combination],
) -> CalcResult<Vec<AnalysisResult>> {
    combinations
        .par_iter()
        .map(|combo| solver.analyze(beam, combo))
        .collect()
}

/// Solve every combination and reduce to the envelope
pub fn envelope(solver: &BeamSolver, beam: &Beam, combinations: &[Combination]) -> CalcResult<Envelope> {
    let results = analyze_all(solver, beam, combinations)?;
    Envelope::from_results(&results)
}
