//! # Design Workflow
//!
//! One job file in, one report out:
//!
//! ```text
//! DesignJob ──► combinations(code, method)
//!           ──► BeamInput::build (section lookup, material, loads)
//!           ──► analyze_all (rayon) ──► Envelope (Mu, Vu)
//!           ──► checker.check_flexure / check_shear
//!           ──► BracingCalculator (beam lateral + torsional, optional column)
//!           ──► DesignReport
//! ```
//!
//! Configuration problems (unsupported code or method) are reported before
//! any section lookup or analysis is done.
//!
//! ## JSON Format
//!
//! ```json
//! {
//!   "config": { "meta": { ... }, "actions_code": "Asce7_22", "design_code": "Aisc360_22" },
//!   "beam": {
//!     "label": "B-1", "length": 8.0, "support": "Simple",
//!     "section": "W18X35", "material": "A992",
//!     "loads": [
//!       { "case": "Dead", "magnitude": 5.0,
//!         "distribution": { "type": "Distributed", "start": 0.0, "end": 8.0 } }
//!     ]
//!   },
//!   "bracing": { "unbraced_length": 4.0, "topology": "Point" },
//!   "column": { "axial_load": 1500.0, "unbraced_length": 4.0, "topology": "Point" }
//! }
//! ```

use log::info;
use serde::{Deserialize, Serialize};

use crate::analysis::{analyze_all, BeamSolver, Envelope};
use crate::config::{ProjectConfig, ProjectMetadata};
use crate::design::{
    checker_for, BracingCalculator, BracingTopology, CapacityResult, Curvature, LateralBracing,
    TorsionalBracing,
};
use crate::errors::CalcResult;
use crate::loads::{combinations, Load};
use crate::materials::{SectionDb, SteelMaterial, SteelSection};
use crate::model::{Beam, SupportCondition};
use crate::units::UnitSystem;

// ============================================================================
// Job Input
// ============================================================================

/// Beam definition as written in a job file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BeamInput {
    pub label: String,

    /// Span in project length units
    pub length: f64,

    pub support: SupportCondition,

    #[serde(default)]
    pub loads: Vec<Load>,

    /// AISC label of the W-shape (e.g., "W18X35")
    pub section: String,

    /// Steel grade (e.g., "A992", "ASTM A36")
    pub material: String,
}

impl BeamInput {
    /// Validate the input and produce a beam with its section assigned
    ///
    /// The section is looked up in the regime selected by the project's
    /// length unit and the material in the project's stress unit.
    pub fn build(&self, db: &SectionDb, config: &ProjectConfig) -> CalcResult<Beam> {
        config.validate()?;

        let material = SteelMaterial::by_grade(&self.material, config.units.stress)?;
        let shape = db.lookup(&self.section, config.units.regime())?;

        let mut beam = Beam::new(&self.label, self.length, self.support)?
            .with_loads(self.loads.iter().cloned())?;
        beam.assign_section(SteelSection::new(shape, material));
        Ok(beam)
    }
}

/// Beam bracing layout
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BracingInput {
    /// Distance between braces in project length units
    pub unbraced_length: f64,

    pub topology: BracingTopology,

    #[serde(default)]
    pub curvature: Curvature,
}

/// Column bracing request, independent of the beam analysis
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ColumnBracingInput {
    /// Required axial strength Pr in project force units
    pub axial_load: f64,

    pub unbraced_length: f64,

    pub topology: BracingTopology,
}

/// Complete check request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DesignJob {
    pub config: ProjectConfig,
    pub beam: BeamInput,
    pub bracing: BracingInput,

    #[serde(default)]
    pub column: Option<ColumnBracingInput>,
}

// ============================================================================
// Report
// ============================================================================

/// Extremes for one combination (diagrams omitted)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombinationSummary {
    pub name: String,
    pub equation: String,
    pub shear_max_abs: f64,
    pub moment_max_abs: f64,
}

/// Structured results of a design run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignReport {
    pub meta: ProjectMetadata,
    pub units: UnitSystem,

    /// Codes and method, e.g. "ASCE 7-22 / AISC 360-22 LRFD"
    pub basis: String,

    /// Text from [`Beam::describe`]
    pub beam: String,

    pub combinations: Vec<CombinationSummary>,
    pub envelope: Envelope,

    pub flexure: CapacityResult,
    pub shear: CapacityResult,

    /// Flange-centroid distance in project length units
    pub h0: f64,
    pub lateral_bracing: LateralBracing,
    pub torsional_bracing: TorsionalBracing,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_bracing: Option<LateralBracing>,
}

impl DesignReport {
    /// Both strength checks pass
    pub fn passes(&self) -> bool {
        self.flexure.passes() && self.shear.passes()
    }

    /// Largest demand/capacity ratio
    pub fn governing_ratio(&self) -> f64 {
        self.flexure.ratio.max(self.shear.ratio)
    }
}

/// Run the complete check for a job
pub fn run_design(job: &DesignJob, db: &SectionDb) -> CalcResult<DesignReport> {
    let config = &job.config;
    config.validate()?;

    let combos = combinations(config.actions_code, config.method)?;
    let checker = checker_for(config.design_code, config.method)?;

    let beam = job.beam.build(db, config)?;
    let section = beam.section()?;
    let units = config.units;

    let results = analyze_all(&BeamSolver::new(), &beam, &combos)?;
    let envelope = Envelope::from_results(&results)?;

    let flexure = checker.check_flexure(&beam, &units, envelope.mu)?;
    let shear = checker.check_shear(&beam, &units, envelope.vu)?;

    let bracing = BracingCalculator::new(config.method);
    let h0 = section.h0() * units.length.section_length_factor();
    let lateral_bracing = bracing.beam_lateral(
        envelope.mu,
        h0,
        job.bracing.unbraced_length,
        job.bracing.topology,
        job.bracing.curvature,
    )?;
    let torsional_bracing = bracing.beam_torsional(envelope.mu, job.bracing.unbraced_length)?;
    let column_bracing = job
        .column
        .map(|c| bracing.column_lateral(c.axial_load, c.unbraced_length, c.topology))
        .transpose()?;

    info!(
        "Beam '{}' ({}): flexure {:.3} {}, shear {:.3} {}",
        beam.label(),
        section,
        flexure.ratio,
        flexure.status,
        shear.ratio,
        shear.status
    );

    let summaries = combos
        .iter()
        .zip(&results)
        .map(|(combo, r)| CombinationSummary {
            name: combo.name.clone(),
            equation: combo.equation.clone(),
            shear_max_abs: r.shear_max_abs,
            moment_max_abs: r.moment_max_abs,
        })
        .collect();

    Ok(DesignReport {
        meta: config.meta.clone(),
        units,
        basis: format!("{} / {}", config.actions_code, checker.basis()),
        beam: beam.describe(&units),
        combinations: summaries,
        envelope,
        flexure,
        shear,
        h0,
        lateral_bracing,
        torsional_bracing,
        column_bracing,
    })
}
