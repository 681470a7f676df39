//! # steel_core - Steel Beam Strength Check Engine
//!
//! `steel_core` checks a single steel beam against a structural steel design
//! code: it combines the applied loads per the active load code, solves the
//! beam statics for every combination, takes the envelope of shear and moment
//! and compares it with the flexural and shear capacity of the assigned
//! W-shape. Bracing strength and stiffness requirements are computed alongside.
//! All inputs and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions over immutable inputs
//! - **JSON-First**: Jobs, configurations and reports implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, never silent defaults
//!
//! ## Quick Start
//!
//! ```rust
//! use steel_core::config::ProjectConfig;
//! use steel_core::design::BracingTopology;
//! use steel_core::loads::{Load, LoadCase};
//! use steel_core::materials::builtin_common_shapes;
//! use steel_core::model::SupportCondition;
//! use steel_core::workflow::{run_design, BeamInput, BracingInput, DesignJob};
//!
//! let job = DesignJob {
//!     config: ProjectConfig::new("Warehouse", "25-001"),
//!     beam: BeamInput {
//!         label: "B-1".to_string(),
//!         length: 8.0,
//!         support: SupportCondition::Simple,
//!         loads: vec![Load::distributed(LoadCase::Dead, 5.0, 0.0, 8.0).unwrap()],
//!         section: "W18X35".to_string(),
//!         material: "A992".to_string(),
//!     },
//!     bracing: BracingInput {
//!         unbraced_length: 4.0,
//!         topology: BracingTopology::Point,
//!         curvature: Default::default(),
//!     },
//!     column: None,
//! };
//!
//! let report = run_design(&job, &builtin_common_shapes()).unwrap();
//! assert!(report.passes());
//! ```
//!
//! ## Modules
//!
//! - [`config`] - Project metadata, codes, method and units
//! - [`loads`] - Load cases, loads and load combinations
//! - [`model`] - Beam geometry, supports and assigned section
//! - [`analysis`] - Statics solver and force envelope
//! - [`materials`] - Steel grades and the W-shape database
//! - [`design`] - Capacity checks and bracing requirements
//! - [`workflow`] - Job input, full pipeline and report
//! - [`units`] - Reporting units and capacity scale factors
//! - [`errors`] - Structured error types
//! - [`file_io`] - JSON files with atomic saves

pub mod analysis;
pub mod config;
pub mod design;
pub mod errors;
pub mod file_io;
pub mod loads;
pub mod materials;
pub mod model;
pub mod units;
pub mod workflow;

// Re-export commonly used types at crate root for convenience
pub use errors::{CalcError, CalcResult};
pub use config::ProjectConfig;
pub use model::{Beam, SupportCondition};
pub use workflow::{run_design, DesignJob, DesignReport};
