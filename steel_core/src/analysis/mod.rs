//! # Structural Analysis
//!
//! Statics for determinate single-span beams and the envelope of internal
//! forces across load combinations.
//!
//! - [`solver`] - Reactions and sampled shear/moment diagrams per combination
//! - [`envelope`] - Parallel solve of all combinations and max reduction

pub mod envelope;
pub mod solver;

pub use envelope::{analyze_all, envelope, Envelope};
pub use solver::{AnalysisResult, BeamSolver, Reactions, DEFAULT_SAMPLE_POINTS};
