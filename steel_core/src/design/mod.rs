//! # Steel Member Design
//!
//! - [`capacity`] - Flexure and shear checks behind the [`CapacityCheck`] trait
//! - [`bracing`] - Stability bracing strength and stiffness requirements

pub mod bracing;
pub mod capacity;

pub use bracing::{
    BraceKind, BracingCalculator, BracingTopology, Curvature, LateralBracing, Stiffness,
    TorsionalBracing,
};
pub use capacity::{
    checker_for, Aisc360Asd, Aisc360Lrfd, CapacityCheck, CapacityResult, CheckStatus, LimitState,
};
