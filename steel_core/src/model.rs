//! # Beam Model
//!
//! A single-span beam: length, support idealization, the loads applied to it
//! and the section assigned to it. Loads are appended in order and never
//! removed; the solver borrows the beam immutably.
//!
//! ## Example
//!
//! ```rust
//! use steel_core::loads::{Load, LoadCase};
//! use steel_core::model::{Beam, SupportCondition};
//!
//! let mut beam = Beam::new("B-1", 8.0, SupportCondition::Simple).unwrap();
//! beam.add_load(Load::distributed(LoadCase::Dead, 5.0, 0.0, 8.0).unwrap()).unwrap();
//! beam.add_load(Load::point(LoadCase::Dead, 15.0, 4.0).unwrap()).unwrap();
//!
//! // Loads must lie on the beam
//! assert!(beam.add_load(Load::point(LoadCase::Live, 1.0, 9.0).unwrap()).is_err());
//! assert_eq!(beam.loads().len(), 2);
//! ```

use log::info;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::loads::Load;
use crate::materials::SteelSection;
use crate::units::UnitSystem;

/// Support idealization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SupportCondition {
    /// Pin at x = 0, roller at x = L
    Simple,
    /// Fixed at x = 0, free at x = L
    Cantilever,
    /// Fixed at both ends (not solved)
    FixedFixed,
}

impl SupportCondition {
    pub fn display_name(&self) -> &'static str {
        match self {
            SupportCondition::Simple => "Simply supported",
            SupportCondition::Cantilever => "Cantilever (fixed at left end)",
            SupportCondition::FixedFixed => "Fixed-fixed",
        }
    }
}

impl std::fmt::Display for SupportCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Single-span steel beam
///
/// Built through [`Beam::new`] and [`Beam::add_load`] so every instance is
/// validated; job files go through [`crate::workflow::BeamInput`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Beam {
    label: String,
    length: f64,
    support: SupportCondition,
    loads: Vec<Load>,
    section: Option<SteelSection>,
}

impl Beam {
    /// Create an unloaded beam
    ///
    /// # Errors
    ///
    /// [`CalcError::DegenerateInput`] for a zero or negative length,
    /// [`CalcError::InvalidInput`] for a non-finite one.
    pub fn new(label: impl Into<String>, length: f64, support: SupportCondition) -> CalcResult<Self> {
        if !length.is_finite() {
            return Err(CalcError::invalid_input("length", length.to_string(), "Value must be finite"));
        }
        if length <= 0.0 {
            return Err(CalcError::degenerate(
                "length",
                format!("Beam length must be positive, got {}", length),
            ));
        }
        Ok(Beam {
            label: label.into(),
            length,
            support,
            loads: Vec::new(),
            section: None,
        })
    }

    /// Append a load, rejecting placements outside `[0, length]`
    pub fn add_load(&mut self, load: Load) -> CalcResult<()> {
        let (start, end) = load.distribution().extent();
        if start < 0.0 || end > self.length {
            return Err(CalcError::invalid_input(
                "load position",
                format!("[{}, {}]", start, end),
                format!("Load must lie within the beam [0, {}]", self.length),
            ));
        }
        self.loads.push(load);
        Ok(())
    }

    /// Append several loads, stopping at the first invalid one
    pub fn with_loads(mut self, loads: impl IntoIterator<Item = Load>) -> CalcResult<Self> {
        for load in loads {
            self.add_load(load)?;
        }
        Ok(self)
    }

    /// Assign (or replace) the section and material
    pub fn assign_section(&mut self, section: SteelSection) {
        info!("Assigned {} to beam '{}'", section, self.label);
        self.section = Some(section);
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn support(&self) -> SupportCondition {
        self.support
    }

    pub fn loads(&self) -> &[Load] {
        &self.loads
    }

    /// Assigned section
    ///
    /// # Errors
    ///
    /// [`CalcError::MissingSection`] if no section has been assigned.
    pub fn section(&self) -> CalcResult<&SteelSection> {
        self.section
            .as_ref()
            .ok_or_else(|| CalcError::missing_section(&self.label))
    }

    /// Short multi-line description for reports, labelled with `units`
    pub fn describe(&self, units: &UnitSystem) -> String {
        let length = units.length.symbol();
        let stress = units.stress.symbol();

        let mut out = format!(
            "Beam '{}': span {} {}, {}\n",
            self.label, self.length, length, self.support
        );
        match &self.section {
            Some(section) => out.push_str(&format!(
                "  Section: {}, {} (Fy = {} {stress}, E = {} {stress})\n",
                section.shape.label,
                section.material.name,
                section.yield_stress(),
                section.elastic_modulus()
            )),
            None => out.push_str("  Section: not assigned\n"),
        }
        out.push_str(&format!(
            "  Loads ({}; forces in {}, line loads in {}/{}):\n",
            self.loads.len(),
            units.force.symbol(),
            units.force.symbol(),
            length
        ));
        for load in &self.loads {
            out.push_str(&format!("    - {}\n", load));
        }
        out
    }
}
