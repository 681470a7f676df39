//! # Project Configuration
//!
//! `ProjectConfig` selects the codes, design method and reporting units used
//! by a check run, and carries the report metadata (project, element, people,
//! dates). It serializes to JSON and is normally loaded through
//! [`crate::file_io::load_config`].
//!
//! ```text
//! ProjectConfig
//! ├── meta: ProjectMetadata (schema version, project/element info, people, dates)
//! ├── actions_code: ActionsCode (load combinations)
//! ├── design_code: SteelDesignCode (member capacity)
//! ├── method: DesignMethod (LRFD / ASD)
//! └── units: UnitSystem
//! ```
//!
//! ## Example
//!
//! ```rust
//! use steel_core::config::{ProjectConfig, ActionsCode, SteelDesignCode};
//! use steel_core::loads::DesignMethod;
//!
//! let config = ProjectConfig::new("Warehouse", "25-001")
//!     .with_codes(ActionsCode::NtcAcciones2023, SteelDesignCode::Aisc360_22)
//!     .with_method(DesignMethod::Lrfd);
//!
//! let json = serde_json::to_string_pretty(&config).unwrap();
//! assert!(json.contains("NtcAcciones2023"));
//! ```

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;
use crate::loads::DesignMethod;
use crate::units::UnitSystem;

/// Current schema version for configuration and job files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Code governing loads and load combinations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionsCode {
    /// ASCE 7-22 Minimum Design Loads
    Asce7_22,
    /// NTC-CDMX-2023 Acciones y Criterios
    NtcAcciones2023,
}

impl ActionsCode {
    pub fn display_name(&self) -> &'static str {
        match self {
            ActionsCode::Asce7_22 => "ASCE 7-22",
            ActionsCode::NtcAcciones2023 => "NTC-CDMX-2023",
        }
    }
}

impl std::fmt::Display for ActionsCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Code governing steel member strength
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SteelDesignCode {
    /// AISC 360-22 Specification for Structural Steel Buildings
    Aisc360_22,
    /// NTC-Acero-2020 (Mexico City steel standard)
    NtcAcero2020,
}

impl SteelDesignCode {
    pub fn display_name(&self) -> &'static str {
        match self {
            SteelDesignCode::Aisc360_22 => "AISC 360-22",
            SteelDesignCode::NtcAcero2020 => "NTC-Acero-2020",
        }
    }
}

impl std::fmt::Display for SteelDesignCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Report metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,

    /// Project name
    pub project_name: String,

    /// Project number
    pub project_id: String,

    #[serde(default)]
    pub location: String,

    #[serde(default)]
    pub client: String,

    /// Report title
    #[serde(default)]
    pub title: String,

    /// Element under review (e.g., "Beam B-203, grid 4, level 3")
    #[serde(default)]
    pub element: String,

    /// Responsible engineer
    #[serde(default)]
    pub engineer: String,

    #[serde(default)]
    pub reviewer: String,

    /// Date of issue
    pub issued: NaiveDate,

    /// Revision mark
    #[serde(default = "default_revision")]
    pub revision: String,
}

fn default_revision() -> String {
    "A".to_string()
}

/// Configuration for a check run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectConfig {
    pub meta: ProjectMetadata,

    /// Code used to build load combinations
    pub actions_code: ActionsCode,

    /// Code used for member capacity
    pub design_code: SteelDesignCode,

    /// Design method (LRFD by default)
    #[serde(default = "default_method")]
    pub method: DesignMethod,

    /// Reporting units
    #[serde(default)]
    pub units: UnitSystem,
}

fn default_method() -> DesignMethod {
    DesignMethod::Lrfd
}

impl ProjectConfig {
    /// Create a configuration with ASCE 7-22 / AISC 360-22 / LRFD and SI units.
    pub fn new(project_name: impl Into<String>, project_id: impl Into<String>) -> Self {
        ProjectConfig {
            meta: ProjectMetadata {
                version: SCHEMA_VERSION.to_string(),
                project_name: project_name.into(),
                project_id: project_id.into(),
                location: String::new(),
                client: String::new(),
                title: String::new(),
                element: String::new(),
                engineer: String::new(),
                reviewer: String::new(),
                issued: Utc::now().date_naive(),
                revision: default_revision(),
            },
            actions_code: ActionsCode::Asce7_22,
            design_code: SteelDesignCode::Aisc360_22,
            method: DesignMethod::Lrfd,
            units: UnitSystem::default(),
        }
    }

    /// Set the actions and design codes (builder pattern)
    pub fn with_codes(mut self, actions: ActionsCode, design: SteelDesignCode) -> Self {
        self.actions_code = actions;
        self.design_code = design;
        self
    }

    /// Set the design method (builder pattern)
    pub fn with_method(mut self, method: DesignMethod) -> Self {
        self.method = method;
        self
    }

    /// Set the reporting units (builder pattern)
    pub fn with_units(mut self, units: UnitSystem) -> Self {
        self.units = units;
        self
    }

    /// Set the element description (builder pattern)
    pub fn with_element(mut self, element: impl Into<String>) -> Self {
        self.meta.element = element.into();
        self
    }

    /// Validate settings that serde alone cannot enforce.
    pub fn validate(&self) -> CalcResult<()> {
        self.units.validate()
    }
}

impl Default for ProjectConfig {
    fn default() -> Self {
        ProjectConfig::new("", "")
    }
}
