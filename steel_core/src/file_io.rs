//! # File I/O Module
//!
//! JSON persistence for project configurations, design jobs and reports:
//! - **Atomic saves**: write to `.tmp`, fsync, rename over the target
//! - **Version validation**: configuration and job files must carry a
//!   compatible schema version
//!
//! ## Example
//!
//! ```rust,no_run
//! use steel_core::config::ProjectConfig;
//! use steel_core::file_io::{load_config, save_config};
//! use std::path::Path;
//!
//! let config = ProjectConfig::new("Warehouse", "25-001");
//! save_config(&config, Path::new("project.json"))?;
//!
//! let loaded = load_config(Path::new("project.json"))?;
//! assert_eq!(loaded.meta.project_id, "25-001");
//! # Ok::<(), steel_core::errors::CalcError>(())
//! ```

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use log::debug;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::{ProjectConfig, SCHEMA_VERSION};
use crate::errors::{CalcError, CalcResult};
use crate::workflow::{DesignJob, DesignReport};

/// Serialize `value` as pretty JSON and write it atomically.
///
/// The save process:
/// 1. Serialize to JSON
/// 2. Write to a temporary file next to the target
/// 3. Sync to disk (fsync)
/// 4. Rename over the target (atomic on most filesystems)
pub fn save_json<T: Serialize>(value: &T, path: &Path) -> CalcResult<()> {
    let json = serde_json::to_string_pretty(value)?;

    let tmp_path = tmp_path_for(path);

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        CalcError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(json.as_bytes()).map_err(|e| {
        CalcError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        CalcError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        CalcError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    debug!("Saved {}", path.display());
    Ok(())
}

/// Read and parse a JSON file
pub fn load_json<T: DeserializeOwned>(path: &Path) -> CalcResult<T> {
    let contents = fs::read_to_string(path)
        .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;

    serde_json::from_str(&contents).map_err(|e| CalcError::SerializationError {
        reason: format!("Invalid JSON in {}: {}", path.display(), e),
    })
}

/// Save a project configuration
pub fn save_config(config: &ProjectConfig, path: &Path) -> CalcResult<()> {
    save_json(config, path)
}

/// Load a project configuration and check its schema version and units
pub fn load_config(path: &Path) -> CalcResult<ProjectConfig> {
    let config: ProjectConfig = load_json(path)?;
    validate_version(&config.meta.version)?;
    config.validate()?;
    Ok(config)
}

/// Load a design job and check the schema version of its configuration
pub fn load_job(path: &Path) -> CalcResult<DesignJob> {
    let job: DesignJob = load_json(path)?;
    validate_version(&job.config.meta.version)?;
    job.config.validate()?;
    Ok(job)
}

/// Save a design report as JSON
pub fn save_report(report: &DesignReport, path: &Path) -> CalcResult<()> {
    save_json(report, path)
}

/// Temporary sibling used during atomic saves (`report.json` -> `report.json.tmp`)
fn tmp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Validate that a file version is compatible with the current schema.
fn validate_version(file_version: &str) -> CalcResult<()> {
    let mismatch = || CalcError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: SCHEMA_VERSION.to_string(),
    };

    let parse = |v: &str| -> Option<Vec<u32>> { v.split('.').map(|p| p.parse().ok()).collect() };
    let file_parts = parse(file_version).ok_or_else(mismatch)?;
    let current_parts = parse(SCHEMA_VERSION).ok_or_else(mismatch)?;

    // Major version must match
    if file_parts.first() != current_parts.first() {
        return Err(mismatch());
    }

    // For 0.x versions a newer minor may carry breaking changes
    if current_parts[0] == 0 {
        if let (Some(file_minor), Some(current_minor)) = (file_parts.get(1), current_parts.get(1)) {
            if file_minor > current_minor {
                return Err(mismatch());
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ActionsCode;
    use std::env::temp_dir;

    fn temp_path(name: &str) -> PathBuf {
        temp_dir().join(format!("steel_core_test_{}.json", name))
    }

    #[test]
    fn test_tmp_path_generation() {
        let tmp = tmp_path_for(Path::new("/path/to/project.json"));
        assert_eq!(tmp, Path::new("/path/to/project.json.tmp"));
    }

    #[test]
    fn test_save_and_load_config_roundtrip() {
        let path = temp_path("config_roundtrip");

        let config = ProjectConfig::new("Test Project", "TEST-001")
            .with_codes(ActionsCode::NtcAcciones2023, crate::config::SteelDesignCode::Aisc360_22);
        save_config(&config, &path).unwrap();

        let loaded = load_config(&path).unwrap();
        assert_eq!(loaded, config);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_atomic_save_leaves_no_tmp_file() {
        let path = temp_path("atomic");
        save_config(&ProjectConfig::new("T", "T"), &path).unwrap();

        assert!(!tmp_path_for(&path).exists());
        assert!(path.exists());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_newer_schema_rejected_on_load() {
        let path = temp_path("newer_schema");
        let mut config = ProjectConfig::new("T", "T");
        config.meta.version = "0.9.0".to_string();
        save_config(&config, &path).unwrap();

        let err = load_config(&path).unwrap_err();
        assert_eq!(err.error_code(), "VERSION_MISMATCH");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_invalid_json_is_serialization_error() {
        let path = temp_path("invalid_json");
        fs::write(&path, "{ not json").unwrap();
        let err = load_config(&path).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_missing_file() {
        let err = load_job(Path::new("/nonexistent/job.json")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_version_validation() {
        assert!(validate_version(SCHEMA_VERSION).is_ok());
        assert!(validate_version("0.1.5").is_ok());
        assert!(validate_version("0.0.9").is_ok());
        assert!(validate_version("1.0.0").is_err());
        assert!(validate_version("0.2.0").is_err());
        assert!(validate_version("garbage").is_err());
    }
}
