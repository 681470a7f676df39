//! Steel Shapes Database (AISC W-shapes)
//!
//! Section properties for wide flange shapes per the AISC Steel Construction
//! Manual. Records are stored in US customary units (in, in², in³, in⁴) exactly
//! as tabulated; [`SectionDb::lookup`] hands out a copy converted to the
//! regime the project works in.
//!
//! The database is an explicit read-only service: build it once (built-in
//! table or CSV export of the AISC Shapes Database) and pass it by reference.
//!
//! ## Example
//!
//! ```rust
//! use steel_core::materials::builtin_common_shapes;
//! use steel_core::units::UnitRegime;
//!
//! let db = builtin_common_shapes();
//!
//! let imperial = db.lookup("W18X35", UnitRegime::Imperial).unwrap();
//! assert_eq!(imperial.zx, 66.5); // in³
//!
//! let metric = db.lookup("w18x35", UnitRegime::Metric).unwrap();
//! assert!((metric.d - 17.7 * 25.4).abs() < 1e-9); // mm
//! ```

use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use super::SteelMaterial;
use crate::errors::{CalcError, CalcResult};
use crate::units::{UnitRegime, MM_PER_IN};

/// Columns every W row must carry with positive values
const REQUIRED_COLUMNS: [&str; 4] = ["d", "tf", "tw", "Zx"];

/// Columns that default to zero when blank
const OPTIONAL_COLUMNS: [&str; 11] = ["W", "A", "bf", "Ix", "Sx", "rx", "Iy", "Sy", "ry", "Zy", "J"];

/// Kilograms per meter in one pound per foot
const KG_M_PER_PLF: f64 = 1.488_164;

/// Wide flange (W) shape properties
///
/// Units follow `regime`: inches for [`UnitRegime::Imperial`], millimeters
/// for [`UnitRegime::Metric`]. Weight is lb/ft or kg/m respectively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SteelShape {
    /// AISC Manual label (e.g., "W18X35")
    pub label: String,

    /// Unit regime of the numeric fields below
    pub regime: UnitRegime,

    /// Nominal weight per unit length
    pub weight: f64,

    /// Cross-sectional area
    pub area: f64,

    /// Overall depth
    pub d: f64,

    /// Flange width
    pub bf: f64,

    /// Flange thickness
    pub tf: f64,

    /// Web thickness
    pub tw: f64,

    // === Strong Axis (X-X) ===
    pub ix: f64,
    pub sx: f64,
    pub rx: f64,
    /// Plastic section modulus about X-axis
    pub zx: f64,

    // === Weak Axis (Y-Y) ===
    pub iy: f64,
    pub sy: f64,
    pub ry: f64,
    /// Plastic section modulus about Y-axis
    pub zy: f64,

    /// Torsional constant
    pub j: f64,
}

impl SteelShape {
    /// Distance between flange centroids, `d - tf`
    pub fn h0(&self) -> f64 {
        self.d - self.tf
    }

    /// Copy of this shape expressed in `regime`
    pub fn in_regime(&self, regime: UnitRegime) -> SteelShape {
        match (self.regime, regime) {
            (UnitRegime::Imperial, UnitRegime::Metric) => self.scaled(MM_PER_IN, KG_M_PER_PLF, regime),
            (UnitRegime::Metric, UnitRegime::Imperial) => {
                self.scaled(1.0 / MM_PER_IN, 1.0 / KG_M_PER_PLF, regime)
            }
            _ => self.clone(),
        }
    }

    fn scaled(&self, k: f64, weight_factor: f64, regime: UnitRegime) -> SteelShape {
        let k2 = k.powi(2);
        let k3 = k.powi(3);
        let k4 = k.powi(4);
        SteelShape {
            label: self.label.clone(),
            regime,
            weight: self.weight * weight_factor,
            area: self.area * k2,
            d: self.d * k,
            bf: self.bf * k,
            tf: self.tf * k,
            tw: self.tw * k,
            ix: self.ix * k4,
            sx: self.sx * k3,
            rx: self.rx * k,
            zx: self.zx * k3,
            iy: self.iy * k4,
            sy: self.sy * k3,
            ry: self.ry * k,
            zy: self.zy * k3,
            j: self.j * k4,
        }
    }

    fn length_symbol(&self) -> &'static str {
        match self.regime {
            UnitRegime::Imperial => "in",
            UnitRegime::Metric => "mm",
        }
    }
}

impl std::fmt::Display for SteelShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let u = self.length_symbol();
        write!(
            f,
            "{} (A={:.2} {u}², Ix={:.1} {u}⁴, Zx={:.1} {u}³)",
            self.label, self.area, self.ix, self.zx
        )
    }
}

// ============================================================================
// Section Database
// ============================================================================

/// W-shape database indexed by uppercase AISC label
///
/// Records are kept in the imperial regime.
#[derive(Debug, Clone, Default)]
pub struct SectionDb {
    shapes: HashMap<String, SteelShape>,

    /// Database version (e.g., "16.0", "builtin-common")
    pub version: Option<String>,
}

impl SectionDb {
    /// Create an empty database
    pub fn new() -> Self {
        Self::default()
    }

    /// Load W-shapes from a CSV export of the AISC Shapes Database
    ///
    /// Rows whose `Type` is not `W` are skipped, as are W rows without a
    /// positive `d`, `tf`, `tw` or `Zx`. Other properties default to zero
    /// when blank.
    ///
    /// # Errors
    ///
    /// [`CalcError::FileError`] when the file cannot be read or a required
    /// column is absent from the header.
    pub fn load_from_csv(path: impl AsRef<Path>) -> CalcResult<Self> {
        use std::fs::File;
        use std::io::{BufRead, BufReader};

        let path = path.as_ref();
        let path_str = path.display().to_string();

        let file = File::open(path).map_err(|e| {
            CalcError::file_error("open", &path_str, format!("Failed to open CSV: {}", e))
        })?;

        let mut lines = BufReader::new(file).lines();

        let header_line = lines
            .next()
            .ok_or_else(|| CalcError::file_error("read", &path_str, "CSV file is empty"))?
            .map_err(|e| CalcError::file_error("read", &path_str, format!("Failed to read header: {}", e)))?;

        let headers: Vec<&str> = header_line.split(',').map(str::trim).collect();
        // Exact match first: the export has both "d" and "D" style headers
        let col_index = |name: &str| -> Option<usize> {
            headers
                .iter()
                .position(|h| *h == name)
                .or_else(|| headers.iter().position(|h| h.eq_ignore_ascii_case(name)))
        };

        let type_idx = col_index("Type")
            .ok_or_else(|| CalcError::file_error("parse", &path_str, "Missing 'Type' column"))?;
        let label_idx = col_index("AISC_Manual_Label")
            .ok_or_else(|| CalcError::file_error("parse", &path_str, "Missing 'AISC_Manual_Label' column"))?;

        let mut required = [0usize; 4];
        for (slot, name) in required.iter_mut().zip(REQUIRED_COLUMNS) {
            *slot = col_index(name).ok_or_else(|| {
                CalcError::file_error("parse", &path_str, format!("Missing '{}' column", name))
            })?;
        }
        let optional = OPTIONAL_COLUMNS.map(|name| col_index(name));

        let mut db = SectionDb::new();
        let mut skipped = 0usize;
        let mut incomplete = 0usize;

        for (line_num, line_result) in lines.enumerate() {
            let line = line_result.map_err(|e| {
                CalcError::file_error("read", &path_str, format!("Failed to read line {}: {}", line_num + 2, e))
            })?;

            if line.trim().is_empty() {
                continue;
            }

            let fields: Vec<&str> = line.split(',').collect();
            let type_str = fields.get(type_idx).map(|s| s.trim()).unwrap_or("");
            let label = fields.get(label_idx).map(|s| s.trim()).unwrap_or("");

            if label.is_empty() || !type_str.eq_ignore_ascii_case("W") {
                skipped += 1;
                continue;
            }

            let required_values = required.map(|i| {
                fields
                    .get(i)
                    .and_then(|v| parse_optional_f64(v))
                    .filter(|v| *v > 0.0)
            });
            let [Some(d), Some(tf), Some(tw), Some(zx)] = required_values else {
                warn!("Skipping {} on line {}: d, tf, tw and Zx must be positive", label, line_num + 2);
                incomplete += 1;
                continue;
            };

            let [w, a, bf, ix, sx, rx, iy, sy, ry, zy, j] = optional.map(|idx| {
                idx.and_then(|i| fields.get(i))
                    .and_then(|v| parse_optional_f64(v))
                    .unwrap_or(0.0)
            });

            db.insert(SteelShape {
                label: label.to_string(),
                regime: UnitRegime::Imperial,
                weight: w,
                area: a,
                d,
                bf,
                tf,
                tw,
                ix,
                sx,
                rx,
                zx,
                iy,
                sy,
                ry,
                zy,
                j,
            });
        }

        if incomplete > 0 {
            warn!("Skipped {} W rows with missing strength properties in {}", incomplete, path_str);
        }
        debug!("Skipped {} non-W rows in {}", skipped, path_str);
        info!("Loaded {} W-shapes from {}", db.len(), path_str);
        db.version = Some(path_str);
        Ok(db)
    }

    /// Insert a shape, converting it to the stored imperial regime
    pub fn insert(&mut self, shape: SteelShape) {
        let key = shape.label.to_uppercase();
        self.shapes.insert(key, shape.in_regime(UnitRegime::Imperial));
    }

    /// Tabulated (imperial) record for a label, case-insensitive
    pub fn record(&self, label: &str) -> CalcResult<&SteelShape> {
        self.shapes
            .get(&label.to_uppercase())
            .ok_or_else(|| CalcError::section_not_found(label))
    }

    /// Look up a shape and express it in the requested regime
    ///
    /// # Errors
    ///
    /// [`CalcError::SectionNotFound`] when the label is not in the database.
    pub fn lookup(&self, label: &str, regime: UnitRegime) -> CalcResult<SteelShape> {
        self.record(label).map(|shape| shape.in_regime(regime))
    }

    /// Shapes whose label starts with `prefix`, sorted by label
    pub fn search(&self, prefix: &str) -> Vec<&SteelShape> {
        let prefix = prefix.to_uppercase();
        let mut found: Vec<&SteelShape> = self
            .shapes
            .iter()
            .filter(|(k, _)| k.starts_with(&prefix))
            .map(|(_, v)| v)
            .collect();
        found.sort_by(|a, b| a.label.cmp(&b.label));
        found
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

/// Parse an optional f64 from a CSV field
///
/// Returns None for empty strings, dashes, or invalid numbers.
fn parse_optional_f64(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    if trimmed.is_empty() || trimmed == "-" || trimmed == "—" {
        return None;
    }
    f64::from_str(trimmed).ok()
}

// ============================================================================
// Built-in Common Shapes (for use without CSV file)
// ============================================================================

/// Database with common W-shapes pre-loaded (AISC Manual 16th Ed)
pub fn builtin_common_shapes() -> SectionDb {
    let mut db = SectionDb::new();

    // (label, W, A, d, bf, tf, tw, Ix, Sx, rx, Zx, Iy, Sy, ry, Zy, J)
    let common_w_shapes = [
        ("W6X9", 9.0, 2.68, 5.9, 3.94, 0.215, 0.17, 16.4, 5.56, 2.47, 6.23, 2.2, 1.11, 0.905, 1.72, 0.0398),
        ("W6X15", 15.0, 4.43, 5.99, 5.99, 0.26, 0.23, 29.1, 9.72, 2.56, 10.8, 9.32, 3.11, 1.45, 4.75, 0.101),
        ("W8X18", 18.0, 5.26, 8.14, 5.25, 0.33, 0.23, 61.9, 15.2, 3.43, 17.0, 7.97, 3.04, 1.23, 4.66, 0.172),
        ("W8X24", 24.0, 7.08, 7.93, 6.5, 0.4, 0.245, 82.7, 20.9, 3.42, 23.1, 18.3, 5.63, 1.61, 8.57, 0.346),
        ("W8X31", 31.0, 9.13, 8.0, 8.0, 0.435, 0.285, 110.0, 27.5, 3.47, 30.4, 37.1, 9.27, 2.02, 14.1, 0.536),
        ("W10X22", 22.0, 6.49, 10.2, 5.75, 0.36, 0.24, 118.0, 23.2, 4.27, 26.0, 11.4, 3.97, 1.33, 6.1, 0.239),
        ("W10X33", 33.0, 9.71, 9.73, 7.96, 0.435, 0.29, 170.0, 35.0, 4.19, 38.8, 36.6, 9.2, 1.94, 14.0, 0.583),
        ("W10X49", 49.0, 14.4, 10.0, 10.0, 0.56, 0.34, 272.0, 54.6, 4.35, 60.4, 93.4, 18.7, 2.54, 28.3, 1.39),
        ("W12X19", 19.0, 5.57, 12.2, 4.01, 0.35, 0.235, 130.0, 21.3, 4.82, 24.7, 3.76, 1.88, 0.822, 2.98, 0.18),
        ("W12X26", 26.0, 7.65, 12.2, 6.49, 0.38, 0.23, 204.0, 33.4, 5.17, 37.2, 17.3, 5.34, 1.51, 8.17, 0.3),
        ("W12X40", 40.0, 11.7, 11.9, 8.01, 0.515, 0.295, 307.0, 51.5, 5.13, 57.0, 44.1, 11.0, 1.94, 16.8, 0.906),
        ("W12X58", 58.0, 17.0, 12.2, 10.0, 0.64, 0.36, 475.0, 78.0, 5.28, 86.4, 107.0, 21.4, 2.51, 32.5, 2.1),
        ("W14X22", 22.0, 6.49, 13.7, 5.0, 0.335, 0.23, 199.0, 29.0, 5.54, 33.2, 7.0, 2.8, 1.04, 4.39, 0.208),
        ("W14X30", 30.0, 8.85, 13.8, 6.73, 0.385, 0.27, 291.0, 42.0, 5.73, 47.3, 19.6, 5.82, 1.49, 8.99, 0.38),
        ("W14X48", 48.0, 14.1, 13.8, 8.03, 0.595, 0.34, 484.0, 70.2, 5.85, 78.4, 51.4, 12.8, 1.91, 19.6, 1.45),
        ("W14X90", 90.0, 26.5, 14.0, 14.5, 0.71, 0.44, 999.0, 143.0, 6.14, 157.0, 362.0, 49.9, 3.7, 75.6, 4.06),
        ("W16X26", 26.0, 7.68, 15.7, 5.5, 0.345, 0.25, 301.0, 38.4, 6.26, 44.2, 9.59, 3.49, 1.12, 5.48, 0.262),
        ("W16X36", 36.0, 10.6, 15.9, 6.99, 0.43, 0.295, 448.0, 56.5, 6.51, 64.0, 24.5, 7.0, 1.52, 10.8, 0.545),
        ("W16X50", 50.0, 14.7, 16.3, 7.07, 0.63, 0.38, 659.0, 81.0, 6.68, 92.0, 37.2, 10.5, 1.59, 16.3, 1.52),
        ("W18X35", 35.0, 10.3, 17.7, 6.0, 0.425, 0.3, 510.0, 57.6, 7.04, 66.5, 15.3, 5.12, 1.22, 8.06, 0.506),
        ("W18X50", 50.0, 14.7, 18.0, 7.5, 0.57, 0.355, 800.0, 88.9, 7.38, 101.0, 40.1, 10.7, 1.65, 16.6, 1.24),
        ("W18X71", 71.0, 20.9, 18.5, 7.64, 0.81, 0.495, 1170.0, 127.0, 7.5, 146.0, 60.3, 15.8, 1.7, 24.7, 3.49),
        ("W21X44", 44.0, 13.0, 20.7, 6.5, 0.45, 0.35, 843.0, 81.6, 8.06, 95.4, 20.7, 6.37, 1.26, 10.2, 0.77),
        ("W21X62", 62.0, 18.3, 21.0, 8.24, 0.615, 0.4, 1330.0, 127.0, 8.54, 144.0, 57.5, 14.0, 1.77, 21.7, 1.83),
        ("W24X55", 55.0, 16.2, 23.6, 7.01, 0.505, 0.395, 1350.0, 114.0, 9.11, 134.0, 29.1, 8.3, 1.34, 13.3, 1.18),
        ("W24X76", 76.0, 22.4, 23.9, 8.99, 0.68, 0.44, 2100.0, 176.0, 9.69, 200.0, 82.5, 18.4, 1.92, 28.6, 2.68),
        ("W24X94", 94.0, 27.7, 24.3, 9.07, 0.875, 0.515, 2700.0, 222.0, 9.87, 254.0, 109.0, 24.0, 1.98, 37.5, 5.26),
    ];

    for (label, w, a, d, bf, tf, tw, ix, sx, rx, zx, iy, sy, ry, zy, j) in common_w_shapes {
        db.insert(SteelShape {
            label: label.to_string(),
            regime: UnitRegime::Imperial,
            weight: w,
            area: a,
            d,
            bf,
            tf,
            tw,
            ix,
            sx,
            rx,
            zx,
            iy,
            sy,
            ry,
            zy,
            j,
        });
    }

    db.version = Some("builtin-common".to_string());
    db
}

// ============================================================================
// Assigned Section
// ============================================================================

/// Section and material assigned to a beam
///
/// The shape must already be in the regime matching the material's stress
/// unit (mm with MPa, in with ksi).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SteelSection {
    pub shape: SteelShape,
    pub material: SteelMaterial,
}

impl SteelSection {
    pub fn new(shape: SteelShape, material: SteelMaterial) -> Self {
        SteelSection { shape, material }
    }

    pub fn label(&self) -> &str {
        &self.shape.label
    }

    pub fn yield_stress(&self) -> f64 {
        self.material.fy
    }

    pub fn ultimate_stress(&self) -> f64 {
        self.material.fu
    }

    pub fn elastic_modulus(&self) -> f64 {
        self.material.e
    }

    pub fn zx(&self) -> f64 {
        self.shape.zx
    }

    pub fn zy(&self) -> f64 {
        self.shape.zy
    }

    pub fn tw(&self) -> f64 {
        self.shape.tw
    }

    pub fn d(&self) -> f64 {
        self.shape.d
    }

    /// Distance between flange centroids in section units
    pub fn h0(&self) -> f64 {
        self.shape.h0()
    }
}

impl std::fmt::Display for SteelSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} / {}", self.shape.label, self.material.name)
    }
}
