//! Tip chart loading and lookup.
//!
//! The chart is the fixed reference table mapping a tip size to its
//! matching injector, diffuser, and air nozzle sizes. It is loaded once
//! at process start from a JSON file, validated eagerly, and never
//! mutated afterwards.

use std::env;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default filename for the cached tip chart.
const CHART_FILENAME: &str = "tip_chart.json";

/// Environment variable that overrides the chart location.
pub const CHART_ENV_VAR: &str = "TIPSELECT_CHART";

/// One row of the sizing chart.
///
/// The tip size is the primary key; the other three fields are the
/// component sizes recommended for that tip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TipRow {
    /// Injector orifice size, the value the nozzle number is matched on.
    pub tip_size: f64,
    /// Matching injector size.
    pub injector_size: f64,
    /// Matching diffuser size.
    pub diffuser_size: f64,
    /// Matching air nozzle size.
    pub air_nozzle_size: f64,
}

impl TipRow {
    fn validate(&self) -> Result<()> {
        let fields = [
            ("tip_size", self.tip_size),
            ("injector_size", self.injector_size),
            ("diffuser_size", self.diffuser_size),
            ("air_nozzle_size", self.air_nozzle_size),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::ChartDataValidation {
                    message: format!(
                        "{name} must be finite and positive, got {value} (tip {})",
                        self.tip_size
                    ),
                });
            }
        }
        Ok(())
    }
}

/// The sizing chart loaded into memory.
///
/// Read-only after construction; share it freely across threads.
#[derive(Debug, Clone, Default)]
pub struct TipChart {
    rows: Vec<TipRow>,
    source: Option<PathBuf>,
}

impl TipChart {
    /// Load a tip chart from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::ChartNotFound {
                path: path.to_path_buf(),
            });
        }
        let file = fs::File::open(path)?;
        let mut chart = Self::from_reader(file)?;
        chart.source = Some(path.to_path_buf());
        Ok(chart)
    }

    /// Load a tip chart from a reader (e.g., file or in-memory buffer).
    ///
    /// The expected format is a JSON array of row objects:
    ///
    /// ```json
    /// [{"tip_size": 5.0, "injector_size": 2.5,
    ///   "diffuser_size": 4.0, "air_nozzle_size": 2.0}]
    /// ```
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let rows: Vec<TipRow> = serde_json::from_reader(reader)?;
        Self::from_rows(rows)
    }

    /// Build a chart from already-parsed rows, applying load-time
    /// validation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyChart`] when no rows are supplied, and
    /// [`Error::ChartDataValidation`] when any size is non-finite or
    /// not strictly positive.
    pub fn from_rows(rows: Vec<TipRow>) -> Result<Self> {
        if rows.is_empty() {
            return Err(Error::EmptyChart);
        }
        for row in &rows {
            row.validate()?;
        }
        Ok(Self { rows, source: None })
    }

    /// All tip sizes in ascending order, deduplicated.
    pub fn tips(&self) -> Vec<f64> {
        let mut tips: Vec<f64> = self.rows.iter().map(|r| r.tip_size).collect();
        tips.sort_by(|a, b| a.total_cmp(b));
        tips.dedup();
        tips
    }

    /// Retrieve the row for an exact tip size, if present.
    ///
    /// When duplicate tip sizes exist the first row in chart order wins.
    pub fn row_for_tip(&self, tip: f64) -> Option<&TipRow> {
        self.rows.iter().find(|r| r.tip_size == tip)
    }

    /// All rows in chart order.
    pub fn rows(&self) -> &[TipRow] {
        &self.rows
    }

    /// Number of rows in the chart.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the chart has no rows. Always false for a chart built
    /// through the validating constructors.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get the source path if the chart was loaded from a file.
    pub fn source_path(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

/// Resolve the default chart location using platform-specific project
/// directories.
pub fn default_chart_path() -> Result<PathBuf> {
    let dirs =
        ProjectDirs::from("io", "tipselect", "tipselect").ok_or(Error::ProjectDirsUnavailable)?;
    Ok(dirs.data_dir().join(CHART_FILENAME))
}

/// Resolve the chart path from an explicit override, the
/// `TIPSELECT_CHART` environment variable, or the platform default, in
/// that order.
pub fn resolve_chart_path(override_path: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = override_path {
        return Ok(path.to_path_buf());
    }
    if let Ok(path) = env::var(CHART_ENV_VAR) {
        if !path.is_empty() {
            return Ok(PathBuf::from(path));
        }
    }
    default_chart_path()
}
