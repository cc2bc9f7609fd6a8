//! Base-rate table loading.
//!
//! # CSV format
//!
//! One header line (skipped), then one row per operating mode with exactly
//! seven comma-separated fields:
//!
//! ```csv
//! opModeID,meanBaseRate,meanBaseRateCO2,meanBaseRateNOx,energyRateKJperHr,meanBaseRatePM,meanBaseRateCO
//! 0,0.0,0.0,0.0,54000.0,0.0,0.0
//! 1,0.0,0.0,0.0,60000.0,0.0,0.0
//! ```
//!
//! Only the operating-mode id (field 0) and the energy rate in kJ/hr
//! (field 4) are consumed by the cost model; the remaining coefficients are
//! retained untouched as calibration data for future emissions terms.
//!
//! A row with any other field count is a fatal load error — a truncated
//! calibration file must never silently produce a planner.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use crate::{CostError, CostResult};

/// Number of fields in every base-rate table row.
pub const BASE_RATE_FIELDS: usize = 7;

/// Position of the energy rate within the six stored coefficients
/// (file field 4, after the operating-mode id).
pub const ENERGY_RATE_COL: usize = 3;

/// The operating mode representing an idling vehicle — the lowest possible
/// energy rate, used by the search heuristic.
pub const IDLE_OP_MODE: u8 = 1;

/// Immutable operating-mode → calibration-row map.
///
/// Loaded once at cost-model construction; the peak energy rate across all
/// rows is precomputed for the out-of-domain fallback.
#[derive(Clone, Debug)]
pub struct BaseRateTable {
    rows: HashMap<u8, [f64; BASE_RATE_FIELDS - 1]>,
    peak_energy_kj_hr: f64,
}

impl BaseRateTable {
    /// Load the table from a CSV file.
    pub fn from_path(path: &Path) -> CostResult<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Like [`BaseRateTable::from_path`] but accepts any `Read` source.
    ///
    /// Useful for testing (pass a `std::io::Cursor`) or for tables embedded
    /// in a deployment bundle.
    pub fn from_reader<R: Read>(reader: R) -> CostResult<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let mut rows = HashMap::new();

        for (i, result) in csv_reader.records().enumerate() {
            // Header is line 1; the first record is line 2.
            let line = i + 2;
            let record = result.map_err(|e| CostError::Parse { line, msg: e.to_string() })?;

            if record.len() != BASE_RATE_FIELDS {
                return Err(CostError::ColumnCount { line, found: record.len() });
            }

            let op_mode: u8 = record[0].trim().parse().map_err(|_| CostError::Parse {
                line,
                msg: format!("invalid operating mode id {:?}", &record[0]),
            })?;

            let mut coeffs = [0.0; BASE_RATE_FIELDS - 1];
            for (j, field) in record.iter().skip(1).enumerate() {
                coeffs[j] = field.trim().parse().map_err(|_| CostError::Parse {
                    line,
                    msg: format!("invalid coefficient {field:?}"),
                })?;
            }

            rows.insert(op_mode, coeffs);
        }

        if rows.is_empty() {
            return Err(CostError::Empty);
        }
        if !rows.contains_key(&IDLE_OP_MODE) {
            return Err(CostError::MissingIdleMode);
        }

        let peak_energy_kj_hr = rows
            .values()
            .map(|r| r[ENERGY_RATE_COL])
            .fold(f64::MIN, f64::max);

        Ok(Self { rows, peak_energy_kj_hr })
    }

    /// Energy rate for `op_mode` in kJ/hr, or `None` if the table has no row
    /// for that mode.
    #[inline]
    pub fn energy_rate_kj_hr(&self, op_mode: u8) -> Option<f64> {
        self.rows.get(&op_mode).map(|r| r[ENERGY_RATE_COL])
    }

    /// The highest energy rate present in the table, kJ/hr — the
    /// conservative stand-in for modes outside the table's domain.
    #[inline]
    pub fn peak_energy_kj_hr(&self) -> f64 {
        self.peak_energy_kj_hr
    }

    /// The full coefficient row for `op_mode` (energy rate at
    /// [`ENERGY_RATE_COL`]).
    pub fn row(&self, op_mode: u8) -> Option<&[f64; BASE_RATE_FIELDS - 1]> {
        self.rows.get(&op_mode)
    }

    /// Number of operating modes in the table.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
