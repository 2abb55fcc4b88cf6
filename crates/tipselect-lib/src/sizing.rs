//! End-to-end tip selection.
//!
//! Ties the unit converter, the nozzle formula, and the chart lookup
//! together into the single operation consumers call: raw measurements
//! in, matched chart row out.

use tracing::debug;

use crate::chart::{TipChart, TipRow};
use crate::error::{Error, Result};
use crate::nozzle::{nearest_tip, nozzle_number};
use crate::units::{to_lpm, to_psi, FlowUnit, PressureUnit};

/// Raw measurements as submitted by the caller, before unit
/// normalization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizingInput {
    pub pressure: f64,
    pub pressure_unit: PressureUnit,
    pub flow: f64,
    pub flow_unit: FlowUnit,
}

/// The outcome of one sizing calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sizing {
    /// Full-precision nozzle number used for matching.
    pub nozzle_number: f64,
    /// The chart row whose tip size was nearest the nozzle number.
    pub row: TipRow,
}

impl Sizing {
    /// Nozzle number rounded to two decimal places for presentation.
    ///
    /// Matching always uses the full-precision value; this rounding is
    /// an output-boundary concern only.
    pub fn rounded_nozzle_number(&self) -> f64 {
        (self.nozzle_number * 100.0).round() / 100.0
    }
}

/// Select the chart row for a pressure/flow reading.
///
/// Normalizes both measurements to canonical units, computes the nozzle
/// number, and matches it against the chart's tip sizes.
///
/// # Errors
///
/// - [`Error::InvalidInput`] for non-finite or non-positive readings
/// - [`Error::EmptyChart`] when the chart has no tips (cannot happen
///   for charts built through the validating constructors)
/// - [`Error::TipNotInChart`] if the matched tip resolves to no row,
///   which would indicate a matching defect rather than bad input
pub fn select_tip(chart: &TipChart, input: &SizingInput) -> Result<Sizing> {
    let psi = to_psi(input.pressure, input.pressure_unit)?;
    let lpm = to_lpm(input.flow, input.flow_unit)?;

    let n = nozzle_number(psi, lpm)?;
    let tip = nearest_tip(n, &chart.tips())?;

    debug!(nozzle_number = n, tip = tip, "matched nozzle number to tip");

    let row = chart
        .row_for_tip(tip)
        .copied()
        .ok_or(Error::TipNotInChart { tip })?;

    Ok(Sizing {
        nozzle_number: n,
        row,
    })
}
