//! Nozzle number computation and nearest-tip matching.
//!
//! The nozzle number is a dimensionless quantity derived from pump
//! pressure and water flow that indexes the sizing chart. Both
//! operations here are pure functions over canonical-unit inputs.

use crate::error::{Error, Result};

/// Empirical coefficient relating flow (LPM) and pressure (PSI) to the
/// dimensionless nozzle number.
pub const NOZZLE_FLOW_COEFFICIENT: f64 = 16.7077;

/// Compute the nozzle number for a pressure/flow pair.
///
/// Formula: `N = 16.7077 × lpm / sqrt(psi)`.
///
/// The positivity check happens before the square root so invalid input
/// can never surface as NaN.
///
/// # Arguments
///
/// * `psi` - Pump pressure in PSI (must be finite and > 0)
/// * `lpm` - Water flow in litres per minute (must be finite and > 0)
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if either argument is non-finite or
/// not strictly positive.
///
/// # Examples
///
/// ```
/// use tipselect_lib::nozzle::nozzle_number;
///
/// let n = nozzle_number(1600.0, 12.0).unwrap();
/// assert!((n - 5.01231).abs() < 1e-5);
/// ```
pub fn nozzle_number(psi: f64, lpm: f64) -> Result<f64> {
    if !psi.is_finite() || psi <= 0.0 {
        return Err(Error::InvalidInput {
            message: format!("pressure must be finite and positive, got {psi}"),
        });
    }
    if !lpm.is_finite() || lpm <= 0.0 {
        return Err(Error::InvalidInput {
            message: format!("flow must be finite and positive, got {lpm}"),
        });
    }

    Ok(NOZZLE_FLOW_COEFFICIENT * lpm / psi.sqrt())
}

/// Pick the tip size nearest to a nozzle number.
///
/// Candidates are scanned in ascending numeric order and the current
/// best is replaced only on a strictly smaller distance, so when two
/// tips are equidistant from `n` the smaller tip wins. That tie-break
/// is a contract, not an accident; see the tests.
///
/// # Errors
///
/// Returns [`Error::EmptyChart`] if `tips` is empty.
pub fn nearest_tip(n: f64, tips: &[f64]) -> Result<f64> {
    let mut sorted = tips.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let mut best = *sorted.first().ok_or(Error::EmptyChart)?;
    for &tip in &sorted[1..] {
        if (tip - n).abs() < (best - n).abs() {
            best = tip;
        }
    }
    Ok(best)
}

/// Invert the nozzle formula: the pressure a pump would see pushing
/// `lpm` through a tip of the given size.
///
/// Formula: `psi = (16.7077 × lpm / tip)²`. Useful for warning when a
/// selected tip would push the pump outside its rated pressure.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if either argument is non-finite or
/// not strictly positive.
pub fn pressure_for_tip(lpm: f64, tip: f64) -> Result<f64> {
    if !lpm.is_finite() || lpm <= 0.0 {
        return Err(Error::InvalidInput {
            message: format!("flow must be finite and positive, got {lpm}"),
        });
    }
    if !tip.is_finite() || tip <= 0.0 {
        return Err(Error::InvalidInput {
            message: format!("tip size must be finite and positive, got {tip}"),
        });
    }

    let x = NOZZLE_FLOW_COEFFICIENT * lpm / tip;
    Ok(x * x)
}
