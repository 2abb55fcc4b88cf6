//! Measurement units and conversion to the canonical internal units.
//!
//! All nozzle computations run on PSI for pressure and litres-per-minute
//! for flow. Callers may submit readings in bar or US gallons-per-minute;
//! these are normalized here with a single multiplication each. Conversion
//! is exact floating-point arithmetic with no rounding.

use crate::error::{Error, Result};

/// Pounds per square inch in one bar.
pub const PSI_PER_BAR: f64 = 14.5037738;

/// Litres per minute in one US gallon per minute.
pub const LPM_PER_GPM: f64 = 3.785411784;

/// Supported pressure units. PSI is the canonical unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PressureUnit {
    #[default]
    Psi,
    Bar,
}

/// Supported flow units. Litres per minute is the canonical unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FlowUnit {
    #[default]
    Lpm,
    Gpm,
}

impl std::fmt::Display for PressureUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PressureUnit::Psi => write!(f, "psi"),
            PressureUnit::Bar => write!(f, "bar"),
        }
    }
}

impl std::fmt::Display for FlowUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FlowUnit::Lpm => write!(f, "lpm"),
            FlowUnit::Gpm => write!(f, "gpm"),
        }
    }
}

/// Convert a pressure reading to PSI.
///
/// Identity when the reading is already in PSI.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if `value` is NaN or infinite.
pub fn to_psi(value: f64, unit: PressureUnit) -> Result<f64> {
    if !value.is_finite() {
        return Err(Error::InvalidInput {
            message: format!("pressure must be a finite number, got {value}"),
        });
    }
    Ok(match unit {
        PressureUnit::Psi => value,
        PressureUnit::Bar => value * PSI_PER_BAR,
    })
}

/// Convert a flow reading to litres per minute.
///
/// Identity when the reading is already in LPM.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if `value` is NaN or infinite.
pub fn to_lpm(value: f64, unit: FlowUnit) -> Result<f64> {
    if !value.is_finite() {
        return Err(Error::InvalidInput {
            message: format!("flow must be a finite number, got {value}"),
        });
    }
    Ok(match unit {
        FlowUnit::Lpm => value,
        FlowUnit::Gpm => value * LPM_PER_GPM,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn psi_conversion_is_identity() {
        assert_eq!(to_psi(1600.0, PressureUnit::Psi).unwrap(), 1600.0);
    }

    #[test]
    fn lpm_conversion_is_identity() {
        assert_eq!(to_lpm(12.0, FlowUnit::Lpm).unwrap(), 12.0);
    }

    #[test]
    fn bar_converts_via_constant() {
        let psi = to_psi(110.0, PressureUnit::Bar).unwrap();
        assert!((psi - 1595.415118).abs() < 1e-6);
    }

    #[test]
    fn gpm_converts_via_constant() {
        let lpm = to_lpm(2.0, FlowUnit::Gpm).unwrap();
        assert!((lpm - 7.570823568).abs() < 1e-9);
    }

    #[test]
    fn non_finite_pressure_is_rejected() {
        assert!(to_psi(f64::NAN, PressureUnit::Psi).is_err());
        assert!(to_psi(f64::INFINITY, PressureUnit::Bar).is_err());
    }

    #[test]
    fn non_finite_flow_is_rejected() {
        assert!(to_lpm(f64::NAN, FlowUnit::Gpm).is_err());
    }

    #[test]
    fn default_units_are_canonical() {
        assert_eq!(PressureUnit::default(), PressureUnit::Psi);
        assert_eq!(FlowUnit::default(), FlowUnit::Lpm);
    }
}
