//! Request types and validation for HTTP endpoints.

use serde::{Deserialize, Serialize};

use crate::ProblemDetails;

/// Validation trait for request types.
///
/// Implementations should validate all fields and return a `ProblemDetails`
/// error for invalid input.
pub trait Validate {
    /// Validate the request, returning an error if invalid.
    ///
    /// The `request_id` is used to populate the `instance` field of any
    /// returned `ProblemDetails`.
    ///
    /// Returns a boxed `ProblemDetails` to avoid large `Result::Err` variants.
    fn validate(&self, request_id: &str) -> Result<(), Box<ProblemDetails>>;
}

/// Supported pressure units on the wire.
///
/// A closed enumeration: an unrecognized tag fails deserialization at
/// the boundary instead of silently defaulting.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PressureUnit {
    /// Pounds per square inch (canonical, default).
    #[default]
    Psi,
    /// Bar.
    Bar,
}

/// Supported flow units on the wire.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FlowUnit {
    /// Litres per minute (canonical, default).
    #[default]
    Lpm,
    /// US gallons per minute.
    Gpm,
}

impl From<PressureUnit> for tipselect_lib::PressureUnit {
    fn from(value: PressureUnit) -> Self {
        match value {
            PressureUnit::Psi => tipselect_lib::PressureUnit::Psi,
            PressureUnit::Bar => tipselect_lib::PressureUnit::Bar,
        }
    }
}

impl From<FlowUnit> for tipselect_lib::FlowUnit {
    fn from(value: FlowUnit) -> Self {
        match value {
            FlowUnit::Lpm => tipselect_lib::FlowUnit::Lpm,
            FlowUnit::Gpm => tipselect_lib::FlowUnit::Gpm,
        }
    }
}

/// Request for computing a nozzle sizing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SizingRequest {
    /// Pump pressure reading.
    pub pressure: f64,

    /// Unit of the pressure reading (defaults to psi).
    #[serde(default)]
    pub pressure_unit: PressureUnit,

    /// Water flow reading.
    pub flow: f64,

    /// Unit of the flow reading (defaults to lpm).
    #[serde(default)]
    pub flow_unit: FlowUnit,
}

impl Validate for SizingRequest {
    fn validate(&self, request_id: &str) -> Result<(), Box<ProblemDetails>> {
        if !self.pressure.is_finite() || self.pressure <= 0.0 {
            return Err(Box::new(ProblemDetails::bad_request(
                "The 'pressure' field must be a positive number",
                request_id,
            )));
        }

        if !self.flow.is_finite() || self.flow <= 0.0 {
            return Err(Box::new(ProblemDetails::bad_request(
                "The 'flow' field must be a positive number",
                request_id,
            )));
        }

        Ok(())
    }
}
