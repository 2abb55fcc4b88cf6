//! tipselect library entry points.
//!
//! This crate exposes helpers to load the injector tip chart, convert
//! pressure and flow readings to canonical units, compute the nozzle
//! number, and match it to the nearest chart row. Higher-level consumers
//! (CLI, HTTP services) should only depend on the functions exported
//! here instead of reimplementing behavior.

#![deny(warnings)]

pub mod chart;
pub mod error;
pub mod nozzle;
pub mod sizing;
pub mod units;

pub use chart::{default_chart_path, resolve_chart_path, TipChart, TipRow};
pub use error::{Error, Result};
pub use nozzle::{nearest_tip, nozzle_number, pressure_for_tip, NOZZLE_FLOW_COEFFICIENT};
pub use sizing::{select_tip, Sizing, SizingInput};
pub use units::{to_lpm, to_psi, FlowUnit, PressureUnit, LPM_PER_GPM, PSI_PER_BAR};
