//! AQI computation engine.
//!
//! Converts trailing-window pollutant concentrations (µg/m³) into a single Air
//! Quality Index value with a health designation, using the EPA piecewise-linear
//! breakpoint method. This module is the gateway (EMBP): siblings and the route
//! layer see only what is re-exported here.
//!
//! The engine is pure and stateless. The only shared data are the static
//! breakpoint and designation tables, so every operation is safe to call
//! concurrently without locks. All I/O happens in the storage collaborator
//! before the engine runs; typed errors propagate out and the route layer
//! decides what to do with them.

use std::fmt;

use thiserror::Error;

mod breakpoints;
mod calculator;
mod designation;
mod selector;

pub use breakpoints::{lookup, Breakpoint};
pub use calculator::compute_index;
pub use designation::{designate, Designation};
pub use selector::primary_pollutant;

// ---

/// Pollutants the service monitors.
///
/// Declaration order is the selector's tie-break priority: PM2.5 outranks PM10
/// at equal index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Pollutant {
    Pm25,
    Pm10,
}

impl Pollutant {
    /// Wire label, matching the JSON the service has always emitted.
    pub fn as_str(&self) -> &'static str {
        match self {
            Pollutant::Pm25 => "PM2.5",
            Pollutant::Pm10 => "PM10.0",
        }
    }
}

impl fmt::Display for Pollutant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One averaged concentration, as handed to the engine by the storage layer.
#[derive(Debug, Clone, Copy)]
pub struct ConcentrationReading {
    pub pollutant: Pollutant,
    pub ug_per_m3: f64,
}

impl ConcentrationReading {
    pub fn new(pollutant: Pollutant, ug_per_m3: f64) -> Self {
        Self {
            pollutant,
            ug_per_m3,
        }
    }
}

/// The computed result for one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AqiResult {
    pub aqi: i64,
    pub primary_pollutant: Pollutant,
    pub designation: Designation,
}

/// Input outside the coverage of the static tables.
///
/// Not transient: retrying the same input cannot succeed, so callers should
/// treat this as a data-quality or configuration problem.
#[derive(Debug, Clone, Copy, Error, PartialEq)]
pub enum OutOfRangeError {
    #[error("{pollutant} concentration {ug_per_m3} ug/m3 is outside the breakpoint table")]
    Concentration {
        pollutant: Pollutant,
        ug_per_m3: f64,
    },

    #[error("index {0} is outside the designation ranges")]
    Index(i64),

    #[error("no pollutant indices to compare")]
    NoPollutants,
}

// ---

/// Run the full pipeline: per-pollutant index, primary selection, designation.
///
/// Referentially transparent; identical readings always produce an identical
/// result. Any failure aborts the whole computation so callers never see a
/// partially populated result.
pub fn current_aqi(readings: &[ConcentrationReading]) -> Result<AqiResult, OutOfRangeError> {
    // ---
    let mut indices = Vec::with_capacity(readings.len());
    for reading in readings {
        let index = compute_index(reading.pollutant, reading.ug_per_m3)?;
        indices.push((reading.pollutant, index));
    }

    let (primary_pollutant, aqi) =
        primary_pollutant(indices).ok_or(OutOfRangeError::NoPollutants)?;
    let designation = designate(aqi)?;

    Ok(AqiResult {
        aqi,
        primary_pollutant,
        designation,
    })
}
