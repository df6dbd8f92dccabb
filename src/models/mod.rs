//! Core data models for the production estimation engine.
//!
//! This module contains all the domain models used throughout the engine.

mod calculation_result;
mod impact;
mod output_settings;
mod simulation;
mod task;
mod worker;

pub use calculation_result::{
    CALCULATION_ERROR_MARKER, CalculationResult, DerivationLine, ImpactLine, TaskLine,
    UNCOMPUTABLE_MARKER, UNCOMPUTABLE_SUMMARY,
};
pub use impact::Impact;
pub use output_settings::{AREA_UNIT_LABEL, LENGTH_UNIT_LABEL, OutputMode, OutputSettings};
pub use simulation::Simulation;
pub use task::{Task, TimeUnit};
pub use worker::Worker;
