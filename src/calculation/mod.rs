//! Calculation logic for the production estimation engine.
//!
//! This module contains the calculation rules: per-task adjusted time,
//! impact time totaling, the four output mode resolvers (area target,
//! length target, area capacity, length capacity), and the [`recompute`]
//! orchestrator that turns a whole [`Simulation`](crate::models::Simulation)
//! into a [`CalculationResult`](crate::models::CalculationResult).

mod adjusted_time;
mod capacity_modes;
mod impact_time;
mod recompute;
mod target_modes;

pub use adjusted_time::{TaskTimeResult, calculate_adjusted_time};
pub use capacity_modes::{MAN_DAY_MINUTES, resolve_area_capacity, resolve_length_capacity};
pub use impact_time::{ImpactTimeResult, calculate_impact_time};
pub use recompute::recompute;
pub use target_modes::{resolve_area_target, resolve_length_target};

use crate::models::DerivationLine;

/// The outcome of resolving one output mode: the final figure, the headline
/// summary, and the mode-specific derivation rows in breakdown order.
#[derive(Debug, Clone, PartialEq)]
pub struct ModeOutcome {
    /// The final time or production figure.
    pub final_metric: f64,
    /// Headline line for the result.
    pub summary: String,
    /// Mode-specific derivation rows.
    pub derivation: Vec<DerivationLine>,
}
