//! Capacity (man-day) mode resolution.
//!
//! The capacity modes fix the available working time at 8 hours per crew
//! member and solve for the quantity produced once impact time is deducted.

use tracing::debug;

use crate::models::{AREA_UNIT_LABEL, DerivationLine, LENGTH_UNIT_LABEL};

use super::ModeOutcome;

/// Minutes of working time available per worker per man-day.
pub const MAN_DAY_MINUTES: f64 = 8.0 * 60.0;

/// Resolves the "Man Day (SF)" mode: square footage produced in one
/// 8-hour shift per worker.
pub fn resolve_area_capacity(
    unit_length: f64,
    unit_height: f64,
    crew_size: usize,
    total_time_per_unit: f64,
    impact_minutes: f64,
) -> ModeOutcome {
    resolve_capacity(
        unit_length * unit_height,
        AREA_UNIT_LABEL,
        crew_size,
        total_time_per_unit,
        impact_minutes,
    )
}

/// Resolves the "Man Day (LF)" mode: linear footage produced in one
/// 8-hour shift per worker.
pub fn resolve_length_capacity(
    unit_length: f64,
    crew_size: usize,
    total_time_per_unit: f64,
    impact_minutes: f64,
) -> ModeOutcome {
    resolve_capacity(
        unit_length,
        LENGTH_UNIT_LABEL,
        crew_size,
        total_time_per_unit,
        impact_minutes,
    )
}

fn resolve_capacity(
    unit_size: f64,
    unit_label: &str,
    crew_size: usize,
    total_time_per_unit: f64,
    impact_minutes: f64,
) -> ModeOutcome {
    let budget = MAN_DAY_MINUTES * crew_size as f64;
    let effective = budget - impact_minutes;

    let units_completed = if total_time_per_unit > 0.0 {
        effective / total_time_per_unit
    } else {
        debug!(
            total_time_per_unit,
            "time per unit not positive, units completed set to 0"
        );
        0.0
    };

    let production = units_completed * unit_size;

    let derivation = vec![
        DerivationLine::new(
            "Available time",
            budget,
            format!("Available time: 8 hrs × {crew_size} workers = {budget:.0} min"),
        ),
        DerivationLine::new(
            "Working time",
            effective,
            format!("- Impacts: {impact_minutes:.2} min → Working time = {effective:.2} min"),
        ),
        DerivationLine::new(
            "Time per unit",
            total_time_per_unit,
            format!("Time per unit: {total_time_per_unit:.2} min"),
        ),
        DerivationLine::new(
            "Units completed",
            units_completed,
            format!(
                "Units completed: {effective:.2} ÷ {total_time_per_unit:.2} = {units_completed:.2}"
            ),
        ),
        DerivationLine::new(
            "Total production",
            production,
            format!("Unit size: {unit_size:.2} {unit_label} → Total: {production:.2} {unit_label}"),
        ),
    ];

    let summary =
        format!("Total Production: {production:.2} {unit_label} installed in 1 Man Day");

    ModeOutcome {
        final_metric: production,
        summary,
        derivation,
    }
}
