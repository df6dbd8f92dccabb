//! The recompute entry point.
//!
//! [`recompute`] is the pure function the host application calls after
//! every mutation: it times each task, totals the impact ledger, resolves
//! the configured output mode, and assembles the ordered textual breakdown.
//! It never panics and never returns an error; inputs that cannot be
//! computed yield an uncomputable [`CalculationResult`].

use tracing::error;

use crate::models::{CalculationResult, OutputMode, Simulation, TaskLine};

use super::adjusted_time::calculate_adjusted_time;
use super::capacity_modes::{resolve_area_capacity, resolve_length_capacity};
use super::impact_time::calculate_impact_time;
use super::target_modes::{resolve_area_target, resolve_length_target};

/// Recomputes the final metric and breakdown for the given model.
///
/// An empty task ledger short-circuits to an uncomputable result with no
/// breakdown. Uncomputable tasks are excluded from the aggregate but still
/// appear in `task_lines` so callers can flag them. A non-finite value
/// anywhere in the output (the only way the arithmetic itself can go
/// wrong with finite guards in place) collapses the whole result to a
/// single "Calculation Error" marker.
///
/// # Example
///
/// ```
/// use production_engine::calculation::recompute;
/// use production_engine::models::Simulation;
///
/// let result = recompute(&Simulation::new());
/// assert!(result.final_metric.is_none());
/// ```
pub fn recompute(simulation: &Simulation) -> CalculationResult {
    if simulation.tasks().is_empty() {
        return CalculationResult::not_computable();
    }

    let workers = simulation.workers();
    let crew_size = workers.len();

    let mut task_lines = Vec::with_capacity(simulation.tasks().len());
    let mut breakdown = Vec::new();
    let mut total_time_per_unit = 0.0;

    for task in simulation.tasks() {
        let timing = calculate_adjusted_time(task, workers);
        if let Some(adjusted) = timing.adjusted_minutes {
            total_time_per_unit += adjusted;
            breakdown.push(format!("- {}: {adjusted:.2} min/unit", task.display_name()));
        }
        task_lines.push(TaskLine {
            name: task.name.clone(),
            base_time: task.base_time,
            time_unit: task.time_unit,
            material_unit: task.material_unit.clone(),
            worker_count: timing.worker_count,
            avg_efficiency: timing.avg_efficiency,
            adjusted_minutes: timing.adjusted_minutes,
        });
    }

    let impacts = calculate_impact_time(simulation.impacts(), crew_size);
    for line in &impacts.lines {
        breakdown.push(format!(
            "- Impact '{}': {:.2} min × {} workers = {:.2} min",
            line.display_name(),
            line.minutes_per_worker,
            crew_size,
            line.crew_minutes
        ));
    }

    let display_unit = simulation.output().display_unit;
    let outcome = match simulation.output().mode {
        OutputMode::AreaTarget {
            unit_length,
            unit_height,
            target_area,
        } => resolve_area_target(
            unit_length,
            unit_height,
            target_area,
            display_unit,
            total_time_per_unit,
            impacts.total_minutes,
        ),
        OutputMode::LengthTarget {
            unit_length,
            target_length,
        } => resolve_length_target(
            unit_length,
            target_length,
            display_unit,
            total_time_per_unit,
            impacts.total_minutes,
        ),
        OutputMode::AreaCapacity {
            unit_length,
            unit_height,
        } => resolve_area_capacity(
            unit_length,
            unit_height,
            crew_size,
            total_time_per_unit,
            impacts.total_minutes,
        ),
        OutputMode::LengthCapacity { unit_length } => resolve_length_capacity(
            unit_length,
            crew_size,
            total_time_per_unit,
            impacts.total_minutes,
        ),
    };

    breakdown.extend(outcome.derivation.iter().map(|line| line.note.clone()));

    let result = CalculationResult {
        final_metric: Some(outcome.final_metric),
        summary: outcome.summary,
        task_lines,
        impact_lines: impacts.lines,
        derivation: outcome.derivation,
        breakdown,
    };

    if !all_finite(&result) {
        error!(
            final_metric = ?result.final_metric,
            "non-finite value in calculation output, reporting calculation error"
        );
        return CalculationResult::calculation_error();
    }

    result
}

/// Checks every number the result carries, not just the final metric: a
/// zero-units mode can produce a finite total while an individual task
/// line is still infinite.
fn all_finite(result: &CalculationResult) -> bool {
    result.final_metric.is_none_or(f64::is_finite)
        && result
            .task_lines
            .iter()
            .all(|line| line.adjusted_minutes.is_none_or(f64::is_finite))
        && result.impact_lines.iter().all(|line| line.crew_minutes.is_finite())
        && result
            .derivation
            .iter()
            .all(|line| line.value.is_none_or(f64::is_finite))
}
