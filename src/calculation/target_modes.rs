//! Target mode resolution.
//!
//! The target modes solve for time: how long the crew needs to produce a
//! fixed quantity of output, in square feet (area) or linear feet (length).

use tracing::debug;

use crate::models::{
    AREA_UNIT_LABEL, DerivationLine, LENGTH_UNIT_LABEL, TimeUnit,
};

use super::ModeOutcome;

/// Resolves the "Square-foot" mode: time to cover `target_area` square feet
/// of `unit_length` x `unit_height` units.
pub fn resolve_area_target(
    unit_length: f64,
    unit_height: f64,
    target_area: f64,
    display_unit: TimeUnit,
    total_time_per_unit: f64,
    impact_minutes: f64,
) -> ModeOutcome {
    resolve_target(
        unit_length * unit_height,
        AREA_UNIT_LABEL,
        target_area,
        display_unit,
        total_time_per_unit,
        impact_minutes,
    )
}

/// Resolves the "Linear-Foot" mode: time to cover `target_length` linear
/// feet of `unit_length` runs.
pub fn resolve_length_target(
    unit_length: f64,
    target_length: f64,
    display_unit: TimeUnit,
    total_time_per_unit: f64,
    impact_minutes: f64,
) -> ModeOutcome {
    resolve_target(
        unit_length,
        LENGTH_UNIT_LABEL,
        target_length,
        display_unit,
        total_time_per_unit,
        impact_minutes,
    )
}

fn resolve_target(
    unit_size: f64,
    unit_label: &str,
    target: f64,
    display_unit: TimeUnit,
    total_time_per_unit: f64,
    impact_minutes: f64,
) -> ModeOutcome {
    let units_needed = if unit_size > 0.0 {
        target / unit_size
    } else {
        debug!(unit_size, "unit size not positive, units needed set to 0");
        0.0
    };

    let task_minutes = total_time_per_unit * units_needed;
    let total_minutes = task_minutes + impact_minutes;

    let mut derivation = vec![
        DerivationLine::new(
            "Units needed",
            units_needed,
            format!(
                "Units needed: {units_needed:.2} → Task time: {total_time_per_unit:.2} × {units_needed:.2} = {task_minutes:.2} min"
            ),
        ),
        DerivationLine::new(
            "Total",
            total_minutes,
            format!("+ Impacts: {impact_minutes:.2} min → Total: {total_minutes:.2} min"),
        ),
    ];

    let final_metric = match display_unit {
        TimeUnit::Minutes => total_minutes,
        TimeUnit::Hours => {
            let hours = total_minutes / 60.0;
            derivation.push(DerivationLine::new(
                "Displayed in hours",
                hours,
                format!("Displayed in hours: {hours:.2} hours"),
            ));
            hours
        }
    };

    let summary = format!(
        "Total Time: {final_metric:.2} {} to complete {target:.0} {unit_label}",
        display_unit.display_label()
    );

    ModeOutcome {
        final_metric,
        summary,
        derivation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area_target_minutes() {
        // 13.33 min/unit over 2 units of 100 sqft, no impacts.
        let outcome = resolve_area_target(
            10.0,
            10.0,
            200.0,
            TimeUnit::Minutes,
            10.0 / 1.5 * 2.0,
            0.0,
        );

        assert!((outcome.final_metric - 26.666666666666668).abs() < 1e-9);
        assert_eq!(
            outcome.derivation[0].note,
            "Units needed: 2.00 → Task time: 13.33 × 2.00 = 26.67 min"
        );
        assert_eq!(
            outcome.derivation[1].note,
            "+ Impacts: 0.00 min → Total: 26.67 min"
        );
        assert_eq!(
            outcome.summary,
            "Total Time: 26.67 minutes to complete 200 sqft"
        );
    }

    #[test]
    fn test_zero_area_yields_impact_time_only() {
        let outcome = resolve_area_target(0.0, 10.0, 200.0, TimeUnit::Minutes, 50.0, 12.5);
        assert_eq!(outcome.derivation[0].value, Some(0.0));
        assert_eq!(outcome.final_metric, 12.5);
    }

    #[test]
    fn test_hours_display_appends_conversion_line() {
        let outcome = resolve_area_target(10.0, 10.0, 100.0, TimeUnit::Hours, 30.0, 0.0);
        // 30 min * 1 unit = 30 min = 0.5 hours.
        assert_eq!(outcome.final_metric, 0.5);
        assert_eq!(outcome.derivation.len(), 3);
        assert_eq!(
            outcome.derivation[2].note,
            "Displayed in hours: 0.50 hours"
        );
        assert_eq!(
            outcome.summary,
            "Total Time: 0.50 hours to complete 100 sqft"
        );
    }

    #[test]
    fn test_length_target_uses_linear_feet() {
        let outcome = resolve_length_target(8.0, 80.0, TimeUnit::Minutes, 6.0, 0.0);
        assert_eq!(outcome.final_metric, 60.0);
        assert_eq!(
            outcome.summary,
            "Total Time: 60.00 minutes to complete 80 lf"
        );
    }

    #[test]
    fn test_impacts_add_onto_task_time() {
        let outcome = resolve_area_target(10.0, 10.0, 100.0, TimeUnit::Minutes, 30.0, 20.0);
        assert_eq!(outcome.final_metric, 50.0);
        assert_eq!(
            outcome.derivation[1].note,
            "+ Impacts: 20.00 min → Total: 50.00 min"
        );
    }
}
