//! Impact time calculation.
//!
//! Impacts charge a fixed number of minutes per worker in the crew
//! registry, independent of task assignment.

use crate::models::{Impact, ImpactLine};

/// The result of totaling the impact ledger against the crew.
#[derive(Debug, Clone, PartialEq)]
pub struct ImpactTimeResult {
    /// One line per impact, in ledger order.
    pub lines: Vec<ImpactLine>,
    /// Total impact minutes across all impacts and the whole crew.
    pub total_minutes: f64,
}

/// Totals the impact ledger for a crew of `crew_size` workers.
///
/// An empty registry zeroes every impact: with nobody on the crew there is
/// nobody to charge the penalty to.
///
/// # Example
///
/// ```
/// use production_engine::calculation::calculate_impact_time;
/// use production_engine::models::Impact;
///
/// let impacts = [Impact::new("Travel", 5.0), Impact::new("Cleanup", 10.0)];
/// let result = calculate_impact_time(&impacts, 2);
/// assert_eq!(result.total_minutes, 30.0);
/// assert_eq!(result.lines[0].crew_minutes, 10.0);
/// ```
pub fn calculate_impact_time(impacts: &[Impact], crew_size: usize) -> ImpactTimeResult {
    let mut lines = Vec::with_capacity(impacts.len());
    let mut total_minutes = 0.0;

    for impact in impacts {
        let crew_minutes = impact.minutes_per_worker * crew_size as f64;
        total_minutes += crew_minutes;
        lines.push(ImpactLine {
            name: impact.name.clone(),
            minutes_per_worker: impact.minutes_per_worker,
            crew_minutes,
        });
    }

    ImpactTimeResult {
        lines,
        total_minutes,
    }
}
