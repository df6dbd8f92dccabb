//! Calculation result models.
//!
//! This module contains the [`CalculationResult`] type and the structured
//! line types that capture every intermediate quantity the engine derives.
//! The textual breakdown is a first-class output consumed by both the UI
//! layer and the report exporter; the structured lines carry the same
//! numbers so the exporter can reproduce them without recomputing.

use serde::{Deserialize, Serialize};

use super::TimeUnit;

/// The marker shown for a quantity that could not be computed.
pub const UNCOMPUTABLE_MARKER: &str = "???";

/// The headline shown when no final metric is available.
pub const UNCOMPUTABLE_SUMMARY: &str = "Total Time: ???";

/// The single breakdown line emitted when the calculation faulted.
pub const CALCULATION_ERROR_MARKER: &str = "Calculation Error";

/// Per-task timing line.
///
/// `adjusted_minutes` is `None` when the task is uncomputable: no assigned
/// workers, a dangling worker index, or a non-positive average efficiency.
/// Uncomputable tasks are excluded from the aggregate and flagged with
/// [`UNCOMPUTABLE_MARKER`] wherever they are displayed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskLine {
    /// The task name as entered (may be empty).
    pub name: String,
    /// The task base time, in `time_unit`.
    pub base_time: f64,
    /// The unit the base time is expressed in.
    pub time_unit: TimeUnit,
    /// The material unit label of the task.
    pub material_unit: String,
    /// Number of workers assigned to the task.
    pub worker_count: usize,
    /// Mean efficiency of the assigned workers, when they all resolved.
    pub avg_efficiency: Option<f64>,
    /// Adjusted time in minutes per output unit, when computable.
    pub adjusted_minutes: Option<f64>,
}

impl TaskLine {
    /// The name shown in displays, falling back to "Task" when empty.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() { "Task" } else { &self.name }
    }
}

/// Per-impact timing line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactLine {
    /// The impact name as entered (may be empty).
    pub name: String,
    /// Minutes charged per worker.
    pub minutes_per_worker: f64,
    /// Total minutes across the whole crew registry.
    pub crew_minutes: f64,
}

impl ImpactLine {
    /// The name shown in displays, falling back to "Unnamed" when empty.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            "Unnamed"
        } else {
            &self.name
        }
    }
}

/// One mode-specific derivation row.
///
/// `note` is the literal breakdown line; `value` carries the number that
/// line derives, where it has one, so the exporter can emit it as a cell
/// without re-parsing or recomputing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivationLine {
    /// Short label of the derived quantity (e.g. "Units needed").
    pub label: String,
    /// The derived number, when the row has one.
    pub value: Option<f64>,
    /// The literal breakdown line.
    pub note: String,
}

impl DerivationLine {
    /// Creates a derivation row with a numeric value.
    pub fn new(label: impl Into<String>, value: f64, note: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: Some(value),
            note: note.into(),
        }
    }
}

/// The complete result of one recompute pass.
///
/// `final_metric` is `None` when the model is uncomputable (empty task
/// ledger, or an arithmetic fault). `breakdown` is the ordered textual
/// contract: one line per computable task, one per impact, then the
/// mode-specific derivation lines.
///
/// # Example
///
/// ```
/// use production_engine::models::CalculationResult;
///
/// let result = CalculationResult::not_computable();
/// assert!(result.final_metric.is_none());
/// assert!(result.breakdown.is_empty());
/// assert_eq!(result.summary, "Total Time: ???");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// The final time or production figure, when computable.
    pub final_metric: Option<f64>,
    /// Headline line, e.g. "Total Time: 26.67 minutes to complete 200 sqft".
    pub summary: String,
    /// Per-task timing lines, one per task in ledger order.
    pub task_lines: Vec<TaskLine>,
    /// Per-impact timing lines, one per impact in ledger order.
    pub impact_lines: Vec<ImpactLine>,
    /// Mode-specific derivation rows, in breakdown order.
    pub derivation: Vec<DerivationLine>,
    /// The ordered textual breakdown.
    pub breakdown: Vec<String>,
}

impl CalculationResult {
    /// The result for a model with an empty task ledger: uncomputable,
    /// with no breakdown.
    pub fn not_computable() -> Self {
        Self {
            final_metric: None,
            summary: UNCOMPUTABLE_SUMMARY.to_string(),
            task_lines: Vec::new(),
            impact_lines: Vec::new(),
            derivation: Vec::new(),
            breakdown: Vec::new(),
        }
    }

    /// The result for an arithmetic fault: uncomputable, with a single
    /// "Calculation Error" breakdown line.
    pub fn calculation_error() -> Self {
        Self {
            final_metric: None,
            summary: UNCOMPUTABLE_SUMMARY.to_string(),
            task_lines: Vec::new(),
            impact_lines: Vec::new(),
            derivation: Vec::new(),
            breakdown: vec![CALCULATION_ERROR_MARKER.to_string()],
        }
    }

    /// True when a final metric was produced.
    pub fn is_computable(&self) -> bool {
        self.final_metric.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_computable_has_no_breakdown() {
        let result = CalculationResult::not_computable();
        assert!(!result.is_computable());
        assert!(result.breakdown.is_empty());
        assert_eq!(result.summary, UNCOMPUTABLE_SUMMARY);
    }

    #[test]
    fn test_calculation_error_has_single_marker_line() {
        let result = CalculationResult::calculation_error();
        assert!(!result.is_computable());
        assert_eq!(result.breakdown, vec![CALCULATION_ERROR_MARKER.to_string()]);
    }

    #[test]
    fn test_task_line_display_name() {
        let line = TaskLine {
            name: String::new(),
            base_time: 10.0,
            time_unit: TimeUnit::Minutes,
            material_unit: "unit".to_string(),
            worker_count: 0,
            avg_efficiency: None,
            adjusted_minutes: None,
        };
        assert_eq!(line.display_name(), "Task");
    }

    #[test]
    fn test_serialization_round_trip() {
        let result = CalculationResult {
            final_metric: Some(26.666666666666668),
            summary: "Total Time: 26.67 minutes to complete 200 sqft".to_string(),
            task_lines: vec![],
            impact_lines: vec![ImpactLine {
                name: "Travel".to_string(),
                minutes_per_worker: 5.0,
                crew_minutes: 10.0,
            }],
            derivation: vec![DerivationLine::new("Units needed", 2.0, "Units needed: 2.00")],
            breakdown: vec!["Units needed: 2.00".to_string()],
        };

        let json = serde_json::to_string(&result).unwrap();
        let back: CalculationResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, back);
    }
}
