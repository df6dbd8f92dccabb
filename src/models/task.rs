//! Task model and related types.
//!
//! This module defines the Task struct and TimeUnit enum for representing
//! the repeatable units of work a crew performs.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// The unit a time figure is expressed in.
///
/// Task base times and the display unit of the final result both use this
/// enum. All internal arithmetic is carried out in minutes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    /// Time expressed in minutes.
    #[default]
    Minutes,
    /// Time expressed in hours.
    Hours,
}

impl TimeUnit {
    /// Conversion factor from this unit to minutes.
    ///
    /// # Example
    ///
    /// ```
    /// use production_engine::models::TimeUnit;
    ///
    /// assert_eq!(TimeUnit::Minutes.unit_factor(), 1.0);
    /// assert_eq!(TimeUnit::Hours.unit_factor(), 60.0);
    /// ```
    pub fn unit_factor(&self) -> f64 {
        match self {
            TimeUnit::Minutes => 1.0,
            TimeUnit::Hours => 60.0,
        }
    }

    /// The label used for this unit in persisted task records.
    pub fn document_label(&self) -> &'static str {
        match self {
            TimeUnit::Minutes => "Minutes",
            TimeUnit::Hours => "Hours",
        }
    }

    /// The lowercase label used when displaying a final time figure.
    pub fn display_label(&self) -> &'static str {
        match self {
            TimeUnit::Minutes => "minutes",
            TimeUnit::Hours => "hours",
        }
    }

    /// Parses a unit label case-insensitively ("Minutes", "hours", ...).
    ///
    /// Returns `None` for unrecognized labels; callers decide whether that
    /// defaults or errors.
    pub fn parse_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "minutes" => Some(TimeUnit::Minutes),
            "hours" => Some(TimeUnit::Hours),
            _ => None,
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_label())
    }
}

/// Represents one repeatable task performed by a subset of the crew.
///
/// Tasks reference workers by index into the crew registry. Since the
/// registry is append-only, an index assigned here stays valid; an index
/// that nevertheless falls out of range makes the task uncomputable
/// rather than failing the whole calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Display name of the task. May be empty.
    #[serde(default)]
    pub name: String,
    /// Indices of assigned workers in the crew registry.
    #[serde(default)]
    pub assigned_workers: BTreeSet<usize>,
    /// Time one pass of this task takes at efficiency 1.0, in `time_unit`.
    #[serde(default)]
    pub base_time: f64,
    /// The unit `base_time` is expressed in.
    #[serde(default)]
    pub time_unit: TimeUnit,
    /// Free-text label for the material unit produced per pass
    /// (e.g. "sqft", "linear ft", "unit").
    #[serde(default = "default_material_unit")]
    pub material_unit: String,
}

fn default_material_unit() -> String {
    "unit".to_string()
}

impl Task {
    /// Creates a new unassigned task.
    pub fn new(name: impl Into<String>, base_time: f64, time_unit: TimeUnit) -> Self {
        Self {
            name: name.into(),
            assigned_workers: BTreeSet::new(),
            base_time,
            time_unit,
            material_unit: default_material_unit(),
        }
    }

    /// Creates a copy of this task with the given workers assigned.
    pub fn with_workers<I: IntoIterator<Item = usize>>(mut self, workers: I) -> Self {
        self.assigned_workers = workers.into_iter().collect();
        self
    }

    /// The name shown in breakdowns, falling back to "Task" when empty.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() { "Task" } else { &self.name }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_factor() {
        assert_eq!(TimeUnit::Minutes.unit_factor(), 1.0);
        assert_eq!(TimeUnit::Hours.unit_factor(), 60.0);
    }

    #[test]
    fn test_parse_label_is_case_insensitive() {
        assert_eq!(TimeUnit::parse_label("Minutes"), Some(TimeUnit::Minutes));
        assert_eq!(TimeUnit::parse_label("minutes"), Some(TimeUnit::Minutes));
        assert_eq!(TimeUnit::parse_label("HOURS"), Some(TimeUnit::Hours));
        assert_eq!(TimeUnit::parse_label(" hours "), Some(TimeUnit::Hours));
        assert_eq!(TimeUnit::parse_label("days"), None);
    }

    #[test]
    fn test_time_unit_serialization() {
        assert_eq!(
            serde_json::to_string(&TimeUnit::Minutes).unwrap(),
            "\"minutes\""
        );
        assert_eq!(serde_json::to_string(&TimeUnit::Hours).unwrap(), "\"hours\"");
    }

    #[test]
    fn test_deserialize_task_with_defaults() {
        let json = r#"{"name": "Hang drywall"}"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.name, "Hang drywall");
        assert!(task.assigned_workers.is_empty());
        assert_eq!(task.base_time, 0.0);
        assert_eq!(task.time_unit, TimeUnit::Minutes);
        assert_eq!(task.material_unit, "unit");
    }

    #[test]
    fn test_deserialize_full_task() {
        let json = r#"{
            "name": "Tape joints",
            "assigned_workers": [0, 2],
            "base_time": 1.5,
            "time_unit": "hours",
            "material_unit": "sqft"
        }"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.assigned_workers.len(), 2);
        assert!(task.assigned_workers.contains(&2));
        assert_eq!(task.time_unit, TimeUnit::Hours);
        assert_eq!(task.material_unit, "sqft");
    }

    #[test]
    fn test_display_name_falls_back_for_empty_name() {
        let task = Task::new("", 10.0, TimeUnit::Minutes);
        assert_eq!(task.display_name(), "Task");

        let task = Task::new("Paint", 10.0, TimeUnit::Minutes);
        assert_eq!(task.display_name(), "Paint");
    }

    #[test]
    fn test_with_workers_collects_indices() {
        let task = Task::new("Frame", 30.0, TimeUnit::Minutes).with_workers([1, 0, 1]);
        assert_eq!(task.assigned_workers.len(), 2);
        assert!(task.assigned_workers.contains(&0));
        assert!(task.assigned_workers.contains(&1));
    }
}
