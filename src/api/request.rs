//! Request types for the production estimation engine API.
//!
//! This module defines the JSON request structures for the mutation and
//! persistence endpoints, mirroring the events the editing surface emits.

use serde::{Deserialize, Serialize};

use crate::models::{Impact, OutputMode, OutputSettings, Task, TimeUnit, Worker};

/// Body for `POST /workers` and `PUT /workers/{index}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkerRequest {
    /// Worker display name.
    #[serde(default)]
    pub name: String,
    /// Efficiency multiplier; defaults to 1.0.
    #[serde(default = "default_efficiency")]
    pub efficiency: f64,
}

fn default_efficiency() -> f64 {
    1.0
}

impl From<WorkerRequest> for Worker {
    fn from(req: WorkerRequest) -> Self {
        Worker {
            name: req.name,
            efficiency: req.efficiency,
        }
    }
}

/// Body for `POST /tasks` and `PUT /tasks/{index}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskRequest {
    /// Task display name.
    #[serde(default)]
    pub name: String,
    /// Base time in `time_unit`.
    #[serde(default)]
    pub base_time: f64,
    /// The unit the base time is expressed in.
    #[serde(default)]
    pub time_unit: TimeUnit,
    /// Material unit label; defaults to "unit".
    #[serde(default = "default_material_unit")]
    pub material_unit: String,
    /// Indices of assigned workers.
    #[serde(default)]
    pub assigned_worker_indices: Vec<usize>,
}

fn default_material_unit() -> String {
    "unit".to_string()
}

impl From<TaskRequest> for Task {
    fn from(req: TaskRequest) -> Self {
        Task {
            name: req.name,
            assigned_workers: req.assigned_worker_indices.into_iter().collect(),
            base_time: req.base_time,
            time_unit: req.time_unit,
            material_unit: req.material_unit,
        }
    }
}

/// Body for `PUT /tasks/{index}/assignment`: one checkbox toggle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignmentRequest {
    /// Index of the worker being toggled.
    pub worker_index: usize,
    /// Whether the worker is now assigned to the task.
    pub assigned: bool,
}

/// Body for `POST /impacts`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImpactRequest {
    /// Impact display name.
    #[serde(default)]
    pub name: String,
    /// Minutes charged per worker.
    #[serde(default)]
    pub minutes_per_worker: f64,
}

impl From<ImpactRequest> for Impact {
    fn from(req: ImpactRequest) -> Self {
        Impact {
            name: req.name,
            minutes_per_worker: req.minutes_per_worker,
        }
    }
}

/// Body for `PUT /output`, flat like the editing surface's fields.
///
/// Unlike the persistence codec, the API is strict: an unknown
/// `output_type` or `time_display_unit` is a validation error, because a
/// live caller sending one is a bug rather than an old document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSettingsRequest {
    /// Output mode label ("Square-foot", "Linear-Foot", "Man Day (SF)",
    /// "Man Day (LF)").
    pub output_type: String,
    /// Unit length in feet.
    #[serde(default)]
    pub length: f64,
    /// Unit height in feet (area modes).
    #[serde(default)]
    pub height: f64,
    /// Production target (target modes).
    #[serde(default)]
    pub target: f64,
    /// Display unit for the final time figure ("minutes" or "hours").
    #[serde(default = "default_display_unit")]
    pub time_display_unit: String,
}

fn default_display_unit() -> String {
    "minutes".to_string()
}

impl TryFrom<OutputSettingsRequest> for OutputSettings {
    type Error = String;

    fn try_from(req: OutputSettingsRequest) -> Result<Self, Self::Error> {
        let mode =
            OutputMode::from_document_parts(&req.output_type, req.length, req.height, req.target)
                .ok_or_else(|| format!("unknown output type '{}'", req.output_type))?;
        let display_unit = TimeUnit::parse_label(&req.time_display_unit)
            .ok_or_else(|| format!("unknown display unit '{}'", req.time_display_unit))?;
        Ok(OutputSettings { mode, display_unit })
    }
}

/// Body for `POST /save` and `POST /load`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentPathRequest {
    /// Path of the simulation document (.json, .yaml or .yml).
    pub path: String,
}

/// Body for `POST /export`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportRequest {
    /// Directory the CSV sheets are written into.
    pub directory: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_worker_request_defaults() {
        let req: WorkerRequest = serde_json::from_str("{}").unwrap();
        assert!(req.name.is_empty());
        assert_eq!(req.efficiency, 1.0);
    }

    #[test]
    fn test_task_request_conversion() {
        let json = r#"{
            "name": "Hang",
            "base_time": 10.0,
            "time_unit": "minutes",
            "assigned_worker_indices": [0, 1]
        }"#;
        let req: TaskRequest = serde_json::from_str(json).unwrap();
        let task: Task = req.into();
        assert_eq!(task.name, "Hang");
        assert_eq!(task.assigned_workers.len(), 2);
        assert_eq!(task.material_unit, "unit");
    }

    #[test]
    fn test_output_settings_conversion() {
        let req = OutputSettingsRequest {
            output_type: "Man Day (LF)".to_string(),
            length: 4.0,
            height: 0.0,
            target: 0.0,
            time_display_unit: "minutes".to_string(),
        };
        let settings = OutputSettings::try_from(req).unwrap();
        assert_eq!(settings.mode, OutputMode::LengthCapacity { unit_length: 4.0 });
    }

    #[test]
    fn test_unknown_output_type_is_rejected() {
        let req = OutputSettingsRequest {
            output_type: "Cubic-foot".to_string(),
            length: 1.0,
            height: 1.0,
            target: 1.0,
            time_display_unit: "minutes".to_string(),
        };
        let err = OutputSettings::try_from(req).unwrap_err();
        assert!(err.contains("Cubic-foot"));
    }

    #[test]
    fn test_unknown_display_unit_is_rejected() {
        let req = OutputSettingsRequest {
            output_type: "Square-foot".to_string(),
            length: 1.0,
            height: 1.0,
            target: 1.0,
            time_display_unit: "fortnights".to_string(),
        };
        let err = OutputSettings::try_from(req).unwrap_err();
        assert!(err.contains("fortnights"));
    }
}
