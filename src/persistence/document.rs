//! The persisted simulation document.
//!
//! The document is a flat, tolerant mirror of the in-memory model: every
//! field is optional with a sensible default, legacy labels are remapped,
//! and a schema version mismatch is an advisory rather than a failure.
//! Conversion into a [`Simulation`] therefore never fails; anything the
//! codec had to guess at comes back as a [`CodecWarning`].

use serde::{Deserialize, Serialize};

use crate::models::{
    Impact, OutputMode, OutputSettings, Simulation, Task, TimeUnit, Worker,
};

/// The schema version written by this codec.
///
/// Version 1 documents predate the split of the man-day mode into SF and LF
/// variants and may carry the bare "Man Day" label.
pub const SCHEMA_VERSION: u32 = 2;

/// A non-fatal advisory raised while loading a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodecWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
}

impl CodecWarning {
    fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// A simulation together with the advisories its load produced.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedSimulation {
    /// The fully materialized model.
    pub simulation: Simulation,
    /// Advisories raised while materializing it.
    pub warnings: Vec<CodecWarning>,
}

/// A persisted worker record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkerRecord {
    /// Worker display name.
    #[serde(default)]
    pub name: String,
    /// Efficiency multiplier; defaults to 1.0 when absent.
    #[serde(default = "default_efficiency")]
    pub efficiency: f64,
}

fn default_efficiency() -> f64 {
    1.0
}

/// A persisted task record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRecord {
    /// Task display name.
    #[serde(default)]
    pub name: String,
    /// Base time in `time_unit`.
    #[serde(default)]
    pub base_time: f64,
    /// Time unit label; "Minutes" or "Hours", any case. Defaults to
    /// minutes when absent or unrecognized.
    #[serde(default = "default_time_unit_label")]
    pub time_unit: String,
    /// Material unit label; defaults to "unit".
    #[serde(default = "default_material_unit")]
    pub material_unit: String,
    /// Indices into the worker sequence.
    #[serde(default)]
    pub assigned_worker_indices: Vec<usize>,
}

fn default_time_unit_label() -> String {
    TimeUnit::Minutes.document_label().to_string()
}

fn default_material_unit() -> String {
    "unit".to_string()
}

/// A persisted impact record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactRecord {
    /// Impact display name.
    #[serde(default)]
    pub name: String,
    /// Minutes charged per worker.
    #[serde(default)]
    pub minutes_per_worker: f64,
}

/// The persisted output settings block.
///
/// Flat on the wire; the unused dimensions of a mode are written as 0.0
/// and ignored on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputSettingsRecord {
    /// Output mode label; see [`OutputMode::label`]. Legacy "Man Day"
    /// maps to "Man Day (SF)".
    #[serde(default = "default_output_type")]
    pub output_type: String,
    /// Unit length in feet.
    #[serde(default)]
    pub length: f64,
    /// Unit height in feet (area modes only).
    #[serde(default)]
    pub height: f64,
    /// Production target (target modes only). Older documents call this
    /// field `target_area`.
    #[serde(default, alias = "target_area")]
    pub target: f64,
    /// Display unit label for the final time figure; "minutes" or
    /// "hours", any case.
    #[serde(default = "default_display_unit_label")]
    pub time_display_unit: String,
}

fn default_output_type() -> String {
    "Square-foot".to_string()
}

fn default_display_unit_label() -> String {
    TimeUnit::Minutes.display_label().to_string()
}

impl Default for OutputSettingsRecord {
    fn default() -> Self {
        Self {
            output_type: default_output_type(),
            length: 0.0,
            height: 0.0,
            target: 0.0,
            time_display_unit: default_display_unit_label(),
        }
    }
}

/// The versioned top-level simulation document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationDocument {
    /// Schema version; absent in the earliest documents.
    #[serde(default = "default_version")]
    pub version: u32,
    /// Simulation display name.
    #[serde(default)]
    pub simulation_name: String,
    /// The crew registry.
    #[serde(default)]
    pub workers: Vec<WorkerRecord>,
    /// The task ledger.
    #[serde(default)]
    pub tasks: Vec<TaskRecord>,
    /// The impact ledger.
    #[serde(default)]
    pub impacts: Vec<ImpactRecord>,
    /// The output configuration.
    #[serde(default)]
    pub output_settings: OutputSettingsRecord,
}

fn default_version() -> u32 {
    1
}

impl SimulationDocument {
    /// Snapshots a simulation into its document form.
    pub fn from_simulation(simulation: &Simulation) -> Self {
        let mode = simulation.output().mode;
        Self {
            version: SCHEMA_VERSION,
            simulation_name: simulation.name().to_string(),
            workers: simulation
                .workers()
                .iter()
                .map(|worker| WorkerRecord {
                    name: worker.name.clone(),
                    efficiency: worker.efficiency,
                })
                .collect(),
            tasks: simulation
                .tasks()
                .iter()
                .map(|task| TaskRecord {
                    name: task.name.clone(),
                    base_time: task.base_time,
                    time_unit: task.time_unit.document_label().to_string(),
                    material_unit: task.material_unit.clone(),
                    assigned_worker_indices: task.assigned_workers.iter().copied().collect(),
                })
                .collect(),
            impacts: simulation
                .impacts()
                .iter()
                .map(|impact| ImpactRecord {
                    name: impact.name.clone(),
                    minutes_per_worker: impact.minutes_per_worker,
                })
                .collect(),
            output_settings: OutputSettingsRecord {
                output_type: mode.label().to_string(),
                length: mode.unit_length(),
                height: mode.unit_height().unwrap_or(0.0),
                target: mode.target().unwrap_or(0.0),
                time_display_unit: simulation
                    .output()
                    .display_unit
                    .display_label()
                    .to_string(),
            },
        }
    }

    /// Materializes the document into a simulation.
    ///
    /// Never fails: unknown labels fall back to their defaults and a
    /// schema version mismatch is advisory. Every fallback is reported in
    /// the returned warnings.
    pub fn into_simulation(self) -> LoadedSimulation {
        let mut warnings = Vec::new();

        if self.version != SCHEMA_VERSION {
            warnings.push(CodecWarning::new(
                "VERSION_MISMATCH",
                format!(
                    "document schema version {} differs from current version {}",
                    self.version, SCHEMA_VERSION
                ),
            ));
        }

        let mut simulation = Simulation::new();
        simulation.set_name(self.simulation_name);

        for record in self.workers {
            simulation.add_worker(Worker {
                name: record.name,
                efficiency: record.efficiency,
            });
        }

        for (index, record) in self.tasks.into_iter().enumerate() {
            let time_unit = match TimeUnit::parse_label(&record.time_unit) {
                Some(unit) => unit,
                None => {
                    warnings.push(CodecWarning::new(
                        "UNKNOWN_TIME_UNIT",
                        format!(
                            "task {} has unknown time unit '{}', using minutes",
                            index, record.time_unit
                        ),
                    ));
                    TimeUnit::Minutes
                }
            };
            simulation.add_task(Task {
                name: record.name,
                assigned_workers: record.assigned_worker_indices.into_iter().collect(),
                base_time: record.base_time,
                time_unit,
                material_unit: record.material_unit,
            });
        }

        for record in self.impacts {
            simulation.add_impact(Impact {
                name: record.name,
                minutes_per_worker: record.minutes_per_worker,
            });
        }

        let settings = self.output_settings;
        let mode = match OutputMode::from_document_parts(
            &settings.output_type,
            settings.length,
            settings.height,
            settings.target,
        ) {
            Some(mode) => mode,
            None => {
                warnings.push(CodecWarning::new(
                    "UNKNOWN_OUTPUT_TYPE",
                    format!(
                        "unknown output type '{}', using Square-foot",
                        settings.output_type
                    ),
                ));
                OutputMode::AreaTarget {
                    unit_length: settings.length,
                    unit_height: settings.height,
                    target_area: settings.target,
                }
            }
        };
        let display_unit = match TimeUnit::parse_label(&settings.time_display_unit) {
            Some(unit) => unit,
            None => {
                warnings.push(CodecWarning::new(
                    "UNKNOWN_DISPLAY_UNIT",
                    format!(
                        "unknown display unit '{}', using minutes",
                        settings.time_display_unit
                    ),
                ));
                TimeUnit::Minutes
            }
        };
        simulation.set_output(OutputSettings { mode, display_unit });

        LoadedSimulation {
            simulation,
            warnings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TimeUnit;

    fn sample_simulation() -> Simulation {
        let mut sim = Simulation::new();
        sim.set_name("North wall");
        sim.add_worker(Worker::new("Alice", 1.0));
        sim.add_worker(Worker::new("Bob", 2.0));
        sim.add_task(Task::new("Hang", 10.0, TimeUnit::Minutes).with_workers([0, 1]));
        sim.add_impact(Impact::new("Travel", 5.0));
        sim.set_output(OutputSettings::new(OutputMode::AreaTarget {
            unit_length: 10.0,
            unit_height: 10.0,
            target_area: 200.0,
        }));
        sim
    }

    #[test]
    fn test_round_trip_preserves_model() {
        let sim = sample_simulation();
        let document = SimulationDocument::from_simulation(&sim);
        let loaded = document.into_simulation();

        assert!(loaded.warnings.is_empty());
        assert_eq!(loaded.simulation, sim);
    }

    #[test]
    fn test_snapshot_carries_current_version() {
        let document = SimulationDocument::from_simulation(&sample_simulation());
        assert_eq!(document.version, SCHEMA_VERSION);
        assert_eq!(document.output_settings.output_type, "Square-foot");
        assert_eq!(document.output_settings.target, 200.0);
    }

    #[test]
    fn test_empty_document_defaults_everything() {
        let document: SimulationDocument = serde_json::from_str("{}").unwrap();
        let loaded = document.into_simulation();

        // Version 1 is assumed for documents without a tag, which trips
        // the advisory but nothing else.
        assert_eq!(loaded.warnings.len(), 1);
        assert_eq!(loaded.warnings[0].code, "VERSION_MISMATCH");
        assert_eq!(loaded.simulation, Simulation::new());
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let json = r#"{
            "version": 2,
            "workers": [{"name": "Alice"}],
            "tasks": [{"name": "Hang", "base_time": 10.0,
                       "assigned_worker_indices": [0]}],
            "output_settings": {"output_type": "Square-foot"}
        }"#;
        let document: SimulationDocument = serde_json::from_str(json).unwrap();
        let loaded = document.into_simulation();

        assert!(loaded.warnings.is_empty());
        let sim = loaded.simulation;
        assert_eq!(sim.workers()[0].efficiency, 1.0);
        assert_eq!(sim.tasks()[0].time_unit, TimeUnit::Minutes);
        assert_eq!(sim.tasks()[0].material_unit, "unit");
        assert_eq!(sim.output().display_unit, TimeUnit::Minutes);
    }

    #[test]
    fn test_legacy_man_day_label_maps_to_area_capacity() {
        let json = r#"{
            "version": 1,
            "tasks": [{"name": "Hang", "base_time": 10.0,
                       "assigned_worker_indices": [0]}],
            "workers": [{"name": "Alice", "efficiency": 1.0}],
            "output_settings": {"output_type": "Man Day",
                                "length": 10.0, "height": 10.0}
        }"#;
        let document: SimulationDocument = serde_json::from_str(json).unwrap();
        let loaded = document.into_simulation();

        assert_eq!(
            loaded.simulation.output().mode,
            OutputMode::AreaCapacity {
                unit_length: 10.0,
                unit_height: 10.0,
            }
        );
        // Only the version advisory; the legacy label itself is understood.
        assert_eq!(loaded.warnings.len(), 1);
        assert_eq!(loaded.warnings[0].code, "VERSION_MISMATCH");
    }

    #[test]
    fn test_target_area_alias_is_accepted() {
        let json = r#"{
            "version": 2,
            "output_settings": {"output_type": "Square-foot",
                                "length": 10.0, "height": 10.0,
                                "target_area": 200.0}
        }"#;
        let document: SimulationDocument = serde_json::from_str(json).unwrap();
        assert_eq!(document.output_settings.target, 200.0);
    }

    #[test]
    fn test_unknown_labels_default_with_warnings() {
        let json = r#"{
            "version": 2,
            "tasks": [{"name": "Hang", "time_unit": "Days"}],
            "output_settings": {"output_type": "Cubic-foot",
                                "time_display_unit": "fortnights"}
        }"#;
        let document: SimulationDocument = serde_json::from_str(json).unwrap();
        let loaded = document.into_simulation();

        let codes: Vec<&str> = loaded.warnings.iter().map(|w| w.code.as_str()).collect();
        assert_eq!(
            codes,
            vec![
                "UNKNOWN_TIME_UNIT",
                "UNKNOWN_OUTPUT_TYPE",
                "UNKNOWN_DISPLAY_UNIT"
            ]
        );
        assert_eq!(loaded.simulation.tasks()[0].time_unit, TimeUnit::Minutes);
        assert_eq!(loaded.simulation.output().mode.label(), "Square-foot");
    }

    #[test]
    fn test_case_insensitive_unit_labels() {
        let json = r#"{
            "version": 2,
            "tasks": [{"name": "Hang", "time_unit": "hours"}],
            "output_settings": {"output_type": "Square-foot",
                                "time_display_unit": "Hours"}
        }"#;
        let document: SimulationDocument = serde_json::from_str(json).unwrap();
        let loaded = document.into_simulation();

        assert!(loaded.warnings.is_empty());
        assert_eq!(loaded.simulation.tasks()[0].time_unit, TimeUnit::Hours);
        assert_eq!(loaded.simulation.output().display_unit, TimeUnit::Hours);
    }
}
