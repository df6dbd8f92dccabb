//! Saving and loading simulation documents.
//!
//! The on-disk format is chosen by file extension: pretty-printed JSON for
//! `.json`, YAML for `.yaml`/`.yml`. A load parses and materializes the
//! entire document before returning, so a failure at any point leaves the
//! caller's current model untouched.

use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::error::{EngineError, EngineResult};
use crate::models::Simulation;

use super::document::{LoadedSimulation, SimulationDocument};

#[derive(Debug, Clone, Copy, PartialEq)]
enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    fn from_path(path: &Path) -> EngineResult<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("json") => Ok(DocumentFormat::Json),
            Some("yaml") | Some("yml") => Ok(DocumentFormat::Yaml),
            _ => Err(EngineError::UnsupportedFormat {
                path: path.display().to_string(),
            }),
        }
    }
}

/// Saves a simulation to the given path.
///
/// The whole document is serialized to a string first, so an encoding
/// failure cannot leave a half-written file behind.
pub fn save_simulation<P: AsRef<Path>>(simulation: &Simulation, path: P) -> EngineResult<()> {
    let path = path.as_ref();
    let format = DocumentFormat::from_path(path)?;
    let document = SimulationDocument::from_simulation(simulation);

    let contents = match format {
        DocumentFormat::Json => {
            serde_json::to_string_pretty(&document).map_err(|e| EngineError::DocumentWrite {
                path: path.display().to_string(),
                message: e.to_string(),
            })?
        }
        DocumentFormat::Yaml => {
            serde_yaml::to_string(&document).map_err(|e| EngineError::DocumentWrite {
                path: path.display().to_string(),
                message: e.to_string(),
            })?
        }
    };

    fs::write(path, contents).map_err(|e| EngineError::DocumentWrite {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    info!(path = %path.display(), "saved simulation document");
    Ok(())
}

/// Loads a simulation from the given path.
///
/// Codec advisories (schema version mismatch, unknown labels) are logged
/// and returned alongside the model; they never fail the load.
pub fn load_simulation<P: AsRef<Path>>(path: P) -> EngineResult<LoadedSimulation> {
    let path = path.as_ref();
    let format = DocumentFormat::from_path(path)?;

    let contents = fs::read_to_string(path).map_err(|_| EngineError::DocumentNotFound {
        path: path.display().to_string(),
    })?;

    let document: SimulationDocument = match format {
        DocumentFormat::Json => {
            serde_json::from_str(&contents).map_err(|e| EngineError::DocumentParse {
                path: path.display().to_string(),
                message: e.to_string(),
            })?
        }
        DocumentFormat::Yaml => {
            serde_yaml::from_str(&contents).map_err(|e| EngineError::DocumentParse {
                path: path.display().to_string(),
                message: e.to_string(),
            })?
        }
    };

    let loaded = document.into_simulation();
    for warning in &loaded.warnings {
        warn!(
            path = %path.display(),
            code = %warning.code,
            "{}", warning.message
        );
    }
    info!(
        path = %path.display(),
        workers = loaded.simulation.workers().len(),
        tasks = loaded.simulation.tasks().len(),
        "loaded simulation document"
    );

    Ok(loaded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{OutputMode, OutputSettings, Task, TimeUnit, Worker};

    fn sample_simulation() -> Simulation {
        let mut sim = Simulation::new();
        sim.set_name("Round trip");
        sim.add_worker(Worker::new("Alice", 1.0));
        sim.add_worker(Worker::new("Bob", 2.0));
        sim.add_task(Task::new("Hang", 10.0, TimeUnit::Minutes).with_workers([0, 1]));
        sim.set_output(OutputSettings::new(OutputMode::AreaTarget {
            unit_length: 10.0,
            unit_height: 10.0,
            target_area: 200.0,
        }));
        sim
    }

    #[test]
    fn test_json_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.json");
        let sim = sample_simulation();

        save_simulation(&sim, &path).unwrap();
        let loaded = load_simulation(&path).unwrap();

        assert!(loaded.warnings.is_empty());
        assert_eq!(loaded.simulation, sim);
    }

    #[test]
    fn test_yaml_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.yaml");
        let sim = sample_simulation();

        save_simulation(&sim, &path).unwrap();
        let loaded = load_simulation(&path).unwrap();

        assert!(loaded.warnings.is_empty());
        assert_eq!(loaded.simulation, sim);
    }

    #[test]
    fn test_unsupported_extension_is_rejected() {
        let err = save_simulation(&sample_simulation(), "model.xml").unwrap_err();
        assert!(matches!(err, EngineError::UnsupportedFormat { .. }));

        let err = load_simulation("model.txt").unwrap_err();
        assert!(matches!(err, EngineError::UnsupportedFormat { .. }));
    }

    #[test]
    fn test_missing_file_reports_not_found() {
        let err = load_simulation("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, EngineError::DocumentNotFound { .. }));
    }

    #[test]
    fn test_malformed_document_reports_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{not json").unwrap();

        let err = load_simulation(&path).unwrap_err();
        assert!(matches!(err, EngineError::DocumentParse { .. }));
    }
}
