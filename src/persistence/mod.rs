//! Persistence codec for the simulation model.
//!
//! This module serializes the full model (crew registry, task ledger,
//! impact ledger, output configuration) into a versioned document and
//! loads it back tolerantly: missing optional fields default, legacy
//! labels are remapped, and a schema version mismatch is a non-fatal
//! advisory.

mod document;
mod store;

pub use document::{
    CodecWarning, ImpactRecord, LoadedSimulation, OutputSettingsRecord, SCHEMA_VERSION,
    SimulationDocument, TaskRecord, WorkerRecord,
};
pub use store::{load_simulation, save_simulation};
