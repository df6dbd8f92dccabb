//! Worker model.
//!
//! This module defines the Worker struct representing a single crew member
//! in the production estimation system.

use serde::{Deserialize, Serialize};

/// Represents a single crew member.
///
/// A worker's identity is its position in the crew registry; tasks reference
/// workers by that index. The registry is append-only for the lifetime of a
/// simulation, so indices stay stable once assigned.
///
/// # Example
///
/// ```
/// use production_engine::models::Worker;
///
/// let worker = Worker::new("Alice", 1.5);
/// assert_eq!(worker.name, "Alice");
/// assert_eq!(worker.efficiency, 1.5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Worker {
    /// Display name of the worker. May be empty.
    #[serde(default)]
    pub name: String,
    /// Efficiency multiplier applied to task base times. Expected to be
    /// positive; a non-positive value makes the tasks it participates in
    /// uncomputable rather than crashing the engine.
    #[serde(default = "default_efficiency")]
    pub efficiency: f64,
}

fn default_efficiency() -> f64 {
    1.0
}

impl Worker {
    /// Creates a new worker with the given name and efficiency.
    pub fn new(name: impl Into<String>, efficiency: f64) -> Self {
        Self {
            name: name.into(),
            efficiency,
        }
    }
}

impl Default for Worker {
    fn default() -> Self {
        Self {
            name: String::new(),
            efficiency: default_efficiency(),
        }
    }
}
