//! Impact model.
//!
//! Impacts are named fixed time penalties (travel, cleanup, toolbox talks)
//! charged once per crew member regardless of task assignment.

use serde::{Deserialize, Serialize};

/// A named fixed time penalty applied once per worker in the registry.
///
/// # Example
///
/// ```
/// use production_engine::models::Impact;
///
/// let impact = Impact::new("Material staging", 15.0);
/// assert_eq!(impact.minutes_per_worker, 15.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Impact {
    /// Display name of the impact. May be empty.
    #[serde(default)]
    pub name: String,
    /// Minutes charged per worker in the crew registry.
    #[serde(default)]
    pub minutes_per_worker: f64,
}

impl Impact {
    /// Creates a new impact.
    pub fn new(name: impl Into<String>, minutes_per_worker: f64) -> Self {
        Self {
            name: name.into(),
            minutes_per_worker,
        }
    }

    /// The name shown in breakdowns, falling back to "Unnamed" when empty.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            "Unnamed"
        } else {
            &self.name
        }
    }
}
