//! Application state for the production estimation engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::models::Simulation;

/// Shared application state.
///
/// Holds the single in-memory simulation model. The mutex serializes
/// operations, so every mutation, recompute, save, load, and export runs
/// to completion before the next is accepted.
#[derive(Clone, Default)]
pub struct AppState {
    simulation: Arc<Mutex<Simulation>>,
}

impl AppState {
    /// Creates application state with an empty simulation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates application state seeded with an existing simulation.
    pub fn with_simulation(simulation: Simulation) -> Self {
        Self {
            simulation: Arc::new(Mutex::new(simulation)),
        }
    }

    /// Returns the shared simulation model.
    pub fn simulation(&self) -> &Mutex<Simulation> {
        &self.simulation
    }
}
