//! The in-memory simulation model.
//!
//! This module defines [`Simulation`], the single mutable model instance the
//! host application edits: the crew registry, task ledger, impact ledger,
//! and output configuration. Workers, tasks, and impacts are append-only;
//! the whole model is reset atomically by [`Simulation::restart`].

use crate::error::{EngineError, EngineResult};

use super::{Impact, OutputSettings, Task, Worker};

/// The full in-memory model the engine computes over.
///
/// Fields are private so the append-only invariant holds: entries can be
/// added and edited in place, but never removed individually, which keeps
/// the worker indices stored on tasks stable. The only way to shrink the
/// stores is [`Simulation::restart`], which clears all of them together.
///
/// # Example
///
/// ```
/// use production_engine::models::{Simulation, Task, TimeUnit, Worker};
///
/// let mut sim = Simulation::new();
/// sim.add_worker(Worker::new("Alice", 1.0));
/// sim.add_task(Task::new("Hang", 10.0, TimeUnit::Minutes).with_workers([0]));
/// assert_eq!(sim.workers().len(), 1);
/// assert_eq!(sim.tasks().len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Simulation {
    name: String,
    workers: Vec<Worker>,
    tasks: Vec<Task>,
    impacts: Vec<Impact>,
    output: OutputSettings,
}

impl Simulation {
    /// Creates an empty simulation with default output settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// The simulation name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sets the simulation name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// The crew registry, in registration order.
    pub fn workers(&self) -> &[Worker] {
        &self.workers
    }

    /// Appends a worker to the crew registry and returns its index.
    pub fn add_worker(&mut self, worker: Worker) -> usize {
        self.workers.push(worker);
        self.workers.len() - 1
    }

    /// Replaces the worker at `index` in place.
    pub fn update_worker(&mut self, index: usize, worker: Worker) -> EngineResult<()> {
        let count = self.workers.len();
        match self.workers.get_mut(index) {
            Some(slot) => {
                *slot = worker;
                Ok(())
            }
            None => Err(EngineError::WorkerIndexOutOfRange { index, count }),
        }
    }

    /// The task ledger, in entry order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Appends a task to the ledger and returns its index.
    ///
    /// Assigned worker indices are accepted as-is; a dangling index makes
    /// the task uncomputable rather than failing the append.
    pub fn add_task(&mut self, task: Task) -> usize {
        self.tasks.push(task);
        self.tasks.len() - 1
    }

    /// Replaces the task at `index` in place.
    pub fn update_task(&mut self, index: usize, task: Task) -> EngineResult<()> {
        let count = self.tasks.len();
        match self.tasks.get_mut(index) {
            Some(slot) => {
                *slot = task;
                Ok(())
            }
            None => Err(EngineError::TaskIndexOutOfRange { index, count }),
        }
    }

    /// Toggles one worker's assignment on one task.
    ///
    /// Unlike [`Self::add_task`], both indices are validated here: this is
    /// the edit surface the UI drives from checkboxes, where a dangling
    /// index can only be a caller bug.
    pub fn set_assignment(
        &mut self,
        task_index: usize,
        worker_index: usize,
        assigned: bool,
    ) -> EngineResult<()> {
        if worker_index >= self.workers.len() {
            return Err(EngineError::WorkerIndexOutOfRange {
                index: worker_index,
                count: self.workers.len(),
            });
        }
        let count = self.tasks.len();
        let task = self
            .tasks
            .get_mut(task_index)
            .ok_or(EngineError::TaskIndexOutOfRange {
                index: task_index,
                count,
            })?;
        if assigned {
            task.assigned_workers.insert(worker_index);
        } else {
            task.assigned_workers.remove(&worker_index);
        }
        Ok(())
    }

    /// The impact ledger, in entry order.
    pub fn impacts(&self) -> &[Impact] {
        &self.impacts
    }

    /// Appends an impact to the ledger and returns its index.
    pub fn add_impact(&mut self, impact: Impact) -> usize {
        self.impacts.push(impact);
        self.impacts.len() - 1
    }

    /// The current output configuration.
    pub fn output(&self) -> &OutputSettings {
        &self.output
    }

    /// Replaces the output configuration.
    pub fn set_output(&mut self, output: OutputSettings) {
        self.output = output;
    }

    /// The material unit label of the first task, the display label for the
    /// whole model. `None` when the ledger is empty.
    pub fn material_unit(&self) -> Option<&str> {
        self.tasks.first().map(|task| task.material_unit.as_str())
    }

    /// Clears all four stores and resets the output configuration.
    ///
    /// This is the only way to shrink the model; partial resets are not a
    /// valid state.
    pub fn restart(&mut self) {
        *self = Self::default();
    }
}
