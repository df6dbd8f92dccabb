//! Per-task adjusted time calculation.
//!
//! The adjusted time is the task's base time converted to minutes, divided
//! by the mean efficiency of its assigned workers, and multiplied by the
//! number of assigned workers. The multiplication is deliberate: the figure
//! is total person-minutes per output unit, not wall-clock time.

use crate::models::{Task, Worker};

/// The result of timing a single task against the crew registry.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskTimeResult {
    /// Number of workers assigned to the task.
    pub worker_count: usize,
    /// Mean efficiency of the assigned workers, when every index resolved.
    pub avg_efficiency: Option<f64>,
    /// Adjusted time in minutes per output unit, when computable.
    pub adjusted_minutes: Option<f64>,
}

impl TaskTimeResult {
    fn uncomputable(worker_count: usize) -> Self {
        Self {
            worker_count,
            avg_efficiency: None,
            adjusted_minutes: None,
        }
    }
}

/// Computes the adjusted time of one task.
///
/// The task is uncomputable (`adjusted_minutes == None`) when its
/// assignment set is empty, when any assigned index falls outside the crew
/// registry, or when the mean efficiency of the assigned workers is not
/// positive. None of these conditions is an error: the task is simply
/// flagged `???` and excluded from the aggregate.
///
/// # Example
///
/// ```
/// use production_engine::calculation::calculate_adjusted_time;
/// use production_engine::models::{Task, TimeUnit, Worker};
///
/// let workers = [Worker::new("Alice", 1.0), Worker::new("Bob", 2.0)];
/// let task = Task::new("Hang", 10.0, TimeUnit::Minutes).with_workers([0, 1]);
///
/// let timing = calculate_adjusted_time(&task, &workers);
/// assert_eq!(timing.avg_efficiency, Some(1.5));
/// // (10 / 1.5) * 2 workers
/// assert_eq!(timing.adjusted_minutes, Some(10.0 / 1.5 * 2.0));
/// ```
pub fn calculate_adjusted_time(task: &Task, workers: &[Worker]) -> TaskTimeResult {
    let worker_count = task.assigned_workers.len();
    if worker_count == 0 {
        return TaskTimeResult::uncomputable(0);
    }

    let mut efficiency_sum = 0.0;
    for &index in &task.assigned_workers {
        match workers.get(index) {
            Some(worker) => efficiency_sum += worker.efficiency,
            None => return TaskTimeResult::uncomputable(worker_count),
        }
    }

    let avg_efficiency = efficiency_sum / worker_count as f64;
    if avg_efficiency <= 0.0 {
        return TaskTimeResult {
            worker_count,
            avg_efficiency: Some(avg_efficiency),
            adjusted_minutes: None,
        };
    }

    let adjusted =
        task.base_time * task.time_unit.unit_factor() / avg_efficiency * worker_count as f64;

    TaskTimeResult {
        worker_count,
        avg_efficiency: Some(avg_efficiency),
        adjusted_minutes: Some(adjusted),
    }
}
