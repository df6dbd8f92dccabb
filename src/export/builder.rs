//! Building export workbooks from a simulation and its calculation result.
//!
//! The builder only rearranges values the engine already derived: every
//! number in the Results sheet is taken verbatim from the
//! [`CalculationResult`], never recomputed, so the export always matches
//! the live calculation.

use chrono::Utc;

use crate::models::{CalculationResult, Simulation, UNCOMPUTABLE_MARKER};

use super::workbook::{Cell, Sheet, Workbook};

/// Builds the export workbook for a model and its recompute result.
///
/// Sheets: Workers, Tasks, Impacts, Settings, Results. The caller is
/// responsible for passing the result of a recompute over the same
/// `simulation`; the builder does not call the engine itself.
pub fn build_workbook(simulation: &Simulation, result: &CalculationResult) -> Workbook {
    Workbook {
        sheets: vec![
            workers_sheet(simulation),
            tasks_sheet(simulation, result),
            impacts_sheet(result),
            settings_sheet(simulation),
            results_sheet(simulation, result),
        ],
    }
}

fn workers_sheet(simulation: &Simulation) -> Sheet {
    let mut sheet = Sheet::new("Workers", &["#", "Name", "Efficiency"]);
    for (index, worker) in simulation.workers().iter().enumerate() {
        sheet.push_row(vec![
            Cell::Integer(index as i64 + 1),
            Cell::text(&worker.name),
            Cell::Number(worker.efficiency),
        ]);
    }
    sheet
}

fn tasks_sheet(simulation: &Simulation, result: &CalculationResult) -> Sheet {
    let mut sheet = Sheet::new(
        "Tasks",
        &[
            "#",
            "Name",
            "Base Time",
            "Time Unit",
            "Material Unit",
            "Assigned Workers",
            "Adjusted Time (min/unit)",
        ],
    );
    for (index, task) in simulation.tasks().iter().enumerate() {
        let assigned = task
            .assigned_workers
            .iter()
            .map(|i| (i + 1).to_string())
            .collect::<Vec<_>>()
            .join(", ");
        let adjusted = result
            .task_lines
            .get(index)
            .and_then(|line| line.adjusted_minutes);
        sheet.push_row(vec![
            Cell::Integer(index as i64 + 1),
            Cell::text(&task.name),
            Cell::Number(task.base_time),
            Cell::text(task.time_unit.document_label()),
            Cell::text(&task.material_unit),
            Cell::text(assigned),
            Cell::number_or_empty(adjusted),
        ]);
    }
    sheet
}

fn impacts_sheet(result: &CalculationResult) -> Sheet {
    let mut sheet = Sheet::new(
        "Impacts",
        &["#", "Name", "Minutes per Worker", "Crew Total (min)"],
    );
    for (index, line) in result.impact_lines.iter().enumerate() {
        sheet.push_row(vec![
            Cell::Integer(index as i64 + 1),
            Cell::text(&line.name),
            Cell::Number(line.minutes_per_worker),
            Cell::Number(line.crew_minutes),
        ]);
    }
    sheet
}

fn settings_sheet(simulation: &Simulation) -> Sheet {
    let mode = simulation.output().mode;
    let mut sheet = Sheet::new("Settings", &["Setting", "Value"]);
    let mut push = |setting: &str, value: Cell| {
        sheet.push_row(vec![Cell::text(setting), value]);
    };

    push("Simulation Name", Cell::text(simulation.name()));
    push("Output Type", Cell::text(mode.label()));
    push("Unit Length (ft)", Cell::Number(mode.unit_length()));
    push(
        "Unit Height (ft)",
        Cell::number_or_empty(mode.unit_height()),
    );
    push("Target", Cell::number_or_empty(mode.target()));
    push(
        "Display Time In",
        Cell::text(simulation.output().display_unit.display_label()),
    );
    push(
        "Crew Size",
        Cell::Integer(simulation.workers().len() as i64),
    );
    push(
        "Material Unit",
        match simulation.material_unit() {
            Some(unit) => Cell::text(unit),
            None => Cell::Empty,
        },
    );
    push("Generated At", Cell::text(Utc::now().to_rfc3339()));

    sheet
}

fn results_sheet(simulation: &Simulation, result: &CalculationResult) -> Sheet {
    let crew_size = simulation.workers().len();
    let mut sheet = Sheet::new("Results", &["Item", "Value", "Notes"]);

    for line in &result.task_lines {
        let notes = match (line.avg_efficiency, line.adjusted_minutes) {
            (Some(avg), Some(_)) => format!(
                "base {:.2} {}, avg efficiency {avg:.2}, {} workers",
                line.base_time,
                line.time_unit.document_label(),
                line.worker_count
            ),
            _ => UNCOMPUTABLE_MARKER.to_string(),
        };
        sheet.push_row(vec![
            Cell::text(line.display_name()),
            Cell::number_or_empty(line.adjusted_minutes),
            Cell::text(notes),
        ]);
    }

    for line in &result.impact_lines {
        sheet.push_row(vec![
            Cell::text(format!("Impact '{}'", line.display_name())),
            Cell::Number(line.crew_minutes),
            Cell::text(format!(
                "{:.2} min × {crew_size} workers",
                line.minutes_per_worker
            )),
        ]);
    }

    for line in &result.derivation {
        sheet.push_row(vec![
            Cell::text(&line.label),
            Cell::number_or_empty(line.value),
            Cell::text(&line.note),
        ]);
    }

    sheet.push_row(vec![
        Cell::text("Result"),
        Cell::number_or_empty(result.final_metric),
        Cell::text(&result.summary),
    ]);

    sheet
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::recompute;
    use crate::models::{
        Impact, OutputMode, OutputSettings, Task, TimeUnit, Worker,
    };

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
    fn test_workbook_has_all_sheets() {
        let sim = sample_simulation();
        let result = recompute(&sim);
        let workbook = build_workbook(&sim, &result);

        for name in ["Workers", "Tasks", "Impacts", "Settings", "Results"] {
            assert!(workbook.sheet(name).is_some(), "missing sheet {name}");
        }
    }

    #[test]
    fn test_results_values_match_engine_exactly() {
        let sim = sample_simulation();
        let result = recompute(&sim);
        let workbook = build_workbook(&sim, &result);
        let results = workbook.sheet("Results").unwrap();

        // Task row carries the engine's adjusted minutes verbatim.
        assert_eq!(
            results.rows[0][1],
            Cell::Number(result.task_lines[0].adjusted_minutes.unwrap())
        );
        // Impact row carries the crew total.
        assert_eq!(results.rows[1][1], Cell::Number(10.0));
        // Final row carries the final metric and headline.
        let final_row = results.rows.last().unwrap();
        assert_eq!(final_row[0], Cell::text("Result"));
        assert_eq!(
            final_row[1],
            Cell::Number(result.final_metric.unwrap())
        );
        assert_eq!(final_row[2], Cell::text(result.summary.clone()));
    }

    #[test]
    fn test_task_notes_show_inputs() {
        let sim = sample_simulation();
        let result = recompute(&sim);
        let workbook = build_workbook(&sim, &result);
        let results = workbook.sheet("Results").unwrap();

        assert_eq!(
            results.rows[0][2],
            Cell::text("base 10.00 Minutes, avg efficiency 1.50, 2 workers")
        );
    }

    #[test]
    fn test_uncomputable_task_flagged_in_results() {
        let mut sim = sample_simulation();
        sim.add_task(Task::new("Orphan", 99.0, TimeUnit::Minutes));
        let result = recompute(&sim);
        let workbook = build_workbook(&sim, &result);

        let results = workbook.sheet("Results").unwrap();
        assert_eq!(results.rows[1][1], Cell::Empty);
        assert_eq!(results.rows[1][2], Cell::text(UNCOMPUTABLE_MARKER));

        let tasks = workbook.sheet("Tasks").unwrap();
        assert_eq!(tasks.rows[1][6], Cell::Empty);
    }

    #[test]
    fn test_tasks_sheet_displays_one_based_assignments() {
        let sim = sample_simulation();
        let result = recompute(&sim);
        let workbook = build_workbook(&sim, &result);

        let tasks = workbook.sheet("Tasks").unwrap();
        assert_eq!(tasks.rows[0][5], Cell::text("1, 2"));
    }

    #[test]
    fn test_settings_sheet_omits_target_for_capacity_modes() {
        let mut sim = sample_simulation();
        sim.set_output(OutputSettings::new(OutputMode::AreaCapacity {
            unit_length: 10.0,
            unit_height: 10.0,
        }));
        let result = recompute(&sim);
        let workbook = build_workbook(&sim, &result);

        let settings = workbook.sheet("Settings").unwrap();
        let target_row = settings
            .rows
            .iter()
            .find(|row| row[0] == Cell::text("Target"))
            .unwrap();
        assert_eq!(target_row[1], Cell::Empty);
    }

    #[test]
    fn test_derivation_rows_mirror_breakdown() {
        let sim = sample_simulation();
        let result = recompute(&sim);
        let workbook = build_workbook(&sim, &result);
        let results = workbook.sheet("Results").unwrap();

        let derivation_notes: Vec<&Cell> = results
            .rows
            .iter()
            .filter(|row| row[0] == Cell::text("Units needed") || row[0] == Cell::text("Total"))
            .map(|row| &row[2])
            .collect();
        assert_eq!(
            derivation_notes,
            vec![
                &Cell::text(result.derivation[0].note.clone()),
                &Cell::text(result.derivation[1].note.clone()),
            ]
        );
    }
}
