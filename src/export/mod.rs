//! Report export for the production estimation engine.
//!
//! Renders the model plus every computed intermediate value into a set of
//! related tables (Workers, Tasks, Impacts, Settings, Results). The
//! exporter reuses the numbers from the engine's
//! [`CalculationResult`](crate::models::CalculationResult) verbatim, so the
//! export is always numerically identical to the live calculation.

mod builder;
mod workbook;
mod writer;

pub use builder::build_workbook;
pub use workbook::{Cell, Sheet, Workbook};
pub use writer::write_workbook_csv;
