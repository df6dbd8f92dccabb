//! Error types for the production estimation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every fallible operation: persistence, export, and model mutation.
//! The calculation engine itself never returns an error; uncomputable
//! inputs are reported through
//! [`CalculationResult`](crate::models::CalculationResult) instead.

use thiserror::Error;

/// The main error type for the production estimation engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use production_engine::error::EngineError;
///
/// let error = EngineError::DocumentNotFound {
///     path: "/missing/file.json".to_string(),
/// };
/// assert_eq!(error.to_string(), "Simulation document not found: /missing/file.json");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A simulation document was not found at the specified path.
    #[error("Simulation document not found: {path}")]
    DocumentNotFound {
        /// The path that was not found.
        path: String,
    },

    /// A simulation document could not be parsed.
    #[error("Failed to parse simulation document '{path}': {message}")]
    DocumentParse {
        /// The path to the document that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A simulation document could not be written.
    #[error("Failed to write simulation document '{path}': {message}")]
    DocumentWrite {
        /// The path that could not be written.
        path: String,
        /// A description of the write error.
        message: String,
    },

    /// A document path had an extension the codec does not understand.
    #[error("Unsupported document format '{path}': expected .json, .yaml or .yml")]
    UnsupportedFormat {
        /// The offending path.
        path: String,
    },

    /// The export directory could not be created.
    #[error("Failed to create export directory '{path}': {message}")]
    ExportDirectory {
        /// The directory that could not be created.
        path: String,
        /// A description of the failure.
        message: String,
    },

    /// An export sheet could not be written.
    #[error("Failed to write export sheet '{sheet}' to '{path}': {message}")]
    ExportWrite {
        /// The name of the sheet being written.
        sheet: String,
        /// The destination path.
        path: String,
        /// A description of the write error.
        message: String,
    },

    /// A worker index did not resolve against the crew registry.
    #[error("No worker at index {index} (crew size {count})")]
    WorkerIndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The current crew size.
        count: usize,
    },

    /// A task index did not resolve against the task ledger.
    #[error("No task at index {index} (task count {count})")]
    TaskIndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The current number of tasks.
        count: usize,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
