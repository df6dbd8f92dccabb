//! HTTP API module for the production estimation engine.
//!
//! This module provides the REST endpoints the editing surface drives:
//! model mutations, recompute, save/load, and export.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    AssignmentRequest, DocumentPathRequest, ExportRequest, ImpactRequest, OutputSettingsRequest,
    TaskRequest, WorkerRequest,
};
pub use response::{ApiError, ApiErrorResponse, ExportResponse, LoadResponse, SaveResponse};
pub use state::AppState;
