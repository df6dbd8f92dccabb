//! HTTP request handlers for the production estimation engine API.
//!
//! Every mutation handler applies its event to the shared model and
//! returns a fresh recompute result, so the editing surface always renders
//! the latest figures without holding any calculation state of its own.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post, put},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::recompute;
use crate::export::{build_workbook, write_workbook_csv};
use crate::models::{CalculationResult, OutputSettings};
use crate::persistence::{SimulationDocument, load_simulation, save_simulation};

use super::request::{
    AssignmentRequest, DocumentPathRequest, ExportRequest, ImpactRequest, OutputSettingsRequest,
    TaskRequest, WorkerRequest,
};
use super::response::{ApiErrorResponse, ExportResponse, LoadResponse, SaveResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/simulation", get(get_simulation))
        .route("/workers", post(add_worker))
        .route("/workers/:index", put(update_worker))
        .route("/tasks", post(add_task))
        .route("/tasks/:index", put(update_task))
        .route("/tasks/:index/assignment", put(set_assignment))
        .route("/impacts", post(add_impact))
        .route("/output", put(set_output))
        .route("/restart", post(restart))
        .route("/calculate", get(calculate))
        .route("/save", post(save))
        .route("/load", post(load))
        .route("/export", get(export_workbook).post(export_csv))
        .with_state(state)
}

/// Handler for GET /simulation: the current model in document form.
async fn get_simulation(State(state): State<AppState>) -> Json<SimulationDocument> {
    let simulation = state.simulation().lock().await;
    Json(SimulationDocument::from_simulation(&simulation))
}

/// Handler for POST /workers.
async fn add_worker(
    State(state): State<AppState>,
    Json(request): Json<WorkerRequest>,
) -> Json<CalculationResult> {
    let mut simulation = state.simulation().lock().await;
    let index = simulation.add_worker(request.into());
    info!(index, "added worker");
    Json(recompute(&simulation))
}

/// Handler for PUT /workers/{index}.
async fn update_worker(
    State(state): State<AppState>,
    Path(index): Path<usize>,
    Json(request): Json<WorkerRequest>,
) -> Result<Json<CalculationResult>, ApiErrorResponse> {
    let mut simulation = state.simulation().lock().await;
    simulation.update_worker(index, request.into())?;
    info!(index, "updated worker");
    Ok(Json(recompute(&simulation)))
}

/// Handler for POST /tasks.
async fn add_task(
    State(state): State<AppState>,
    Json(request): Json<TaskRequest>,
) -> Json<CalculationResult> {
    let mut simulation = state.simulation().lock().await;
    let index = simulation.add_task(request.into());
    info!(index, "added task");
    Json(recompute(&simulation))
}

/// Handler for PUT /tasks/{index}.
async fn update_task(
    State(state): State<AppState>,
    Path(index): Path<usize>,
    Json(request): Json<TaskRequest>,
) -> Result<Json<CalculationResult>, ApiErrorResponse> {
    let mut simulation = state.simulation().lock().await;
    simulation.update_task(index, request.into())?;
    info!(index, "updated task");
    Ok(Json(recompute(&simulation)))
}

/// Handler for PUT /tasks/{index}/assignment.
async fn set_assignment(
    State(state): State<AppState>,
    Path(index): Path<usize>,
    Json(request): Json<AssignmentRequest>,
) -> Result<Json<CalculationResult>, ApiErrorResponse> {
    let mut simulation = state.simulation().lock().await;
    simulation.set_assignment(index, request.worker_index, request.assigned)?;
    info!(
        task = index,
        worker = request.worker_index,
        assigned = request.assigned,
        "toggled assignment"
    );
    Ok(Json(recompute(&simulation)))
}

/// Handler for POST /impacts.
async fn add_impact(
    State(state): State<AppState>,
    Json(request): Json<ImpactRequest>,
) -> Json<CalculationResult> {
    let mut simulation = state.simulation().lock().await;
    let index = simulation.add_impact(request.into());
    info!(index, "added impact");
    Json(recompute(&simulation))
}

/// Handler for PUT /output.
async fn set_output(
    State(state): State<AppState>,
    Json(request): Json<OutputSettingsRequest>,
) -> Result<Json<CalculationResult>, ApiErrorResponse> {
    let settings = OutputSettings::try_from(request).map_err(|message| {
        warn!(%message, "rejected output settings");
        ApiErrorResponse::validation(message)
    })?;
    let mut simulation = state.simulation().lock().await;
    simulation.set_output(settings);
    Ok(Json(recompute(&simulation)))
}

/// Handler for POST /restart: clears the whole model atomically.
async fn restart(State(state): State<AppState>) -> Json<CalculationResult> {
    let mut simulation = state.simulation().lock().await;
    simulation.restart();
    info!("restarted simulation");
    Json(recompute(&simulation))
}

/// Handler for GET /calculate.
async fn calculate(State(state): State<AppState>) -> Json<CalculationResult> {
    let simulation = state.simulation().lock().await;
    Json(recompute(&simulation))
}

/// Handler for POST /save.
async fn save(
    State(state): State<AppState>,
    Json(request): Json<DocumentPathRequest>,
) -> Result<Json<SaveResponse>, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, path = %request.path, "saving simulation");

    let simulation = state.simulation().lock().await;
    save_simulation(&simulation, &request.path).map_err(|err| {
        warn!(correlation_id = %correlation_id, error = %err, "save failed");
        ApiErrorResponse::from(err)
    })?;

    Ok(Json(SaveResponse { path: request.path }))
}

/// Handler for POST /load.
///
/// The document is parsed and materialized in full before the shared model
/// is touched, so a failed load leaves the current model intact.
async fn load(
    State(state): State<AppState>,
    Json(request): Json<DocumentPathRequest>,
) -> Result<Json<LoadResponse>, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, path = %request.path, "loading simulation");

    let loaded = load_simulation(&request.path).map_err(|err| {
        warn!(correlation_id = %correlation_id, error = %err, "load failed");
        ApiErrorResponse::from(err)
    })?;

    let mut simulation = state.simulation().lock().await;
    *simulation = loaded.simulation;

    Ok(Json(LoadResponse {
        warnings: loaded.warnings,
        result: recompute(&simulation),
    }))
}

/// Handler for GET /export: the workbook as structured JSON.
async fn export_workbook(State(state): State<AppState>) -> Json<crate::export::Workbook> {
    let simulation = state.simulation().lock().await;
    let result = recompute(&simulation);
    Json(build_workbook(&simulation, &result))
}

/// Handler for POST /export: write the workbook as CSV files.
async fn export_csv(
    State(state): State<AppState>,
    Json(request): Json<ExportRequest>,
) -> Result<Json<ExportResponse>, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, directory = %request.directory, "exporting workbook");

    let simulation = state.simulation().lock().await;
    let result = recompute(&simulation);
    let workbook = build_workbook(&simulation, &result);
    write_workbook_csv(&workbook, &request.directory).map_err(|err| {
        warn!(correlation_id = %correlation_id, error = %err, "export failed");
        ApiErrorResponse::from(err)
    })?;

    Ok(Json(ExportResponse {
        directory: request.directory,
        sheets: workbook.sheets.into_iter().map(|sheet| sheet.name).collect(),
    }))
}
