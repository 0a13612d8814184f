use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sandbox_core::actions::{ActionOutcome, PaletteAction};
use sandbox_core::wizard::Wizard;
use sandbox_core::{
    ApplyResult, CreateProjectInput, Intent, LogEntry, PendingView, Project, ProjectKind,
    ProjectSummary, SandboxError, Snapshot, Submission, SuggestLevel,
};

use crate::store::Store;

type ApiResult<T> = Result<T, (StatusCode, String)>;

// ============================================================
// Error Handling
// ============================================================

/// Map a sandbox error to a status code. The message is safe to expose:
/// it only names ids the caller supplied.
fn sandbox_error(e: SandboxError) -> (StatusCode, String) {
    let status = match &e {
        e if e.is_not_found() => StatusCode::NOT_FOUND,
        SandboxError::NothingPending => StatusCode::CONFLICT,
        _ => StatusCode::BAD_REQUEST,
    };
    tracing::warn!("Request rejected: {}", e);
    (status, e.to_string())
}

// ============================================================
// Request Types
// ============================================================

#[derive(Debug, Deserialize)]
pub struct CommandInput {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct ReuseInput {
    pub display: String,
}

#[derive(Debug, Deserialize)]
pub struct SuggestQuery {
    pub level: Option<SuggestLevel>,
}

#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    /// Only return the snapshots shown in the history panel.
    #[serde(default)]
    pub panel: bool,
}

#[derive(Debug, Deserialize)]
pub struct PaletteQuery {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Deserialize)]
pub struct WizardSelection {
    pub kind: Option<ProjectKind>,
    pub plan: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct WizardResponse {
    pub wizard: Wizard,
    /// Set when the final step created a project.
    pub project: Option<Project>,
}

// ============================================================
// Health
// ============================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================
// Projects
// ============================================================

pub async fn list_projects(State(store): State<Store>) -> Json<Vec<ProjectSummary>> {
    Json(store.lock().projects())
}

pub async fn create_project(
    State(store): State<Store>,
    Json(input): Json<CreateProjectInput>,
) -> (StatusCode, Json<Project>) {
    let project = store.lock().create_project(input.kind);
    (StatusCode::CREATED, Json(project))
}

pub async fn get_project(
    State(store): State<Store>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<Project>> {
    store
        .lock()
        .project(id)
        .cloned()
        .map(Json)
        .map_err(sandbox_error)
}

pub async fn get_active_project(State(store): State<Store>) -> ApiResult<Json<Project>> {
    store
        .lock()
        .active_project()
        .cloned()
        .map(Json)
        .map_err(sandbox_error)
}

pub async fn activate_project(
    State(store): State<Store>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<Project>> {
    let mut sandbox = store.lock();
    sandbox.set_active(id).map_err(sandbox_error)?;
    sandbox.project(id).cloned().map(Json).map_err(sandbox_error)
}

pub async fn preview_project(
    State(store): State<Store>,
    Path(id): Path<Uuid>,
) -> ApiResult<Html<String>> {
    store
        .lock()
        .project(id)
        .map(|p| Html(p.document.clone()))
        .map_err(sandbox_error)
}

// ============================================================
// History
// ============================================================

pub async fn list_history(
    State(store): State<Store>,
    Path(id): Path<Uuid>,
    Query(query): Query<HistoryQuery>,
) -> ApiResult<Json<Vec<Snapshot>>> {
    let sandbox = store.lock();
    let history = if query.panel {
        sandbox.history_panel(id)
    } else {
        sandbox.history(id)
    };
    history.map(|h| Json(h.to_vec())).map_err(sandbox_error)
}

pub async fn restore_snapshot(
    State(store): State<Store>,
    Path((id, snapshot_id)): Path<(Uuid, Uuid)>,
) -> ApiResult<Json<Project>> {
    store
        .lock()
        .restore_snapshot(id, snapshot_id)
        .cloned()
        .map(Json)
        .map_err(sandbox_error)
}

pub async fn fork_snapshot(
    State(store): State<Store>,
    Path((id, snapshot_id)): Path<(Uuid, Uuid)>,
) -> ApiResult<(StatusCode, Json<Project>)> {
    store
        .lock()
        .fork_snapshot(id, snapshot_id)
        .map(|p| (StatusCode::CREATED, Json(p)))
        .map_err(sandbox_error)
}

// ============================================================
// Commands & Proposals
// ============================================================

pub async fn resolve_command(
    State(store): State<Store>,
    Json(input): Json<CommandInput>,
) -> Json<Option<Intent>> {
    Json(store.lock().resolve(&input.text))
}

pub async fn submit_command(
    State(store): State<Store>,
    Json(input): Json<CommandInput>,
) -> Json<Submission> {
    Json(store.lock().submit(&input.text))
}

pub async fn get_pending(State(store): State<Store>) -> Json<PendingView> {
    Json(store.lock().pending_view())
}

pub async fn propose_intent(
    State(store): State<Store>,
    Json(intent): Json<Intent>,
) -> ApiResult<Json<PendingView>> {
    let mut sandbox = store.lock();
    sandbox.propose(intent).map_err(sandbox_error)?;
    Ok(Json(sandbox.pending_view()))
}

pub async fn cancel_pending(State(store): State<Store>) -> StatusCode {
    store.lock().cancel();
    StatusCode::NO_CONTENT
}

pub async fn approve_pending(State(store): State<Store>) -> ApiResult<Json<ApplyResult>> {
    store.lock().approve().map(Json).map_err(sandbox_error)
}

pub async fn list_recent(State(store): State<Store>) -> Json<Vec<String>> {
    Json(store.lock().recent_commands().to_vec())
}

pub async fn reuse_recent(
    State(store): State<Store>,
    Json(input): Json<ReuseInput>,
) -> ApiResult<Json<Intent>> {
    store
        .lock()
        .reuse_recent(&input.display)
        .map(Json)
        .ok_or_else(|| {
            (
                StatusCode::BAD_REQUEST,
                format!("Unrecognized command: {}", input.display),
            )
        })
}

// ============================================================
// Advisor
// ============================================================

pub async fn get_suggestions(
    State(store): State<Store>,
    Query(query): Query<SuggestQuery>,
) -> ApiResult<Json<Vec<String>>> {
    let level = query.level.unwrap_or(SuggestLevel::Light);
    store.lock().suggest(level).map(Json).map_err(sandbox_error)
}

pub async fn propose_suggestions(
    State(store): State<Store>,
    Json(query): Json<SuggestQuery>,
) -> ApiResult<Json<Intent>> {
    let level = query.level.unwrap_or(SuggestLevel::Light);
    store
        .lock()
        .propose_suggestions(level)
        .map(Json)
        .map_err(sandbox_error)
}

// ============================================================
// Toolbar, Palette, Wizard
// ============================================================

pub async fn toolbar_click(
    State(store): State<Store>,
    Path(action): Path<String>,
) -> Json<ActionOutcome> {
    Json(store.lock().toolbar_click(&action))
}

pub async fn search_palette(
    State(store): State<Store>,
    Query(query): Query<PaletteQuery>,
) -> Json<Vec<PaletteAction>> {
    Json(store.lock().palette(&query.q))
}

pub async fn run_palette(
    State(store): State<Store>,
    Path(id): Path<String>,
) -> ApiResult<Json<ActionOutcome>> {
    store.lock().run_palette(&id).map(Json).map_err(sandbox_error)
}

pub async fn get_wizard(State(store): State<Store>) -> Json<Wizard> {
    Json(store.lock().wizard().clone())
}

pub async fn start_wizard(State(store): State<Store>) -> Json<Wizard> {
    Json(store.lock().start_wizard().clone())
}

pub async fn select_wizard(
    State(store): State<Store>,
    Json(input): Json<WizardSelection>,
) -> ApiResult<Json<Wizard>> {
    store
        .lock()
        .select_wizard(input.kind, input.plan)
        .cloned()
        .map(Json)
        .map_err(sandbox_error)
}

pub async fn wizard_next(State(store): State<Store>) -> Json<WizardResponse> {
    let mut sandbox = store.lock();
    let project = sandbox.wizard_next();
    Json(WizardResponse {
        wizard: sandbox.wizard().clone(),
        project,
    })
}

pub async fn wizard_back(State(store): State<Store>) -> Json<Wizard> {
    Json(store.lock().wizard_back().clone())
}

// ============================================================
// Log & Help
// ============================================================

pub async fn get_log(State(store): State<Store>) -> Json<Vec<LogEntry>> {
    Json(store.lock().log().to_vec())
}

pub async fn stuck(State(store): State<Store>) -> Json<Vec<String>> {
    Json(store.lock().stuck())
}
