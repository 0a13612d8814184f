//! MCP server exposing the sandbox's propose/approve workflow as tools.

mod types;

use std::str::FromStr;

pub use types::*;

use rmcp::{
    handler::server::{tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, Content, ServerInfo},
    tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler, ServiceExt,
};
use serde::Serialize;
use uuid::Uuid;

use sandbox_core::{
    ApplyResult, PendingView, ProjectKind, ProjectSummary, SandboxError, Submission,
    SuggestLevel,
};

use crate::store::Store;

#[derive(Clone)]
pub struct McpServer {
    store: Store,
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    pub fn new(store: Store) -> Self {
        Self {
            store,
            tool_router: Self::tool_router(),
        }
    }

    fn parse_uuid(s: &str) -> Result<Uuid, McpError> {
        Uuid::parse_str(s)
            .map_err(|e| McpError::invalid_params(format!("Invalid UUID: {}", e), None))
    }

    fn sandbox_err(e: SandboxError) -> McpError {
        McpError::invalid_params(e.to_string(), None)
    }

    fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
        let json = serde_json::to_string_pretty(value)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    // ============================================================
    // Tool logic - shared by the tools and exposed for tests
    // ============================================================

    pub fn handle_resolve_command(&self, text: &str) -> ResolveResponse {
        let intent = self.store.lock().resolve(text);
        ResolveResponse {
            matched: intent.is_some(),
            display: intent.as_ref().map(|i| i.display().to_string()),
            description: intent.as_ref().map(|i| i.describe()),
        }
    }

    pub fn handle_submit_command(&self, text: &str) -> Submission {
        self.store.lock().submit(text)
    }

    pub fn handle_get_pending(&self) -> PendingView {
        self.store.lock().pending_view()
    }

    pub fn handle_approve_pending(&self) -> Result<ApplyResult, McpError> {
        self.store.lock().approve().map_err(Self::sandbox_err)
    }

    pub fn handle_cancel_pending(&self) -> CancelResponse {
        CancelResponse {
            cancelled: self.store.lock().cancel().map(|i| i.describe()),
        }
    }

    pub fn handle_list_projects(&self) -> Vec<ProjectSummary> {
        self.store.lock().projects()
    }

    pub fn handle_create_project(&self, kind: &str) -> Result<ProjectInfo, McpError> {
        let kind = ProjectKind::from_str(kind).map_err(|_| {
            McpError::invalid_params(
                format!("Invalid kind '{}'. Must be: blank, fx, or simple", kind),
                None,
            )
        })?;
        let project = self.store.lock().create_project(kind);
        Ok(ProjectInfo::from(&project))
    }

    pub fn handle_switch_project(&self, project_id: &str) -> Result<ProjectInfo, McpError> {
        let project_id = Self::parse_uuid(project_id)?;
        let mut sandbox = self.store.lock();
        sandbox.set_active(project_id).map_err(Self::sandbox_err)?;
        sandbox
            .project(project_id)
            .map(ProjectInfo::from)
            .map_err(Self::sandbox_err)
    }

    pub fn handle_list_snapshots(
        &self,
        project_id: &str,
        panel_only: bool,
    ) -> Result<SnapshotListResponse, McpError> {
        let id = Self::parse_uuid(project_id)?;
        let sandbox = self.store.lock();
        let history = match panel_only {
            true => sandbox.history_panel(id),
            false => sandbox.history(id),
        };
        let history = history.map_err(Self::sandbox_err)?;

        Ok(SnapshotListResponse {
            project_id: id.to_string(),
            snapshots: history.iter().map(SnapshotInfo::from).collect(),
        })
    }

    pub fn handle_restore_snapshot(
        &self,
        project_id: &str,
        snapshot_id: &str,
    ) -> Result<ProjectInfo, McpError> {
        let project_id = Self::parse_uuid(project_id)?;
        let snapshot_id = Self::parse_uuid(snapshot_id)?;
        self.store
            .lock()
            .restore_snapshot(project_id, snapshot_id)
            .map(ProjectInfo::from)
            .map_err(Self::sandbox_err)
    }

    pub fn handle_fork_snapshot(
        &self,
        project_id: &str,
        snapshot_id: &str,
    ) -> Result<ProjectInfo, McpError> {
        let project_id = Self::parse_uuid(project_id)?;
        let snapshot_id = Self::parse_uuid(snapshot_id)?;
        self.store
            .lock()
            .fork_snapshot(project_id, snapshot_id)
            .map(|p| ProjectInfo::from(&p))
            .map_err(Self::sandbox_err)
    }

    pub fn handle_recent_commands(&self) -> Vec<String> {
        self.store.lock().recent_commands().to_vec()
    }

    pub fn handle_smart_suggest(
        &self,
        level: &str,
        propose: bool,
    ) -> Result<SuggestResponse, McpError> {
        let level = SuggestLevel::from_str(level).map_err(|_| {
            McpError::invalid_params(
                format!("Invalid level '{}'. Must be: light, deep, or ultra", level),
                None,
            )
        })?;
        let mut sandbox = self.store.lock();
        let suggestions = if propose {
            match sandbox.propose_suggestions(level).map_err(Self::sandbox_err)? {
                sandbox_core::Intent::SmartSuggest { suggestions, .. } => suggestions,
                _ => Vec::new(),
            }
        } else {
            sandbox.suggest(level).map_err(Self::sandbox_err)?
        };

        Ok(SuggestResponse {
            level: level.as_str().to_string(),
            suggestions,
            proposed: propose,
        })
    }
}

#[tool_router]
impl McpServer {
    // ============================================================
    // Command Tools - Resolve, propose and approve changes
    // ============================================================

    #[tool(
        description = "Check what a command would do without proposing it. Matching is case-insensitive substring lookup in fixed priority order: 'add about', 'add pricing', 'make fx', 'simplify', 'autopilot'. Returns matched=false when nothing matches."
    )]
    async fn resolve_command(
        &self,
        params: Parameters<CommandRequest>,
    ) -> Result<CallToolResult, McpError> {
        Self::json_result(&self.handle_resolve_command(&params.0.text))
    }

    #[tool(
        description = "Propose a change to the active project from command text. The change is NOT applied: it becomes the single pending proposal, replacing any earlier one. Call approve_pending to apply it."
    )]
    async fn submit_command(
        &self,
        params: Parameters<CommandRequest>,
    ) -> Result<CallToolResult, McpError> {
        Self::json_result(&self.handle_submit_command(&params.0.text))
    }

    #[tool(description = "Show the pending proposal, if any, with its human-readable description.")]
    async fn get_pending(&self) -> Result<CallToolResult, McpError> {
        Self::json_result(&self.handle_get_pending())
    }

    #[tool(
        description = "Apply the pending proposal to the active project. A snapshot of the current document is saved first so the change can be restored later. Returns the new document and the log lines written."
    )]
    async fn approve_pending(&self) -> Result<CallToolResult, McpError> {
        Self::json_result(&self.handle_approve_pending()?)
    }

    #[tool(description = "Discard the pending proposal without applying it.")]
    async fn cancel_pending(&self) -> Result<CallToolResult, McpError> {
        Self::json_result(&self.handle_cancel_pending())
    }

    #[tool(description = "List the most recently used commands, newest first (at most 4).")]
    async fn recent_commands(&self) -> Result<CallToolResult, McpError> {
        Self::json_result(&self.handle_recent_commands())
    }

    // ============================================================
    // Project Tools
    // ============================================================

    #[tool(description = "List all projects in the session and which one is active.")]
    async fn list_projects(&self) -> Result<CallToolResult, McpError> {
        Self::json_result(&self.handle_list_projects())
    }

    #[tool(
        description = "Create a new project and make it active. 'fx' starts from the FX template; other kinds start blank. Discards any pending proposal."
    )]
    async fn create_project(
        &self,
        params: Parameters<CreateProjectRequest>,
    ) -> Result<CallToolResult, McpError> {
        Self::json_result(&self.handle_create_project(&params.0.kind)?)
    }

    #[tool(description = "Make another project active. Discards any pending proposal.")]
    async fn switch_project(
        &self,
        params: Parameters<ProjectRequest>,
    ) -> Result<CallToolResult, McpError> {
        Self::json_result(&self.handle_switch_project(&params.0.project_id)?)
    }

    // ============================================================
    // History Tools
    // ============================================================

    #[tool(
        description = "List a project's snapshots, newest first. Each snapshot holds the document as it was just before an approved change."
    )]
    async fn list_snapshots(
        &self,
        params: Parameters<ListSnapshotsRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        Self::json_result(&self.handle_list_snapshots(&req.project_id, req.panel_only)?)
    }

    #[tool(
        description = "Reset a project's document to a snapshot. The restore itself is not recorded in history."
    )]
    async fn restore_snapshot(
        &self,
        params: Parameters<SnapshotRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        Self::json_result(&self.handle_restore_snapshot(&req.project_id, &req.snapshot_id)?)
    }

    #[tool(
        description = "Create a new project named '<name> (fork)' seeded from a snapshot. The fork's history contains only that snapshot. The active project does not change."
    )]
    async fn fork_snapshot(
        &self,
        params: Parameters<SnapshotRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        Self::json_result(&self.handle_fork_snapshot(&req.project_id, &req.snapshot_id)?)
    }

    // ============================================================
    // Advisor Tools
    // ============================================================

    #[tool(
        description = "Get advisory tips for the active project's document. Never changes the document. Set propose=true to hold the tips as the pending proposal."
    )]
    async fn smart_suggest(
        &self,
        params: Parameters<SmartSuggestRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        Self::json_result(&self.handle_smart_suggest(&req.level, req.propose)?)
    }
}

#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: rmcp::model::Implementation {
                name: "site-sandbox".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                title: None,
                icons: None,
                website_url: None,
            },
            capabilities: rmcp::model::ServerCapabilities::builder()
                .enable_tools()
                .build(),
            instructions: Some(
                r#"Site Sandbox edits an in-memory HTML page per project.

WORKFLOW:
1. Call submit_command with short text such as 'add about' or 'autopilot'
2. Call get_pending to review what will change
3. Call approve_pending to apply it, or cancel_pending to drop it

RULES:
- Only one proposal is pending at a time; a new one replaces the old
- Nothing changes until approve_pending is called
- Every approved change saves a snapshot first (last 10 kept per project)
- Use list_snapshots, restore_snapshot and fork_snapshot to go back or branch"#
                    .into(),
            ),
            ..Default::default()
        }
    }
}

pub async fn run_stdio_server(store: Store) -> anyhow::Result<()> {
    use tokio::io::{stdin, stdout};

    tracing::info!("Starting MCP server via stdio");

    let service = McpServer::new(store);
    let server = service.serve((stdin(), stdout())).await?;

    let quit_reason = server.waiting().await?;
    tracing::info!("MCP server stopped: {:?}", quit_reason);

    Ok(())
}
