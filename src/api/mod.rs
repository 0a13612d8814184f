mod handlers;
pub mod middleware;

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::SandboxConfig;
use crate::store::Store;
use middleware::{auth_middleware, ApiKey};

/// Router with no authentication and permissive CORS (local use and tests).
pub fn create_router(store: Store) -> Router {
    build_router(store, ApiKey::disabled(), CorsLayer::permissive())
}

/// Router configured from [`SandboxConfig`]: optional bearer-key auth and CORS origins.
pub fn create_router_with_config(store: Store, config: &SandboxConfig) -> Router {
    build_router(store, ApiKey::from_config(config), config.cors_layer())
}

fn build_router(store: Store, api_key: ApiKey, cors: CorsLayer) -> Router {
    let api = Router::new()
        // Projects
        .route("/projects", get(handlers::list_projects).post(handlers::create_project))
        .route("/projects/active", get(handlers::get_active_project))
        .route("/projects/{id}", get(handlers::get_project))
        .route("/projects/{id}/activate", post(handlers::activate_project))
        .route("/projects/{id}/preview", get(handlers::preview_project))
        // History
        .route("/projects/{id}/history", get(handlers::list_history))
        .route(
            "/projects/{id}/history/{snapshot_id}/restore",
            post(handlers::restore_snapshot),
        )
        .route(
            "/projects/{id}/history/{snapshot_id}/fork",
            post(handlers::fork_snapshot),
        )
        // Commands & proposals
        .route("/commands", post(handlers::submit_command))
        .route("/commands/resolve", post(handlers::resolve_command))
        .route(
            "/pending",
            get(handlers::get_pending)
                .put(handlers::propose_intent)
                .delete(handlers::cancel_pending),
        )
        .route("/pending/approve", post(handlers::approve_pending))
        .route("/recent", get(handlers::list_recent))
        .route("/recent/reuse", post(handlers::reuse_recent))
        // Advisor
        .route(
            "/suggestions",
            get(handlers::get_suggestions).post(handlers::propose_suggestions),
        )
        // Toolbar, palette, wizard
        .route("/toolbar/{action}", post(handlers::toolbar_click))
        .route("/palette", get(handlers::search_palette))
        .route("/palette/{id}", post(handlers::run_palette))
        .route(
            "/wizard",
            get(handlers::get_wizard).put(handlers::select_wizard),
        )
        .route("/wizard/start", post(handlers::start_wizard))
        .route("/wizard/next", post(handlers::wizard_next))
        .route("/wizard/back", post(handlers::wizard_back))
        // Log & help
        .route("/log", get(handlers::get_log))
        .route("/stuck", post(handlers::stuck))
        .route_layer(from_fn_with_state(api_key, auth_middleware))
        // Health stays reachable without credentials
        .route("/health", get(handlers::health));

    Router::new()
        .nest("/api/v1", api)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(store)
}
