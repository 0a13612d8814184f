//! MCP server integration tests.
//!
//! Tests are organized by tool group:
//! - Command tools: resolve, submit, review and approve proposals
//! - Project tools: list, create and switch projects
//! - History tools: list, restore and fork snapshots

use site_sandbox::engine::templates::{ABOUT_SECTION, FX_TEMPLATE, SIMPLE_TEMPLATE};
use site_sandbox::engine::{ProposalState, Submission};
use site_sandbox::mcp::McpServer;
use site_sandbox::store::Store;

/// Helper to create a test MCP server around a fresh session.
fn setup() -> (McpServer, Store) {
    let store = Store::new();
    let server = McpServer::new(store.clone());
    (server, store)
}

/// Helper to submit and approve a command on the active project.
fn apply(server: &McpServer, text: &str) {
    server.handle_submit_command(text);
    server
        .handle_approve_pending()
        .expect("Failed to approve command");
}

// ============================================================
// Command Tools Tests
// ============================================================

mod command_tools {
    use super::*;

    mod resolve_command {
        use super::*;

        #[tokio::test]
        async fn describes_the_matched_intent() {
            let (server, _store) = setup();

            let result = server.handle_resolve_command("please add pricing");

            assert!(result.matched);
            assert_eq!(result.display.as_deref(), Some("add pricing"));
            assert_eq!(result.description.as_deref(), Some("Add a new designed section."));
        }

        #[tokio::test]
        async fn reports_no_match() {
            let (server, store) = setup();

            let result = server.handle_resolve_command("add a blog");

            assert!(!result.matched);
            assert!(result.display.is_none());
            assert!(store.lock().pending().is_none());
        }
    }

    mod submit_command {
        use super::*;

        #[tokio::test]
        async fn proposes_without_changing_the_document() {
            let (server, store) = setup();

            let submission = server.handle_submit_command("make fx");

            assert!(matches!(submission, Submission::Proposed { .. }));
            let pending = server.handle_get_pending();
            assert_eq!(pending.state, ProposalState::Proposed);
            assert_eq!(pending.description.as_deref(), Some("Switch to FX template."));
            assert_eq!(
                store.lock().active_project().unwrap().document,
                SIMPLE_TEMPLATE
            );
        }

        #[tokio::test]
        async fn records_recent_commands() {
            let (server, _store) = setup();

            server.handle_submit_command("add about");
            server.handle_submit_command("simplify");

            assert_eq!(server.handle_recent_commands(), vec!["simplify", "add about"]);
        }
    }

    mod approve_pending {
        use super::*;

        #[tokio::test]
        async fn applies_the_proposal() {
            let (server, _store) = setup();
            server.handle_submit_command("add about");

            let result = server.handle_approve_pending().expect("Failed to approve");

            assert_eq!(result.document, format!("{}{}", SIMPLE_TEMPLATE, ABOUT_SECTION));
            assert_eq!(server.handle_get_pending().state, ProposalState::Idle);
        }

        #[tokio::test]
        async fn fails_without_a_proposal() {
            let (server, _store) = setup();

            let err = server.handle_approve_pending().unwrap_err();

            assert!(err.message.contains("Nothing pending"));
        }
    }

    mod cancel_pending {
        use super::*;

        #[tokio::test]
        async fn returns_the_discarded_description() {
            let (server, _store) = setup();
            server.handle_submit_command("autopilot");

            let result = server.handle_cancel_pending();

            assert_eq!(
                result.cancelled.as_deref(),
                Some("Run Autopilot Basic Landing Page Plan.")
            );
            assert!(server.handle_cancel_pending().cancelled.is_none());
        }
    }

    mod smart_suggest {
        use super::*;

        #[tokio::test]
        async fn returns_tips_without_proposing() {
            let (server, store) = setup();

            let result = server.handle_smart_suggest("deep", false).expect("Failed to suggest");

            assert_eq!(result.level, "deep");
            assert_eq!(result.suggestions.len(), 7);
            assert!(!result.proposed);
            assert!(store.lock().pending().is_none());
        }

        #[tokio::test]
        async fn can_hold_tips_as_the_proposal() {
            let (server, store) = setup();

            server.handle_smart_suggest("light", true).expect("Failed to suggest");
            let result = server.handle_approve_pending().expect("Failed to approve");

            assert_eq!(result.suggestions.len(), 3);
            assert!(store.lock().active_project().unwrap().history.is_empty());
        }

        #[tokio::test]
        async fn rejects_unknown_levels() {
            let (server, _store) = setup();

            let err = server.handle_smart_suggest("extreme", false).unwrap_err();

            assert!(err.message.contains("Invalid level"));
        }
    }
}

// ============================================================
// Project Tools Tests
// ============================================================

mod project_tools {
    use super::*;

    #[tokio::test]
    async fn create_project_activates_it() {
        let (server, _store) = setup();

        let project = server.handle_create_project("fx").expect("Failed to create project");

        assert_eq!(project.name, "New FX Site");
        assert_eq!(project.kind, "fx");
        assert_eq!(project.document, FX_TEMPLATE);
        let projects = server.handle_list_projects();
        assert_eq!(projects.len(), 2);
        assert!(projects.iter().any(|p| p.active && p.id.to_string() == project.id));
    }

    #[tokio::test]
    async fn create_project_rejects_unknown_kinds() {
        let (server, _store) = setup();

        let err = server.handle_create_project("retro").unwrap_err();

        assert!(err.message.contains("Invalid kind"));
    }

    #[tokio::test]
    async fn switch_project_drops_the_proposal() {
        let (server, _store) = setup();
        let starter = server.handle_list_projects()[0].id;
        server.handle_create_project("blank").expect("Failed to create project");
        server.handle_submit_command("add about");

        let project = server
            .handle_switch_project(&starter.to_string())
            .expect("Failed to switch");

        assert_eq!(project.name, "My First Site");
        assert_eq!(server.handle_get_pending().state, ProposalState::Idle);
    }

    #[tokio::test]
    async fn switch_project_rejects_invalid_ids() {
        let (server, _store) = setup();

        let err = server.handle_switch_project("not-a-uuid").unwrap_err();

        assert!(err.message.contains("Invalid UUID"));
    }
}

// ============================================================
// History Tools Tests
// ============================================================

mod history_tools {
    use super::*;

    #[tokio::test]
    async fn list_snapshots_newest_first() {
        let (server, _store) = setup();
        apply(&server, "add about");
        apply(&server, "make fx");
        let project_id = server.handle_list_projects()[0].id.to_string();

        let result = server
            .handle_list_snapshots(&project_id, false)
            .expect("Failed to list snapshots");

        assert_eq!(result.snapshots.len(), 2);
        assert_eq!(result.snapshots[0].label, "Before: Switch to FX template.");
        assert_eq!(result.snapshots[1].label, "Before: Add a new designed section.");
    }

    #[tokio::test]
    async fn panel_only_limits_to_five() {
        let (server, _store) = setup();
        for _ in 0..6 {
            apply(&server, "add pricing");
        }
        let project_id = server.handle_list_projects()[0].id.to_string();

        let panel = server.handle_list_snapshots(&project_id, true).unwrap();
        let full = server.handle_list_snapshots(&project_id, false).unwrap();

        assert_eq!(panel.snapshots.len(), 5);
        assert_eq!(full.snapshots.len(), 6);
    }

    #[tokio::test]
    async fn restore_and_fork_snapshot() {
        let (server, _store) = setup();
        apply(&server, "make fx");
        let project_id = server.handle_list_projects()[0].id.to_string();
        let snapshots = server.handle_list_snapshots(&project_id, false).unwrap();
        let snapshot_id = snapshots.snapshots[0].id.clone();

        let restored = server
            .handle_restore_snapshot(&project_id, &snapshot_id)
            .expect("Failed to restore");
        assert_eq!(restored.document, SIMPLE_TEMPLATE);
        assert_eq!(restored.snapshots, 1);

        let forked = server
            .handle_fork_snapshot(&project_id, &snapshot_id)
            .expect("Failed to fork");
        assert_eq!(forked.name, "My First Site (fork)");
        assert_eq!(forked.snapshots, 1);
        assert_eq!(server.handle_list_projects().len(), 2);
    }

    #[tokio::test]
    async fn restore_unknown_snapshot_fails() {
        let (server, _store) = setup();
        let project_id = server.handle_list_projects()[0].id.to_string();

        let err = server
            .handle_restore_snapshot(&project_id, &uuid::Uuid::new_v4().to_string())
            .unwrap_err();

        assert!(err.message.contains("Snapshot not found"));
    }
}
