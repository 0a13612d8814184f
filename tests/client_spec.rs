//! Client tests against a live server bound to an ephemeral port.

use site_sandbox::api::{create_router, create_router_with_config};
use site_sandbox::client::{ClientError, SandboxClient};
use site_sandbox::config::SandboxConfig;
use site_sandbox::engine::{ProposalState, Submission};
use site_sandbox::store::Store;

async fn spawn_server(app: axum::Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("Failed to read address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });
    format!("http://{}/api/v1", addr)
}

#[tokio::test]
async fn send_and_approve_round_trip() {
    let url = spawn_server(create_router(Store::new())).await;
    let client = SandboxClient::new(url, None);

    client.health().await.expect("Health check failed");
    let submission = client.submit("add pricing").await.expect("Failed to submit");
    assert!(matches!(submission, Submission::Proposed { .. }));
    assert_eq!(
        client.pending().await.expect("Failed to read pending").state,
        ProposalState::Proposed
    );

    let result = client.approve().await.expect("Failed to approve");
    assert_eq!(result.log, vec!["Applied: Add a new designed section.".to_string()]);
    assert_eq!(client.recent().await.unwrap(), vec!["add pricing"]);
    assert_eq!(client.projects().await.unwrap()[0].snapshots, 1);
}

#[tokio::test]
async fn approve_without_proposal_is_a_conflict() {
    let url = spawn_server(create_router(Store::new())).await;
    let client = SandboxClient::new(url, None);

    let err = client.approve().await.unwrap_err();

    assert!(matches!(err, ClientError::Conflict(_)));
}

#[tokio::test]
async fn api_key_is_sent_as_bearer() {
    let config = SandboxConfig {
        api_key: Some("secret".to_string()),
        ..SandboxConfig::default()
    };
    let url = spawn_server(create_router_with_config(Store::new(), &config)).await;

    let anonymous = SandboxClient::new(url.clone(), None);
    assert!(matches!(
        anonymous.projects().await.unwrap_err(),
        ClientError::Unauthorized
    ));

    let client = SandboxClient::new(url, Some("secret".to_string()));
    assert_eq!(client.projects().await.expect("Failed to list").len(), 1);
}
