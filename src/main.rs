use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use site_sandbox::client::SandboxClient;
use site_sandbox::config::SandboxConfig;
use site_sandbox::engine::{resolver, Submission};
use site_sandbox::{api, mcp, store::Store};

#[derive(Parser)]
#[command(name = "sandbox")]
#[command(about = "Approval-gated site-builder sandbox")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP API server
    Serve {
        /// Port for HTTP API (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Start MCP server via stdio
    Mcp,
    /// Show how a command would resolve, without a server
    Resolve {
        /// Command text
        text: String,
    },
    /// Propose a command on a running server
    Send {
        /// Command text
        text: String,
    },
    /// Approve the pending proposal on a running server
    Approve,
    /// Check server status and the pending proposal
    Status,
}

/// Initialize tracing with output to stderr (for MCP mode) or stdout
fn init_tracing(use_stderr: bool) {
    let filter = tracing_subscriber::EnvFilter::new(std::env::var("RUST_LOG").unwrap_or_else(
        |_| "site_sandbox=debug,sandbox_core=debug,tower_http=debug".into(),
    ));

    if use_stderr {
        // MCP mode: log to stderr so stdout is clean for protocol
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

async fn serve(config: SandboxConfig) -> anyhow::Result<()> {
    let addr = config.bind_addr();
    tracing::info!("Starting sandbox server on {}", addr);

    let app = api::create_router_with_config(Store::new(), &config);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Sandbox server listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let use_stderr = matches!(cli.command, Some(Commands::Mcp));
    init_tracing(use_stderr);

    let mut config = SandboxConfig::load();

    match cli.command {
        Some(Commands::Serve { port }) => {
            if let Some(port) = port {
                config.port = port;
            }
            serve(config).await?;
        }
        Some(Commands::Mcp) => {
            mcp::run_stdio_server(Store::new()).await?;
        }
        Some(Commands::Resolve { text }) => match resolver::resolve(&text) {
            Some(intent) => println!("{} -> {}", intent.display(), intent.describe()),
            None => println!("{}", resolver::UNKNOWN_COMMAND_HINT),
        },
        Some(Commands::Send { text }) => {
            let client = SandboxClient::from_config(&config);
            match client.submit(&text).await? {
                Submission::Proposed { description, .. } => {
                    println!("Proposed: {}", description);
                    println!("Run `sandbox approve` to apply.");
                }
                Submission::Unrecognized { hint } => println!("{}", hint),
                Submission::Ignored => println!("Nothing to send."),
            }
        }
        Some(Commands::Approve) => {
            let client = SandboxClient::from_config(&config);
            let result = client.approve().await?;
            for line in &result.log {
                println!("{}", line);
            }
            if let Some(snapshot) = &result.snapshot {
                println!("Saved snapshot {} ({})", snapshot.id, snapshot.label);
            }
        }
        Some(Commands::Status) => {
            let client = SandboxClient::from_config(&config);
            client.health().await?;
            println!("Sandbox server is running at {}", client.base_url());
            match client.pending().await?.description {
                Some(description) => println!("Pending: {}", description),
                None => println!("Nothing pending."),
            }
            let recent = client.recent().await?;
            if !recent.is_empty() {
                println!("Recent: {}", recent.join(", "));
            }
        }
        None => serve(config).await?,
    }

    Ok(())
}
