//! MCP Server Entry Point
//!
//! Handles the small CLI surface (`--help`, `--version`), initializes
//! logging, and starts the server with the configured transport.

use anyhow::Result;
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt};

use cnpj_mcp_server::core::{Config, McpServer, TransportService};

const HELP: &str = concat!(
    "MCP CNPJ Intelligence v",
    env!("CARGO_PKG_VERSION"),
    r#"

NOTE: this is an MCP server - it is not meant to be run interactively.

CONFIGURATION (Claude Desktop or compatible clients):
  Add to claude_desktop_config.json:
  {
    "mcpServers": {
      "cnpj-intelligence": {
        "command": "cnpj_mcp_server"
      }
    }
  }

OPTIONS:
  -h, --help       Print this help and exit
  -v, --version    Print the version and exit

API: https://api-cnpj.sdebot.top"#
);

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        println!("{HELP}");
        return Ok(());
    }

    if args.iter().any(|a| a == "--version" || a == "-v") {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Load configuration from environment
    let config = Config::from_env();

    // Initialize logging
    init_logging(&config.logging.level);

    // Create the MCP server
    let server = McpServer::new(config.clone());

    // Startup diagnostics go to stderr; stdout belongs to the protocol.
    info!("{} v{} started", server.name(), server.version());
    info!(
        "Base: ~27M Brazilian companies | {} tools available",
        server.tool_count()
    );

    // Create and run the transport service
    let transport = TransportService::new(config.transport);
    transport.run(server).await?;

    info!("Server shutting down");

    Ok(())
}

/// Initialize the logging subsystem.
///
/// Configures tracing with the specified log level, writing to stderr.
fn init_logging(level: &str) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .init();
}
