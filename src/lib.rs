//! CNPJ Intelligence MCP Server
//!
//! A Model Context Protocol (MCP) server exposing a fixed catalog of lookup
//! tools over a public Brazilian company-registry API (~27 million companies,
//! Receita Federal data). Each tool is a thin translation from a structured
//! argument object to one upstream HTTP call; the raw JSON response is
//! relayed back verbatim.
//!
//! # Architecture
//!
//! - **core**: configuration, the MCP server handler, and transports
//! - **domains::tools**: the tool catalog, the name-to-request dispatch
//!   table, the upstream HTTP client and the result envelope
//!
//! # Example
//!
//! ```rust,no_run
//! use cnpj_mcp_server::{core::Config, core::McpServer, core::TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config.clone());
//!     TransportService::new(config.transport).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, McpServer};
pub use domains::tools::{ApiClient, ApiRequest, ErrorCode, ErrorEnvelope, ToolRegistry};
