//! MCP Server implementation and lifecycle management.
//!
//! The handler exposes exactly two operations: listing the static tool
//! catalog and invoking a tool by name. An invocation is looked up in the
//! registry, bound into one upstream request and executed; the outcome -
//! success or normalized error - is returned as pretty-printed JSON text.
//! Upstream failures never surface as protocol faults.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, model::*, service::RequestContext,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::config::Config;
use crate::domains::tools::{ApiClient, ErrorEnvelope, ToolRegistry};

/// The main MCP server handler.
///
/// Stateless across invocations: the registry is a static catalog and the
/// client only owns a connection pool, so concurrent calls need no locking.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Static tool catalog and dispatch table.
    registry: Arc<ToolRegistry>,

    /// Upstream registry API client.
    client: Arc<ApiClient>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    pub fn new(config: Config) -> Self {
        let client = Arc::new(ApiClient::new(config.api.base_url.clone()));
        Self {
            config: Arc::new(config),
            registry: Arc::new(ToolRegistry::new()),
            client,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Number of tools in the catalog.
    pub fn tool_count(&self) -> usize {
        self.registry.len()
    }

    /// Resolve one invocation to its pretty-printed JSON payload.
    ///
    /// Unknown tool names and upstream failures become error envelopes in
    /// the payload. Only a malformed argument shape (failing the tool's
    /// input schema) is an `Err` here, surfaced as invalid-params.
    pub async fn dispatch_tool(
        &self,
        name: &str,
        arguments: &JsonObject,
    ) -> Result<String, McpError> {
        let outcome = match self.registry.get(name) {
            None => ErrorEnvelope::unknown_tool(name).into_value(),
            Some(spec) => {
                let request = (spec.bind)(arguments)
                    .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                self.client.execute(request).await
            }
        };

        serde_json::to_string_pretty(&outcome)
            .map_err(|e| McpError::internal_error(e.to_string(), None))
    }
}

impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Brazilian company-registry (CNPJ) lookup tools: registration data, \
                 partners, tax regime, search by name/CNAE/partner/CEP, benchmarks, \
                 sector statistics and bulk lookups."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        info!("Listing tools");
        Ok(ListToolsResult {
            tools: self.registry.tools(),
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, request, _context), fields(tool = %request.name))]
    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        info!("Calling tool: {}", request.name);
        let arguments = request.arguments.unwrap_or_default();
        let payload = self.dispatch_tool(&request.name, &arguments).await?;
        Ok(CallToolResult::success(vec![Content::text(payload)]))
    }
}
