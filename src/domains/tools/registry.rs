//! Tool Registry - the static catalog and dispatch table.
//!
//! The registry is a single ordered list of [`ToolSpec`] entries, each
//! pairing a tool's MCP metadata with its binding function. Catalog and
//! dispatch cannot drift apart because both come from the same entry - the
//! lockstep invariant holds by construction.

use rmcp::model::{JsonObject, Tool};

use super::definitions::{
    BenchmarkEmpresaTool, BulkLookupTool, BuscarAvancadoTool, BuscarEmpresaTool, BuscarPorCepTool,
    BuscarPorCnaeTool, BuscarPorNomeTool, BuscarPorSocioTool, BuscarSimilaresTool,
    EmpresaCompletaTool, EstatisticasPorCnaeTool, EstatisticasPorUfTool, FiliaisTool,
    RankingCnaeTool, RegimeTributarioTool, SociosTool,
};
use super::request::ApiRequest;

/// Binding function: argument mapping to one upstream request.
///
/// Pure - no network access. A deserialization failure means the invocation
/// shape was malformed and is surfaced as an invalid-params protocol error.
pub type BindFn = fn(&JsonObject) -> Result<ApiRequest, serde_json::Error>;

/// One catalog entry: tool metadata plus its dispatch rule.
pub struct ToolSpec {
    /// MCP tool metadata (name, description, input schema).
    pub tool: Tool,

    /// Binding rule producing the outbound request.
    pub bind: BindFn,
}

impl ToolSpec {
    pub fn new(tool: Tool, bind: BindFn) -> Self {
        Self { tool, bind }
    }

    /// The tool name as registered in MCP.
    pub fn name(&self) -> &str {
        &self.tool.name
    }
}

/// The static tool catalog, in presentation order.
pub struct ToolRegistry {
    specs: Vec<ToolSpec>,
}

impl ToolRegistry {
    /// Build the full catalog.
    pub fn new() -> Self {
        Self {
            specs: vec![
                // Basic lookups
                BuscarEmpresaTool::spec(),
                EmpresaCompletaTool::spec(),
                FiliaisTool::spec(),
                SociosTool::spec(),
                RegimeTributarioTool::spec(),
                // Search and discovery
                BuscarPorNomeTool::spec(),
                BuscarPorCnaeTool::spec(),
                BuscarPorSocioTool::spec(),
                BuscarPorCepTool::spec(),
                BuscarAvancadoTool::spec(),
                // Analysis and benchmark
                BenchmarkEmpresaTool::spec(),
                BuscarSimilaresTool::spec(),
                RankingCnaeTool::spec(),
                // Statistics
                EstatisticasPorUfTool::spec(),
                EstatisticasPorCnaeTool::spec(),
                // Bulk operations
                BulkLookupTool::spec(),
            ],
        }
    }

    /// Look up a tool by name.
    pub fn get(&self, name: &str) -> Option<&ToolSpec> {
        self.specs.iter().find(|spec| spec.name() == name)
    }

    /// All tool metadata, in catalog order.
    pub fn tools(&self) -> Vec<Tool> {
        self.specs.iter().map(|spec| spec.tool.clone()).collect()
    }

    /// All tool names, in catalog order.
    pub fn tool_names(&self) -> Vec<&str> {
        self.specs.iter().map(|spec| spec.name()).collect()
    }

    /// Number of tools in the catalog.
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_sixteen_tools() {
        let registry = ToolRegistry::new();
        assert_eq!(registry.len(), 16);
    }

    #[test]
    fn test_catalog_names() {
        let registry = ToolRegistry::new();
        let names = registry.tool_names();
        for expected in [
            "buscar_empresa",
            "empresa_completa",
            "filiais",
            "socios",
            "regime_tributario",
            "buscar_por_nome",
            "buscar_por_cnae",
            "buscar_por_socio",
            "buscar_por_cep",
            "buscar_avancado",
            "benchmark_empresa",
            "buscar_similares",
            "ranking_cnae",
            "estatisticas_por_uf",
            "estatisticas_por_cnae",
            "bulk_lookup",
        ] {
            assert!(names.contains(&expected), "missing tool: {expected}");
        }
    }

    #[test]
    fn test_names_are_unique() {
        let registry = ToolRegistry::new();
        let mut names = registry.tool_names();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), registry.len());
    }

    #[test]
    fn test_every_entry_dispatches() {
        // Every catalog name resolves to its own binder.
        let registry = ToolRegistry::new();
        for name in registry.tool_names() {
            let spec = registry.get(name).unwrap();
            assert_eq!(spec.name(), name);
        }
    }

    #[test]
    fn test_metadata_is_complete() {
        let registry = ToolRegistry::new();
        for tool in registry.tools() {
            assert!(!tool.name.is_empty());
            assert!(tool.description.as_deref().is_some_and(|d| !d.is_empty()));
        }
    }

    #[test]
    fn test_unknown_name_misses() {
        let registry = ToolRegistry::new();
        assert!(registry.get("consulta_inexistente").is_none());
    }
}
