//! Aggregate statistics tools.
//!
//! Zero or one optional limiting parameter, no identifying argument.

use rmcp::model::{JsonObject, Tool};
use schemars::JsonSchema;
use serde::Deserialize;

use super::common::{parse_args, tool_model};
use crate::domains::tools::registry::ToolSpec;
use crate::domains::tools::request::ApiRequest;

/// Empty parameter set for the per-state statistics.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct EstatisticasUfParams {}

/// Company counts per Brazilian state.
#[derive(Debug, Clone)]
pub struct EstatisticasPorUfTool;

impl EstatisticasPorUfTool {
    pub const NAME: &'static str = "estatisticas_por_uf";

    pub const DESCRIPTION: &'static str = "Return the NUMBER of companies per Brazilian state.

WHEN TO USE:
- Market analysis by region
- Prioritizing states for expansion

RETURNS: a list of states with active-company counts, largest first.";

    pub fn to_tool() -> Tool {
        tool_model::<EstatisticasUfParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn bind(_args: &JsonObject) -> Result<ApiRequest, serde_json::Error> {
        Ok(ApiRequest::get("/api/cnpj/stats/por-uf"))
    }

    pub fn spec() -> ToolSpec {
        ToolSpec::new(Self::to_tool(), Self::bind)
    }
}

/// Parameters for the sector statistics ranking.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct EstatisticasCnaeParams {
    /// Optional ranking size.
    #[schemars(description = "Number of CNAEs in the ranking (default: 20)")]
    pub limite: Option<u32>,
}

/// Sectors with the most companies (CNAE ranking).
#[derive(Debug, Clone)]
pub struct EstatisticasPorCnaeTool;

impl EstatisticasPorCnaeTool {
    pub const NAME: &'static str = "estatisticas_por_cnae";

    pub const DESCRIPTION: &'static str = "Return the SECTORS with the most companies (CNAE ranking).

WHEN TO USE:
- Identifying the largest markets
- Opportunity analysis by vertical

PARAMETERS: limite (top N CNAEs, default: 20).";

    pub fn to_tool() -> Tool {
        tool_model::<EstatisticasCnaeParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn bind(args: &JsonObject) -> Result<ApiRequest, serde_json::Error> {
        let params: EstatisticasCnaeParams = parse_args(args)?;
        Ok(ApiRequest::get("/api/cnpj/stats/por-cnae").with_param("limite", params.limite))
    }

    pub fn spec() -> ToolSpec {
        ToolSpec::new(Self::to_tool(), Self::bind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn args(value: serde_json::Value) -> JsonObject {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn test_por_uf_takes_no_parameters() {
        let request = EstatisticasPorUfTool::bind(&JsonObject::new()).unwrap();
        assert_eq!(request.path, "/api/cnpj/stats/por-uf");
        assert!(request.query.is_empty());
    }

    #[test]
    fn test_por_cnae_optional_limit() {
        let request = EstatisticasPorCnaeTool::bind(&JsonObject::new()).unwrap();
        assert!(request.query.is_empty());

        let request = EstatisticasPorCnaeTool::bind(&args(json!({"limite": 30}))).unwrap();
        assert_eq!(request.path, "/api/cnpj/stats/por-cnae");
        assert_eq!(request.query, vec![("limite".to_string(), "30".to_string())]);
    }
}
