//! Benchmark and similarity tools.
//!
//! Scoring, sector averages and ranking are computed server-side. These
//! bindings only forward the reference identifier and filters.

use rmcp::model::{JsonObject, Tool};
use schemars::JsonSchema;
use serde::Deserialize;

use super::common::{parse_args, tool_model};
use crate::domains::tools::registry::ToolSpec;
use crate::domains::tools::request::ApiRequest;

/// Parameters for the sector benchmark.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct BenchmarkParams {
    /// Reference company.
    #[schemars(description = "Company CNPJ")]
    pub cnpj: String,

    /// Optional state restriction for the sector statistics.
    #[schemars(description = "Restrict the sector to one state (optional)")]
    pub uf: Option<String>,
}

/// Compare a company against its sector average.
#[derive(Debug, Clone)]
pub struct BenchmarkEmpresaTool;

impl BenchmarkEmpresaTool {
    pub const NAME: &'static str = "benchmark_empresa";

    pub const DESCRIPTION: &'static str = "Compare a company against its SECTOR AVERAGE.

WHEN TO USE:
- Is this company above or below the sector average?
- Comparative analysis of size/capital

RETURNS: company data, sector statistics (mean, median, total) and relative ranking position.";

    pub fn to_tool() -> Tool {
        tool_model::<BenchmarkParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn bind(args: &JsonObject) -> Result<ApiRequest, serde_json::Error> {
        let params: BenchmarkParams = parse_args(args)?;
        Ok(ApiRequest::get(format!("/api/cnpj/{}/benchmark", params.cnpj))
            .with_param("uf", params.uf))
    }

    pub fn spec() -> ToolSpec {
        ToolSpec::new(Self::to_tool(), Self::bind)
    }
}

/// Parameters for the similarity search.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SimilaresParams {
    /// Reference company.
    #[schemars(description = "CNPJ of the reference company")]
    pub cnpj: String,

    /// Optional result ceiling.
    #[schemars(description = "Maximum number of results (default: 50)")]
    pub limite: Option<u32>,

    /// Optional similarity threshold.
    #[schemars(description = "Minimum similarity score 0-100 (default: 40)")]
    pub score_minimo: Option<u32>,

    /// Optional state filter.
    #[schemars(description = "Filter by state (2-letter UF code)")]
    pub uf: Option<String>,
}

/// Find lookalike companies via server-side multi-dimensional scoring.
#[derive(Debug, Clone)]
pub struct BuscarSimilaresTool;

impl BuscarSimilaresTool {
    pub const NAME: &'static str = "buscar_similares";

    pub const DESCRIPTION: &'static str = "Find SIMILAR companies using multi-dimensional scoring.

WHEN TO USE:
- You have a good customer and want lookalikes
- Expanding a portfolio with same-profile companies

SIMILARITY DIMENSIONS: same CNAE, similar size (share capital), same region.";

    pub fn to_tool() -> Tool {
        tool_model::<SimilaresParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn bind(args: &JsonObject) -> Result<ApiRequest, serde_json::Error> {
        let params: SimilaresParams = parse_args(args)?;
        Ok(ApiRequest::get(format!("/api/cnpj/{}/similares", params.cnpj))
            .with_param("limite", params.limite)
            .with_param("score_minimo", params.score_minimo)
            .with_param("uf", params.uf))
    }

    pub fn spec() -> ToolSpec {
        ToolSpec::new(Self::to_tool(), Self::bind)
    }
}

/// Parameters for the sector ranking.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct RankingParams {
    /// Sector code.
    #[schemars(description = "7-digit CNAE code")]
    pub cnae: String,

    /// Optional state filter.
    #[schemars(description = "Filter by state (optional)")]
    pub uf: Option<String>,

    /// Optional result ceiling.
    #[schemars(description = "Top N results (default: 15)")]
    pub limite: Option<u32>,

    /// Optional ordering criterion.
    #[schemars(description = "Ordering criterion (default: capital)")]
    pub ordenar_por: Option<RankingOrder>,
}

/// Ordering criteria accepted by the ranking endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum RankingOrder {
    /// Order by share capital.
    Capital,
    /// Order by branch count.
    Filiais,
}

impl std::fmt::Display for RankingOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Capital => write!(f, "capital"),
            Self::Filiais => write!(f, "filiais"),
        }
    }
}

/// Ranking of the largest companies in a sector.
#[derive(Debug, Clone)]
pub struct RankingCnaeTool;

impl RankingCnaeTool {
    pub const NAME: &'static str = "ranking_cnae";

    pub const DESCRIPTION: &'static str = "RANKING of the largest companies in a sector.

WHEN TO USE:
- Identifying market leaders
- Account-Based Marketing (ABM)

ORDERING: capital (share capital, default) or filiais (unit count).";

    pub fn to_tool() -> Tool {
        tool_model::<RankingParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn bind(args: &JsonObject) -> Result<ApiRequest, serde_json::Error> {
        let params: RankingParams = parse_args(args)?;
        Ok(ApiRequest::get(format!("/api/cnpj/ranking/cnae/{}", params.cnae))
            .with_param("uf", params.uf)
            .with_param("limite", params.limite)
            .with_param("ordenar_por", params.ordenar_por))
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
    fn test_benchmark_binds_path_and_uf() {
        let request =
            BenchmarkEmpresaTool::bind(&args(json!({"cnpj": "00000000000191", "uf": "DF"})))
                .unwrap();
        assert_eq!(request.path, "/api/cnpj/00000000000191/benchmark");
        assert_eq!(request.query, vec![("uf".to_string(), "DF".to_string())]);
    }

    #[test]
    fn test_similares_optional_filters() {
        let request = BuscarSimilaresTool::bind(&args(
            json!({"cnpj": "00000000000191", "limite": 10, "score_minimo": 60}),
        ))
        .unwrap();
        assert_eq!(request.path, "/api/cnpj/00000000000191/similares");
        assert_eq!(
            request.query,
            vec![
                ("limite".to_string(), "10".to_string()),
                ("score_minimo".to_string(), "60".to_string()),
            ]
        );
    }

    #[test]
    fn test_ranking_order_enum() {
        let request = RankingCnaeTool::bind(&args(
            json!({"cnae": "4711302", "ordenar_por": "filiais"}),
        ))
        .unwrap();
        assert_eq!(request.path, "/api/cnpj/ranking/cnae/4711302");
        assert_eq!(
            request.query,
            vec![("ordenar_por".to_string(), "filiais".to_string())]
        );
    }

    #[test]
    fn test_ranking_rejects_unknown_order() {
        assert!(RankingCnaeTool::bind(&args(
            json!({"cnae": "4711302", "ordenar_por": "faturamento"})
        ))
        .is_err());
    }
}
