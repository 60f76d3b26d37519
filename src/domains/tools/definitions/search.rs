//! Search and discovery tools.
//!
//! Required arguments land in the path or query per endpoint; remaining
//! filters become query parameters. The advanced search forwards its whole
//! argument mapping with no per-field binding.

use rmcp::model::{JsonObject, Tool};
use schemars::JsonSchema;
use serde::Deserialize;

use super::common::{parse_args, tool_model};
use crate::domains::tools::registry::ToolSpec;
use crate::domains::tools::request::ApiRequest;

/// Parameters for company-name search.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct NomeSearchParams {
    /// Search term.
    #[schemars(description = "Company name or name fragment (minimum 3 characters)")]
    pub nome: String,

    /// Optional state filter.
    #[schemars(description = "Filter by state (2-letter UF code)")]
    pub uf: Option<String>,

    /// Optional result ceiling.
    #[schemars(description = "Maximum number of results (default: 50)")]
    pub limite: Option<u32>,
}

/// Search companies by name (razao social or nome fantasia).
#[derive(Debug, Clone)]
pub struct BuscarPorNomeTool;

impl BuscarPorNomeTool {
    pub const NAME: &'static str = "buscar_por_nome";

    pub const DESCRIPTION: &'static str = "Search companies by NAME (legal name or trade name).

WHEN TO USE:
- You know the name but not the CNPJ
- Finding every unit of a chain

PARAMETERS: nome (minimum 3 characters), uf (optional state filter), limite (default: 50).";

    pub fn to_tool() -> Tool {
        tool_model::<NomeSearchParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn bind(args: &JsonObject) -> Result<ApiRequest, serde_json::Error> {
        let params: NomeSearchParams = parse_args(args)?;
        Ok(ApiRequest::get("/api/cnpj/buscar/nome")
            .with_param("nome", Some(params.nome))
            .with_param("uf", params.uf)
            .with_param("limite", params.limite))
    }

    pub fn spec() -> ToolSpec {
        ToolSpec::new(Self::to_tool(), Self::bind)
    }
}

/// Parameters for sector (CNAE) search.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CnaeSearchParams {
    /// Sector code.
    #[schemars(description = "7-digit CNAE code. Example: 4711302")]
    pub cnae: String,

    /// Optional state filter.
    #[schemars(description = "Filter by state (2-letter UF code)")]
    pub uf: Option<String>,

    /// Optional result ceiling.
    #[schemars(description = "Maximum number of results (default: 100)")]
    pub limite: Option<u32>,
}

/// List companies in a specific sector (by CNAE code).
#[derive(Debug, Clone)]
pub struct BuscarPorCnaeTool;

impl BuscarPorCnaeTool {
    pub const NAME: &'static str = "buscar_por_cnae";

    pub const DESCRIPTION: &'static str = "List companies of a specific SECTOR (by CNAE code).

WHEN TO USE:
- You want every company of an economic activity
- Prospecting by vertical/segment

COMMON CNAES: 4711302 supermarkets, 5611201 restaurants, 2222600 plastic packaging, 4751201 computer retail.";

    pub fn to_tool() -> Tool {
        tool_model::<CnaeSearchParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn bind(args: &JsonObject) -> Result<ApiRequest, serde_json::Error> {
        let params: CnaeSearchParams = parse_args(args)?;
        Ok(ApiRequest::get(format!("/api/cnpj/buscar/cnae/{}", params.cnae))
            .with_param("uf", params.uf)
            .with_param("limite", params.limite))
    }

    pub fn spec() -> ToolSpec {
        ToolSpec::new(Self::to_tool(), Self::bind)
    }
}

/// Parameters for partner-name search.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SocioSearchParams {
    /// Partner name.
    #[schemars(description = "Partner name (minimum 3 characters)")]
    pub nome: String,

    /// Optional state filter.
    #[schemars(description = "Filter by state (2-letter UF code)")]
    pub uf: Option<String>,

    /// Optional result ceiling.
    #[schemars(description = "Maximum number of results (default: 50)")]
    pub limite: Option<u32>,
}

/// Search companies by partner name.
#[derive(Debug, Clone)]
pub struct BuscarPorSocioTool;

impl BuscarPorSocioTool {
    pub const NAME: &'static str = "buscar_por_socio";

    pub const DESCRIPTION: &'static str = "Search companies by PARTNER NAME.

WHEN TO USE:
- Finding every company tied to a given entrepreneur
- Mapping an investor's portfolio

PARAMETERS: nome (minimum 3 characters), uf (optional state filter), limite (default: 50).";

    pub fn to_tool() -> Tool {
        tool_model::<SocioSearchParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn bind(args: &JsonObject) -> Result<ApiRequest, serde_json::Error> {
        let params: SocioSearchParams = parse_args(args)?;
        Ok(ApiRequest::get("/api/cnpj/buscar/socio")
            .with_param("nome", Some(params.nome))
            .with_param("uf", params.uf)
            .with_param("limite", params.limite))
    }

    pub fn spec() -> ToolSpec {
        ToolSpec::new(Self::to_tool(), Self::bind)
    }
}

/// Parameters for postal-code search.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CepSearchParams {
    /// Postal code.
    #[schemars(description = "8-digit CEP (digits only)")]
    pub cep: String,

    /// Optional sector filter.
    #[schemars(description = "Filter by CNAE code (optional)")]
    pub cnae: Option<String>,

    /// Optional registration-status filter.
    #[schemars(description = "Registration status: 02=active, 01=void, etc (default: 02)")]
    pub situacao: Option<String>,

    /// Optional result ceiling.
    #[schemars(description = "Maximum number of results (default: 50)")]
    pub limite: Option<u32>,
}

/// Search companies by postal code.
#[derive(Debug, Clone)]
pub struct BuscarPorCepTool;

impl BuscarPorCepTool {
    pub const NAME: &'static str = "buscar_por_cep";

    pub const DESCRIPTION: &'static str = "Search companies by CEP (postal code).

WHEN TO USE:
- You want companies in a specific area
- Localized geographic prospecting

PARAMETERS: cep (8 digits), cnae (optional filter), situacao (default: 02=active), limite (default: 50).";

    pub fn to_tool() -> Tool {
        tool_model::<CepSearchParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn bind(args: &JsonObject) -> Result<ApiRequest, serde_json::Error> {
        let params: CepSearchParams = parse_args(args)?;
        Ok(ApiRequest::get(format!("/api/cnpj/buscar/cep/{}", params.cep))
            .with_param("cnae", params.cnae)
            .with_param("situacao", params.situacao)
            .with_param("limite", params.limite))
    }

    pub fn spec() -> ToolSpec {
        ToolSpec::new(Self::to_tool(), Self::bind)
    }
}

/// Parameters for the advanced multi-filter search.
///
/// The struct exists for the input schema; the binding forwards the raw
/// argument mapping so the filter set stays open-ended on the wire.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AvancadoSearchParams {
    /// Sector filter.
    #[schemars(description = "7-digit CNAE code")]
    pub cnae: Option<String>,

    /// State filter.
    #[schemars(description = "2-letter UF code")]
    pub uf: Option<String>,

    /// Municipality filter.
    #[schemars(description = "Municipality name")]
    pub municipio: Option<String>,

    /// Company-size filter.
    #[schemars(description = "Size: 01=Micro, 03=Small, 05=Medium/Large")]
    pub porte: Option<PorteEmpresa>,

    /// Minimum share capital, in BRL.
    #[schemars(description = "Minimum share capital in BRL")]
    pub capital_min: Option<f64>,

    /// Maximum share capital, in BRL.
    #[schemars(description = "Maximum share capital in BRL")]
    pub capital_max: Option<f64>,

    /// Registration-status filter.
    #[schemars(description = "Registration status code")]
    pub situacao: Option<String>,

    /// Result ceiling.
    #[schemars(description = "Number of results (default: 50)")]
    pub limite: Option<u32>,
}

/// Company-size codes accepted by the upstream registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, JsonSchema)]
pub enum PorteEmpresa {
    #[serde(rename = "01")]
    Micro,
    #[serde(rename = "03")]
    Pequeno,
    #[serde(rename = "05")]
    MedioGrande,
}

/// Advanced search combining multiple filters.
#[derive(Debug, Clone)]
pub struct BuscarAvancadoTool;

impl BuscarAvancadoTool {
    pub const NAME: &'static str = "buscar_avancado";

    pub const DESCRIPTION: &'static str = "Search with MULTIPLE combined FILTERS.

WHEN TO USE:
- You need filters the other tools do not offer
- Complex queries combining several criteria

AVAILABLE FILTERS: cnae, uf, municipio, porte, capital_min/capital_max, situacao, limite.";

    pub fn to_tool() -> Tool {
        tool_model::<AvancadoSearchParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn bind(args: &JsonObject) -> Result<ApiRequest, serde_json::Error> {
        // Entire argument mapping forwarded as query parameters.
        Ok(ApiRequest::get("/api/cnpj/buscar/avancado").with_query_map(args))
    }

    pub fn spec() -> ToolSpec {
        ToolSpec::new(Self::to_tool(), Self::bind)
    }
}
