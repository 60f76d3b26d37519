//! Single-entity lookup tools.
//!
//! All five tools take a CNPJ and bind it into a path segment, with no query
//! parameters. The upstream accepts either the 8-digit base CNPJ (matriz) or
//! the full 14-digit identifier.

use rmcp::model::{JsonObject, Tool};
use schemars::JsonSchema;
use serde::Deserialize;

use super::common::{parse_args, tool_model};
use crate::domains::tools::registry::ToolSpec;
use crate::domains::tools::request::ApiRequest;

/// Parameters shared by all CNPJ path lookups.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CnpjParams {
    /// Company tax identifier.
    #[schemars(description = "Company CNPJ: 8 digits for the head office or the full 14 digits")]
    pub cnpj: String,
}

/// Basic registration lookup by CNPJ.
#[derive(Debug, Clone)]
pub struct BuscarEmpresaTool;

impl BuscarEmpresaTool {
    pub const NAME: &'static str = "buscar_empresa";

    pub const DESCRIPTION: &'static str = "Look up the registration record of a Brazilian company by CNPJ.

WHEN TO USE:
- You have a specific CNPJ and need its registration data
- You need to check whether a CNPJ exists and is active

RETURNS: cnpj, razao_social, nome_fantasia, full address, cnae_principal, data_abertura, capital_social, situacao_cadastral, porte_empresa.

EXAMPLE: { \"cnpj\": \"00000000000191\" } (Banco do Brasil)";

    pub fn to_tool() -> Tool {
        tool_model::<CnpjParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn bind(args: &JsonObject) -> Result<ApiRequest, serde_json::Error> {
        let params: CnpjParams = parse_args(args)?;
        Ok(ApiRequest::get(format!("/api/cnpj/{}", params.cnpj)))
    }

    pub fn spec() -> ToolSpec {
        ToolSpec::new(Self::to_tool(), Self::bind)
    }
}

/// Full company profile: registration + partners + tax regime.
#[derive(Debug, Clone)]
pub struct EmpresaCompletaTool;

impl EmpresaCompletaTool {
    pub const NAME: &'static str = "empresa_completa";

    pub const DESCRIPTION: &'static str = "Return the COMPLETE profile of a company: registration + partners + tax regime.

WHEN TO USE:
- Due diligence needing detailed information in one call
- You need the partner list and their roles
- You need to check Simples Nacional / MEI status

RETURNS: everything from buscar_empresa, plus the partner list (name, cpf/cnpj, role) and the tax regime flags.";

    pub fn to_tool() -> Tool {
        tool_model::<CnpjParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn bind(args: &JsonObject) -> Result<ApiRequest, serde_json::Error> {
        let params: CnpjParams = parse_args(args)?;
        Ok(ApiRequest::get(format!("/api/cnpj/{}/completo", params.cnpj)))
    }

    pub fn spec() -> ToolSpec {
        ToolSpec::new(Self::to_tool(), Self::bind)
    }
}

/// Branch listing for a company (same base CNPJ).
#[derive(Debug, Clone)]
pub struct FiliaisTool;

impl FiliaisTool {
    pub const NAME: &'static str = "filiais";

    pub const DESCRIPTION: &'static str = "List every branch of a company (same 8-digit base CNPJ).

WHEN TO USE:
- Mapping the geographic footprint of a company
- Counting how many units a company operates

RETURNS: a list of branches with full CNPJ, address and registration status.";

    pub fn to_tool() -> Tool {
        tool_model::<CnpjParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn bind(args: &JsonObject) -> Result<ApiRequest, serde_json::Error> {
        let params: CnpjParams = parse_args(args)?;
        Ok(ApiRequest::get(format!("/api/cnpj/{}/filiais", params.cnpj)))
    }

    pub fn spec() -> ToolSpec {
        ToolSpec::new(Self::to_tool(), Self::bind)
    }
}

/// Partner (quadro societario) listing.
#[derive(Debug, Clone)]
pub struct SociosTool;

impl SociosTool {
    pub const NAME: &'static str = "socios";

    pub const DESCRIPTION: &'static str = "List the full ownership structure of a company.

WHEN TO USE:
- Identifying the owners/partners behind a company
- Collecting partner CPF/CNPJ identifiers for further searches

RETURNS: a list of partners with name, cpf_cnpj, role and entry date.";

    pub fn to_tool() -> Tool {
        tool_model::<CnpjParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn bind(args: &JsonObject) -> Result<ApiRequest, serde_json::Error> {
        let params: CnpjParams = parse_args(args)?;
        Ok(ApiRequest::get(format!("/api/cnpj/{}/socios", params.cnpj)))
    }

    pub fn spec() -> ToolSpec {
        ToolSpec::new(Self::to_tool(), Self::bind)
    }
}

/// Tax regime check (Simples Nacional / MEI).
#[derive(Debug, Clone)]
pub struct RegimeTributarioTool;

impl RegimeTributarioTool {
    pub const NAME: &'static str = "regime_tributario";

    pub const DESCRIPTION: &'static str = "Check a company's tax regime: Simples Nacional or MEI.

WHEN TO USE:
- Checking whether a company can issue simplified invoices
- Filtering companies by tax regime

RETURNS: simples_nacional and mei flags plus opt-in/opt-out dates.";

    pub fn to_tool() -> Tool {
        tool_model::<CnpjParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn bind(args: &JsonObject) -> Result<ApiRequest, serde_json::Error> {
        let params: CnpjParams = parse_args(args)?;
        Ok(ApiRequest::get(format!("/api/cnpj/{}/regime", params.cnpj)))
    }

    pub fn spec() -> ToolSpec {
        ToolSpec::new(Self::to_tool(), Self::bind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::request::ApiMethod;
    use serde_json::json;

    fn args(value: serde_json::Value) -> JsonObject {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn test_buscar_empresa_binds_path() {
        let request = BuscarEmpresaTool::bind(&args(json!({"cnpj": "00000000000191"}))).unwrap();
        assert_eq!(request.method, ApiMethod::Get);
        assert_eq!(request.path, "/api/cnpj/00000000000191");
        assert!(request.query.is_empty());
        assert!(request.body.is_none());
    }

    #[test]
    fn test_sub_resource_paths() {
        let cnpj = args(json!({"cnpj": "00000000"}));
        assert_eq!(
            EmpresaCompletaTool::bind(&cnpj).unwrap().path,
            "/api/cnpj/00000000/completo"
        );
        assert_eq!(FiliaisTool::bind(&cnpj).unwrap().path, "/api/cnpj/00000000/filiais");
        assert_eq!(SociosTool::bind(&cnpj).unwrap().path, "/api/cnpj/00000000/socios");
        assert_eq!(
            RegimeTributarioTool::bind(&cnpj).unwrap().path,
            "/api/cnpj/00000000/regime"
        );
    }

    #[test]
    fn test_missing_cnpj_is_a_bind_error() {
        let result = BuscarEmpresaTool::bind(&args(json!({})));
        assert!(result.is_err());
    }
}
