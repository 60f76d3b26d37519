//! Bulk lookup tool.
//!
//! The only POST in the catalog: identifiers travel in a JSON body, not
//! query parameters. The upstream enforces the 100-item cap; the client
//! forwards the list as-is.

use rmcp::model::{JsonObject, Tool};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::json;

use super::common::{parse_args, tool_model};
use crate::domains::tools::registry::ToolSpec;
use crate::domains::tools::request::ApiRequest;

/// Parameters for the bulk lookup.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct BulkLookupParams {
    /// Identifiers to resolve.
    #[schemars(description = "List of CNPJs (max 100)")]
    pub cnpjs: Vec<String>,
}

/// Resolve many CNPJs in one call.
#[derive(Debug, Clone)]
pub struct BulkLookupTool;

impl BulkLookupTool {
    pub const NAME: &'static str = "bulk_lookup";

    pub const DESCRIPTION: &'static str = "Look up MULTIPLE CNPJs in one batch call.

WHEN TO USE:
- Enriching a list of CNPJs
- Importing data from a spreadsheet/CRM

LIMITS: maximum of 100 CNPJs per request (enforced upstream).";

    pub fn to_tool() -> Tool {
        tool_model::<BulkLookupParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn bind(args: &JsonObject) -> Result<ApiRequest, serde_json::Error> {
        let params: BulkLookupParams = parse_args(args)?;
        Ok(ApiRequest::post("/api/cnpj/bulk", json!({"cnpjs": params.cnpjs})))
    }

    pub fn spec() -> ToolSpec {
        ToolSpec::new(Self::to_tool(), Self::bind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::request::ApiMethod;

    fn args(value: serde_json::Value) -> JsonObject {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn test_bulk_binds_post_body() {
        let request = BulkLookupTool::bind(&args(
            json!({"cnpjs": ["00000000000191", "33000167000101"]}),
        ))
        .unwrap();
        assert_eq!(request.method, ApiMethod::Post);
        assert_eq!(request.path, "/api/cnpj/bulk");
        assert!(request.query.is_empty());
        assert_eq!(
            request.body,
            Some(json!({"cnpjs": ["00000000000191", "33000167000101"]}))
        );
    }

    #[test]
    fn test_bulk_forwards_oversized_lists_untruncated() {
        // The 100-item cap belongs to the upstream; the client does not trim.
        let cnpjs: Vec<String> = (0..150).map(|i| format!("{i:014}")).collect();
        let request = BulkLookupTool::bind(&args(json!({"cnpjs": cnpjs}))).unwrap();
        let sent = request.body.unwrap();
        assert_eq!(sent["cnpjs"].as_array().unwrap().len(), 150);
    }

    #[test]
    fn test_bulk_requires_cnpjs() {
        assert!(BulkLookupTool::bind(&JsonObject::new()).is_err());
    }
}
