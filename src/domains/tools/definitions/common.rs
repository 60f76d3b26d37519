//! Shared helpers for tool definitions.

use rmcp::handler::server::tool::cached_schema_for_type;
use rmcp::model::{JsonObject, Tool};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Build the MCP tool metadata for a params type.
pub fn tool_model<P>(name: &'static str, description: &'static str) -> Tool
where
    P: JsonSchema + 'static,
{
    Tool {
        name: name.into(),
        description: Some(description.into()),
        input_schema: cached_schema_for_type::<P>(),
        annotations: None,
        output_schema: None,
        icons: None,
        meta: None,
        title: None,
    }
}

/// Deserialize an argument mapping into a typed params struct.
pub fn parse_args<P: DeserializeOwned>(args: &JsonObject) -> Result<P, serde_json::Error> {
    serde_json::from_value(Value::Object(args.clone()))
}
