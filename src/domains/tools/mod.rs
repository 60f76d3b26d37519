//! Tools domain module.
//!
//! Everything needed to translate an MCP tool invocation into one upstream
//! registry API call:
//!
//! - `definitions/` - the tool catalog, one file per category
//! - `registry.rs` - the static name-to-binding dispatch table
//! - `request.rs` - the bound outbound request (pure data)
//! - `client.rs` - the upstream HTTP client with error normalization
//! - `envelope.rs` - the uniform success-or-error result shape
//!
//! ## Adding a New Tool
//!
//! 1. Define params, NAME, DESCRIPTION and `bind()` in a `definitions/` file
//! 2. Export it in `definitions/mod.rs`
//! 3. Add its `spec()` to the catalog in `registry.rs`
//!
//! The server picks it up from the registry - no other file changes.

pub mod client;
pub mod definitions;
pub mod envelope;
pub mod registry;
pub mod request;

pub use client::ApiClient;
pub use envelope::{ErrorCode, ErrorEnvelope};
pub use registry::{ToolRegistry, ToolSpec};
pub use request::{ApiMethod, ApiRequest};
