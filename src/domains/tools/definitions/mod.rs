//! Tool definitions module.
//!
//! Tools are grouped by category, mirroring the catalog: single-entity
//! lookups, search/discovery, analysis, statistics and bulk. Each tool
//! declares its name, description, input schema and a pure binding from
//! arguments to an upstream request.

pub mod analysis;
pub mod bulk;
pub mod common;
pub mod lookup;
pub mod search;
pub mod stats;

pub use analysis::{BenchmarkEmpresaTool, BuscarSimilaresTool, RankingCnaeTool};
pub use bulk::BulkLookupTool;
pub use lookup::{
    BuscarEmpresaTool, EmpresaCompletaTool, FiliaisTool, RegimeTributarioTool, SociosTool,
};
pub use search::{
    BuscarAvancadoTool, BuscarPorCepTool, BuscarPorCnaeTool, BuscarPorNomeTool, BuscarPorSocioTool,
};
pub use stats::{EstatisticasPorCnaeTool, EstatisticasPorUfTool};
