//! nomina: nominal class hierarchies and member resolution for Lua-style
//! `---@class Name : Parent` annotations.
//!
//! The engine lives in the workspace crates; this package re-exports them
//! and hosts the `nomina` command line tool.
//!
//! - [`common`]: query context, limits, stub codec, diagnostics
//! - [`index`]: the member index contract and an in-memory index
//! - [`solver`]: type nodes, super-chain walks, member resolution
//! - [`lsp`]: completion candidates along the chain

pub use nomina_common as common;
pub use nomina_index as index;
pub use nomina_lsp as lsp;
pub use nomina_solver as solver;

pub mod cli;
pub mod tracing_config;
