//! Common types and utilities for the nomina class-hierarchy engine.
//!
//! This crate provides foundational types used across all nomina crates:
//! - Query context (`ProjectId`, `SearchScope`, `SearchContext`)
//! - Centralized limits for super-chain walks and stub decoding
//! - The stub stream codec used to persist type identity records
//! - Diagnostics reported by chain walks

// Per-request query context
pub mod search;
pub use search::{DeclOrigin, ProjectId, SearchContext, SearchScope};

// Centralized limits and thresholds
pub mod limits;

// Binary record framing for persisted type names
pub mod stub;
pub use stub::{StubError, StubInput, StubOutput};

pub mod diagnostic_codes {
    /// A super-chain walk re-entered a class it had already visited.
    pub const CYCLIC_SUPER_CHAIN: u32 = 1001;
    /// A super-chain walk hit the configured depth limit.
    pub const SUPER_CHAIN_TOO_DEEP: u32 = 1002;
}

pub mod diagnostic_messages {
    pub const CYCLIC_SUPER_CHAIN: &str = "Super chain of '{0}' loops back to '{1}'.";
    pub const SUPER_CHAIN_TOO_DEEP: &str =
        "Super chain of '{0}' exceeds the maximum depth of {1} levels.";
}

/// A problem met while walking a super chain.
///
/// Chain problems never fail a query, so every diagnostic is a warning.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
    pub code: u32,
    /// The class the walk started from.
    pub class_name: String,
    pub message_text: String,
}

impl Diagnostic {
    pub fn new(class_name: impl Into<String>, message: impl Into<String>, code: u32) -> Self {
        Self {
            code,
            class_name: class_name.into(),
            message_text: message.into(),
        }
    }

    /// Code rendered the way the CLI prints it, e.g. `NOM1001`.
    pub fn code_text(&self) -> String {
        format!("NOM{}", self.code)
    }
}

pub fn format_message(message: &str, args: &[&str]) -> String {
    let mut result = message.to_string();
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{i}}}"), arg);
    }
    result
}

#[cfg(test)]
#[path = "../tests/diagnostic_tests.rs"]
mod diagnostic_tests;
