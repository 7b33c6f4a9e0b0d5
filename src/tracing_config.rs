//! Tracing configuration for the `nomina` binary.
//!
//! Supports three output formats controlled by `NOMINA_LOG_FORMAT`:
//!
//! - `text` (default): Standard `tracing-subscriber` flat output
//! - `tree`: Hierarchical indented output via `tracing-tree`
//! - `json`: One JSON object per span/event
//!
//! ## Quick start
//!
//! ```bash
//! # Follow every chain step of a completion request
//! NOMINA_LOG=trace NOMINA_LOG_FORMAT=tree nomina complete Dog --prefix b
//!
//! # Only walk warnings (cycles, depth limit) as JSON
//! NOMINA_LOG=warn NOMINA_LOG_FORMAT=json nomina chain Dog
//!
//! # Fine-grained filtering
//! NOMINA_LOG="nomina_solver=debug,nomina_lsp=trace" nomina complete Dog
//! ```
//!
//! The subscriber is only initialised when `NOMINA_LOG` (or `RUST_LOG`) is
//! set, so there is zero overhead in normal runs.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

/// Tracing output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Standard flat text lines (default).
    Text,
    /// Hierarchical indented tree via `tracing-tree`.
    Tree,
    /// Newline-delimited JSON objects.
    Json,
}

impl LogFormat {
    /// Parse a `NOMINA_LOG_FORMAT` value. Unknown values fall back to text.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }

    fn from_env() -> Self {
        Self::parse(&std::env::var("NOMINA_LOG_FORMAT").unwrap_or_default())
    }
}

/// The filter requested by the environment, or `None` when logging is off.
///
/// `NOMINA_LOG` takes precedence over `RUST_LOG`. Values use `RUST_LOG`
/// syntax (e.g. `debug`, `nomina_solver=trace`).
fn log_filter(nomina_log: Option<String>, rust_log: Option<String>) -> Option<EnvFilter> {
    nomina_log
        .or(rust_log)
        .map(|directives| EnvFilter::builder().parse_lossy(directives))
}

/// Initialise the global tracing subscriber.
///
/// Does nothing when neither `NOMINA_LOG` nor `RUST_LOG` is set. All output
/// goes to stderr so it never mixes with query results on stdout.
pub fn init_tracing() {
    let Some(filter) = log_filter(
        std::env::var("NOMINA_LOG").ok(),
        std::env::var("RUST_LOG").ok(),
    ) else {
        return;
    };

    let registry = Registry::default().with(filter);
    match LogFormat::from_env() {
        LogFormat::Tree => registry
            .with(tracing_tree::HierarchicalLayer::new(2).with_targets(true))
            .init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        LogFormat::Text => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init(),
    }
}
