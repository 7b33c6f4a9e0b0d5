use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use nomina_common::SearchScope;

/// CLI arguments for the nomina binary.
#[derive(Parser, Debug)]
#[command(
    name = "nomina",
    version,
    about = "Query class hierarchies and members of Lua-style class annotations"
)]
pub struct CliArgs {
    /// Path to nomina.json. Defaults to nomina.json in the working directory.
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    /// Index snapshot (JSON) to query. Overrides `index` in nomina.json.
    #[arg(short = 'i', long, global = true)]
    pub index: Option<PathBuf>,

    /// Which declarations are visible.
    #[arg(long, value_enum, ignore_case = true, global = true)]
    pub scope: Option<Scope>,

    /// Maximum number of super-chain levels to walk. Unlimited by default.
    #[arg(long = "maxChainDepth", alias = "max-chain-depth", global = true)]
    pub max_chain_depth: Option<u32>,

    /// Match completion prefixes case-insensitively.
    #[arg(long = "ignoreCase", alias = "ignore-case", global = true)]
    pub ignore_case: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,

    /// Print session counters to stderr.
    #[arg(long, global = true)]
    pub stats: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the super chain of a class, most-derived first.
    Chain { class: String },
    /// Find a field along the super chain.
    Field { class: String, name: String },
    /// Find a method along the super chain (instance before static per level).
    Method { class: String, name: String },
    /// Print the inferred type of the nearest declaration of a field.
    FieldType { class: String, name: String },
    /// List member completion candidates.
    Complete {
        class: String,
        /// Only members starting with this text.
        #[arg(long, default_value = "")]
        prefix: String,
        /// Insert instance methods as references instead of calls.
        #[arg(long = "asField", alias = "as-field")]
        as_field: bool,
    },
}

impl Command {
    /// The class every subcommand starts from.
    pub fn class(&self) -> &str {
        match self {
            Self::Chain { class }
            | Self::Field { class, .. }
            | Self::Method { class, .. }
            | Self::FieldType { class, .. }
            | Self::Complete { class, .. } => class,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Scope {
    Project,
    #[value(name = "projectAndLibraries", alias = "project-and-libraries", alias = "all")]
    ProjectAndLibraries,
}

impl From<Scope> for SearchScope {
    fn from(value: Scope) -> Self {
        match value {
            Scope::Project => Self::Project,
            Scope::ProjectAndLibraries => Self::ProjectAndLibraries,
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
