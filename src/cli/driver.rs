use anyhow::{Context, Result, anyhow};
use colored::Colorize;
use serde::Serialize;
use std::fmt::Write as _;
use std::path::Path;
use tracing::{debug, info_span};

use nomina_common::{Diagnostic, ProjectId, SearchContext};
use nomina_index::{FieldDef, InMemoryIndex, IndexSnapshot, MemberIndex, MethodDef, TypeSet};
use nomina_lsp::{Candidate, MemberCompletionRequest, MemberKind, complete_members};
use nomina_solver::{MemberResolver, ResolveSession, SessionStats, TypeNode};

use crate::cli::args::{CliArgs, Command, OutputFormat};
use crate::cli::config::{ResolvedOptions, load_options};

/// The CLI serves a single project per invocation.
const CLI_PROJECT: ProjectId = ProjectId(0);

/// What a subcommand produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "query", rename_all = "camelCase")]
pub enum QueryOutput {
    Chain { chain: Vec<String> },
    Field { field: Option<FieldDef> },
    Method { method: Option<MethodDef> },
    FieldType { types: Option<TypeSet> },
    Complete { entries: Vec<Candidate> },
}

#[derive(Debug, Clone)]
pub struct QueryResult {
    pub output: QueryOutput,
    pub diagnostics: Vec<Diagnostic>,
    pub stats: SessionStats,
}

#[derive(Serialize)]
struct JsonReport<'r> {
    #[serde(flatten)]
    output: &'r QueryOutput,
    #[serde(skip_serializing_if = "<[Diagnostic]>::is_empty")]
    diagnostics: &'r [Diagnostic],
}

impl QueryResult {
    /// Whether the query found anything. Decides the exit status.
    pub fn found(&self) -> bool {
        match &self.output {
            QueryOutput::Chain { chain } => !chain.is_empty(),
            QueryOutput::Field { field } => field.is_some(),
            QueryOutput::Method { method } => method.is_some(),
            QueryOutput::FieldType { types } => types.is_some(),
            QueryOutput::Complete { entries } => !entries.is_empty(),
        }
    }

    pub fn exit_code(&self) -> i32 {
        if self.found() { 0 } else { 1 }
    }

    /// Render for stdout. `color` only affects text output.
    pub fn render(&self, format: OutputFormat, color: bool) -> Result<String> {
        match format {
            OutputFormat::Json => {
                let report = JsonReport {
                    output: &self.output,
                    diagnostics: &self.diagnostics,
                };
                let mut text = serde_json::to_string_pretty(&report)
                    .context("failed to serialize query result")?;
                text.push('\n');
                Ok(text)
            }
            OutputFormat::Text => Ok(self.render_text(color)),
        }
    }

    fn render_text(&self, color: bool) -> String {
        let mut out = String::new();
        match &self.output {
            QueryOutput::Chain { chain } => {
                for (depth, name) in chain.iter().enumerate() {
                    let _ = writeln!(out, "{}{}", "  ".repeat(depth), name);
                }
            }
            QueryOutput::Field { field: Some(field) } => {
                let _ = write!(out, "{}.{}", field.class_name, field.name);
                if let Some(types) = &field.types {
                    let _ = write!(out, ": {types}");
                }
                out.push('\n');
            }
            QueryOutput::Method {
                method: Some(method),
            } => {
                let _ = writeln!(out, "{}", method_signature(method));
            }
            QueryOutput::FieldType { types: Some(types) } => {
                let _ = writeln!(out, "{types}");
            }
            QueryOutput::Complete { entries } => {
                for candidate in entries {
                    let _ = writeln!(out, "{}", candidate_line(candidate, color));
                }
            }
            QueryOutput::Field { field: None }
            | QueryOutput::Method { method: None }
            | QueryOutput::FieldType { types: None } => {}
        }
        out
    }
}

/// `Class:name(a, b)` for instance methods, `Class.name(a, b)` for static.
fn method_signature(method: &MethodDef) -> String {
    let separator = if method.is_static { '.' } else { ':' };
    format!(
        "{}{}{}({})",
        method.class_name,
        separator,
        method.name,
        method.params.join(", ")
    )
}

fn candidate_line(candidate: &Candidate, color: bool) -> String {
    let label = match &candidate.insertion {
        Some(hint) => hint.snippet(&candidate.name),
        None => candidate.name.clone(),
    };
    let kind = match candidate.kind {
        MemberKind::Field => "field",
        MemberKind::Method => "method",
        MemberKind::StaticMethod => "static",
    };
    if !color {
        return format!("{label}\t{kind}\t{}", candidate.owner);
    }

    let mut styled = label.normal();
    if candidate.origin.is_emphasized() {
        styled = styled.bold();
    }
    if candidate.kind == MemberKind::StaticMethod {
        styled = styled.underline();
    }
    format!("{styled}\t{}\t{}", kind.dimmed(), candidate.owner.dimmed())
}

/// One diagnostic line for stderr, e.g. `warning NOM1001: Super chain ...`.
pub fn format_diagnostic(diagnostic: &Diagnostic, color: bool) -> String {
    let label = if color {
        "warning".yellow().bold().to_string()
    } else {
        "warning".to_string()
    };
    format!(
        "{} {}: {}",
        label,
        diagnostic.code_text(),
        diagnostic.message_text
    )
}

pub fn format_stats(stats: &SessionStats) -> String {
    format!(
        "super hops: {}, class lookups: {}, memo hits: {}",
        stats.super_hops, stats.class_lookups, stats.memo_hits
    )
}

/// Load configuration and the index snapshot, then run the subcommand.
pub fn run(args: &CliArgs, cwd: &Path) -> Result<QueryResult> {
    let options = load_options(args, cwd)?;
    let snapshot = IndexSnapshot::load(&options.index_path)?;
    let index = InMemoryIndex::from_snapshot(snapshot);
    debug!(
        index = %options.index_path.display(),
        classes = index.class_count(),
        "loaded index snapshot"
    );
    execute(&index, &args.command, &options)
}

/// Run `command` against an already loaded index.
pub fn execute(
    index: &dyn MemberIndex,
    command: &Command,
    options: &ResolvedOptions,
) -> Result<QueryResult> {
    let _span = info_span!("query", class = command.class()).entered();
    let ctx = SearchContext::for_project(CLI_PROJECT).with_scope(options.scope);
    let record = index
        .find_class(command.class(), &ctx)
        .ok_or_else(|| anyhow!("unknown class '{}'", command.class()))?;
    let root = TypeNode::from_record(&record);

    let mut session = ResolveSession::new(index, ctx);
    if let Some(max_depth) = options.max_chain_depth {
        session = session.with_max_chain_depth(max_depth);
    }
    let output = match command {
        Command::Chain { .. } => QueryOutput::Chain {
            chain: MemberResolver::new(&mut session).super_chain(&root),
        },
        Command::Field { name, .. } => QueryOutput::Field {
            field: MemberResolver::new(&mut session).find_field(&root, name),
        },
        Command::Method { name, .. } => QueryOutput::Method {
            method: MemberResolver::new(&mut session).find_method(&root, name),
        },
        Command::FieldType { name, .. } => QueryOutput::FieldType {
            types: MemberResolver::new(&mut session).guess_field_type(&root, name),
        },
        Command::Complete {
            prefix, as_field, ..
        } => return Ok(complete(index, &root, prefix, *as_field, options)),
    };

    Ok(QueryResult {
        output,
        diagnostics: session.take_diagnostics(),
        stats: session.stats(),
    })
}

fn complete(
    index: &dyn MemberIndex,
    root: &TypeNode,
    prefix: &str,
    as_field: bool,
    options: &ResolvedOptions,
) -> QueryResult {
    let mut request = MemberCompletionRequest::new(CLI_PROJECT, prefix);
    request.case_sensitive = options.case_sensitive;
    request.use_as_field = as_field;
    request.scope = options.scope;
    request.max_chain_depth = options.max_chain_depth;

    let result = complete_members(index, root, &request);
    QueryResult {
        output: QueryOutput::Complete {
            entries: result.entries,
        },
        diagnostics: result.diagnostics,
        stats: result.stats,
    }
}
