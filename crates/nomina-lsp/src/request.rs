//! Member completion entry point for hosts.

use nomina_common::{Diagnostic, ProjectId, SearchContext, SearchScope};
use nomina_index::MemberIndex;
use nomina_solver::{ResolveSession, SessionStats, SuperTypeResolver};

use crate::candidates::{Candidate, CandidateCollector, CollectOptions, PlainPrefixMatcher};

/// A member completion request as the host hands it over.
#[derive(Debug, Clone)]
pub struct MemberCompletionRequest {
    /// Project the request belongs to. Hosts must always set it.
    pub project: Option<ProjectId>,
    /// Text typed so far after the member access operator.
    pub prefix: String,
    pub case_sensitive: bool,
    pub use_as_field: bool,
    pub scope: SearchScope,
    /// Overrides the default chain depth limit.
    pub max_chain_depth: Option<u32>,
}

impl MemberCompletionRequest {
    pub fn new(project: ProjectId, prefix: impl Into<String>) -> Self {
        Self {
            project: Some(project),
            prefix: prefix.into(),
            case_sensitive: true,
            use_as_field: false,
            scope: SearchScope::default(),
            max_chain_depth: None,
        }
    }

    /// The query context for this request.
    ///
    /// # Panics
    ///
    /// Panics when the request carries no project handle. Every host code
    /// path creates requests from an open project, so this is a bug in the
    /// caller rather than a condition to recover from.
    pub fn search_context(&self) -> SearchContext {
        let Some(project) = self.project else {
            panic!("member completion requested without a project handle");
        };
        SearchContext::for_project(project).with_scope(self.scope)
    }

    pub fn matcher(&self) -> PlainPrefixMatcher {
        if self.case_sensitive {
            PlainPrefixMatcher::new(self.prefix.clone())
        } else {
            PlainPrefixMatcher::case_insensitive(self.prefix.clone())
        }
    }

    pub fn options(&self) -> CollectOptions {
        CollectOptions {
            use_as_field: self.use_as_field,
        }
    }
}

/// Result of a member completion request.
#[derive(Debug, Clone, serde::Serialize)]
pub struct CompletionResult {
    pub entries: Vec<Candidate>,
    /// Chain problems met while collecting (cycles, depth limit).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub diagnostics: Vec<Diagnostic>,
    #[serde(skip)]
    pub stats: SessionStats,
}

/// Collect member candidates of `root` for `request` in a fresh session.
pub fn complete_members<T>(
    index: &dyn MemberIndex,
    root: &T,
    request: &MemberCompletionRequest,
) -> CompletionResult
where
    T: SuperTypeResolver + ?Sized,
{
    let mut session = ResolveSession::new(index, request.search_context());
    if let Some(max_depth) = request.max_chain_depth {
        session = session.with_max_chain_depth(max_depth);
    }

    let mut entries = Vec::new();
    CandidateCollector::new(&mut session).collect(
        root,
        &request.matcher(),
        request.options(),
        &mut entries,
    );

    CompletionResult {
        entries,
        diagnostics: session.take_diagnostics(),
        stats: session.stats(),
    }
}

#[cfg(test)]
#[path = "../tests/request_tests.rs"]
mod tests;
