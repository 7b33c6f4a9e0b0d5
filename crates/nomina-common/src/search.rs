//! Query context threaded through every index lookup.
//!
//! A `SearchContext` is an opaque per-request handle: it carries the project
//! identity and the visibility scope chosen by the host. The engine only ever
//! forwards it or derives a default-scoped context from a bare project handle.

use serde::{Deserialize, Serialize};

/// Host-assigned project identifier.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProjectId(pub u32);

/// Where a declaration lives relative to the project being analysed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DeclOrigin {
    /// Declared in the project's own sources.
    #[default]
    Project,
    /// Declared in a dependency or bundled library.
    Library,
}

/// Visibility filter applied by the index.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SearchScope {
    /// Project sources only.
    Project,
    /// Project sources plus dependencies and libraries.
    #[default]
    ProjectAndLibraries,
}

impl SearchScope {
    /// Whether a declaration with the given origin is visible in this scope.
    pub const fn accepts(self, origin: DeclOrigin) -> bool {
        match self {
            Self::Project => matches!(origin, DeclOrigin::Project),
            Self::ProjectAndLibraries => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SearchContext {
    project: ProjectId,
    scope: SearchScope,
}

impl SearchContext {
    /// Context for `project` with the default project-plus-libraries scope.
    pub fn for_project(project: ProjectId) -> Self {
        Self {
            project,
            scope: SearchScope::default(),
        }
    }

    pub fn with_scope(mut self, scope: SearchScope) -> Self {
        self.scope = scope;
        self
    }

    pub fn project(&self) -> ProjectId {
        self.project
    }

    pub fn scope(&self) -> SearchScope {
        self.scope
    }
}

#[cfg(test)]
#[path = "../tests/search_tests.rs"]
mod tests;
