//! Type identity records.
//!
//! A `TypeNode` is a name and an optional parent name. It never holds a
//! reference to its parent node; the parent is looked up by name on every
//! query so that cached nodes stay valid while the index is rebuilt.
//!
//! ## Declaration kinds
//!
//! | Kind | Name | Parent |
//! |------|------|--------|
//! | Declared | `---@class Name : Parent` | class record of `Parent` |
//! | Anonymous | `file@(offset)binding` | none |
//! | Global | literal text of the global reference | none |

use std::io::{Read, Write};

use nomina_common::{StubError, StubInput, StubOutput};
use nomina_index::ClassRecord;
use tracing::trace;

use crate::session::ResolveSession;
use crate::super_type::SuperTypeResolver;

/// Declaration site of a local binding.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DeclSite {
    pub file: String,
    /// Byte offset of the binding name in `file`.
    pub offset: u32,
    /// The binding's identifier.
    pub name: String,
}

impl DeclSite {
    pub fn new(file: impl Into<String>, offset: u32, name: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            offset,
            name: name.into(),
        }
    }
}

/// A reference to a global name, e.g. `Utils` in `Utils.trim(s)`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GlobalRef {
    pub text: String,
    pub site: Option<DeclSite>,
}

impl GlobalRef {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            site: None,
        }
    }

    pub fn at(mut self, site: DeclSite) -> Self {
        self.site = Some(site);
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeNodeKind {
    /// A named class, optionally with an explicit parent.
    Declared,
    /// The table bound by a local declaration.
    Anonymous { site: DeclSite },
    /// A global table referenced by name.
    Global { reference: GlobalRef },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeNode {
    name: String,
    super_name: Option<String>,
    kind: TypeNodeKind,
}

impl TypeNode {
    /// A declared type. No validation beyond the type system's own.
    pub fn create(name: impl Into<String>, super_name: Option<String>) -> Self {
        Self {
            name: name.into(),
            super_name,
            kind: TypeNodeKind::Declared,
        }
    }

    pub fn from_record(record: &ClassRecord) -> Self {
        Self::create(record.name.clone(), record.super_name.clone())
    }

    /// The type of a local binding's table.
    ///
    /// The name is derived from the declaration site only, so every query
    /// about the same binding resolves to the same identity.
    pub fn create_anonymous_type(site: &DeclSite) -> Self {
        Self {
            name: anonymous_type_name(site),
            super_name: None,
            kind: TypeNodeKind::Anonymous { site: site.clone() },
        }
    }

    pub fn create_global_type(reference: &GlobalRef) -> Self {
        Self {
            name: reference.text.clone(),
            super_name: None,
            kind: TypeNodeKind::Global {
                reference: reference.clone(),
            },
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn super_name(&self) -> Option<&str> {
        self.super_name.as_deref()
    }

    pub fn kind(&self) -> &TypeNodeKind {
        &self.kind
    }

    /// Write the persisted record: name, then parent name or the null marker.
    pub fn serialize<W: Write>(&self, out: &mut StubOutput<W>) -> Result<(), StubError> {
        out.write_name(Some(&self.name))?;
        out.write_name(self.super_name.as_deref())
    }

    /// Read a record written by [`serialize`](Self::serialize).
    ///
    /// Only the two names are persisted, so the result is always a declared
    /// type.
    pub fn deserialize<R: Read>(input: &mut StubInput<R>) -> Result<Self, StubError> {
        let name = input.read_required_name("name")?;
        let super_name = input.read_name()?;
        Ok(Self::create(name, super_name))
    }
}

impl SuperTypeResolver for TypeNode {
    fn class_name(&self) -> &str {
        &self.name
    }

    fn super_type(&self, session: &mut ResolveSession<'_>) -> Option<TypeNode> {
        match &self.kind {
            TypeNodeKind::Declared => {
                let super_name = self.super_name.as_deref()?;
                let resolved = session.resolve_class(super_name);
                if resolved.is_none() {
                    trace!(class = %self.name, super_name, "super class not in index");
                }
                resolved
            }
            TypeNodeKind::Anonymous { .. } | TypeNodeKind::Global { .. } => None,
        }
    }
}

fn anonymous_type_name(site: &DeclSite) -> String {
    format!("{}@({}){}", site.file, site.offset, site.name)
}

#[cfg(test)]
#[path = "../tests/type_node_tests.rs"]
mod tests;
