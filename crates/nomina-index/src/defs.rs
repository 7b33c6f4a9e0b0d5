//! Declaration records stored by the index.

use indexmap::IndexSet;
use nomina_common::DeclOrigin;
use serde::{Deserialize, Serialize};

/// Ordered, duplicate-free set of inferred type names.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeSet(IndexSet<String>);

impl TypeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a type name; returns `false` if it was already present.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        self.0.insert(name.into())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for TypeSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl std::fmt::Display for TypeSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for name in self.iter() {
            if !first {
                f.write_str("|")?;
            }
            f.write_str(name)?;
            first = false;
        }
        Ok(())
    }
}

/// Persisted identity of a declared class: its name and optional parent name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassRecord {
    pub name: String,
    #[serde(default, rename = "super", skip_serializing_if = "Option::is_none")]
    pub super_name: Option<String>,
    #[serde(default)]
    pub origin: DeclOrigin,
}

impl ClassRecord {
    pub fn new(name: impl Into<String>, super_name: Option<&str>) -> Self {
        Self {
            name: name.into(),
            super_name: super_name.map(str::to_string),
            origin: DeclOrigin::Project,
        }
    }

    pub fn with_origin(mut self, origin: DeclOrigin) -> Self {
        self.origin = origin;
        self
    }
}

/// A field declared on a class (`self.x = ...` or `---@field x`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDef {
    pub name: String,
    #[serde(rename = "class")]
    pub class_name: String,
    /// Inferred types; `None` when inference produced nothing for this field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub types: Option<TypeSet>,
    #[serde(default)]
    pub origin: DeclOrigin,
}

impl FieldDef {
    pub fn new(class_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            class_name: class_name.into(),
            types: None,
            origin: DeclOrigin::Project,
        }
    }

    pub fn with_types<S: Into<String>>(mut self, types: impl IntoIterator<Item = S>) -> Self {
        self.types = Some(types.into_iter().collect());
        self
    }

    pub fn with_origin(mut self, origin: DeclOrigin) -> Self {
        self.origin = origin;
        self
    }

    /// The field's inferred type set, if any.
    pub fn guess_type(&self) -> Option<&TypeSet> {
        self.types.as_ref()
    }
}

/// A method declared on a class: `function A:f(a, b)` (instance) or
/// `function A.f(a, b)` (static).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodDef {
    pub name: String,
    #[serde(rename = "class")]
    pub class_name: String,
    #[serde(default)]
    pub params: Vec<String>,
    #[serde(default, rename = "static")]
    pub is_static: bool,
    #[serde(default)]
    pub origin: DeclOrigin,
}

impl MethodDef {
    pub fn instance(class_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            class_name: class_name.into(),
            params: Vec::new(),
            is_static: false,
            origin: DeclOrigin::Project,
        }
    }

    pub fn static_method(class_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            is_static: true,
            ..Self::instance(class_name, name)
        }
    }

    pub fn with_params<S: Into<String>>(mut self, params: impl IntoIterator<Item = S>) -> Self {
        self.params = params.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_origin(mut self, origin: DeclOrigin) -> Self {
        self.origin = origin;
        self
    }
}
