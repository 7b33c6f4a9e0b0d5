//! Hash-map backed [`MemberIndex`] implementation.

use nomina_common::{DeclOrigin, SearchContext, SearchScope};
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::defs::{ClassRecord, FieldDef, MethodDef};
use crate::member_index::MemberIndex;
use crate::snapshot::IndexSnapshot;

#[derive(Debug, Default)]
struct ClassEntry {
    record: Option<ClassRecord>,
    fields: Vec<FieldDef>,
    methods: Vec<MethodDef>,
    static_methods: Vec<MethodDef>,
}

/// In-memory index keyed by class name.
///
/// Members may be registered for a name that has no class record (for
/// example fields assigned on a global table); such names simply have no
/// parent.
#[derive(Debug, Default)]
pub struct InMemoryIndex {
    classes: FxHashMap<String, ClassEntry>,
}

impl InMemoryIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_snapshot(snapshot: IndexSnapshot) -> Self {
        let mut index = Self::new();
        for record in snapshot.classes {
            index.add_class(record);
        }
        for field in snapshot.fields {
            index.add_field(field);
        }
        for method in snapshot.methods {
            index.add_method(method);
        }
        index
    }

    /// Register a class record. The first record for a name wins.
    pub fn add_class(&mut self, record: ClassRecord) {
        let entry = self.classes.entry(record.name.clone()).or_default();
        if let Some(existing) = &entry.record {
            debug!(
                class = %record.name,
                kept_super = ?existing.super_name,
                dropped_super = ?record.super_name,
                "duplicate class record ignored"
            );
            return;
        }
        entry.record = Some(record);
    }

    pub fn add_field(&mut self, field: FieldDef) {
        self.entry(&field.class_name).fields.push(field);
    }

    /// Register a method; static methods go to the static table.
    pub fn add_method(&mut self, method: MethodDef) {
        let entry = self.entry(&method.class_name);
        if method.is_static {
            entry.static_methods.push(method);
        } else {
            entry.methods.push(method);
        }
    }

    pub fn class_count(&self) -> usize {
        self.classes
            .values()
            .filter(|entry| entry.record.is_some())
            .count()
    }

    /// Names with a class record, sorted for stable output.
    pub fn class_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .classes
            .iter()
            .filter(|(_, entry)| entry.record.is_some())
            .map(|(name, _)| name.as_str())
            .collect();
        names.sort_unstable();
        names
    }

    fn entry(&mut self, class_name: &str) -> &mut ClassEntry {
        self.classes.entry(class_name.to_string()).or_default()
    }

    fn visible<'a, T: 'a>(
        items: impl IntoIterator<Item = &'a T>,
        scope: SearchScope,
        origin: impl Fn(&T) -> DeclOrigin,
    ) -> impl Iterator<Item = &'a T> {
        items
            .into_iter()
            .filter(move |item| scope.accepts(origin(*item)))
    }
}

impl MemberIndex for InMemoryIndex {
    fn find_class(&self, name: &str, ctx: &SearchContext) -> Option<ClassRecord> {
        self.classes
            .get(name)?
            .record
            .as_ref()
            .filter(|record| ctx.scope().accepts(record.origin))
            .cloned()
    }

    fn lookup_fields(&self, class_name: &str, scope: SearchScope) -> Vec<FieldDef> {
        let Some(entry) = self.classes.get(class_name) else {
            return Vec::new();
        };
        Self::visible(&entry.fields, scope, |field| field.origin)
            .cloned()
            .collect()
    }

    fn lookup_instance_methods(&self, class_name: &str, scope: SearchScope) -> Vec<MethodDef> {
        let Some(entry) = self.classes.get(class_name) else {
            return Vec::new();
        };
        Self::visible(&entry.methods, scope, |method| method.origin)
            .cloned()
            .collect()
    }

    fn lookup_static_methods(&self, class_name: &str, scope: SearchScope) -> Vec<MethodDef> {
        let Some(entry) = self.classes.get(class_name) else {
            return Vec::new();
        };
        Self::visible(&entry.static_methods, scope, |method| method.origin)
            .cloned()
            .collect()
    }

    fn find_field(&self, class_name: &str, name: &str, ctx: &SearchContext) -> Option<FieldDef> {
        let entry = self.classes.get(class_name)?;
        Self::visible(&entry.fields, ctx.scope(), |field| field.origin)
            .find(|field| field.name == name)
            .cloned()
    }

    fn find_method(&self, class_name: &str, name: &str, ctx: &SearchContext) -> Option<MethodDef> {
        let entry = self.classes.get(class_name)?;
        Self::visible(&entry.methods, ctx.scope(), |method| method.origin)
            .find(|method| method.name == name)
            .cloned()
    }

    fn find_static_method(
        &self,
        class_name: &str,
        name: &str,
        ctx: &SearchContext,
    ) -> Option<MethodDef> {
        let entry = self.classes.get(class_name)?;
        Self::visible(&entry.static_methods, ctx.scope(), |method| method.origin)
            .find(|method| method.name == name)
            .cloned()
    }
}

#[cfg(test)]
#[path = "../tests/memory_tests.rs"]
mod tests;
