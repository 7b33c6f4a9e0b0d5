use nomina_common::{SearchContext, SearchScope};

use crate::defs::{ClassRecord, FieldDef, MethodDef};

/// Query contract of the host's project-wide index.
///
/// All `lookup_*` results are in declaration order; callers rely on that
/// order and never re-sort. The index is treated as read-only for the
/// duration of one resolution pass. Any synchronisation with a concurrent
/// rebuild is the implementation's concern.
pub trait MemberIndex {
    /// The persisted class record for `name`, if one is visible in `ctx`.
    fn find_class(&self, name: &str, ctx: &SearchContext) -> Option<ClassRecord>;

    fn lookup_fields(&self, class_name: &str, scope: SearchScope) -> Vec<FieldDef>;

    fn lookup_instance_methods(&self, class_name: &str, scope: SearchScope) -> Vec<MethodDef>;

    fn lookup_static_methods(&self, class_name: &str, scope: SearchScope) -> Vec<MethodDef>;

    /// The first field named `name` declared directly on `class_name`.
    fn find_field(&self, class_name: &str, name: &str, ctx: &SearchContext) -> Option<FieldDef> {
        self.lookup_fields(class_name, ctx.scope())
            .into_iter()
            .find(|field| field.name == name)
    }

    /// The first instance method named `name` declared directly on `class_name`.
    fn find_method(&self, class_name: &str, name: &str, ctx: &SearchContext) -> Option<MethodDef> {
        self.lookup_instance_methods(class_name, ctx.scope())
            .into_iter()
            .find(|method| method.name == name)
    }

    /// The first static method named `name` declared directly on `class_name`.
    fn find_static_method(
        &self,
        class_name: &str,
        name: &str,
        ctx: &SearchContext,
    ) -> Option<MethodDef> {
        self.lookup_static_methods(class_name, ctx.scope())
            .into_iter()
            .find(|method| method.name == name)
    }
}
