use crate::session::ResolveSession;
use crate::type_node::TypeNode;

/// One step up the hierarchy: "what is the immediate parent of this type?"
///
/// This is the only seam that varies between declaration kinds. Member
/// lookup and candidate collection are written against this trait and never
/// inspect how a type was declared.
pub trait SuperTypeResolver {
    /// Identity key used for index lookups.
    fn class_name(&self) -> &str;

    /// The immediate parent, resolved through the session's index.
    ///
    /// The base behaviour is "no parent".
    fn super_type(&self, _session: &mut ResolveSession<'_>) -> Option<TypeNode> {
        None
    }
}
