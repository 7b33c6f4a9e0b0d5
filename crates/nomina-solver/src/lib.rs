//! Nominal type hierarchy and member resolution.
//!
//! Classes in the analysed scripting language only exist by convention, so a
//! type is nothing more than a name plus an optional parent name. This crate
//! rebuilds class semantics on top of that:
//!
//! - [`TypeNode`]: identity record with factories for declared, anonymous and
//!   global types, and the two-name persisted record format
//! - [`SuperTypeResolver`]: the single polymorphic step "what is my parent?"
//! - [`ResolveSession`]: per-request memo, cycle/depth guard and diagnostics
//! - [`MemberResolver`]: field/method lookup with shadowing and
//!   instance-over-static priority
//!
//! Parents are always re-resolved by name through the index, never cached as
//! references on the node, so the index may be rebuilt between requests.

mod chain_guard;
mod member_resolver;
mod session;
mod super_type;
mod type_node;

pub use chain_guard::{ChainGuard, ChainStep};
pub use member_resolver::MemberResolver;
pub use session::{ChainLevel, ResolveSession, SessionStats};
pub use super_type::SuperTypeResolver;
pub use type_node::{DeclSite, GlobalRef, TypeNode, TypeNodeKind};
