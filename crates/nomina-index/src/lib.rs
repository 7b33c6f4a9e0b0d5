//! Project-wide member index for the nomina engine.
//!
//! The engine never owns persistent storage. It talks to the host's index
//! through the [`MemberIndex`] query contract: class name to ordered fields,
//! instance methods and static methods, exact-name lookups, and the persisted
//! `(name, super name)` class records used to resolve parents.
//!
//! [`InMemoryIndex`] is a reference implementation backed by hash maps. The
//! CLI host fills it from a JSON [`IndexSnapshot`].

pub mod defs;
pub use defs::{ClassRecord, FieldDef, MethodDef, TypeSet};

mod member_index;
pub use member_index::MemberIndex;

mod memory;
pub use memory::InMemoryIndex;

pub mod snapshot;
pub use snapshot::{IndexSnapshot, SnapshotError};
