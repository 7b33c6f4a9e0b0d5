//! Member completion support for the nomina engine.
//!
//! Turns a resolved type into renderer-agnostic completion candidates:
//! every field, static method and instance method along the super chain,
//! tagged with its owner and whether it is declared on the queried type
//! itself. Icons, emphasis styling and text insertion stay with the host.

pub mod candidates;
pub use candidates::{
    AcceptAll, Candidate, CandidateCollector, CandidateSink, CollectOptions, InsertionHint,
    MemberKind, Origin, PlainPrefixMatcher, PrefixMatcher,
};

pub mod request;
pub use request::{CompletionResult, MemberCompletionRequest, complete_members};
