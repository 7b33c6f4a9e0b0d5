//! Centralized limits and thresholds.
//!
//! Stub decoding is bounded so that a corrupted length header cannot trigger
//! a huge allocation. Super-chain walks need no constant here: the
//! visited-name set ends every walk, and a depth limit is only applied when a
//! caller asks for one.

/// Maximum byte length of a single name read from a stub stream.
pub const MAX_STUB_NAME_LEN: u32 = 64 * 1024;
