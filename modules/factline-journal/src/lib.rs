//! Append-only event journal and its line codec.
//!
//! Events are opaque JSON facts, one per line, in write order. The journal
//! file is the single source of truth; everything in memory is a fold over
//! it. Zero knowledge of aggregates, HTTP, or any entity schema.

pub mod codec;
pub mod store;
pub mod types;

pub use store::Journal;
pub use types::{Command, Event, EventKind, Payload};
