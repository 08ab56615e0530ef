//! In-memory side of the store: aggregates, projection, command handling.
//!
//! The aggregate table is derived, disposable state — a deterministic fold
//! of the journal. The projector is the single fold step, used identically
//! by startup replay and live commands; that identity is the core
//! correctness invariant of the whole system.

pub mod aggregate;
pub mod processor;
pub mod projector;
pub mod replay;

pub use aggregate::AggregateTable;
pub use processor::CommandProcessor;
