//! Core types for the journal. Domain-agnostic.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Entity body: a schemaless, insertion-ordered mapping of field name to
/// dynamically typed value. Shape validation is explicitly out of scope.
pub type Payload = serde_json::Map<String, serde_json::Value>;

/// The kind tag of an event.
///
/// `Unknown` absorbs any foreign tag found in an existing journal so that
/// decoding stays total; projection ignores such records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Create,
    Update,
    Patch,
    Delete,
    #[serde(other)]
    Unknown,
}

impl EventKind {
    /// Kinds that address an existing record by `payload.id`.
    pub fn targets_existing(self) -> bool {
        matches!(self, Self::Update | Self::Patch | Self::Delete)
    }
}

/// An accepted state change, as written to the journal. Immutable once
/// appended; never removed or reordered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: Uuid,
    pub entity: String,
    pub event: EventKind,
    pub payload: Payload,
    pub timestamp: DateTime<Utc>,
}

/// A caller-supplied, unvalidated request to change state. Not yet durable:
/// the command processor assigns identity and time when it accepts one.
#[derive(Debug, Clone)]
pub struct Command {
    pub entity: String,
    pub kind: EventKind,
    pub payload: Payload,
}

impl Command {
    pub fn new(entity: impl Into<String>, kind: EventKind, payload: Payload) -> Self {
        Self {
            entity: entity.into(),
            kind,
            payload,
        }
    }
}
