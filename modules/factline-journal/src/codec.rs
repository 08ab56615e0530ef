//! Line codec: one event per journal line, single-line JSON.
//!
//! Encoding is deterministic (payload field order is preserved) and
//! round-trips. A line that fails to decode means journal corruption and is
//! fatal to startup, never skipped.

use factline_common::CodecError;

use crate::types::Event;

/// Serialize an event to its journal line, without the trailing newline.
pub fn encode(event: &Event) -> Result<String, CodecError> {
    Ok(serde_json::to_string(event)?)
}

/// Parse one journal line back into an event.
pub fn decode(line: &str) -> Result<Event, CodecError> {
    Ok(serde_json::from_str(line)?)
}
