//! The projector: the single fold step from (table, event) to new table.
//!
//! Startup replay and live command handling both go through [`apply`] —
//! there is no second code path. The function is total: every not-found
//! case and every unknown event kind is a silent no-op, so replaying any
//! journal, including one written by a newer version, never fails here.

use tracing::trace;

use factline_journal::{Event, EventKind};

use crate::aggregate::AggregateTable;

/// Apply one event to the table.
pub fn apply(table: &mut AggregateTable, event: &Event) {
    match event.event {
        EventKind::Create => {
            table
                .collection_or_default(&event.entity)
                .push(event.payload.clone());
        }
        EventKind::Update => {
            if let Some((records, index)) = locate(table, event) {
                records[index] = event.payload.clone();
            }
        }
        EventKind::Patch => {
            if let Some((records, index)) = locate(table, event) {
                for (field, value) in &event.payload {
                    records[index].insert(field.clone(), value.clone());
                }
            }
        }
        EventKind::Delete => {
            if let Some((records, index)) = locate(table, event) {
                records.remove(index);
            }
        }
        EventKind::Unknown => {
            trace!(event_id = %event.id, "ignoring event of unknown kind");
        }
    }
}

// Find the record addressed by `payload.id`, if the collection exists and
// the id is present. Records written without an `id` are unaddressable.
fn locate<'a>(
    table: &'a mut AggregateTable,
    event: &Event,
) -> Option<(&'a mut Vec<factline_journal::Payload>, usize)> {
    let target = event.payload.get("id")?;
    let records = table.collection_mut(&event.entity)?;
    let index = records
        .iter()
        .position(|record| record.get("id") == Some(target))?;
    Some((records, index))
}
