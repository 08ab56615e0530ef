//! The aggregate table: current state per entity collection.

use std::collections::HashMap;

use serde_json::Value;

use factline_common::ReplayError;
use factline_journal::{Journal, Payload};

use crate::replay;

/// Mapping from collection name to its records, in creation order, unique
/// by `id` within a collection.
///
/// This is derived state. It is safe to drop the whole table and rebuild it
/// from the journal with [`AggregateTable::restore`] at any time; outside
/// of replay it is mutated only by the projector.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregateTable {
    collections: HashMap<String, Vec<Payload>>,
}

impl AggregateTable {
    /// An empty table, as at first boot with no journal history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the table by fully replaying `journal`. Corrupt records
    /// abort the restore; they are never skipped.
    pub fn restore(journal: &Journal) -> Result<Self, ReplayError> {
        let mut table = Self::new();
        replay::replay(journal, &mut table)?;
        Ok(table)
    }

    /// All records of a collection, or `None` if it was never created.
    /// A collection emptied by deletes still exists.
    pub fn collection(&self, entity: &str) -> Option<&[Payload]> {
        self.collections.get(entity).map(Vec::as_slice)
    }

    /// Look up one record by its string `id`.
    pub fn get(&self, entity: &str, id: &str) -> Option<&Payload> {
        self.collections
            .get(entity)?
            .iter()
            .find(|record| record.get("id").and_then(Value::as_str) == Some(id))
    }

    /// Whether `id` exists in `entity`. The authoritative existence check
    /// used by the command processor.
    pub fn contains(&self, entity: &str, id: &str) -> bool {
        self.get(entity, id).is_some()
    }

    /// Records of a collection matching every `(field, value)` filter by
    /// exact string equality; non-string fields compare via their JSON
    /// text. `None` if the collection was never created.
    pub fn query<'a>(
        &'a self,
        entity: &str,
        filters: &HashMap<String, String>,
    ) -> Option<Vec<&'a Payload>> {
        let records = self.collections.get(entity)?;
        Some(
            records
                .iter()
                .filter(|record| {
                    filters
                        .iter()
                        .all(|(field, expected)| field_matches(record, field, expected))
                })
                .collect(),
        )
    }

    pub(crate) fn collection_mut(&mut self, entity: &str) -> Option<&mut Vec<Payload>> {
        self.collections.get_mut(entity)
    }

    pub(crate) fn collection_or_default(&mut self, entity: &str) -> &mut Vec<Payload> {
        self.collections.entry(entity.to_string()).or_default()
    }
}

fn field_matches(record: &Payload, field: &str, expected: &str) -> bool {
    match record.get(field) {
        Some(Value::String(s)) => s == expected,
        Some(other) => other.to_string() == expected,
        None => false,
    }
}
