//! The command processor: stamps commands into events and makes them durable.

use chrono::Utc;
use serde_json::Value;
use tracing::info;
use uuid::Uuid;

use factline_common::CommandError;
use factline_journal::{Command, Event, EventKind, Journal};

use crate::aggregate::AggregateTable;
use crate::projector;

/// Turns accepted commands into journal events.
///
/// Owns the journal, so every append in the process funnels through one
/// value. Callers must hold exclusive access to both the processor and the
/// table across a whole [`execute`](CommandProcessor::execute) call; that
/// single critical section is what makes the existence check, the append
/// and the projection one atomic step in the event order.
#[derive(Debug)]
pub struct CommandProcessor {
    journal: Journal,
}

impl CommandProcessor {
    pub fn new(journal: Journal) -> Self {
        Self { journal }
    }

    /// Execute one command: check, stamp, persist, project.
    ///
    /// `update`/`patch`/`delete` require the target id to exist in `table`
    /// at this moment — a command that lost a race with a delete gets
    /// `NotFound`, not a silent no-op. No other validation happens here.
    ///
    /// Exactly one durable append and one in-memory mutation per accepted
    /// command. If the append fails the command is rejected and the table
    /// is untouched.
    pub fn execute(
        &mut self,
        table: &mut AggregateTable,
        command: Command,
    ) -> Result<Event, CommandError> {
        let Command {
            entity,
            kind,
            mut payload,
        } = command;

        if kind.targets_existing() {
            let id = payload
                .get("id")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();
            if !table.contains(&entity, &id) {
                return Err(CommandError::NotFound { entity, id });
            }
        }

        // The only place entity identity is minted. Caller-supplied ids on
        // create are overwritten, never trusted.
        if kind == EventKind::Create {
            payload.insert("id".to_string(), Value::String(Uuid::new_v4().to_string()));
        }

        let event = Event {
            id: Uuid::new_v4(),
            entity,
            event: kind,
            payload,
            timestamp: Utc::now(),
        };

        // Durability first: the journal must never lag memory.
        self.journal.append(&event)?;
        projector::apply(table, &event);

        info!(event_id = %event.id, entity = %event.entity, kind = ?event.event, "command accepted");
        Ok(event)
    }

    pub fn journal(&self) -> &Journal {
        &self.journal
    }
}
