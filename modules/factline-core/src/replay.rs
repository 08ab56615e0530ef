//! Startup replay: journal lines → codec → projector.

use tracing::info;

use factline_common::{JournalError, ReplayError};
use factline_journal::{codec, Journal};

use crate::aggregate::AggregateTable;
use crate::projector;

/// Replay the whole journal into `table`, in write order.
///
/// Runs once at startup, before any request is served. A malformed line
/// means the journal is corrupt and aborts with the 1-based line number;
/// nothing is skipped or repaired.
pub fn replay(journal: &Journal, table: &mut AggregateTable) -> Result<(), ReplayError> {
    let mut applied = 0usize;

    for (index, line) in journal.read_all()?.enumerate() {
        let line = line.map_err(JournalError::from)?;
        let event = codec::decode(&line).map_err(|source| ReplayError::MalformedRecord {
            line: index + 1,
            source,
        })?;
        projector::apply(table, &event);
        applied += 1;
    }

    info!(events = applied, journal = %journal.path().display(), "replay complete");
    Ok(())
}
