use thiserror::Error;

/// Journal storage failures. Fatal to the operation that hit them; a command
/// whose append fails is rejected with no partial application.
#[derive(Error, Debug)]
pub enum JournalError {
    #[error("journal storage failure: {0}")]
    Storage(#[from] std::io::Error),

    #[error("event could not be encoded: {0}")]
    Encode(#[from] CodecError),
}

/// Codec failures. A line that is not a valid event record.
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("malformed event record: {0}")]
    MalformedRecord(#[from] serde_json::Error),
}

/// Startup replay failures. Both variants indicate the journal cannot be
/// trusted and abort startup; corrupt records are never skipped.
#[derive(Error, Debug)]
pub enum ReplayError {
    #[error("malformed journal record at line {line}: {source}")]
    MalformedRecord {
        line: usize,
        #[source]
        source: CodecError,
    },

    #[error(transparent)]
    Storage(#[from] JournalError),
}

/// Command execution failures surfaced to the HTTP layer.
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("no record with id '{id}' in collection '{entity}'")]
    NotFound { entity: String, id: String },

    #[error(transparent)]
    Storage(#[from] JournalError),
}
