//! Shared configuration and error taxonomy for factline.

pub mod config;
pub mod error;

pub use config::Config;
pub use error::{CodecError, CommandError, JournalError, ReplayError};
