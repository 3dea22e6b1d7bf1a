//! Change history for playlist mutations
//!
//! Every operation that changes a playlist's contents or order records a
//! human-readable description here. The log never feeds back into playlist
//! behavior.

mod history;

pub use history::{Event, EventLog, LOG_CLEARED};
