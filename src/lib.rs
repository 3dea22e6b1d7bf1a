//! Playlist Manager - ordered, duplicate-free music playlists
//!
//! This library keeps a named playlist of tracks with a playback cursor,
//! reorders it (arrange by field, shuffle, reverse, move), records every
//! change in an event log and stores playlists as JSON.

pub mod events;
pub mod model;
pub mod session;
pub mod store;

pub use events::{Event, EventLog};
pub use model::{ArrangeKey, Playlist, PlaylistError, Track};
pub use session::{Command, Outcome, Session, SessionConfig};
