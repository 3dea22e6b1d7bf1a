//! JSON playlist store
//!
//! Reads and writes a playlist as its name plus the ordered list of
//! track fields:
//!
//! ```json
//! {
//!     "Name": "Road Trip",
//!     "Songs": [
//!         { "title": "Song1", "artist": "Alpha", "duration": 120, "genre": "Rock" }
//!     ]
//! }
//! ```
//!
//! The playback cursor and the event log are not persisted.

mod reader;
mod writer;

pub use reader::{from_json_str, read_playlist};
pub use writer::{to_json_string, write_playlist};

use crate::model::{PlaylistError, Track};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Default location of the playlist file
pub const DEFAULT_STORE_PATH: &str = "./data/playlist.json";

/// Failures reading or writing a stored playlist
#[derive(Error, Debug)]
pub enum StoreError {
    /// File could not be read or written
    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Contents are not a playlist document
    #[error("Malformed playlist data: {0}")]
    Json(#[from] serde_json::Error),

    /// A stored track violates the track constraints
    #[error(transparent)]
    InvalidTrack(#[from] PlaylistError),
}

/// On-disk shape of a playlist
#[derive(Debug, Serialize, Deserialize)]
struct PlaylistDocument {
    #[serde(rename = "Name")]
    name: String,

    #[serde(rename = "Songs")]
    songs: Vec<Track>,
}
