//! Playlist data model
//!
//! Tracks are plain values; a playlist owns its tracks in playback order
//! together with the "now playing" cursor.

mod arrange;
mod playlist;
mod track;

pub use arrange::ArrangeKey;
pub use playlist::Playlist;
pub use track::Track;

use thiserror::Error;

/// Caller mistakes reported by playlist operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlaylistError {
    /// No track in the playlist matches
    #[error("Track not found: {0}")]
    TrackNotFound(String),

    /// 1-based move target outside the playlist
    #[error("Position {position} out of range (playlist has {len} tracks)")]
    PositionOutOfRange { position: usize, len: usize },

    /// Track fields violate their constraints
    #[error("Invalid track '{title}': {reason}")]
    InvalidTrack { title: String, reason: String },
}
