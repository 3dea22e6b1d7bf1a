//! Closed set of playlist commands issued by front-ends

use crate::model::{ArrangeKey, Track};

/// A single request against a session's playlist
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Replace the playlist with a new empty one
    New(String),

    /// Add a track (duplicates are ignored)
    Add(Track),

    /// Remove the first track with this title
    Remove(String),

    /// Move the first track with this title to a 1-based position
    Move { title: String, position: usize },

    /// Stable sort by one field
    Arrange(ArrangeKey),

    Shuffle,
    Reverse,

    /// Look up a track by title
    Find(String),

    /// Describe the whole playlist
    Show,

    Next,
    Previous,
    Replay,
    NowPlaying,

    /// Write the playlist to the store
    Save,

    /// Replace the playlist with the stored one
    Load,
}

impl Command {
    /// Whether a successful run can change the playlist contents or order
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            Command::New(_)
                | Command::Add(_)
                | Command::Remove(_)
                | Command::Move { .. }
                | Command::Arrange(_)
                | Command::Shuffle
                | Command::Reverse
        )
    }
}

/// Result of running a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Text for the front-end to show
    pub message: String,

    /// The playlist contents or order changed
    pub changed: bool,
}

impl Outcome {
    pub(super) fn changed(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            changed: true,
        }
    }

    pub(super) fn unchanged(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            changed: false,
        }
    }
}
