use super::PlaylistError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents a single song in a playlist
///
/// Two tracks are the same track when all four fields match exactly
/// (case-sensitive). Membership and deduplication in a [`Playlist`]
/// go through this equality, never through identity.
///
/// [`Playlist`]: super::Playlist
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Track {
    /// Track title
    title: String,

    /// Artist name
    artist: String,

    /// Track duration in seconds
    #[serde(rename = "duration")]
    duration_secs: u32,

    /// Genre
    genre: String,
}

impl Track {
    /// Create a new track
    ///
    /// Title, artist and genre must be non-empty and the duration positive.
    /// These are caller obligations; use [`Track::validate`] on data that
    /// did not come from trusted code.
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        duration_secs: u32,
        genre: impl Into<String>,
    ) -> Self {
        let track = Self {
            title: title.into(),
            artist: artist.into(),
            duration_secs,
            genre: genre.into(),
        };
        debug_assert!(track.validate().is_ok(), "invalid track: {:?}", track);
        track
    }

    /// Check the field constraints
    pub fn validate(&self) -> Result<(), PlaylistError> {
        let problem = if self.title.is_empty() {
            "empty title"
        } else if self.artist.is_empty() {
            "empty artist"
        } else if self.genre.is_empty() {
            "empty genre"
        } else if self.duration_secs == 0 {
            "zero duration"
        } else {
            return Ok(());
        };

        Err(PlaylistError::InvalidTrack {
            title: self.title.clone(),
            reason: problem.to_string(),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn artist(&self) -> &str {
        &self.artist
    }

    pub fn duration_secs(&self) -> u32 {
        self.duration_secs
    }

    pub fn genre(&self) -> &str {
        &self.genre
    }

    /// Multi-line description shown by the front-end
    pub fn details(&self) -> String {
        format!(
            "Title: {}\nArtist: {}\nDuration: {} seconds\nGenre: {}",
            self.title, self.artist, self.duration_secs, self.genre
        )
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title)
    }
}
