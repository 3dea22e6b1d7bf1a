use super::{PlaylistError, Track};
use crate::events::EventLog;
use std::fmt;

/// Represents a named, ordered playlist with a playback cursor
///
/// The track sequence never holds two equal tracks. The cursor indexes the
/// "now playing" track and is only meaningful while the playlist is
/// non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playlist {
    /// Playlist name
    name: String,

    /// Tracks in playback order
    tracks: Vec<Track>,

    /// Index of the current track
    cursor: usize,
}

impl Playlist {
    /// Create a new empty playlist
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tracks: Vec::new(),
            cursor: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Tracks in current order
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Track at a 0-based position
    pub fn track(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    /// Number of tracks in this playlist
    pub fn num_tracks(&self) -> usize {
        self.tracks.len()
    }

    /// Check if playlist is empty
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn titles(&self) -> Vec<&str> {
        self.tracks.iter().map(Track::title).collect()
    }

    pub fn durations(&self) -> Vec<u32> {
        self.tracks.iter().map(Track::duration_secs).collect()
    }

    pub fn artists(&self) -> Vec<&str> {
        self.tracks.iter().map(Track::artist).collect()
    }

    pub fn genres(&self) -> Vec<&str> {
        self.tracks.iter().map(Track::genre).collect()
    }

    /// Index of the first track with exactly this title
    pub fn find_index(&self, title: &str) -> Option<usize> {
        self.tracks.iter().position(|t| t.title() == title)
    }

    pub fn contains_title(&self, title: &str) -> bool {
        self.find_index(title).is_some()
    }

    pub fn contains_track(&self, track: &Track) -> bool {
        self.tracks.contains(track)
    }

    /// Total running time in seconds
    pub fn total_duration(&self) -> u64 {
        self.tracks.iter().map(|t| u64::from(t.duration_secs())).sum()
    }

    // Playback cursor: wraps forward, clamps backward.

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Track at the cursor, `None` when the playlist is empty
    pub fn now_playing(&self) -> Option<&Track> {
        self.tracks.get(self.cursor)
    }

    /// Move to the next track, wrapping to the first after the last
    pub fn advance(&mut self) {
        if self.tracks.is_empty() {
            return;
        }
        if self.cursor + 1 < self.tracks.len() {
            self.cursor += 1;
        } else {
            self.cursor = 0;
        }
    }

    /// Move to the previous track, staying put on the first
    pub fn retreat(&mut self) {
        if self.cursor != 0 {
            self.cursor -= 1;
        }
    }

    /// Go back to the first track
    pub fn restart(&mut self) {
        self.cursor = 0;
    }

    /// Append a track unless an equal one is already present
    ///
    /// Returns whether the track was added. Only additions are logged.
    pub fn add_track(&mut self, track: Track, log: &mut EventLog) -> bool {
        let title = track.title().to_string();
        if !self.add_track_silently(track) {
            log::debug!("'{}' already in {}, not added", title, self.name);
            return false;
        }
        log.log_event(format!("Added {} to {}", title, self.name));
        true
    }

    /// Same as [`Playlist::add_track`] but never logs; used when loading from a store
    pub fn add_track_silently(&mut self, track: Track) -> bool {
        if self.tracks.contains(&track) {
            return false;
        }
        self.tracks.push(track);
        true
    }

    /// Remove the first track with this title and restart playback
    ///
    /// The cursor is reset whether or not anything matched. Returns whether
    /// a track was removed.
    pub fn remove_by_title(&mut self, title: &str, log: &mut EventLog) -> bool {
        let removed = match self.find_index(title) {
            Some(index) => {
                self.tracks.remove(index);
                log.log_event(format!("Removed {} from {}", title, self.name));
                true
            }
            None => false,
        };
        self.restart();
        removed
    }

    /// Move a track to a 1-based position and restart playback
    ///
    /// The track is taken out through the removal path (so the removal is
    /// logged) and reinserted; `position` counts in the sequence after that
    /// removal, so `1..=num_tracks()` is valid. Nothing changes on error.
    pub fn move_track(
        &mut self,
        track: &Track,
        position: usize,
        log: &mut EventLog,
    ) -> Result<(), PlaylistError> {
        let index = self
            .tracks
            .iter()
            .position(|t| t == track)
            .ok_or_else(|| PlaylistError::TrackNotFound(track.title().to_string()))?;

        let len = self.tracks.len();
        if position == 0 || position > len {
            return Err(PlaylistError::PositionOutOfRange { position, len });
        }

        let moved = self.tracks.remove(index);
        log.log_event(format!("Removed {} from {}", moved.title(), self.name));
        self.restart();

        self.tracks.insert(position - 1, moved);
        self.restart();
        Ok(())
    }

    /// Mutable access to the sequence for the reordering operations
    pub(super) fn tracks_mut(&mut self) -> &mut Vec<Track> {
        &mut self.tracks
    }
}

impl fmt::Display for Playlist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} has {} song(s)\nSongs:", self.name, self.tracks.len())?;
        for track in &self.tracks {
            write!(f, "\n  {}", track)?;
        }
        Ok(())
    }
}
