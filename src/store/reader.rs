use super::{PlaylistDocument, StoreError};
use crate::model::Playlist;
use std::fs;
use std::path::Path;

/// Load a playlist from a JSON file
pub fn read_playlist(path: &Path) -> Result<Playlist, StoreError> {
    log::info!("Loading playlist from {:?}", path);

    let data = fs::read_to_string(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let playlist = from_json_str(&data)?;

    log::info!(
        "Loaded {} ({} tracks)",
        playlist.name(),
        playlist.num_tracks()
    );
    Ok(playlist)
}

/// Build a playlist from JSON text
///
/// Songs are inserted in array order without logging; repeated songs
/// collapse to their first occurrence.
pub fn from_json_str(data: &str) -> Result<Playlist, StoreError> {
    let document: PlaylistDocument = serde_json::from_str(data)?;

    let mut playlist = Playlist::new(document.name);
    for track in document.songs {
        track.validate()?;
        if !playlist.add_track_silently(track) {
            log::debug!("Skipping duplicate song in {}", playlist.name());
        }
    }
    Ok(playlist)
}
