use super::{PlaylistDocument, StoreError};
use crate::model::Playlist;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs;
use std::path::Path;

const INDENT: &[u8] = b"    ";

/// Save a playlist to a JSON file, creating parent directories as needed
pub fn write_playlist(path: &Path, playlist: &Playlist) -> Result<(), StoreError> {
    let io_error = |source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_error)?;
    }

    let json = to_json_string(playlist)?;
    fs::write(path, json).map_err(io_error)?;

    log::info!(
        "Saved {} ({} tracks) to {:?}",
        playlist.name(),
        playlist.num_tracks(),
        path
    );
    Ok(())
}

/// Render a playlist as pretty-printed JSON
pub fn to_json_string(playlist: &Playlist) -> Result<String, StoreError> {
    let document = PlaylistDocument {
        name: playlist.name().to_string(),
        songs: playlist.tracks().to_vec(),
    };

    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    document.serialize(&mut serializer)?;

    // serde_json only ever emits UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
