//! Playlist session: one playlist, its event log and its store
//!
//! Front-ends build [`Command`]s and hand them to [`Session::execute`],
//! the single dispatcher over the playlist operations.

pub mod command;
pub mod config;

pub use command::{Command, Outcome};
pub use config::SessionConfig;

use crate::events::EventLog;
use crate::model::Playlist;
use crate::store;
use anyhow::{Context, Result};

/// Owns the playlist being edited together with its change history
#[derive(Debug)]
pub struct Session {
    config: SessionConfig,
    playlist: Playlist,
    log: EventLog,
}

impl Session {
    /// Start a session on a new, empty playlist
    pub fn create(config: SessionConfig, name: impl Into<String>) -> Self {
        Self::with_playlist(config, Playlist::new(name))
    }

    /// Start a session on the playlist in the configured store
    pub fn open(config: SessionConfig) -> Result<Self> {
        let playlist = store::read_playlist(&config.store_path).with_context(|| {
            format!("Unable to read from file: {:?}", config.store_path)
        })?;
        Ok(Self::with_playlist(config, playlist))
    }

    /// Start a session on an existing playlist
    pub fn with_playlist(config: SessionConfig, playlist: Playlist) -> Self {
        Self {
            config,
            playlist,
            log: EventLog::new(),
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    pub fn events(&self) -> &EventLog {
        &self.log
    }

    /// Run one command against the playlist
    pub fn execute(&mut self, command: Command) -> Result<Outcome> {
        log::debug!("Executing {:?}", command);

        let outcome = match command {
            Command::New(name) => {
                self.playlist = Playlist::new(name);
                Outcome::changed(format!("Created {}", self.playlist.name()))
            }
            Command::Add(track) => {
                let title = track.title().to_string();
                if self.playlist.add_track(track, &mut self.log) {
                    Outcome::changed(format!("Added {} to {}", title, self.playlist.name()))
                } else {
                    Outcome::unchanged(format!("{} already in {}", title, self.playlist.name()))
                }
            }
            Command::Remove(title) => {
                if self.playlist.remove_by_title(&title, &mut self.log) {
                    Outcome::changed(format!("Removed {} from {}", title, self.playlist.name()))
                } else {
                    Outcome::unchanged(format!("{} not in {}", title, self.playlist.name()))
                }
            }
            Command::Move { title, position } => {
                let track = self
                    .playlist
                    .find_index(&title)
                    .and_then(|index| self.playlist.track(index))
                    .cloned()
                    .with_context(|| format!("{} not in {}", title, self.playlist.name()))?;
                self.playlist
                    .move_track(&track, position, &mut self.log)
                    .with_context(|| format!("Unable to move {}", title))?;
                Outcome::changed(format!("Moved {} to position {}", title, position))
            }
            Command::Arrange(key) => {
                self.playlist.arrange_by(key, &mut self.log);
                Outcome::changed(self.playlist.to_string())
            }
            Command::Shuffle => {
                self.playlist.shuffle(&mut self.log);
                Outcome::changed(self.playlist.to_string())
            }
            Command::Reverse => {
                self.playlist.reverse(&mut self.log);
                Outcome::changed(self.playlist.to_string())
            }
            Command::Find(title) => match self.playlist.find_index(&title) {
                Some(index) => {
                    let details = self
                        .playlist
                        .track(index)
                        .map(|t| t.details())
                        .unwrap_or_default();
                    Outcome::unchanged(format!("#{}\n{}", index + 1, details))
                }
                None => Outcome::unchanged(format!("{} not in {}", title, self.playlist.name())),
            },
            Command::Show => Outcome::unchanged(format!(
                "{}\nTotal duration: {} seconds",
                self.playlist,
                self.playlist.total_duration()
            )),
            Command::Next => {
                self.playlist.advance();
                Outcome::unchanged(self.now_playing_message())
            }
            Command::Previous => {
                self.playlist.retreat();
                Outcome::unchanged(self.now_playing_message())
            }
            Command::Replay => {
                self.playlist.restart();
                Outcome::unchanged(self.now_playing_message())
            }
            Command::NowPlaying => Outcome::unchanged(self.now_playing_message()),
            Command::Save => {
                self.save()?;
                Outcome::unchanged(format!(
                    "Saved {} to {:?}",
                    self.playlist.name(),
                    self.config.store_path
                ))
            }
            Command::Load => {
                let playlist = store::read_playlist(&self.config.store_path).with_context(|| {
                    format!("Unable to read from file: {:?}", self.config.store_path)
                })?;
                self.playlist = playlist;
                Outcome::unchanged(format!(
                    "Loaded {} from {:?}",
                    self.playlist.name(),
                    self.config.store_path
                ))
            }
        };

        if outcome.changed && self.config.autosave {
            self.save()?;
        }

        Ok(outcome)
    }

    /// Write the playlist to the configured store
    pub fn save(&self) -> Result<()> {
        store::write_playlist(&self.config.store_path, &self.playlist).with_context(|| {
            format!("Unable to write to file: {:?}", self.config.store_path)
        })
    }

    fn now_playing_message(&self) -> String {
        match self.playlist.now_playing() {
            Some(track) => format!("Now playing: {}\n{}", track, track.details()),
            None => format!("Nothing to play: {} is empty", self.playlist.name()),
        }
    }
}
