//! Session configuration

use crate::store::DEFAULT_STORE_PATH;
use std::path::PathBuf;

/// Configuration for a playlist session
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// JSON file the playlist is saved to and loaded from
    pub store_path: PathBuf,

    /// Print the event log when the session ends
    pub print_events_on_exit: bool,

    /// Save after every command that changes the playlist
    pub autosave: bool,
}

impl SessionConfig {
    /// Create a configuration for the given store file
    pub fn new(store_path: PathBuf) -> Self {
        Self {
            store_path,
            print_events_on_exit: true,
            autosave: false,
        }
    }

    /// Enable or disable the event log dump on exit
    pub fn with_event_printing(mut self, enabled: bool) -> Self {
        self.print_events_on_exit = enabled;
        self
    }

    /// Enable or disable saving after each change
    pub fn with_autosave(mut self, enabled: bool) -> Self {
        self.autosave = enabled;
        self
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new(PathBuf::from(DEFAULT_STORE_PATH))
    }
}
