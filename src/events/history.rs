use chrono::{DateTime, Local};
use std::fmt;

/// Description recorded by [`EventLog::clear`]
pub const LOG_CLEARED: &str = "Event log cleared.";

/// A single logged playlist change
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    description: String,
    date: DateTime<Local>,
}

impl Event {
    /// Create an event stamped with the current time
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            date: Local::now(),
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn date(&self) -> DateTime<Local> {
        self.date
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.date.format("%a %b %e %H:%M:%S %Y"), self.description)
    }
}

/// Append-only, chronological record of playlist changes
///
/// Constructed explicitly and handed to whatever owns the playlist; the
/// playlist operations that mutate take it as `&mut EventLog`.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<Event>,
}

impl EventLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event stamped with the current time
    pub fn log_event(&mut self, description: impl Into<String>) {
        let event = Event::new(description);
        log::debug!("event: {}", event.description());
        self.events.push(event);
    }

    /// Drop all events, leaving only a marker recording the clear
    pub fn clear(&mut self) {
        self.events.clear();
        self.log_event(LOG_CLEARED);
    }

    /// Events in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Event> {
        self.events.iter()
    }

    /// Most recent event
    pub fn last(&self) -> Option<&Event> {
        self.events.last()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl<'a> IntoIterator for &'a EventLog {
    type Item = &'a Event;
    type IntoIter = std::slice::Iter<'a, Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
