//! Reordering operations: arrange by field, shuffle, reverse

use super::{Playlist, Track};
use crate::events::EventLog;
use rand::seq::SliceRandom;
use rand::Rng;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Field a playlist can be arranged by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrangeKey {
    /// Alphabetical by song title
    Title,

    /// Ascending by duration
    Duration,

    /// Alphabetical by artist name
    Artist,

    /// Alphabetical by genre
    Genre,
}

impl ArrangeKey {
    /// Tail of the "Arranged <name> in ..." event
    pub fn order_description(&self) -> &'static str {
        match self {
            ArrangeKey::Title => "alphabetical order of song titles",
            ArrangeKey::Duration => "ascending order of durations",
            ArrangeKey::Artist => "alphabetical order of artist names",
            ArrangeKey::Genre => "alphabetical order of genres",
        }
    }

    fn compare(&self, a: &Track, b: &Track) -> Ordering {
        match self {
            ArrangeKey::Title => a.title().cmp(b.title()),
            ArrangeKey::Duration => a.duration_secs().cmp(&b.duration_secs()),
            ArrangeKey::Artist => a.artist().cmp(b.artist()),
            ArrangeKey::Genre => a.genre().cmp(b.genre()),
        }
    }
}

impl fmt::Display for ArrangeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ArrangeKey::Title => "title",
            ArrangeKey::Duration => "duration",
            ArrangeKey::Artist => "artist",
            ArrangeKey::Genre => "genre",
        };
        f.write_str(name)
    }
}

impl FromStr for ArrangeKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "title" => Ok(ArrangeKey::Title),
            "duration" | "time" => Ok(ArrangeKey::Duration),
            "artist" => Ok(ArrangeKey::Artist),
            "genre" => Ok(ArrangeKey::Genre),
            other => Err(format!("unknown arrange key: {}", other)),
        }
    }
}

impl Playlist {
    /// Stable ascending sort on one field, then restart playback
    ///
    /// Tracks with equal keys keep their current relative order. An empty
    /// playlist is left alone and nothing is logged.
    pub fn arrange_by(&mut self, key: ArrangeKey, log: &mut EventLog) {
        if self.is_empty() {
            log::debug!("{} is empty, nothing to arrange", self.name());
            return;
        }

        // `sort_by` is stable, which gives the (key, original index) order
        self.tracks_mut().sort_by(|a, b| key.compare(a, b));
        self.restart();

        log.log_event(format!(
            "Arranged {} in {}",
            self.name(),
            key.order_description()
        ));
    }

    pub fn arrange_by_title(&mut self, log: &mut EventLog) {
        self.arrange_by(ArrangeKey::Title, log);
    }

    pub fn arrange_by_duration(&mut self, log: &mut EventLog) {
        self.arrange_by(ArrangeKey::Duration, log);
    }

    pub fn arrange_by_artist(&mut self, log: &mut EventLog) {
        self.arrange_by(ArrangeKey::Artist, log);
    }

    pub fn arrange_by_genre(&mut self, log: &mut EventLog) {
        self.arrange_by(ArrangeKey::Genre, log);
    }

    /// Randomly permute the tracks and restart playback
    pub fn shuffle(&mut self, log: &mut EventLog) {
        self.shuffle_with(&mut rand::thread_rng(), log);
    }

    /// Shuffle with a caller-supplied random source
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R, log: &mut EventLog) {
        self.tracks_mut().shuffle(rng);
        self.restart();
        log.log_event(format!("Shuffled {}", self.name()));
    }

    /// Reverse the track order
    ///
    /// Unlike the other reorderings this leaves the cursor value untouched.
    pub fn reverse(&mut self, log: &mut EventLog) {
        self.tracks_mut().reverse();
        log.log_event("Reversed playlist order");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn build(tracks: &[(&str, &str, u32, &str)]) -> (Playlist, EventLog) {
        let mut log = EventLog::new();
        let mut playlist = Playlist::new("Mix");
        for (title, artist, duration, genre) in tracks {
            playlist.add_track(Track::new(*title, *artist, *duration, *genre), &mut log);
        }
        (playlist, log)
    }

    #[test]
    fn test_arrange_by_title() {
        let (mut playlist, mut log) = build(&[
            ("B", "x", 1, "g"),
            ("A", "x", 2, "g"),
            ("C", "x", 3, "g"),
        ]);
        playlist.advance();
        let before = log.len();

        playlist.arrange_by_title(&mut log);

        assert_eq!(playlist.titles(), vec!["A", "B", "C"]);
        assert_eq!(playlist.cursor(), 0);
        assert_eq!(log.len(), before + 1);
        assert_eq!(
            log.last().unwrap().description(),
            "Arranged Mix in alphabetical order of song titles"
        );
    }

    #[test]
    fn test_arrange_by_duration_keeps_ties_in_order() {
        let (mut playlist, mut log) = build(&[
            ("Song1", "x", 11, "g"),
            ("Song2", "x", 10, "g"),
            ("Song3", "x", 10, "g"),
        ]);

        playlist.arrange_by_duration(&mut log);

        assert_eq!(playlist.titles(), vec!["Song2", "Song3", "Song1"]);
        assert_eq!(
            log.last().unwrap().description(),
            "Arranged Mix in ascending order of durations"
        );
    }

    #[test]
    fn test_arrange_by_artist_and_genre() {
        let (mut playlist, mut log) = build(&[
            ("One", "Zed", 100, "Rock"),
            ("Two", "Abba", 100, "Pop"),
            ("Three", "Abba", 90, "Jazz"),
            ("Four", "Moby", 80, "Pop"),
        ]);

        playlist.arrange_by_artist(&mut log);
        assert_eq!(playlist.titles(), vec!["Two", "Three", "Four", "One"]);
        assert_eq!(
            log.last().unwrap().description(),
            "Arranged Mix in alphabetical order of artist names"
        );

        playlist.arrange_by_genre(&mut log);
        assert_eq!(playlist.titles(), vec!["Three", "Two", "Four", "One"]);
        assert_eq!(
            log.last().unwrap().description(),
            "Arranged Mix in alphabetical order of genres"
        );
    }

    #[test]
    fn test_arrange_is_case_sensitive_lexicographic() {
        let (mut playlist, mut log) = build(&[
            ("banana", "x", 1, "g"),
            ("Cherry", "x", 2, "g"),
            ("apple", "x", 3, "g"),
        ]);
        playlist.arrange_by_title(&mut log);
        assert_eq!(playlist.titles(), vec!["Cherry", "apple", "banana"]);
    }

    #[test]
    fn test_arrange_empty_is_noop() {
        let mut log = EventLog::new();
        let mut playlist = Playlist::new("Empty");
        playlist.arrange_by(ArrangeKey::Genre, &mut log);
        assert!(log.is_empty());
        assert!(playlist.is_empty());
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let tracks: Vec<(String, u32)> = (0..20).map(|i| (format!("T{:02}", i), i + 1)).collect();
        let mut log = EventLog::new();
        let mut playlist = Playlist::new("Mix");
        for (title, duration) in &tracks {
            playlist.add_track(Track::new(title.as_str(), "x", *duration, "g"), &mut log);
        }
        playlist.advance();
        let before = log.len();

        let mut rng = StdRng::seed_from_u64(7);
        playlist.shuffle_with(&mut rng, &mut log);

        let mut titles: Vec<&str> = playlist.titles();
        titles.sort();
        let expected: Vec<&str> = tracks.iter().map(|(t, _)| t.as_str()).collect();
        assert_eq!(titles, expected);
        assert_eq!(playlist.cursor(), 0);
        assert_eq!(log.len(), before + 1);
        assert_eq!(log.last().unwrap().description(), "Shuffled Mix");
    }

    #[test]
    fn test_shuffle_is_seed_deterministic() {
        let tracks = [
            ("A", "x", 1, "g"),
            ("B", "x", 2, "g"),
            ("C", "x", 3, "g"),
            ("D", "x", 4, "g"),
        ];
        let (mut first, mut log) = build(&tracks);
        let (mut second, _) = build(&tracks);

        first.shuffle_with(&mut StdRng::seed_from_u64(42), &mut log);
        second.shuffle_with(&mut StdRng::seed_from_u64(42), &mut log);

        assert_eq!(first.titles(), second.titles());
    }

    #[test]
    fn test_reverse_keeps_cursor() {
        let (mut playlist, mut log) = build(&[
            ("A", "x", 1, "g"),
            ("B", "x", 2, "g"),
            ("C", "x", 3, "g"),
        ]);
        playlist.advance();
        playlist.advance();
        let before = log.len();

        playlist.reverse(&mut log);

        assert_eq!(playlist.titles(), vec!["C", "B", "A"]);
        assert_eq!(playlist.cursor(), 2);
        assert_eq!(playlist.now_playing().unwrap().title(), "A");
        assert_eq!(log.len(), before + 1);
        assert_eq!(log.last().unwrap().description(), "Reversed playlist order");
    }

    #[test]
    fn test_arrange_key_parsing() {
        assert_eq!("Title".parse::<ArrangeKey>(), Ok(ArrangeKey::Title));
        assert_eq!("time".parse::<ArrangeKey>(), Ok(ArrangeKey::Duration));
        assert_eq!("genre".parse::<ArrangeKey>(), Ok(ArrangeKey::Genre));
        assert!("tempo".parse::<ArrangeKey>().is_err());
        assert_eq!(ArrangeKey::Artist.to_string(), "artist");
    }
}
