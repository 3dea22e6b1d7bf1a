use anyhow::Result;
use clap::builder::NonEmptyStringValueParser;
use clap::{Parser, Subcommand};
use playlist_manager::store::DEFAULT_STORE_PATH;
use playlist_manager::{ArrangeKey, Command, Session, SessionConfig, Track};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "playlist-manager")]
#[command(about = "Build, reorder and play through a stored music playlist", long_about = None)]
struct Args {
    /// Path to the playlist file
    #[arg(short = 's', long, default_value = DEFAULT_STORE_PATH)]
    store: String,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Don't print the event log on exit
    #[arg(long)]
    no_events: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand, Debug)]
enum Action {
    /// Start a new, empty playlist (overwrites the store)
    New {
        /// Playlist name
        name: String,
    },

    /// Add a song
    Add {
        #[arg(value_parser = NonEmptyStringValueParser::new())]
        title: String,
        #[arg(value_parser = NonEmptyStringValueParser::new())]
        artist: String,
        /// Duration in seconds
        #[arg(value_parser = clap::value_parser!(u32).range(1..))]
        duration: u32,
        #[arg(value_parser = NonEmptyStringValueParser::new())]
        genre: String,
    },

    /// Remove a song by title
    Remove { title: String },

    /// Move a song to a 1-based position
    Move { title: String, position: usize },

    /// Arrange by title, duration (or time), artist or genre
    Arrange { key: ArrangeKey },

    /// Shuffle the playlist
    Shuffle,

    /// Reverse the playlist order
    Reverse,

    /// Find a song by title
    Find { title: String },

    /// Show all songs in the playlist
    Show,

    /// Step through the playlist from the first song
    Play {
        /// Songs to skip forward
        #[arg(short = 'n', long, default_value = "0")]
        next: usize,

        /// Songs to step back afterwards
        #[arg(short = 'p', long, default_value = "0")]
        previous: usize,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Expand ~ in paths
    let store_path = PathBuf::from(shellexpand::tilde(&args.store).into_owned());

    // Each invocation is one command, so changes are written straight back
    let config = SessionConfig::new(store_path)
        .with_event_printing(!args.no_events)
        .with_autosave(true);

    let mut session = match &args.action {
        Action::New { name } => Session::create(config, name.clone()),
        _ => Session::open(config)?,
    };

    for command in commands_for(args.action) {
        let outcome = session.execute(command)?;
        println!("{}", outcome.message);
    }

    if session.config().print_events_on_exit {
        for event in session.events() {
            println!("\n{}", event);
        }
    }

    Ok(())
}

/// Translate a subcommand into the commands it runs
fn commands_for(action: Action) -> Vec<Command> {
    match action {
        Action::New { name } => vec![Command::New(name)],
        Action::Add {
            title,
            artist,
            duration,
            genre,
        } => vec![Command::Add(Track::new(title, artist, duration, genre))],
        Action::Remove { title } => vec![Command::Remove(title)],
        Action::Move { title, position } => vec![Command::Move { title, position }],
        Action::Arrange { key } => vec![Command::Arrange(key)],
        Action::Shuffle => vec![Command::Shuffle],
        Action::Reverse => vec![Command::Reverse],
        Action::Find { title } => vec![Command::Find(title)],
        Action::Show => vec![Command::Show],
        Action::Play { next, previous } => {
            let mut commands = vec![Command::Replay];
            commands.extend(std::iter::repeat(Command::Next).take(next));
            commands.extend(std::iter::repeat(Command::Previous).take(previous));
            commands
        }
    }
}
