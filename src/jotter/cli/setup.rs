use clap::{Parser, Subcommand};
use jotter::model::NoteId;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "jot", bin_name = "jot", version)]
#[command(about = "Local, tag-aware note taking", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory holding notes and config [default: $JOTTER_HOME or the platform data dir]
    #[arg(long, global = true, value_name = "PATH")]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List notes, optionally filtered by text and tag
    #[command(alias = "ls", display_order = 1)]
    List {
        /// Case-insensitive text searched in titles, content and tags
        #[arg(short, long)]
        search: Option<String>,

        /// Only notes carrying this exact tag
        #[arg(short, long)]
        tag: Option<String>,
    },

    /// Create a note
    #[command(alias = "n", display_order = 2)]
    New {
        /// Title of the note (opens the editor when omitted, unless --no-editor)
        title: Option<String>,

        /// Content of the note (read from stdin when piped)
        #[arg(short, long)]
        content: Option<String>,

        /// Comma-separated tags, e.g. "home, errands"
        #[arg(short, long)]
        tags: Option<String>,

        /// Skip opening the editor
        #[arg(long)]
        no_editor: bool,
    },

    /// Edit a note (opens the editor when no field flags are given)
    #[command(alias = "e", display_order = 3)]
    Edit {
        /// Id of the note
        id: NoteId,

        /// Replace the title
        #[arg(long)]
        title: Option<String>,

        /// Replace the content
        #[arg(short, long)]
        content: Option<String>,

        /// Replace all tags with this comma-separated list
        #[arg(short, long)]
        tags: Option<String>,

        /// Remove a tag (repeatable)
        #[arg(long, value_name = "TAG")]
        untag: Vec<String>,
    },

    /// Show one or more notes in full
    #[command(alias = "v", display_order = 4)]
    View {
        /// Ids of the notes
        #[arg(required = true, num_args = 1..)]
        ids: Vec<NoteId>,
    },

    /// Delete one or more notes
    #[command(alias = "rm", display_order = 5)]
    Delete {
        /// Ids of the notes
        #[arg(required = true, num_args = 1..)]
        ids: Vec<NoteId>,
    },

    /// List every tag in use
    #[command(display_order = 6)]
    Tags,

    /// Get or set configuration
    #[command(display_order = 7)]
    Config {
        /// Configuration key (storage-key, preview-chars)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Initialize the data directory (optional utility)
    #[command(display_order = 8)]
    Init,
}
