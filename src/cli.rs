use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// note - Make notes, todos, bookmarks, issues, right from your home.
///
/// Entries are appended to per-kind markdown files under a date heading,
/// and `peek` previews the most recent entries without opening an editor.
///
/// ```bash
/// note this is a quick note          # bare arguments append to the dump file
/// note todo fix the flaky test
/// note bookmark https://example.com -D "Example"
/// note issue "Broken build" "CI fails on main" -T bug,urgent
/// note peek -n 5                     # last five entries
/// note -e                            # open the notes file in $EDITOR
/// ```
///
/// Environment: NOTESFILE (notes file), NOTESPATH (global notes
/// directory for -g), PROJECT, EDIT, QUIET, NOTES_HEADINGS_COUNT,
/// NOTES_HEADINGS_LEVEL.
#[derive(Parser, Debug)]
#[command(name = "note", version)]
#[command(about = "Make notes, todos, bookmarks, issues, right from your home.")]
pub struct Cli {
    /// Append to the global notes directory ($NOTESPATH)
    #[arg(short, long, global = true)]
    pub global: bool,

    /// Path to the notes file
    #[arg(short, long, value_name = "PATH", global = true)]
    pub file: Option<PathBuf>,

    /// File notes under a registered project's directory
    #[arg(short, long, value_name = "NAME", global = true)]
    pub project: Option<String>,

    /// Open the notes file in the editor instead of appending
    #[arg(short, long, global = true)]
    pub edit: bool,

    /// Skip the preview after appending
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Note content, appended to the dump file (same as `note dump`)
    pub content: Vec<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Append a quick note to the dump file
    #[command(alias = "d")]
    Dump {
        /// Note content
        content: Vec<String>,
    },

    /// Append a todo item
    #[command(aliases = ["td", "t"])]
    Todo {
        /// Todo content
        content: Vec<String>,
    },

    /// Save a bookmark
    #[command(aliases = ["bm", "b"])]
    Bookmark {
        /// URL to bookmark
        url: String,

        /// Description used as the link text
        #[arg(short = 'D', long)]
        desc: Option<String>,

        /// Comma separated list of tags
        #[arg(short = 'T', long, value_delimiter = ',')]
        tags: Vec<String>,
    },

    /// Record an issue
    #[command(alias = "i")]
    Issue {
        /// Issue title
        title: String,

        /// Longer description of the issue
        description: Option<String>,

        /// Comma separated list of tags
        #[arg(short = 'T', long, value_delimiter = ',')]
        tags: Vec<String>,
    },

    /// Preview the most recent entries without opening an editor
    #[command(alias = "p")]
    Peek {
        /// Number of headings to preview
        #[arg(short = 'n', long = "count")]
        count: Option<usize>,

        /// Level of markdown heading to match
        #[arg(short, long)]
        level: Option<u8>,

        /// Peek at the bookmarks file
        #[arg(short, long)]
        bookmark: bool,

        /// Peek at the dump file
        #[arg(short, long)]
        dump: bool,

        /// Peek at the todo file
        #[arg(short, long)]
        todo: bool,

        /// Peek at the issues file
        #[arg(short, long)]
        issue: bool,
    },
}
