//! Append path: format an entry for its kind and write it to the notes
//! file, inserting a date heading when the day changes.

use std::env;
use std::fs::{self, OpenOptions};
use std::io::{self, Read, Seek, Write};
use std::path::Path;
use std::process::{Command, Stdio};

use chrono::Local;

use crate::config::Config;
use crate::render;
use crate::scan;
use crate::text::{sentence_case, word_wrap};

/// Display format for date headings, one per day of appended entries.
pub const DATE_HEADING_FORMAT: &str = "%a, %d %b %Y";

const WRAP_WIDTH: usize = 80;

/// The kinds of entry the tool can append.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteKind {
    Bookmark,
    Dump,
    Todo,
    Issue,
}

impl NoteKind {
    /// Title written as the H1 when a notes file is first created.
    pub fn label(self) -> &'static str {
        match self {
            NoteKind::Bookmark => "Bookmarks",
            NoteKind::Dump => "Notes",
            NoteKind::Todo => "Todo",
            NoteKind::Issue => "Issues",
        }
    }

    /// Component of the default file name, `notes.<slug>.md`.
    pub fn slug(self) -> &'static str {
        match self {
            NoteKind::Bookmark => "bookmark",
            NoteKind::Dump => "dump",
            NoteKind::Todo => "todo",
            NoteKind::Issue => "issue",
        }
    }
}

/// Issue lifecycle states. New issues always open as [`Status::Open`];
/// the other states are flipped by editing the file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Status {
    #[default]
    Open,
    InProgress,
    Closed,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Open => write!(f, "open"),
            Status::InProgress => write!(f, "in progress"),
            Status::Closed => write!(f, "closed"),
        }
    }
}

/// A fully specified entry, ready to be rendered to markdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Bookmark {
        url: String,
        description: String,
        tags: Vec<String>,
    },
    Dump {
        content: String,
    },
    Todo {
        content: String,
    },
    Issue {
        title: String,
        description: String,
        tags: Vec<String>,
    },
}

impl Entry {
    pub fn kind(&self) -> NoteKind {
        match self {
            Entry::Bookmark { .. } => NoteKind::Bookmark,
            Entry::Dump { .. } => NoteKind::Dump,
            Entry::Todo { .. } => NoteKind::Todo,
            Entry::Issue { .. } => NoteKind::Issue,
        }
    }

    /// Render the entry as the markdown appended to the notes file.
    /// Issues carry their own level-2 heading, which is why the append
    /// path skips the date heading for them.
    pub fn to_markdown(&self) -> String {
        match self {
            Entry::Bookmark { url, description, tags } => {
                let mut line = format!("[{description}]({url})");
                if !tags.is_empty() {
                    line.push(' ');
                    line.push_str(&format_tags(tags));
                }
                format!("{line}\n\n")
            }
            Entry::Dump { content } => {
                format!("{}\n", word_wrap(&sentence_case(content), WRAP_WIDTH))
            }
            Entry::Todo { content } => {
                let item = format!("- [ ] {}", sentence_case(content));
                format!("{}\n", word_wrap(&item, WRAP_WIDTH))
            }
            Entry::Issue { title, description, tags } => {
                let mut md = format!("\n## {title}\n\nStatus: {}\n", Status::default());
                if !description.is_empty() {
                    md.push('\n');
                    md.push_str(&word_wrap(description, WRAP_WIDTH));
                }
                if !tags.is_empty() {
                    md.push('\n');
                    md.push_str(&format!("Tags: {}\n", format_tags(tags)));
                }
                md
            }
        }
    }
}

/// Append the entry described by `config` to its notes file, previewing
/// the result unless running quiet. With `edit_file` set the editor is
/// opened on the file instead and nothing is appended.
pub fn append(config: &Config) -> io::Result<()> {
    validate(config)?;
    setup_file(&config.notes_path, config.kind.label())?;
    if config.edit_file {
        return open_editor(&config.notes_path);
    }

    let entry = entry_from(config);
    let mut markdown = entry.to_markdown();
    let mut file = OpenOptions::new()
        .read(true)
        .append(true)
        .open(&config.notes_path)?;
    if entry.kind() != NoteKind::Issue {
        if let Some(heading) = date_heading(&mut file)? {
            markdown = format!("\n{heading}\n\n{markdown}");
        }
    }
    file.write_all(markdown.as_bytes())?;

    if !config.quiet {
        let tail = scan::tail_headings(&mut file, 1, 2)?;
        render::render(&mut io::stdout(), &tail, render::color_enabled())?;
    }
    Ok(())
}

fn validate(config: &Config) -> io::Result<()> {
    if config.content.is_empty() && !config.edit_file && config.kind != NoteKind::Issue {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "nothing to note here",
        ));
    }
    Ok(())
}

fn entry_from(config: &Config) -> Entry {
    match config.kind {
        NoteKind::Bookmark => Entry::Bookmark {
            url: config.content.clone(),
            description: config.description.clone(),
            tags: config.tags.clone(),
        },
        NoteKind::Dump => Entry::Dump { content: config.content.clone() },
        NoteKind::Todo => Entry::Todo { content: config.content.clone() },
        NoteKind::Issue => Entry::Issue {
            title: config.title.clone(),
            description: config.description.clone(),
            tags: config.tags.clone(),
        },
    }
}

/// Create the parent directory and seed the file with its H1 when missing.
fn setup_file(path: &Path, label: &str) -> io::Result<()> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() && !dir.exists() {
            fs::create_dir_all(dir)?;
        }
    }
    if !path.exists() {
        fs::write(path, format!("# {label}\n"))?;
    }
    Ok(())
}

/// Today's date heading, to be inserted when the most recent level-2
/// heading in the file is not from today. Consumes the scanner with a
/// quota of one heading, so only the file tail is read.
fn date_heading<F>(file: &mut F) -> io::Result<Option<String>>
where
    F: Read + Seek,
{
    let tail = scan::tail_headings(file, 1, 2)?;
    let last = tail
        .lines()
        .find(|line| line.starts_with("##"))
        .unwrap_or_default();
    let previous = last.trim_start_matches("## ");
    let today = today_heading();
    if !last.is_empty() && previous == today {
        return Ok(None);
    }
    Ok(Some(format!("## {today}")))
}

/// Today's date as it appears in entry headings.
pub fn today_heading() -> String {
    Local::now().format(DATE_HEADING_FORMAT).to_string()
}

fn format_tags(tags: &[String]) -> String {
    tags.iter()
        .map(|tag| tag.trim().trim_start_matches('#'))
        .filter(|tag| !tag.is_empty())
        .map(|tag| format!("#{tag}"))
        .collect::<Vec<_>>()
        .join(" ")
}

fn open_editor(path: &Path) -> io::Result<()> {
    let editor = env::var("EDITOR").unwrap_or_else(|_| "nvim".to_string());
    let status = Command::new(&editor)
        .arg(path)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()?;
    if !status.success() {
        return Err(io::Error::other(format!(
            "{editor} exited with {status}"
        )));
    }
    Ok(())
}
