//! Runtime configuration resolved from the command line and environment.
//!
//! The flag surface went through several hand-rolled revisions upstream;
//! everything now funnels through [`Config::resolve`], the single place
//! where flags, environment defaults and the project registry meet. The
//! environment is injected as a lookup function so resolution stays
//! testable without mutating process state.

use std::env;
use std::io;
use std::path::{Path, PathBuf};

use crate::cli::{Cli, Command};
use crate::note::NoteKind;
use crate::project::Registry;

pub const NOTESFILE_ENV: &str = "NOTESFILE";
pub const NOTESPATH_ENV: &str = "NOTESPATH";
pub const PROJECT_ENV: &str = "PROJECT";
pub const EDIT_ENV: &str = "EDIT";
pub const QUIET_ENV: &str = "QUIET";
pub const HEADING_COUNT_ENV: &str = "NOTES_HEADINGS_COUNT";
pub const HEADING_LEVEL_ENV: &str = "NOTES_HEADINGS_LEVEL";
pub const PROJECTS_FILE_ENV: &str = "NOTE_PROJECTS_FILE";

/// Number of trailing headings a peek shows by default.
pub const DEFAULT_HEADING_COUNT: usize = 3;

/// Heading level entries are filed under.
pub const DEFAULT_HEADING_LEVEL: u8 = 2;

/// Everything a run needs, resolved up front and threaded through by
/// value.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub kind: NoteKind,
    pub content: String,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub notes_path: PathBuf,
    pub heading_count: usize,
    pub heading_level: u8,
    pub peek: bool,
    pub edit_file: bool,
    pub quiet: bool,
}

impl Config {
    /// Single entry point translating the parsed command line plus
    /// environment defaults into one configuration value.
    pub fn resolve(cli: Cli) -> io::Result<Config> {
        Self::resolve_with(cli, |name| env::var(name).ok())
    }

    fn resolve_with<E>(cli: Cli, getenv: E) -> io::Result<Config>
    where
        E: Fn(&str) -> Option<String>,
    {
        let env_flag = |name: &str| getenv(name).is_some_and(|v| !v.is_empty());
        let edit_file = cli.edit || env_flag(EDIT_ENV);
        let quiet = cli.quiet || env_flag(QUIET_ENV);
        let project = cli
            .project
            .or_else(|| getenv(PROJECT_ENV).filter(|v| !v.is_empty()));
        let file = cli.file.or_else(|| {
            getenv(NOTESFILE_ENV)
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
        });

        let mut config = Config {
            kind: NoteKind::Dump,
            content: String::new(),
            title: String::new(),
            description: String::new(),
            tags: Vec::new(),
            notes_path: PathBuf::new(),
            heading_count: DEFAULT_HEADING_COUNT,
            heading_level: DEFAULT_HEADING_LEVEL,
            peek: false,
            edit_file,
            quiet,
        };

        match cli.command {
            None => config.content = cli.content.join(" "),
            Some(Command::Dump { content }) => config.content = content.join(" "),
            Some(Command::Todo { content }) => {
                config.kind = NoteKind::Todo;
                config.content = content.join(" ");
            }
            Some(Command::Bookmark { url, desc, tags }) => {
                config.kind = NoteKind::Bookmark;
                config.content = url;
                config.description = desc.unwrap_or_default();
                config.tags = tags;
            }
            Some(Command::Issue { title, description, tags }) => {
                config.kind = NoteKind::Issue;
                config.title = title;
                config.description = description.unwrap_or_default();
                config.tags = tags;
            }
            Some(Command::Peek { count, level, bookmark, dump: _, todo, issue }) => {
                config.peek = true;
                config.kind = peek_kind(bookmark, todo, issue);
                config.heading_count = count
                    .or_else(|| getenv(HEADING_COUNT_ENV).and_then(|v| v.parse().ok()))
                    .unwrap_or(DEFAULT_HEADING_COUNT);
                config.heading_level = level
                    .or_else(|| getenv(HEADING_LEVEL_ENV).and_then(|v| v.parse().ok()))
                    .unwrap_or(DEFAULT_HEADING_LEVEL);
            }
        }

        if config.heading_level == 0 || config.heading_level > 6 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "heading level must be between 1 and 6",
            ));
        }

        config.notes_path =
            resolve_notes_path(config.kind, project.as_deref(), cli.global, file, &getenv)?;
        Ok(config)
    }
}

/// The peek subcommand selects which notes file to read with the same
/// kind flags the append commands use; dump is the default.
fn peek_kind(bookmark: bool, todo: bool, issue: bool) -> NoteKind {
    if bookmark {
        NoteKind::Bookmark
    } else if todo {
        NoteKind::Todo
    } else if issue {
        NoteKind::Issue
    } else {
        NoteKind::Dump
    }
}

/// Precedence: a named project wins, then the global directory, then an
/// explicit file, then `notes.<kind>.md` in the working directory.
fn resolve_notes_path<E>(
    kind: NoteKind,
    project: Option<&str>,
    global: bool,
    file: Option<PathBuf>,
    getenv: &E,
) -> io::Result<PathBuf>
where
    E: Fn(&str) -> Option<String>,
{
    let filename = format!("notes.{}.md", kind.slug());
    if let Some(name) = project {
        let registry = Registry::load(registry_path(getenv)?)?;
        return match registry.get(name) {
            Some(project) => Ok(project.path.join(&filename)),
            None => Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("could not find project '{name}'"),
            )),
        };
    }
    let path = if global {
        match getenv(NOTESPATH_ENV) {
            Some(dir) if !dir.is_empty() => PathBuf::from(dir).join(&filename),
            _ => {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    "NOTESPATH is not set",
                ))
            }
        }
    } else if let Some(file) = file {
        file
    } else {
        env::current_dir()?.join(&filename)
    };
    register_best_effort(&path, getenv);
    Ok(path)
}

/// Remember the directory a note landed in so later runs can reach it
/// with `--project`. Failures never block the note itself, and the
/// duplicate-name rejection is expected on every run after the first.
fn register_best_effort<E>(notes_path: &Path, getenv: &E)
where
    E: Fn(&str) -> Option<String>,
{
    let Some(dir) = notes_path.parent() else { return };
    let Some(name) = dir.file_name().and_then(|n| n.to_str()) else { return };
    let Ok(registry_file) = registry_path(getenv) else { return };
    if let Ok(mut registry) = Registry::load(registry_file) {
        let _ = registry.add(name, dir, "");
    }
}

fn registry_path<E>(getenv: &E) -> io::Result<PathBuf>
where
    E: Fn(&str) -> Option<String>,
{
    if let Some(path) = getenv(PROJECTS_FILE_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(path));
    }
    crate::default_registry_path()
        .ok_or_else(|| io::Error::other("could not determine a config directory"))
}
