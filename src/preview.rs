//! Read-only peek at the most recent entries of a notes file.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::render;
use crate::scan;

/// Renders the trailing headings of a notes file without opening an
/// editor or reading the whole file.
pub struct Preview<W> {
    out: W,
    notes_path: PathBuf,
    heading_count: usize,
    heading_level: u8,
}

impl<W: Write> Preview<W> {
    pub fn new(out: W, notes_path: PathBuf, heading_count: usize, heading_level: u8) -> Self {
        Self { out, notes_path, heading_count, heading_level }
    }

    /// Scan the file backward for the most recent headings and render
    /// them. A missing or unreadable file surfaces the open error.
    pub fn peek(&mut self) -> io::Result<()> {
        let mut file = File::open(&self.notes_path)?;
        let content = scan::tail_headings(&mut file, self.heading_count, self.heading_level)?;
        render::render(&mut self.out, &content, render::color_enabled())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn peek_renders_only_the_requested_tail() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.dump.md");
        fs::write(
            &path,
            "# Notes\n\n## Mon, 01 Jan 2024\n\nolder entry\n\n## Tue, 02 Jan 2024\n\nnewer entry\n",
        )
        .unwrap();

        let mut out = Vec::new();
        Preview::new(&mut out, path, 1, 2).peek().unwrap();
        let rendered = String::from_utf8(out).unwrap();
        assert!(rendered.contains("newer entry"));
        assert!(!rendered.contains("older entry"));
    }

    #[test]
    fn peek_on_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut out = Vec::new();
        let err = Preview::new(&mut out, dir.path().join("absent.md"), 1, 2)
            .peek()
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
