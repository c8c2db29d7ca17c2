//! Terminal rendering for markdown previews.
//!
//! Walks the pulldown-cmark event stream and emits lightly styled text:
//! headings and bullets get color, paragraphs are re-wrapped to the
//! terminal width. With color disabled the output is plain text with the
//! same content, which keeps test assertions stable.

use std::io::{self, Write};

use pulldown_cmark::{Event, HeadingLevel, Parser, Tag, TagEnd};
use terminal_size::{terminal_size, Width};
use yansi::Paint;

use crate::text::word_wrap;

const MAX_WIDTH: usize = 120;
const FALLBACK_WIDTH: usize = 80;

/// Styling categories used when coloring markdown output.
#[derive(Clone, Copy)]
enum Style {
    Heading,
    Bullet,
    Rule,
    Code,
}

pub fn color_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

/// Width used for wrapping body text: the terminal width when known,
/// capped so wide terminals stay readable.
fn wrap_width() -> usize {
    match terminal_size() {
        Some((Width(w), _)) => (w as usize).min(MAX_WIDTH),
        None => FALLBACK_WIDTH,
    }
}

/// Render markdown as styled terminal text and write it to `out`.
pub fn render(out: &mut impl Write, markdown: &str, use_color: bool) -> io::Result<()> {
    let text = render_to_string(markdown, use_color, wrap_width());
    writeln!(out, "{text}")
}

fn render_to_string(markdown: &str, use_color: bool, width: usize) -> String {
    let mut rendered = String::new();
    let mut paragraph = String::new();
    let mut list_depth: usize = 0;
    let mut in_heading = false;
    let mut in_item = false;
    let mut in_code_block = false;

    for event in Parser::new(markdown) {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                flush_paragraph(&mut rendered, &mut paragraph, width);
                rendered.push('\n');
                push_styled(&mut rendered, heading_mark(level), Style::Heading, use_color);
                in_heading = true;
            }
            Event::End(TagEnd::Heading(_)) => {
                in_heading = false;
                rendered.push('\n');
            }
            Event::Start(Tag::List(_)) => list_depth += 1,
            Event::End(TagEnd::List(_)) => {
                list_depth = list_depth.saturating_sub(1);
                rendered.push('\n');
            }
            Event::Start(Tag::Item) => {
                rendered.push_str(&"  ".repeat(list_depth.saturating_sub(1)));
                push_styled(&mut rendered, "- ", Style::Bullet, use_color);
                in_item = true;
            }
            Event::End(TagEnd::Item) => {
                rendered.push_str(paragraph.trim_end());
                String::clear(&mut paragraph);
                rendered.push('\n');
                in_item = false;
            }
            Event::Start(Tag::CodeBlock(_)) => {
                flush_paragraph(&mut rendered, &mut paragraph, width);
                in_code_block = true;
            }
            Event::End(TagEnd::CodeBlock) => in_code_block = false,
            Event::End(TagEnd::Paragraph) => {
                flush_paragraph(&mut rendered, &mut paragraph, width);
            }
            Event::Text(text) => {
                if in_heading {
                    push_styled(&mut rendered, &text, Style::Heading, use_color);
                } else if in_code_block {
                    push_styled(&mut rendered, &text, Style::Code, use_color);
                } else {
                    paragraph.push_str(&text);
                }
            }
            Event::Code(code) => {
                if in_heading {
                    push_styled(&mut rendered, &code, Style::Heading, use_color);
                } else {
                    // Styling inline code in place would confuse the wrap
                    // accounting, so it goes through the paragraph buffer
                    // with its backticks restored.
                    paragraph.push('`');
                    paragraph.push_str(&code);
                    paragraph.push('`');
                }
            }
            Event::SoftBreak | Event::HardBreak => {
                if in_item {
                    rendered.push_str(paragraph.trim_end());
                    String::clear(&mut paragraph);
                    rendered.push('\n');
                } else {
                    paragraph.push(' ');
                }
            }
            Event::Rule => {
                flush_paragraph(&mut rendered, &mut paragraph, width);
                push_styled(&mut rendered, "\n---\n", Style::Rule, use_color);
            }
            Event::Html(html) => rendered.push_str(&html),
            _ => {}
        }
    }
    flush_paragraph(&mut rendered, &mut paragraph, width);

    rendered.trim().to_string()
}

fn flush_paragraph(rendered: &mut String, paragraph: &mut String, width: usize) {
    if paragraph.trim().is_empty() {
        paragraph.clear();
        return;
    }
    rendered.push_str(&word_wrap(paragraph.trim(), width));
    paragraph.clear();
}

fn heading_mark(level: HeadingLevel) -> &'static str {
    match level {
        HeadingLevel::H1 => "# ",
        HeadingLevel::H2 => "## ",
        HeadingLevel::H3 => "### ",
        HeadingLevel::H4 => "#### ",
        HeadingLevel::H5 => "##### ",
        HeadingLevel::H6 => "###### ",
    }
}

fn push_styled(buf: &mut String, text: &str, style: Style, use_color: bool) {
    if !use_color {
        buf.push_str(text);
        return;
    }
    let painted = match style {
        Style::Heading => Paint::cyan(text).bold().to_string(),
        Style::Bullet => Paint::yellow(text).bold().to_string(),
        Style::Rule => Paint::new(text).dim().to_string(),
        Style::Code => Paint::blue(text).to_string(),
    };
    buf.push_str(&painted);
}
