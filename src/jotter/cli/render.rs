//! # Rendering
//!
//! Turns command results into terminal text. Every function returns a `String`;
//! printing happens in the handlers. Colour comes from `colored`, which the
//! handlers switch on or off once from `console`'s terminal detection.

use colored::Colorize;
use jotter::api::{CmdMessage, EmptyState, MessageLevel};
use jotter::model::Note;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const LINE_WIDTH: usize = 100;
const INDENT: &str = "  ";
const BODY_INDENT: &str = "    ";

/// Everything the list view shows.
pub struct ListView<'a> {
    pub notes: &'a [Note],
    pub tags: &'a [String],
    pub selected_tag: &'a str,
    pub empty_state: Option<EmptyState>,
    pub preview_chars: usize,
    pub width: usize,
}

pub fn render_note_list(view: &ListView<'_>) -> String {
    let mut out = String::new();

    if !view.tags.is_empty() {
        out.push_str(&render_tag_chips(view.tags, view.selected_tag));
        out.push_str("\n\n");
    }

    match view.empty_state {
        Some(EmptyState::NoNotes) => {
            out.push_str(&format!(
                "{}\n",
                "No notes yet. Run `jot new` to create one!".dimmed()
            ));
            return out;
        }
        Some(EmptyState::NoMatches) => {
            out.push_str(&format!("{}\n", "No notes found".dimmed()));
            return out;
        }
        None => {}
    }

    for (i, note) in view.notes.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&render_card(note, view.preview_chars, view.width));
    }

    out
}

fn render_tag_chips(tags: &[String], selected: &str) -> String {
    let mut chips = vec![chip("All", selected.is_empty())];
    chips.extend(tags.iter().map(|t| chip(t, t == selected)));
    format!("{}{}", INDENT, chips.join("  "))
}

fn chip(name: &str, active: bool) -> String {
    if active {
        format!("[{}]", name).bold().blue().to_string()
    } else {
        name.to_string()
    }
}

fn render_card(note: &Note, preview_chars: usize, width: usize) -> String {
    let id = note.id.to_string();
    let available = width.saturating_sub(INDENT.width() + id.width() + 2);
    let title = truncate_to_width(&note.title, available);
    let padding = " ".repeat(available.saturating_sub(title.width()) + 2);

    let mut out = format!("{}{}{}{}\n", INDENT, title.bold(), padding, id.dimmed());

    if !note.content.is_empty() {
        let body_width = width.saturating_sub(BODY_INDENT.width());
        let text = truncate_to_width(&preview(&note.content, preview_chars), body_width);
        out.push_str(&format!("{}{}\n", BODY_INDENT, text.dimmed()));
    }

    if !note.tags.is_empty() {
        let tags: Vec<_> = note.tags.iter().map(|t| t.cyan().to_string()).collect();
        out.push_str(&format!("{}{}\n", BODY_INDENT, tags.join(" · ")));
    }

    out
}

/// First `max_chars` characters of the content on one line, with `...` when cut.
pub fn preview(content: &str, max_chars: usize) -> String {
    let flat: String = content
        .chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect();

    if flat.chars().count() > max_chars {
        let cut: String = flat.chars().take(max_chars).collect();
        format!("{}...", cut)
    } else {
        flat
    }
}

pub fn render_full_notes(notes: &[Note]) -> String {
    let mut out = String::new();
    for (i, note) in notes.iter().enumerate() {
        if i > 0 {
            out.push_str("\n================================\n\n");
        }
        out.push_str(&format!(
            "{} {}\n",
            note.id.to_string().yellow(),
            note.title.bold()
        ));
        if !note.tags.is_empty() {
            let tags: Vec<_> = note.tags.iter().map(String::as_str).collect();
            out.push_str(&format!("{}\n", tags.join(", ").cyan()));
        }
        out.push_str("--------------------------------\n");
        if !note.content.is_empty() {
            out.push_str(&note.content);
            out.push('\n');
        }
    }
    out
}

pub fn render_text_list(lines: &[String], empty_message: &str) -> String {
    if lines.is_empty() {
        return format!("{}\n", empty_message.dimmed());
    }
    let mut out = String::new();
    for line in lines {
        out.push_str(line);
        out.push('\n');
    }
    out
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    let mut out = String::new();
    for message in messages {
        let styled = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
            MessageLevel::Error => message.content.red(),
        };
        out.push_str(&format!("{}\n", styled));
    }
    out
}

pub fn print_messages(messages: &[CmdMessage]) {
    print!("{}", render_messages(messages));
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
