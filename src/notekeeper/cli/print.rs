use chrono::{DateTime, Utc};
use colored::Colorize;
use notekeeper::api::{CmdMessage, MessageLevel};
use notekeeper::model::{Draft, Note};
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 16;
const FAVOURITE_MARKER: &str = "★";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_notes(notes: &[Note]) {
    for (i, note) in notes.iter().enumerate() {
        let idx_str = format!("{}. ", i + 1);
        let left_prefix = if note.favourite {
            format!("  {} ", FAVOURITE_MARKER)
        } else {
            "    ".to_string()
        };
        let id_str = format!(" {} ", note.id);

        let preview: String = note
            .text
            .chars()
            .take(50)
            .map(|c| if c == '\n' { ' ' } else { c })
            .collect();
        let title_content = match (note.title.is_empty(), preview.is_empty()) {
            (true, _) => preview,
            (false, true) => note.title.clone(),
            (false, false) => format!("{} {}", note.title, preview),
        };

        let fixed_width = left_prefix.width() + idx_str.width() + id_str.width() + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed_width);
        let title_display = truncate_to_width(&title_content, available);
        let padding = available.saturating_sub(title_display.width());

        println!(
            "{}{}{}{}{}{}",
            left_prefix.yellow(),
            idx_str,
            title_display,
            " ".repeat(padding),
            id_str.dimmed(),
            format_time_ago(note.update_date).dimmed()
        );
    }
}

pub(super) fn print_draft(draft: &Draft) {
    let status = if !draft.is_note_dialog_visible {
        "closed".dimmed()
    } else if draft.is_note_new {
        "new".green()
    } else {
        "editing".yellow()
    };
    let title = if draft.note_title.is_empty() {
        "(untitled)".dimmed()
    } else {
        draft.note_title.bold()
    };
    let favourite = if draft.note_is_favourite {
        format!(" {}", FAVOURITE_MARKER)
    } else {
        String::new()
    };

    println!("[{}] {}{}", status, title, favourite.yellow());
    if !draft.note_id.is_empty() {
        println!("{}", draft.note_id.dimmed());
    }
    println!(
        "{}",
        format!(
            "theme: {}  font: {}  preset: {}",
            draft.note_theme, draft.note_font, draft.note_preset
        )
        .dimmed()
    );
    println!("--------------------------------");
    println!("{}", draft.note_text);
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
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

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let time_str = Formatter::new().convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_wide_text() {
        assert_eq!(truncate_to_width("hello", 10), "hello");
        assert_eq!(truncate_to_width("hello world", 6), "hello…");
    }

    #[test]
    fn time_ago_is_right_aligned() {
        let s = format_time_ago(Utc::now() - chrono::Duration::minutes(5));
        assert_eq!(s.chars().count(), TIME_WIDTH);
        assert_eq!(s.trim_start(), "5 minutes ago");
    }
}
