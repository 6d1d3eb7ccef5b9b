//! Agenda capture from unstructured text.
//!
//! Two independent, stateless matchers pull `(title, raw due)` candidates
//! out of free text:
//! - the user shorthand `add agenda: <title> due: <YYYY-MM-DD HH:mm>`
//! - the assistant suggestion line `[agenda] <title> | <YYYY-MM-DD HH:mm>`
//!
//! Both hand the raw due string to the time codec; neither validates the
//! calendar itself.

use kairo_agenda::AgendaItem;
use kairo_core::timefmt::{format_due, is_due_shaped};

/// Match the user shorthand anywhere in a message.
///
/// The title runs from after `add agenda:` up to the first `due:` that is
/// followed by a date-shaped string; a payload whose `due:` clause is not
/// date-shaped yields no match at all (the caller falls through to the
/// completion path). Keywords are case-insensitive.
pub fn match_shorthand(text: &str) -> Option<(String, String)> {
    let lower = text.to_ascii_lowercase();
    let tag_pos = lower.find("add agenda:")?;
    let title_start = tag_pos + "add agenda:".len();

    let mut search = title_start;
    while let Some(rel) = lower[search..].find("due:") {
        let due_kw = search + rel;
        let after_due = due_kw + "due:".len();
        let candidate = text[after_due..].trim_start();
        if let Some(shaped) = candidate.get(..16).filter(|c| is_due_shaped(c)) {
            let title = text[title_start..due_kw].trim();
            if title.is_empty() {
                return None;
            }
            return Some((title.to_string(), shaped.to_string()));
        }
        search = after_due;
    }
    None
}

/// Match one `[agenda] <title> | <due>` suggestion line.
///
/// The tag is case-insensitive and must open the trimmed line; the last
/// pipe separates title from due string. Whether the due string is a real
/// date is the codec's call downstream.
pub fn match_suggestion_line(line: &str) -> Option<(String, String)> {
    let trimmed = line.trim();
    let tag_len = "[agenda]".len();
    if !trimmed.get(..tag_len)?.eq_ignore_ascii_case("[agenda]") {
        return None;
    }
    let content = &trimmed[tag_len..];
    let (title, due) = content.rsplit_once('|')?;
    let title = title.trim();
    let due = due.trim();
    if title.is_empty() || due.is_empty() {
        return None;
    }
    Some((title.to_string(), due.to_string()))
}

/// Run the suggestion-line matcher over every line of a reply,
/// top-to-bottom. A reply may yield zero, one, or many candidates.
pub fn extract_suggestions(reply: &str) -> Vec<(String, String)> {
    reply.lines().filter_map(match_suggestion_line).collect()
}

/// Render the "I added" tail appended beneath a model reply.
pub fn added_summary(items: &[AgendaItem]) -> String {
    let lines: Vec<String> = items
        .iter()
        .map(|it| format!("• *{}* — {} (added)", it.title, format_due(it.due)))
        .collect();
    format!(
        "🗓️ I added:\n{}\n(Use /agenda list to view.)",
        lines.join("\n")
    )
}

#[cfg(test)]
mod tests;
