use super::*;
use kairo_core::timefmt::parse_due;

// --- shorthand ---

#[test]
fn test_shorthand_basic() {
    let (title, due) = match_shorthand("add agenda: Lighting v1 due: 2025-10-12 14:00").unwrap();
    assert_eq!(title, "Lighting v1");
    assert_eq!(due, "2025-10-12 14:00");
    assert!(parse_due(&due).is_ok());
}

#[test]
fn test_shorthand_case_insensitive_keywords() {
    let (title, due) = match_shorthand("Add Agenda: Mix review DUE: 2025-10-12 09:30").unwrap();
    assert_eq!(title, "Mix review");
    assert_eq!(due, "2025-10-12 09:30");
}

#[test]
fn test_shorthand_embedded_in_chat() {
    let (title, _) =
        match_shorthand("hey, add agenda: Color grade pass due: 2025-10-14 16:00 thanks!").unwrap();
    assert_eq!(title, "Color grade pass");
}

#[test]
fn test_shorthand_no_due_clause_is_no_match() {
    assert!(match_shorthand("add agenda: Lighting v1").is_none());
    assert!(match_shorthand("add agenda: Lighting v1 by friday").is_none());
}

#[test]
fn test_shorthand_non_date_due_is_no_match() {
    // Falls through to the completion path rather than erroring.
    assert!(match_shorthand("add agenda: Lighting v1 due: tomorrow").is_none());
    assert!(match_shorthand("add agenda: Lighting v1 due: 2025-10-12").is_none());
}

#[test]
fn test_shorthand_title_may_contain_due_word() {
    // First `due:` not followed by a date belongs to the title.
    let (title, due) =
        match_shorthand("add agenda: review due: notes due: 2025-10-12 14:00").unwrap();
    assert_eq!(title, "review due: notes");
    assert_eq!(due, "2025-10-12 14:00");
}

#[test]
fn test_shorthand_date_shaped_but_invalid_calendar_matches() {
    // The matcher only checks shape; the codec rejects it afterwards,
    // which is what turns into the format-error reply.
    let (_, due) = match_shorthand("add agenda: Foo due: 2025-02-31 10:00").unwrap();
    assert!(parse_due(&due).is_err());
}

#[test]
fn test_shorthand_unrelated_text_is_no_match() {
    assert!(match_shorthand("what's on the agenda today?").is_none());
    assert!(match_shorthand("").is_none());
}

// --- suggestion lines ---

#[test]
fn test_suggestion_line_basic() {
    let (title, due) = match_suggestion_line("[agenda] Storyboard review | 2025-10-13 10:00").unwrap();
    assert_eq!(title, "Storyboard review");
    assert_eq!(due, "2025-10-13 10:00");
}

#[test]
fn test_suggestion_line_tag_case_and_padding() {
    let (title, _) =
        match_suggestion_line("  [Agenda]  Final cut  |  2025-11-01 09:00  ").unwrap();
    assert_eq!(title, "Final cut");
}

#[test]
fn test_suggestion_line_rejects_non_matching_lines() {
    assert!(match_suggestion_line("• Storyboard review at 10").is_none());
    assert!(match_suggestion_line("[agenda] missing pipe 2025-10-13 10:00").is_none());
    assert!(match_suggestion_line("[agenda] | 2025-10-13 10:00").is_none());
    assert!(match_suggestion_line("agenda] Title | 2025-10-13 10:00").is_none());
    assert!(match_suggestion_line("").is_none());
}

#[test]
fn test_suggestion_line_last_pipe_wins() {
    let (title, due) = match_suggestion_line("[agenda] Cut A | Cut B | 2025-10-13 10:00").unwrap();
    assert_eq!(title, "Cut A | Cut B");
    assert_eq!(due, "2025-10-13 10:00");
}

#[test]
fn test_extract_suggestions_multi_line_reply() {
    let reply = "Here's the plan:\n\
                 - Lock the edit first\n\
                 [agenda] Lock edit | 2025-10-12 14:00\n\
                 [agenda] Foo | not-a-date\n\
                 [agenda] Client review | 2025-10-15 11:00\n\
                 Let me know if the dates work.";
    let candidates = extract_suggestions(reply);
    // The malformed line still matches here; the codec drops it later.
    assert_eq!(candidates.len(), 3);
    assert_eq!(candidates[0].0, "Lock edit");
    assert_eq!(candidates[2].0, "Client review");

    let parseable: Vec<_> = candidates
        .iter()
        .filter(|(_, due)| parse_due(due).is_ok())
        .collect();
    assert_eq!(parseable.len(), 2, "exactly the two well-formed lines survive");
}

#[test]
fn test_extract_suggestions_none() {
    assert!(extract_suggestions("Just a normal reply.\nNo suggestions.").is_empty());
}

// --- summary tail ---

#[test]
fn test_added_summary_lists_each_item() {
    let store = kairo_agenda::Store::new();
    let a = store
        .insert("Lock edit", parse_due("2025-10-12 14:00").unwrap(), "c", None)
        .unwrap();
    let b = store
        .insert("Client review", parse_due("2025-10-15 11:00").unwrap(), "c", None)
        .unwrap();

    let summary = added_summary(&[a, b]);
    assert!(summary.starts_with("🗓️ I added:"));
    assert!(summary.contains("*Lock edit* — 2025-10-12 14:00 (added)"));
    assert!(summary.contains("*Client review* — 2025-10-15 11:00 (added)"));
    assert!(summary.ends_with("(Use /agenda list to view.)"));
}
