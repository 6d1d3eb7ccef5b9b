//! Free-text trigger protocol: the assistant only engages with messages
//! that open with one of its mention forms.

/// If `text` starts with one of the mention forms (case-insensitive,
/// optionally followed by `,`/`:`/`!`), return the remaining payload with
/// the mention stripped. `None` means the message does not address the
/// assistant at all.
pub(super) fn strip_mention(text: &str, forms: &[String]) -> Option<String> {
    let trimmed = text.trim_start();

    for form in forms {
        if form.is_empty() || !trimmed.is_char_boundary(form.len()) || trimmed.len() < form.len() {
            continue;
        }
        let (head, rest) = trimmed.split_at(form.len());
        if !head.eq_ignore_ascii_case(form) {
            continue;
        }
        // Word boundary: "Kairos" must not match the form "Kairo".
        let boundary = rest.is_empty()
            || rest.starts_with(|c: char| c.is_whitespace() || c == ',' || c == ':' || c == '!');
        if boundary {
            let payload = rest
                .trim_start_matches(|c: char| c == ',' || c == ':' || c == '!')
                .trim();
            return Some(payload.to_string());
        }
    }
    None
}
