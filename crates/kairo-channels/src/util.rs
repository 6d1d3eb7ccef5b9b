//! Shared channel helpers.

/// Split a message into chunks of at most `max_len` characters, breaking
/// on newlines where possible so formatting survives platform limits.
pub(crate) fn split_message(text: &str, max_len: usize) -> Vec<String> {
    if text.chars().count() <= max_len {
        return vec![text.to_string()];
    }

    let mut chunks = Vec::new();
    let mut current = String::new();

    for line in text.split_inclusive('\n') {
        if current.chars().count() + line.chars().count() > max_len && !current.is_empty() {
            chunks.push(std::mem::take(&mut current));
        }
        if line.chars().count() > max_len {
            // Single oversized line: hard-split at character boundaries.
            let mut rest: Vec<char> = line.chars().collect();
            while rest.len() > max_len {
                chunks.push(rest.drain(..max_len).collect());
            }
            current = rest.into_iter().collect();
        } else {
            current.push_str(line);
        }
    }

    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}
