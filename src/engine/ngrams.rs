// Character n-gram extraction.
//
// Whitespace is stripped before slicing so that indentation and line
// breaks don't affect the fingerprint, and n-grams run across what were
// word boundaries.

/// Whitespace for n-gram purposes: Unicode whitespace plus the ASCII
/// file/group/record/unit separators (U+001C..=U+001F).
pub fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Return the first `limit` characters of `text`.
///
/// Slices on a char boundary, so multi-byte characters are never split.
pub fn truncate_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Extract every contiguous `n`-character window from `text`, left to right,
/// after removing all whitespace.
///
/// Yields `max(0, len - n + 1)` n-grams where `len` is the cleaned length in
/// chars. A window size of zero yields nothing.
pub fn extract_ngrams(text: &str, n: usize) -> Vec<String> {
    if n == 0 {
        return Vec::new();
    }

    let cleaned: Vec<char> = text.chars().filter(|c| !is_separator(*c)).collect();
    cleaned
        .windows(n)
        .map(|window| window.iter().collect())
        .collect()
}
