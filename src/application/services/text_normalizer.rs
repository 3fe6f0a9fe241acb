use std::sync::LazyLock;

use regex::Regex;

/// Upper bound on the characters handed to the prompt builder.
pub const MAX_NORMALIZED_CHARS: usize = 15_000;

/// Anything that is not a Unicode word character, whitespace or allowed punctuation.
static UNSAFE_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[^\w\s\-.,;:!?()\[\]"']"#).expect("valid regex"));

/// Reduces extracted document text to a compact, prompt-safe form. Idempotent.
///
/// Unsafe characters are dropped before whitespace is collapsed, so a removed character
/// never leaves a double space behind.
pub fn normalize_text(raw: &str) -> String {
    let filtered = UNSAFE_CHARS.replace_all(raw, "");

    let mut collapsed = String::with_capacity(filtered.len().min(MAX_NORMALIZED_CHARS * 4));
    let mut pending_space = false;

    for ch in filtered.chars() {
        if ch.is_whitespace() {
            pending_space = true;
            continue;
        }
        if pending_space && !collapsed.is_empty() {
            collapsed.push(' ');
        }
        pending_space = false;
        collapsed.push(ch);
    }

    match collapsed.char_indices().nth(MAX_NORMALIZED_CHARS) {
        Some((cut, _)) => collapsed[..cut].trim_end().to_string(),
        None => collapsed,
    }
}
