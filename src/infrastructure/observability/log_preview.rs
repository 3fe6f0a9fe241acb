const SECRET_MARKERS: [&str; 6] = [
    "Bearer ",
    "apikey=",
    "api_key=",
    "password=",
    "secret=",
    "token=",
];

/// Shortens text for a log line without splitting a character and masks anything that
/// looks like a credential.
pub fn log_preview(text: &str, max_chars: usize) -> String {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let total_chars = trimmed.chars().count();
    let preview = if total_chars > max_chars {
        let cut: String = trimmed.chars().take(max_chars).collect();
        format!("{}... ({} chars total)", cut, total_chars)
    } else {
        trimmed.to_string()
    };

    redact_secrets(&preview)
}

fn redact_secrets(text: &str) -> String {
    let mut result = text.to_string();

    for marker in SECRET_MARKERS {
        let mut search_from = 0;
        while let Some(offset) = result[search_from..].find(marker) {
            let value_start = search_from + offset + marker.len();
            let value_end = result[value_start..]
                .find(|c: char| c.is_whitespace() || matches!(c, '&' | '"' | '\'' | ','))
                .map(|i| value_start + i)
                .unwrap_or(result.len());

            result.replace_range(value_start..value_end, "[REDACTED]");
            search_from = value_start + "[REDACTED]".len();
        }
    }

    result
}
