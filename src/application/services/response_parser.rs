use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::domain::FlashcardCandidate;

static OPENING_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^```[A-Za-z0-9_-]*[ \t]*\r?\n?").expect("valid regex"));
static CLOSING_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*```$").expect("valid regex"));

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResponseParseError {
    #[error("malformed response: {0}")]
    MalformedResponse(String),
    #[error("no valid flashcards in response")]
    NoValidCards,
}

/// Decodes raw model output into flashcard candidates, preserving model order.
pub fn parse_flashcard_response(raw: &str) -> Result<Vec<FlashcardCandidate>, ResponseParseError> {
    let unfenced = strip_code_fence(raw.trim());
    let candidate_json = locate_json_array(unfenced);

    let value: Value = serde_json::from_str(candidate_json)
        .map_err(|e| ResponseParseError::MalformedResponse(e.to_string()))?;

    let entries = match value {
        Value::Array(entries) if !entries.is_empty() => entries,
        Value::Array(_) => {
            return Err(ResponseParseError::MalformedResponse(
                "empty array".to_string(),
            ));
        }
        other => {
            return Err(ResponseParseError::MalformedResponse(format!(
                "expected array, found {}",
                json_kind(&other)
            )));
        }
    };

    let cards: Vec<FlashcardCandidate> = entries.iter().filter_map(well_formed_card).collect();

    if cards.is_empty() {
        return Err(ResponseParseError::NoValidCards);
    }

    Ok(cards)
}

fn strip_code_fence(text: &str) -> &str {
    if !text.starts_with("```") {
        return text;
    }
    let without_open = match OPENING_FENCE.find(text) {
        Some(m) => &text[m.end()..],
        None => text,
    };
    match CLOSING_FENCE.find(without_open) {
        Some(m) => without_open[..m.start()].trim(),
        None => without_open.trim(),
    }
}

/// Outermost `[ ... ]` span, from the first `[` to the last `]`.
fn locate_json_array(text: &str) -> &str {
    match (text.find('['), text.rfind(']')) {
        (Some(start), Some(end)) if start < end => &text[start..=end],
        _ => text,
    }
}

fn well_formed_card(entry: &Value) -> Option<FlashcardCandidate> {
    let front = entry.get("front")?.as_str()?;
    let back = entry.get("back")?.as_str()?;

    if front.trim().is_empty() || back.trim().is_empty() {
        return None;
    }

    Some(FlashcardCandidate::new(front, back))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
