use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

static BROKEN_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\w)-[ \t]*\r?\n[ \t]*(\w)").expect("valid regex"));
static BLANK_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("valid regex"));

const SOFT_HYPHEN: char = '\u{00AD}';

/// Repairs artifacts left by PDF and DOCX text extraction: ligatures and compatibility
/// forms, control characters, words split across lines, ragged lines and runs of
/// blank lines. Paragraph breaks survive as a single blank line.
pub fn repair_extracted_text(raw: &str) -> String {
    let folded: String = raw
        .nfkc()
        .filter(|c| *c != SOFT_HYPHEN && (!c.is_control() || matches!(c, '\n' | '\t')))
        .collect();

    let joined = BROKEN_WORD.replace_all(&folded, "$1$2");

    let trimmed_lines = joined
        .lines()
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("\n");

    BLANK_RUN
        .replace_all(&trimmed_lines, "\n\n")
        .trim()
        .to_string()
}
