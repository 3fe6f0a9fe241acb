use flashdeck::infrastructure::text_processing::repair_extracted_text;

#[test]
fn given_text_with_fi_ligature_when_repairing_then_decomposes_to_fi() {
    assert_eq!(repair_extracted_text("ﬁnding the ﬁle"), "finding the file");
}

#[test]
fn given_word_hyphenated_across_lines_when_repairing_then_word_is_joined() {
    assert_eq!(
        repair_extracted_text("photo-\nsynthesis happens in leaves"),
        "photosynthesis happens in leaves"
    );
}

#[test]
fn given_soft_hyphens_and_control_characters_when_repairing_then_they_are_removed() {
    assert_eq!(repair_extracted_text("mito\u{00AD}sis\u{0007} phase"), "mitosis phase");
}

#[test]
fn given_excessive_newlines_when_repairing_then_collapses_to_paragraph_breaks() {
    assert_eq!(
        repair_extracted_text("paragraph one\n\n\n\n\nparagraph two"),
        "paragraph one\n\nparagraph two"
    );
}

#[test]
fn given_ragged_lines_when_repairing_then_each_line_is_trimmed() {
    assert_eq!(repair_extracted_text("  first  \n   second"), "first\nsecond");
}

#[test]
fn given_whitespace_only_text_when_repairing_then_returns_empty() {
    assert_eq!(repair_extracted_text("   \n\n  "), "");
}
