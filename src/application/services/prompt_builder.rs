const DOCUMENT_PLACEHOLDER: &str = "{document}";

const FLASHCARD_PROMPT_TEMPLATE: &str = r#"You are creating flashcards from the following study document. Extract ONLY the actual vocabulary terms, concepts, definitions, and facts that appear in this specific document.

Document content:
{document}

CRITICAL INSTRUCTIONS:
1. Extract ONLY terms, concepts, and facts that actually appear in the provided document
2. Do NOT create generic flashcards or add information not in the document
3. Look for key vocabulary words, important concepts, definitions, dates, names, and facts
4. Create as many flashcards as needed to cover all the important content from this document
5. Front of card: The term, concept, question, or prompt as it appears in the document
6. Back of card: The definition, explanation, or answer as provided in the document
7. Stay faithful to the document's content and terminology
8. If the document doesn't contain clear vocabulary terms, focus on key facts and concepts

Return ONLY a valid JSON array with no additional text or formatting:
[
  {
    "front": "Exact term or concept from document",
    "back": "Definition or explanation from document"
  }
]"#;

/// Embeds normalized document text into the flashcard extraction instructions.
pub fn build_flashcard_prompt(document_text: &str) -> String {
    FLASHCARD_PROMPT_TEMPLATE.replacen(DOCUMENT_PLACEHOLDER, document_text, 1)
}
