//! Sentence segmentation
//!
//! Fixed policy: a terminator (`.`, `?`, `!`) followed by whitespace or
//! end-of-text closes a sentence, and the terminator stays attached. Text
//! with no terminator at all is a single sentence. Abbreviations are not
//! special-cased.

/// Split text into sentences, preserving order and original sentence text
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();

    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        current.push(c);
        if matches!(c, '.' | '?' | '!') {
            let at_boundary = match chars.peek() {
                Some(next) => next.is_whitespace(),
                None => true,
            };
            if at_boundary {
                let sentence = current.trim().to_string();
                if !sentence.is_empty() {
                    sentences.push(sentence);
                }
                current.clear();
            }
        }
    }

    // Trailing text without a terminator is its own sentence
    let tail = current.trim().to_string();
    if !tail.is_empty() {
        sentences.push(tail);
    }

    sentences
}
