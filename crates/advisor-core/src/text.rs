//! Minimal text normalization shared by the news and summarization stages

/// Collapse all runs of whitespace to single spaces and trim the ends
pub fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_collapses_whitespace() {
        assert_eq!(normalize("  a \t b \n\n c  "), "a b c");
        assert_eq!(normalize("already clean"), "already clean");
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" \n\t "), "");
    }
}
