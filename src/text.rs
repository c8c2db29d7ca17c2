//! Text shaping for appended entries.

/// Lowercase each sentence and capitalize its first letter, one sentence
/// per line. Sentences are split on `". "` and the separators dropped.
pub fn sentence_case(input: &str) -> String {
    let mut out = String::new();
    for sentence in input.split(". ") {
        let sentence = sentence.trim();
        if sentence.is_empty() {
            continue;
        }
        let lowered = sentence.to_lowercase();
        let mut chars = lowered.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
        out.push('\n');
    }
    out.trim().to_string()
}

/// Greedy word wrap. Existing line breaks are kept, blank lines pass
/// through untouched, and lines break a few columns short of `width` to
/// leave room for terminal padding.
pub fn word_wrap(text: &str, width: usize) -> String {
    let mut wrapped = String::new();
    for line in text.split('\n') {
        let mut words = line.split_whitespace();
        let Some(first) = words.next() else {
            wrapped.push_str(line);
            wrapped.push('\n');
            continue;
        };
        let mut current = first.to_string();
        for word in words {
            if current.len() + word.len() <= width.saturating_sub(3) {
                current.push(' ');
                current.push_str(word);
            } else {
                wrapped.push_str(&current);
                wrapped.push('\n');
                current = word.to_string();
            }
        }
        wrapped.push_str(&current);
        wrapped.push('\n');
    }
    wrapped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentence_case_capitalizes_each_sentence() {
        assert_eq!(
            sentence_case("fix the build. THEN ship it"),
            "Fix the build\nThen ship it"
        );
    }

    #[test]
    fn sentence_case_single_sentence() {
        assert_eq!(sentence_case("hello world"), "Hello world");
    }

    #[test]
    fn sentence_case_empty_input() {
        assert_eq!(sentence_case(""), "");
    }

    #[test]
    fn word_wrap_breaks_long_lines() {
        let wrapped = word_wrap("one two three four five six seven", 15);
        for line in wrapped.lines() {
            assert!(line.len() <= 15, "line too long: {line:?}");
        }
        assert!(wrapped.lines().count() > 1);
    }

    #[test]
    fn word_wrap_keeps_short_lines() {
        assert_eq!(word_wrap("short line", 80), "short line\n");
    }

    #[test]
    fn word_wrap_preserves_blank_lines() {
        assert_eq!(word_wrap("a\n\nb", 80), "a\n\nb\n");
    }

    #[test]
    fn word_wrap_rejoins_words_with_single_spaces() {
        assert_eq!(word_wrap("spaced   out    words", 80), "spaced out words\n");
    }
}
