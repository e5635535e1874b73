pub const DEFAULT_MAX_LENGTH: usize = 200;

const ELLIPSIS: char = '…';

fn sentences(text: &str) -> impl Iterator<Item = &str> {
    text.split_inclusive(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// Leading sentences of `text` fitting in `max_length` characters.
///
/// A first sentence longer than the budget is cut and ends with an ellipsis.
pub fn summarize(text: &str, max_length: usize) -> String {
    let max_length = max_length.max(1);
    let mut summary = String::new();
    let mut used = 0;

    for sentence in sentences(text) {
        let len = sentence.chars().count();
        let extra = if summary.is_empty() { len } else { len + 1 };
        if used + extra > max_length {
            break;
        }
        if !summary.is_empty() {
            summary.push(' ');
        }
        summary.push_str(sentence);
        used += extra;
    }

    if summary.is_empty() {
        let first = sentences(text).next().unwrap_or_default();
        let mut cut: String = first.chars().take(max_length.saturating_sub(1)).collect();
        cut.truncate(cut.trim_end().len());
        cut.push(ELLIPSIS);
        return cut;
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_whole_sentences_within_budget() {
        let text = "Lumen stores projects. It streams metrics. It also answers questions.";
        assert_eq!(summarize(text, 45), "Lumen stores projects. It streams metrics.");
        assert_eq!(summarize(text, 200), text);
    }

    #[test]
    fn long_first_sentence_is_cut_with_ellipsis() {
        let text = "This single sentence is definitely longer than twenty characters.";
        let summary = summarize(text, 20);
        assert!(summary.ends_with('…'));
        assert!(summary.chars().count() <= 20);
    }

    #[test]
    fn text_without_terminator_is_one_sentence() {
        assert_eq!(summarize("short note", 50), "short note");
    }
}
