use lumen_schema::ai::SentimentLabel;

const POSITIVE: &[&str] = &[
    "good", "great", "excellent", "amazing", "awesome", "love", "happy", "nice", "fantastic",
    "wonderful", "best", "like", "fast", "easy", "helpful", "perfect", "thanks",
];

const NEGATIVE: &[&str] = &[
    "bad", "terrible", "awful", "hate", "sad", "poor", "worst", "slow", "broken", "bug",
    "angry", "horrible", "difficult", "hard", "fail", "failed", "error", "useless",
];

/// Lexicon score in `[-1, 1]`, its label and the number of matched words.
pub fn lexicon_sentiment(text: &str) -> (SentimentLabel, f64, f64) {
    let (mut positive, mut negative) = (0_u32, 0_u32);
    for word in text
        .split(|c: char| !c.is_alphanumeric() && c != '\'')
        .filter(|w| !w.is_empty())
    {
        let word = word.to_lowercase();
        if POSITIVE.contains(&word.as_str()) {
            positive += 1;
        } else if NEGATIVE.contains(&word.as_str()) {
            negative += 1;
        }
    }

    let matched = positive + negative;
    let score = if matched == 0 {
        0.0
    } else {
        (f64::from(positive) - f64::from(negative)) / f64::from(matched)
    };
    (SentimentLabel::from_score(score), score, f64::from(matched))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lexicon_scores_and_labels() {
        let (label, score, magnitude) = lexicon_sentiment("I love this, it is great!");
        assert_eq!(label, SentimentLabel::Positive);
        assert!((score - 1.0).abs() < f64::EPSILON);
        assert!((magnitude - 2.0).abs() < f64::EPSILON);

        let (label, _, _) = lexicon_sentiment("Terrible, slow and broken. Good logo though.");
        assert_eq!(label, SentimentLabel::Negative);

        let (label, score, magnitude) = lexicon_sentiment("The meeting is at noon.");
        assert_eq!(label, SentimentLabel::Neutral);
        assert!(score.abs() < f64::EPSILON);
        assert!(magnitude.abs() < f64::EPSILON);
    }

    #[test]
    fn balanced_text_is_neutral() {
        let (label, score, _) = lexicon_sentiment("good but slow");
        assert_eq!(label, SentimentLabel::Neutral);
        assert!(score.abs() < f64::EPSILON);
    }
}
