//! Deterministic keyword-matched responses served when no provider answers.

mod code;
mod sentiment;
mod sql;
mod summary;

pub use code::{DEFAULT_LANGUAGE, code_template, normalize_language};
pub use sentiment::lexicon_sentiment;
pub use sql::{guess_table, sql_for};
pub use summary::{DEFAULT_MAX_LENGTH, summarize};

const PLACEHOLDER_IMAGE_BASE: &str = "https://placehold.co";
const PLACEHOLDER_TEXT_CHARS: usize = 80;

fn mentions(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

/// Canned assistant reply keyed on the topic of the latest user message.
pub fn chat_reply(message: &str) -> String {
    let lower = message.to_lowercase();
    let reply = if mentions(&lower, &["schema", "table", "database"]) {
        "For your database design, start by listing the entities your app stores and give each \
         its own table with a primary key. Use foreign keys for relationships, add indexes on \
         columns you filter by, and enable row level security before exposing tables to clients."
    } else if mentions(&lower, &["auth", "login", "sign in", "signup", "sign up"]) {
        "To set up authentication, enable the email provider first, then add OAuth providers such \
         as Google or GitHub from the Auth tab. Protect your tables with policies that check the \
         signed-in user's id."
    } else if mentions(&lower, &["storage", "upload", "bucket", "file"]) {
        "For file storage, create a bucket per kind of content. Keep user uploads in a private \
         bucket and serve them through signed URLs, and use a public bucket only for assets \
         anyone may read."
    } else if mentions(&lower, &["function", "serverless", "edge", "webhook"]) {
        "Serverless functions are a good fit for webhooks, scheduled jobs and calls to third-party \
         APIs. Deploy one from the Functions tab, keep secrets in environment variables and check \
         the invocation count to watch usage."
    } else {
        "I can help you design database schemas, configure authentication, organize file storage \
         and write serverless functions. Tell me what you are building and I will suggest a \
         starting point."
    };
    reply.to_string()
}

/// Canned description for `analyze-image`.
pub fn image_analysis(prompt: Option<&str>) -> String {
    let base = "The image appears to show a user interface with several distinct regions, \
                readable text and a balanced color palette. No people or sensitive content \
                were detected.";
    match prompt.map(str::trim).filter(|p| !p.is_empty()) {
        Some(prompt) => format!("Regarding \"{prompt}\": {base}"),
        None => base.to_string(),
    }
}

/// Placeholder image whose caption is the URL-encoded prompt.
pub fn placeholder_image_url(prompt: &str, size: &str) -> String {
    let caption: String = prompt.trim().chars().take(PLACEHOLDER_TEXT_CHARS).collect();
    let encoded: String = url::form_urlencoded::byte_serialize(caption.as_bytes()).collect();
    format!("{PLACEHOLDER_IMAGE_BASE}/{size}/png?text={encoded}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_reply_follows_topic_keywords() {
        assert!(chat_reply("How should I design my schema?").contains("database"));
        assert!(chat_reply("Add Google LOGIN please").contains("authentication"));
        assert!(chat_reply("where do uploads go").contains("bucket"));
        assert!(chat_reply("deploy a serverless thing").contains("function"));
        assert!(chat_reply("hello").contains("help"));
    }

    #[test]
    fn image_analysis_mentions_prompt() {
        assert!(image_analysis(Some("count the buttons")).contains("count the buttons"));
        assert!(!image_analysis(Some("  ")).contains("Regarding"));
    }

    #[test]
    fn placeholder_url_encodes_prompt() {
        let url = placeholder_image_url("a red fox & moon", "512x512");
        assert_eq!(url, "https://placehold.co/512x512/png?text=a+red+fox+%26+moon");
    }
}
