//! System prompts sent with each AI route.

pub const CHAT_SYSTEM: &str = "You are a helpful assistant for a backend-as-a-service dashboard. \
     Give concise, practical answers about databases, authentication, storage and serverless \
     functions.";

pub const DEFAULT_IMAGE_PROMPT: &str = "Describe this image in detail.";

pub fn code_system(language: &str) -> String {
    format!(
        "You are an expert {language} developer. Reply with a single complete {language} code \
         snippet that fulfils the request. Do not add explanations outside code comments."
    )
}

pub fn sql_system(schema: Option<&str>) -> String {
    let mut prompt = String::from(
        "You translate requests into PostgreSQL. Reply with one SQL statement only, without \
         markdown or explanations.",
    );
    if let Some(schema) = schema.map(str::trim).filter(|s| !s.is_empty()) {
        prompt.push_str("\n\nDatabase schema:\n");
        prompt.push_str(schema);
    }
    prompt
}

pub fn summarize_system(max_length: usize) -> String {
    format!(
        "Summarize the user's text in at most {max_length} characters. Reply with the summary \
         only."
    )
}

/// Drops a surrounding markdown fence (```lang ... ```), if any.
pub fn strip_code_fences(text: &str) -> String {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed.to_string();
    };
    let body = rest.split_once('\n').map_or("", |(_, body)| body);
    body.trim_end()
        .strip_suffix("```")
        .unwrap_or(body)
        .trim_end()
        .to_string()
}
