pub const DEFAULT_LANGUAGE: &str = "typescript";

/// Canonical language name; unknown or missing names become TypeScript.
pub fn normalize_language(language: Option<&str>) -> &'static str {
    match language.map(|l| l.trim().to_ascii_lowercase()).as_deref() {
        Some("rust" | "rs") => "rust",
        Some("python" | "py") => "python",
        Some("sql" | "postgres" | "postgresql") => "sql",
        Some("javascript" | "js" | "node") => "javascript",
        _ => DEFAULT_LANGUAGE,
    }
}

fn comment_lines(prompt: &str, marker: &str) -> String {
    prompt
        .lines()
        .map(|line| format!("{marker} {}", line.trim_end()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Starter snippet in `language` with the prompt embedded as a comment.
pub fn code_template(prompt: &str, language: &str) -> String {
    match language {
        "rust" => format!(
            "{}\npub fn handler(input: &str) -> Result<String, Box<dyn std::error::Error>> {{\n    \
             // your logic here\n    Ok(input.to_string())\n}}\n",
            comment_lines(prompt, "//")
        ),
        "python" => format!(
            "{}\ndef handler(event: dict) -> dict:\n    # your logic here\n    \
             return {{\"ok\": True, \"input\": event}}\n",
            comment_lines(prompt, "#")
        ),
        "sql" => format!(
            "{}\nSELECT *\nFROM records\nLIMIT 10;\n",
            comment_lines(prompt, "--")
        ),
        "javascript" => format!(
            "{}\nexport async function handler(req) {{\n  // your logic here\n  \
             return {{ ok: true, input: await req.json() }};\n}}\n",
            comment_lines(prompt, "//")
        ),
        _ => format!(
            "{}\nexport async function handler(req: Request): Promise<Response> {{\n  \
             // your logic here\n  const body = await req.json();\n  \
             return new Response(JSON.stringify({{ ok: true, body }}), {{\n    \
             headers: {{ \"Content-Type\": \"application/json\" }},\n  }});\n}}\n",
            comment_lines(prompt, "//")
        ),
    }
}
