use serde::Serialize;

/// Upper bound on a rendered debug payload. Vision requests and `b64_json` image
/// replies carry whole images inline.
pub(crate) const DEBUG_PAYLOAD_MAX_BYTES: usize = 8 * 1024;

/// Pretty-prints `value` for a debug log line, skipping the work when debug is off.
/// Payloads longer than [`DEBUG_PAYLOAD_MAX_BYTES`] are cut with an elision marker.
pub(crate) fn with_pretty_json_debug<T, F>(value: &T, log_action: F)
where
    T: Serialize,
    F: FnOnce(&str),
{
    if !tracing::enabled!(tracing::Level::DEBUG) {
        return;
    }

    let pretty_json = serde_json::to_string_pretty(value)
        .unwrap_or_else(|error| format!("<pretty serialize failed: {error}>"));
    log_action(&clip_payload(pretty_json, DEBUG_PAYLOAD_MAX_BYTES));
}

fn clip_payload(mut rendered: String, max_bytes: usize) -> String {
    if rendered.len() <= max_bytes {
        return rendered;
    }
    let mut cut = max_bytes;
    while !rendered.is_char_boundary(cut) {
        cut -= 1;
    }
    let elided = rendered.len() - cut;
    rendered.truncate(cut);
    rendered.push_str(&format!("... <{elided} bytes elided>"));
    rendered
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_payloads_pass_through() {
        assert_eq!(clip_payload("{}".to_string(), 16), "{}");
    }

    #[test]
    fn long_payloads_are_cut_on_a_char_boundary() {
        let rendered = "é".repeat(10);
        let clipped = clip_payload(rendered, 5);
        assert_eq!(clipped, "éé... <16 bytes elided>");
    }
}
