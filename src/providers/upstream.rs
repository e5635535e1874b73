use crate::error::ProviderError;
use crate::utils::logging::with_pretty_json_debug;
use lumen_schema::openai::OpenaiErrorBody;
use reqwest::StatusCode;
use reqwest::header::{CONNECTION, HeaderMap, HeaderValue};
use serde::{Serialize, de::DeserializeOwned};
use std::time::{Duration, Instant};
use tracing::debug;

pub const UPSTREAM_BODY_PREVIEW_CHARS: usize = 300;

pub const LUMEN_USER_AGENT: &str = concat!("lumen/", env!("CARGO_PKG_VERSION"));

/// Build a shared upstream client.
///
/// With multiplexing disabled every request gets its own HTTP/1.1 connection.
pub fn build_client(
    proxy: Option<&url::Url>,
    enable_multiplexing: bool,
    timeout: Duration,
) -> Result<reqwest::Client, reqwest::Error> {
    let mut headers = HeaderMap::new();

    let mut builder = reqwest::Client::builder()
        .user_agent(LUMEN_USER_AGENT)
        .redirect(reqwest::redirect::Policy::none())
        .connect_timeout(Duration::from_secs(10))
        .timeout(timeout);

    if let Some(proxy_url) = proxy {
        builder = builder.proxy(reqwest::Proxy::all(proxy_url.as_str())?);
    }

    if enable_multiplexing {
        builder = builder.http2_adaptive_window(true);
    } else {
        headers.insert(CONNECTION, HeaderValue::from_static("close"));

        builder = builder
            .http1_only()
            .pool_max_idle_per_host(0)
            .pool_idle_timeout(Duration::from_secs(0));
    }

    builder.default_headers(headers).build()
}

/// POST `body` as JSON and decode a successful JSON reply.
///
/// `request` carries the provider's auth header. Non-2xx replies become
/// [`ProviderError::UpstreamStatus`] with a bounded body preview.
pub(crate) async fn post_json<B, R>(
    channel: &'static str,
    request: reqwest::RequestBuilder,
    body: &B,
) -> Result<R, ProviderError>
where
    B: Serialize,
    R: DeserializeOwned + Serialize,
{
    with_pretty_json_debug(body, |pretty| {
        debug!(channel, body = %pretty, "Upstream request");
    });

    let start = Instant::now();
    let resp = request.json(body).send().await?;
    let status = resp.status();
    let bytes = resp.bytes().await?;
    let took_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

    if !status.is_success() {
        return Err(upstream_status_error(channel, status, took_ms, &bytes));
    }

    let decoded: R = serde_json::from_slice(&bytes)?;
    with_pretty_json_debug(&decoded, |pretty| {
        debug!(channel, %status, took_ms, body = %pretty, "Upstream response");
    });
    Ok(decoded)
}

/// OpenAI and Google APIs share the `{"error":{"message":..}}` envelope; its message
/// is kept when present, otherwise a bounded preview of the raw body.
fn upstream_status_error(
    channel: &'static str,
    status: StatusCode,
    took_ms: u64,
    bytes: &[u8],
) -> ProviderError {
    if let Ok(error) = serde_json::from_slice::<OpenaiErrorBody>(bytes) {
        with_pretty_json_debug(&error, |pretty_error| {
            debug!(channel, %status, took_ms, body = %pretty_error, "Upstream structured error");
        });
        if let Some(message) = error.inner.message {
            return ProviderError::UpstreamStatus {
                status,
                body: format!("{:.len$}", message, len = UPSTREAM_BODY_PREVIEW_CHARS),
            };
        }
    }

    let raw_body = String::from_utf8_lossy(bytes);
    let preview = format!("{:.len$}", raw_body, len = UPSTREAM_BODY_PREVIEW_CHARS);
    debug!(channel, %status, took_ms, body = %preview, "Upstream unstructured error");
    ProviderError::UpstreamStatus {
        status,
        body: preview,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_clients_for_both_transport_modes() {
        let timeout = Duration::from_secs(5);
        assert!(build_client(None, false, timeout).is_ok());
        assert!(build_client(None, true, timeout).is_ok());

        let proxy = url::Url::parse("http://127.0.0.1:1080").expect("url");
        assert!(build_client(Some(&proxy), false, timeout).is_ok());
    }

    #[test]
    fn structured_errors_keep_the_upstream_message() {
        let body = br#"{"error":{"message":"quota exceeded","type":"insufficient_quota"}}"#;
        let err = upstream_status_error("openai", StatusCode::TOO_MANY_REQUESTS, 3, body);
        assert!(matches!(
            err,
            ProviderError::UpstreamStatus { status, ref body }
                if status == StatusCode::TOO_MANY_REQUESTS && body == "quota exceeded"
        ));
    }

    #[test]
    fn unstructured_errors_are_previewed() {
        let body = "x".repeat(UPSTREAM_BODY_PREVIEW_CHARS * 2);
        let err = upstream_status_error("gemini", StatusCode::BAD_GATEWAY, 3, body.as_bytes());
        let ProviderError::UpstreamStatus { body, .. } = err else {
            panic!("expected UpstreamStatus");
        };
        assert_eq!(body.len(), UPSTREAM_BODY_PREVIEW_CHARS);
    }
}
