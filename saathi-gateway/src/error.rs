//! Internal helpers for mapping HTTP/reqwest failures to [`ChatError`].

use saathi_types::ChatError;

/// Map a non-success HTTP status to a [`ChatError`].
///
/// 429 and 402 carry product meaning (rate limiting, exhausted
/// credits); everything else is a generic endpoint failure with the
/// best message we can extract from the body.
pub(crate) fn map_http_status(status: reqwest::StatusCode, body: &str) -> ChatError {
    match status.as_u16() {
        429 => ChatError::RateLimited,
        402 => ChatError::PaymentRequired,
        code => ChatError::Endpoint {
            status: code,
            message: extract_error_message(body),
        },
    }
}

/// Pull the message out of a structured `{ "error": string }` body,
/// falling back to the raw body text.
fn extract_error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("error")?.as_str().map(str::to_string))
        .unwrap_or_else(|| body.to_string())
}

/// Map a [`reqwest::Error`] to a transport failure.
pub(crate) fn map_reqwest_error(err: reqwest::Error) -> ChatError {
    ChatError::transport(err)
}
