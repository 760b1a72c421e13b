//! Gateway client struct and builder.

use std::future::Future;
use std::time::Duration;

use saathi_types::{ChatBackend, ChatError, Language, StreamHandle, Turn};
use serde::Serialize;

use crate::error::{map_http_status, map_reqwest_error};
use crate::streaming::stream_chat;

/// Path of the chat function relative to the deployment base URL.
const CHAT_PATH: &str = "/functions/v1/chat";

/// Client for the chat gateway endpoint.
///
/// Implements [`ChatBackend`] for use anywhere a backend is accepted.
///
/// # Example
///
/// ```no_run
/// use saathi_gateway::Gateway;
/// use std::time::Duration;
///
/// let gateway = Gateway::new("https://example.supabase.co", "publishable-key")
///     .timeout(Duration::from_secs(60));
/// ```
pub struct Gateway {
    /// Deployment base URL (no trailing slash).
    pub(crate) base_url: String,
    /// Publishable key sent as a bearer token.
    pub(crate) api_key: String,
    /// Optional per-request timeout; none by default, the core relies
    /// on transport-level timeouts if any.
    pub(crate) timeout: Option<Duration>,
    /// Shared HTTP client.
    pub(crate) client: reqwest::Client,
}

/// Wire shape of the outbound request body.
#[derive(Serialize)]
struct ChatRequest<'a> {
    messages: &'a [Turn],
    language: Language,
}

impl Gateway {
    /// Create a client for the given deployment.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            timeout: None,
            client: reqwest::Client::new(),
        }
    }

    /// Set a per-request timeout.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the chat endpoint URL.
    pub(crate) fn chat_url(&self) -> String {
        format!("{}{}", self.base_url, CHAT_PATH)
    }
}

impl ChatBackend for Gateway {
    /// Post the conversation and return a handle to the streamed
    /// answer.
    ///
    /// Non-success statuses are mapped before any streaming starts, so
    /// a rejected turn never touches the transcript.
    fn stream_chat(
        &self,
        turns: &[Turn],
        language: Language,
    ) -> impl Future<Output = Result<StreamHandle, ChatError>> + Send {
        let url = self.chat_url();
        let api_key = self.api_key.clone();
        let timeout = self.timeout;
        let http_client = self.client.clone();
        let body = serde_json::to_value(ChatRequest {
            messages: turns,
            language,
        });

        async move {
            let body = body.map_err(ChatError::transport)?;

            tracing::debug!(url = %url, language = ?language, "sending chat request");

            let mut request = http_client
                .post(&url)
                .header("authorization", format!("Bearer {api_key}"))
                .header("content-type", "application/json")
                .json(&body);
            if let Some(timeout) = timeout {
                request = request.timeout(timeout);
            }

            let response = request.send().await.map_err(map_reqwest_error)?;

            let status = response.status();
            if !status.is_success() {
                let body_text = response.text().await.map_err(map_reqwest_error)?;
                return Err(map_http_status(status, &body_text));
            }

            Ok(stream_chat(response))
        }
    }
}
