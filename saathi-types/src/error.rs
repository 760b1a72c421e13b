//! Error taxonomy and user-facing notices.

use thiserror::Error;

/// Errors surfaced by a chat backend.
///
/// Wire-level decode anomalies are deliberately absent: a frame that
/// fails to parse is recovered inside the decoder (push-back) and never
/// reported upward.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ChatError {
    /// HTTP 429 from the gateway.
    #[error("rate limited")]
    RateLimited,

    /// HTTP 402 from the gateway.
    #[error("payment required")]
    PaymentRequired,

    /// Any other non-success status, with the gateway's error message
    /// when one could be extracted from the body.
    #[error("endpoint error (status {status}): {message}")]
    Endpoint {
        /// The HTTP status code.
        status: u16,
        /// Error message from the response body, or the raw body.
        message: String,
    },

    /// Network-level failure before or during the response stream.
    #[error("transport failure: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ChatError {
    /// Wrap a network-level error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Box::new(err))
    }

    /// The user-facing notice category for this error.
    #[must_use]
    pub fn notice_kind(&self) -> NoticeKind {
        match self {
            Self::RateLimited => NoticeKind::RateLimited,
            Self::PaymentRequired => NoticeKind::PaymentRequired,
            Self::Endpoint { .. } | Self::Transport(_) => NoticeKind::Failure,
        }
    }
}

/// Category of a user-visible notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// The gateway rate-limited the request.
    RateLimited,
    /// The workspace is out of credits.
    PaymentRequired,
    /// Any other failure (endpoint error, network drop).
    Failure,
}

/// A localized, user-visible notice raised by the session controller.
///
/// Corresponds to the toast the presentation layer shows; the session
/// never retracts already-streamed text when raising one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// What went wrong.
    pub kind: NoticeKind,
    /// Localized short title.
    pub title: String,
    /// Localized description.
    pub body: String,
}
