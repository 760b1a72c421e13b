//! # saathi-gateway — HTTP client for the chat gateway
//!
//! Posts the conversation (`{ messages, language }`, bearer-token
//! authorization) to the deployment's chat endpoint and decodes the
//! streamed SSE response into [`StreamEvent`]s via `saathi-wire`.
//!
//! Status handling happens before any streaming: 429 maps to
//! [`ChatError::RateLimited`], 402 to [`ChatError::PaymentRequired`],
//! any other non-success to [`ChatError::Endpoint`].
//!
//! [`StreamEvent`]: saathi_types::StreamEvent
//! [`ChatError::RateLimited`]: saathi_types::ChatError::RateLimited
//! [`ChatError::PaymentRequired`]: saathi_types::ChatError::PaymentRequired
//! [`ChatError::Endpoint`]: saathi_types::ChatError::Endpoint

pub mod client;
pub(crate) mod error;
pub(crate) mod streaming;

pub use client::Gateway;

// Re-export the shared types for convenience.
pub use saathi_types::{ChatBackend, ChatError, StreamEvent, StreamHandle};
