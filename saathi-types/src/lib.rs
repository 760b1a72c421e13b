//! # saathi-types — shared vocabulary for the saathi chat engine
//!
//! The conversation model ([`Turn`], [`Role`], [`Language`]), the error
//! taxonomy ([`ChatError`], [`Notice`]), streaming events
//! ([`StreamEvent`], [`StreamHandle`]) and the [`ChatBackend`] trait
//! that connects a session to an inference gateway.
//!
//! Everything here is transport-agnostic: `saathi-gateway` produces
//! these types from HTTP, `saathi-session` consumes them.

pub mod backend;
pub mod error;
pub mod stream;
pub mod types;

pub use backend::*;
pub use error::*;
pub use stream::*;
pub use types::*;
