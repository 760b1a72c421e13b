//! Session controller for the saathi chat engine.
//!
//! A [`ChatSession`] owns the conversation transcript and drives one
//! streamed exchange at a time against a
//! [`ChatBackend`](saathi_types::ChatBackend). It applies incoming
//! delta fragments to the trailing assistant turn, gates concurrent
//! sends with a busy flag, and raises localized [`Notice`]s when an
//! exchange fails.
//!
//! [`Notice`]: saathi_types::Notice

pub mod content;
pub mod session;
pub(crate) mod transcript;

pub use content::{ContentTable, LanguageContent};
pub use session::{ChatSession, SendOutcome, SessionObserver, SessionSnapshot};
