#![deny(missing_docs)]
//! # saathi — umbrella crate
//!
//! Single import surface for the SehatSaathi chat engine: shared types,
//! the incremental SSE wire decoder, the HTTP gateway client, and the
//! session controller. Most applications only need the [`prelude`].

pub use saathi_session as session;
pub use saathi_types as types;
pub use saathi_wire as wire;

#[cfg(feature = "gateway")]
pub use saathi_gateway as gateway;

/// Happy-path imports for driving a chat session.
pub mod prelude {
    pub use saathi_session::{
        ChatSession, ContentTable, LanguageContent, SendOutcome, SessionObserver, SessionSnapshot,
    };
    pub use saathi_types::{
        ChatBackend, ChatError, Language, Notice, NoticeKind, Role, StreamEvent, StreamHandle,
        Turn,
    };

    #[cfg(feature = "gateway")]
    pub use saathi_gateway::Gateway;
}
