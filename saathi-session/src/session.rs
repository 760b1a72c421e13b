//! The session controller: one transcript, one in-flight exchange.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use futures::StreamExt;
use saathi_types::{ChatBackend, ChatError, Language, Notice, StreamEvent, Turn};

use crate::content::ContentTable;
use crate::transcript::fold_delta;

/// An immutable view of the session as of one state change.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    /// The transcript, welcome turn first.
    pub turns: Vec<Turn>,
    /// The active conversation language.
    pub language: Language,
    /// Whether an exchange is currently in flight.
    pub busy: bool,
    /// The most recent failure notice, if not yet cleared.
    pub notice: Option<Notice>,
}

/// Receives a snapshot after every observable state change.
///
/// Called synchronously from inside the session; keep implementations
/// cheap and do not call back into the session from them.
pub trait SessionObserver: Send + Sync {
    /// The session's state changed.
    fn session_changed(&self, snapshot: &SessionSnapshot);
}

/// Result of a [`ChatSession::send`] call.
#[derive(Debug)]
pub enum SendOutcome {
    /// The full answer streamed in (or the stream ended cleanly).
    Completed,
    /// The exchange failed. Text already folded into the transcript
    /// stays; a localized notice was raised unless the conversation
    /// was reset mid-flight.
    Failed(ChatError),
    /// Nothing was sent: the input was blank or an exchange was
    /// already in flight.
    Ignored,
}

struct SessionState {
    turns: Vec<Turn>,
    language: Language,
    busy: bool,
    notice: Option<Notice>,
    /// Bumped on every conversation reset; deltas from an older
    /// generation are discarded instead of folded.
    generation: u64,
}

/// Drives streamed chat exchanges against a backend and owns the
/// resulting transcript.
pub struct ChatSession<B> {
    backend: B,
    content: ContentTable,
    state: Mutex<SessionState>,
    observers: Mutex<Vec<Arc<dyn SessionObserver>>>,
}

impl<B> ChatSession<B> {
    /// A fresh English session with the welcome turn in place.
    pub fn new(backend: B) -> Self {
        Self::with_language(backend, Language::En)
    }

    /// A fresh session in the given language.
    pub fn with_language(backend: B, language: Language) -> Self {
        Self::with_content(backend, language, ContentTable::default())
    }

    /// A fresh session with embedder-supplied content.
    pub fn with_content(backend: B, language: Language, content: ContentTable) -> Self {
        Self {
            backend,
            state: Mutex::new(SessionState {
                turns: vec![Turn::assistant(content.welcome(language))],
                language,
                busy: false,
                notice: None,
                generation: 0,
            }),
            observers: Mutex::new(Vec::new()),
            content,
        }
    }

    /// Register an observer for state changes.
    pub fn add_observer(&self, observer: Arc<dyn SessionObserver>) {
        self.lock_observers().push(observer);
    }

    /// A snapshot of the current state.
    pub fn snapshot(&self) -> SessionSnapshot {
        let state = self.lock_state();
        SessionSnapshot {
            turns: state.turns.clone(),
            language: state.language,
            busy: state.busy,
            notice: state.notice.clone(),
        }
    }

    /// The active conversation language.
    pub fn language(&self) -> Language {
        self.lock_state().language
    }

    /// Switch the conversation language.
    ///
    /// Resets the transcript to the new language's welcome turn and
    /// invalidates any in-flight exchange: its remaining deltas are
    /// discarded and its failure, if any, raises no notice. Switching
    /// to the already-active language is a no-op.
    pub fn set_language(&self, language: Language) {
        {
            let mut state = self.lock_state();
            if state.language == language {
                return;
            }
            state.language = language;
            state.generation += 1;
            state.turns = vec![Turn::assistant(self.content.welcome(language))];
            state.notice = None;
        }
        self.notify();
    }

    /// Take the pending notice, if any.
    pub fn clear_notice(&self) -> Option<Notice> {
        self.lock_state().notice.take()
    }

    fn notify(&self) {
        let observers: Vec<_> = self.lock_observers().clone();
        if observers.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        for observer in &observers {
            observer.session_changed(&snapshot);
        }
    }

    fn lock_state(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_observers(&self) -> MutexGuard<'_, Vec<Arc<dyn SessionObserver>>> {
        self.observers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

/// Clears the busy flag (and notifies observers) when the exchange
/// ends, however it ends: completion, failure, or the `send` future
/// being dropped mid-stream.
struct BusyGuard<'a, B> {
    session: &'a ChatSession<B>,
}

impl<B> Drop for BusyGuard<'_, B> {
    fn drop(&mut self) {
        self.session.lock_state().busy = false;
        self.session.notify();
    }
}

impl<B: ChatBackend> ChatSession<B> {
    /// Send a user message and stream the assistant's answer into the
    /// transcript.
    ///
    /// Blank input (after trimming) and calls made while another
    /// exchange is in flight are ignored. The busy flag is cleared
    /// when the exchange ends, whatever the outcome; cancellation of
    /// the returned future releases it too, so the session can never
    /// be locked out permanently.
    pub async fn send(&self, input: &str) -> SendOutcome {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return SendOutcome::Ignored;
        }

        let (generation, language, history) = {
            let mut state = self.lock_state();
            if state.busy {
                tracing::debug!("send while an exchange is in flight, ignoring");
                return SendOutcome::Ignored;
            }
            state.busy = true;
            state.notice = None;
            state.turns.push(Turn::user(trimmed));
            (state.generation, state.language, state.turns.clone())
        };
        // Armed before the first suspension point: dropping this
        // future mid-stream must still release the session.
        let guard = BusyGuard { session: self };
        self.notify();

        let outcome = self.run_stream(generation, language, &history).await;

        {
            let mut state = self.lock_state();
            if let SendOutcome::Failed(err) = &outcome
                && state.generation == generation
            {
                state.notice = Some(self.content.notice_for(state.language, err.notice_kind()));
            }
        }
        drop(guard);
        outcome
    }

    async fn run_stream(
        &self,
        generation: u64,
        language: Language,
        history: &[Turn],
    ) -> SendOutcome {
        let mut handle = match self.backend.stream_chat(history, language).await {
            Ok(handle) => handle,
            Err(err) => return SendOutcome::Failed(err),
        };

        let mut accumulated = String::new();
        while let Some(event) = handle.receiver.next().await {
            match event {
                StreamEvent::Delta(text) => {
                    accumulated.push_str(&text);
                    let fresh = {
                        let mut state = self.lock_state();
                        if state.generation == generation {
                            fold_delta(&mut state.turns, &accumulated);
                            true
                        } else {
                            false
                        }
                    };
                    if fresh {
                        self.notify();
                    } else {
                        tracing::debug!(generation, "dropping stale delta after reset");
                    }
                }
                StreamEvent::Done => return SendOutcome::Completed,
                StreamEvent::Error(err) => return SendOutcome::Failed(err),
            }
        }

        // Stream ended without the terminal sentinel; the text that
        // arrived stays in the transcript.
        SendOutcome::Completed
    }
}
