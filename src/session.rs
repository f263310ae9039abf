//! The turn controller: owns the conversation log and drives one user turn
//! from submission to resolution.
//!
//! A turn moves through `Idle -> Submitting -> {LocalResolved | RemotePending
//! -> RemoteResolved | RemoteFailed} -> Idle`. The synchronous half
//! ([`ChatSession::begin_turn`]) appends the user message and either answers
//! from the intercept table or arms the remote path; the asynchronous half
//! ([`ChatSession::complete_turn`]) lands the assistant reply and releases
//! the busy flag. The UI drives the two halves separately so it never holds
//! the session across an await; [`ChatSession::submit`] composes them.

use std::sync::Arc;

use crate::ai::CompletionPort;
use crate::history;
use crate::intercept;
use crate::storage::StoragePort;
use crate::types::ChatMessage;
use crate::voice::{self, SpeechPort};

pub const NO_RESPONSE: &str = "No response.";
pub const REQUEST_FAILED: &str = "An error occurred while contacting the model.";

/// Outcome of the synchronous half of a submission.
#[derive(Clone, Debug, PartialEq)]
pub enum TurnStart {
    /// Blank input, or a turn already in flight. Nothing changed.
    Ignored,
    /// Answered from the intercept table; no network call was made.
    LocalResolved,
    /// The remote service is needed. The snapshot carries the full log,
    /// including the just-appended user message.
    RemotePending(Vec<ChatMessage>),
}

pub struct ChatSession {
    messages: Vec<ChatMessage>,
    pending_input: String,
    busy: bool,
    completion: Arc<dyn CompletionPort>,
    store: Arc<dyn StoragePort>,
    speech: Arc<dyn SpeechPort>,
}

impl ChatSession {
    /// Restores the session from the store, seeding the greeting when no
    /// usable history exists.
    pub fn restore(
        completion: Arc<dyn CompletionPort>,
        store: Arc<dyn StoragePort>,
        speech: Arc<dyn SpeechPort>,
    ) -> Self {
        let messages = history::load(store.as_ref());
        Self {
            messages,
            pending_input: String::new(),
            busy: false,
            completion,
            store,
            speech,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// True while a remote turn is awaiting resolution; the UI renders this
    /// as the typing indicator.
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn pending_input(&self) -> &str {
        &self.pending_input
    }

    pub fn set_pending_input(&mut self, text: impl Into<String>) {
        self.pending_input = text.into();
    }

    pub fn completion(&self) -> Arc<dyn CompletionPort> {
        Arc::clone(&self.completion)
    }

    pub fn speech(&self) -> Arc<dyn SpeechPort> {
        Arc::clone(&self.speech)
    }

    /// Synchronous half of a submission.
    ///
    /// Rejects the turn while one is already in flight and ignores blank
    /// input. Otherwise appends the user message with its raw text
    /// (whitespace preserved), clears the staged input, and either resolves
    /// from the intercept table or sets `busy` and hands back the snapshot
    /// for the remote call.
    pub fn begin_turn(&mut self) -> TurnStart {
        if self.busy || self.pending_input.trim().is_empty() {
            return TurnStart::Ignored;
        }

        let raw = std::mem::take(&mut self.pending_input);
        self.messages.push(ChatMessage::user(raw.as_str()));
        self.persist();

        if let Some(reply) = intercept::reply_for(&raw) {
            self.messages.push(ChatMessage::assistant(reply));
            self.persist();
            return TurnStart::LocalResolved;
        }

        self.busy = true;
        TurnStart::RemotePending(self.messages.clone())
    }

    /// Final half of the remote path: lands the assistant message and clears
    /// `busy` unconditionally. Every remote outcome funnels through here, so
    /// the flag always releases.
    pub fn complete_turn(&mut self, reply: String) {
        self.messages.push(ChatMessage::assistant(reply));
        self.persist();
        self.busy = false;
    }

    /// One full turn, submission through resolution. Local intercepts never
    /// touch the network; everything else is exactly one remote call.
    pub async fn submit(&mut self) {
        if let TurnStart::RemotePending(snapshot) = self.begin_turn() {
            let completion = Arc::clone(&self.completion);
            let reply = resolve_remote(completion.as_ref(), &snapshot).await;
            self.complete_turn(reply);
        }
    }

    /// One-shot voice capture: a recognized utterance replaces the staged
    /// input verbatim. An unavailable capability or an empty result leaves
    /// the input untouched.
    pub async fn capture_voice(&mut self) {
        let speech = Arc::clone(&self.speech);
        if let Some(transcript) = voice::capture_once(speech.as_ref()).await {
            self.pending_input = transcript;
        }
    }

    fn persist(&self) {
        history::save(self.store.as_ref(), &self.messages);
    }
}

/// Maps every remote outcome onto assistant-visible text. Transport and
/// parse failures are logged and folded into a fixed message; no error
/// crosses this boundary.
pub async fn resolve_remote(
    completion: &dyn CompletionPort,
    snapshot: &[ChatMessage],
) -> String {
    match completion.complete(snapshot).await {
        Ok(Some(reply)) => reply,
        Ok(None) => NO_RESPONSE.to_string(),
        Err(err) => {
            tracing::warn!("completion request failed: {err}");
            REQUEST_FAILED.to_string()
        }
    }
}
