//! Loading and saving the conversation log.
//!
//! The whole log is serialized as one JSON array under a fixed key. Writes
//! are best-effort: the in-memory log stays authoritative for the running
//! session even when the store rejects a write.

use crate::storage::StoragePort;
use crate::types::ChatMessage;

pub const STORAGE_KEY: &str = "atupeleMessages";

pub const GREETING: &str = "Hello! Welcome to AtupeleGPT. How can I assist you today?";

/// The single-message log a fresh profile starts from.
pub fn seed() -> Vec<ChatMessage> {
    vec![ChatMessage::assistant(GREETING)]
}

/// Returns the persisted history if present, parseable, and non-empty;
/// otherwise seeds the greeting and writes it back. A missing key and a
/// corrupt payload are both treated as "no history". Never fails.
pub fn load(store: &dyn StoragePort) -> Vec<ChatMessage> {
    let restored = store
        .get(STORAGE_KEY)
        .and_then(|raw| serde_json::from_str::<Vec<ChatMessage>>(&raw).ok())
        .filter(|messages| !messages.is_empty());

    match restored {
        Some(messages) => messages,
        None => {
            let seeded = seed();
            save(store, &seeded);
            seeded
        }
    }
}

/// Overwrites the stored log with the full message sequence. Failures are
/// logged and swallowed.
pub fn save(store: &dyn StoragePort, messages: &[ChatMessage]) {
    match serde_json::to_string(messages) {
        Ok(serialized) => {
            if let Err(err) = store.set(STORAGE_KEY, &serialized) {
                tracing::warn!("failed to persist chat history: {err}");
            }
        }
        Err(err) => tracing::warn!("failed to serialize chat history: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use crate::types::Role;

    #[test]
    fn fresh_store_seeds_greeting() {
        let store = MemoryStore::new();
        let log = load(&store);
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].role, Role::Assistant);
        assert_eq!(log[0].content, GREETING);
        // The seeded greeting is written back so the next load finds it.
        assert!(store.get(STORAGE_KEY).is_some());
    }

    #[test]
    fn save_then_load_round_trips() {
        let store = MemoryStore::new();
        let log = vec![
            ChatMessage::assistant(GREETING),
            ChatMessage::user("hello there"),
            ChatMessage::assistant("Hi!"),
        ];
        save(&store, &log);
        assert_eq!(load(&store), log);
    }

    #[test]
    fn corrupt_payload_is_no_history() {
        let store = MemoryStore::new();
        store.set(STORAGE_KEY, "{not json").expect("Failed to set");
        assert_eq!(load(&store), seed());
    }

    #[test]
    fn empty_list_is_no_history() {
        let store = MemoryStore::new();
        store.set(STORAGE_KEY, "[]").expect("Failed to set");
        assert_eq!(load(&store), seed());
    }
}
