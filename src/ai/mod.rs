/// Remote completion service integration.
///
/// One fixed HTTP endpoint answers the turns the local intercept table does
/// not. The session controller talks to it through [`CompletionPort`] so the
/// tests can substitute a scripted fake.
///
/// # Architecture
///
/// - `llama` - the hosted `conversationllama` client and its wire types
///
/// # Usage
///
/// ```rust,no_run
/// use atupele::ai::{CompletionPort, LlamaClient};
///
/// # async fn example() -> anyhow::Result<()> {
/// let client = LlamaClient::from_env()?;
/// let reply = client.complete(&[]).await;
/// # Ok(())
/// # }
/// ```
mod llama;

pub use llama::{EnvCompletion, LlamaClient, parse_completion_body};

use crate::types::ChatMessage;
use async_trait::async_trait;

// ============================================
// Error Types
// ============================================

#[derive(Debug, Clone)]
pub struct ChatError(String);

impl ChatError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

impl std::fmt::Display for ChatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ChatError {}

impl From<reqwest::Error> for ChatError {
    fn from(err: reqwest::Error) -> Self {
        ChatError::new(err.to_string())
    }
}

impl From<serde_json::Error> for ChatError {
    fn from(err: serde_json::Error) -> Self {
        ChatError::new(err.to_string())
    }
}

pub type ChatResult<T> = Result<T, ChatError>;

// ============================================
// Completion port
// ============================================

/// One request, one reply, full conversation as context. `Ok(None)` is a
/// well-formed response that carried no usable reply text; transport and
/// parse problems are `Err`.
#[async_trait]
pub trait CompletionPort: Send + Sync {
    async fn complete(&self, messages: &[ChatMessage]) -> ChatResult<Option<String>>;
}
