//! One-shot speech capture.
//!
//! A single activation yields at most one transcript; the recognizer stops
//! on its own after the first result. Recognition failure is "no result",
//! not an error.

use async_trait::async_trait;

/// Recognition locale. The capability is monolingual.
pub const CAPTURE_LOCALE: &str = "en-US";

#[async_trait]
pub trait SpeechPort: Send + Sync {
    /// Whether the platform exposes a recognizer at all.
    fn is_available(&self) -> bool;

    /// Listen once and resolve with the recognized utterance, if any.
    async fn recognize_once(&self) -> Option<String>;
}

/// Begins one-shot listening if the capability is available; otherwise the
/// whole gesture is a no-op.
pub async fn capture_once(speech: &dyn SpeechPort) -> Option<String> {
    if !speech.is_available() {
        tracing::debug!("speech capture unavailable on this platform");
        return None;
    }
    speech.recognize_once().await
}

/// Probe for the host recognizer. No backend ships for the current targets,
/// so the capture button degrades to a no-op; the port stays in place for
/// platforms that grow one.
#[derive(Default)]
pub struct SystemSpeech;

#[async_trait]
impl SpeechPort for SystemSpeech {
    fn is_available(&self) -> bool {
        false
    }

    async fn recognize_once(&self) -> Option<String> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unavailable_capability_is_a_noop() {
        let speech = SystemSpeech;
        assert!(!speech.is_available());
        assert_eq!(capture_once(&speech).await, None);
    }
}
