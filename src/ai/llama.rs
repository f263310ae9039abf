use super::{ChatError, ChatResult, CompletionPort};
use crate::types::ChatMessage;
use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::env;

const DEFAULT_ENDPOINT: &str = "https://open-ai21.p.rapidapi.com/conversationllama";
const DEFAULT_HOST: &str = "open-ai21.p.rapidapi.com";

/// Client for the hosted conversation endpoint. Every call carries the full
/// message log; there is no retry, timeout, or cancellation path.
pub struct LlamaClient {
    client: Client,
    endpoint: String,
    api_key: String,
    api_host: String,
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    messages: &'a [ChatMessage],
    web_access: bool,
}

#[derive(Deserialize)]
struct CompletionResponse {
    result: Option<String>,
}

impl LlamaClient {
    pub fn new(endpoint: String, api_key: String, api_host: String) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            api_key,
            api_host,
        }
    }

    /// Create the client from environment configuration. `RAPIDAPI_KEY` is
    /// required; endpoint and host fall back to the hosted defaults.
    pub fn from_env() -> Result<Self> {
        let api_key = env::var("RAPIDAPI_KEY").map_err(|_| {
            anyhow::anyhow!("RAPIDAPI_KEY is not set. Add it to .env or the bundled config.")
        })?;
        let endpoint =
            env::var("ATUPELE_ENDPOINT").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
        let api_host = env::var("RAPIDAPI_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        Ok(Self::new(endpoint, api_key, api_host))
    }
}

/// Extracts the reply from a completion response body. A body without a
/// usable `result` field is `Ok(None)`; a body that is not JSON is an error.
pub fn parse_completion_body(body: &str) -> ChatResult<Option<String>> {
    let parsed: CompletionResponse = serde_json::from_str(body)?;
    Ok(parsed.result.filter(|text| !text.is_empty()))
}

#[async_trait]
impl CompletionPort for LlamaClient {
    async fn complete(&self, messages: &[ChatMessage]) -> ChatResult<Option<String>> {
        let response = self
            .client
            .post(&self.endpoint)
            .header("X-RapidAPI-Key", &self.api_key)
            .header("X-RapidAPI-Host", &self.api_host)
            .json(&CompletionRequest {
                messages,
                web_access: false,
            })
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ChatError::new(format!(
                "completion endpoint error {status}: {body}"
            )));
        }

        parse_completion_body(&body)
    }
}

/// Resolves the configured client on every call, so a key added to the
/// environment takes effect without restarting the app. Configuration
/// problems surface as chat errors at call time.
pub struct EnvCompletion;

#[async_trait]
impl CompletionPort for EnvCompletion {
    async fn complete(&self, messages: &[ChatMessage]) -> ChatResult<Option<String>> {
        let client = LlamaClient::from_env()
            .map_err(|e| ChatError::new(format!("completion service not configured: {e}")))?;
        client.complete(messages).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_reply_field() {
        let reply = parse_completion_body(r#"{"result":"Sunny"}"#).unwrap();
        assert_eq!(reply, Some("Sunny".to_string()));
    }

    #[test]
    fn missing_result_is_none() {
        assert_eq!(parse_completion_body("{}").unwrap(), None);
        assert_eq!(
            parse_completion_body(r#"{"status":"ok"}"#).unwrap(),
            None
        );
    }

    #[test]
    fn empty_result_is_none() {
        assert_eq!(parse_completion_body(r#"{"result":""}"#).unwrap(), None);
    }

    #[test]
    fn non_json_body_is_an_error() {
        assert!(parse_completion_body("<html>502</html>").is_err());
    }

    #[test]
    fn request_body_shape() {
        let messages = vec![ChatMessage::user("hi")];
        let request = CompletionRequest {
            messages: &messages,
            web_access: false,
        };
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(
            json,
            r#"{"messages":[{"role":"user","content":"hi"}],"web_access":false}"#
        );
    }
}
