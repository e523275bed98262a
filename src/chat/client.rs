//! Remote chat client
//!
//! Posts `{"message": …}` to the chat service and reads the reply either as
//! one plain-text body or as an incremental byte stream.

use async_trait::async_trait;
use futures_util::stream::{BoxStream, StreamExt};
use reqwest::{Client, Response};
use serde::Serialize;
use std::time::Duration;

use super::error::ChatError;

/// Produces a bot reply for a user message
#[async_trait]
pub trait ChatBackend: Send + Sync {
    async fn reply(&self, message: &str) -> Result<String, ChatError>;
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
}

/// Strip surrounding quotes and whitespace from a reply body
pub fn clean_reply(text: &str) -> String {
    text.trim_matches(|c: char| c == '"' || c == '\'' || c.is_whitespace())
        .to_string()
}

/// Incremental UTF-8 decoder for streamed bodies.
///
/// Holds back a trailing partial character until the next chunk completes it.
#[derive(Debug, Default)]
pub struct Utf8Chunker {
    pending: Vec<u8>,
}

impl Utf8Chunker {
    pub fn push(&mut self, bytes: &[u8]) -> String {
        self.pending.extend_from_slice(bytes);

        let mut text = String::new();
        loop {
            let err = match std::str::from_utf8(&self.pending) {
                Ok(valid) => {
                    text.push_str(valid);
                    self.pending.clear();
                    return text;
                }
                Err(e) => e,
            };

            match err.error_len() {
                // Invalid bytes: replace them, keep decoding what follows
                Some(len) => {
                    let end = err.valid_up_to() + len;
                    text.push_str(&String::from_utf8_lossy(&self.pending[..end]));
                    self.pending.drain(..end);
                }
                None => {
                    let end = err.valid_up_to();
                    text.push_str(&String::from_utf8_lossy(&self.pending[..end]));
                    self.pending.drain(..end);
                    return text;
                }
            }
        }
    }

    /// Flush whatever is left at end of stream
    pub fn finish(&mut self) -> String {
        let text = String::from_utf8_lossy(&self.pending).into_owned();
        self.pending.clear();
        text
    }
}

/// HTTP client for the remote chat endpoint
#[derive(Debug, Clone)]
pub struct ChatClient {
    client: Client,
    endpoint: String,
}

impl ChatClient {
    /// `base_url` is the service root; requests go to `{base_url}/api/chat`
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ChatError> {
        let base_url = base_url.trim_end_matches('/');
        if base_url.is_empty() {
            return Err(ChatError::Config("chat base URL is empty".to_string()));
        }

        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: format!("{}/api/chat", base_url),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn post(&self, message: &str) -> Result<Response, ChatError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&ChatRequest { message })
            .send()
            .await
            .map_err(ChatError::from_transport)?;

        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            let text = response.text().await.unwrap_or_default();
            Err(ChatError::Remote {
                status: status.as_u16(),
                message: text,
            })
        }
    }

    /// Stream the reply as it arrives
    pub async fn reply_stream(
        &self,
        message: &str,
    ) -> Result<BoxStream<'static, Result<String, ChatError>>, ChatError> {
        let response = self.post(message).await?;
        let mut decoder = Utf8Chunker::default();

        Ok(response
            .bytes_stream()
            .map(move |chunk| -> Result<String, ChatError> {
                let bytes = chunk.map_err(ChatError::from_transport)?;
                Ok(decoder.push(&bytes))
            })
            .boxed())
    }
}

#[async_trait]
impl ChatBackend for ChatClient {
    async fn reply(&self, message: &str) -> Result<String, ChatError> {
        tracing::debug!(endpoint = %self.endpoint, len = message.len(), "Relaying chat message");
        let response = self.post(message).await?;
        let text = response.text().await.map_err(ChatError::from_transport)?;
        Ok(clean_reply(&text))
    }
}
