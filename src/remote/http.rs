//! reqwest-backed chat backend.

use std::time::Duration;

use async_trait::async_trait;

use super::{ChatBackend, ChatReply, ChatRequest};
use crate::error::ChatError;

/// Posts requests to `{base_url}/api/chat`.
pub struct HttpChatBackend {
    client: reqwest::Client,
    url: String,
    timeout: Duration,
}

impl HttpChatBackend {
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: format!("{}/api/chat", base_url.trim_end_matches('/')),
            timeout,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl ChatBackend for HttpChatBackend {
    async fn send(&self, request: &ChatRequest) -> Result<ChatReply, ChatError> {
        let resp = self
            .client
            .post(&self.url)
            .timeout(self.timeout)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ChatError::Timeout {
                        timeout: self.timeout,
                    }
                } else {
                    ChatError::RequestFailed {
                        url: self.url.clone(),
                        reason: e.to_string(),
                    }
                }
            })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ChatError::BadStatus {
                status: status.as_u16(),
            });
        }

        resp.json::<ChatReply>()
            .await
            .map_err(|e| ChatError::InvalidResponse {
                reason: e.to_string(),
            })
    }
}
