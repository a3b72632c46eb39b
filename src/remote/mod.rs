//! The `/api/chat` endpoint as seen from the widget.
//!
//! The widget forwards anything it can't answer locally through a
//! `ChatBackend`. `HttpChatBackend` is the real implementation; tests plug
//! in stubs.

pub mod http;
pub mod wire;

use async_trait::async_trait;

use crate::error::ChatError;

pub use http::HttpChatBackend;
pub use wire::{ChatReply, ChatRequest};

/// Something that can answer a chat request.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Send one request and wait for the reply. No retries.
    async fn send(&self, request: &ChatRequest) -> Result<ChatReply, ChatError>;
}
