//! REST calls to the backend chat and clear endpoints.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: [`HttpChatBackend`] reports [`WidgetError::Unavailable`]
//! since fetch only exists in the browser.
//!
//! ERROR HANDLING
//! ==============
//! A request that never completes is `Transport`; a body that is not the
//! expected JSON is `Decode`. Non-2xx statuses are still decoded because the
//! backend reports `{ "success": false }` alongside a 500.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ChatReply, ChatRequest, ClearReply};
use crate::config::WidgetConfig;
use crate::error::WidgetError;

/// Remote conversational backend.
#[async_trait::async_trait(?Send)]
pub trait ChatBackend {
    /// Post one user message and wait for the reply.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::Transport`] or [`WidgetError::Decode`] when no
    /// usable reply arrives. An application-level failure is an `Ok` reply
    /// with `success == false`.
    async fn send_chat(&self, request: &ChatRequest) -> Result<ChatReply, WidgetError>;

    /// Ask the backend to forget the current conversation.
    ///
    /// # Errors
    ///
    /// Same contract as [`ChatBackend::send_chat`].
    async fn clear_conversation(&self) -> Result<ClearReply, WidgetError>;
}

/// `fetch`-backed implementation of [`ChatBackend`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpChatBackend {
    chat_endpoint: String,
    clear_endpoint: String,
}

impl HttpChatBackend {
    pub fn new(chat_endpoint: impl Into<String>, clear_endpoint: impl Into<String>) -> Self {
        Self { chat_endpoint: chat_endpoint.into(), clear_endpoint: clear_endpoint.into() }
    }

    pub fn from_config(config: &WidgetConfig) -> Self {
        Self::new(config.chat_endpoint.clone(), config.clear_endpoint.clone())
    }

    pub fn chat_endpoint(&self) -> &str {
        &self.chat_endpoint
    }

    pub fn clear_endpoint(&self) -> &str {
        &self.clear_endpoint
    }
}

#[cfg(any(test, feature = "csr"))]
fn decode_failed(endpoint: &str, status: u16, detail: &str) -> WidgetError {
    WidgetError::Decode(format!("{endpoint} returned {status}: {detail}"))
}

#[cfg(feature = "csr")]
#[async_trait::async_trait(?Send)]
impl ChatBackend for HttpChatBackend {
    async fn send_chat(&self, request: &ChatRequest) -> Result<ChatReply, WidgetError> {
        let resp = gloo_net::http::Request::post(&self.chat_endpoint)
            .json(request)
            .map_err(|e| WidgetError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| WidgetError::Transport(e.to_string()))?;
        let status = resp.status();
        resp.json::<ChatReply>()
            .await
            .map_err(|e| decode_failed(&self.chat_endpoint, status, &e.to_string()))
    }

    async fn clear_conversation(&self) -> Result<ClearReply, WidgetError> {
        let resp = gloo_net::http::Request::post(&self.clear_endpoint)
            .send()
            .await
            .map_err(|e| WidgetError::Transport(e.to_string()))?;
        let status = resp.status();
        resp.json::<ClearReply>()
            .await
            .map_err(|e| decode_failed(&self.clear_endpoint, status, &e.to_string()))
    }
}

#[cfg(not(feature = "csr"))]
#[async_trait::async_trait(?Send)]
impl ChatBackend for HttpChatBackend {
    async fn send_chat(&self, _request: &ChatRequest) -> Result<ChatReply, WidgetError> {
        Err(WidgetError::Unavailable("fetch"))
    }

    async fn clear_conversation(&self) -> Result<ClearReply, WidgetError> {
        Err(WidgetError::Unavailable("fetch"))
    }
}
