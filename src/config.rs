//! Widget configuration.
//!
//! Every field has a default so the host page may override any subset by
//! passing a JSON document to `mount_with_config`. There are no environment
//! variables and nothing is persisted.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::error::WidgetError;

pub const DEFAULT_CHAT_ENDPOINT: &str = "/api/chat";
pub const DEFAULT_CLEAR_ENDPOINT: &str = "/api/clear";
pub const DEFAULT_GEO_TIMEOUT_MS: u32 = 5_000;
pub const DEFAULT_GEO_MAXIMUM_AGE_MS: u32 = 300_000;

/// Top-level widget configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    pub chat_endpoint: String,
    pub clear_endpoint: String,
    pub geolocation: GeoOptions,
    pub welcome: WelcomeCopy,
    pub copy: WidgetCopy,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            chat_endpoint: DEFAULT_CHAT_ENDPOINT.to_owned(),
            clear_endpoint: DEFAULT_CLEAR_ENDPOINT.to_owned(),
            geolocation: GeoOptions::default(),
            welcome: WelcomeCopy::default(),
            copy: WidgetCopy::default(),
        }
    }
}

impl WidgetConfig {
    /// Parse a (possibly partial) JSON override on top of the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::Config`] if the document is not valid JSON or a
    /// field has the wrong type.
    pub fn from_json(raw: &str) -> Result<Self, WidgetError> {
        serde_json::from_str(raw).map_err(|e| WidgetError::Config(e.to_string()))
    }
}

/// Options for the one-shot geolocation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GeoOptions {
    pub high_accuracy: bool,
    pub timeout_ms: u32,
    /// A cached fix younger than this may be returned immediately.
    pub maximum_age_ms: u32,
}

impl Default for GeoOptions {
    fn default() -> Self {
        Self { high_accuracy: false, timeout_ms: DEFAULT_GEO_TIMEOUT_MS, maximum_age_ms: DEFAULT_GEO_MAXIMUM_AGE_MS }
    }
}

/// Greeting shown before the first message and restored on clear.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WelcomeCopy {
    pub title: String,
    pub intro: String,
    pub hint: String,
}

impl Default for WelcomeCopy {
    fn default() -> Self {
        Self {
            title: "Welcome to ZUS Coffee!".to_owned(),
            intro: "I'm your virtual assistant. I can help you find outlets, browse products, and answer questions \
                    about our services."
                .to_owned(),
            hint: "Try asking: \"What mugs do you have?\" or \"Show me outlets in KL\"".to_owned(),
        }
    }
}

/// Fixed user-facing strings. Raw error details never replace these.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WidgetCopy {
    pub reply_failed: String,
    pub connection_error: String,
    pub clear_confirm: String,
    pub clear_failed: String,
    pub placeholder: String,
}

impl Default for WidgetCopy {
    fn default() -> Self {
        Self {
            reply_failed: "Sorry, something went wrong. Please try again.".to_owned(),
            connection_error: "Connection error. Please check your internet and try again.".to_owned(),
            clear_confirm: "Are you sure you want to clear the conversation?".to_owned(),
            clear_failed: "Could not clear conversation. Please try again.".to_owned(),
            placeholder: "Type your message...".to_owned(),
        }
    }
}
