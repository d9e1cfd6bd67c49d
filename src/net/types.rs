//! Wire-protocol DTOs for the chat and clear endpoints.
//!
//! DESIGN
//! ======
//! The backend answers some failures (400, 404, 500) with a bare
//! `{ "error": ... }` body. A missing `success` therefore decodes as `false`,
//! making those replies application-level failures rather than decode errors.
//! Bookkeeping fields the widget never reads are left to serde to skip.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A device position in degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Body of `POST` to the chat endpoint. `location` serializes as `null`
/// when the session has none.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChatRequest {
    pub message: String,
    pub location: Option<Coordinates>,
}

/// Response of the chat endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ChatReply {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    /// Server-side failure detail. Logged, never shown.
    #[serde(default)]
    pub error: Option<String>,
}

/// Response of the clear endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ClearReply {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}
