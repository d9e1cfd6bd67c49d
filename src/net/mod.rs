//! Networking and platform adapters.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` talks to the chat/clear endpoints, `geolocation` wraps the browser
//! position API, and `types` defines the wire schema shared by both.

pub mod api;
pub mod geolocation;
pub mod types;
