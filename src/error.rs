//! Error types for the widget's remote calls, configuration and location.
//!
//! ERROR HANDLING
//! ==============
//! None of these reach the user verbatim. Pipelines log the error and show
//! fixed copy from [`crate::config::WidgetCopy`] instead.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Errors produced by configuration parsing and the remote endpoints.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WidgetError {
    /// The host-supplied configuration document could not be parsed.
    #[error("config parse failed: {0}")]
    Config(String),

    /// The request never completed (network down, CORS, aborted).
    #[error("request failed: {0}")]
    Transport(String),

    /// The response body was not the expected JSON shape.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// The adapter has no backing platform in this build.
    #[error("{0} not available outside the browser")]
    Unavailable(&'static str),
}

/// Reasons a geolocation request yields no coordinates.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocationError {
    /// The platform exposes no geolocation capability.
    #[error("geolocation unsupported")]
    Unsupported,

    /// The user (or a permissions policy) refused access.
    #[error("location permission denied")]
    PermissionDenied,

    /// The device could not determine a position.
    #[error("position unavailable")]
    PositionUnavailable,

    /// No fix arrived within the configured timeout.
    #[error("location request timed out")]
    Timeout,

    /// Anything the platform reported that does not map to a known code.
    #[error("location request failed: {0}")]
    Other(String),
}

impl LocationError {
    /// Map a `GeolocationPositionError.code` to a variant.
    #[must_use]
    pub fn from_code(code: u16, message: &str) -> Self {
        match code {
            1 => Self::PermissionDenied,
            2 => Self::PositionUnavailable,
            3 => Self::Timeout,
            _ => Self::Other(message.to_owned()),
        }
    }
}
