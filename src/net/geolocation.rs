//! One-shot device position lookup.
//!
//! The browser's callback pair (`getCurrentPosition(success, error, opts)`)
//! is folded into a single `Promise` so the controller awaits one result at
//! one call site.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "geolocation_test.rs"]
mod geolocation_test;

use super::types::Coordinates;
use crate::config::GeoOptions;
use crate::error::LocationError;

#[cfg(feature = "csr")]
use wasm_bindgen::{JsCast, JsValue};

/// Source of device coordinates.
#[async_trait::async_trait(?Send)]
pub trait LocationSource {
    /// Whether the platform exposes a geolocation capability at all.
    fn is_available(&self) -> bool;

    /// Issue a single position request.
    ///
    /// # Errors
    ///
    /// Returns a [`LocationError`] on denial, timeout or an unusable fix.
    async fn current_position(&self, options: &GeoOptions) -> Result<Coordinates, LocationError>;
}

/// `navigator.geolocation` adapter. Unavailable outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserGeolocation;

#[cfg(feature = "csr")]
fn navigator_geolocation() -> Option<web_sys::Geolocation> {
    let window = web_sys::window()?;
    match window.navigator().geolocation() {
        Ok(geo) if !geo.is_undefined() && !geo.is_null() => Some(geo),
        Ok(_) | Err(_) => None,
    }
}

#[cfg(feature = "csr")]
fn set_option(target: &js_sys::Object, key: &str, value: &JsValue) {
    if let Err(e) = js_sys::Reflect::set(target, &JsValue::from_str(key), value) {
        log::debug!("position option {key} not set: {e:?}");
    }
}

#[cfg(feature = "csr")]
fn position_options(options: &GeoOptions) -> web_sys::PositionOptions {
    let opts = js_sys::Object::new();
    set_option(&opts, "enableHighAccuracy", &JsValue::from_bool(options.high_accuracy));
    set_option(&opts, "timeout", &JsValue::from(options.timeout_ms));
    set_option(&opts, "maximumAge", &JsValue::from(options.maximum_age_ms));
    opts.unchecked_into()
}

#[cfg(feature = "csr")]
fn read_f64(target: &JsValue, key: &str) -> Option<f64> {
    match js_sys::Reflect::get(target, &JsValue::from_str(key)) {
        Ok(value) => value.as_f64(),
        Err(_) => None,
    }
}

#[cfg(feature = "csr")]
fn coordinates_from_js(position: &JsValue) -> Result<Coordinates, LocationError> {
    let coords = js_sys::Reflect::get(position, &JsValue::from_str("coords"))
        .map_err(|e| LocationError::Other(format!("{e:?}")))?;
    match (read_f64(&coords, "latitude"), read_f64(&coords, "longitude")) {
        (Some(latitude), Some(longitude)) => Ok(Coordinates { latitude, longitude }),
        _ => Err(LocationError::Other("position without coordinates".to_owned())),
    }
}

#[cfg(feature = "csr")]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn location_error_from_js(error: &JsValue) -> LocationError {
    let message = match js_sys::Reflect::get(error, &JsValue::from_str("message")) {
        Ok(value) => value.as_string().unwrap_or_default(),
        Err(_) => String::new(),
    };
    match read_f64(error, "code") {
        Some(code) => LocationError::from_code(code as u16, &message),
        None => LocationError::Other(message),
    }
}

#[cfg(feature = "csr")]
#[async_trait::async_trait(?Send)]
impl LocationSource for BrowserGeolocation {
    fn is_available(&self) -> bool {
        navigator_geolocation().is_some()
    }

    async fn current_position(&self, options: &GeoOptions) -> Result<Coordinates, LocationError> {
        let geolocation = navigator_geolocation().ok_or(LocationError::Unsupported)?;
        let opts = position_options(options);
        let promise = js_sys::Promise::new(&mut |resolve: js_sys::Function, reject: js_sys::Function| {
            if let Err(e) =
                geolocation.get_current_position_with_error_callback_and_options(&resolve, Some(&reject), &opts)
            {
                if let Err(call_err) = reject.call1(&JsValue::NULL, &e) {
                    log::warn!("could not reject position request: {call_err:?}");
                }
            }
        });
        match wasm_bindgen_futures::JsFuture::from(promise).await {
            Ok(position) => coordinates_from_js(&position),
            Err(error) => Err(location_error_from_js(&error)),
        }
    }
}

#[cfg(not(feature = "csr"))]
#[async_trait::async_trait(?Send)]
impl LocationSource for BrowserGeolocation {
    fn is_available(&self) -> bool {
        false
    }

    async fn current_position(&self, _options: &GeoOptions) -> Result<Coordinates, LocationError> {
        Err(LocationError::Unsupported)
    }
}
