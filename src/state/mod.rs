//! Widget state models.
//!
//! DESIGN
//! ======
//! `transcript` is the controller's ordered view model, `session` holds the
//! page-lifetime location context, and `widget` is the reactive mirror the
//! Leptos component renders from.

pub mod session;
pub mod transcript;
pub mod widget;
