//! UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the widget from the `WidgetView` signal provided by
//! [`crate::app::App`] and forward user actions to the controller.

pub mod chat_widget;
