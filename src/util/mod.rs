//! Pure helpers shared by the controller and the view.
//!
//! SYSTEM CONTEXT
//! ==============
//! Nothing here touches the browser, so formatting and key handling are
//! tested without a DOM.

pub mod keys;
pub mod markup;
