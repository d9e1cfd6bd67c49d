//! Root component, controller wiring and browser mount helpers.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use std::rc::Rc;

use leptos::prelude::*;

use crate::components::chat_widget::ChatWidget;
use crate::config::WidgetConfig;
use crate::controller::ChatWidgetController;
use crate::net::api::HttpChatBackend;
use crate::net::geolocation::BrowserGeolocation;
use crate::state::widget::WidgetView;
use crate::surface::{BrowserDialogs, SignalSurface};

/// The controller as wired for the browser.
pub type WidgetController = ChatWidgetController<HttpChatBackend, BrowserGeolocation, SignalSurface, BrowserDialogs>;

/// Build a browser controller rendering into `widget`.
pub fn build_controller(config: WidgetConfig, widget: RwSignal<WidgetView>) -> WidgetController {
    let backend = HttpChatBackend::from_config(&config);
    ChatWidgetController::new(config, backend, BrowserGeolocation, SignalSurface::new(widget), BrowserDialogs)
}

/// Root application component.
///
/// Provides the view signal, builds the controller once and kicks off the
/// startup work (input focus and the one-shot location request).
#[component]
pub fn App(config: WidgetConfig) -> impl IntoView {
    let widget = RwSignal::new(WidgetView::default());
    provide_context(widget);

    let controller = Rc::new(build_controller(config, widget));
    {
        let controller = Rc::clone(&controller);
        leptos::task::spawn_local(async move {
            controller.start().await;
        });
    }

    view! { <ChatWidget controller=controller/> }
}

/// Install the panic hook and console logger. Safe to call more than once.
#[cfg(feature = "csr")]
pub fn install_hooks() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::debug!("console logger already installed");
    }
}

/// Mount [`App`] into `<body>`.
#[cfg(feature = "csr")]
pub fn mount(config: WidgetConfig) {
    leptos::mount::mount_to_body(move || view! { <App config=config/> });
}
