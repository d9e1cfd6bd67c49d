use super::*;
use crate::state::transcript::ViewEntry;

#[test]
fn build_controller_uses_configured_copy() {
    let config = WidgetConfig::from_json(r#"{ "copy": { "placeholder": "Ask ZUS" } }"#).unwrap();
    let controller = build_controller(config, RwSignal::new(WidgetView::default()));
    assert_eq!(controller.config().copy.placeholder, "Ask ZUS");
    assert_eq!(controller.config().chat_endpoint, "/api/chat");
}

#[cfg(not(feature = "csr"))]
#[tokio::test]
async fn native_start_focuses_input_without_location() {
    let widget = RwSignal::new(WidgetView::default());
    let controller = build_controller(WidgetConfig::default(), widget);

    controller.start().await;

    assert_eq!(widget.get_untracked().focus_seq, 1);
    assert_eq!(controller.session().location(), None);
    assert!(!controller.session().location_attempted());
}

#[cfg(not(feature = "csr"))]
#[tokio::test]
async fn native_send_reports_connection_error_in_view() {
    let widget = RwSignal::new(WidgetView::default());
    let controller = build_controller(WidgetConfig::default(), widget);
    widget.update(|w| w.draft = "hi".to_owned());

    controller.send_message().await;

    let state = widget.get_untracked();
    assert!(state.controls_enabled);
    assert!(state.draft.is_empty());
    assert!(!state.entries.contains(&ViewEntry::Welcome));
    assert!(!state.entries.contains(&ViewEntry::Typing));
    assert_eq!(state.entries.len(), 2);
}
