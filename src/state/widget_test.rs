use super::*;
use crate::state::transcript::Message;

// =============================================================
// WidgetView defaults
// =============================================================

#[test]
fn widget_view_default_shows_welcome_and_enabled_controls() {
    let view = WidgetView::default();
    assert_eq!(view.entries, vec![ViewEntry::Welcome]);
    assert!(view.draft.is_empty());
    assert!(view.controls_enabled);
    assert_eq!(view.scroll_seq, 0);
    assert_eq!(view.focus_seq, 0);
}

// =============================================================
// Entry operations
// =============================================================

#[test]
fn append_and_remove_by_key() {
    let mut view = WidgetView::default();
    view.remove(EntryKey::Welcome);
    view.append(ViewEntry::Message { id: 4, message: Message::user("hi") });
    view.append(ViewEntry::Typing);
    view.remove(EntryKey::Typing);
    assert_eq!(view.entries, vec![ViewEntry::Message { id: 4, message: Message::user("hi") }]);
}

#[test]
fn remove_missing_key_is_noop() {
    let mut view = WidgetView::default();
    view.remove(EntryKey::Typing);
    assert_eq!(view.entries, vec![ViewEntry::Welcome]);
}

#[test]
fn replace_all_overwrites_entries() {
    let mut view = WidgetView::default();
    view.append(ViewEntry::Message { id: 0, message: Message::bot("x") });
    view.replace_all(&[ViewEntry::Welcome]);
    assert_eq!(view.entries, vec![ViewEntry::Welcome]);
}

#[test]
fn scroll_and_focus_requests_bump_sequences() {
    let mut view = WidgetView::default();
    view.request_scroll();
    view.request_scroll();
    view.request_focus();
    assert_eq!(view.scroll_seq, 2);
    assert_eq!(view.focus_seq, 1);
}
