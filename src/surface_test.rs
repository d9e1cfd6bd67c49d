use super::*;
use crate::state::transcript::Message;

// =============================================================
// SignalSurface
// =============================================================

#[test]
fn signal_surface_applies_entry_operations() {
    let surface = SignalSurface::new(RwSignal::new(WidgetView::default()));
    surface.remove(EntryKey::Welcome);
    surface.append(&ViewEntry::Message { id: 0, message: Message::user("hi") });
    surface.append(&ViewEntry::Typing);
    surface.remove(EntryKey::Typing);

    let entries = surface.view().get_untracked().entries;
    assert_eq!(entries, vec![ViewEntry::Message { id: 0, message: Message::user("hi") }]);
}

#[test]
fn signal_surface_replace_all_restores_welcome() {
    let surface = SignalSurface::new(RwSignal::new(WidgetView::default()));
    surface.append(&ViewEntry::Message { id: 0, message: Message::bot("x") });
    surface.replace_all(&[ViewEntry::Welcome]);
    assert_eq!(surface.view().get_untracked().entries, vec![ViewEntry::Welcome]);
}

#[test]
fn signal_surface_input_controls() {
    let view = RwSignal::new(WidgetView::default());
    let surface = SignalSurface::new(view);
    view.update(|v| v.draft = "  hello ".to_owned());

    assert_eq!(surface.input_value(), "  hello ");
    surface.clear_input();
    assert_eq!(surface.input_value(), "");

    surface.set_controls_enabled(false);
    assert!(!view.get_untracked().controls_enabled);
    surface.set_controls_enabled(true);
    assert!(view.get_untracked().controls_enabled);
}

#[test]
fn signal_surface_scroll_and_focus_bump_sequences() {
    let view = RwSignal::new(WidgetView::default());
    let surface = SignalSurface::new(view);
    surface.scroll_to_bottom();
    surface.focus_input();
    surface.focus_input();
    let state = view.get_untracked();
    assert_eq!(state.scroll_seq, 1);
    assert_eq!(state.focus_seq, 2);
}

// =============================================================
// BrowserDialogs
// =============================================================

#[cfg(not(feature = "csr"))]
#[test]
fn browser_dialogs_decline_natively() {
    assert!(!BrowserDialogs.confirm("Are you sure?"));
    BrowserDialogs.alert("nothing to see");
}
