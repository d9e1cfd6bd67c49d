//! Chat widget: transcript, typing indicator, input row and clear action.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders `WidgetView` entries and forwards clicks/keys to the controller,
//! which runs each pipeline on a local task. Autoscroll and focus follow
//! the view's sequence counters.

use std::rc::Rc;

use leptos::prelude::*;

use crate::app::WidgetController;
use crate::config::WelcomeCopy;
use crate::state::transcript::{RenderedContent, TYPING_INDICATOR_KEY, ViewEntry};
use crate::state::widget::WidgetView;
use crate::util::keys::{KeyIntent, classify_key};

/// The full chat widget.
#[component]
pub fn ChatWidget(controller: Rc<WidgetController>) -> impl IntoView {
    let widget = expect_context::<RwSignal<WidgetView>>();

    let messages_ref = NodeRef::<leptos::html::Div>::new();
    let input_ref = NodeRef::<leptos::html::Textarea>::new();
    let welcome = controller.config().welcome.clone();
    let placeholder = controller.config().copy.placeholder.clone();

    let scroll_seq = Memo::new(move |_| widget.with(|w| w.scroll_seq));
    let focus_seq = Memo::new(move |_| widget.with(|w| w.focus_seq));

    Effect::new(move || {
        scroll_seq.track();

        #[cfg(feature = "csr")]
        {
            if let Some(el) = messages_ref.get() {
                el.set_scroll_top(el.scroll_height());
            }
        }
    });

    Effect::new(move || {
        focus_seq.track();

        #[cfg(feature = "csr")]
        {
            if let Some(el) = input_ref.get() {
                if let Err(e) = el.focus() {
                    log::debug!("input focus failed: {e:?}");
                }
            }
        }
    });

    let send = {
        let controller = Rc::clone(&controller);
        move || {
            let controller = Rc::clone(&controller);
            leptos::task::spawn_local(async move {
                if let Some(outcome) = controller.send_message().await {
                    log::debug!("send settled: {outcome:?}");
                }
            });
        }
    };

    let on_send_click = {
        let send = send.clone();
        move |_| send()
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| match classify_key(&ev.key(), ev.shift_key()) {
        KeyIntent::Send => {
            ev.prevent_default();
            send();
        }
        KeyIntent::InsertNewline | KeyIntent::Passthrough => {}
    };

    let on_clear = move |_| {
        let controller = Rc::clone(&controller);
        leptos::task::spawn_local(async move {
            let outcome = controller.clear_conversation().await;
            log::debug!("clear settled: {outcome:?}");
        });
    };

    let controls_disabled = move || !widget.with(|w| w.controls_enabled);

    view! {
        <div class="chat-container">
            <div class="chat-header">
                <button class="clear-btn" type="button" on:click=on_clear>
                    "Clear"
                </button>
            </div>

            <div class="chat-messages" id="chatMessages" node_ref=messages_ref>
                {move || {
                    widget.with(|w| {
                        w.entries.iter().map(|entry| render_entry(entry, &welcome)).collect::<Vec<_>>()
                    })
                }}
            </div>

            <div class="chat-input-container">
                <textarea
                    class="message-input"
                    id="messageInput"
                    rows="1"
                    placeholder=placeholder
                    node_ref=input_ref
                    disabled=controls_disabled
                    prop:value=move || widget.with(|w| w.draft.clone())
                    on:input=move |ev| widget.update(|w| w.draft = event_target_value(&ev))
                    on:keydown=on_keydown
                ></textarea>
                <button
                    class="send-btn"
                    id="sendBtn"
                    type="button"
                    on:click=on_send_click
                    disabled=controls_disabled
                >
                    "Send"
                </button>
            </div>
        </div>
    }
}

fn render_entry(entry: &ViewEntry, welcome: &WelcomeCopy) -> AnyView {
    match entry {
        ViewEntry::Welcome => view! {
            <div class="welcome-message">
                <h2>{welcome.title.clone()}</h2>
                <p>{welcome.intro.clone()}</p>
                <p class="welcome-message__hint">{welcome.hint.clone()}</p>
            </div>
        }
        .into_any(),
        ViewEntry::Typing => view! {
            <div class="message bot" id=TYPING_INDICATOR_KEY>
                <div class="typing-indicator active">
                    <span></span>
                    <span></span>
                    <span></span>
                </div>
            </div>
        }
        .into_any(),
        ViewEntry::Message { message, .. } => {
            let frame_class = format!("message {}", message.origin.css_class());
            match message.rendered() {
                // User text goes in as a text node so markup stays literal.
                RenderedContent::Text(text) => view! {
                    <div class=frame_class>
                        <div class="message-content">{text}</div>
                    </div>
                }
                .into_any(),
                RenderedContent::Markup(html) => view! {
                    <div class=frame_class>
                        <div class="message-content" inner_html=html></div>
                    </div>
                }
                .into_any(),
            }
        }
    }
}
