//! Chat widget interaction controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! Composes the four per-action pipelines: location acquisition at startup,
//! message rendering, the send pipeline and the clear pipeline. All I/O goes
//! through [`ChatBackend`], [`LocationSource`], [`Surface`] and [`Dialogs`],
//! so the same controller drives the browser and the tests.
//!
//! CONCURRENCY
//! ===========
//! Single-threaded and cooperative. The only suspension points are the chat
//! call, the clear call and the position request. No `RefCell` borrow is held
//! across any of them. Disabled input controls are the only guard against a
//! second send; nothing is locked, de-duplicated or cancelled.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::cell::{Cell, Ref, RefCell};

use crate::config::WidgetConfig;
use crate::net::api::ChatBackend;
use crate::net::geolocation::LocationSource;
use crate::net::types::{ChatReply, ChatRequest, Coordinates};
use crate::state::session::SessionContext;
use crate::state::transcript::{EntryKey, Message, Origin, Transcript};
use crate::surface::{Dialogs, Surface};

/// Where the send pipeline currently is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SendPhase {
    #[default]
    Idle,
    /// A non-empty draft was accepted and is being rendered.
    Composing,
    /// The chat request is in flight.
    Sending,
    Rendering,
    Failed,
}

/// How a send invocation settled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SendOutcome {
    /// The backend replied and the reply was rendered.
    Replied,
    /// The backend answered without `success: true`.
    Rejected,
    /// The request failed, the response was not decodable, or a successful
    /// response carried no reply text.
    ConnectionFailed,
}

/// How a clear invocation settled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClearOutcome {
    Declined,
    Cleared,
    Failed,
}

pub struct ChatWidgetController<B, L, S, D> {
    config: WidgetConfig,
    backend: B,
    locator: L,
    surface: S,
    dialogs: D,
    session: SessionContext,
    transcript: RefCell<Transcript>,
    phase: Cell<SendPhase>,
}

/// Disables the input controls while alive and restores them on drop, so
/// recovery runs on every exit path of a send, including a dropped future.
struct InputRecovery<'a, S: Surface> {
    surface: &'a S,
    phase: &'a Cell<SendPhase>,
}

impl<'a, S: Surface> InputRecovery<'a, S> {
    fn engage(surface: &'a S, phase: &'a Cell<SendPhase>) -> Self {
        surface.set_controls_enabled(false);
        Self { surface, phase }
    }
}

impl<S: Surface> Drop for InputRecovery<'_, S> {
    fn drop(&mut self) {
        self.surface.set_controls_enabled(true);
        self.surface.focus_input();
        self.phase.set(SendPhase::Idle);
    }
}

impl<B, L, S, D> ChatWidgetController<B, L, S, D>
where
    B: ChatBackend,
    L: LocationSource,
    S: Surface,
    D: Dialogs,
{
    pub fn new(config: WidgetConfig, backend: B, locator: L, surface: S, dialogs: D) -> Self {
        Self {
            config,
            backend,
            locator,
            surface,
            dialogs,
            session: SessionContext::default(),
            transcript: RefCell::new(Transcript::default()),
            phase: Cell::new(SendPhase::Idle),
        }
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    pub fn phase(&self) -> SendPhase {
        self.phase.get()
    }

    pub fn transcript(&self) -> Ref<'_, Transcript> {
        self.transcript.borrow()
    }

    /// Page-load work: focus the input, then try for a location once.
    pub async fn start(&self) {
        self.surface.focus_input();
        self.acquire_location_once().await;
    }

    // =========================================================================
    // LOCATION
    // =========================================================================

    /// Request the device position at most once per controller lifetime.
    ///
    /// A no-op when already attempted or when the platform has no
    /// geolocation. Failures are logged and leave the session without a
    /// location; nothing is shown to the user.
    pub async fn acquire_location_once(&self) -> Option<Coordinates> {
        if !self.locator.is_available() || !self.session.begin_location_attempt() {
            return self.session.location();
        }

        log::info!("requesting user location");
        match self.locator.current_position(&self.config.geolocation).await {
            Ok(coords) => {
                if self.session.record_location(coords) {
                    log::info!("location obtained: {}, {}", coords.latitude, coords.longitude);
                }
            }
            Err(e) => log::info!("location access denied or unavailable: {e}"),
        }
        self.session.location()
    }

    // =========================================================================
    // RENDERING
    // =========================================================================

    /// Append a message, replacing the welcome sentinel on first use, and
    /// scroll to the bottom.
    pub fn append_message(&self, text: &str, origin: Origin) {
        let message = Message { text: text.to_owned(), origin };
        let (removed_welcome, entry) = {
            let mut transcript = self.transcript.borrow_mut();
            let removed = transcript.remove_welcome();
            (removed, transcript.push(message))
        };
        if removed_welcome {
            self.surface.remove(EntryKey::Welcome);
        }
        self.surface.append(&entry);
        self.surface.scroll_to_bottom();
    }

    pub fn show_typing(&self) {
        let added = self.transcript.borrow_mut().show_typing();
        if let Some(entry) = added {
            self.surface.append(&entry);
            self.surface.scroll_to_bottom();
        }
    }

    pub fn hide_typing(&self) {
        let removed = self.transcript.borrow_mut().hide_typing();
        if removed {
            self.surface.remove(EntryKey::Typing);
        }
    }

    // =========================================================================
    // SEND
    // =========================================================================

    /// Send the current draft.
    ///
    /// Returns `None` without side effects when the trimmed draft is empty.
    /// Otherwise the user message is rendered, the draft cleared, controls
    /// disabled and the typing indicator shown before the request goes out.
    /// Controls are re-enabled and focused on every exit path.
    pub async fn send_message(&self) -> Option<SendOutcome> {
        let text = self.surface.input_value().trim().to_owned();
        if text.is_empty() {
            return None;
        }

        self.phase.set(SendPhase::Composing);
        self.append_message(&text, Origin::User);
        self.surface.clear_input();

        let _recovery = InputRecovery::engage(&self.surface, &self.phase);
        self.show_typing();

        self.phase.set(SendPhase::Sending);
        let request = ChatRequest { message: text, location: self.session.location() };
        let result = self.backend.send_chat(&request).await;
        self.hide_typing();

        let outcome = match result {
            Ok(ChatReply { success: true, message: Some(reply_text), .. }) => {
                self.phase.set(SendPhase::Rendering);
                self.append_message(&reply_text, Origin::Bot);
                SendOutcome::Replied
            }
            Ok(ChatReply { success: true, message: None, .. }) => {
                log::error!("chat endpoint reported success without a reply");
                self.render_connection_error()
            }
            Ok(reply) => {
                log::warn!("chat endpoint reported failure: {}", reply.error.as_deref().unwrap_or("no detail"));
                self.phase.set(SendPhase::Failed);
                self.append_message(&self.config.copy.reply_failed, Origin::Bot);
                SendOutcome::Rejected
            }
            Err(e) => {
                log::error!("chat request failed: {e}");
                self.render_connection_error()
            }
        };
        Some(outcome)
    }

    fn render_connection_error(&self) -> SendOutcome {
        self.phase.set(SendPhase::Failed);
        self.append_message(&self.config.copy.connection_error, Origin::Bot);
        SendOutcome::ConnectionFailed
    }

    // =========================================================================
    // CLEAR
    // =========================================================================

    /// Confirm, ask the backend to reset, then restore the welcome sentinel.
    ///
    /// Any failure alerts the user with fixed copy and leaves the transcript
    /// as it was.
    pub async fn clear_conversation(&self) -> ClearOutcome {
        let copy = &self.config.copy;
        if !self.dialogs.confirm(&copy.clear_confirm) {
            return ClearOutcome::Declined;
        }

        match self.backend.clear_conversation().await {
            Ok(reply) if reply.success => {
                let entries = self.transcript.borrow_mut().reset().to_vec();
                self.surface.replace_all(&entries);
                self.surface.focus_input();
                ClearOutcome::Cleared
            }
            Ok(reply) => {
                log::warn!(
                    "clear endpoint reported failure: {}",
                    reply.error.as_deref().unwrap_or("no detail")
                );
                self.dialogs.alert(&copy.clear_failed);
                ClearOutcome::Failed
            }
            Err(e) => {
                log::error!("clear request failed: {e}");
                self.dialogs.alert(&copy.clear_failed);
                ClearOutcome::Failed
            }
        }
    }
}
