//! The in-call screen
//!
//! [`InCallScreen`] is the glue between call-state notifications and the UI
//! panels of the in-call screen. It owns the [`ModalDialogController`] and
//! a handful of flags (foreground, pending dialpad request, conference
//! manager shown, finishing); everything else is reached through the
//! collaborator traits.
//!
//! Host lifecycle callbacks arrive through [`ScreenLifecycle`]; input and
//! call-state notifications through the `on_*` methods or, when driven by
//! the [`ScreenEventLoop`](crate::event_loop::ScreenEventLoop), through
//! [`InCallScreen::handle_event`].
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐  ScreenEvent   ┌─────────────────────────────┐
//! │ host / calls │ ─────────────▶ │        InCallScreen         │
//! └──────────────┘                │ ┌─────────────────────────┐ │
//!                                 │ │  ModalDialogController  │─┼─▶ DialogHost
//!                                 │ └─────────────────────────┘ │
//!                                 └──┬──────────┬────────────┬──┘
//!                                    ▼          ▼            ▼
//!                              InCallPresenter  panels   WindowHost
//! ```

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::call::{Call, CallId, CallType};
use crate::classify::{classify_disconnect, classify_supp_service_failure};
use crate::collaborators::{
    AnswerPanel, CallButtonPanel, CallCommands, CallRegistry, ConferenceManagerPanel,
    DialpadPanel, HideMode, InCallPresenter, InCallState, Orientation, ProximitySensor,
};
use crate::config::{CoverWindow, ScreenConfig};
use crate::consent::{ConsentButton, ConsentDecision};
use crate::dialog::{DialogId, ModalDialogController};
use crate::error::{InCallError, InCallResult};
use crate::events::{EventEmitter, LifecyclePhase, ScreenEvent, ScreenIntent, ScreenNotification};
use crate::input::{KeyCode, KeyEvent};
use crate::messages::MessageId;

/// Host lifecycle, expressed as explicit events
pub trait ScreenLifecycle {
    /// Screen created: wire panels and apply settings
    fn on_create(&mut self);

    /// Screen about to become visible: attach to the presenter
    fn on_start(&mut self);

    /// Screen visible and interactive
    fn on_foreground(&mut self);

    /// Screen lost focus or went behind another screen
    fn on_background(&mut self);

    /// Screen no longer visible
    fn on_stop(&mut self);

    /// Screen destroyed
    fn on_teardown(&mut self);
}

/// System bar appearance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemBarStyle {
    /// Status bar drawn over content
    pub translucent_status: bool,
    /// Navigation bar drawn over content
    pub translucent_navigation: bool,
}

/// Screen layout for the flip cover state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoverLayout {
    /// Cover closed: content confined to the cover window, fullscreen, touches off
    Covered {
        /// Content width
        width: i32,
        /// Call card height
        height: i32,
    },
    /// Cover open: normal layout
    Uncovered,
}

impl CoverLayout {
    /// Layout for the given lid state
    pub fn for_lid(closed: bool, window: &CoverWindow) -> Self {
        if closed {
            CoverLayout::Covered {
                width: window.width(),
                height: window.height(),
            }
        } else {
            CoverLayout::Uncovered
        }
    }

    /// Whether touches should reach the screen
    pub fn touchable(&self) -> bool {
        matches!(self, CoverLayout::Uncovered)
    }
}

/// Window-level operations performed by the host
pub trait WindowHost: Send + Sync {
    /// Dismiss (or stop dismissing) the keyguard while the screen shows
    fn set_dismiss_keyguard(&self, dismiss: bool);

    /// Apply system bar translucency
    fn apply_system_bars(&self, style: SystemBarStyle);

    /// Lay out the screen for a cover state
    fn apply_cover_layout(&self, layout: CoverLayout);

    /// Start or stop delivering lid state changes
    fn set_lid_listener(&self, listening: bool);
}

/// The panels making up the screen
#[derive(Clone)]
pub struct ScreenPanels {
    /// DTMF dialpad
    pub dialpad: Arc<dyn DialpadPanel>,
    /// Call buttons
    pub call_buttons: Arc<dyn CallButtonPanel>,
    /// Incoming call answer panel
    pub answer: Arc<dyn AnswerPanel>,
    /// Conference manager
    pub conference: Arc<dyn ConferenceManagerPanel>,
}

/// Outcome of the back button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BackDisposition {
    /// The screen handled it
    Consumed,
    /// Let the host do its default
    Default,
}

/// Outcome of a finish request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FinishDecision {
    /// The screen may go away
    Finished,
    /// A dialog is still pending; the screen stays
    Deferred,
}

/// One entry in the modify-call option list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModifyCallOption {
    /// Type the call would change to
    pub call_type: CallType,
    /// Label shown for the option
    pub label: MessageId,
}

/// Option list offered when the user asks to change the call type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModifyCallOptions {
    /// Call the options apply to
    pub call_id: CallId,
    /// List title
    pub title: MessageId,
    /// Options in display order
    pub options: Vec<ModifyCallOption>,
    /// Index of the call's current type, if it is one of the options
    pub selected: Option<usize>,
}

const MODIFY_CALL_OPTIONS: [ModifyCallOption; 4] = [
    ModifyCallOption {
        call_type: CallType::Voice,
        label: MessageId::ModifyCallOptionVoice,
    },
    ModifyCallOption {
        call_type: CallType::VtRx,
        label: MessageId::ModifyCallOptionVtRx,
    },
    ModifyCallOption {
        call_type: CallType::VtTx,
        label: MessageId::ModifyCallOptionVtTx,
    },
    ModifyCallOption {
        call_type: CallType::Vt,
        label: MessageId::ModifyCallOptionVt,
    },
];

/// Framework-independent in-call screen controller
pub struct InCallScreen {
    registry: Arc<dyn CallRegistry>,
    commands: Arc<dyn CallCommands>,
    presenter: Arc<dyn InCallPresenter>,
    proximity: Arc<dyn ProximitySensor>,
    window: Arc<dyn WindowHost>,
    panels: ScreenPanels,
    dialogs: ModalDialogController,
    config: ScreenConfig,
    cover: Option<CoverWindow>,
    emitter: EventEmitter,

    phase: LifecyclePhase,
    is_foreground: bool,
    show_dialpad_requested: bool,
    conference_manager_shown: bool,
    finishing: bool,
    lid_listening: bool,
}

impl InCallScreen {
    /// Assemble a screen; prefer [`InCallScreenBuilder`](crate::builder::InCallScreenBuilder)
    pub(crate) fn new(
        registry: Arc<dyn CallRegistry>,
        commands: Arc<dyn CallCommands>,
        presenter: Arc<dyn InCallPresenter>,
        proximity: Arc<dyn ProximitySensor>,
        window: Arc<dyn WindowHost>,
        panels: ScreenPanels,
        dialogs: ModalDialogController,
        config: ScreenConfig,
        emitter: EventEmitter,
    ) -> Self {
        let cover = config.cover_window();
        Self {
            registry,
            commands,
            presenter,
            proximity,
            window,
            panels,
            dialogs,
            config,
            cover,
            emitter,
            phase: LifecyclePhase::Uninitialized,
            is_foreground: false,
            show_dialpad_requested: false,
            conference_manager_shown: false,
            finishing: false,
            lid_listening: false,
        }
    }

    /// Current lifecycle phase
    pub fn phase(&self) -> LifecyclePhase {
        self.phase
    }

    /// Whether the screen is visible and interactive
    pub fn is_foreground(&self) -> bool {
        self.is_foreground
    }

    /// Whether a finish request went through
    pub fn is_finishing(&self) -> bool {
        self.finishing
    }

    /// Whether the conference manager is being shown
    pub fn is_conference_manager_shown(&self) -> bool {
        self.conference_manager_shown
    }

    /// Configuration in use
    pub fn config(&self) -> &ScreenConfig {
        &self.config
    }

    /// Dialog controller
    pub fn dialogs(&self) -> &ModalDialogController {
        &self.dialogs
    }

    /// Subscribe to screen notifications
    pub fn emitter(&self) -> &EventEmitter {
        &self.emitter
    }

    fn set_phase(&mut self, to: LifecyclePhase) {
        let from = self.phase;
        if from == to {
            return;
        }
        self.phase = to;
        self.emitter.emit(ScreenNotification::LifecycleChanged { from, to });
    }

    // ===== NAVIGATION =====

    /// Screen launched again with a new intent
    pub fn on_new_intent(&mut self, intent: ScreenIntent) {
        tracing::debug!(?intent, "onNewIntent");
        match intent {
            ScreenIntent::Main {
                show_dialpad: Some(show),
            } => {
                tracing::debug!(show_dialpad = show, "Relaunched with dialpad request");
                self.relaunched_from_dialer(show);
            }
            ScreenIntent::Main { show_dialpad: None } | ScreenIntent::Other(_) => {}
        }
    }

    fn relaunched_from_dialer(&mut self, show_dialpad: bool) {
        self.show_dialpad_requested = show_dialpad;

        if show_dialpad {
            // A single held line is the one the user wants to dial into
            if let Some(call) = self.registry.active_or_background_call() {
                if call.is_on_hold() {
                    tracing::debug!(call_id = %call.id, "Un-holding call for dialpad");
                    self.commands.hold(call.id, false);
                }
            }
        }
    }

    /// Back button pressed
    pub fn on_back_pressed(&mut self) -> BackDisposition {
        tracing::debug!("onBackPressed");

        // Incoming call must be answered or rejected first
        if self.panels.answer.is_visible() {
            tracing::debug!("BACK key while ringing: ignored");
            return BackDisposition::Consumed;
        }

        if self.panels.dialpad.is_visible() {
            self.panels.call_buttons.display_dialpad(false);
            return BackDisposition::Consumed;
        } else if self.panels.conference.is_visible() {
            self.panels.conference.set_visible(false);
            self.conference_manager_shown = false;
            self.update_system_bars();
            return BackDisposition::Consumed;
        }

        if self.registry.incoming_call().is_some() {
            tracing::debug!("Consume back press for an incoming call");
            return BackDisposition::Consumed;
        }

        BackDisposition::Default
    }

    // ===== INPUT =====

    /// Key pressed, returns whether the screen consumed it
    pub fn on_key_down(&mut self, event: KeyEvent) -> bool {
        match event.code {
            KeyCode::Call => {
                if !self.presenter.handle_call_key() {
                    tracing::warn!("Call key should always be handled by the presenter");
                }
                return true;
            }
            // Too easy to press by accident mid-call
            KeyCode::Camera => return true,
            // Ringer silencing happens system-wide
            KeyCode::VolumeUp | KeyCode::VolumeDown | KeyCode::VolumeMute => {}
            KeyCode::Mute => {
                self.commands.mute(!self.commands.is_muted());
                return true;
            }
            _ => {}
        }

        event.repeat_count == 0 && self.handle_dialer_key_down(&event)
    }

    fn handle_dialer_key_down(&self, event: &KeyEvent) -> bool {
        tracing::trace!(?event, "handleDialerKeyDown");
        if self.panels.dialpad.is_visible() {
            return self.panels.dialpad.on_dialer_key_down(event);
        }
        false
    }

    /// Key released, returns whether the screen consumed it
    pub fn on_key_up(&mut self, event: KeyEvent) -> bool {
        if self.panels.dialpad.is_visible() && self.panels.dialpad.on_dialer_key_up(Some(&event)) {
            return true;
        }
        event.code == KeyCode::Call
    }

    /// Touch event arrived, returns whether it is swallowed
    pub fn dispatch_touch(&self) -> bool {
        self.proximity.is_screen_off_by_proximity()
    }

    /// Device configuration changed
    pub fn on_configuration_changed(&self, orientation: Orientation) {
        self.proximity.on_configuration_changed(orientation);
    }

    // ===== PANELS =====

    /// Show or hide the dialpad
    pub fn display_dialpad(&mut self, show: bool) {
        self.panels.dialpad.set_visible(show);
        self.proximity.on_dialpad_visible(show);
    }

    /// Whether the dialpad is on screen
    pub fn is_dialpad_visible(&self) -> bool {
        self.panels.dialpad.is_visible()
    }

    /// Hide the dialpad as if the user pressed the dialpad button
    pub fn hide_dialpad_for_disconnect(&mut self) {
        self.panels.call_buttons.display_dialpad(false);
    }

    /// Show the conference manager; hiding is done by the panel itself
    pub fn display_manage_conference_panel(&mut self, show: bool) {
        if show {
            self.panels.conference.set_visible(true);
            self.conference_manager_shown = true;
            self.update_system_bars();
        }
    }

    /// Conference manager "done" pressed
    pub fn on_manage_conference_done(&mut self) {
        if self.conference_manager_shown && !self.panels.conference.is_visible() {
            self.conference_manager_shown = false;
            self.update_system_bars();
        }
    }

    /// System bar style for the current state
    pub fn system_bar_style(&self) -> SystemBarStyle {
        SystemBarStyle {
            translucent_status: !self.conference_manager_shown,
            translucent_navigation: self.config.uses_fullscreen_caller_photo()
                && self.presenter.in_call_state() == InCallState::Incoming,
        }
    }

    /// Recompute and apply the system bar style
    pub fn update_system_bars(&self) {
        self.window.apply_system_bars(self.system_bar_style());
    }

    /// Dismiss the keyguard while the screen is up
    pub fn dismiss_keyguard(&self, dismiss: bool) {
        self.window.set_dismiss_keyguard(dismiss);
    }

    /// Flip cover opened or closed
    pub fn on_lid_state_changed(&mut self, closed: bool) {
        match self.cover {
            Some(window) => {
                let layout = CoverLayout::for_lid(closed, &window);
                tracing::debug!(closed, ?layout, "Lid state changed");
                self.window.apply_cover_layout(layout);
            }
            None => tracing::debug!(closed, "Lid state change without a cover window, ignoring"),
        }
    }

    fn apply_settings(&self) {
        let fullscreen = self.config.uses_fullscreen_caller_photo();
        self.panels.call_buttons.set_hide_mode(if fullscreen {
            HideMode::Gone
        } else {
            HideMode::Invisible
        });
        self.panels.call_buttons.set_show_buttons_if_idle(!fullscreen);
        self.update_system_bars();
    }

    // ===== DIALOGS =====

    /// Whether an error dialog is on screen
    pub fn has_pending_error_dialog(&self) -> bool {
        self.dialogs.has_pending_error()
    }

    /// Close every dialog the screen or the answer panel has open
    pub fn dismiss_pending_dialogs(&mut self) {
        self.dialogs.dismiss_all();
        self.panels.answer.dismiss_pending_dialogs();
    }

    fn is_torn_down(&self) -> bool {
        self.phase == LifecyclePhase::TornDown
    }

    fn show_error_dialog(&mut self, message: MessageId) -> DialogId {
        self.panels.answer.dismiss_pending_dialogs();
        self.dialogs.show_error(message)
    }

    /// Explain why a call ended, when there is anything to explain
    pub fn maybe_show_error_on_disconnect(&mut self, call: Option<&Call>) -> Option<DialogId> {
        tracing::debug!(call_id = ?call.map(|c| c.id), "maybeShowErrorDialogOnDisconnect");

        if self.finishing {
            return None;
        }
        let call = call?;
        let message = classify_disconnect(call.disconnect_cause, call.ss_notification.as_ref())?;
        if self.is_torn_down() {
            tracing::debug!(call_id = %call.id, %message, "Screen torn down, not showing disconnect error");
            return None;
        }
        Some(self.show_error_dialog(message))
    }

    /// A supplementary service request (switch, conference, ...) failed
    pub fn on_supp_service_failed(&mut self, code: u32) -> InCallResult<DialogId> {
        tracing::debug!(code, "onSuppServiceFailed");
        let message = classify_supp_service_failure(code)?;
        if self.is_torn_down() {
            tracing::debug!(code, %message, "Screen torn down, not showing supp service error");
            return Err(InCallError::invalid_state("screen has been torn down"));
        }
        Ok(self.show_error_dialog(message))
    }

    /// User pressed OK on the error dialog
    pub fn on_error_dialog_acknowledged(&mut self, id: DialogId) -> bool {
        self.dialogs.on_error_acknowledged(id)
    }

    /// User cancelled the error dialog
    pub fn on_error_dialog_cancelled(&mut self, id: DialogId) -> bool {
        self.dialogs.on_error_cancelled(id)
    }

    /// Ask for a finish; deferred while a dialog still needs the screen
    pub fn finish(&mut self) -> FinishDecision {
        let pending_error = self.has_pending_error_dialog();
        let pending_consent = self.dialogs.has_pending_consent();
        let pending_answer = self.panels.answer.has_pending_dialogs();
        tracing::info!(pending_error, pending_consent, pending_answer, "finish()");

        if pending_error || pending_consent || pending_answer {
            return FinishDecision::Deferred;
        }
        self.finishing = true;
        FinishDecision::Finished
    }

    // ===== MODIFY CALL =====

    /// Options for changing the type of `call_id`
    pub fn display_modify_call_options(&self, call_id: CallId) -> InCallResult<ModifyCallOptions> {
        let call = self
            .registry
            .call(call_id)
            .ok_or(InCallError::CallNotFound { call_id })?;

        let selected = MODIFY_CALL_OPTIONS
            .iter()
            .position(|option| option.call_type == call.call_type);

        Ok(ModifyCallOptions {
            call_id,
            title: MessageId::ModifyCallOptionTitle,
            options: MODIFY_CALL_OPTIONS.to_vec(),
            selected,
        })
    }

    /// User picked an entry from the modify-call option list
    pub fn select_modify_call_option(
        &mut self,
        options: &ModifyCallOptions,
        index: usize,
    ) -> InCallResult<CallType> {
        let option = options
            .options
            .get(index)
            .copied()
            .ok_or(InCallError::InvalidModifyOption { index })?;

        self.dialogs.toast(option.label);
        tracing::info!(call_id = %options.call_id, call_type = %option.call_type, "VideoCall: ModifyCall: upgrade/downgrade");
        self.presenter
            .send_modify_call_request(options.call_id, option.call_type);
        Ok(option.call_type)
    }

    /// Remote party asks to change the call type
    ///
    /// A torn-down screen cannot ask, so the request is declined outright.
    pub fn display_modify_call_consent_dialog(&mut self, call: &Call) -> Option<DialogId> {
        if self.is_torn_down() {
            tracing::debug!(call_id = %call.id, "VideoCall: screen torn down, declining modify call");
            self.presenter.modify_call_confirm(false, call);
            return None;
        }
        self.dialogs.show_consent(call)
    }

    /// Consent dialog button pressed
    pub fn on_consent_button(&mut self, id: DialogId, button: ConsentButton) -> Option<ConsentDecision> {
        self.dialogs.on_consent_button(id, button)
    }

    /// Consent dialog went away
    pub fn on_consent_dismissed(&mut self, id: DialogId) -> Option<ConsentDecision> {
        self.dialogs.on_consent_dismissed(id)
    }

    /// Local modify-call request failed
    pub fn on_avp_upgrade_failure(&self, reason: &str) {
        tracing::error!(reason, "VideoCall: onAvpUpgradeFailure");
        self.dialogs.toast(MessageId::ModifyCallFailed);
    }

    /// Dial string paused on a wait character
    pub fn show_post_char_wait_dialog(&self, call_id: CallId, chars: &str) {
        self.dialogs.show_post_char_wait(call_id, chars);
    }

    // ===== EVENT DISPATCH =====

    /// Apply one event
    pub fn handle_event(&mut self, event: ScreenEvent) -> InCallResult<()> {
        match event {
            ScreenEvent::Create => self.on_create(),
            ScreenEvent::Start => self.on_start(),
            ScreenEvent::Foreground => self.on_foreground(),
            ScreenEvent::Background => self.on_background(),
            ScreenEvent::Stop => self.on_stop(),
            ScreenEvent::Teardown => self.on_teardown(),
            ScreenEvent::NewIntent(intent) => self.on_new_intent(intent),
            ScreenEvent::BackPressed => {
                let disposition = self.on_back_pressed();
                tracing::trace!(?disposition, "Back press handled");
            }
            ScreenEvent::KeyDown(key) => {
                self.on_key_down(key);
            }
            ScreenEvent::KeyUp(key) => {
                self.on_key_up(key);
            }
            ScreenEvent::ConfigurationChanged(orientation) => self.on_configuration_changed(orientation),
            ScreenEvent::LidStateChanged { closed } => self.on_lid_state_changed(closed),
            ScreenEvent::DisplayDialpad(show) => self.display_dialpad(show),
            ScreenEvent::DisplayManageConference(show) => self.display_manage_conference_panel(show),
            ScreenEvent::ManageConferenceDone => self.on_manage_conference_done(),
            ScreenEvent::CallDisconnected(call) => {
                self.maybe_show_error_on_disconnect(call.as_ref());
            }
            ScreenEvent::SuppServiceFailed(code) => {
                self.on_supp_service_failed(code)?;
            }
            ScreenEvent::ModifyCallRequested(call) => {
                self.display_modify_call_consent_dialog(&call);
            }
            ScreenEvent::AvpUpgradeFailed(reason) => self.on_avp_upgrade_failure(&reason),
            ScreenEvent::PostCharWait { call_id, chars } => self.show_post_char_wait_dialog(call_id, &chars),
            ScreenEvent::ErrorDialogAcknowledged(id) => {
                self.on_error_dialog_acknowledged(id);
            }
            ScreenEvent::ErrorDialogCancelled(id) => {
                self.on_error_dialog_cancelled(id);
            }
            ScreenEvent::ConsentButtonClicked(id, button) => {
                self.on_consent_button(id, button);
            }
            ScreenEvent::ConsentDialogDismissed(id) => {
                self.on_consent_dismissed(id);
            }
            ScreenEvent::DismissPendingDialogs => self.dismiss_pending_dialogs(),
        }
        Ok(())
    }
}

impl ScreenLifecycle for InCallScreen {
    fn on_create(&mut self) {
        tracing::debug!("onCreate");
        self.finishing = false;

        self.panels.call_buttons.set_enabled(false);
        self.panels.dialpad.set_visible(false);
        self.panels.conference.set_visible(false);
        self.apply_settings();

        self.set_phase(LifecyclePhase::Created);
    }

    fn on_start(&mut self) {
        tracing::debug!("onStart");
        // Attaching is the last step of setup
        self.presenter.set_screen_attached(true);
        self.set_phase(LifecyclePhase::Started);
    }

    fn on_foreground(&mut self) {
        tracing::info!("onResume");
        self.is_foreground = true;
        self.presenter.on_ui_showing(true);

        if self.show_dialpad_requested {
            self.panels.call_buttons.display_dialpad(true);
            self.show_dialpad_requested = false;
        }
        self.update_system_bars();
        if self.cover.is_some() && !self.lid_listening {
            self.window.set_lid_listener(true);
            self.lid_listening = true;
        }
        self.set_phase(LifecyclePhase::Foreground);
    }

    fn on_background(&mut self) {
        tracing::debug!("onPause");
        if self.lid_listening {
            self.window.set_lid_listener(false);
            self.lid_listening = false;
        }
        self.is_foreground = false;

        // Stop any DTMF tone still playing
        self.panels.dialpad.on_dialer_key_up(None);

        self.presenter.on_ui_showing(false);
        self.set_phase(LifecyclePhase::Background);
    }

    fn on_stop(&mut self) {
        tracing::debug!("onStop");
        self.set_phase(LifecyclePhase::Stopped);
    }

    fn on_teardown(&mut self) {
        if self.phase == LifecyclePhase::TornDown {
            return;
        }
        tracing::debug!("onDestroy");
        self.dismiss_pending_dialogs();
        if self.lid_listening {
            self.window.set_lid_listener(false);
            self.lid_listening = false;
        }
        self.is_foreground = false;
        self.presenter.set_screen_attached(false);
        self.set_phase(LifecyclePhase::TornDown);
    }
}

impl std::fmt::Debug for InCallScreen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InCallScreen")
            .field("phase", &self.phase)
            .field("is_foreground", &self.is_foreground)
            .field("show_dialpad_requested", &self.show_dialpad_requested)
            .field("conference_manager_shown", &self.conference_manager_shown)
            .field("finishing", &self.finishing)
            .field("dialogs", &self.dialogs)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cover_layout_closed_uses_window() {
        let window = CoverWindow::from_coords(&[20, 40, 420, 680]).unwrap();
        let layout = CoverLayout::for_lid(true, &window);
        assert_eq!(layout, CoverLayout::Covered { width: 640, height: 400 });
        assert!(!layout.touchable());
    }

    #[test]
    fn test_cover_layout_open() {
        let window = CoverWindow::from_coords(&[0, 0, 10, 10]).unwrap();
        let layout = CoverLayout::for_lid(false, &window);
        assert_eq!(layout, CoverLayout::Uncovered);
        assert!(layout.touchable());
    }

    #[test]
    fn test_modify_options_order() {
        let types: Vec<CallType> = MODIFY_CALL_OPTIONS.iter().map(|o| o.call_type).collect();
        assert_eq!(types, vec![CallType::Voice, CallType::VtRx, CallType::VtTx, CallType::Vt]);
    }
}
