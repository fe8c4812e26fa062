//! Recording fakes shared by the integration tests

#![allow(dead_code)]

use parking_lot::Mutex;
use std::sync::Arc;

use incall_core::collaborators::{
    AnswerPanel, CallButtonPanel, CallCommands, CallRegistry, ConferenceManagerPanel,
    DialpadPanel, HideMode, InCallPresenter, InCallState, Orientation, ProximitySensor,
};
use incall_core::dialog::{AlertSpec, DialogHost};
use incall_core::{
    Call, CallId, CallType, CoverLayout, DialogId, InCallScreen, InCallScreenBuilder, KeyCode,
    KeyEvent, ScreenConfig, SystemBarStyle, WindowHost,
};

#[derive(Debug, Clone, PartialEq)]
pub enum PresenterCall {
    ScreenAttached(bool),
    UiShowing(bool),
    DismissDialog,
    ModifyCallConfirm(bool, CallId),
    SendModifyCallRequest(CallId, CallType),
    HandleCallKey,
}

pub struct FakePresenter {
    pub calls: Mutex<Vec<PresenterCall>>,
    pub state: Mutex<InCallState>,
    pub call_key_handled: Mutex<bool>,
}

impl Default for FakePresenter {
    fn default() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            state: Mutex::new(InCallState::InCall),
            call_key_handled: Mutex::new(true),
        }
    }
}

impl FakePresenter {
    pub fn calls(&self) -> Vec<PresenterCall> {
        self.calls.lock().clone()
    }

    pub fn count(&self, wanted: &PresenterCall) -> usize {
        self.calls.lock().iter().filter(|c| *c == wanted).count()
    }

    pub fn confirms(&self) -> Vec<(bool, CallId)> {
        self.calls
            .lock()
            .iter()
            .filter_map(|c| match c {
                PresenterCall::ModifyCallConfirm(accepted, id) => Some((*accepted, *id)),
                _ => None,
            })
            .collect()
    }
}

impl InCallPresenter for FakePresenter {
    fn set_screen_attached(&self, attached: bool) {
        self.calls.lock().push(PresenterCall::ScreenAttached(attached));
    }
    fn on_ui_showing(&self, showing: bool) {
        self.calls.lock().push(PresenterCall::UiShowing(showing));
    }
    fn on_dismiss_dialog(&self) {
        self.calls.lock().push(PresenterCall::DismissDialog);
    }
    fn modify_call_confirm(&self, accepted: bool, call: &Call) {
        self.calls
            .lock()
            .push(PresenterCall::ModifyCallConfirm(accepted, call.id));
    }
    fn send_modify_call_request(&self, call_id: CallId, call_type: CallType) {
        self.calls
            .lock()
            .push(PresenterCall::SendModifyCallRequest(call_id, call_type));
    }
    fn handle_call_key(&self) -> bool {
        self.calls.lock().push(PresenterCall::HandleCallKey);
        *self.call_key_handled.lock()
    }
    fn in_call_state(&self) -> InCallState {
        *self.state.lock()
    }
}

#[derive(Default)]
pub struct FakeRegistry {
    pub calls: Mutex<Vec<Call>>,
    pub incoming: Mutex<Option<Call>>,
    pub active_or_background: Mutex<Option<Call>>,
}

impl CallRegistry for FakeRegistry {
    fn call(&self, id: CallId) -> Option<Call> {
        self.calls.lock().iter().find(|c| c.id == id).cloned()
    }
    fn incoming_call(&self) -> Option<Call> {
        self.incoming.lock().clone()
    }
    fn active_or_background_call(&self) -> Option<Call> {
        self.active_or_background.lock().clone()
    }
}

#[derive(Default)]
pub struct FakeCommands {
    pub holds: Mutex<Vec<(CallId, bool)>>,
    pub muted: Mutex<bool>,
    pub mute_requests: Mutex<Vec<bool>>,
}

impl CallCommands for FakeCommands {
    fn hold(&self, call_id: CallId, on_hold: bool) {
        self.holds.lock().push((call_id, on_hold));
    }
    fn mute(&self, muted: bool) {
        self.mute_requests.lock().push(muted);
        *self.muted.lock() = muted;
    }
    fn is_muted(&self) -> bool {
        *self.muted.lock()
    }
}

#[derive(Default)]
pub struct FakeProximity {
    pub screen_off: Mutex<bool>,
    pub dialpad_visible: Mutex<Vec<bool>>,
    pub orientations: Mutex<Vec<Orientation>>,
}

impl ProximitySensor for FakeProximity {
    fn is_screen_off_by_proximity(&self) -> bool {
        *self.screen_off.lock()
    }
    fn on_dialpad_visible(&self, visible: bool) {
        self.dialpad_visible.lock().push(visible);
    }
    fn on_configuration_changed(&self, orientation: Orientation) {
        self.orientations.lock().push(orientation);
    }
}

#[derive(Default)]
pub struct FakeDialpad {
    pub visible: Mutex<bool>,
    pub consumes_keys: Mutex<bool>,
    pub key_downs: Mutex<Vec<KeyCode>>,
    pub key_ups: Mutex<Vec<Option<KeyCode>>>,
}

impl DialpadPanel for FakeDialpad {
    fn is_visible(&self) -> bool {
        *self.visible.lock()
    }
    fn set_visible(&self, visible: bool) {
        *self.visible.lock() = visible;
    }
    fn on_dialer_key_down(&self, event: &KeyEvent) -> bool {
        self.key_downs.lock().push(event.code);
        *self.consumes_keys.lock() && event.code.is_dialable()
    }
    fn on_dialer_key_up(&self, event: Option<&KeyEvent>) -> bool {
        self.key_ups.lock().push(event.map(|e| e.code));
        event.is_some_and(|e| *self.consumes_keys.lock() && e.code.is_dialable())
    }
}

#[derive(Default)]
pub struct FakeCallButtons {
    pub dialpad_requests: Mutex<Vec<bool>>,
    pub enabled: Mutex<Option<bool>>,
    pub hide_mode: Mutex<Option<HideMode>>,
    pub show_if_idle: Mutex<Option<bool>>,
}

impl CallButtonPanel for FakeCallButtons {
    fn display_dialpad(&self, visible: bool) {
        self.dialpad_requests.lock().push(visible);
    }
    fn set_enabled(&self, enabled: bool) {
        *self.enabled.lock() = Some(enabled);
    }
    fn set_hide_mode(&self, mode: HideMode) {
        *self.hide_mode.lock() = Some(mode);
    }
    fn set_show_buttons_if_idle(&self, show: bool) {
        *self.show_if_idle.lock() = Some(show);
    }
}

#[derive(Default)]
pub struct FakeAnswer {
    pub visible: Mutex<bool>,
    pub pending: Mutex<bool>,
    pub dismiss_count: Mutex<usize>,
}

impl AnswerPanel for FakeAnswer {
    fn is_visible(&self) -> bool {
        *self.visible.lock()
    }
    fn has_pending_dialogs(&self) -> bool {
        *self.pending.lock()
    }
    fn dismiss_pending_dialogs(&self) {
        *self.dismiss_count.lock() += 1;
        *self.pending.lock() = false;
    }
}

#[derive(Default)]
pub struct FakeConference {
    pub visible: Mutex<bool>,
}

impl ConferenceManagerPanel for FakeConference {
    fn is_visible(&self) -> bool {
        *self.visible.lock()
    }
    fn set_visible(&self, visible: bool) {
        *self.visible.lock() = visible;
    }
}

#[derive(Default)]
pub struct FakeWindow {
    pub dismiss_keyguard: Mutex<Vec<bool>>,
    pub bars: Mutex<Vec<SystemBarStyle>>,
    pub layouts: Mutex<Vec<CoverLayout>>,
    pub lid_listener: Mutex<Vec<bool>>,
}

impl FakeWindow {
    pub fn last_bars(&self) -> Option<SystemBarStyle> {
        self.bars.lock().last().copied()
    }
}

impl WindowHost for FakeWindow {
    fn set_dismiss_keyguard(&self, dismiss: bool) {
        self.dismiss_keyguard.lock().push(dismiss);
    }
    fn apply_system_bars(&self, style: SystemBarStyle) {
        self.bars.lock().push(style);
    }
    fn apply_cover_layout(&self, layout: CoverLayout) {
        self.layouts.lock().push(layout);
    }
    fn set_lid_listener(&self, listening: bool) {
        self.lid_listener.lock().push(listening);
    }
}

#[derive(Default)]
pub struct FakeDialogHost {
    pub alerts: Mutex<Vec<AlertSpec>>,
    pub dismissed: Mutex<Vec<DialogId>>,
    pub toasts: Mutex<Vec<String>>,
    pub post_char_waits: Mutex<Vec<(CallId, String)>>,
}

impl FakeDialogHost {
    pub fn alert_texts(&self) -> Vec<String> {
        self.alerts.lock().iter().map(|a| a.message.clone()).collect()
    }
}

impl DialogHost for FakeDialogHost {
    fn show_alert(&self, alert: &AlertSpec) {
        self.alerts.lock().push(alert.clone());
    }
    fn dismiss_alert(&self, id: DialogId) {
        self.dismissed.lock().push(id);
    }
    fn show_toast(&self, text: &str) {
        self.toasts.lock().push(text.to_string());
    }
    fn show_post_char_wait(&self, call_id: CallId, chars: &str) {
        self.post_char_waits.lock().push((call_id, chars.to_string()));
    }
}

/// Every collaborator of one screen
#[derive(Default, Clone)]
pub struct Fakes {
    pub presenter: Arc<FakePresenter>,
    pub registry: Arc<FakeRegistry>,
    pub commands: Arc<FakeCommands>,
    pub proximity: Arc<FakeProximity>,
    pub dialpad: Arc<FakeDialpad>,
    pub call_buttons: Arc<FakeCallButtons>,
    pub answer: Arc<FakeAnswer>,
    pub conference: Arc<FakeConference>,
    pub window: Arc<FakeWindow>,
    pub dialogs: Arc<FakeDialogHost>,
}

impl Fakes {
    pub fn builder(&self) -> InCallScreenBuilder {
        InCallScreenBuilder::new()
            .call_registry(self.registry.clone())
            .call_commands(self.commands.clone())
            .presenter(self.presenter.clone())
            .proximity_sensor(self.proximity.clone())
            .window_host(self.window.clone())
            .dialog_host(self.dialogs.clone())
            .dialpad(self.dialpad.clone())
            .call_buttons(self.call_buttons.clone())
            .answer_panel(self.answer.clone())
            .conference_manager(self.conference.clone())
    }

    pub fn screen(&self, config: ScreenConfig) -> InCallScreen {
        self.builder().config(config).build().unwrap()
    }
}

pub fn screen() -> (InCallScreen, Fakes) {
    let fakes = Fakes::default();
    let screen = fakes.screen(ScreenConfig::default());
    (screen, fakes)
}
