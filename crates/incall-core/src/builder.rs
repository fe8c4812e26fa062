//! Builder pattern for assembling the in-call screen

use std::sync::Arc;

use crate::{
    collaborators::{
        AnswerPanel, CallButtonPanel, CallCommands, CallRegistry, ConferenceManagerPanel,
        DialpadPanel, InCallPresenter, ProximitySensor,
    },
    config::ScreenConfig,
    dialog::{DialogHost, ModalDialogController},
    error::{InCallError, InCallResult},
    event_loop::ScreenEventLoop,
    events::EventEmitter,
    screen::{InCallScreen, ScreenPanels, WindowHost},
};

/// Builder wiring an [`InCallScreen`] to its collaborators
///
/// Every collaborator is required; the configuration defaults to
/// [`ScreenConfig::default`].
pub struct InCallScreenBuilder {
    config: ScreenConfig,
    registry: Option<Arc<dyn CallRegistry>>,
    commands: Option<Arc<dyn CallCommands>>,
    presenter: Option<Arc<dyn InCallPresenter>>,
    proximity: Option<Arc<dyn ProximitySensor>>,
    window: Option<Arc<dyn WindowHost>>,
    dialog_host: Option<Arc<dyn DialogHost>>,
    dialpad: Option<Arc<dyn DialpadPanel>>,
    call_buttons: Option<Arc<dyn CallButtonPanel>>,
    answer: Option<Arc<dyn AnswerPanel>>,
    conference: Option<Arc<dyn ConferenceManagerPanel>>,
}

impl InCallScreenBuilder {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self {
            config: ScreenConfig::default(),
            registry: None,
            commands: None,
            presenter: None,
            proximity: None,
            window: None,
            dialog_host: None,
            dialpad: None,
            call_buttons: None,
            answer: None,
            conference: None,
        }
    }

    /// Use a pre-built configuration
    pub fn config(mut self, config: ScreenConfig) -> Self {
        self.config = config;
        self
    }

    /// Adjust the configuration in place
    pub fn configure(mut self, f: impl FnOnce(ScreenConfig) -> ScreenConfig) -> Self {
        self.config = f(self.config);
        self
    }

    /// Set the call registry (required)
    pub fn call_registry(mut self, registry: Arc<dyn CallRegistry>) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Set the call command sink (required)
    pub fn call_commands(mut self, commands: Arc<dyn CallCommands>) -> Self {
        self.commands = Some(commands);
        self
    }

    /// Set the presenter (required)
    pub fn presenter(mut self, presenter: Arc<dyn InCallPresenter>) -> Self {
        self.presenter = Some(presenter);
        self
    }

    /// Set the proximity sensor (required)
    pub fn proximity_sensor(mut self, proximity: Arc<dyn ProximitySensor>) -> Self {
        self.proximity = Some(proximity);
        self
    }

    /// Set the window host (required)
    pub fn window_host(mut self, window: Arc<dyn WindowHost>) -> Self {
        self.window = Some(window);
        self
    }

    /// Set the dialog host (required)
    pub fn dialog_host(mut self, host: Arc<dyn DialogHost>) -> Self {
        self.dialog_host = Some(host);
        self
    }

    /// Set the dialpad panel (required)
    pub fn dialpad(mut self, dialpad: Arc<dyn DialpadPanel>) -> Self {
        self.dialpad = Some(dialpad);
        self
    }

    /// Set the call buttons panel (required)
    pub fn call_buttons(mut self, call_buttons: Arc<dyn CallButtonPanel>) -> Self {
        self.call_buttons = Some(call_buttons);
        self
    }

    /// Set the answer panel (required)
    pub fn answer_panel(mut self, answer: Arc<dyn AnswerPanel>) -> Self {
        self.answer = Some(answer);
        self
    }

    /// Set the conference manager panel (required)
    pub fn conference_manager(mut self, conference: Arc<dyn ConferenceManagerPanel>) -> Self {
        self.conference = Some(conference);
        self
    }

    /// Build the screen
    pub fn build(self) -> InCallResult<InCallScreen> {
        self.validate()?;

        let Self {
            config,
            registry,
            commands,
            presenter,
            proximity,
            window,
            dialog_host,
            dialpad,
            call_buttons,
            answer,
            conference,
        } = self;

        let registry = required(registry, "call registry")?;
        let commands = required(commands, "call commands")?;
        let presenter = required(presenter, "presenter")?;
        let proximity = required(proximity, "proximity sensor")?;
        let window = required(window, "window host")?;
        let dialog_host = required(dialog_host, "dialog host")?;
        let panels = ScreenPanels {
            dialpad: required(dialpad, "dialpad panel")?,
            call_buttons: required(call_buttons, "call buttons panel")?,
            answer: required(answer, "answer panel")?,
            conference: required(conference, "conference manager panel")?,
        };

        let emitter = EventEmitter::new(config.notification_capacity);
        let dialogs = ModalDialogController::new(
            dialog_host,
            presenter.clone(),
            config.catalog(),
            emitter.clone(),
        );

        tracing::debug!(
            style = ?config.incoming_call_style,
            overrides = config.message_overrides.len(),
            "Built in-call screen"
        );

        Ok(InCallScreen::new(
            registry, commands, presenter, proximity, window, panels, dialogs, config, emitter,
        ))
    }

    /// Build the screen wrapped in an event loop
    pub fn build_event_loop(self) -> InCallResult<ScreenEventLoop> {
        Ok(ScreenEventLoop::new(self.build()?))
    }

    /// Validate the configuration
    fn validate(&self) -> InCallResult<()> {
        self.config.validate()
    }
}

impl Default for InCallScreenBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn required<T: ?Sized>(value: Option<Arc<T>>, what: &str) -> InCallResult<Arc<T>> {
    value.ok_or_else(|| InCallError::config(format!("{} is required", what)))
}
