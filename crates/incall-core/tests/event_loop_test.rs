//! Driving the screen through its event loop

mod common;

use std::time::Duration;

use common::{Fakes, PresenterCall};
use incall_core::{
    Call, CallId, CallState, CallType, ConsentButton, DisconnectCause, KeyCode, KeyEvent,
    LifecyclePhase, ScreenConfig, ScreenEvent, ScreenEventLoop, ScreenNotification,
};

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("incall_core=debug")
        .with_test_writer()
        .try_init();
}

fn event_loop(fakes: &Fakes) -> ScreenEventLoop {
    fakes.builder().build_event_loop().unwrap()
}

#[tokio::test]
async fn test_events_applied_in_order_until_teardown() {
    init_logging();
    let fakes = Fakes::default();
    let (handle, task) = event_loop(&fakes).spawn();

    for event in [
        ScreenEvent::Create,
        ScreenEvent::Start,
        ScreenEvent::Foreground,
        ScreenEvent::KeyDown(KeyEvent::new(KeyCode::Mute)),
        ScreenEvent::Background,
        ScreenEvent::Stop,
        ScreenEvent::Teardown,
    ] {
        handle.send(event).await.unwrap();
    }

    let screen = tokio::time::timeout(Duration::from_secs(5), task)
        .await
        .expect("event loop did not stop")
        .unwrap();

    assert_eq!(screen.phase(), LifecyclePhase::TornDown);
    assert_eq!(*fakes.commands.mute_requests.lock(), vec![true]);
    assert_eq!(
        fakes.presenter.calls(),
        vec![
            PresenterCall::ScreenAttached(true),
            PresenterCall::UiShowing(true),
            PresenterCall::UiShowing(false),
            PresenterCall::ScreenAttached(false),
        ]
    );

    // The loop is gone
    assert!(handle.send(ScreenEvent::BackPressed).await.is_err());
}

#[tokio::test]
async fn test_dropping_all_handles_tears_down() {
    let fakes = Fakes::default();
    let (handle, task) = event_loop(&fakes).spawn();

    handle.send(ScreenEvent::Create).await.unwrap();
    handle.send(ScreenEvent::Start).await.unwrap();
    drop(handle);

    let screen = tokio::time::timeout(Duration::from_secs(5), task)
        .await
        .expect("event loop did not stop")
        .unwrap();
    assert_eq!(screen.phase(), LifecyclePhase::TornDown);
    assert_eq!(fakes.presenter.count(&PresenterCall::ScreenAttached(false)), 1);
}

#[tokio::test]
async fn test_failed_event_does_not_stop_the_loop() {
    let fakes = Fakes::default();
    let (handle, task) = event_loop(&fakes).spawn();

    handle.send(ScreenEvent::SuppServiceFailed(42)).await.unwrap();
    handle
        .send(ScreenEvent::CallDisconnected(Some(
            Call::new(CallId(1), CallState::Disconnected)
                .with_disconnect_cause(DisconnectCause::FdnBlocked),
        )))
        .await
        .unwrap();
    handle.send(ScreenEvent::Teardown).await.unwrap();

    let screen = task.await.unwrap();
    assert_eq!(fakes.dialogs.alerts.lock().len(), 1);
    // Teardown took the error dialog down
    assert!(!screen.has_pending_error_dialog());
    assert_eq!(fakes.dialogs.dismissed.lock().len(), 1);
}

#[tokio::test]
async fn test_consent_round_trip_through_notifications() {
    init_logging();
    let fakes = Fakes::default();
    let event_loop = event_loop(&fakes);
    let mut notifications = event_loop.screen().emitter().subscribe_simple();
    let (handle, task) = event_loop.spawn();

    handle
        .send(ScreenEvent::ModifyCallRequested(
            Call::new(CallId(7), CallState::Active).with_proposed_call_type(CallType::Vt),
        ))
        .await
        .unwrap();

    let id = loop {
        match notifications.next().await {
            Some(ScreenNotification::DialogShown { id, .. }) => break id,
            Some(_) => continue,
            None => panic!("notification stream closed"),
        }
    };

    handle
        .send(ScreenEvent::ConsentButtonClicked(id, ConsentButton::Positive))
        .await
        .unwrap();
    handle.send(ScreenEvent::ConsentDialogDismissed(id)).await.unwrap();
    handle.send(ScreenEvent::Teardown).await.unwrap();
    task.await.unwrap();

    assert_eq!(fakes.presenter.confirms(), vec![(true, CallId(7))]);
}

#[tokio::test]
async fn test_try_send_reports_full_inbox() {
    let fakes = Fakes::default();
    let event_loop = ScreenEventLoop::with_capacity(
        fakes.builder().config(ScreenConfig::default()).build().unwrap(),
        1,
    );
    let handle = event_loop.handle();

    handle.try_send(ScreenEvent::Create).unwrap();
    assert!(handle.try_send(ScreenEvent::Start).is_err());

    let task = tokio::spawn(event_loop.run());
    handle.send(ScreenEvent::Teardown).await.unwrap();
    let screen = task.await.unwrap();
    assert_eq!(screen.phase(), LifecyclePhase::TornDown);
    assert!(handle.is_closed());
}
