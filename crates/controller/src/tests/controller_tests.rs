use std::sync::Mutex;

use async_trait::async_trait;
use shared::error::ReplayError;

use super::*;

struct StubRecorder {
    state: RecordingState,
    session: Result<SessionDescriptor, ReplayError>,
    tagged: Mutex<Vec<Map<String, Value>>>,
}

impl StubRecorder {
    fn resolving(state: RecordingState, url: &str, url_with_timestamp: &str) -> Self {
        Self {
            state,
            session: Ok(SessionDescriptor {
                url: url.to_string(),
                url_with_timestamp: url_with_timestamp.to_string(),
            }),
            tagged: Mutex::new(Vec::new()),
        }
    }

    fn rejecting(message: &str) -> Self {
        Self {
            state: RecordingState::Inactive,
            session: Err(ReplayError::session_fetch(message)),
            tagged: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl ReplayRecorder for StubRecorder {
    fn recording_state(&self) -> RecordingState {
        self.state
    }

    fn add_session_properties(&self, properties: Map<String, Value>) {
        self.tagged.lock().expect("tagged lock").push(properties);
    }

    async fn get_session(&self) -> Result<SessionDescriptor, ReplayError> {
        self.session.clone()
    }
}

fn controller_with(recorder: Arc<StubRecorder>) -> DemoController {
    DemoController::new(recorder, IdentityContext::new("Test User", "test@example.com"))
}

fn anchor_count(fragment: &str) -> usize {
    fragment.matches("<a href=\"").count()
}

#[test]
fn construction_enters_initializing_with_info_status() {
    let recorder = Arc::new(StubRecorder::resolving(
        RecordingState::Recording,
        "https://x/1",
        "https://x/1?t=123",
    ));
    let controller = controller_with(recorder);

    assert_eq!(controller.phase(), LifecyclePhase::Initializing);
    let status = controller.status().get(SDK_STATUS_REGION).expect("status");
    assert_eq!(status.category, StatusCategory::Info);
}

#[test]
fn initialized_event_reaches_ready_with_success_status() {
    let recorder = Arc::new(StubRecorder::resolving(
        RecordingState::Recording,
        "https://x/1",
        "https://x/1?t=123",
    ));
    let mut controller = controller_with(recorder);

    controller.on_lifecycle_event(LifecycleEvent::Initialized);

    assert_eq!(controller.phase(), LifecyclePhase::Ready);
    assert!(controller.phase().is_terminal());
    let status = controller.status().get(SDK_STATUS_REGION).expect("status");
    assert_eq!(status.category, StatusCategory::Success);
}

#[test]
fn failed_event_reaches_failed_with_error_status() {
    let recorder = Arc::new(StubRecorder::rejecting("no session"));
    let mut controller = controller_with(recorder);

    controller.on_lifecycle_event(LifecycleEvent::Failed);

    assert_eq!(controller.phase(), LifecyclePhase::Failed);
    let status = controller.status().get(SDK_STATUS_REGION).expect("status");
    assert_eq!(status.category, StatusCategory::Error);
}

#[test]
fn terminal_phase_ignores_later_lifecycle_outcomes() {
    let recorder = Arc::new(StubRecorder::rejecting("no session"));
    let mut controller = controller_with(recorder);

    controller.on_lifecycle_event(LifecycleEvent::Failed);
    let failed_status = controller
        .status()
        .get(SDK_STATUS_REGION)
        .expect("status")
        .clone();

    controller.on_lifecycle_event(LifecycleEvent::Initialized);

    assert_eq!(controller.phase(), LifecyclePhase::Failed);
    assert_eq!(
        controller.status().get(SDK_STATUS_REGION).expect("status"),
        &failed_status
    );
}

#[test]
fn ready_event_is_informational_in_any_phase() {
    let recorder = Arc::new(StubRecorder::resolving(
        RecordingState::Recording,
        "https://x/1",
        "https://x/1?t=123",
    ));
    let mut controller = controller_with(recorder);

    controller.on_lifecycle_event(LifecycleEvent::Initialized);
    controller.on_lifecycle_event(LifecycleEvent::Ready);

    assert_eq!(controller.phase(), LifecyclePhase::Ready);
    let status = controller.status().get(SDK_STATUS_REGION).expect("status");
    assert_eq!(status.category, StatusCategory::Success);
}

#[test]
fn simulate_click_acknowledges_without_touching_recorder() {
    let recorder = Arc::new(StubRecorder::rejecting("unused"));
    let controller = controller_with(recorder.clone());

    assert_eq!(controller.simulate_click(), "Click event recorded!");
    assert!(recorder.tagged.lock().expect("tagged lock").is_empty());
}

#[test]
fn tag_session_sends_timestamped_properties() {
    let recorder = Arc::new(StubRecorder::resolving(
        RecordingState::Recording,
        "https://x/1",
        "https://x/1?t=123",
    ));
    let mut controller = controller_with(recorder.clone());
    controller.on_lifecycle_event(LifecycleEvent::Initialized);

    let ack = controller.tag_session();
    assert_eq!(ack, "Custom properties added to session!");

    let tagged = recorder.tagged.lock().expect("tagged lock");
    assert_eq!(tagged.len(), 1);
    let properties = &tagged[0];
    assert!(properties["testProperty"]
        .as_str()
        .expect("string")
        .starts_with("custom-value-"));
    assert!(properties["buttonClickTime"].is_i64());
    assert_eq!(properties["userAction"], "added_property");
}

#[test]
fn tag_session_does_not_fail_before_initialization_completes() {
    let recorder = Arc::new(StubRecorder::rejecting("unused"));
    let controller = controller_with(recorder.clone());

    assert_eq!(controller.phase(), LifecyclePhase::Initializing);
    let ack = controller.tag_session();
    assert_eq!(ack, "Custom properties added to session!");
    assert_eq!(recorder.tagged.lock().expect("tagged lock").len(), 1);
}

#[tokio::test]
async fn fetch_session_info_renders_state_and_both_urls() {
    let recorder = Arc::new(StubRecorder::resolving(
        RecordingState::Recording,
        "https://x/1",
        "https://x/1?t=123",
    ));
    let mut controller = controller_with(recorder);
    controller.on_lifecycle_event(LifecycleEvent::Initialized);

    controller.fetch_session_info().await;

    let region = controller
        .status()
        .get(SESSION_INFO_REGION)
        .expect("session info");
    assert_eq!(region.category, StatusCategory::Info);
    assert_eq!(anchor_count(&region.message), 2);
    assert!(region.message.contains("https://x/1"));
    assert!(region.message.contains("https://x/1?t=123"));
    assert!(region.message.contains("recording"));
}

#[tokio::test]
async fn fetch_session_info_renders_rejection_message() {
    let recorder = Arc::new(StubRecorder::rejecting("session is not ready yet"));
    let mut controller = controller_with(recorder);

    controller.fetch_session_info().await;

    let region = controller
        .status()
        .get(SESSION_INFO_REGION)
        .expect("session info");
    assert_eq!(region.category, StatusCategory::Error);
    assert_eq!(region.message, "Error: session is not ready yet");
    assert_eq!(anchor_count(&region.message), 0);
}

#[tokio::test]
async fn fetch_session_info_is_repeatable() {
    let recorder = Arc::new(StubRecorder::resolving(
        RecordingState::Paused,
        "https://x/2",
        "https://x/2?t=456",
    ));
    let mut controller = controller_with(recorder);

    controller.fetch_session_info().await;
    controller.fetch_session_info().await;

    let region = controller
        .status()
        .get(SESSION_INFO_REGION)
        .expect("session info");
    assert_eq!(anchor_count(&region.message), 2);
    assert!(region.message.contains("paused"));
}

#[test]
fn draw_canvas_produces_single_circle_scene() {
    let recorder = Arc::new(StubRecorder::rejecting("unused"));
    let mut controller = controller_with(recorder);

    controller.draw_canvas();
    controller.draw_canvas();

    let commands = controller.canvas().commands();
    assert_eq!(commands[0], canvas::DrawCommand::Clear);
    let circles = commands
        .iter()
        .filter(|cmd| matches!(cmd, canvas::DrawCommand::FilledCircle { .. }))
        .count();
    assert_eq!(circles, 1);
    assert!(commands.iter().any(|cmd| matches!(
        cmd,
        canvas::DrawCommand::Label { text, .. } if text.starts_with("Canvas Test ")
    )));
}

#[test]
fn rendered_fragment_separates_plain_and_timestamped_urls() {
    let fragment = render_session_info(
        RecordingState::Recording,
        &SessionDescriptor {
            url: "https://x/1".to_string(),
            url_with_timestamp: "https://x/1?t=123".to_string(),
        },
    );

    assert_eq!(anchor_count(&fragment), 2);
    let second_anchor = fragment.rfind("<a href=").expect("second anchor");
    assert!(fragment[second_anchor..].contains("?t=123"));
}
