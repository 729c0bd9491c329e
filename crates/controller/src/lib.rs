//! Instrumentation demo workflow: initialization sequencing, event-driven
//! status reporting, and the user-triggered actions wired to the recording
//! client.

use std::sync::Arc;

use chrono::Utc;
use replay_client::{LifecycleEvent, ReplayRecorder};
use serde_json::{Map, Value};
use shared::domain::{IdentityContext, RecordingState, SessionDescriptor, StatusCategory};
use tracing::{error, info, warn};

pub mod canvas;
pub mod status;

use canvas::{draw_test_scene, Canvas};
use status::StatusBoard;

/// Region that mirrors the recording client's lifecycle.
pub const SDK_STATUS_REGION: &str = "sdkStatus";
/// Region that renders the fetched session descriptor.
pub const SESSION_INFO_REGION: &str = "sessionInfo";

/// Recording-client lifecycle as observed by the controller. The client owns
/// the transitions; the controller only mirrors them. `Ready` and `Failed`
/// are terminal for the controller's lifetime; no retry is defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecyclePhase {
    Uninitialized,
    Initializing,
    Ready,
    Failed,
}

impl LifecyclePhase {
    pub fn is_terminal(self) -> bool {
        matches!(self, LifecyclePhase::Ready | LifecyclePhase::Failed)
    }
}

pub struct DemoController {
    recorder: Arc<dyn ReplayRecorder>,
    context: IdentityContext,
    phase: LifecyclePhase,
    status: StatusBoard,
    canvas: Canvas,
}

impl DemoController {
    /// Builds the controller around an explicit recorder handle and moves
    /// straight into `Initializing`; the recorder signals the outcome via
    /// lifecycle events fed to [`on_lifecycle_event`](Self::on_lifecycle_event).
    pub fn new(recorder: Arc<dyn ReplayRecorder>, context: IdentityContext) -> Self {
        let mut controller = Self {
            recorder,
            context,
            phase: LifecyclePhase::Uninitialized,
            status: StatusBoard::new(),
            canvas: Canvas::default(),
        };
        controller.begin_initialization();
        controller
    }

    fn begin_initialization(&mut self) {
        debug_assert_eq!(self.phase, LifecyclePhase::Uninitialized);
        self.phase = LifecyclePhase::Initializing;
        self.status.set(
            SDK_STATUS_REGION,
            "Initializing session recording...",
            StatusCategory::Info,
        );
    }

    pub fn phase(&self) -> LifecyclePhase {
        self.phase
    }

    pub fn status(&self) -> &StatusBoard {
        &self.status
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Applies a lifecycle notification from the recording client.
    ///
    /// `Ready` is informational in any phase. `Initialized` and `Failed`
    /// transition out of `Initializing` exactly once; notifications arriving
    /// in a terminal phase are logged and dropped.
    pub fn on_lifecycle_event(&mut self, event: LifecycleEvent) {
        match (self.phase, event) {
            (LifecyclePhase::Initializing, LifecycleEvent::Initialized) => {
                info!(
                    context_key = %self.context.key,
                    recording_state = %self.recorder.recording_state(),
                    "recording client initialized; session recording is active"
                );
                self.phase = LifecyclePhase::Ready;
                self.status.set(
                    SDK_STATUS_REGION,
                    "SDK initialized successfully! Session recording is active.",
                    StatusCategory::Success,
                );
            }
            (LifecyclePhase::Initializing, LifecycleEvent::Failed) => {
                error!(context_key = %self.context.key, "recording client initialization failed");
                self.phase = LifecyclePhase::Failed;
                self.status.set(
                    SDK_STATUS_REGION,
                    "SDK initialization failed. Check logs for errors.",
                    StatusCategory::Error,
                );
            }
            (_, LifecycleEvent::Ready) => {
                info!("recording client ready");
            }
            (phase, event) => {
                warn!(?phase, ?event, "lifecycle notification ignored");
            }
        }
    }

    /// Logs the current timestamp and acknowledges. Never touches the
    /// recorder; exists so a plain interaction shows up in the recording.
    pub fn simulate_click(&self) -> String {
        info!(clicked_at = %Utc::now().to_rfc3339(), "simulated click");
        "Click event recorded!".to_string()
    }

    /// Tags the session with a timestamped property set. Fire-and-forget:
    /// callable in any lifecycle phase without failing; whether the client
    /// buffers or drops pre-initialization tags is its own contract.
    pub fn tag_session(&self) -> String {
        let timestamp = Utc::now().timestamp_millis();
        let mut properties = Map::new();
        properties.insert(
            "testProperty".to_string(),
            Value::from(format!("custom-value-{timestamp}")),
        );
        properties.insert("buttonClickTime".to_string(), Value::from(timestamp));
        properties.insert("userAction".to_string(), Value::from("added_property"));
        self.recorder.add_session_properties(properties);
        info!(timestamp, "custom session properties added");
        "Custom properties added to session!".to_string()
    }

    /// Reads the recording state, awaits the session descriptor, and renders
    /// the result into the session-info region. A rejected fetch is caught
    /// here and rendered as its message; it never propagates.
    pub async fn fetch_session_info(&mut self) {
        let recording_state = self.recorder.recording_state();
        match self.recorder.get_session().await {
            Ok(session) => {
                info!(url = %session.url, "session details resolved");
                self.status.set(
                    SESSION_INFO_REGION,
                    render_session_info(recording_state, &session),
                    StatusCategory::Info,
                );
            }
            Err(err) => {
                error!(%err, "failed to fetch session info");
                self.status.set(
                    SESSION_INFO_REGION,
                    format!("Error: {err}"),
                    StatusCategory::Error,
                );
            }
        }
    }

    /// Redraws the test surface so canvas capture has something to sample.
    pub fn draw_canvas(&mut self) {
        let mut rng = rand::thread_rng();
        draw_test_scene(&mut self.canvas, &mut rng, Utc::now().timestamp_millis());
        info!("canvas drawn");
    }
}

/// Render boundary: the fetched descriptor becomes an HTML fragment with
/// exactly two anchors, one per session URL variant.
pub fn render_session_info(state: RecordingState, session: &SessionDescriptor) -> String {
    format!(
        "<strong>Recording State:</strong> {state}<br><br>\
         <strong>Session URL:</strong><br>\
         <a href=\"{url}\" target=\"_blank\">{url}</a><br><br>\
         <strong>URL with Timestamp:</strong><br>\
         <a href=\"{stamped}\" target=\"_blank\">{stamped}</a>",
        url = session.url,
        stamped = session.url_with_timestamp,
    )
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
