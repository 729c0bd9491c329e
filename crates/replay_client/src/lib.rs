//! Boundary to the session-recording client.
//!
//! The real capture pipeline (DOM mutation capture, canvas sampling, privacy
//! obfuscation, event transport) is an external collaborator. This crate
//! models its surface as the [`ReplayRecorder`] trait so callers take an
//! explicit handle instead of a module-wide singleton, and ships
//! [`SimulatedReplayClient`] as the live stand-in the demo runs against.

use std::sync::{Mutex, RwLock};

use async_trait::async_trait;
use chrono::Utc;
use serde_json::{Map, Value};
use shared::{
    domain::{IdentityContext, RecordingState, ReplayPluginConfig, SessionDescriptor},
    error::ReplayError,
};
use tokio::sync::broadcast;
use tracing::{info, warn};
use uuid::Uuid;

const LIFECYCLE_CHANNEL_CAPACITY: usize = 16;
const SESSION_URL_BASE: &str = "https://app.replay.example/sessions";

/// Lifecycle notifications emitted by the recording client after
/// construction. `Ready` is informational and may arrive alongside
/// `Initialized`; `Initialized` and `Failed` are mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleEvent {
    Initialized,
    Failed,
    Ready,
}

/// Surface of the recording client used by the demo workflow.
#[async_trait]
pub trait ReplayRecorder: Send + Sync {
    /// Synchronous accessor for the current capture state.
    fn recording_state(&self) -> RecordingState;

    /// Fire-and-forget session tagging. Must never fail, even when invoked
    /// before initialization completes.
    fn add_session_properties(&self, properties: Map<String, Value>);

    /// Resolves the playback descriptor for the active session. The only
    /// suspension point in the workflow.
    async fn get_session(&self) -> Result<SessionDescriptor, ReplayError>;
}

/// In-process stand-in for the opaque recording SDK.
///
/// Holds the identity context and plugin configuration it was initialized
/// with, tracks recording state, buffers tagged properties, and resolves
/// session descriptors against a stable per-lifetime session id.
pub struct SimulatedReplayClient {
    client_side_id: String,
    context: IdentityContext,
    config: ReplayPluginConfig,
    session_id: Uuid,
    state: RwLock<RecordingState>,
    properties: Mutex<Map<String, Value>>,
    events: broadcast::Sender<LifecycleEvent>,
}

impl SimulatedReplayClient {
    /// Constructs the client handle. Lifecycle events are emitted by
    /// [`start`](Self::start) so callers can subscribe first.
    pub fn initialize(
        client_side_id: impl Into<String>,
        context: IdentityContext,
        config: ReplayPluginConfig,
    ) -> Self {
        let (events, _) = broadcast::channel(LIFECYCLE_CHANNEL_CAPACITY);
        Self {
            client_side_id: client_side_id.into(),
            context,
            config,
            session_id: Uuid::new_v4(),
            state: RwLock::new(RecordingState::Inactive),
            properties: Mutex::new(Map::new()),
            events,
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<LifecycleEvent> {
        self.events.subscribe()
    }

    pub fn context(&self) -> &IdentityContext {
        &self.context
    }

    pub fn plugin_config(&self) -> &ReplayPluginConfig {
        &self.config
    }

    /// Kicks off initialization. Emits `Initialized` then `Ready` on
    /// success, `Failed` when the client-side id is unusable. Send errors
    /// only mean no subscriber is listening, which is fine for a
    /// notification fanout.
    pub fn start(&self) {
        if self.client_side_id.trim().is_empty() {
            warn!("replay client refused to start: client-side id is empty");
            let _ = self.events.send(LifecycleEvent::Failed);
            return;
        }

        {
            let mut state = self.state.write().expect("recording state lock");
            *state = RecordingState::Recording;
        }
        info!(
            context_key = %self.context.key,
            canvas_recording = self.config.enable_canvas_recording,
            "replay client initialized"
        );
        let _ = self.events.send(LifecycleEvent::Initialized);
        let _ = self.events.send(LifecycleEvent::Ready);
    }

    /// Properties tagged onto the session so far. Demo/diagnostic accessor.
    pub fn tagged_properties(&self) -> Map<String, Value> {
        self.properties.lock().expect("properties lock").clone()
    }
}

#[async_trait]
impl ReplayRecorder for SimulatedReplayClient {
    fn recording_state(&self) -> RecordingState {
        *self.state.read().expect("recording state lock")
    }

    fn add_session_properties(&self, properties: Map<String, Value>) {
        // Accepted in any lifecycle phase; properties tagged before the
        // recorder starts are buffered, matching the SDK contract that
        // tagging is fire-and-forget.
        let mut buffered = self.properties.lock().expect("properties lock");
        for (key, value) in properties {
            buffered.insert(key, value);
        }
    }

    async fn get_session(&self) -> Result<SessionDescriptor, ReplayError> {
        if self.recording_state() == RecordingState::Inactive {
            return Err(ReplayError::session_fetch(
                "session replay has not started recording",
            ));
        }

        let url = format!("{SESSION_URL_BASE}/{}", self.session_id);
        let url_with_timestamp = format!("{url}?t={}", Utc::now().timestamp_millis());
        Ok(SessionDescriptor {
            url,
            url_with_timestamp,
        })
    }
}
