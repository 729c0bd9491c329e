use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Identity record handed to the recording client at initialization.
///
/// The key is derived from the clock once at construction and never mutated
/// afterwards, so two page loads separated in time get distinct keys.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityContext {
    pub kind: String,
    pub key: String,
    pub name: String,
    pub email: String,
}

impl IdentityContext {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            kind: "user".to_string(),
            key: format!("demo-user-{}", Utc::now().timestamp_millis()),
            name: name.into(),
            email: email.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordingState {
    Inactive,
    Recording,
    Paused,
    Stopped,
}

impl RecordingState {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordingState::Inactive => "inactive",
            RecordingState::Recording => "recording",
            RecordingState::Paused => "paused",
            RecordingState::Stopped => "stopped",
        }
    }
}

impl std::fmt::Display for RecordingState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Playback identity of a recorded session, as resolved by the recording
/// client. Field names follow the SDK's wire convention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionDescriptor {
    pub url: String,
    pub url_with_timestamp: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrivacySetting {
    /// Obfuscate all text and images.
    Strict,
    /// Obfuscate inputs and PII patterns.
    Default,
    /// No obfuscation.
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SamplingStrategy {
    /// Canvas snapshot rate in frames per second.
    pub canvas: u32,
    pub canvas_max_snapshot_dimension: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplayPluginConfig {
    pub privacy_setting: PrivacySetting,
    pub enable_canvas_recording: bool,
    pub sampling_strategy: SamplingStrategy,
}

impl Default for ReplayPluginConfig {
    fn default() -> Self {
        Self {
            privacy_setting: PrivacySetting::Default,
            enable_canvas_recording: true,
            sampling_strategy: SamplingStrategy {
                canvas: 2,
                canvas_max_snapshot_dimension: 480,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusCategory {
    Info,
    Success,
    Error,
}
