use serde::{Deserialize, Serialize};

use super::settings::{AudioCaptureSettings, WindowPriority};

/// Suffix appended to the parent's name when naming the child audio source.
pub const AUDIO_SOURCE_SUFFIX: &str = "Audio";

/// Display name for the child audio source of a parent called `parent_name`.
pub fn child_source_name(parent_name: &str) -> String {
    format!("{} ({})", parent_name, AUDIO_SOURCE_SUFFIX)
}

/// Desired audio capture state of a parent capture source.
///
/// Built by the parent from its own settings every time they change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioCaptureRequest {
    /// Capture audio alongside the window (default: false).
    pub enabled: bool,

    /// Encoded identity of the target window, or None to capture
    /// whatever the child source defaults to.
    pub target: Option<String>,

    /// Window matching priority (default: class).
    pub priority: WindowPriority,
}

impl AudioCaptureRequest {
    pub fn disabled() -> Self {
        Self::default()
    }

    pub fn enabled(target: Option<String>, priority: WindowPriority) -> Self {
        Self {
            enabled: true,
            target,
            priority,
        }
    }

    /// Settings to hand the child, or None when no window is targeted.
    pub fn child_settings(&self) -> Option<AudioCaptureSettings> {
        self.target.as_ref().map(|target| AudioCaptureSettings {
            target: Some(target.clone()),
            priority: self.priority,
        })
    }
}

impl Default for AudioCaptureRequest {
    fn default() -> Self {
        Self {
            enabled: false,
            target: None,
            priority: WindowPriority::Class,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn child_name_uses_suffix() {
        assert_eq!(child_source_name("Window Capture"), "Window Capture (Audio)");
    }

    #[test]
    fn no_target_means_no_settings() {
        let request = AudioCaptureRequest::enabled(None, WindowPriority::Title);
        assert_eq!(request.child_settings(), None);
    }

    #[test]
    fn target_carries_priority() {
        let request = AudioCaptureRequest::enabled(Some("a:b:c".into()), WindowPriority::Executable);
        assert_eq!(
            request.child_settings(),
            Some(AudioCaptureSettings::new("a:b:c", WindowPriority::Executable))
        );
    }
}
