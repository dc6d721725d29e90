use crate::models::audio_frame::AudioInfo;
use crate::models::error::CaptureError;
use crate::models::settings::AudioCaptureSettings;

use super::source::ChildSource;

/// Read access to the host's global audio mixing parameters.
pub trait AudioInfoSource: Send + Sync {
    fn audio_info(&self) -> AudioInfo;
}

/// Host facility that creates private audio capture sources.
///
/// Implemented by the host integration; on Windows the capability probe
/// comes from `window-audio-windows`.
pub trait AudioSourceFactory: AudioInfoSource {
    type Child: ChildSource;

    /// Whether per-window audio capture is supported in the current
    /// environment. `false` is a normal state, not an error.
    fn is_available(&self) -> bool;

    /// Create a private (not user-visible) audio capture source.
    ///
    /// `settings` is None when no specific window is targeted, leaving the
    /// source on its defaults.
    fn create_private(
        &self,
        name: &str,
        settings: Option<&AudioCaptureSettings>,
    ) -> Result<Self::Child, CaptureError>;
}
