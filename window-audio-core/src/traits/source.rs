use std::sync::Arc;

use crate::models::audio_frame::{AudioData, SourceAudio};
use crate::models::settings::AudioCaptureSettings;

/// Callback invoked by a child source for every captured audio buffer.
///
/// Parameters:
/// - `audio`: The captured planes, already at the host mixing rate.
/// - `muted`: Whether the child is muted. Informational only.
///
/// Runs on the host's audio thread; must not block.
pub type AudioCaptureCallback = Arc<dyn Fn(&AudioData<'_>, bool) + Send + Sync + 'static>;

/// Token identifying a registered audio capture callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallbackId(pub u64);

/// Sink accepting audio frames on behalf of a source.
pub trait AudioOutput: Send + Sync + 'static {
    /// Push a frame into the source's audio output.
    fn output_audio(&self, audio: &SourceAudio<'_>);
}

/// The primary capture source that owns the child audio source.
///
/// `C` is the host's child source type so active-child bookkeeping can
/// take the concrete handle.
pub trait ParentSource<C>: AudioOutput {
    fn name(&self) -> String;

    /// Show or hide the parent's audio in the host mixer.
    fn set_audio_active(&self, active: bool);

    /// Make `child` follow the parent's activation state.
    fn add_active_child(&self, child: &C);

    fn remove_active_child(&self, child: &C);
}

/// A private audio capture source created on behalf of a parent.
///
/// Dropping the value releases the underlying host object.
pub trait ChildSource: Send + 'static {
    fn name(&self) -> String;

    fn set_name(&self, name: &str);

    /// Current settings, or None if the source was created without any.
    fn settings(&self) -> Option<AudioCaptureSettings>;

    /// Apply new settings; the source re-hooks its capture target.
    fn update(&self, settings: &AudioCaptureSettings);

    fn add_audio_capture_callback(&self, callback: AudioCaptureCallback) -> CallbackId;

    /// Unregister a callback.
    ///
    /// Must not return while an invocation of that callback is still
    /// running, so the caller may release anything the callback uses.
    fn remove_audio_capture_callback(&self, id: CallbackId);
}
