//! # window-audio-core
//!
//! Platform-agnostic core for capturing a window's audio alongside a
//! window/display capture source.
//!
//! A parent capture source owns at most one private child audio source.
//! `ChildAudioManager` creates, updates and releases that child as the
//! parent's audio settings change, and forwards every captured buffer from
//! the child into the parent's audio output. Host integrations implement
//! the traits in `traits/`.
//!
//! ## Architecture
//!
//! ```text
//! window-audio-core (this crate)
//! ├── traits/       ← ParentSource, ChildSource, AudioSourceFactory, WindowInspector
//! ├── models/       ← CaptureError, AudioCaptureSettings, WindowIdentity, audio frames, config
//! ├── processing/   ← settings diffing, FrameForwarder, SampleRateCache
//! └── session/      ← ChildAudioManager (child lifecycle)
//! ```

pub mod models;
pub mod processing;
pub mod session;
pub mod traits;

// Re-export key types at crate root for convenience.
pub use models::audio_frame::{AudioData, AudioFormat, AudioInfo, SourceAudio, MAX_AUDIO_CHANNELS, MAX_AV_PLANES};
pub use models::config::{child_source_name, AudioCaptureRequest, AUDIO_SOURCE_SUFFIX};
pub use models::error::CaptureError;
pub use models::identity::{encode_identity_field, WindowIdentity};
pub use models::settings::{AudioCaptureSettings, WindowPriority};
pub use processing::frame_forwarder::{adapt_frame, FrameForwarder};
pub use processing::sample_rate::SampleRateCache;
pub use processing::settings_diff::settings_changed;
pub use session::child_audio::{rename_listener, ChildAudioManager, ChildAudioState, SharedChildAudio};
pub use traits::capture_provider::{AudioInfoSource, AudioSourceFactory};
pub use traits::source::{AudioCaptureCallback, AudioOutput, CallbackId, ChildSource, ParentSource};
pub use traits::window_inspector::WindowInspector;
