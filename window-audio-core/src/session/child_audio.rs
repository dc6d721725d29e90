use std::sync::{Arc, Weak};

use parking_lot::Mutex;

use crate::models::config::{child_source_name, AudioCaptureRequest};
use crate::models::identity::WindowIdentity;
use crate::models::settings::{AudioCaptureSettings, WindowPriority};
use crate::processing::frame_forwarder::FrameForwarder;
use crate::processing::sample_rate::SampleRateCache;
use crate::processing::settings_diff::settings_changed;
use crate::traits::capture_provider::{AudioInfoSource, AudioSourceFactory};
use crate::traits::source::{AudioOutput, CallbackId, ChildSource, ParentSource};
use crate::traits::window_inspector::WindowInspector;

/// Lifecycle state of a parent's child audio source.
///
/// ```text
/// Disabled ──enable──→ EnabledWithChild ──target/priority change──→ EnabledWithChild
///    ↑                        │
///    └──────disable───────────┘
/// ```
/// `EnabledNoChild` is reached when capture is enabled but the child could
/// not be created; the next `setup` retries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildAudioState {
    Disabled,
    EnabledNoChild,
    EnabledWithChild,
}

/// A child source together with the callback registered on it.
///
/// The two are created and torn down as one unit, so a child handle never
/// exists without its forwarder and vice versa.
struct AttachedChild<P, C: ChildSource> {
    source: C,
    callback: CallbackId,
    parent: Weak<P>,
}

impl<P: ParentSource<C>, C: ChildSource> AttachedChild<P, C> {
    /// Unregister the forwarder, detach from the parent and release the child.
    fn release(self) {
        // returns only once no invocation of the callback is in flight
        self.source.remove_audio_capture_callback(self.callback);
        if let Some(parent) = self.parent.upgrade() {
            parent.remove_active_child(&self.source);
        }
        log::debug!("Released audio source '{}'", self.source.name());
    }
}

/// Keeps a parent capture source's private audio source in sync with the
/// parent's audio settings.
///
/// Owns at most one child. Mutation goes through `&mut self`; hosts driving
/// it from several threads wrap it in [`SharedChildAudio`].
pub struct ChildAudioManager<P, F>
where
    F: AudioSourceFactory,
    P: ParentSource<F::Child>,
{
    factory: Arc<F>,
    sample_rate: &'static SampleRateCache,
    enabled: bool,
    child: Option<AttachedChild<P, F::Child>>,
}

/// A manager shared between the settings thread and host signal handlers.
pub type SharedChildAudio<P, F> = Arc<Mutex<ChildAudioManager<P, F>>>;

impl<P, F> ChildAudioManager<P, F>
where
    F: AudioSourceFactory + 'static,
    P: ParentSource<F::Child>,
{
    pub fn new(factory: Arc<F>) -> Self {
        Self {
            factory,
            sample_rate: SampleRateCache::global(),
            enabled: false,
            child: None,
        }
    }

    /// Use a specific sample rate cache instead of the process-wide one.
    pub fn with_sample_rate_cache(mut self, cache: &'static SampleRateCache) -> Self {
        self.sample_rate = cache;
        self
    }

    pub fn into_shared(self) -> SharedChildAudio<P, F> {
        Arc::new(Mutex::new(self))
    }

    pub fn state(&self) -> ChildAudioState {
        match (self.enabled, &self.child) {
            (_, Some(_)) => ChildAudioState::EnabledWithChild,
            (true, None) => ChildAudioState::EnabledNoChild,
            (false, None) => ChildAudioState::Disabled,
        }
    }

    /// The current child source, if any.
    pub fn child(&self) -> Option<&F::Child> {
        self.child.as_ref().map(|c| &c.source)
    }

    /// Bring the child in line with `request`.
    ///
    /// - enabled and capture available, no child: create it (without
    ///   settings when no window is targeted) and start forwarding.
    /// - enabled and capture available, child present, window targeted:
    ///   update the child only if its settings actually differ.
    /// - otherwise: hide the parent's audio and release the child.
    pub fn setup(&mut self, parent: &Arc<P>, request: &AudioCaptureRequest) {
        if !(request.enabled && self.factory.is_available()) {
            self.disable(parent);
            return;
        }

        self.enabled = true;
        let settings = request.child_settings();

        let Some(child) = &self.child else {
            self.attach(parent, settings.as_ref());
            return;
        };

        if let Some(new_settings) = settings {
            let old_settings = child.source.settings().unwrap_or_default();
            if settings_changed(&old_settings, &new_settings) {
                log::debug!(
                    "Updating audio source '{}' to target '{}'",
                    child.source.name(),
                    new_settings.target_str()
                );
                child.source.update(&new_settings);
            }
        }
    }

    /// Stop capturing audio. Safe to call repeatedly.
    pub fn disable(&mut self, parent: &Arc<P>) {
        self.enabled = false;
        parent.set_audio_active(false);

        if let Some(child) = self.child.take() {
            child.release();
        }
    }

    /// Relabel the child after the parent has been renamed.
    pub fn on_parent_renamed(&self, new_name: &str) {
        let Some(child) = &self.child else {
            return;
        };
        child.source.set_name(&child_source_name(new_name));
    }

    /// Point the child at a concrete window, matched by class first.
    ///
    /// Used once a capture has resolved the exact window it follows. The
    /// settings are pushed unconditionally.
    pub fn retarget_window<I: WindowInspector + ?Sized>(&self, inspector: &I, window: I::Handle) {
        let Some(child) = &self.child else {
            return;
        };
        let identity = WindowIdentity::resolve(inspector, window);
        let settings = AudioCaptureSettings::new(identity.encode(), WindowPriority::Class);
        log::debug!(
            "Retargeting audio source '{}' to '{}'",
            child.source.name(),
            settings.target_str()
        );
        child.source.update(&settings);
    }

    fn attach(&mut self, parent: &Arc<P>, settings: Option<&AudioCaptureSettings>) {
        let name = child_source_name(&parent.name());
        let source = match self.factory.create_private(&name, settings) {
            Ok(source) => source,
            Err(e) => {
                log::warn!("Failed to create audio source '{}': {}", name, e);
                return;
            }
        };

        parent.add_active_child(&source);
        parent.set_audio_active(true);

        let output: Weak<dyn AudioOutput> = Arc::downgrade(parent) as Weak<dyn AudioOutput>;
        let audio_info: Arc<dyn AudioInfoSource> = Arc::clone(&self.factory) as Arc<dyn AudioInfoSource>;
        let forwarder = FrameForwarder::new(output, audio_info, self.sample_rate);
        let callback = source.add_audio_capture_callback(forwarder.into_callback());

        log::debug!("Created audio source '{}'", name);
        self.child = Some(AttachedChild {
            source,
            callback,
            parent: Arc::downgrade(parent),
        });
    }
}

impl<P, F> Drop for ChildAudioManager<P, F>
where
    F: AudioSourceFactory,
    P: ParentSource<F::Child>,
{
    fn drop(&mut self) {
        if let Some(child) = self.child.take() {
            child.release();
        }
    }
}

/// Build a handler for the parent's rename signal.
///
/// Holds the manager weakly so a registered handler does not keep it alive.
pub fn rename_listener<P, F>(shared: &SharedChildAudio<P, F>) -> impl Fn(&str) + Send + Sync + 'static
where
    F: AudioSourceFactory + 'static,
    P: ParentSource<F::Child>,
{
    let manager = Arc::downgrade(shared);
    move |new_name: &str| {
        if let Some(manager) = manager.upgrade() {
            manager.lock().on_parent_renamed(new_name);
        }
    }
}
