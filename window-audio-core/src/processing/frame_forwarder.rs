use std::sync::{Arc, Weak};

use crate::models::audio_frame::{AudioData, AudioFormat, SourceAudio, MAX_AUDIO_CHANNELS};
use crate::traits::capture_provider::AudioInfoSource;
use crate::traits::source::{AudioCaptureCallback, AudioOutput};

use super::sample_rate::SampleRateCache;

/// Reshape a child's captured buffer into the frame the parent outputs.
///
/// Planes are passed through by reference; no samples are copied.
/// `speakers` is the number of planes carrying data, capped at
/// `MAX_AUDIO_CHANNELS`. An input with no planes becomes a zero-channel frame.
pub fn adapt_frame<'a>(audio: &AudioData<'a>, samples_per_sec: u32) -> SourceAudio<'a> {
    SourceAudio {
        planes: audio.planes,
        format: AudioFormat::FloatPlanar,
        speakers: audio.active_planes().min(MAX_AUDIO_CHANNELS),
        frames: audio.frames,
        timestamp: audio.timestamp,
        samples_per_sec,
    }
}

/// Per-buffer callback target that feeds a child's audio into its parent.
///
/// Holds only a weak reference to the parent: the parent owns the child,
/// the child owns the callback, and the callback must not keep the parent
/// alive.
pub struct FrameForwarder {
    parent: Weak<dyn AudioOutput>,
    audio_info: Arc<dyn AudioInfoSource>,
    sample_rate: &'static SampleRateCache,
}

impl FrameForwarder {
    pub fn new(
        parent: Weak<dyn AudioOutput>,
        audio_info: Arc<dyn AudioInfoSource>,
        sample_rate: &'static SampleRateCache,
    ) -> Self {
        Self {
            parent,
            audio_info,
            sample_rate,
        }
    }

    /// Forward one captured buffer.
    ///
    /// `muted` does not suppress output; the host mixer applies muting.
    /// Frames arriving after the parent is gone are dropped.
    pub fn forward(&self, audio: &AudioData<'_>, _muted: bool) {
        let samples_per_sec = self
            .sample_rate
            .get_or_init(|| self.audio_info.audio_info().samples_per_sec);

        let Some(parent) = self.parent.upgrade() else {
            return;
        };

        parent.output_audio(&adapt_frame(audio, samples_per_sec));
    }

    pub fn into_callback(self) -> AudioCaptureCallback {
        Arc::new(move |audio: &AudioData<'_>, muted: bool| self.forward(audio, muted))
    }
}

#[cfg(test)]
mod tests {
    use parking_lot::Mutex;

    use super::*;
    use crate::models::audio_frame::{AudioInfo, MAX_AV_PLANES};

    #[derive(Default)]
    struct RecordingOutput {
        frames: Mutex<Vec<(usize, u32, u64, u32, usize)>>,
    }

    impl AudioOutput for RecordingOutput {
        fn output_audio(&self, audio: &SourceAudio<'_>) {
            let planes = audio.planes.iter().filter(|p| p.is_some()).count();
            self.frames
                .lock()
                .push((audio.speakers, audio.frames, audio.timestamp, audio.samples_per_sec, planes));
        }
    }

    struct FixedInfo(u32);

    impl AudioInfoSource for FixedInfo {
        fn audio_info(&self) -> AudioInfo {
            AudioInfo {
                samples_per_sec: self.0,
                speakers: 2,
            }
        }
    }

    fn leaked_cache() -> &'static SampleRateCache {
        Box::leak(Box::new(SampleRateCache::new()))
    }

    #[test]
    fn adapt_counts_non_empty_planes() {
        let left = [0.5f32; 4];
        let right = [-0.5f32; 4];
        let data = AudioData::from_planes(&[&left, &right], 4, 1234);

        let out = adapt_frame(&data, 48000);

        assert_eq!(out.speakers, 2);
        assert_eq!(out.format, AudioFormat::FloatPlanar);
        assert_eq!(out.frames, 4);
        assert_eq!(out.timestamp, 1234);
        assert_eq!(out.samples_per_sec, 48000);
        assert_eq!(out.planes[0].map(<[f32]>::as_ptr), Some(left.as_ptr()));
    }

    #[test]
    fn adapt_counts_gaps() {
        let plane = [0.0f32; 2];
        let mut data = AudioData::from_planes(&[], 2, 0);
        data.planes[0] = Some(&plane);
        data.planes[3] = Some(&plane);

        assert_eq!(adapt_frame(&data, 48000).speakers, 2);
    }

    #[test]
    fn adapt_caps_speakers() {
        let plane = [0.0f32; 2];
        let planes = vec![&plane[..]; MAX_AV_PLANES];
        let data = AudioData::from_planes(&planes, 2, 0);

        assert_eq!(adapt_frame(&data, 48000).speakers, MAX_AV_PLANES.min(MAX_AUDIO_CHANNELS));
    }

    #[test]
    fn adapt_empty_input_is_zero_channel() {
        let data = AudioData::from_planes(&[], 0, 99);

        let out = adapt_frame(&data, 44100);

        assert_eq!(out.speakers, 0);
        assert_eq!(out.timestamp, 99);
    }

    #[test]
    fn forwards_muted_frames() {
        let parent = Arc::new(RecordingOutput::default());
        let weak: Weak<dyn AudioOutput> = Arc::downgrade(&parent) as Weak<dyn AudioOutput>;
        let forwarder = FrameForwarder::new(weak, Arc::new(FixedInfo(44100)), leaked_cache());
        let plane = [0.25f32; 8];
        let data = AudioData::from_planes(&[&plane], 8, 10);

        forwarder.forward(&data, true);
        forwarder.forward(&data, false);

        assert_eq!(*parent.frames.lock(), vec![(1, 8, 10, 44100, 1), (1, 8, 10, 44100, 1)]);
    }

    #[test]
    fn sample_rate_resolved_once() {
        let parent = Arc::new(RecordingOutput::default());
        let weak: Weak<dyn AudioOutput> = Arc::downgrade(&parent) as Weak<dyn AudioOutput>;
        let cache = leaked_cache();
        cache.preset(32000);
        let callback = FrameForwarder::new(weak, Arc::new(FixedInfo(48000)), cache).into_callback();
        let data = AudioData::from_planes(&[], 0, 0);

        callback(&data, false);

        assert_eq!(parent.frames.lock()[0].3, 32000);
    }

    #[test]
    fn frames_after_parent_drop_are_discarded() {
        let parent = Arc::new(RecordingOutput::default());
        let weak: Weak<dyn AudioOutput> = Arc::downgrade(&parent) as Weak<dyn AudioOutput>;
        let forwarder = FrameForwarder::new(weak, Arc::new(FixedInfo(48000)), leaked_cache());
        drop(parent);

        // must not panic
        forwarder.forward(&AudioData::from_planes(&[], 0, 0), false);
    }
}
