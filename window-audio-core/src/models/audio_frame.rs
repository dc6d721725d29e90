/// Maximum number of data planes an audio buffer can carry.
pub const MAX_AV_PLANES: usize = 8;

/// Maximum number of speaker channels the host mixes.
pub const MAX_AUDIO_CHANNELS: usize = 8;

/// Sample layout of audio handed to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioFormat {
    /// 32-bit float, one plane per channel.
    FloatPlanar,
}

/// A captured audio buffer as delivered by a child source.
///
/// The child has already resampled to the host mixing rate, so no rate is
/// carried here. Planes are borrowed for the duration of the callback.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AudioData<'a> {
    pub planes: [Option<&'a [f32]>; MAX_AV_PLANES],
    pub frames: u32,
    pub timestamp: u64,
}

impl<'a> AudioData<'a> {
    /// Build from a list of channel planes; anything past `MAX_AV_PLANES` is ignored.
    pub fn from_planes(planes: &[&'a [f32]], frames: u32, timestamp: u64) -> Self {
        let mut data = [None; MAX_AV_PLANES];
        for (slot, plane) in data.iter_mut().zip(planes) {
            *slot = Some(*plane);
        }
        Self {
            planes: data,
            frames,
            timestamp,
        }
    }

    /// Number of planes that carry data.
    pub fn active_planes(&self) -> usize {
        self.planes.iter().filter(|p| p.is_some()).count()
    }
}

/// Audio frame pushed into a parent source's output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SourceAudio<'a> {
    pub planes: [Option<&'a [f32]>; MAX_AV_PLANES],
    pub format: AudioFormat,
    pub speakers: usize,
    pub frames: u32,
    pub timestamp: u64,
    pub samples_per_sec: u32,
}

/// Host audio mixing parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudioInfo {
    pub samples_per_sec: u32,
    pub speakers: usize,
}

impl Default for AudioInfo {
    fn default() -> Self {
        Self {
            samples_per_sec: 48000,
            speakers: 2,
        }
    }
}
