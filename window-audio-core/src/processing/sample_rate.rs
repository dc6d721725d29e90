use std::sync::OnceLock;

/// Process-wide host mixing sample rate.
///
/// Audio from child sources arrives already resampled to the host rate,
/// which is fixed once the host has started. The value is therefore set
/// once, either explicitly through `preset` at startup or lazily from the
/// first forwarded frame, and never changes afterwards.
#[derive(Debug)]
pub struct SampleRateCache {
    rate: OnceLock<u32>,
}

impl SampleRateCache {
    pub const fn new() -> Self {
        Self {
            rate: OnceLock::new(),
        }
    }

    /// The cache shared by every forwarder in the process.
    pub fn global() -> &'static SampleRateCache {
        static GLOBAL: SampleRateCache = SampleRateCache::new();
        &GLOBAL
    }

    /// Set the rate explicitly. Returns false if it was already set.
    pub fn preset(&self, samples_per_sec: u32) -> bool {
        let stored = self.rate.set(samples_per_sec).is_ok();
        if !stored {
            log::debug!("sample rate already initialized; ignoring preset of {}", samples_per_sec);
        }
        stored
    }

    pub fn get(&self) -> Option<u32> {
        self.rate.get().copied()
    }

    /// The cached rate, running `query` only if nothing is cached yet.
    /// Concurrent first callers block until one of them has stored a value.
    pub fn get_or_init(&self, query: impl FnOnce() -> u32) -> u32 {
        *self.rate.get_or_init(query)
    }
}

impl Default for SampleRateCache {
    fn default() -> Self {
        Self::new()
    }
}
