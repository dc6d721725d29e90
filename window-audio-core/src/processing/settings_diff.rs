use crate::models::settings::AudioCaptureSettings;

/// Whether moving the child from `old` to `new` requires reconfiguring it.
///
/// A target change always matters. A priority change only matters when the
/// new settings name a window; without one there is nothing to tie-break.
pub fn settings_changed(old: &AudioCaptureSettings, new: &AudioCaptureSettings) -> bool {
    (new.has_target() && old.priority != new.priority) || old.target_str() != new.target_str()
}
