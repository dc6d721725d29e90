//! Process audio capture capability probe.
//!
//! Capturing the audio of a single process relies on WASAPI process
//! loopback, which Windows only offers from Windows 10 2004 (build 19041).
//! On other platforms per-window audio capture is never available.

/// First Windows build with process loopback capture.
pub const MIN_PROCESS_LOOPBACK_BUILD: u32 = 19041;

/// Whether an OS version supports process loopback capture.
pub fn supports_process_loopback(major: u32, build: u32) -> bool {
    major > 10 || (major == 10 && build >= MIN_PROCESS_LOOPBACK_BUILD)
}

/// Whether per-window audio capture can be used on this system.
///
/// The OS version is queried once and cached for the process lifetime.
#[cfg(target_os = "windows")]
pub fn process_audio_capture_available() -> bool {
    use std::sync::OnceLock;

    static AVAILABLE: OnceLock<bool> = OnceLock::new();
    *AVAILABLE.get_or_init(|| match os_version() {
        Some((major, minor, build)) => {
            let available = supports_process_loopback(major, build);
            log::debug!(
                "Windows {}.{}.{}: process audio capture {}",
                major,
                minor,
                build,
                if available { "available" } else { "unavailable" }
            );
            available
        }
        None => {
            log::warn!("Could not determine Windows version; disabling process audio capture");
            false
        }
    })
}

#[cfg(not(target_os = "windows"))]
pub fn process_audio_capture_available() -> bool {
    false
}

/// `(major, minor, build)` as reported by the kernel.
///
/// `RtlGetVersion` is used instead of `GetVersionExW`, which reports the
/// version the executable is manifested for.
#[cfg(target_os = "windows")]
fn os_version() -> Option<(u32, u32, u32)> {
    use windows::Wdk::System::SystemServices::RtlGetVersion;
    use windows::Win32::System::SystemInformation::OSVERSIONINFOW;

    let mut info = OSVERSIONINFOW {
        dwOSVersionInfoSize: std::mem::size_of::<OSVERSIONINFOW>() as u32,
        ..Default::default()
    };

    // SAFETY: `info` is a properly sized, writable OSVERSIONINFOW.
    let status = unsafe { RtlGetVersion(&mut info) };
    if status.is_err() {
        return None;
    }
    Some((info.dwMajorVersion, info.dwMinorVersion, info.dwBuildNumber))
}
