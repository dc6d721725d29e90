//! Win32 window lookups used to build capture target identities.
//!
//! All lookups are best-effort: a window that has been closed, or a process
//! we may not open, simply yields an empty string.

use windows::core::PWSTR;
use windows::Win32::Foundation::{CloseHandle, HWND};
use windows::Win32::System::Threading::{
    OpenProcess, QueryFullProcessImageNameW, PROCESS_NAME_WIN32, PROCESS_QUERY_LIMITED_INFORMATION,
};
use windows::Win32::UI::WindowsAndMessaging::{
    GetClassNameW, GetWindowTextLengthW, GetWindowTextW, GetWindowThreadProcessId,
};

use window_audio_core::traits::window_inspector::WindowInspector;

/// Longest window class name Win32 allows, plus the terminator.
const MAX_CLASS_NAME: usize = 257;

/// Long enough for `\\?\` extended paths.
const MAX_EXE_PATH: usize = 32768;

/// Window inspector backed by the Win32 user and process APIs.
#[derive(Debug, Clone, Copy, Default)]
pub struct Win32WindowInspector;

impl WindowInspector for Win32WindowInspector {
    type Handle = HWND;

    fn window_title(&self, window: HWND) -> String {
        unsafe {
            let len = GetWindowTextLengthW(window);
            if len <= 0 {
                return String::new();
            }
            let mut buf = vec![0u16; len as usize + 1];
            let copied = GetWindowTextW(window, &mut buf);
            wide_to_string(&buf, copied)
        }
    }

    fn window_class(&self, window: HWND) -> String {
        let mut buf = [0u16; MAX_CLASS_NAME];
        let copied = unsafe { GetClassNameW(window, &mut buf) };
        wide_to_string(&buf, copied)
    }

    fn window_executable(&self, window: HWND) -> String {
        let mut pid: u32 = 0;
        unsafe {
            GetWindowThreadProcessId(window, Some(&mut pid));
        }
        if pid == 0 {
            return String::new();
        }
        process_image_path(pid).unwrap_or_default()
    }
}

fn process_image_path(pid: u32) -> Option<String> {
    unsafe {
        let process = match OpenProcess(PROCESS_QUERY_LIMITED_INFORMATION, false, pid) {
            Ok(handle) => handle,
            Err(e) => {
                log::debug!("OpenProcess({}) failed: {}", pid, e);
                return None;
            }
        };

        let mut buf = vec![0u16; MAX_EXE_PATH];
        let mut size = buf.len() as u32;
        let result = QueryFullProcessImageNameW(process, PROCESS_NAME_WIN32, PWSTR(buf.as_mut_ptr()), &mut size);
        let _ = CloseHandle(process);

        match result {
            Ok(()) => Some(String::from_utf16_lossy(&buf[..size as usize])),
            Err(e) => {
                log::debug!("QueryFullProcessImageNameW({}) failed: {}", pid, e);
                None
            }
        }
    }
}

/// Convert the first `len` UTF-16 units of `buf`; non-positive lengths give "".
fn wide_to_string(buf: &[u16], len: i32) -> String {
    if len <= 0 {
        return String::new();
    }
    let len = (len as usize).min(buf.len());
    String::from_utf16_lossy(&buf[..len])
}
