//! # window-audio-windows
//!
//! Windows backend for window-audio.
//!
//! Provides:
//! - `Win32WindowInspector`: window title, class and owning executable lookup
//! - `capability`: whether per-process audio capture is supported on this system
//!
//! ## Platform Requirements
//! - Windows 10 2004+ (build 19041) for process loopback capture
//!
//! ## Usage
//! ```ignore
//! use window_audio_core::WindowIdentity;
//! use window_audio_windows::Win32WindowInspector;
//!
//! let identity = WindowIdentity::resolve(&Win32WindowInspector, hwnd);
//! let target = identity.encode();
//! ```

pub mod capability;
#[cfg(target_os = "windows")]
pub mod window_inspector;

pub use capability::process_audio_capture_available;
#[cfg(target_os = "windows")]
pub use window_inspector::Win32WindowInspector;
