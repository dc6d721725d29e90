/// Best-effort OS window lookups.
///
/// Every method returns an empty string when the window cannot be
/// resolved, e.g. because it has been closed in the meantime.
pub trait WindowInspector {
    type Handle: Copy;

    fn window_title(&self, window: Self::Handle) -> String;

    fn window_class(&self, window: Self::Handle) -> String;

    /// Full path of the executable that owns the window.
    fn window_executable(&self, window: Self::Handle) -> String;
}
