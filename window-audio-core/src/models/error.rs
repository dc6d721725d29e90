use thiserror::Error;

/// Errors surfaced by host collaborators and settings parsing.
///
/// The child audio lifecycle never returns these to its caller; they are
/// logged and resolved into a disabled or child-less state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CaptureError {
    #[error("failed to create audio source: {0}")]
    SourceCreationFailed(String),

    #[error("invalid audio capture settings: {0}")]
    InvalidSettings(String),
}
