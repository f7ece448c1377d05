use thiserror::Error;

/// Error type for failures outside the form model itself: configuration
/// IO, serialization and misuse of the editor/field API by embedding code.
///
/// Missing user input is never an error; it only keeps a gate closed.
#[derive(Debug, Error)]
pub enum OnboardingError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Unknown field: {0}")]
    UnknownField(String),
    #[error("Editor for `{0}` is already open")]
    EditorBusy(String),
    #[error("Unknown route: {0}")]
    UnknownRoute(String),
    #[error("Configuration error: {0}")]
    Config(String),
}
