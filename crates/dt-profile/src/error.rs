//! Error types for profiles and persistence.

use thiserror::Error;

/// Result type for profile and store operations.
pub type ProfileResult<T> = Result<T, ProfileError>;

/// Errors from profile management or the key-value store.
#[derive(Debug, Error)]
pub enum ProfileError {
    /// The requested profile ID does not exist.
    #[error("profile not found: {0}")]
    ProfileNotFound(String),

    /// The requested skin does not exist in the profile's set.
    #[error("skin not found: {0}")]
    SkinNotFound(String),

    /// An underlying filesystem error.
    #[error("store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A stored record could not be serialized or deserialized.
    #[error("store serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
