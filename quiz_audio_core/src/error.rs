use thiserror::Error;

/// The host refused to start playback, typically an autoplay policy
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaybackError {
    #[error("playback rejected: {0}")]
    Rejected(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// Write refused by the store (quota exceeded, storage disabled, ...)
    #[error("session storage unavailable: {0}")]
    Unavailable(String),
}
