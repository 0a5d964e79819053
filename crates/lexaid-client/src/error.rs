use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// Caught before any network call; never reaches the backend.
    #[error("{0}")]
    Validation(String),

    /// The backend answered with a non-2xx status. The message is the
    /// backend's error envelope when it sent one, else a generic line
    /// carrying the status.
    #[error("backend error ({status}): {message}")]
    Backend { status: u16, message: String },

    /// The initiator abandoned an in-flight upload.
    #[error("upload cancelled")]
    Cancelled,

    /// The backend was unreachable or the transport failed mid-request.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ClientError {
    /// The string dispatched into session state for this failure. Kept
    /// apart from `Display` so logs can stay technical while the stored
    /// error stays readable.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(message) => message.clone(),
            Self::Backend { message, .. } => message.clone(),
            Self::Cancelled => "Upload cancelled by user.".to_string(),
            Self::Transport(_) => "Upload failed. Please try again.".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
