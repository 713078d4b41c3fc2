use thiserror::Error;

/// Shown when a failure carries no usable description.
pub const FALLBACK_MESSAGE: &str = "Upload failed";

#[derive(Debug, Error)]
pub enum UploadError {
    /// Non-2xx response. `error` is the server's structured message, if any.
    #[error("Request failed with status code {status}")]
    Rejected { status: u16, error: Option<String> },

    #[error("{0}")]
    Transport(String),

    #[error("Failed to read {name}: {source}")]
    ReadFile {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Upload failed")]
    Unknown,
}

impl UploadError {
    /// Message surfaced to the user: the server's error string first, then the
    /// transport description, then the fixed fallback.
    pub fn user_message(&self) -> String {
        if let UploadError::Rejected {
            error: Some(error), ..
        } = self
        {
            if !error.is_empty() {
                return error.clone();
            }
        }

        let description = self.to_string();
        if description.trim().is_empty() {
            FALLBACK_MESSAGE.to_string()
        } else {
            description
        }
    }
}

impl From<reqwest::Error> for UploadError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            UploadError::Transport("Request timeout".to_string())
        } else if error.is_connect() {
            UploadError::Transport(format!("Connection failed: {}", error))
        } else if error.is_decode() {
            UploadError::Transport(format!("Invalid response from server: {}", error))
        } else {
            UploadError::Transport(error.to_string())
        }
    }
}
