mod client;
mod error;
mod types;

#[cfg(test)]
pub use client::MockUploadTransport;
pub use client::{UploadClient, UploadTransport};
pub use error::{UploadError, FALLBACK_MESSAGE};
pub use types::{
    ErrorResponse, MultipleUploadResponse, SelectedFile, SingleUploadResponse, UploadKind,
    UploadOutcome, UploadRequest, UploadedFileRecord,
};
