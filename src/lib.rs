pub mod app;
pub mod config;
pub mod upload;
pub mod utils;

pub use app::{S3Uploader, UploadWorkflow, WorkflowStatus};
pub use config::Config;
