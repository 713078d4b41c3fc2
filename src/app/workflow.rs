use crate::upload::{
    SelectedFile, UploadError, UploadKind, UploadOutcome, UploadRequest, UploadTransport,
    UploadedFileRecord,
};
use std::io;
use std::path::Path;
use tracing::{info, warn};

pub const NO_FILE_SELECTED: &str = "Please select a file";
pub const NO_FILES_SELECTED: &str = "Please select files";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum WorkflowStatus {
    #[default]
    Idle,
    Uploading,
    Error(String),
    Success(String),
}

/// All interaction state of the uploader window.
///
/// Submissions are split in two halves so the UI thread can hand the request
/// to a background runtime: `begin_*` validates and marks the workflow as in
/// flight, `complete` applies the result.
#[derive(Debug, Default)]
pub struct UploadWorkflow {
    pub single_file: Option<SelectedFile>,
    pub multiple_files: Vec<SelectedFile>,
    pub status: WorkflowStatus,
    pub uploaded_files: Vec<UploadedFileRecord>,
}

impl UploadWorkflow {
    pub fn is_uploading(&self) -> bool {
        self.status == WorkflowStatus::Uploading
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.status {
            WorkflowStatus::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn success_message(&self) -> Option<&str> {
        match &self.status {
            WorkflowStatus::Success(message) => Some(message),
            _ => None,
        }
    }

    pub fn select_single(&mut self, file: Option<SelectedFile>) {
        let Some(file) = file else {
            return;
        };

        info!("Selected {} ({} bytes)", file.name, file.size);
        self.single_file = Some(file);
        self.clear_message();
    }

    pub fn select_multiple(&mut self, files: Vec<SelectedFile>) {
        if files.is_empty() {
            return;
        }

        info!("Selected {} files", files.len());
        self.multiple_files = files;
        self.clear_message();
    }

    /// Shows why a picked file could not be selected. Never interrupts an
    /// upload in flight.
    pub fn report_unreadable(&mut self, path: &Path, error: &io::Error) {
        warn!("Could not inspect {}: {}", path.display(), error);
        if self.is_uploading() {
            return;
        }

        self.status = WorkflowStatus::Error(format!(
            "Could not read {}: {}",
            path.file_name()
                .map(|n| n.to_string_lossy())
                .unwrap_or_else(|| path.to_string_lossy()),
            error
        ));
    }

    pub fn begin_single(&mut self) -> Option<UploadRequest> {
        if self.refuse_while_uploading() {
            return None;
        }

        let Some(file) = self.single_file.clone() else {
            self.status = WorkflowStatus::Error(NO_FILE_SELECTED.to_string());
            return None;
        };

        info!("Uploading {}", file.name);
        self.status = WorkflowStatus::Uploading;
        Some(UploadRequest::Single(file))
    }

    pub fn begin_multiple(&mut self) -> Option<UploadRequest> {
        if self.refuse_while_uploading() {
            return None;
        }

        if self.multiple_files.is_empty() {
            self.status = WorkflowStatus::Error(NO_FILES_SELECTED.to_string());
            return None;
        }

        info!("Uploading {} files", self.multiple_files.len());
        self.status = WorkflowStatus::Uploading;
        Some(UploadRequest::Multiple(self.multiple_files.clone()))
    }

    pub fn complete(&mut self, kind: UploadKind, result: Result<UploadOutcome, UploadError>) {
        match result {
            Ok(outcome) => {
                info!(
                    "Upload finished: {} ({} files)",
                    outcome.message,
                    outcome.files.len()
                );
                self.status = WorkflowStatus::Success(outcome.message);
                self.uploaded_files = outcome.files;
                match kind {
                    UploadKind::Single => self.single_file = None,
                    UploadKind::Multiple => self.multiple_files.clear(),
                }
            }
            Err(e) => {
                warn!("Upload failed: {}", e);
                self.status = WorkflowStatus::Error(e.user_message());
            }
        }
    }

    pub async fn upload_single(&mut self, transport: &dyn UploadTransport) {
        if let Some(request) = self.begin_single() {
            let result = send(transport, &request).await;
            self.complete(request.kind(), result);
        }
    }

    pub async fn upload_multiple(&mut self, transport: &dyn UploadTransport) {
        if let Some(request) = self.begin_multiple() {
            let result = send(transport, &request).await;
            self.complete(request.kind(), result);
        }
    }

    fn clear_message(&mut self) {
        if matches!(
            self.status,
            WorkflowStatus::Error(_) | WorkflowStatus::Success(_)
        ) {
            self.status = WorkflowStatus::Idle;
        }
    }

    fn refuse_while_uploading(&self) -> bool {
        if self.is_uploading() {
            warn!("Upload already in progress, ignoring submission");
            return true;
        }
        false
    }
}

/// Dispatches a request to the matching transport route.
pub async fn send(
    transport: &dyn UploadTransport,
    request: &UploadRequest,
) -> Result<UploadOutcome, UploadError> {
    match request {
        UploadRequest::Single(file) => transport.upload_single(file).await,
        UploadRequest::Multiple(files) => transport.upload_multiple(files).await,
    }
}
