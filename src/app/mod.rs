mod ui;
mod workflow;

use crate::config::Config;
use crate::upload::{SelectedFile, UploadClient, UploadError, UploadOutcome, UploadRequest};
use eframe::{egui, App};
use std::path::PathBuf;
use std::sync::mpsc as std_mpsc;
use std::sync::mpsc::TryRecvError;
use tracing::{error, info, warn};
pub use workflow::{
    send, UploadWorkflow, WorkflowStatus, NO_FILES_SELECTED, NO_FILE_SELECTED,
};

type UploadResult = Result<UploadOutcome, UploadError>;

struct PendingUpload {
    request: UploadRequest,
    receiver: std_mpsc::Receiver<UploadResult>,
}

pub struct S3Uploader {
    workflow: UploadWorkflow,
    client: UploadClient,
    pending: Option<PendingUpload>,
}

impl S3Uploader {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: Config) -> Self {
        info!("Initializing S3 uploader against {}", config.api_url());
        Self {
            workflow: UploadWorkflow::default(),
            client: UploadClient::new(config),
            pending: None,
        }
    }

    pub fn pick_single_file(&mut self) {
        let path = rfd::FileDialog::new().pick_file();
        self.select_single_path(path);
    }

    pub fn pick_multiple_files(&mut self) {
        let paths = rfd::FileDialog::new().pick_files().unwrap_or_default();
        self.select_multiple_paths(paths);
    }

    fn select_single_path(&mut self, path: Option<PathBuf>) {
        let Some(path) = path else {
            return;
        };

        match SelectedFile::from_path(&path) {
            Ok(file) => self.workflow.select_single(Some(file)),
            Err(e) => self.workflow.report_unreadable(&path, &e),
        }
    }

    fn select_multiple_paths(&mut self, paths: Vec<PathBuf>) {
        let mut files = Vec::with_capacity(paths.len());
        let mut unreadable: Option<(PathBuf, std::io::Error)> = None;

        for path in paths {
            match SelectedFile::from_path(&path) {
                Ok(file) => files.push(file),
                Err(e) if unreadable.is_some() => {
                    warn!("Could not inspect {}: {}", path.display(), e);
                }
                Err(e) => unreadable = Some((path, e)),
            }
        }

        self.workflow.select_multiple(files);
        if let Some((path, e)) = unreadable {
            self.workflow.report_unreadable(&path, &e);
        }
    }

    pub fn start_single_upload(&mut self) {
        if let Some(request) = self.workflow.begin_single() {
            self.spawn_upload(request);
        }
    }

    pub fn start_multiple_upload(&mut self) {
        if let Some(request) = self.workflow.begin_multiple() {
            self.spawn_upload(request);
        }
    }

    fn spawn_upload(&mut self, request: UploadRequest) {
        let (sender, receiver) = std_mpsc::channel();
        let client = self.client.clone();
        let worker_request = request.clone();

        std::thread::spawn(move || {
            let rt = match tokio::runtime::Runtime::new() {
                Ok(rt) => rt,
                Err(e) => {
                    error!("Failed to start upload runtime: {}", e);
                    let _ = sender.send(Err(UploadError::Transport(e.to_string())));
                    return;
                }
            };

            let result = rt.block_on(send(&client, &worker_request));
            let _ = sender.send(result);
        });

        self.pending = Some(PendingUpload { request, receiver });
    }

    pub fn update_state(&mut self, ctx: &egui::Context) {
        let Some(pending) = &self.pending else {
            return;
        };

        let result = match pending.receiver.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => {
                ctx.request_repaint();
                return;
            }
            Err(TryRecvError::Disconnected) => {
                error!("Upload worker exited without reporting a result");
                Err(UploadError::Unknown)
            }
        };

        let kind = pending.request.kind();
        self.pending = None;
        self.workflow.complete(kind, result);
        ctx.request_repaint();
    }
}

impl App for S3Uploader {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_state(ctx);
        self.render(ctx);
    }
}
