use crate::config::Config;
use crate::upload::error::UploadError;
use crate::upload::types::{
    ErrorResponse, MultipleUploadResponse, SelectedFile, SingleUploadResponse, UploadOutcome,
};
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// Network side of the upload workflow.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UploadTransport: Send + Sync {
    async fn upload_single(&self, file: &SelectedFile) -> Result<UploadOutcome, UploadError>;

    async fn upload_multiple(&self, files: &[SelectedFile])
        -> Result<UploadOutcome, UploadError>;
}

#[derive(Clone)]
pub struct UploadClient {
    client: Client,
    config: Config,
}

impl UploadClient {
    pub fn new(config: Config) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    async fn file_part(file: &SelectedFile) -> Result<Part, UploadError> {
        let content = tokio::fs::read(&file.path)
            .await
            .map_err(|source| UploadError::ReadFile {
                name: file.name.clone(),
                source,
            })?;

        let part = Part::bytes(content).file_name(file.name.clone());
        if file.mime_type.is_empty() {
            return Ok(part);
        }

        part.mime_str(&file.mime_type)
            .map_err(|e| UploadError::Transport(format!("Invalid MIME type: {}", e)))
    }

    async fn post_form<T: DeserializeOwned>(
        &self,
        url: &str,
        form: Form,
    ) -> Result<T, UploadError> {
        debug!("POST {}", url);

        let response = self.client.post(url).multipart(form).send().await?;
        let response = Self::check_status(response).await?;

        Ok(response.json::<T>().await?)
    }

    async fn check_status(response: Response) -> Result<Response, UploadError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = match response.bytes().await {
            Ok(body) => body,
            Err(e) => {
                debug!("Could not read rejection body: {}", e);
                Default::default()
            }
        };
        let error = serde_json::from_slice::<ErrorResponse>(&body)
            .ok()
            .and_then(|body| body.error);

        warn!("Upload rejected with status {}: {:?}", status, error);
        Err(UploadError::Rejected {
            status: status.as_u16(),
            error,
        })
    }
}

#[async_trait]
impl UploadTransport for UploadClient {
    async fn upload_single(&self, file: &SelectedFile) -> Result<UploadOutcome, UploadError> {
        let form = Form::new().part("file", Self::file_part(file).await?);

        let response: SingleUploadResponse = self
            .post_form(&self.config.single_upload_url(), form)
            .await?;

        Ok(response.into())
    }

    async fn upload_multiple(
        &self,
        files: &[SelectedFile],
    ) -> Result<UploadOutcome, UploadError> {
        let mut form = Form::new();
        for file in files {
            form = form.part("files", Self::file_part(file).await?);
        }

        let response: MultipleUploadResponse = self
            .post_form(&self.config.multiple_upload_url(), form)
            .await?;

        Ok(response.into())
    }
}
