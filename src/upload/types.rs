use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// A file picked by the user and not yet uploaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub path: PathBuf,
    pub name: String,
    pub size: u64,
    /// Guessed from the extension, then from the leading bytes. Empty when
    /// neither is recognised.
    pub mime_type: String,
}

impl SelectedFile {
    pub fn from_path(path: &Path) -> io::Result<Self> {
        let metadata = fs::metadata(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let mime_type = Self::detect_mime(path)?;

        Ok(Self {
            path: path.to_path_buf(),
            name,
            size: metadata.len(),
            mime_type,
        })
    }

    fn detect_mime(path: &Path) -> io::Result<String> {
        if let Some(mime) = mime_guess::from_path(path).first() {
            return Ok(mime.essence_str().to_string());
        }

        Ok(infer::get_from_path(path)?
            .map(|kind| kind.mime_type().to_string())
            .unwrap_or_default())
    }
}

/// Server-confirmed metadata for one uploaded object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedFileRecord {
    #[serde(rename = "fileName")]
    pub file_name: String,
    #[serde(rename = "fileSize")]
    pub file_size: u64,
    #[serde(rename = "fileType", default)]
    pub file_type: String,
    #[serde(rename = "fileUrl")]
    pub file_url: String,
}

/// Body of a successful `POST /upload`.
#[derive(Debug, Deserialize)]
pub struct SingleUploadResponse {
    pub message: String,
    #[serde(flatten)]
    pub file: UploadedFileRecord,
}

/// Body of a successful `POST /upload-multiple`.
#[derive(Debug, Deserialize)]
pub struct MultipleUploadResponse {
    pub message: String,
    pub files: Vec<UploadedFileRecord>,
}

/// Body of a rejected request. The server may omit `error`.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorResponse {
    pub error: Option<String>,
}

/// Normalised result of either upload route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadOutcome {
    pub message: String,
    pub files: Vec<UploadedFileRecord>,
}

impl From<SingleUploadResponse> for UploadOutcome {
    fn from(response: SingleUploadResponse) -> Self {
        Self {
            message: response.message,
            files: vec![response.file],
        }
    }
}

impl From<MultipleUploadResponse> for UploadOutcome {
    fn from(response: MultipleUploadResponse) -> Self {
        Self {
            message: response.message,
            files: response.files,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    Single,
    Multiple,
}

/// Snapshot of the selection handed to the transport when a submission starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadRequest {
    Single(SelectedFile),
    Multiple(Vec<SelectedFile>),
}

impl UploadRequest {
    pub fn kind(&self) -> UploadKind {
        match self {
            UploadRequest::Single(_) => UploadKind::Single,
            UploadRequest::Multiple(_) => UploadKind::Multiple,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn single_response_flattens_into_one_record() {
        let body = r#"{
            "message": "ok",
            "fileName": "a.png",
            "fileSize": 10,
            "fileType": "image/png",
            "fileUrl": "http://x/a.png"
        }"#;

        let response: SingleUploadResponse = serde_json::from_str(body).unwrap();
        let outcome = UploadOutcome::from(response);

        assert_eq!(outcome.message, "ok");
        assert_eq!(
            outcome.files,
            vec![UploadedFileRecord {
                file_name: "a.png".to_string(),
                file_size: 10,
                file_type: "image/png".to_string(),
                file_url: "http://x/a.png".to_string(),
            }]
        );
    }

    #[test]
    fn multiple_response_keeps_server_order() {
        let body = r#"{
            "message": "2 files uploaded",
            "files": [
                {"fileName": "b.txt", "fileSize": 3, "fileType": "text/plain", "fileUrl": "http://x/b.txt"},
                {"fileName": "a.txt", "fileSize": 1, "fileType": "", "fileUrl": "http://x/a.txt"}
            ]
        }"#;

        let outcome = UploadOutcome::from(
            serde_json::from_str::<MultipleUploadResponse>(body).unwrap(),
        );

        let names: Vec<_> = outcome.files.iter().map(|f| f.file_name.as_str()).collect();
        assert_eq!(names, ["b.txt", "a.txt"]);
        assert_eq!(outcome.files[1].file_type, "");
    }

    #[test]
    fn error_field_is_optional() {
        let body: ErrorResponse = serde_json::from_str("{}").unwrap();
        assert!(body.error.is_none());

        let body: ErrorResponse = serde_json::from_str(r#"{"error":"too large"}"#).unwrap();
        assert_eq!(body.error.as_deref(), Some("too large"));
    }

    #[test]
    fn selected_file_reads_name_size_and_mime() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pixel.png");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0, 0])
            .unwrap();

        let selected = SelectedFile::from_path(&path).unwrap();

        assert_eq!(selected.name, "pixel.png");
        assert_eq!(selected.size, 10);
        assert_eq!(selected.mime_type, "image/png");
    }

    #[test]
    fn text_formats_take_mime_from_extension() {
        let dir = tempfile::tempdir().unwrap();
        let cases = [
            ("notes.txt", "text/plain"),
            ("index.html", "text/html"),
            ("data.json", "application/json"),
            ("report.csv", "text/csv"),
        ];

        for (name, expected) in cases {
            let path = dir.path().join(name);
            fs::write(&path, "plain words").unwrap();

            let selected = SelectedFile::from_path(&path).unwrap();

            assert_eq!(selected.mime_type, expected, "{}", name);
        }
    }

    #[test]
    fn extensionless_file_falls_back_to_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snapshot");
        fs::write(&path, [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]).unwrap();

        let selected = SelectedFile::from_path(&path).unwrap();

        assert_eq!(selected.mime_type, "image/png");
    }

    #[test]
    fn unrecognised_file_has_empty_mime() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("README");
        fs::write(&path, "plain words").unwrap();

        let selected = SelectedFile::from_path(&path).unwrap();

        assert_eq!(selected.mime_type, "");
    }
}
