/// Endpoint used when no base URL was supplied at build time.
pub const DEFAULT_API_URL: &str = "http://13.201.127.30:9092";

/// Upload endpoint configuration, fixed when the binary is compiled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    api_url: String,
}

impl Config {
    pub fn with_api_url(api_url: impl Into<String>) -> Self {
        let api_url = api_url.into();
        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn single_upload_url(&self) -> String {
        format!("{}/upload", self.api_url)
    }

    pub fn multiple_upload_url(&self) -> String {
        format!("{}/upload-multiple", self.api_url)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::with_api_url(option_env!("S3_UPLOADER_API_URL").unwrap_or(DEFAULT_API_URL))
    }
}
