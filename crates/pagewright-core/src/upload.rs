//! Upload client for the external image endpoint.
//!
//! Wraps a [`reqwest::Client`] pointed at the site's `/api/upload` route.
//! One file selection maps to exactly one multipart POST; there is no retry
//! and no cancellation of an in-flight request.

use serde::Deserialize;

use crate::error::{CoreError, CoreResult};

/// Wire response from the upload endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct UploadResponse {
    /// Whether the endpoint stored the file
    pub success: bool,
    /// URL of the stored file, present on success
    #[serde(default)]
    pub url: Option<String>,
}

/// HTTP client for the site's upload endpoint
#[derive(Debug, Clone)]
pub struct UploadClient {
    client: reqwest::Client,
    base_url: String,
}

impl UploadClient {
    /// Create a client targeting the given base URL (e.g. `http://localhost:3000`)
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Create a client reusing an existing [`reqwest::Client`]
    /// (shares connection pools with other API callers)
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Full URL of the upload route
    pub fn endpoint(&self) -> String {
        format!("{}/api/upload", self.base_url.trim_end_matches('/'))
    }

    /// Upload one file and return the URL the endpoint stored it under.
    ///
    /// The file goes up as the single multipart field named `file`, raw and
    /// unmodified. A URL is returned only for `{"success": true}` with a
    /// non-empty `url`; every other answer is an error:
    ///
    /// - transport failures and malformed bodies map to [`CoreError::Transport`]
    /// - `success: false`, or success without a usable URL, maps to
    ///   [`CoreError::UploadRejected`]
    pub async fn upload(&self, file_name: &str, bytes: Vec<u8>) -> CoreResult<String> {
        let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name.to_string());
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self
            .client
            .post(self.endpoint())
            .multipart(form)
            .send()
            .await?;

        let parsed: UploadResponse = response.json().await?;
        match parsed {
            UploadResponse {
                success: true,
                url: Some(url),
            } if !url.is_empty() => Ok(url),
            UploadResponse { success: true, .. } => Err(CoreError::UploadRejected(
                "endpoint reported success without a url".to_string(),
            )),
            UploadResponse { success: false, .. } => Err(CoreError::UploadRejected(
                "endpoint rejected the file".to_string(),
            )),
        }
    }
}
