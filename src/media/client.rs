use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::media::config::MediaHostConfig;
use crate::media::model::{AssetRecord, AssetUploadRequest, DeletionOutcome};
use crate::utils::error::{HubError, Result};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Deserialize)]
struct UploadResponse {
    public_id: String,
    url: Option<String>,
    secure_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DestroyResponse {
    result: String,
}

#[derive(Debug, Deserialize)]
struct HostErrorBody {
    error: HostErrorMessage,
}

#[derive(Debug, Deserialize)]
struct HostErrorMessage {
    message: String,
}

/// Client for the remote media host: uploads local images into durable remote
/// storage and deletes them by public id.
///
/// Stateless per call; each operation is a single outbound request with no
/// internal retry. Retry and backoff policy belong to the caller.
pub struct MediaClient {
    http: Client,
    config: MediaHostConfig,
}

impl MediaClient {
    pub fn new(config: MediaHostConfig) -> Result<Self> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { http, config })
    }

    pub fn from_env() -> Result<Self> {
        Self::new(MediaHostConfig::from_env()?)
    }

    /// Uploads the file named by the request into its folder at the host.
    ///
    /// On success the returned `AssetRecord.public_id` must be persisted by
    /// the caller; it is the only handle that can delete the asset later.
    pub async fn upload(&self, request: &AssetUploadRequest) -> Result<AssetRecord> {
        let file_name = request
            .local_path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| HubError::ConfigError {
                message: format!("invalid upload path: {}", request.local_path.display()),
            })?
            .to_string();

        // Read before touching the network so an unreadable file never
        // produces a half-formed remote request.
        let bytes = tokio::fs::read(&request.local_path).await?;

        tracing::debug!(
            "Uploading {} ({} bytes) to folder '{}'",
            file_name,
            bytes.len(),
            request.folder
        );

        let form = Form::new()
            .part("file", Part::bytes(bytes).file_name(file_name))
            .text("folder", request.folder.clone())
            .text(
                "use_filename",
                request.overwrite_policy.use_filename().to_string(),
            )
            .text(
                "unique_filename",
                request.overwrite_policy.unique_filename().to_string(),
            );

        let response = self
            .http
            .post(self.config.endpoint_url("upload"))
            .basic_auth(self.config.api_key(), Some(self.config.api_secret()))
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = host_diagnostic(response).await;
            tracing::warn!("Upload rejected by media host ({}): {}", status, message);
            return Err(HubError::UploadFailed { message });
        }

        let body: UploadResponse = response.json().await?;
        let url = body
            .secure_url
            .or(body.url)
            .ok_or_else(|| HubError::UploadFailed {
                message: "host response is missing the asset url".to_string(),
            })?;

        tracing::info!("Stored asset '{}' at {}", body.public_id, url);
        Ok(AssetRecord {
            public_id: body.public_id,
            url,
        })
    }

    /// Permanently removes the asset with the given public id.
    ///
    /// A host-reported "not found" is a successful idempotent completion, so
    /// callers can retry deletes safely. Only transport or host errors
    /// surface as failures.
    pub async fn delete(&self, public_id: &str) -> Result<DeletionOutcome> {
        let response = self
            .http
            .post(self.config.endpoint_url("destroy"))
            .basic_auth(self.config.api_key(), Some(self.config.api_secret()))
            .form(&[("public_id", public_id)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = host_diagnostic(response).await;
            tracing::warn!("Delete of '{}' failed at media host ({}): {}", public_id, status, message);
            return Err(HubError::DeletionFailed { message });
        }

        let body: DestroyResponse = response.json().await?;
        match body.result.as_str() {
            "ok" => {
                tracing::info!("Deleted asset '{}'", public_id);
                Ok(DeletionOutcome::Deleted)
            }
            "not found" => {
                tracing::debug!("Asset '{}' was already absent", public_id);
                Ok(DeletionOutcome::NotFound)
            }
            other => Err(HubError::DeletionFailed {
                message: format!("unexpected host result: {}", other),
            }),
        }
    }
}

/// Extracts the host's diagnostic message from an error response, falling
/// back to the raw body and then the status line.
async fn host_diagnostic(response: reqwest::Response) -> String {
    let status = response.status();
    let text = response.text().await.unwrap_or_default();

    match serde_json::from_str::<HostErrorBody>(&text) {
        Ok(parsed) => parsed.error.message,
        Err(_) if !text.trim().is_empty() => text,
        Err(_) => status.to_string(),
    }
}
