//! HTTP uploads to the Nexus repository manager.
//!
//! Each transfer is a single PUT. A 400/409 rejection is taken to mean the
//! artifact already exists; the existing one is deleted and the PUT retried
//! exactly once.

use std::path::PathBuf;
use std::time::Duration;

use reqwest::{Body, Client, StatusCode};
use tokio_util::io::ReaderStream;

use nexup_util::errors::{NexupError, NexupResult};

use crate::auth;
use crate::repository::NexusRepository;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Build a shared reqwest client for Nexus uploads.
pub fn build_client() -> NexupResult<Client> {
    Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .user_agent("nexup/0.2")
        .build()
        .map_err(|e| {
            NexupError::Transport {
                message: format!("Failed to create HTTP client: {e}"),
            }
            .into()
        })
}

/// A single successful HTTP transfer.
#[derive(Debug, Clone)]
pub struct UploadOutcome {
    pub url: String,
    pub status: StatusCode,
}

/// The body of an upload: a local file streamed from disk, or an in-memory
/// string (the checksum sidecar hex digest).
///
/// Re-openable, so the conflict retry can send the body a second time
/// without buffering the artifact in memory.
#[derive(Debug, Clone)]
pub enum UploadSource {
    File(PathBuf),
    Text(String),
}

impl UploadSource {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        UploadSource::File(path.into())
    }

    pub fn text(content: impl Into<String>) -> Self {
        UploadSource::Text(content.into())
    }

    async fn body(&self) -> Result<Body, NexupError> {
        match self {
            UploadSource::File(path) => {
                let file = tokio::fs::File::open(path).await?;
                Ok(Body::wrap_stream(ReaderStream::new(file)))
            }
            UploadSource::Text(content) => Ok(Body::from(content.clone())),
        }
    }
}

/// PUT `source` to `url`, applying authentication when configured.
///
/// A 2xx response succeeds. On a conflict rejection the existing artifact
/// is deleted and the PUT retried once; if the delete or the retried PUT
/// fails too, the original rejection is what the caller gets, with the
/// follow-up failure logged.
pub async fn upload(
    client: &Client,
    repo: &NexusRepository,
    url: &str,
    source: &UploadSource,
) -> NexupResult<UploadOutcome> {
    let status = send_put(client, repo, url, source).await?;
    if status.is_success() {
        tracing::info!("Uploaded {url}, response: {status}");
        return Ok(UploadOutcome {
            url: url.to_string(),
            status,
        });
    }

    let original = NexupError::Remote {
        url: url.to_string(),
        status: status.as_u16(),
    };
    if !is_conflict(status) {
        return Err(original.into());
    }

    tracing::info!("Artifact already exists at {url}, deleting and retrying");
    match send_delete(client, repo, url).await {
        Ok(delete_status) if delete_status.is_success() => {}
        Ok(delete_status) => {
            tracing::warn!("Failed to delete existing artifact at {url}: HTTP {delete_status}");
            return Err(original.into());
        }
        Err(e) => {
            tracing::warn!("Failed to delete existing artifact at {url}: {e}");
            return Err(original.into());
        }
    }

    match send_put(client, repo, url, source).await {
        Ok(retry_status) if retry_status.is_success() => {
            tracing::info!("Uploaded {url} after delete, response: {retry_status}");
            Ok(UploadOutcome {
                url: url.to_string(),
                status: retry_status,
            })
        }
        Ok(retry_status) => {
            tracing::warn!("Retried upload to {url} still rejected: HTTP {retry_status}");
            Err(original.into())
        }
        Err(e) => {
            tracing::warn!("Retried upload to {url} failed: {e}");
            Err(original.into())
        }
    }
}

async fn send_put(
    client: &Client,
    repo: &NexusRepository,
    url: &str,
    source: &UploadSource,
) -> NexupResult<StatusCode> {
    let body = source.body().await?;
    let mut req = client.put(url).body(body);
    req = auth::apply_auth(req, repo);
    let resp = req.send().await.map_err(|e| NexupError::Transport {
        message: format!("PUT {url} failed: {e}"),
    })?;
    Ok(resp.status())
}

async fn send_delete(
    client: &Client,
    repo: &NexusRepository,
    url: &str,
) -> NexupResult<StatusCode> {
    let mut req = client.delete(url);
    req = auth::apply_auth(req, repo);
    let resp = req.send().await.map_err(|e| NexupError::Transport {
        message: format!("DELETE {url} failed: {e}"),
    })?;
    Ok(resp.status())
}

/// Whether a rejection status signals that the artifact already exists.
///
/// Nexus 2 release repositories answer 400 on re-deploy; Nexus 3 answers
/// 400 or 409 depending on the repository write policy.
fn is_conflict(status: StatusCode) -> bool {
    matches!(status, StatusCode::BAD_REQUEST | StatusCode::CONFLICT)
}
