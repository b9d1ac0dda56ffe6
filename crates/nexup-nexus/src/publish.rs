//! Publishing a single artifact: checksum sidecars first, then the main file.

use std::path::Path;

use reqwest::Client;

use nexup_util::errors::NexupResult;

use crate::artifact::ArtifactDescription;
use crate::checksum::{self, ChecksumAlgorithm};
use crate::repository::NexusRepository;
use crate::upload::{self, UploadOutcome, UploadSource};

/// Upload one artifact: `.md5` and `.sha1` sidecars, then the main file.
///
/// Sidecars go first so a consumer can detect a partial upload before the
/// main artifact becomes visible. Returns the outcome of every transfer,
/// or the first error. The checksum pass and the main upload each open the
/// local file independently.
pub async fn publish_artifact(
    client: &Client,
    repo: &NexusRepository,
    artifact: &ArtifactDescription,
) -> NexupResult<Vec<UploadOutcome>> {
    let path = Path::new(&artifact.file);
    let url = repo.artifact_url(artifact);
    tracing::info!("Uploading {} to {url}", artifact.file);

    let mut outcomes = Vec::with_capacity(3);
    for algorithm in [ChecksumAlgorithm::Md5, ChecksumAlgorithm::Sha1] {
        let digest = checksum::checksum_file(path, algorithm)?;
        let sidecar_url = format!("{url}.{}", algorithm.extension());
        let outcome = upload::upload(client, repo, &sidecar_url, &UploadSource::text(digest)).await?;
        outcomes.push(outcome);
    }

    let outcome = upload::upload(client, repo, &url, &UploadSource::file(path)).await?;
    outcomes.push(outcome);
    Ok(outcomes)
}
