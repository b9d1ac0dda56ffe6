//! Operation: publish build artifacts to a Nexus repository manager.

use std::path::Path;

use nexup_nexus::artifact::{self, ArtifactDescription};
use nexup_nexus::publish::publish_artifact;
use nexup_nexus::repository::NexusRepository;
use nexup_nexus::upload;
use nexup_util::errors::NexupResult;
use nexup_util::fs::file_exists;
use nexup_util::progress::{spinner, status, status_info, status_warn};

use crate::project::ProjectStructure;

/// Fixed archive name produced by the MTA packaging step.
pub const MTA_ARCHIVE: &str = "foo.mtar";
/// The MTA descriptor itself, published alongside the archive.
pub const MTA_DESCRIPTOR: &str = "mta.yaml";

/// Publish every queued artifact to `repo`, strictly in order, aborting the
/// run on the first failure. Later artifacts are never attempted after a
/// failure.
pub async fn publish(
    project_root: &Path,
    repo: &NexusRepository,
    artifacts_json: &str,
    verbose: bool,
) -> NexupResult<()> {
    let queue = build_queue(project_root, artifacts_json)?;
    if queue.is_empty() {
        status_info("Publishing", "nothing to upload");
        return Ok(());
    }

    let client = upload::build_client()?;
    let mut uploaded = 0usize;
    for item in &queue {
        let sp = spinner(&format!("Uploading {}...", repo.file_name(item)));
        let outcomes = publish_artifact(&client, repo, item).await?;
        sp.finish_and_clear();
        if verbose {
            status("Uploaded", &format!("{} as {}", item.file, repo.file_name(item)));
        }
        uploaded += outcomes.len();
    }

    status(
        "Published",
        &format!(
            "{} artifact(s), {uploaded} files to {} repository '{}'",
            queue.len(),
            repo.base_url,
            repo.repository
        ),
    );
    Ok(())
}

/// Assemble the upload queue for one run.
///
/// When the project carries an `mta.yaml`, the packaged archive and the
/// descriptor are queued ahead of the configured list; the configured list
/// keeps its input order. The pre-step needs the canonical descriptor name,
/// so an `mta.yml`-only project gets no pre-step uploads.
pub fn build_queue(
    project_root: &Path,
    artifacts_json: &str,
) -> NexupResult<Vec<ArtifactDescription>> {
    let mut queue = Vec::new();

    if file_exists(&project_root.join(MTA_DESCRIPTOR)) {
        tracing::info!("MTA project detected, queueing packaged archive and descriptor");
        for name in [MTA_ARCHIVE, MTA_DESCRIPTOR] {
            queue.push(ArtifactDescription::from_file_name(&project_root.join(name)));
        }
    } else if ProjectStructure::new(project_root).uses_mta() {
        status_warn(
            "Skipping",
            "MTA descriptor is mta.yml; pre-step uploads expect mta.yaml",
        );
    }

    queue.extend(artifact::parse_artifact_list(artifacts_json)?);
    Ok(queue)
}
