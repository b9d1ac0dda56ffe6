//! Handler for the nexup publish run.

use miette::Result;
use nexup_nexus::repository::{NexusRepository, NexusVersion};
use nexup_util::errors::NexupError;

use crate::cli::Cli;

pub async fn exec(cli: Cli) -> Result<()> {
    // A bad version value must fail here, before any file or network I/O.
    let version: NexusVersion = cli.nexus_version.parse()?;

    if cli.additional_classifiers.is_some() {
        tracing::warn!("--additional-classifiers is accepted but not applied to uploads");
    }

    let repo = NexusRepository {
        base_url: cli.url,
        version,
        repository: cli.repository,
        group_id: cli.group_id,
        artifact_version: cli.artifact_version,
        username: cli.user,
        password: cli.password,
    };

    let project_root = std::env::current_dir().map_err(NexupError::Io)?;
    nexup_ops::ops_publish::publish(&project_root, &repo, &cli.artifacts, cli.verbose).await
}
