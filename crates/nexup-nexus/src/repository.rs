//! Nexus repository abstraction: version handling, URL layout, credentials.

use std::str::FromStr;

use nexup_util::errors::NexupError;

use crate::artifact::ArtifactDescription;

/// The major version of the target Nexus Repository Manager.
///
/// The two versions use different URL layouts for hosted repositories;
/// anything else is rejected at configuration time, before any network
/// activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NexusVersion {
    Nexus2,
    Nexus3,
}

impl NexusVersion {
    /// Version-specific path prefix between the base URL and the repository
    /// name.
    pub fn path_prefix(&self) -> &'static str {
        match self {
            NexusVersion::Nexus2 => "/content/repositories/",
            NexusVersion::Nexus3 => "/repository/",
        }
    }
}

impl FromStr for NexusVersion {
    type Err = NexupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "nexus2" => Ok(NexusVersion::Nexus2),
            "nexus3" => Ok(NexusVersion::Nexus3),
            other => Err(NexupError::Config {
                message: format!("Unsupported Nexus version '{other}' (expected nexus2 or nexus3)"),
            }),
        }
    }
}

/// A configured Nexus repository target with optional credentials.
///
/// Constructed once per publication run and read-only thereafter.
#[derive(Debug, Clone)]
pub struct NexusRepository {
    pub base_url: String,
    pub version: NexusVersion,
    pub repository: String,
    pub group_id: String,
    pub artifact_version: String,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl NexusRepository {
    /// Group id as a path segment: `com.example.app` becomes `com/example/app`.
    pub fn group_path(&self) -> String {
        self.group_id.replace('.', "/")
    }

    /// Remote file name: `{id}-{version}[-{classifier}].{type}`, with the
    /// classifier segment only when non-empty.
    pub fn file_name(&self, artifact: &ArtifactDescription) -> String {
        if artifact.has_classifier() {
            format!(
                "{}-{}-{}.{}",
                artifact.artifact_id, self.artifact_version, artifact.classifier, artifact.kind
            )
        } else {
            format!(
                "{}-{}.{}",
                artifact.artifact_id, self.artifact_version, artifact.kind
            )
        }
    }

    /// Full remote URL for an artifact. Deterministic for identical input.
    pub fn artifact_url(&self, artifact: &ArtifactDescription) -> String {
        let raw = format!(
            "{}{}{}/{}/{}/{}/{}",
            self.base_url,
            self.version.path_prefix(),
            self.repository,
            self.group_path(),
            artifact.artifact_id,
            self.artifact_version,
            self.file_name(artifact)
        );
        force_http(&raw)
    }

    /// Whether this repository has authentication configured.
    pub fn has_auth(&self) -> bool {
        self.username.is_some() || self.password.is_some()
    }
}

/// Normalize a concatenated URL for the target Nexus: strip any
/// caller-supplied scheme, collapse doubled `/` left over from
/// concatenation, and force plain `http://`.
///
/// The forced scheme is a constraint of the target deployment; a TLS-only
/// deployment needs to change this policy here, in one place.
pub fn force_http(url: &str) -> String {
    let without_scheme = match url.find("://") {
        Some(idx) => &url[idx + 3..],
        None => url,
    };
    let mut path = without_scheme.to_string();
    while path.contains("//") {
        path = path.replace("//", "/");
    }
    format!("http://{path}")
}
