//! Local project-type detection.
//!
//! Only decides which extra artifacts to queue; publishing itself never
//! inspects the project layout.

use std::path::PathBuf;

use nexup_util::fs::any_file_exists;

/// Probes a working directory for well-known project descriptor files.
#[derive(Debug, Clone)]
pub struct ProjectStructure {
    directory: PathBuf,
}

impl ProjectStructure {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// `true` if the directory contains typical files for MTA projects
    /// (`mta.yaml`, `mta.yml`).
    pub fn uses_mta(&self) -> bool {
        any_file_exists(&self.directory, &["mta.yaml", "mta.yml"])
    }

    /// `true` if the directory contains a `pom.xml`.
    pub fn uses_maven(&self) -> bool {
        any_file_exists(&self.directory, &["pom.xml"])
    }

    /// `true` if the directory contains a `package.json`.
    pub fn uses_npm(&self) -> bool {
        any_file_exists(&self.directory, &["package.json"])
    }
}
