//! Artifact descriptors and artifact-list parsing.
//!
//! The artifact list arrives as a single JSON string, one entry per file to
//! publish. Field names match the wire format consumed from the pipeline
//! configuration (`artifactId`, `classifier`, `type`, `file`).

use std::path::Path;

use serde::Deserialize;

use nexup_util::errors::{NexupError, NexupResult};

/// One file to publish: identifier, optional classifier, packaging type,
/// and the local path to the file.
#[derive(Debug, Clone, Deserialize)]
pub struct ArtifactDescription {
    #[serde(rename = "artifactId")]
    pub artifact_id: String,
    #[serde(default)]
    pub classifier: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub file: String,
}

impl ArtifactDescription {
    /// Derive a descriptor from a plain file path: the stem becomes the
    /// artifact id and the extension the type. Used for the fixed MTA
    /// pre-step files, which have no configured entry.
    pub fn from_file_name(path: &Path) -> Self {
        let artifact_id = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let kind = path
            .extension()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            artifact_id,
            classifier: String::new(),
            kind,
            file: path.to_string_lossy().into_owned(),
        }
    }

    /// Whether this artifact carries a non-empty classifier.
    pub fn has_classifier(&self) -> bool {
        !self.classifier.is_empty()
    }

    fn validate(&self) -> Result<(), NexupError> {
        let required = [
            ("artifactId", &self.artifact_id),
            ("type", &self.kind),
            ("file", &self.file),
        ];
        for (field, value) in required {
            if value.is_empty() {
                return Err(NexupError::Config {
                    message: format!("Artifact entry is missing required field '{field}'"),
                });
            }
        }
        Ok(())
    }
}

/// Parse the configured artifact list, preserving input order.
///
/// Malformed JSON or an entry with an empty `artifactId`, `type`, or `file`
/// is a fatal configuration error; no partial list is returned.
pub fn parse_artifact_list(json: &str) -> NexupResult<Vec<ArtifactDescription>> {
    let artifacts: Vec<ArtifactDescription> =
        serde_json::from_str(json).map_err(|e| NexupError::Config {
            message: format!("Failed to parse artifact list JSON: {e}"),
        })?;
    for artifact in &artifacts {
        artifact.validate()?;
    }
    Ok(artifacts)
}
