//! CLI argument definitions for nexup.
//!
//! Uses `clap` derive macros. Every flag has a `NEXUP_*` environment
//! variable default so the tool drops into pipeline steps without long
//! argument lists.

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "nexup",
    version,
    about = "Publish build artifacts to a Nexus Repository Manager",
    long_about = "nexup uploads build artifacts (Maven, npm, or MTA packaging output) to a \
                  Sonatype Nexus Repository Manager, attaching MD5 and SHA-1 checksum sidecar \
                  files and resolving the URL layout for the target Nexus major version."
)]
pub struct Cli {
    /// The Nexus Repository Manager version: nexus2 or nexus3
    #[arg(long = "nexus-version", env = "NEXUP_NEXUS_VERSION", default_value = "nexus3")]
    pub nexus_version: String,

    /// Base URL of the Nexus instance (the scheme is ignored; only http is supported)
    #[arg(long, env = "NEXUP_URL")]
    pub url: String,

    /// Name of the Nexus repository to publish into
    #[arg(long, env = "NEXUP_REPOSITORY")]
    pub repository: String,

    /// Group identifier under which the artifacts are published
    #[arg(long = "group-id", env = "NEXUP_GROUP_ID")]
    pub group_id: String,

    /// Version under which the artifacts are published
    #[arg(long = "artifact-version", env = "NEXUP_ARTIFACT_VERSION")]
    pub artifact_version: String,

    /// User for basic authentication
    #[arg(long, env = "NEXUP_USER")]
    pub user: Option<String>,

    /// Password for basic authentication
    #[arg(long, env = "NEXUP_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// JSON list of artifacts to publish, entries of {"artifactId", "classifier", "type", "file"}
    #[arg(long, env = "NEXUP_ARTIFACTS", default_value = "[]")]
    pub artifacts: String,

    /// Additional classifiers to deploy (accepted for compatibility, not applied to uploads)
    #[arg(long = "additional-classifiers", env = "NEXUP_ADDITIONAL_CLASSIFIERS")]
    pub additional_classifiers: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

pub fn parse() -> Cli {
    Cli::parse()
}
