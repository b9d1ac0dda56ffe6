//! Nexus repository manager protocol: artifact descriptors, URL layout
//! resolution, checksum sidecar generation, authentication, and HTTP
//! uploads.

pub mod artifact;
pub mod auth;
pub mod checksum;
pub mod publish;
pub mod repository;
pub mod upload;
