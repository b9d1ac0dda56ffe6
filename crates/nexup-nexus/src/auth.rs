//! Upload authentication from the configured repository credentials.
//!
//! Credentials come in as plain `--user`/`--password` flags (or their
//! `NEXUP_*` environment defaults) and are attached to every request
//! against the repository manager.

use reqwest::RequestBuilder;

use crate::repository::NexusRepository;

/// Apply authentication to a request if the repository has credentials.
pub fn apply_auth(request: RequestBuilder, repo: &NexusRepository) -> RequestBuilder {
    match (&repo.username, &repo.password) {
        (Some(user), Some(pass)) => request.basic_auth(user, Some(pass)),
        (Some(user), None) => request.basic_auth(user, None::<&str>),
        (None, Some(token)) => request.bearer_auth(token),
        (None, None) => request,
    }
}
