// ─── Artifact Probe ───
// Finds the first repository that actually hosts a dependency's jar.

use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use tracing::debug;

use super::coordinate::Coordinate;
use super::repository::{Repository, RepositoryBase, SkipReason};
use crate::core::error::{AssemblerError, AssemblerResult};

/// Anything that can answer a HEAD request with a status code.
#[async_trait]
pub trait ArtifactHost: Send + Sync {
    async fn head_status(&self, url: &Url) -> AssemblerResult<u16>;
}

#[async_trait]
impl ArtifactHost for reqwest::Client {
    async fn head_status(&self, url: &Url) -> AssemblerResult<u16> {
        let response = self.head(url.clone()).send().await?;
        Ok(response.status().as_u16())
    }
}

/// What happened when one repository was asked for one artifact.
#[derive(Debug)]
pub enum ProbeOutcome {
    Found(Url),
    Missing { url: Url, status: u16 },
    Failed { url: String, error: AssemblerError },
    Skipped(SkipReason),
}

/// Probe a single repository for the jar of `coordinate`.
pub async fn probe_repository<H: ArtifactHost + ?Sized>(
    coordinate: &Coordinate,
    repository: &Repository,
    host: &H,
) -> ProbeOutcome {
    let Some(artifact) = coordinate.artifact() else {
        return ProbeOutcome::Skipped(SkipReason::NoUrl);
    };

    let base = match repository.http_base() {
        RepositoryBase::Http(base) => base,
        RepositoryBase::Skipped(reason) => return ProbeOutcome::Skipped(reason),
        RepositoryBase::Invalid { url, reason } => {
            return ProbeOutcome::Failed {
                url: url.clone(),
                error: AssemblerError::InvalidRepositoryUrl { url, reason },
            }
        }
    };

    let jar_url = artifact.url(base.as_str());
    let url = match Url::parse(&jar_url) {
        Ok(url) => url,
        Err(e) => {
            return ProbeOutcome::Failed {
                url: jar_url.clone(),
                error: AssemblerError::InvalidRepositoryUrl {
                    url: jar_url,
                    reason: e.to_string(),
                },
            }
        }
    };

    match host.head_status(&url).await {
        Ok(status) if status == StatusCode::OK.as_u16() => ProbeOutcome::Found(url),
        Ok(status) => ProbeOutcome::Missing { url, status },
        Err(error) => ProbeOutcome::Failed {
            url: url.to_string(),
            error,
        },
    }
}

/// Resolve the download URL of `coordinate` by probing `repositories` in
/// declaration order. The first HTTP 200 wins and later repositories are
/// never contacted. Every other outcome moves on to the next repository.
pub async fn resolve_artifact_url<H: ArtifactHost + ?Sized>(
    coordinate: &Coordinate,
    repositories: &[Repository],
    host: &H,
) -> Option<Url> {
    if coordinate.artifact().is_none() {
        debug!("{} has no Maven layout, not probing", coordinate);
        return None;
    }

    for repository in repositories {
        match probe_repository(coordinate, repository, host).await {
            ProbeOutcome::Found(url) => {
                debug!("Found {} in {}", coordinate, repository.label());
                return Some(url);
            }
            ProbeOutcome::Missing { url, status } => {
                debug!("{} answered HTTP {} for {}", repository.label(), status, url);
            }
            ProbeOutcome::Failed { url, error } => {
                debug!("Probe of {} failed: {}", url, error);
            }
            ProbeOutcome::Skipped(reason) => {
                debug!("Skipping repository {}: {}", repository.label(), reason);
            }
        }
    }

    debug!("No repository hosts {}", coordinate);
    None
}
