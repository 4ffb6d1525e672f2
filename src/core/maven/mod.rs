mod artifact;
mod coordinate;
mod probe;
mod repository;

pub use artifact::MavenArtifact;
pub use coordinate::Coordinate;
pub use probe::{probe_repository, resolve_artifact_url, ArtifactHost, ProbeOutcome};
pub use repository::{Repository, RepositoryBase, RepositoryKind, SkipReason};

#[cfg(test)]
pub(crate) use probe::tests::StubHost;
