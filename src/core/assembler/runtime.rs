use std::path::PathBuf;

use indexmap::IndexMap;
use tracing::{debug, info};

use super::candidates::CandidateSet;
use crate::core::maven::Coordinate;

/// Dependencies confirmed on the runtime classpath, keyed by `group:name:version`.
#[derive(Debug, Default)]
pub struct RuntimeArtifacts {
    pub artifacts: IndexMap<String, Coordinate>,
    /// Classpath entries no candidate claimed (project outputs, loose jars).
    pub unattributed: Vec<PathBuf>,
}

impl RuntimeArtifacts {
    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }

    pub fn coordinates(&self) -> impl Iterator<Item = &Coordinate> {
        self.artifacts.values()
    }
}

/// Attribute each classpath file to the first candidate that materializes it.
///
/// When several configurations resolve the same file, the earliest pair in
/// candidate order wins; candidate order is deterministic so the result is
/// reproducible between runs.
pub fn filter_to_runtime_artifacts(
    candidates: &CandidateSet<'_>,
    classpath: &[PathBuf],
) -> RuntimeArtifacts {
    let mut runtime = RuntimeArtifacts::default();

    for file in classpath {
        let owner = candidates
            .values()
            .find(|pair| pair.dependency.materializes(file));

        match owner {
            Some(pair) => {
                let coordinate = &pair.dependency.coordinate;
                debug!("Found runtime artifact {} ({:?})", coordinate, file);
                runtime
                    .artifacts
                    .entry(coordinate.key())
                    .or_insert_with(|| coordinate.clone());
            }
            None => {
                info!(
                    "Found runtime artifact {:?} but it's not in the dependency list",
                    file
                );
                runtime.unattributed.push(file.clone());
            }
        }
    }

    runtime
}
