use indexmap::IndexMap;
use tracing::debug;

use crate::core::error::AssemblerResult;
use crate::core::project::{Configuration, DeclaredDependency, Project};
use crate::core::settings::AssemblerSettings;

/// A dependency as reached through one configuration of one project.
#[derive(Debug, Clone, Copy)]
pub struct ConfigurationDependency<'a> {
    pub project: &'a str,
    pub configuration: &'a Configuration,
    pub dependency: &'a DeclaredDependency,
}

/// Identity of a pair: `(project path, configuration name, group:name:version)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PairKey {
    pub project: String,
    pub configuration: String,
    pub dependency: String,
}

/// Candidate pairs in discovery order: root project first, configurations and
/// dependencies in declaration order.
pub type CandidateSet<'a> = IndexMap<PairKey, ConfigurationDependency<'a>>;

impl<'a> ConfigurationDependency<'a> {
    pub fn key(&self) -> PairKey {
        PairKey {
            project: self.project.to_string(),
            configuration: self.configuration.name.clone(),
            dependency: self.dependency.coordinate.key(),
        }
    }
}

/// Gather every (configuration, dependency) pair of the root and current
/// projects, skipping internal and non-resolvable configurations. Each
/// consulted configuration is resolved first; a failure aborts collection.
pub fn collect_candidate_dependencies<'a>(
    root: &'a Project,
    current: &'a Project,
    settings: &AssemblerSettings,
) -> AssemblerResult<CandidateSet<'a>> {
    let mut scopes = vec![root];
    if current.path != root.path {
        scopes.push(current);
    }

    let mut candidates = CandidateSet::new();

    for project in scopes {
        for configuration in &project.configurations {
            if settings.is_internal(&configuration.name) || !configuration.can_be_resolved {
                continue;
            }

            configuration.resolve(&project.path)?;

            for dependency in project.all_dependencies(configuration) {
                let pair = ConfigurationDependency {
                    project: &project.path,
                    configuration,
                    dependency,
                };
                candidates.entry(pair.key()).or_insert(pair);
            }
        }
        debug!("{} candidate pairs after {}", candidates.len(), project.path);
    }

    Ok(candidates)
}
