// ─── Build Snapshot ───
// The build host's view of its projects, exported as JSON.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info};

use crate::core::error::{AssemblerError, AssemblerResult};
use crate::core::maven::{Coordinate, Repository};

/// Top-level snapshot document.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildSnapshot {
    pub root_project: Project,
    /// The module the manifest is assembled for. Absent means the root.
    #[serde(default)]
    pub project: Option<Project>,
    /// Repositories in declaration order.
    #[serde(default)]
    pub repositories: Vec<Repository>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub path: String,
    /// Gradle-style project properties. Values keep their JSON type; only
    /// string values are visible through [`BuildSnapshot::property`].
    #[serde(default)]
    pub properties: HashMap<String, serde_json::Value>,
    #[serde(default)]
    pub configurations: Vec<Configuration>,
    #[serde(default)]
    pub source_sets: HashMap<String, SourceSet>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    pub name: String,
    #[serde(default = "default_true")]
    pub can_be_resolved: bool,
    #[serde(default)]
    pub extends_from: Vec<String>,
    #[serde(default)]
    pub dependencies: Vec<DeclaredDependency>,
    /// Set by the exporter when the host could not resolve this configuration.
    #[serde(default)]
    pub resolution_failure: Option<String>,
}

/// A dependency declared on a configuration, with the files it resolved to
/// (its own artifact plus transitives).
#[derive(Debug, Clone, Deserialize)]
pub struct DeclaredDependency {
    pub coordinate: Coordinate,
    #[serde(default)]
    pub files: Vec<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceSet {
    #[serde(default)]
    pub runtime_classpath: Vec<PathBuf>,
}

fn default_true() -> bool {
    true
}

impl BuildSnapshot {
    /// Read and parse a snapshot file.
    pub async fn load(path: &Path) -> AssemblerResult<Self> {
        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| AssemblerError::io(path, e))?;
        let snapshot: BuildSnapshot = serde_json::from_str(&raw)?;
        info!(
            "Loaded build snapshot for {} ({} repositories)",
            snapshot.current_project().path,
            snapshot.repositories.len()
        );
        Ok(snapshot)
    }

    pub fn current_project(&self) -> &Project {
        self.project.as_ref().unwrap_or(&self.root_project)
    }

    /// Look up a project property on the current project, falling back to the
    /// root the way the build host's property lookup does. Non-string values
    /// read as unset.
    pub fn property(&self, name: &str) -> Option<&str> {
        self.current_project()
            .properties
            .get(name)
            .or_else(|| self.root_project.properties.get(name))
            .and_then(serde_json::Value::as_str)
    }
}

impl Project {
    pub fn configuration(&self, name: &str) -> Option<&Configuration> {
        self.configurations.iter().find(|c| c.name == name)
    }

    /// Declared dependencies of `configuration` plus everything inherited via
    /// `extendsFrom`, depth first, each configuration visited once.
    pub fn all_dependencies<'a>(
        &'a self,
        configuration: &'a Configuration,
    ) -> Vec<&'a DeclaredDependency> {
        let mut visited = HashSet::new();
        let mut collected = Vec::new();
        self.collect_dependencies(configuration, &mut visited, &mut collected);
        collected
    }

    fn collect_dependencies<'a>(
        &'a self,
        configuration: &'a Configuration,
        visited: &mut HashSet<&'a str>,
        collected: &mut Vec<&'a DeclaredDependency>,
    ) {
        if !visited.insert(configuration.name.as_str()) {
            return;
        }

        collected.extend(configuration.dependencies.iter());

        for parent in &configuration.extends_from {
            match self.configuration(parent) {
                Some(parent) => self.collect_dependencies(parent, visited, collected),
                None => debug!(
                    "Configuration {} extends unknown configuration {} in {}",
                    configuration.name, parent, self.path
                ),
            }
        }
    }

    /// Runtime classpath of the named source set.
    pub fn runtime_classpath(&self, source_set: &str) -> AssemblerResult<&[PathBuf]> {
        self.source_sets
            .get(source_set)
            .map(|s| s.runtime_classpath.as_slice())
            .ok_or_else(|| AssemblerError::UnknownSourceSet {
                project: self.path.clone(),
                source_set: source_set.to_string(),
            })
    }
}

impl Configuration {
    /// Force resolution of this configuration. A failure recorded by the
    /// host aborts the whole run.
    pub fn resolve(&self, project: &str) -> AssemblerResult<()> {
        match &self.resolution_failure {
            Some(reason) => Err(AssemblerError::Resolution {
                project: project.to_string(),
                configuration: self.name.clone(),
                reason: reason.clone(),
            }),
            None => Ok(()),
        }
    }
}

impl DeclaredDependency {
    pub fn materializes(&self, file: &Path) -> bool {
        self.files.iter().any(|f| f == file)
    }
}
