// ─── Manifest Assembler ───
// resolve → attribute classpath → probe repositories → manifest → file.

pub mod candidates;
pub mod runtime;

pub use candidates::{collect_candidate_dependencies, CandidateSet, ConfigurationDependency, PairKey};
pub use runtime::{filter_to_runtime_artifacts, RuntimeArtifacts};

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, TimeZone};
use tracing::{error, info};

use crate::core::error::{AssemblerError, AssemblerResult};
use crate::core::manifest::{assemble_manifest, write_manifest, ManifestLibrary, TweakerManifest};
use crate::core::maven::{resolve_artifact_url, ArtifactHost, Repository};
use crate::core::project::BuildSnapshot;
use crate::core::settings::AssemblerSettings;

/// Summary of one run, for the caller's log line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssemblyReport {
    pub output: PathBuf,
    pub candidates: usize,
    pub runtime_artifacts: usize,
    pub libraries: usize,
    pub libraries_with_url: usize,
    pub dropped_without_group: usize,
    pub unattributed_files: usize,
}

/// Library list after probing, before it is placed in a manifest.
#[derive(Debug, Default)]
pub struct LibraryResolution {
    pub libraries: Vec<ManifestLibrary>,
    pub dropped_without_group: usize,
}

pub struct ManifestAssembler<H> {
    settings: AssemblerSettings,
    host: H,
}

impl<H: ArtifactHost> ManifestAssembler<H> {
    pub fn new(settings: AssemblerSettings, host: H) -> Self {
        Self { settings, host }
    }

    /// The explicit version if configured, else the project property.
    pub fn minecraft_version(&self, snapshot: &BuildSnapshot) -> AssemblerResult<String> {
        if let Some(version) = &self.settings.minecraft_version {
            return Ok(version.clone());
        }
        snapshot
            .property(&self.settings.version_property)
            .map(str::to_string)
            .ok_or_else(|| AssemblerError::MissingProperty(self.settings.version_property.clone()))
    }

    /// Turn runtime artifacts into manifest libraries, sorted by dependency
    /// name. Group-less coordinates are dropped; the rest get a `url` when a
    /// repository hosts their jar.
    pub async fn resolve_libraries(
        &self,
        runtime: &RuntimeArtifacts,
        repositories: &[Repository],
    ) -> LibraryResolution {
        let mut coordinates: Vec<_> = runtime.coordinates().collect();
        coordinates.sort_by(|a, b| a.name.cmp(&b.name));

        let mut resolution = LibraryResolution::default();

        for coordinate in coordinates {
            if coordinate.group.is_none() {
                info!("Group is null for {}", coordinate.name);
                resolution.dropped_without_group += 1;
                continue;
            }

            let url = resolve_artifact_url(coordinate, repositories, &self.host).await;
            resolution.libraries.push(ManifestLibrary {
                name: coordinate.key(),
                url: url.map(|u| u.to_string()),
            });
        }

        resolution
    }

    /// Run the pipeline up to the in-memory manifest, stamped with `now`.
    pub async fn assemble_at<Tz>(
        &self,
        snapshot: &BuildSnapshot,
        now: &DateTime<Tz>,
    ) -> AssemblerResult<(TweakerManifest, AssemblyReport)>
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        let root = &snapshot.root_project;
        let current = snapshot.current_project();

        let candidates = collect_candidate_dependencies(root, current, &self.settings)?;
        info!("Found {} dependencies", candidates.len());

        let classpath = current.runtime_classpath(&self.settings.source_set)?;
        let runtime = filter_to_runtime_artifacts(&candidates, classpath);
        info!(
            "{} of {} classpath entries are known dependencies",
            runtime.len(),
            classpath.len()
        );

        let mc_version = self.minecraft_version(snapshot)?;
        let resolution = self.resolve_libraries(&runtime, &snapshot.repositories).await;

        let report = AssemblyReport {
            output: PathBuf::new(),
            candidates: candidates.len(),
            runtime_artifacts: runtime.len(),
            libraries: resolution.libraries.len(),
            libraries_with_url: resolution
                .libraries
                .iter()
                .filter(|l| l.url.is_some())
                .count(),
            dropped_without_group: resolution.dropped_without_group,
            unattributed_files: runtime.unattributed.len(),
        };

        Ok((assemble_manifest(&mc_version, resolution.libraries, now), report))
    }

    /// Assemble the manifest for `snapshot` and write it to `out`.
    pub async fn run(&self, snapshot: &BuildSnapshot, out: &Path) -> AssemblerResult<AssemblyReport> {
        info!("Assembling tweaker json");

        let (manifest, mut report) = self.assemble_at(snapshot, &Local::now()).await?;

        if let Err(e) = write_manifest(&manifest, out).await {
            error!("Failed to write tweaker json to {:?}: {}", out, e);
            return Err(e);
        }

        report.output = out.to_path_buf();
        info!(
            "Wrote {} libraries ({} with download URL, from {} candidates) to {:?}",
            report.libraries, report.libraries_with_url, report.candidates, out
        );
        Ok(report)
    }
}
