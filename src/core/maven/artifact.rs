use std::fmt;

use crate::core::error::{AssemblerError, AssemblerResult};

/// A fully qualified Maven jar artifact, ready to be laid out on a repository.
///
/// Only `groupId:artifactId:version` is accepted; launchers load jars, so
/// classifiers and `@packaging` suffixes are rejected rather than guessed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MavenArtifact {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
}

impl MavenArtifact {
    pub fn new(group_id: &str, artifact_id: &str, version: &str) -> Self {
        Self {
            group_id: group_id.to_string(),
            artifact_id: artifact_id.to_string(),
            version: version.to_string(),
        }
    }

    /// Parse a Maven coordinate string.
    pub fn parse(coord: &str) -> AssemblerResult<Self> {
        if coord.contains('@') {
            return Err(AssemblerError::InvalidMavenCoordinate(coord.to_string()));
        }

        let parts: Vec<&str> = coord.split(':').collect();

        match parts.as_slice() {
            [group, artifact, version]
                if !group.is_empty() && !artifact.is_empty() && !version.is_empty() =>
            {
                Ok(Self::new(group, artifact, version))
            }
            _ => Err(AssemblerError::InvalidMavenCoordinate(coord.to_string())),
        }
    }

    /// Construct the group path portion (`com/google/code/gson`).
    pub fn group_path(&self) -> String {
        self.group_id.replace('.', "/")
    }

    /// `artifactId-version.jar`
    pub fn filename(&self) -> String {
        format!("{}-{}.jar", self.artifact_id, self.version)
    }

    /// Construct the full URL for this artifact under the given repository base.
    ///
    /// Template:
    /// `<repo>/<group_path>/<artifact_id>/<version>/<filename>`
    pub fn url(&self, repo_base: &str) -> String {
        let base = repo_base.trim_end_matches('/');
        format!(
            "{}/{}/{}/{}/{}",
            base,
            self.group_path(),
            self.artifact_id,
            self.version,
            self.filename()
        )
    }
}

impl fmt::Display for MavenArtifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group_id, self.artifact_id, self.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_coordinate() {
        let a = MavenArtifact::parse("net.minecraft:launchwrapper:1.12").unwrap();
        assert_eq!(a.group_id, "net.minecraft");
        assert_eq!(a.artifact_id, "launchwrapper");
        assert_eq!(a.version, "1.12");
        assert_eq!(a.filename(), "launchwrapper-1.12.jar");
    }

    #[test]
    fn parse_rejects_packaging_suffix() {
        assert!(matches!(
            MavenArtifact::parse("com.foo:bar:1.0@zip"),
            Err(AssemblerError::InvalidMavenCoordinate(c)) if c == "com.foo:bar:1.0@zip"
        ));
    }

    #[test]
    fn parse_rejects_classifiers_and_short_forms() {
        assert!(MavenArtifact::parse("org.lwjgl:lwjgl:3.3.3:natives-linux").is_err());
        assert!(MavenArtifact::parse("lwjgl:3.3.3").is_err());
        assert!(MavenArtifact::parse(":lwjgl:3.3.3").is_err());
    }

    #[test]
    fn url_construction() {
        let a = MavenArtifact::new("org.spongepowered", "mixin", "0.7.11-SNAPSHOT");
        assert_eq!(
            a.url("https://repo.spongepowered.org/maven"),
            "https://repo.spongepowered.org/maven/org/spongepowered/mixin/0.7.11-SNAPSHOT/mixin-0.7.11-SNAPSHOT.jar"
        );
    }

    #[test]
    fn url_construction_normalizes_trailing_slash() {
        let a = MavenArtifact::new("com.foo", "bar", "1.0");
        assert_eq!(
            a.url("https://repo.test/"),
            "https://repo.test/com/foo/bar/1.0/bar-1.0.jar"
        );
    }
}
