use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::artifact::MavenArtifact;
use crate::core::error::AssemblerError;

/// A declared dependency as the build sees it. File and project dependencies
/// have no group, so `group` is optional.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "CoordinateRepr")]
pub struct Coordinate {
    pub group: Option<String>,
    pub name: String,
    pub version: String,
}

/// Accepts both `"group:name:version"` and `{ "group", "name", "version" }`.
#[derive(Deserialize)]
#[serde(untagged)]
enum CoordinateRepr {
    Notation(String),
    Fields {
        #[serde(default)]
        group: Option<String>,
        name: String,
        #[serde(default)]
        version: Option<String>,
    },
}

impl TryFrom<CoordinateRepr> for Coordinate {
    type Error = AssemblerError;

    fn try_from(repr: CoordinateRepr) -> Result<Self, Self::Error> {
        match repr {
            CoordinateRepr::Notation(s) => s.parse(),
            CoordinateRepr::Fields {
                group,
                name,
                version,
            } => {
                if name.is_empty() {
                    return Err(AssemblerError::InvalidMavenCoordinate(format!(
                        "{}:{}:{}",
                        group.unwrap_or_default(),
                        name,
                        version.unwrap_or_default()
                    )));
                }
                Ok(Self {
                    group: group.filter(|g| !g.is_empty()),
                    name,
                    version: version.unwrap_or_default(),
                })
            }
        }
    }
}

impl Coordinate {
    pub fn new(group: Option<&str>, name: &str, version: &str) -> Self {
        Self {
            group: group.map(str::to_string),
            name: name.to_string(),
            version: version.to_string(),
        }
    }

    /// Synthetic identity `group:name:version`, also used as the library name.
    pub fn key(&self) -> String {
        format!(
            "{}:{}:{}",
            self.group.as_deref().unwrap_or_default(),
            self.name,
            self.version
        )
    }

    /// The jar this dependency would be published as. `None` without a group
    /// or version, since neither can be laid out on a Maven repository.
    pub fn artifact(&self) -> Option<MavenArtifact> {
        let group = self.group.as_deref()?;
        if self.version.is_empty() {
            return None;
        }
        Some(MavenArtifact::new(group, &self.name, &self.version))
    }
}

impl FromStr for Coordinate {
    type Err = AssemblerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let artifact = MavenArtifact::parse(s)?;
        Ok(Self {
            group: Some(artifact.group_id),
            name: artifact.artifact_id,
            version: artifact.version,
        })
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}
