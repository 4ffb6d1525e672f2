use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::{AssemblerError, AssemblerResult};
use crate::core::http::DEFAULT_USER_AGENT;

/// Configurations the mod toolchain populates with the game itself. They never
/// contribute libraries to the manifest.
pub const DEFAULT_INTERNAL_CONFIGURATIONS: [&str; 4] = [
    "minecraft",
    "minecraftClient",
    "minecraftServer",
    "minecraftLibraries",
];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct AssemblerSettings {
    /// Source set whose runtime classpath decides which libraries ship.
    pub source_set: String,
    /// Project property holding the target game version.
    pub version_property: String,
    /// Explicit game version; wins over `version_property`.
    pub minecraft_version: Option<String>,
    pub internal_configurations: Vec<String>,
    pub user_agent: String,
}

impl Default for AssemblerSettings {
    fn default() -> Self {
        Self {
            source_set: "main".to_string(),
            version_property: "minecraft_version".to_string(),
            minecraft_version: None,
            internal_configurations: DEFAULT_INTERNAL_CONFIGURATIONS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl AssemblerSettings {
    /// Load settings from a JSON file. Missing keys keep their defaults.
    pub fn load(path: &Path) -> AssemblerResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| AssemblerError::io(path, e))?;
        Ok(serde_json::from_str(&raw)?)
    }

    pub fn is_internal(&self, configuration: &str) -> bool {
        self.internal_configurations.iter().any(|c| c == configuration)
    }
}
