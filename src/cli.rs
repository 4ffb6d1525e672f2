use std::path::PathBuf;

use clap::Parser;

use crate::core::error::AssemblerResult;
use crate::core::settings::AssemblerSettings;

/// Assemble the launcher version JSON for a tweaker client build.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Build snapshot exported by the build host
    #[arg(long, value_name = "FILE")]
    pub snapshot: PathBuf,

    /// Where to write the version JSON
    #[arg(short, long, value_name = "FILE")]
    pub out: PathBuf,

    /// Assembler settings (JSON)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Target game version (overrides the project property)
    #[arg(long, value_name = "VERSION")]
    pub minecraft_version: Option<String>,

    /// Source set whose runtime classpath is inspected
    #[arg(long, value_name = "NAME")]
    pub source_set: Option<String>,
}

impl Cli {
    /// Settings file (or defaults) with command line overrides applied.
    pub fn settings(&self) -> AssemblerResult<AssemblerSettings> {
        let mut settings = match &self.config {
            Some(path) => AssemblerSettings::load(path)?,
            None => AssemblerSettings::default(),
        };

        if let Some(version) = &self.minecraft_version {
            settings.minecraft_version = Some(version.clone());
        }
        if let Some(source_set) = &self.source_set {
            settings.source_set = source_set.clone();
        }

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_apply_on_top_of_defaults() {
        let cli = Cli::parse_from([
            "tweaker-assembler",
            "--snapshot",
            "build/snapshot.json",
            "-o",
            "dist/tweaker.json",
            "--minecraft-version",
            "1.12.2",
            "--source-set",
            "launch",
        ]);

        let settings = cli.settings().unwrap();
        assert_eq!(settings.minecraft_version.as_deref(), Some("1.12.2"));
        assert_eq!(settings.source_set, "launch");
        assert_eq!(settings.version_property, "minecraft_version");
    }

    #[test]
    fn snapshot_and_out_are_required() {
        assert!(Cli::try_parse_from(["tweaker-assembler", "--snapshot", "s.json"]).is_err());
    }
}
