// ─── Tweaker Manifest ───
// The launcher version JSON that inherits from the vanilla version and starts
// the client through LaunchWrapper with our tweaker.

use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};

pub const LAUNCH_WRAPPER_MAIN_CLASS: &str = "net.minecraft.launchwrapper.Launch";
pub const TWEAKER_CLASS: &str = "baritone.launch.BaritoneTweaker";
pub const RELEASE_TYPE: &str = "release";

/// `yyyy-MM-dd'T'HH:mm:ssZ`, numeric offset without a colon.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";

/// Serialized field order is the launcher's expected order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TweakerManifest {
    pub id: String,
    #[serde(rename = "type")]
    pub version_type: String,
    pub inherits_from: String,
    pub jar: String,
    pub time: String,
    pub release_time: String,
    pub downloads: serde_json::Map<String, serde_json::Value>,
    pub minimum_launcher_version: u32,
    pub main_class: String,
    pub arguments: ManifestArguments,
    pub libraries: Vec<ManifestLibrary>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ManifestArguments {
    pub game: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ManifestLibrary {
    /// `group:name:version`
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

pub fn format_timestamp<Tz>(time: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    time.format(TIMESTAMP_FORMAT).to_string()
}

/// Build the manifest for `mc_version`. `libraries` must already be sorted.
pub fn assemble_manifest<Tz>(
    mc_version: &str,
    libraries: Vec<ManifestLibrary>,
    now: &DateTime<Tz>,
) -> TweakerManifest
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let time = format_timestamp(now);

    TweakerManifest {
        id: mc_version.to_string(),
        version_type: RELEASE_TYPE.to_string(),
        inherits_from: mc_version.to_string(),
        jar: mc_version.to_string(),
        time: time.clone(),
        release_time: time,
        downloads: serde_json::Map::new(),
        minimum_launcher_version: 0,
        main_class: LAUNCH_WRAPPER_MAIN_CLASS.to_string(),
        arguments: ManifestArguments {
            game: vec!["--tweakClass".to_string(), TWEAKER_CLASS.to_string()],
        },
        libraries,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn new_year(offset_secs: i32) -> DateTime<FixedOffset> {
        FixedOffset::east_opt(offset_secs)
            .unwrap()
            .with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
            .unwrap()
    }

    #[test]
    fn timestamp_has_numeric_offset_without_colon() {
        assert_eq!(format_timestamp(&new_year(0)), "2024-01-01T00:00:00+0000");
        assert_eq!(
            format_timestamp(&new_year(-5 * 3600)),
            "2024-01-01T00:00:00-0500"
        );
    }

    #[test]
    fn fixed_fields_follow_version() {
        let manifest = assemble_manifest("1.12.2", vec![], &new_year(0));
        assert_eq!(manifest.id, "1.12.2");
        assert_eq!(manifest.inherits_from, "1.12.2");
        assert_eq!(manifest.jar, "1.12.2");
        assert_eq!(manifest.version_type, "release");
        assert_eq!(manifest.time, manifest.release_time);
        assert_eq!(manifest.minimum_launcher_version, 0);
        assert!(manifest.downloads.is_empty());
        assert!(manifest.libraries.is_empty());
    }

    #[test]
    fn serializes_in_launcher_layout() {
        let manifest = assemble_manifest(
            "1.12.2",
            vec![
                ManifestLibrary {
                    name: "group:artifact:1.0".into(),
                    url: Some("https://repo.example/group/artifact/1.0/artifact-1.0.jar".into()),
                },
                ManifestLibrary {
                    name: "group2:artifact2:2.0".into(),
                    url: None,
                },
            ],
            &new_year(0),
        );

        let value = serde_json::to_value(&manifest).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": "1.12.2",
                "type": "release",
                "inheritsFrom": "1.12.2",
                "jar": "1.12.2",
                "time": "2024-01-01T00:00:00+0000",
                "releaseTime": "2024-01-01T00:00:00+0000",
                "downloads": {},
                "minimumLauncherVersion": 0,
                "mainClass": "net.minecraft.launchwrapper.Launch",
                "arguments": { "game": ["--tweakClass", "baritone.launch.BaritoneTweaker"] },
                "libraries": [
                    { "name": "group:artifact:1.0", "url": "https://repo.example/group/artifact/1.0/artifact-1.0.jar" },
                    { "name": "group2:artifact2:2.0" }
                ]
            })
        );
    }

    #[test]
    fn top_level_key_order_is_stable() {
        let manifest = assemble_manifest("1.12.2", vec![], &new_year(0));
        let text = serde_json::to_string(&manifest).unwrap();
        let keys = [
            "\"id\"",
            "\"type\"",
            "\"inheritsFrom\"",
            "\"jar\"",
            "\"time\"",
            "\"releaseTime\"",
            "\"downloads\"",
            "\"minimumLauncherVersion\"",
            "\"mainClass\"",
            "\"arguments\"",
            "\"libraries\"",
        ];
        let positions: Vec<usize> = keys.iter().map(|k| text.find(k).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
