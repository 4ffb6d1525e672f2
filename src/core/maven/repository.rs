use std::fmt;

use reqwest::Url;
use serde::{Deserialize, Serialize};

/// Repository layouts a build can declare. Only Maven layouts can be probed.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum RepositoryKind {
    #[default]
    Maven,
    Ivy,
    FlatDir,
    #[serde(other)]
    Other,
}

/// One entry of the build's repository list, in declaration order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repository {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub kind: RepositoryKind,
    #[serde(default)]
    pub url: Option<String>,
}

/// Why a repository was not consulted for a lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    NotMaven(RepositoryKind),
    NoUrl,
    UnsupportedScheme(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NotMaven(kind) => write!(f, "{kind:?} layout is not probed"),
            SkipReason::NoUrl => f.write_str("no base URL"),
            SkipReason::UnsupportedScheme(scheme) => write!(f, "unsupported scheme '{scheme}'"),
        }
    }
}

/// Outcome of classifying a repository before probing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositoryBase {
    Http(Url),
    Skipped(SkipReason),
    Invalid { url: String, reason: String },
}

impl Repository {
    pub fn maven(name: &str, url: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: RepositoryKind::Maven,
            url: Some(url.to_string()),
        }
    }

    /// Base URL for Maven-layout lookups, if this repository has a usable one.
    pub fn http_base(&self) -> RepositoryBase {
        if self.kind != RepositoryKind::Maven {
            return RepositoryBase::Skipped(SkipReason::NotMaven(self.kind));
        }
        let Some(raw) = self.url.as_deref() else {
            return RepositoryBase::Skipped(SkipReason::NoUrl);
        };

        match Url::parse(raw) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => RepositoryBase::Http(url),
            Ok(url) => {
                RepositoryBase::Skipped(SkipReason::UnsupportedScheme(url.scheme().to_string()))
            }
            Err(e) => RepositoryBase::Invalid {
                url: raw.to_string(),
                reason: e.to_string(),
            },
        }
    }

    /// Name for log lines; falls back to the URL for anonymous repositories.
    pub fn label(&self) -> &str {
        if !self.name.is_empty() {
            return &self.name;
        }
        self.url.as_deref().unwrap_or("<unnamed>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn https_maven_repository_is_usable() {
        let repo = Repository::maven("central", "https://repo1.maven.org/maven2/");
        match repo.http_base() {
            RepositoryBase::Http(url) => assert_eq!(url.host_str(), Some("repo1.maven.org")),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn local_file_repository_is_skipped() {
        let repo = Repository::maven("local", "file:///home/user/.m2/repository");
        assert_eq!(
            repo.http_base(),
            RepositoryBase::Skipped(SkipReason::UnsupportedScheme("file".into()))
        );
    }

    #[test]
    fn ivy_and_flat_dir_are_skipped() {
        let repos: Vec<Repository> = serde_json::from_value(serde_json::json!([
            { "name": "ivy", "kind": "ivy", "url": "https://ivy.example" },
            { "name": "libs", "kind": "flatDir" },
            { "name": "weird", "kind": "p2" }
        ]))
        .unwrap();
        assert_eq!(
            repos[0].http_base(),
            RepositoryBase::Skipped(SkipReason::NotMaven(RepositoryKind::Ivy))
        );
        assert_eq!(
            repos[1].http_base(),
            RepositoryBase::Skipped(SkipReason::NotMaven(RepositoryKind::FlatDir))
        );
        assert_eq!(repos[2].kind, RepositoryKind::Other);
    }

    #[test]
    fn kind_defaults_to_maven() {
        let repo: Repository =
            serde_json::from_value(serde_json::json!({ "url": "https://maven.example/" })).unwrap();
        assert_eq!(repo.kind, RepositoryKind::Maven);
        assert_eq!(repo.label(), "https://maven.example/");
    }

    #[test]
    fn malformed_url_is_reported() {
        let repo = Repository::maven("broken", "not a url");
        assert!(matches!(repo.http_base(), RepositoryBase::Invalid { .. }));
    }

    #[test]
    fn missing_url_is_skipped() {
        let repo = Repository {
            name: "nothing".into(),
            kind: RepositoryKind::Maven,
            url: None,
        };
        assert_eq!(repo.http_base(), RepositoryBase::Skipped(SkipReason::NoUrl));
    }
}
