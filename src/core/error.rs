use std::path::PathBuf;
use thiserror::Error;

/// Central error type for the assembler.
/// Every module returns `Result<T, AssemblerError>`.
#[derive(Debug, Error)]
pub enum AssemblerError {
    // ── IO ──────────────────────────────────────────────
    #[error("IO error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    // ── Network ─────────────────────────────────────────
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid repository URL {url}: {reason}")]
    InvalidRepositoryUrl { url: String, reason: String },

    // ── Maven ───────────────────────────────────────────
    #[error("Invalid Maven coordinate: {0}")]
    InvalidMavenCoordinate(String),

    // ── JSON ────────────────────────────────────────────
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ── Build snapshot ──────────────────────────────────
    #[error("Could not resolve configuration '{configuration}' of project '{project}': {reason}")]
    Resolution {
        project: String,
        configuration: String,
        reason: String,
    },

    #[error("Project property '{0}' is not set")]
    MissingProperty(String),

    #[error("Source set '{source_set}' not found in project '{project}'")]
    UnknownSourceSet { project: String, source_set: String },

    // ── Generic ─────────────────────────────────────────
    #[error("{0}")]
    Other(String),
}

/// Convenience alias used throughout the crate.
pub type AssemblerResult<T> = Result<T, AssemblerError>;

impl From<std::io::Error> for AssemblerError {
    fn from(source: std::io::Error) -> Self {
        AssemblerError::Io {
            path: PathBuf::new(),
            source,
        }
    }
}

impl AssemblerError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AssemblerError::Io {
            path: path.into(),
            source,
        }
    }
}
