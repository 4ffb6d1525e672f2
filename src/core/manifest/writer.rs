use std::path::Path;

use tokio::io::AsyncWriteExt;
use tracing::debug;

use super::model::TweakerManifest;
use crate::core::error::{AssemblerError, AssemblerResult};

/// Write `manifest` as pretty-printed JSON, replacing any existing file.
///
/// Creates parent directories as needed. The file handle is dropped before
/// returning on every path.
pub async fn write_manifest(manifest: &TweakerManifest, dest: &Path) -> AssemblerResult<()> {
    if let Some(parent) = dest.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| AssemblerError::io(parent, e))?;
    }

    let bytes = serde_json::to_vec_pretty(manifest)?;

    {
        let mut file = tokio::fs::File::create(dest)
            .await
            .map_err(|e| AssemblerError::io(dest, e))?;
        file.write_all(&bytes)
            .await
            .map_err(|e| AssemblerError::io(dest, e))?;
        file.flush().await.map_err(|e| AssemblerError::io(dest, e))?;
    }

    debug!("Wrote {} bytes to {:?}", bytes.len(), dest);
    Ok(())
}
