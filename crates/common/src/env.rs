//! Environment/runtime helpers
//!
//! Sanity checks to ensure expected directories exist at startup.

use std::path::Path;

use tracing::{info, warn};

/// Make sure the directory holding `data_file` exists; warn when the file
/// itself is missing (the store will create it).
pub async fn ensure_data_dir(data_file: &str) -> anyhow::Result<()> {
    let path = Path::new(data_file);
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| anyhow::anyhow!("cannot create {}: {e}", parent.display()))?;
    }
    if tokio::fs::metadata(path).await.is_err() {
        warn!(%data_file, "data file not found; an empty collection will be created");
    } else {
        info!(%data_file, "using existing data file");
    }
    Ok(())
}
