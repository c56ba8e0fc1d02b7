//! Runtime environment helpers
//!
//! Thin wrapper around `common::env` to keep binary crates importing
//! `service::runtime::ensure_data_dir` without depending directly on `common`.

/// Ensure the directory for the data file exists.
pub async fn ensure_data_dir(data_file: &str) -> anyhow::Result<()> {
    common::env::ensure_data_dir(data_file).await
}
