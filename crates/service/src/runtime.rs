//! Runtime environment helpers
//!
//! Thin wrapper around `common::env` to keep binary crates importing
//! `service::runtime::ensure_env` without depending directly on `common`.

/// Ensure the upload directory exists.
pub async fn ensure_env(uploads_dir: &str) -> anyhow::Result<()> {
    common::env::ensure_env(uploads_dir).await
}
