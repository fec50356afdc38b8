use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;

use super::{FileStorage, StorageError};

/// Writes files under a local directory, created on demand.
#[derive(Clone)]
pub struct LocalStorage {
    dir: PathBuf,
}

impl LocalStorage {
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self { Self { dir: dir.into() } }

    pub fn dir(&self) -> &std::path::Path { &self.dir }
}

/// `{unix millis}{name}` with path separators and other unsafe characters
/// replaced, so the result always stays inside the storage directory.
pub fn stored_name(original_name: &str) -> Result<String, StorageError> {
    let base = original_name.rsplit(['/', '\\']).next().unwrap_or_default();
    let cleaned: String = base
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') { c } else { '_' })
        .collect();
    if cleaned.trim_matches('.').is_empty() {
        return Err(StorageError::InvalidName(original_name.to_string()));
    }
    Ok(format!("{}{}", chrono::Utc::now().timestamp_millis(), cleaned))
}

#[async_trait]
impl FileStorage for LocalStorage {
    async fn write_file(&self, original_name: &str, bytes: &[u8]) -> Result<String, StorageError> {
        let name = stored_name(original_name)?;
        fs::create_dir_all(&self.dir).await?;
        fs::write(self.dir.join(&name), bytes).await?;
        debug!(file = %name, size = bytes.len(), "file_stored");
        Ok(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_names_are_flattened() {
        let name = stored_name("../../etc/passwd").unwrap();
        assert!(name.ends_with("passwd"));
        assert!(!name.contains('/'));
        assert!(stored_name("my cover.png").unwrap().ends_with("my_cover.png"));
        assert!(stored_name("..").is_err());
        assert!(stored_name("").is_err());
    }

    #[tokio::test]
    async fn writes_into_the_directory() {
        let dir = std::env::temp_dir().join(models::ids::new_id("covers"));
        let storage = LocalStorage::new(&dir);
        let name = storage.write_file("cover.jpg", b"jpeg-bytes").await.unwrap();
        let written = tokio::fs::read(dir.join(&name)).await.unwrap();
        assert_eq!(written, b"jpeg-bytes");
        tokio::fs::remove_dir_all(&dir).await.ok();
    }
}
