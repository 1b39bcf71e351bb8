//! Environment/runtime helpers
//!
//! Sanity checks to ensure expected directories exist at startup.

use tracing::{info, warn};

/// Ensure the data directory exists and is a directory.
pub async fn ensure_env(data_dir: &str) -> anyhow::Result<()> {
    if data_dir.trim().is_empty() {
        return Err(anyhow::anyhow!("data directory must not be empty"));
    }
    match tokio::fs::metadata(data_dir).await {
        Ok(meta) if !meta.is_dir() => {
            return Err(anyhow::anyhow!("{data_dir} exists but is not a directory"));
        }
        Ok(_) => {}
        Err(_) => {
            warn!(%data_dir, "data directory not found; creating it");
        }
    }
    tokio::fs::create_dir_all(data_dir)
        .await
        .map_err(|e| anyhow::anyhow!("cannot create {data_dir}: {e}"))?;
    info!(%data_dir, "data directory ready");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn creates_missing_data_dir() -> anyhow::Result<()> {
        let dir = std::env::temp_dir().join(format!("section_titles_env_{}", uuid::Uuid::new_v4()));
        let dir_str = dir.to_string_lossy().to_string();
        ensure_env(&dir_str).await?;
        assert!(tokio::fs::metadata(&dir).await?.is_dir());
        let _ = tokio::fs::remove_dir_all(&dir).await;
        Ok(())
    }

    #[tokio::test]
    async fn rejects_file_in_place_of_dir() -> anyhow::Result<()> {
        let path = std::env::temp_dir().join(format!("section_titles_env_{}.txt", uuid::Uuid::new_v4()));
        tokio::fs::write(&path, b"x").await?;
        let res = ensure_env(&path.to_string_lossy()).await;
        assert!(res.is_err());
        let _ = tokio::fs::remove_file(&path).await;
        Ok(())
    }

    #[tokio::test]
    async fn rejects_empty_path() {
        assert!(ensure_env("  ").await.is_err());
    }
}
