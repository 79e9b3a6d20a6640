use crate::domain::ports::ResultsContainer;
use crate::utils::error::Result;
use std::path::{Path, PathBuf};

/// 把渲染結果寫成檔案的結果容器，每次寫入都覆蓋舊內容
#[derive(Debug, Clone)]
pub struct FileContainer {
    path: PathBuf,
}

impl FileContainer {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ResultsContainer for FileContainer {
    async fn replace_content(&self, html: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        tokio::fs::write(&self.path, html).await?;
        tracing::debug!("Wrote {} bytes to {}", html.len(), self.path.display());
        Ok(())
    }
}
