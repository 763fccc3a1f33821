use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;
use crate::constants::CACHE_DIR_NAME;
use crate::error::{BrowserError, Result};

// サムネイルキャッシュディレクトリ（プロセス単位で使い回す）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheStore {
    cache_dir: PathBuf,
}

impl CacheStore {
    pub fn new(temp_root: impl AsRef<Path>) -> Self {
        Self {
            cache_dir: temp_root.as_ref().join(CACHE_DIR_NAME),
        }
    }

    // OS の一時ディレクトリ直下
    pub fn system() -> Self {
        Self::new(std::env::temp_dir())
    }

    pub fn cache_path(&self) -> &Path {
        &self.cache_dir
    }

    /// ディレクトリがなければ親ごと作成する
    pub fn ensure_exists(&self) -> Result<()> {
        if self.cache_dir.is_dir() {
            return Ok(());
        }
        fs::create_dir_all(&self.cache_dir).map_err(|source| BrowserError::CacheUnavailable {
            path: self.cache_dir.clone(),
            source,
        })?;
        debug!("キャッシュディレクトリ作成: {}", self.cache_dir.display());
        Ok(())
    }

    /// 中身ごと削除する（存在しなければ何もしない）
    pub fn remove_all(&self) -> Result<()> {
        if !self.cache_dir.exists() {
            return Ok(());
        }
        fs::remove_dir_all(&self.cache_dir).map_err(|source| BrowserError::CacheUnavailable {
            path: self.cache_dir.clone(),
            source,
        })?;
        debug!("キャッシュディレクトリ削除: {}", self.cache_dir.display());
        Ok(())
    }

    // 診断用: 展開済みのプレビュー画像一覧
    pub fn preview_files(&self) -> Vec<PathBuf> {
        if !self.cache_dir.is_dir() {
            return Vec::new();
        }

        let mut files: Vec<PathBuf> = WalkDir::new(&self.cache_dir)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| entry.into_path())
            .collect();

        files.sort_by(|a, b| natord::compare(&a.to_string_lossy(), &b.to_string_lossy()));
        files
    }
}
