use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;
use crate::constants::{SETTINGS_BACKUP_SUFFIX, SETTINGS_DIR_NAME, SETTINGS_FILE_NAME};
use crate::error::{BrowserError, Result};
use crate::types::Settings;

// settings.json の読み書き（読み込み失敗時は .backup を読む）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    // 設定ディレクトリを取得
    pub fn default_location() -> Result<Self> {
        dirs::config_dir()
            .map(|p| Self::at(p.join(SETTINGS_DIR_NAME).join(SETTINGS_FILE_NAME)))
            .ok_or(BrowserError::MissingHostDirectory("config"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn backup_path(&self) -> PathBuf {
        let mut backup = self.path.clone().into_os_string();
        backup.push(SETTINGS_BACKUP_SUFFIX);
        PathBuf::from(backup)
    }

    pub fn read(&self) -> Result<Settings> {
        match read_document(&self.path) {
            Ok(settings) => Ok(settings),
            Err(e) => {
                warn!("設定ファイル読み込みエラー: {} - {}", self.path.display(), e);

                let backup = self.backup_path();
                read_document(&backup).map_err(|source| BrowserError::SettingsUnavailable {
                    backup,
                    source: Box::new(source),
                })
            }
        }
    }

    /// 全体を整形済み JSON で上書き保存
    pub fn write(&self, settings: &Settings) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(settings)?;
        fs::write(&self.path, json)?;

        Ok(())
    }
}

fn read_document(path: &Path) -> Result<Settings> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
