use std::path::{Path, PathBuf};
use chrono::{DateTime, Utc};
use serde::Serialize;
use crate::constants::ARCHIVE_EXTENSION;

/// カタログの 1 件分（UI が読む）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MaterialRecord {
    source_path: PathBuf,
    display_name: String,
    preview_uri: String,
}

impl MaterialRecord {
    // 表示名は元アーカイブのパスから導出する
    pub fn new(source_path: impl Into<PathBuf>, preview_uri: impl Into<String>) -> Self {
        let source_path = source_path.into();
        let display_name = display_name_of(&source_path);
        Self {
            source_path,
            display_name,
            preview_uri: preview_uri.into(),
        }
    }

    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn preview_uri(&self) -> &str {
        &self.preview_uri
    }
}

// ファイル名から ".skm" を取り除いたもの（"Oak.SKM" も "Oak"）
pub fn display_name_of(path: &Path) -> String {
    let file_name = path
        .file_name()
        .unwrap_or_default()
        .to_string_lossy();
    let suffix = format!(".{}", ARCHIVE_EXTENSION);

    let Some(split) = file_name.len().checked_sub(suffix.len()) else {
        return file_name.into_owned();
    };
    if !file_name.is_char_boundary(split) || !file_name[split..].eq_ignore_ascii_case(&suffix) {
        return file_name.into_owned();
    }
    file_name[..split].to_string()
}

/// 直近のスキャン結果。スキャンごとに丸ごと置き換える。
#[derive(Debug, Clone, Default, Serialize)]
pub struct CatalogSnapshot {
    pub records: Vec<MaterialRecord>,
    /// 未スキャンなら None
    pub indexed_at: Option<DateTime<Utc>>,
}

impl CatalogSnapshot {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn find(&self, source_path: &Path) -> Option<&MaterialRecord> {
        self.records.iter().find(|r| r.source_path == source_path)
    }
}
