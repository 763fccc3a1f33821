use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BrowserError {
    /// ホストが未対応のプラットフォーム識別子を渡した
    #[error("サポートされていないプラットフォーム: {0}")]
    UnsupportedPlatform(String),

    #[error("ホストディレクトリを特定できません: {0}")]
    MissingHostDirectory(&'static str),

    #[error("キャッシュディレクトリを利用できません: {}: {source}", .path.display())]
    CacheUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("検索パターンが不正です: {0}")]
    InvalidPattern(#[from] glob::PatternError),

    /// 本体とバックアップの両方が読めなかった
    #[error("設定ファイルを読み込めません: {}: {source}", .backup.display())]
    SettingsUnavailable {
        backup: PathBuf,
        #[source]
        source: Box<BrowserError>,
    },

    #[error("マテリアルがカタログに存在しません: {}", .0.display())]
    UnknownMaterial(PathBuf),

    #[error("ホスト連携エラー: {0}")]
    Host(#[from] anyhow::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] io::Error),

    #[error("JSONエラー: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BrowserError>;
