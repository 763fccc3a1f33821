// マテリアルアーカイブ（中身は ZIP コンテナ）
pub const ARCHIVE_EXTENSION: &str = "skm";

// アーカイブ内のプレビュー画像エントリ名
pub const PREVIEW_ENTRY_NAME: &str = "doc_thumbnail.png";

// サムネイルキャッシュディレクトリ名（一時ディレクトリ直下）
pub const CACHE_DIR_NAME: &str = "SketchUp MBR Plugin Thumbnails";

// 同名アーカイブの衝突を避けるためのサムネイル名マーカー
pub const PREVIEW_MARKER: &str = " #SKM-";
pub const PREVIEW_EXTENSION: &str = "png";

// 設定ファイル
pub const SETTINGS_DIR_NAME: &str = "material-browser";
pub const SETTINGS_FILE_NAME: &str = "settings.json";
pub const SETTINGS_BACKUP_SUFFIX: &str = ".backup";

// ホストのメジャーバージョンに付ける年の接頭辞（21 -> "2021"）
pub const YEAR_PREFIX: &str = "20";
