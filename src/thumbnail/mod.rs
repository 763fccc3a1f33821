pub mod skm;

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use glob::{glob_with, MatchOptions, Pattern};
use tracing::{debug, info, warn};
use crate::cache::CacheStore;
use crate::constants::{ARCHIVE_EXTENSION, PREVIEW_EXTENSION, PREVIEW_MARKER};
use crate::error::Result;
use crate::host::{HostPlatform, MaterialRoots};
use crate::path_utils::path_to_uri;
use crate::types::{display_name_of, MaterialRecord};
use self::skm::{extract_preview, Extraction};

// ルート以下のすべての .skm に一致する glob パターン
pub fn archive_pattern(root: &Path, platform: HostPlatform) -> String {
    let escaped_root = Pattern::escape(&root.to_string_lossy());
    let pattern = Path::new(&escaped_root)
        .join("**")
        .join(format!("*.{}", ARCHIVE_EXTENSION))
        .to_string_lossy()
        .into_owned();

    // Windows の区切り文字のままだと一致しないので "/" に直す
    match platform {
        HostPlatform::Windows => pattern.replace('\\', "/"),
        HostPlatform::MacOs => pattern,
    }
}

// ドットで始まるファイル・ディレクトリは対象外。Windows では大文字小文字を区別しない
pub fn match_options(platform: HostPlatform) -> MatchOptions {
    MatchOptions {
        case_sensitive: platform != HostPlatform::Windows,
        require_literal_leading_dot: true,
        ..MatchOptions::new()
    }
}

// "<表示名> #SKM-<n>.png"
pub fn preview_file_name(archive_path: &Path, counter: usize) -> String {
    format!(
        "{}{}{}.{}",
        display_name_of(archive_path),
        PREVIEW_MARKER,
        counter,
        PREVIEW_EXTENSION
    )
}

/// 両ルートの SKM ファイルからサムネイルを展開し、カタログ用レコードを返す。
///
/// 個々のアーカイブの失敗はスキップするだけで、スキャン全体は止めない。
/// キャッシュディレクトリが使えない場合とパターン不正の場合のみエラー。
pub fn scan_materials(roots: &MaterialRoots, cache: &CacheStore) -> Result<Vec<MaterialRecord>> {
    cache.ensure_exists()?;

    let stock_pattern = archive_pattern(&roots.stock, roots.platform);
    let custom_pattern = archive_pattern(&roots.custom, roots.platform);

    info!("SKMスキャン開始: {} / {}", stock_pattern, custom_pattern);

    let options = match_options(roots.platform);
    let matches = glob_with(&stock_pattern, options)?.chain(glob_with(&custom_pattern, options)?);

    let mut records = Vec::new();
    let mut seen: HashSet<PathBuf> = HashSet::new();
    let mut counter = 0;

    for entry in matches {
        let archive_path = match entry {
            Ok(path) => path,
            Err(e) => {
                warn!("ディレクトリ走査エラー: {}", e);
                continue;
            }
        };

        // ルートが重なっていても同じファイルは 1 回だけ
        if !seen.insert(archive_path.clone()) {
            continue;
        }

        counter += 1;

        if let Some(record) = index_archive(&archive_path, counter, cache) {
            records.push(record);
        }
    }

    info!("SKMスキャン完了: {}件中{}件を登録", counter, records.len());

    Ok(records)
}

fn index_archive(archive_path: &Path, counter: usize, cache: &CacheStore) -> Option<MaterialRecord> {
    let destination = cache.cache_path().join(preview_file_name(archive_path, counter));

    match extract_preview(archive_path, &destination) {
        Ok(Extraction::Extracted) => Some(MaterialRecord::new(
            archive_path,
            path_to_uri(&destination),
        )),
        Ok(Extraction::MissingPreview) => {
            debug!("プレビューなし: {}", archive_path.display());
            None
        }
        Ok(Extraction::DestinationExists) => {
            debug!("展開先が既に存在: {}", destination.display());
            None
        }
        Err(e) => {
            debug!("SKM読み込みエラー: {} - {}", archive_path.display(), e);
            None
        }
    }
}
