use std::fs::{self, File, OpenOptions};
use std::io::{self, ErrorKind};
use std::path::Path;
use zip::result::{ZipError, ZipResult};
use zip::ZipArchive;
use crate::constants::PREVIEW_ENTRY_NAME;

/// 1 アーカイブ分の展開結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extraction {
    Extracted,
    /// プレビュー画像を持たないアーカイブ（エラーではない）
    MissingPreview,
    /// 展開先に既にファイルがある（上書きしない）
    DestinationExists,
}

// SKM ファイル（ZIP）から埋め込みサムネイルを取り出す
pub fn extract_preview(archive_path: &Path, destination: &Path) -> ZipResult<Extraction> {
    let file = File::open(archive_path)?;
    let mut archive = ZipArchive::new(file)?;

    let mut entry = match archive.by_name(PREVIEW_ENTRY_NAME) {
        Ok(entry) => entry,
        Err(ZipError::FileNotFound) => return Ok(Extraction::MissingPreview),
        Err(e) => return Err(e),
    };

    // 既存ファイルは上書きしない
    let mut output = match OpenOptions::new().write(true).create_new(true).open(destination) {
        Ok(output) => output,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => return Ok(Extraction::DestinationExists),
        Err(e) => return Err(e.into()),
    };

    if let Err(e) = io::copy(&mut entry, &mut output) {
        // 書きかけのファイルを残さない
        drop(output);
        let _ = fs::remove_file(destination);
        return Err(e.into());
    }

    Ok(Extraction::Extracted)
}
