//! 入力パスからアップロード対象を収集
//!
//! ディレクトリ引数はドラッグ&ドロップ扱い（画像以外を除外）、
//! ファイル引数はファイル選択扱い（フィルタなし）。

mod mime;

pub use mime::guess_mime;

use crate::error::{InspectorError, Result};
use aoi_common::{Notice, UploadCollector, UploadedFile};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 収集中に出た通知
#[derive(Debug, Default)]
pub struct ScanReport {
    pub notices: Vec<Notice>,
    /// ディレクトリ内で除外されたファイル数
    pub skipped: usize,
}

pub fn collect_paths(
    paths: &[PathBuf],
    recursive: bool,
    collector: &mut UploadCollector,
) -> Result<ScanReport> {
    let mut report = ScanReport::default();

    for path in paths {
        if !path.exists() {
            return Err(InspectorError::PathNotFound(path.display().to_string()));
        }

        if path.is_dir() {
            let files = scan_dir(path, recursive);
            let offered = files.len();
            let before = collector.len();
            if let Some(notice) = collector.add_dropped(files) {
                report.notices.push(notice);
            }
            let skipped = offered - (collector.len() - before);
            if skipped > 0 {
                tracing::debug!(dir = %path.display(), skipped, "non-image files filtered out");
            }
            report.skipped += skipped;
        } else {
            let file = describe_file(path)?;
            report.notices.push(collector.add_picked([file]));
        }
    }

    Ok(report)
}

/// ディレクトリ直下（recursive時は配下全体）のファイルをファイル名順で列挙
fn scan_dir(dir: &Path, recursive: bool) -> Vec<UploadedFile> {
    let max_depth = if recursive { usize::MAX } else { 1 };

    let mut entries: Vec<PathBuf> = WalkDir::new(dir)
        .max_depth(max_depth)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .collect();

    entries.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    entries
        .iter()
        .filter_map(|path| describe_file(path).ok())
        .collect()
}

fn describe_file(path: &Path) -> Result<UploadedFile> {
    let size = std::fs::metadata(path)?.len();
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    Ok(UploadedFile::new(name, guess_mime(path), size))
}
