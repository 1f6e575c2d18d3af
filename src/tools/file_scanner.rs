use anyhow::{Context, Result};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 來源資料夾第一層中的單一檔案
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFileEntry {
    pub name: OsString,
    pub path: PathBuf,
}

/// 列出資料夾第一層的一般檔案（不遞迴、不含子資料夾與特殊檔案）
///
/// 指向一般檔案的符號連結會保留；指向資料夾或已失效的連結則排除。
///
/// 順序依檔案系統回傳的順序，不保證排序。
/// 來源資料夾無法讀取時直接回傳錯誤，不做部分列舉。
pub fn scan_top_level_files(directory: &Path) -> Result<Vec<SourceFileEntry>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(directory)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
    {
        let entry =
            entry.with_context(|| format!("無法讀取來源資料夾: {}", directory.display()))?;

        let file_type = entry.file_type();
        let is_regular = file_type.is_file() || (file_type.is_symlink() && entry.path().is_file());
        if !is_regular {
            continue;
        }

        files.push(SourceFileEntry {
            name: entry.file_name().to_owned(),
            path: entry.into_path(),
        });
    }

    Ok(files)
}
