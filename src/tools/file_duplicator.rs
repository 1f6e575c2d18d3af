use anyhow::{Context, Result};
use filetime::{FileTime, set_file_times};
use std::fs;
use std::path::Path;

pub trait FileDuplicator {
    /// 將 `source` 複製到 `destination`，目的檔已存在時直接覆寫
    fn duplicate(&self, source: &Path, destination: &Path) -> Result<()>;
}

/// 複製內容、權限與存取 / 修改時間
#[derive(Debug, Default, Clone, Copy)]
pub struct MetadataPreservingCopier;

impl FileDuplicator for MetadataPreservingCopier {
    fn duplicate(&self, source: &Path, destination: &Path) -> Result<()> {
        fs::copy(source, destination).with_context(|| {
            format!("複製檔案失敗: {} -> {}", source.display(), destination.display())
        })?;

        let metadata = fs::metadata(source)
            .with_context(|| format!("無法讀取檔案資訊: {}", source.display()))?;
        fs::set_permissions(destination, metadata.permissions())
            .with_context(|| format!("無法設定權限: {}", destination.display()))?;

        set_file_times(
            destination,
            FileTime::from_last_access_time(&metadata),
            FileTime::from_last_modification_time(&metadata),
        )
        .with_context(|| format!("無法設定檔案時間: {}", destination.display()))?;

        Ok(())
    }
}
