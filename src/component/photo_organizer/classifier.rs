//! 依拍攝日期決定目的資料夾

use crate::tools::{
    MetadataReader, ORIGINAL_CAPTURE_TAG, SourceFileEntry, TagMap, parse_capture_date,
};
use log::debug;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("無法開啟檔案 {}: {source}", .path.display())]
    FileUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// 已開啟、等待分類的來源檔案
pub struct OpenedSource<'a> {
    entry: &'a SourceFileEntry,
    reader: BufReader<File>,
}

pub struct DestinationClassifier<'a, M: MetadataReader> {
    metadata_reader: &'a M,
    target_root: &'a Path,
}

impl<'a, M: MetadataReader> DestinationClassifier<'a, M> {
    pub const fn new(metadata_reader: &'a M, target_root: &'a Path) -> Self {
        Self {
            metadata_reader,
            target_root,
        }
    }

    /// 以二進位模式開啟來源檔案
    pub fn open<'e>(
        &self,
        entry: &'e SourceFileEntry,
    ) -> Result<OpenedSource<'e>, ClassifyError> {
        let file = File::open(&entry.path).map_err(|source| ClassifyError::FileUnreadable {
            path: entry.path.clone(),
            source,
        })?;

        Ok(OpenedSource {
            entry,
            reader: BufReader::new(file),
        })
    }

    /// 讀取中繼資料並決定目的資料夾
    ///
    /// 有可解析的拍攝時間時回傳 `<root>/YYYY/MM/DD/`，否則回傳 `<root>/`。
    pub fn destination(&self, mut opened: OpenedSource<'_>) -> PathBuf {
        let tags = self.metadata_reader.read_tags(&mut opened.reader);
        self.destination_from_tags(opened.entry, &tags)
    }

    fn destination_from_tags(&self, entry: &SourceFileEntry, tags: &TagMap) -> PathBuf {
        let Some(raw) = tags.get(ORIGINAL_CAPTURE_TAG) else {
            debug!("沒有拍攝時間，放在根目錄: {}", entry.path.display());
            return self.target_root.to_path_buf();
        };

        match parse_capture_date(raw) {
            Some(date) => {
                debug!("拍攝時間 {}: {}", date.datetime(), entry.path.display());
                self.target_root.join(date.day_bucket())
            }
            None => {
                debug!(
                    "拍攝時間格式錯誤 ({raw:?})，放在根目錄: {}",
                    entry.path.display()
                );
                self.target_root.to_path_buf()
            }
        }
    }
}
